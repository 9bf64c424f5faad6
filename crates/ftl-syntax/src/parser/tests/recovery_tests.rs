use indoc::indoc;

use super::{dump, expect_invalid};

#[test]
fn junk_between_messages() {
    let input = indoc! {"
        good1 = A
        %%%
        good2 = B
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Resource
      Message
        Identifier "good1"
        Pattern
          TextElement "A"
      Junk "%%%\n"
        Annotation "E0002" "Expected an entry start"
      Message
        Identifier "good2"
        Pattern
          TextElement "B"
    "#);
}

#[test]
fn junk_swallows_lines_that_cannot_start_entries() {
    let input = indoc! {"
        foo = {
          broken
          more
        bar = B
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Resource
      Junk "foo = {\n  broken\n  more\n"
        Annotation "E0003" "Expected token: \"}\"" ["}"]
      Message
        Identifier "bar"
        Pattern
          TextElement "B"
    "#);
    insta::assert_snapshot!(expect_invalid(input), @r#"error[E0003] at 19..19: Expected token: "}""#);
}

#[test]
fn error_on_next_line_keeps_that_entry() {
    let input = indoc! {"
        foo = {
        bar = Bar
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Resource
      Junk "foo = {\n"
        Annotation "E0003" "Expected token: \"}\"" ["}"]
      Message
        Identifier "bar"
        Pattern
          TextElement "Bar"
    "#);
    insta::assert_snapshot!(expect_invalid(input), @r#"error[E0003] at 8..8: Expected token: "}""#);
}

#[test]
fn junk_at_end_without_newline() {
    let input = "foo = Foo\nbar";

    insta::assert_snapshot!(dump(input), @r#"
    Resource
      Message
        Identifier "foo"
        Pattern
          TextElement "Foo"
      Junk "bar"
        Annotation "E0003" "Expected token: \"=\"" ["="]
    "#);
}

#[test]
fn junk_keeps_crlf_verbatim() {
    let input = "%%%\r\nfoo = F\r\n";

    insta::assert_snapshot!(dump(input), @r#"
    Resource
      Junk "%%%\r\n"
        Annotation "E0002" "Expected an entry start"
      Message
        Identifier "foo"
        Pattern
          TextElement "F"
    "#);
}

#[test]
fn junk_resumes_at_comment_and_term() {
    let input = indoc! {"
        %%%
        # Comment
        -term = T
        @@@
        -other = O
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Resource
      Junk "%%%\n"
        Annotation "E0002" "Expected an entry start"
      Term
        Identifier "term"
        Pattern
          TextElement "T"
        Comment "Comment"
      Junk "@@@\n"
        Annotation "E0002" "Expected an entry start"
      Term
        Identifier "other"
        Pattern
          TextElement "O"
    "#);
}

#[test]
fn junk_swallows_trailing_blank_lines() {
    let input = indoc! {"
        foo =

        bar = Bar
    "};

    insta::assert_snapshot!(dump(input), @r#"
    Resource
      Junk "foo =\n\n"
        Annotation "E0005" "Expected message \"foo\" to have a value or attributes" ["foo"]
      Message
        Identifier "bar"
        Pattern
          TextElement "Bar"
    "#);
}

#[test]
fn every_broken_entry_is_reported() {
    let input = indoc! {"
        a = { }
        b = ok
        c = }
        d
    "};

    insta::assert_snapshot!(expect_invalid(input), @r#"
    error[E0028] at 6..6: Expected an inline expression
    error[E0027] at 19..19: Unbalanced closing brace in TextElement.
    error[E0003] at 22..22: Expected token: "="
    "#);
}
