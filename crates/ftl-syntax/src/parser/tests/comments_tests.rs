use indoc::indoc;

use super::{expect_invalid, expect_valid};

#[test]
fn comment_attaches_to_message() {
    let input = indoc! {"
        # Greeting
        # shown on start
        hello = Hello
    "};

    insta::assert_snapshot!(expect_valid(input), @r#"
    Resource
      Message
        Identifier "hello"
        Pattern
          TextElement "Hello"
        Comment "Greeting\nshown on start"
    "#);
}

#[test]
fn comment_attaches_to_term() {
    let input = indoc! {"
        # Brand
        -brand = Firefox
    "};

    insta::assert_snapshot!(expect_valid(input), @r#"
    Resource
      Term
        Identifier "brand"
        Pattern
          TextElement "Firefox"
        Comment "Brand"
    "#);
}

#[test]
fn blank_line_detaches_comment() {
    let input = indoc! {"
        # Standalone

        hello = Hello
    "};

    insta::assert_snapshot!(expect_valid(input), @r#"
    Resource
      Comment "Standalone"
      Whitespace "\n"
      Message
        Identifier "hello"
        Pattern
          TextElement "Hello"
    "#);
}

#[test]
fn group_and_resource_comments_never_attach() {
    let input = indoc! {"
        ### Resource
        ## Group
        hello = Hello
    "};

    insta::assert_snapshot!(expect_valid(input), @r#"
    Resource
      ResourceComment "Resource"
      GroupComment "Group"
      Message
        Identifier "hello"
        Pattern
          TextElement "Hello"
    "#);
}

#[test]
fn levels_split_comments() {
    let input = indoc! {"
        # One
        ## Two
        # Three
    "};

    insta::assert_snapshot!(expect_valid(input), @r#"
    Resource
      Comment "One"
      GroupComment "Two"
      Comment "Three"
    "#);
}

#[test]
fn empty_comment_lines() {
    let input = indoc! {"
        #
        # Text
        #
    "};

    insta::assert_snapshot!(expect_valid(input), @r#"
    Resource
      Comment "\nText\n"
    "#);
}

#[test]
fn comment_at_end_without_newline() {
    insta::assert_snapshot!(expect_valid("foo = Foo\n#"), @r#"
    Resource
      Message
        Identifier "foo"
        Pattern
          TextElement "Foo"
      Comment ""
    "#);
}

#[test]
fn comment_before_junk_stays_separate() {
    let input = indoc! {"
        # Note
        %%%
    "};

    let resource = crate::parse(input);
    assert_eq!(resource.body.len(), 2);
    assert_eq!(resource.junk().count(), 1);
}

#[test]
fn missing_space_after_hash() {
    insta::assert_snapshot!(expect_invalid("#comment\n"), @r#"error[E0003] at 1..1: Expected token: " ""#);
}

#[test]
fn too_many_hashes() {
    insta::assert_snapshot!(expect_invalid("#### Heading\n"), @r#"error[E0003] at 3..3: Expected token: " ""#);
}
