use indoc::indoc;

use super::printer::char_range;
use super::*;
use crate::Parser;

fn collect(source: &str) -> Diagnostics {
    Diagnostics::from_resource(&Parser::new().parse(source))
}

#[test]
fn clean_resource_has_no_diagnostics() {
    let diagnostics = collect("foo = Foo\n");

    assert!(diagnostics.is_empty());
    assert_eq!(diagnostics.len(), 0);
    assert!(diagnostics.printer().source("foo = Foo\n").render().is_empty());
}

#[test]
fn one_diagnostic_per_junk_entry() {
    let source = indoc! {"
        good = Good
        %%%
        bad =
        also-good = Also good
    "};
    let diagnostics = collect(source);

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics.count_code("E0002"), 1);
    assert_eq!(diagnostics.count_code("E0005"), 1);

    let codes: Vec<_> = diagnostics.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, ["E0002", "E0005"]);
}

#[test]
fn diagnostic_carries_arguments() {
    let diagnostics = collect("bad =\n");
    let diagnostic = diagnostics.iter().next().unwrap();

    assert_eq!(diagnostic.arguments, ["bad"]);
    assert_eq!(
        diagnostic.message,
        "Expected message \"bad\" to have a value or attributes"
    );
}

#[test]
fn junk_range_requires_spans() {
    let source = "%%%\n";

    let without = collect(source);
    assert_eq!(without.iter().next().unwrap().junk, None);

    let with = Diagnostics::from_resource(&Parser::new().with_spans(true).parse(source));
    assert_eq!(with.iter().next().unwrap().junk, Some(0..4));
}

#[test]
fn plain_rendering_without_source() {
    let source = indoc! {"
        %%%
        bad =
    "};
    let diagnostics = collect(source);

    insta::assert_snapshot!(diagnostics.printer().render(), @r#"
    error[E0002] at 0..0: Expected an entry start
    error[E0005] at 9..9: Expected message "bad" to have a value or attributes
    "#);
}

#[test]
fn printer_widens_empty_range() {
    let source = "%%%\n";
    let diagnostics = collect(source);

    let result = diagnostics.printer().source(source).render();
    insta::assert_snapshot!(result, @r"
    error[E0002]: Expected an entry start
      |
    1 | %%%
      | ^
    ");
}

#[test]
fn printer_with_path() {
    let source = "%%%\n";
    let diagnostics = collect(source);

    let result = diagnostics.printer().source(source).path("app.ftl").render();
    insta::assert_snapshot!(result, @r"
    error[E0002]: Expected an entry start
     --> app.ftl:1:1
      |
    1 | %%%
      | ^
    ");
}

#[test]
fn printer_points_at_entry_start() {
    let source = indoc! {"
        foo =
            { $sel ->
                [a] A
            }
    "};
    let diagnostics = Diagnostics::from_resource(&Parser::new().with_spans(true).parse(source));

    assert_eq!(diagnostics.count_code("E0010"), 1);
    let result = diagnostics.printer().source(source).render();
    assert!(result.contains("error[E0010]"));
    assert!(result.contains("entry starts here"));
}

#[test]
fn printer_colored() {
    let source = "%%%\n";
    let diagnostics = collect(source);

    let result = diagnostics.printer().source(source).colored(true).render();
    assert!(result.contains("E0002"));
    assert!(result.contains('\x1b'));
}

#[test]
fn char_range_respects_multibyte_characters() {
    assert_eq!(char_range("é", 0..0), 0..2);
    assert_eq!(char_range("ab", 2..2), 2..2);
    assert_eq!(char_range("ab", 0..1), 0..1);
}
