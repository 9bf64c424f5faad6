mod comments_tests;
mod recovery_tests;

use crate::Diagnostics;
use crate::ast::{AstPrinter, Resource};
use crate::parser::Parser;

#[track_caller]
fn expect_valid(source: &str) -> String {
    let resource = Parser::new().parse(source);
    assert_no_junk(&resource);
    AstPrinter::new(&resource).dump()
}

#[track_caller]
fn expect_valid_with_spans(source: &str) -> String {
    let resource = Parser::new().with_spans(true).parse(source);
    assert_no_junk(&resource);
    AstPrinter::new(&resource).with_spans(true).dump()
}

/// Plain diagnostics, one line per junk annotation.
#[track_caller]
fn expect_invalid(source: &str) -> String {
    expect_invalid_with(Parser::new(), source)
}

#[track_caller]
fn expect_invalid_with(parser: Parser, source: &str) -> String {
    let resource = parser.parse(source);
    let diagnostics = Diagnostics::from_resource(&resource);
    if diagnostics.is_empty() {
        panic!(
            "Expected junk, got a valid resource:\n{}",
            AstPrinter::new(&resource).dump()
        );
    }
    diagnostics.printer().render()
}

/// Tree dump whether or not the source is valid.
fn dump(source: &str) -> String {
    AstPrinter::new(&Parser::new().parse(source)).dump()
}

#[track_caller]
fn assert_no_junk(resource: &Resource) {
    let diagnostics = Diagnostics::from_resource(resource);
    if !diagnostics.is_empty() {
        panic!(
            "Expected valid resource, got error:\n{}",
            diagnostics.printer().render()
        );
    }
}
