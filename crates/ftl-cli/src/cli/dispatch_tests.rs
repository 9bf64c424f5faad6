//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Params extraction: correct fields are extracted from ArgMatches
//! 2. Conflicts: inline text and file inputs exclude each other
//! 3. Global flags: -v is accepted after the subcommand

use std::path::PathBuf;

use clap::error::ErrorKind;

use super::*;
use crate::cli::commands::{ast_command, check_command, fmt_command};

#[test]
fn check_collects_many_inputs() {
    let m = check_command()
        .try_get_matches_from(["check", "a.ftl", "b.ftl", "-"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(
        params.inputs,
        [
            PathBuf::from("a.ftl"),
            PathBuf::from("b.ftl"),
            PathBuf::from("-")
        ]
    );
    assert_eq!(params.text, None);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_without_inputs_is_empty() {
    let m = check_command()
        .try_get_matches_from(["check", "-t", "a = A"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert!(params.inputs.is_empty());
    assert_eq!(params.text.as_deref(), Some("a = A"));
}

#[test]
fn check_text_conflicts_with_inputs() {
    let result = check_command().try_get_matches_from(["check", "a.ftl", "-t", "a = A"]);
    assert_eq!(result.err().map(|e| e.kind()), Some(ErrorKind::ArgumentConflict));
}

#[test]
fn color_values() {
    for (value, expected) in [
        ("always", ColorChoice::Always),
        ("never", ColorChoice::Never),
        ("auto", ColorChoice::Auto),
    ] {
        let m = check_command()
            .try_get_matches_from(["check", "a.ftl", "--color", value])
            .unwrap();
        assert_eq!(CheckParams::from_matches(&m).color, expected);
    }

    let result = check_command().try_get_matches_from(["check", "a.ftl", "--color", "sometimes"]);
    assert_eq!(result.err().map(|e| e.kind()), Some(ErrorKind::InvalidValue));
}

#[test]
fn color_choice_resolution() {
    assert!(ColorChoice::Always.should_colorize());
    assert!(!ColorChoice::Never.should_colorize());
}

#[test]
fn fmt_params() {
    let m = fmt_command()
        .try_get_matches_from(["fmt", "main.ftl", "--keep-junk", "--write"])
        .unwrap();
    let params = FmtParams::from_matches(&m);

    assert_eq!(params.input, Some(PathBuf::from("main.ftl")));
    assert!(params.keep_junk);
    assert!(params.write);
    assert!(!params.check);
}

#[test]
fn fmt_write_conflicts_with_check() {
    let result = fmt_command().try_get_matches_from(["fmt", "main.ftl", "--write", "--check"]);
    assert_eq!(result.err().map(|e| e.kind()), Some(ErrorKind::ArgumentConflict));
}

#[test]
fn fmt_accepts_a_single_input() {
    let result = fmt_command().try_get_matches_from(["fmt", "a.ftl", "b.ftl"]);
    assert!(result.is_err());
}

#[test]
fn ast_params() {
    let m = ast_command()
        .try_get_matches_from(["ast", "-t", "a = A", "--spans", "--json"])
        .unwrap();
    let params = AstParams::from_matches(&m);

    assert_eq!(params.input, None);
    assert_eq!(params.text.as_deref(), Some("a = A"));
    assert!(params.spans);
    assert!(params.json);
}

#[test]
fn verbose_is_global() {
    let m = build_cli()
        .try_get_matches_from(["ftl", "ast", "main.ftl", "-vv"])
        .unwrap();
    let (name, sub) = m.subcommand().unwrap();

    assert_eq!(name, "ast");
    assert_eq!(sub.get_count("verbose"), 2);
}

#[test]
fn subcommand_is_required() {
    let result = build_cli().try_get_matches_from(["ftl"]);
    assert!(result.is_err());
}

#[test]
fn help_lists_subcommands() {
    let help = build_cli().render_help().to_string();

    assert!(help.contains("check"));
    assert!(help.contains("fmt"));
    assert!(help.contains("ast"));
    assert!(help.contains("--verbose"));
}
