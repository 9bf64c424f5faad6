//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("ftl")
        .about("Parse, check and format Fluent (FTL) localization files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg().global(true))
        .subcommand(check_command())
        .subcommand(fmt_command())
        .subcommand(ast_command())
}

/// Report syntax errors.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Report syntax errors in FTL files")
        .override_usage(
            "\
  ftl check <FILE>...
  ftl check -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  ftl check en-US/main.ftl            # one file
  ftl check locales/*/*.ftl           # many files
  cat main.ftl | ftl check -          # stdin
  ftl check -t 'hello = Hello'        # inline source"#,
        )
        .arg(inputs_arg())
        .arg(text_arg().conflicts_with("inputs"))
        .arg(color_arg())
}

/// Print the canonical serialization.
pub fn fmt_command() -> Command {
    Command::new("fmt")
        .about("Print an FTL file in canonical layout")
        .override_usage(
            "\
  ftl fmt <FILE> [--write | --check]
  ftl fmt -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  ftl fmt main.ftl                    # print formatted source
  ftl fmt main.ftl --write            # rewrite in place
  ftl fmt main.ftl --check            # fail if not formatted
  ftl fmt main.ftl --keep-junk        # keep broken entries verbatim"#,
        )
        .arg(input_arg())
        .arg(text_arg().conflicts_with("input"))
        .arg(keep_junk_arg())
        .arg(write_arg().conflicts_with("check"))
        .arg(check_arg())
}

/// Show the syntax tree.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the syntax tree of an FTL file")
        .override_usage(
            "\
  ftl ast <FILE> [--spans] [--json]
  ftl ast -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  ftl ast main.ftl                    # indented tree
  ftl ast main.ftl --spans            # with byte offsets
  ftl ast -t 'a = { $x }' --json      # JSON"#,
        )
        .arg(input_arg())
        .arg(text_arg().conflicts_with("input"))
        .arg(spans_arg())
        .arg(json_arg())
}
