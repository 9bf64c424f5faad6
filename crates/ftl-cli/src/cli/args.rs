//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Input files (positional, repeatable).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Append)
        .help("FTL files to read (use \"-\" for stdin)")
}

/// Single input file (positional).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("FTL file to read (use \"-\" for stdin)")
}

/// Inline source text (-t/--text).
pub fn text_arg() -> Arg {
    Arg::new("text")
        .short('t')
        .long("text")
        .value_name("TEXT")
        .help("Inline FTL source")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Keep entries that failed to parse (--keep-junk).
pub fn keep_junk_arg() -> Arg {
    Arg::new("keep_junk")
        .long("keep-junk")
        .action(ArgAction::SetTrue)
        .help("Keep unparsed entries verbatim instead of dropping them")
}

/// Rewrite the input file (--write).
pub fn write_arg() -> Arg {
    Arg::new("write")
        .long("write")
        .action(ArgAction::SetTrue)
        .help("Rewrite the file in place")
}

/// Report unformatted input instead of printing (--check).
pub fn check_arg() -> Arg {
    Arg::new("check")
        .long("check")
        .action(ArgAction::SetTrue)
        .help("Exit with status 1 if the input is not formatted")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Output JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the tree as JSON")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log progress to stderr (-v info, -vv debug, -vvv trace; RUST_LOG overrides)")
}
