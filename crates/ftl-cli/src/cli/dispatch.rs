//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the command `*Args` but keep the unresolved `ColorChoice`,
//! so tests can inspect them without touching the terminal.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::fmt::FmtArgs;

pub struct CheckParams {
    pub inputs: Vec<PathBuf>,
    pub text: Option<String>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: m
                .get_many::<PathBuf>("inputs")
                .map(|paths| paths.cloned().collect())
                .unwrap_or_default(),
            text: m.get_one::<String>("text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            inputs: p.inputs,
            text: p.text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct FmtParams {
    pub input: Option<PathBuf>,
    pub text: Option<String>,
    pub keep_junk: bool,
    pub write: bool,
    pub check: bool,
}

impl FmtParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m.get_one::<PathBuf>("input").cloned(),
            text: m.get_one::<String>("text").cloned(),
            keep_junk: m.get_flag("keep_junk"),
            write: m.get_flag("write"),
            check: m.get_flag("check"),
        }
    }
}

impl From<FmtParams> for FmtArgs {
    fn from(p: FmtParams) -> Self {
        Self {
            input: p.input,
            text: p.text,
            keep_junk: p.keep_junk,
            write: p.write,
            check: p.check,
        }
    }
}

pub struct AstParams {
    pub input: Option<PathBuf>,
    pub text: Option<String>,
    pub spans: bool,
    pub json: bool,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m.get_one::<PathBuf>("input").cloned(),
            text: m.get_one::<String>("text").cloned(),
            spans: m.get_flag("spans"),
            json: m.get_flag("json"),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input: p.input,
            text: p.text,
            spans: p.spans,
            json: p.json,
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
