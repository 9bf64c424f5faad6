//! Canonical formatting of FTL sources.

use std::fs;
use std::io;
use std::path::PathBuf;

use ftl_syntax::Serializer;

use super::check::check_input;
use super::source_loader::{Input, load_input};
use crate::cli::ColorChoice;

pub struct FmtArgs {
    pub input: Option<PathBuf>,
    pub text: Option<String>,
    pub keep_junk: bool,
    pub write: bool,
    pub check: bool,
}

pub fn run(args: FmtArgs) {
    let input = match load_input(args.input.as_deref(), args.text.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if args.write {
        match write_input(&input, args.keep_junk) {
            Ok(true) => tracing::info!(input = %input.name, "rewrote"),
            Ok(false) => {}
            Err(e @ WriteError::Junk { .. }) => {
                if let Some(report) = check_input(&input, ColorChoice::Auto.should_colorize()) {
                    eprintln!("{}", report);
                }
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let formatted = match format_source(&input.text, args.keep_junk) {
        Ok(formatted) => formatted,
        Err(e) => {
            eprintln!("error: {}: {}", input.name, e);
            std::process::exit(1);
        }
    };

    if args.check {
        if formatted != input.text {
            eprintln!("{}: not formatted", input.name);
            std::process::exit(1);
        }
        return;
    }

    print!("{}", formatted);
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("--write needs a file argument")]
    NoPath,
    #[error("{name}: not rewritten, {count} entries have syntax errors (pass --keep-junk to keep them)")]
    Junk { name: String, count: usize },
    #[error("{0}")]
    Format(#[from] ftl_syntax::Error),
    #[error("failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Rewrites the file behind `input` in canonical layout.
///
/// Refuses to touch a file with syntax errors unless `keep_junk` is set, since
/// the broken entries would be lost. Returns whether the file changed.
pub fn write_input(input: &Input, keep_junk: bool) -> Result<bool, WriteError> {
    let Some(path) = &input.path else {
        return Err(WriteError::NoPath);
    };

    let resource = ftl_syntax::parse(&input.text);
    let count = resource.junk().count();
    if count > 0 && !keep_junk {
        return Err(WriteError::Junk {
            name: input.name.clone(),
            count,
        });
    }

    let formatted = Serializer::new().with_junk(keep_junk).serialize(&resource)?;
    if formatted == input.text {
        return Ok(false);
    }

    fs::write(path, &formatted).map_err(|source| WriteError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(true)
}

/// Parses `source` and serializes it back in canonical layout.
///
/// Entries that fail to parse are dropped unless `keep_junk` is set.
pub fn format_source(source: &str, keep_junk: bool) -> ftl_syntax::Result<String> {
    let resource = ftl_syntax::parse(source);

    let junk = resource.junk().count();
    if junk > 0 && !keep_junk {
        tracing::warn!(junk, "dropping entries with syntax errors");
    }

    Serializer::new().with_junk(keep_junk).serialize(&resource)
}
