use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Source text of one input together with a display name for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub name: String,
    /// `None` for stdin and inline text.
    pub path: Option<PathBuf>,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("input is required: use a FILE argument, \"-\" for stdin, or -t/--text")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("failed to read '{}': {source}", .path.display())]
    File { path: PathBuf, source: io::Error },
}

/// Loads a single input. Inline text wins over a path.
pub fn load_input(path: Option<&Path>, text: Option<&str>) -> Result<Input, LoadError> {
    if let Some(text) = text {
        return Ok(inline(text));
    }

    match path {
        Some(path) => load_path(path),
        None => Err(LoadError::Missing),
    }
}

/// Loads every input in argument order.
pub fn load_inputs(paths: &[PathBuf], text: Option<&str>) -> Result<Vec<Input>, LoadError> {
    if let Some(text) = text {
        return Ok(vec![inline(text)]);
    }

    if paths.is_empty() {
        return Err(LoadError::Missing);
    }

    paths.iter().map(|path| load_path(path)).collect()
}

fn inline(text: &str) -> Input {
    Input {
        name: "<text>".to_string(),
        path: None,
        text: text.to_string(),
    }
}

fn load_path(path: &Path) -> Result<Input, LoadError> {
    if path.as_os_str() == "-" {
        return load_stdin();
    }

    let text = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded");

    Ok(Input {
        name: path.to_string_lossy().into_owned(),
        path: Some(path.to_path_buf()),
        text,
    })
}

fn load_stdin() -> Result<Input, LoadError> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(LoadError::Stdin)?;

    Ok(Input {
        name: "<stdin>".to_string(),
        path: None,
        text,
    })
}
