//! Parse errors collected from the junk of a resource.
//!
//! The parser records errors inside the tree; this module pulls them out into
//! a flat list that can be counted, inspected and rendered against the source.

mod printer;

#[cfg(test)]
mod tests;

use std::fmt;
use std::ops::Range;

use crate::ast::{Junk, Resource};

pub use printer::DiagnosticsPrinter;

/// A single parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    pub arguments: Vec<String>,
    /// Byte offsets of the error. Usually empty: errors point between characters.
    pub range: Range<usize>,
    /// Byte offsets of the enclosing junk; only known when parsed with spans.
    pub junk: Option<Range<usize>>,
}

impl Diagnostic {
    fn from_junk(junk: &Junk) -> impl Iterator<Item = Diagnostic> + '_ {
        let junk_range = junk.span.map(|span| span.start..span.end);
        junk.annotations.iter().map(move |annotation| Diagnostic {
            code: annotation.code.clone(),
            message: annotation.message.clone(),
            arguments: annotation.arguments.clone(),
            range: annotation.span.start..annotation.span.end,
            junk: junk_range.clone(),
        })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error[{}] at {}..{}: {}",
            self.code, self.range.start, self.range.end, self.message
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// Every annotation of every junk entry, in source order.
    pub fn from_resource(resource: &Resource) -> Self {
        Self(resource.junk().flat_map(Diagnostic::from_junk).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    /// Number of diagnostics carrying `code`.
    pub fn count_code(&self, code: &str) -> usize {
        self.0.iter().filter(|d| d.code == code).count()
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
