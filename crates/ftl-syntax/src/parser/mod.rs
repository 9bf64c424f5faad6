//! Recursive-descent parser for FTL resources.
//!
//! # Architecture
//!
//! The parser reads characters straight from a [`stream::Stream`]; there is no
//! separate lexer. Each grammar production is a method returning
//! `Result<Node, ErrorKind>` and errors travel up with `?`.
//!
//! # Recovery Strategy
//!
//! Errors are only caught at entry level. When an entry fails, the text from
//! its start up to the next line that can begin an entry becomes a
//! [`Junk`](crate::ast::Junk) node annotated with the error, and parsing
//! resumes there. One broken entry never affects its neighbours, so `parse`
//! always returns a complete resource.
//!
//! Patterns are parsed in two passes: continuation lines first produce private
//! indent tokens, then a dedent pass strips the common indentation and merges
//! adjacent text.

mod core;
mod error;
mod grammar;
mod stream;

#[cfg(test)]
mod stream_tests;
#[cfg(test)]
mod tests;

pub use error::ErrorKind;

use crate::ast::Resource;
use self::core::ResourceParser;

/// Default bound on placeable nesting.
pub const DEFAULT_RECURSION_LIMIT: u32 = 100;

/// Parser configuration.
///
/// ```
/// use ftl_syntax::Parser;
///
/// let resource = Parser::new().with_spans(true).parse("key = Value\n");
/// assert!(resource.span.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    with_spans: bool,
    recursion_limit: Option<u32>,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            with_spans: false,
            recursion_limit: Some(DEFAULT_RECURSION_LIMIT),
        }
    }
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record source spans on every node.
    pub fn with_spans(mut self, value: bool) -> Self {
        self.with_spans = value;
        self
    }

    /// Bound on placeable nesting; `None` removes it.
    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Parses a whole resource. Never fails; see the module docs on recovery.
    pub fn parse(&self, source: &str) -> Resource {
        ResourceParser::new(source, self.with_spans, self.recursion_limit).parse_resource()
    }
}
