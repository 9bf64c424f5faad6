//! Syntax engine for Fluent (FTL) localization resources.
//!
//! Source text is parsed into a typed [`ast::Resource`] and rendered back into
//! canonical source text by the [`Serializer`]. Parsing never fails: entries
//! that don't follow the grammar are kept as [`ast::Junk`] with an annotation
//! describing the first error found in them.
//!
//! # Example
//!
//! ```
//! use ftl_syntax::ast::{Entry, TopLevel};
//!
//! let source = "hello = Hello, { $name }!\n";
//! let resource = ftl_syntax::parse(source);
//!
//! assert!(matches!(resource.body[0], TopLevel::Entry(Entry::Message(_))));
//! assert_eq!(ftl_syntax::serialize(&resource).unwrap(), source);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod diagnostics;
pub mod parser;
pub mod serializer;

#[cfg(test)]
mod roundtrip_tests;

pub use diagnostics::{Diagnostic, Diagnostics, DiagnosticsPrinter};
pub use parser::{ErrorKind, Parser};
pub use serializer::{Render, Serializer};

/// Errors raised while serializing a tree that violates the AST invariants.
///
/// Parsing itself never fails; these only occur for hand-built or mutated trees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("message `{0}` has neither a value nor attributes")]
    EmptyMessage(String),

    #[error("select expression has no variants")]
    EmptySelectExpression,

    #[error("select expression has {0} default variants, expected exactly one")]
    DefaultVariantCount(usize),

    /// The output sink refused a write.
    #[error("failed to write serialized output")]
    Write(#[from] std::fmt::Error),
}

/// Result type for serialization.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses `source` with the default [`Parser`] configuration (no spans).
pub fn parse(source: &str) -> ast::Resource {
    Parser::new().parse(source)
}

/// Serializes `resource` with the default [`Serializer`] configuration (junk dropped).
pub fn serialize(resource: &ast::Resource) -> Result<String> {
    Serializer::new().serialize(resource)
}
