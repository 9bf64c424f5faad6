//! Typed syntax tree for FTL resources.
//!
//! The tree is a plain owned data structure: every node owns its children and
//! optionally records the [`Span`] of source text it was parsed from. Spans are
//! only attached when the parser runs with spans enabled.
//!
//! Node kinds form a closed set, enumerated by [`NodeKind`]. Generic traversal
//! goes through [`NodeRef`], which lists each node's fields explicitly, and the
//! [`Visitor`] trait built on top of it.

mod eq;
mod literals;
mod node;
mod printer;
mod visitor;

#[cfg(test)]
mod visitor_tests;

use serde::Serialize;

pub use eq::{EqOptions, SyntaxEq};
pub use literals::NumberValue;
pub use node::{Field, NodeKind, NodeRef};
pub use printer::AstPrinter;
pub use visitor::{Visitor, walk};

/// Half-open byte range `[start, end)` into the parsed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type")]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} is past its end {end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Root of a parsed file.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(tag = "type")]
pub struct Resource {
    pub body: Vec<TopLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl Resource {
    pub fn new(body: Vec<TopLevel>) -> Self {
        Self { body, span: None }
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.body.iter().filter_map(TopLevel::as_entry)
    }

    pub fn junk(&self) -> impl Iterator<Item = &Junk> {
        self.body.iter().filter_map(|item| match item {
            TopLevel::Junk(junk) => Some(junk),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TopLevel {
    Entry(Entry),
    Junk(Junk),
    Whitespace(Whitespace),
}

impl TopLevel {
    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            TopLevel::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn as_message(&self) -> Option<&Message> {
        match self {
            TopLevel::Entry(Entry::Message(message)) => Some(message),
            _ => None,
        }
    }

    pub fn as_term(&self) -> Option<&Term> {
        match self {
            TopLevel::Entry(Entry::Term(term)) => Some(term),
            _ => None,
        }
    }

    pub fn as_junk(&self) -> Option<&Junk> {
        match self {
            TopLevel::Junk(junk) => Some(junk),
            _ => None,
        }
    }
}

impl From<Entry> for TopLevel {
    fn from(entry: Entry) -> Self {
        TopLevel::Entry(entry)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Message(Message),
    Term(Term),
    Comment(Comment),
    GroupComment(GroupComment),
    ResourceComment(ResourceComment),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct Message {
    pub id: Identifier,
    pub value: Option<Pattern>,
    pub attributes: Vec<Attribute>,
    pub comment: Option<Comment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

/// A term; `id` is stored without the leading `-`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct Term {
    pub id: Identifier,
    pub value: Pattern,
    pub attributes: Vec<Attribute>,
    pub comment: Option<Comment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

macro_rules! comment_node {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Serialize)]
        #[serde(tag = "type")]
        pub struct $name {
            pub content: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub span: Option<Span>,
        }

        impl $name {
            pub fn new(content: impl Into<String>) -> Self {
                Self {
                    content: content.into(),
                    span: None,
                }
            }
        }
    };
}

comment_node!(
    /// `#` comment. Attached to the following message or term when no blank
    /// line separates them.
    Comment
);
comment_node!(
    /// `##` comment.
    GroupComment
);
comment_node!(
    /// `###` comment.
    ResourceComment
);

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct Attribute {
    pub id: Identifier,
    pub value: Pattern,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(tag = "type")]
pub struct Pattern {
    pub elements: Vec<PatternElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl Pattern {
    pub fn new(elements: Vec<PatternElement>) -> Self {
        Self {
            elements,
            span: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PatternElement {
    TextElement(TextElement),
    Placeable(Placeable),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct TextElement {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl TextElement {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            span: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct Placeable {
    pub expression: Expression,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl Placeable {
    pub fn new(expression: Expression) -> Self {
        Self {
            expression,
            span: None,
        }
    }
}

/// Anything that can appear inside `{ }`.
///
/// `Placeable` is the inline nested form `{ { ... } }`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Expression {
    StringLiteral(StringLiteral),
    NumberLiteral(NumberLiteral),
    VariableReference(VariableReference),
    MessageReference(MessageReference),
    TermReference(TermReference),
    FunctionReference(FunctionReference),
    SelectExpression(Box<SelectExpression>),
    Placeable(Box<Placeable>),
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::StringLiteral(literal) => Expression::StringLiteral(literal),
            Literal::NumberLiteral(literal) => Expression::NumberLiteral(literal),
        }
    }
}

/// Literal allowed as a named argument value.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Literal {
    StringLiteral(StringLiteral),
    NumberLiteral(NumberLiteral),
}

/// String literal; `value` is the raw text between the quotes, escapes included.
///
/// Use [`StringLiteral::parse`] for the decoded value.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct StringLiteral {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            span: None,
        }
    }
}

/// Number literal; `value` is the literal's source text.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct NumberLiteral {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl NumberLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            span: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct VariableReference {
    pub id: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct MessageReference {
    pub id: Identifier,
    pub attribute: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct TermReference {
    pub id: Identifier,
    pub attribute: Option<Identifier>,
    pub arguments: Option<CallArguments>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct FunctionReference {
    pub id: Identifier,
    pub arguments: CallArguments,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct SelectExpression {
    pub selector: Expression,
    pub variants: Vec<Variant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct Variant {
    pub key: VariantKey,
    pub value: Pattern,
    pub default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum VariantKey {
    Identifier(Identifier),
    NumberLiteral(NumberLiteral),
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(tag = "type")]
pub struct CallArguments {
    pub positional: Vec<Expression>,
    pub named: Vec<NamedArgument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct NamedArgument {
    pub name: Identifier,
    pub value: Literal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            span: None,
        }
    }
}

/// Source text the parser could not make sense of, kept verbatim.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct Junk {
    pub content: String,
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

/// Error attached to a [`Junk`] entry. Its span locates the error in the source.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct Annotation {
    pub code: String,
    pub message: String,
    pub arguments: Vec<String>,
    pub span: Span,
}

/// Run of blank lines between entries.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub struct Whitespace {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl Whitespace {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            span: None,
        }
    }
}
