//! Structural equality between syntax trees.
//!
//! `PartialEq` on nodes uses [`EqOptions::default`], which ignores spans so
//! that trees parsed with and without span tracking compare equal.

use super::*;

/// What [`SyntaxEq::syntax_eq`] disregards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EqOptions {
    pub ignore_span: bool,
    /// Compare the variants of select expressions as unordered collections.
    pub ignore_variant_order: bool,
    /// Compare the attributes of messages and terms as unordered collections.
    pub ignore_attribute_order: bool,
}

impl Default for EqOptions {
    fn default() -> Self {
        Self {
            ignore_span: true,
            ignore_variant_order: false,
            ignore_attribute_order: false,
        }
    }
}

impl EqOptions {
    /// Compares everything, spans included.
    pub fn exact() -> Self {
        Self {
            ignore_span: false,
            ..Self::default()
        }
    }

    pub fn ignore_span(mut self, value: bool) -> Self {
        self.ignore_span = value;
        self
    }

    pub fn ignore_variant_order(mut self, value: bool) -> Self {
        self.ignore_variant_order = value;
        self
    }

    pub fn ignore_attribute_order(mut self, value: bool) -> Self {
        self.ignore_attribute_order = value;
        self
    }
}

/// Field-by-field comparison of two nodes of the same kind.
pub trait SyntaxEq {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool;
}

impl<T: SyntaxEq> SyntaxEq for Option<T> {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.syntax_eq(b, options),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: SyntaxEq> SyntaxEq for Box<T> {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        (**self).syntax_eq(other, options)
    }
}

impl<T: SyntaxEq> SyntaxEq for Vec<T> {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.syntax_eq(b, options))
    }
}

/// Multiset comparison: every element must pair up with a distinct equal one.
fn unordered_eq<T: SyntaxEq>(a: &[T], b: &[T], options: &EqOptions) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut matched = vec![false; b.len()];
    a.iter().all(|left| {
        let found = b
            .iter()
            .enumerate()
            .find(|(i, right)| !matched[*i] && left.syntax_eq(right, options));
        match found {
            Some((i, _)) => {
                matched[i] = true;
                true
            }
            None => false,
        }
    })
}

fn attributes_eq(a: &[Attribute], b: &[Attribute], options: &EqOptions) -> bool {
    if options.ignore_attribute_order {
        unordered_eq(a, b, options)
    } else {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.syntax_eq(y, options))
    }
}

fn span_eq(a: &Option<Span>, b: &Option<Span>, options: &EqOptions) -> bool {
    options.ignore_span || a == b
}

impl SyntaxEq for Resource {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.body.syntax_eq(&other.body, options) && span_eq(&self.span, &other.span, options)
    }
}

impl SyntaxEq for TopLevel {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        match (self, other) {
            (TopLevel::Entry(a), TopLevel::Entry(b)) => a.syntax_eq(b, options),
            (TopLevel::Junk(a), TopLevel::Junk(b)) => a.syntax_eq(b, options),
            (TopLevel::Whitespace(a), TopLevel::Whitespace(b)) => a.syntax_eq(b, options),
            _ => false,
        }
    }
}

impl SyntaxEq for Entry {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        match (self, other) {
            (Entry::Message(a), Entry::Message(b)) => a.syntax_eq(b, options),
            (Entry::Term(a), Entry::Term(b)) => a.syntax_eq(b, options),
            (Entry::Comment(a), Entry::Comment(b)) => a.syntax_eq(b, options),
            (Entry::GroupComment(a), Entry::GroupComment(b)) => a.syntax_eq(b, options),
            (Entry::ResourceComment(a), Entry::ResourceComment(b)) => a.syntax_eq(b, options),
            _ => false,
        }
    }
}

impl SyntaxEq for Message {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.id.syntax_eq(&other.id, options)
            && self.value.syntax_eq(&other.value, options)
            && attributes_eq(&self.attributes, &other.attributes, options)
            && self.comment.syntax_eq(&other.comment, options)
            && span_eq(&self.span, &other.span, options)
    }
}

impl SyntaxEq for Term {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.id.syntax_eq(&other.id, options)
            && self.value.syntax_eq(&other.value, options)
            && attributes_eq(&self.attributes, &other.attributes, options)
            && self.comment.syntax_eq(&other.comment, options)
            && span_eq(&self.span, &other.span, options)
    }
}

macro_rules! content_eq {
    ($($node:ident),* $(,)?) => {
        $(
            impl SyntaxEq for $node {
                fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
                    self.content == other.content && span_eq(&self.span, &other.span, options)
                }
            }
        )*
    };
}

content_eq!(Comment, GroupComment, ResourceComment, Whitespace);

impl SyntaxEq for Junk {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.content == other.content
            && self.annotations.syntax_eq(&other.annotations, options)
            && span_eq(&self.span, &other.span, options)
    }
}

impl SyntaxEq for Annotation {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.code == other.code
            && self.message == other.message
            && self.arguments == other.arguments
            && (options.ignore_span || self.span == other.span)
    }
}

impl SyntaxEq for Attribute {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.id.syntax_eq(&other.id, options)
            && self.value.syntax_eq(&other.value, options)
            && span_eq(&self.span, &other.span, options)
    }
}

impl SyntaxEq for Pattern {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.elements.syntax_eq(&other.elements, options)
            && span_eq(&self.span, &other.span, options)
    }
}

impl SyntaxEq for PatternElement {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        match (self, other) {
            (PatternElement::TextElement(a), PatternElement::TextElement(b)) => {
                a.syntax_eq(b, options)
            }
            (PatternElement::Placeable(a), PatternElement::Placeable(b)) => a.syntax_eq(b, options),
            _ => false,
        }
    }
}

impl SyntaxEq for TextElement {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.value == other.value && span_eq(&self.span, &other.span, options)
    }
}

impl SyntaxEq for Placeable {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.expression.syntax_eq(&other.expression, options)
            && span_eq(&self.span, &other.span, options)
    }
}

impl SyntaxEq for Expression {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        use Expression as E;
        match (self, other) {
            (E::StringLiteral(a), E::StringLiteral(b)) => a.syntax_eq(b, options),
            (E::NumberLiteral(a), E::NumberLiteral(b)) => a.syntax_eq(b, options),
            (E::VariableReference(a), E::VariableReference(b)) => a.syntax_eq(b, options),
            (E::MessageReference(a), E::MessageReference(b)) => a.syntax_eq(b, options),
            (E::TermReference(a), E::TermReference(b)) => a.syntax_eq(b, options),
            (E::FunctionReference(a), E::FunctionReference(b)) => a.syntax_eq(b, options),
            (E::SelectExpression(a), E::SelectExpression(b)) => a.syntax_eq(b, options),
            (E::Placeable(a), E::Placeable(b)) => a.syntax_eq(b, options),
            _ => false,
        }
    }
}

impl SyntaxEq for Literal {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        match (self, other) {
            (Literal::StringLiteral(a), Literal::StringLiteral(b)) => a.syntax_eq(b, options),
            (Literal::NumberLiteral(a), Literal::NumberLiteral(b)) => a.syntax_eq(b, options),
            _ => false,
        }
    }
}

macro_rules! value_eq {
    ($($node:ident),* $(,)?) => {
        $(
            impl SyntaxEq for $node {
                fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
                    self.value == other.value && span_eq(&self.span, &other.span, options)
                }
            }
        )*
    };
}

value_eq!(StringLiteral, NumberLiteral);

impl SyntaxEq for VariableReference {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.id.syntax_eq(&other.id, options) && span_eq(&self.span, &other.span, options)
    }
}

impl SyntaxEq for MessageReference {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.id.syntax_eq(&other.id, options)
            && self.attribute.syntax_eq(&other.attribute, options)
            && span_eq(&self.span, &other.span, options)
    }
}

impl SyntaxEq for TermReference {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.id.syntax_eq(&other.id, options)
            && self.attribute.syntax_eq(&other.attribute, options)
            && self.arguments.syntax_eq(&other.arguments, options)
            && span_eq(&self.span, &other.span, options)
    }
}

impl SyntaxEq for FunctionReference {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.id.syntax_eq(&other.id, options)
            && self.arguments.syntax_eq(&other.arguments, options)
            && span_eq(&self.span, &other.span, options)
    }
}

impl SyntaxEq for SelectExpression {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        let variants_eq = if options.ignore_variant_order {
            unordered_eq(&self.variants, &other.variants, options)
        } else {
            self.variants.syntax_eq(&other.variants, options)
        };
        self.selector.syntax_eq(&other.selector, options)
            && variants_eq
            && span_eq(&self.span, &other.span, options)
    }
}

impl SyntaxEq for Variant {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.key.syntax_eq(&other.key, options)
            && self.value.syntax_eq(&other.value, options)
            && self.default == other.default
            && span_eq(&self.span, &other.span, options)
    }
}

impl SyntaxEq for VariantKey {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        match (self, other) {
            (VariantKey::Identifier(a), VariantKey::Identifier(b)) => a.syntax_eq(b, options),
            (VariantKey::NumberLiteral(a), VariantKey::NumberLiteral(b)) => {
                a.syntax_eq(b, options)
            }
            _ => false,
        }
    }
}

impl SyntaxEq for CallArguments {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.positional.syntax_eq(&other.positional, options)
            && self.named.syntax_eq(&other.named, options)
            && span_eq(&self.span, &other.span, options)
    }
}

impl SyntaxEq for NamedArgument {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.name.syntax_eq(&other.name, options)
            && self.value.syntax_eq(&other.value, options)
            && span_eq(&self.span, &other.span, options)
    }
}

impl SyntaxEq for Identifier {
    fn syntax_eq(&self, other: &Self, options: &EqOptions) -> bool {
        self.name == other.name && span_eq(&self.span, &other.span, options)
    }
}

macro_rules! partial_eq_via_syntax_eq {
    ($($node:ty),* $(,)?) => {
        $(
            impl PartialEq for $node {
                fn eq(&self, other: &Self) -> bool {
                    self.syntax_eq(other, &EqOptions::default())
                }
            }
        )*
    };
}

partial_eq_via_syntax_eq!(
    Resource,
    TopLevel,
    Entry,
    Message,
    Term,
    Comment,
    GroupComment,
    ResourceComment,
    Junk,
    Annotation,
    Whitespace,
    Attribute,
    Pattern,
    PatternElement,
    TextElement,
    Placeable,
    Expression,
    Literal,
    StringLiteral,
    NumberLiteral,
    VariableReference,
    MessageReference,
    TermReference,
    FunctionReference,
    SelectExpression,
    Variant,
    VariantKey,
    CallArguments,
    NamedArgument,
    Identifier,
);
