//! Canonical rendering of syntax trees back into FTL source.
//!
//! Layout rules:
//!
//! - Patterns stay on the line of their `=` unless they contain a select
//!   expression or span several lines, in which case they start on a new line
//!   indented by four spaces. A pattern whose first text starts with `[`, `.`
//!   or `*` never moves to a new line, since such a line would be misread as a
//!   variant or attribute.
//! - Continuation lines, attributes and variants are indented by four spaces
//!   relative to their parent; the default variant's `*` takes the last of
//!   those columns.
//! - `Whitespace` entries are written verbatim; `Junk` only when enabled.


use std::fmt::Write;

use crate::ast::{
    CallArguments, Entry, Expression, Literal, Message, NamedArgument, Pattern, PatternElement,
    Placeable, Resource, SelectExpression, Term, TopLevel, Variant, VariantKey,
};
use crate::{Error, Result};

/// Serializer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Serializer {
    with_junk: bool,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `Junk` entries back out instead of dropping them.
    pub fn with_junk(mut self, value: bool) -> Self {
        self.with_junk = value;
        self
    }

    pub fn serialize<N: Render + ?Sized>(&self, node: &N) -> Result<String> {
        let mut out = String::new();
        node.render(self, &mut out)?;
        Ok(out)
    }

    /// Streams the rendering of `node` into `out`. A resource is written one
    /// entry at a time.
    pub fn serialize_into<N: Render + ?Sized, W: Write>(&self, node: &N, out: &mut W) -> Result<()> {
        node.render(self, out)
    }
}

/// Nodes the serializer can render on their own.
pub trait Render {
    fn render<W: Write>(&self, serializer: &Serializer, out: &mut W) -> Result<()>;
}

impl Render for Resource {
    fn render<W: Write>(&self, serializer: &Serializer, out: &mut W) -> Result<()> {
        tracing::debug!(items = self.body.len(), junk = serializer.with_junk, "serializing resource");
        for item in &self.body {
            match item {
                TopLevel::Junk(_) if !serializer.with_junk => {}
                item => item.render(serializer, out)?,
            }
        }
        Ok(())
    }
}

/// Junk is always written when rendered on its own.
impl Render for TopLevel {
    fn render<W: Write>(&self, serializer: &Serializer, out: &mut W) -> Result<()> {
        match self {
            TopLevel::Entry(entry) => entry.render(serializer, out),
            TopLevel::Junk(junk) => Ok(out.write_str(&junk.content)?),
            TopLevel::Whitespace(whitespace) => Ok(out.write_str(&whitespace.content)?),
        }
    }
}

impl Render for Entry {
    fn render<W: Write>(&self, _serializer: &Serializer, out: &mut W) -> Result<()> {
        match self {
            Entry::Message(message) => out.write_str(&message_text(message)?)?,
            Entry::Term(term) => out.write_str(&term_text(term)?)?,
            Entry::Comment(comment) => out.write_str(&comment_text("#", &comment.content))?,
            Entry::GroupComment(comment) => out.write_str(&comment_text("##", &comment.content))?,
            Entry::ResourceComment(comment) => {
                out.write_str(&comment_text("###", &comment.content))?
            }
        }
        Ok(())
    }
}

impl Render for Expression {
    fn render<W: Write>(&self, _serializer: &Serializer, out: &mut W) -> Result<()> {
        Ok(out.write_str(&expression_text(self)?)?)
    }
}

impl Render for VariantKey {
    fn render<W: Write>(&self, _serializer: &Serializer, out: &mut W) -> Result<()> {
        Ok(out.write_str(variant_key_text(self))?)
    }
}

fn comment_text(prefix: &str, content: &str) -> String {
    let mut out = String::new();
    for line in content.split('\n') {
        out.push_str(prefix);
        if !line.is_empty() {
            out.push(' ');
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

fn message_text(message: &Message) -> Result<String> {
    if message.value.is_none() && message.attributes.is_empty() {
        return Err(Error::EmptyMessage(message.id.name.clone()));
    }

    let mut out = String::new();
    if let Some(comment) = &message.comment {
        out.push_str(&comment_text("#", &comment.content));
    }
    write!(out, "{} =", message.id.name)?;
    if let Some(value) = &message.value {
        out.push_str(&pattern_text(value)?);
    }
    for attribute in &message.attributes {
        write!(out, "\n    .{} ={}", attribute.id.name, indent(&pattern_text(&attribute.value)?))?;
    }
    out.push('\n');
    Ok(out)
}

fn term_text(term: &Term) -> Result<String> {
    let mut out = String::new();
    if let Some(comment) = &term.comment {
        out.push_str(&comment_text("#", &comment.content));
    }
    write!(out, "-{} ={}", term.id.name, pattern_text(&term.value)?)?;
    for attribute in &term.attributes {
        write!(out, "\n    .{} ={}", attribute.id.name, indent(&pattern_text(&attribute.value)?))?;
    }
    out.push('\n');
    Ok(out)
}

/// Pattern text including its leading separator: a space, or a line break
/// and indentation for block layout.
fn pattern_text(pattern: &Pattern) -> Result<String> {
    let mut content = String::new();
    for element in &pattern.elements {
        match element {
            PatternElement::TextElement(text) => content.push_str(&text.value),
            PatternElement::Placeable(placeable) => content.push_str(&placeable_text(placeable)?),
        }
    }
    let content = indent(&content);

    if starts_on_new_line(pattern) {
        Ok(format!("\n    {content}"))
    } else {
        Ok(format!(" {content}"))
    }
}

fn starts_on_new_line(pattern: &Pattern) -> bool {
    if let Some(PatternElement::TextElement(first)) = pattern.elements.first()
        && first.value.starts_with(['[', '.', '*'])
    {
        return false;
    }

    pattern.elements.iter().any(|element| match element {
        PatternElement::TextElement(text) => text.value.contains('\n'),
        PatternElement::Placeable(placeable) => is_select_expression(placeable),
    })
}

fn is_select_expression(placeable: &Placeable) -> bool {
    match &placeable.expression {
        Expression::SelectExpression(_) => true,
        Expression::Placeable(inner) => is_select_expression(inner),
        _ => false,
    }
}

fn placeable_text(placeable: &Placeable) -> Result<String> {
    Ok(match &placeable.expression {
        Expression::Placeable(inner) => format!("{{{}}}", placeable_text(inner)?),
        // The select expression ends with its own line break.
        expression @ Expression::SelectExpression(_) => {
            format!("{{ {}}}", expression_text(expression)?)
        }
        expression => format!("{{ {} }}", expression_text(expression)?),
    })
}

fn expression_text(expression: &Expression) -> Result<String> {
    Ok(match expression {
        Expression::StringLiteral(literal) => format!("\"{}\"", literal.value),
        Expression::NumberLiteral(literal) => literal.value.clone(),
        Expression::VariableReference(reference) => format!("${}", reference.id.name),
        Expression::MessageReference(reference) => match &reference.attribute {
            Some(attribute) => format!("{}.{}", reference.id.name, attribute.name),
            None => reference.id.name.clone(),
        },
        Expression::TermReference(reference) => {
            let mut out = format!("-{}", reference.id.name);
            if let Some(attribute) = &reference.attribute {
                write!(out, ".{}", attribute.name)?;
            }
            if let Some(arguments) = &reference.arguments {
                out.push_str(&call_arguments_text(arguments)?);
            }
            out
        }
        Expression::FunctionReference(reference) => {
            format!("{}{}", reference.id.name, call_arguments_text(&reference.arguments)?)
        }
        Expression::SelectExpression(select) => select_expression_text(select)?,
        Expression::Placeable(placeable) => placeable_text(placeable)?,
    })
}

fn select_expression_text(select: &SelectExpression) -> Result<String> {
    if select.variants.is_empty() {
        return Err(Error::EmptySelectExpression);
    }
    let defaults = select.variants.iter().filter(|variant| variant.default).count();
    if defaults != 1 {
        return Err(Error::DefaultVariantCount(defaults));
    }

    let mut out = format!("{} ->", expression_text(&select.selector)?);
    for variant in &select.variants {
        out.push_str(&variant_text(variant)?);
    }
    out.push('\n');
    Ok(out)
}

fn variant_text(variant: &Variant) -> Result<String> {
    let marker = if variant.default { "   *" } else { "    " };
    Ok(format!(
        "\n{}[{}]{}",
        marker,
        variant_key_text(&variant.key),
        indent(&pattern_text(&variant.value)?)
    ))
}

fn variant_key_text(key: &VariantKey) -> &str {
    match key {
        VariantKey::Identifier(identifier) => &identifier.name,
        VariantKey::NumberLiteral(literal) => &literal.value,
    }
}

fn call_arguments_text(arguments: &CallArguments) -> Result<String> {
    let mut parts = Vec::with_capacity(arguments.positional.len() + arguments.named.len());
    for argument in &arguments.positional {
        parts.push(expression_text(argument)?);
    }
    for argument in &arguments.named {
        parts.push(named_argument_text(argument));
    }
    Ok(format!("({})", parts.join(", ")))
}

fn named_argument_text(argument: &NamedArgument) -> String {
    let value = match &argument.value {
        Literal::StringLiteral(literal) => format!("\"{}\"", literal.value),
        Literal::NumberLiteral(literal) => literal.value.clone(),
    };
    format!("{}: {}", argument.name.name, value)
}

fn indent(content: &str) -> String {
    content.replace('\n', "\n    ")
}
