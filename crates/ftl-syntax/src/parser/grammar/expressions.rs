use std::collections::HashSet;

use crate::ast::{
    CallArguments, Expression, FunctionReference, Identifier, MessageReference, NamedArgument, Placeable,
    SelectExpression, TermReference, VariableReference, Variant, VariantKey,
};
use crate::parser::core::ResourceParser;
use crate::parser::error::{ErrorKind, ParseResult};

enum CallArgument {
    Positional(Expression),
    Named(NamedArgument),
}

impl ResourceParser<'_> {
    /// `{ expression }`
    pub(crate) fn placeable(&mut self) -> ParseResult<Placeable> {
        let start = self.stream.index();
        self.enter_nesting()?;

        self.stream.expect_char('{')?;
        self.stream.skip_blank();
        let expression = self.expression()?;
        self.stream.expect_char('}')?;

        self.exit_nesting();
        Ok(Placeable {
            expression,
            span: self.span_from(start),
        })
    }

    /// An inline expression, or a select expression when `->` follows.
    fn expression(&mut self) -> ParseResult<Expression> {
        let start = self.stream.index();
        let selector = self.inline_expression()?;
        self.stream.skip_blank();

        if self.stream.current_char() == Some('-') && self.stream.peek() == Some('>') {
            match &selector {
                Expression::MessageReference(reference) if reference.attribute.is_none() => {
                    return Err(ErrorKind::MessageReferenceAsSelector);
                }
                Expression::MessageReference(_) => {
                    return Err(ErrorKind::MessageAttributeAsSelector);
                }
                Expression::TermReference(reference) if reference.attribute.is_none() => {
                    return Err(ErrorKind::TermReferenceAsSelector);
                }
                Expression::Placeable(_) => {
                    return Err(ErrorKind::ExpectedSimpleExpressionAsSelector);
                }
                _ => {}
            }

            self.stream.next();
            self.stream.next();
            self.stream.skip_blank_inline();
            self.stream.expect_line_end()?;

            let variants = self.variants()?;
            return Ok(Expression::SelectExpression(Box::new(SelectExpression {
                selector,
                variants,
                span: self.span_from(start),
            })));
        }
        self.stream.reset_peek(0);

        reject_term_attribute(&selector)?;
        Ok(selector)
    }

    pub(crate) fn inline_expression(&mut self) -> ParseResult<Expression> {
        let start = self.stream.index();

        if self.stream.is_number_start() {
            return self.number_literal().map(Expression::NumberLiteral);
        }

        match self.stream.current_char() {
            Some('{') => {
                let placeable = self.placeable()?;
                return Ok(Expression::Placeable(Box::new(placeable)));
            }
            Some('"') => return self.string_literal().map(Expression::StringLiteral),
            Some('$') => {
                self.stream.next();
                let id = self.identifier()?;
                return Ok(Expression::VariableReference(VariableReference {
                    id,
                    span: self.span_from(start),
                }));
            }
            Some('-') => {
                self.stream.next();
                let id = self.identifier()?;
                let attribute = self.attribute_accessor()?;

                self.stream.peek_blank();
                let arguments = if self.stream.current_peek() == Some('(') {
                    self.stream.commit_peek();
                    Some(self.call_arguments()?)
                } else {
                    None
                };

                return Ok(Expression::TermReference(TermReference {
                    id,
                    attribute,
                    arguments,
                    span: self.span_from(start),
                }));
            }
            _ => {}
        }

        if !self.stream.is_identifier_start() {
            return Err(ErrorKind::ExpectedInlineExpression);
        }

        let id = self.identifier()?;
        self.stream.peek_blank();

        if self.stream.current_peek() == Some('(') {
            if !is_callee(&id.name) {
                return Err(ErrorKind::ForbiddenCallee);
            }
            self.stream.commit_peek();
            let arguments = self.call_arguments()?;
            return Ok(Expression::FunctionReference(FunctionReference {
                id,
                arguments,
                span: self.span_from(start),
            }));
        }

        let attribute = self.attribute_accessor()?;
        Ok(Expression::MessageReference(MessageReference {
            id,
            attribute,
            span: self.span_from(start),
        }))
    }

    fn attribute_accessor(&mut self) -> ParseResult<Option<Identifier>> {
        if self.stream.current_char() != Some('.') {
            return Ok(None);
        }
        self.stream.next();
        self.identifier().map(Some)
    }

    /// `( positional, ..., name: literal, ... )`
    fn call_arguments(&mut self) -> ParseResult<CallArguments> {
        let start = self.stream.index();
        let mut positional = Vec::new();
        let mut named = Vec::new();
        let mut names = HashSet::new();

        self.enter_nesting()?;
        self.stream.expect_char('(')?;
        self.stream.skip_blank();

        while self.stream.current_char() != Some(')') {
            match self.call_argument()? {
                CallArgument::Named(argument) => {
                    if !names.insert(argument.name.name.clone()) {
                        return Err(ErrorKind::DuplicatedNamedArgument(argument.name.name));
                    }
                    named.push(argument);
                }
                CallArgument::Positional(_) if !named.is_empty() => {
                    return Err(ErrorKind::PositionalArgumentFollowsNamed);
                }
                CallArgument::Positional(expression) => positional.push(expression),
            }

            self.stream.skip_blank();
            if self.stream.current_char() != Some(',') {
                break;
            }
            self.stream.next();
            self.stream.skip_blank();
        }

        self.stream.expect_char(')')?;

        self.exit_nesting();
        Ok(CallArguments {
            positional,
            named,
            span: self.span_from(start),
        })
    }

    fn call_argument(&mut self) -> ParseResult<CallArgument> {
        let start = self.stream.index();
        let expression = self.inline_expression()?;
        self.stream.skip_blank();

        if self.stream.current_char() != Some(':') {
            reject_term_attribute(&expression)?;
            return Ok(CallArgument::Positional(expression));
        }

        let Expression::MessageReference(MessageReference {
            id: name,
            attribute: None,
            ..
        }) = expression
        else {
            return Err(ErrorKind::ForbiddenKey);
        };

        self.stream.next();
        self.stream.skip_blank();
        let value = self.literal()?;

        Ok(CallArgument::Named(NamedArgument {
            name,
            value,
            span: self.span_from(start),
        }))
    }

    fn variants(&mut self) -> ParseResult<Vec<Variant>> {
        let mut variants: Vec<Variant> = Vec::new();
        let mut has_default = false;

        self.stream.skip_blank();
        while self.stream.is_variant_start() {
            let variant = self.variant(has_default)?;
            has_default |= variant.default;
            variants.push(variant);
            self.stream.expect_line_end()?;
            self.stream.skip_blank();
        }

        if variants.is_empty() {
            return Err(ErrorKind::MissingVariants);
        }
        if !has_default {
            return Err(ErrorKind::MissingDefaultVariant);
        }
        Ok(variants)
    }

    /// `[key] pattern` or `*[key] pattern`
    fn variant(&mut self, has_default: bool) -> ParseResult<Variant> {
        let start = self.stream.index();
        let mut default = false;

        if self.stream.current_char() == Some('*') {
            if has_default {
                return Err(ErrorKind::MultipleDefaultVariants);
            }
            self.stream.next();
            default = true;
        }

        self.stream.expect_char('[')?;
        self.stream.skip_blank();
        let key = self.variant_key()?;
        self.stream.skip_blank();
        self.stream.expect_char(']')?;

        let value = self.maybe_pattern()?.ok_or(ErrorKind::MissingValue)?;

        Ok(Variant {
            key,
            value,
            default,
            span: self.span_from(start),
        })
    }

    fn variant_key(&mut self) -> ParseResult<VariantKey> {
        match self.stream.current_char() {
            None | Some(']') => Err(ErrorKind::MissingVariantKey),
            Some(ch) if ch.is_ascii_digit() || ch == '-' => {
                self.number_literal().map(VariantKey::NumberLiteral)
            }
            Some(_) => self.identifier().map(VariantKey::Identifier),
        }
    }
}

/// Term attributes are private to the term; they may only pick a variant.
fn reject_term_attribute(expression: &Expression) -> ParseResult<()> {
    match expression {
        Expression::TermReference(reference) if reference.attribute.is_some() => {
            Err(ErrorKind::TermAttributeAsPlaceable)
        }
        _ => Ok(()),
    }
}

/// Function names are `[A-Z][A-Z0-9_-]*`.
fn is_callee(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '-')
}
