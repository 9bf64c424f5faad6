use crate::ast::{Pattern, PatternElement, Span, TextElement};
use crate::parser::core::ResourceParser;
use crate::parser::error::{ErrorKind, ParseResult};
use crate::parser::stream::EOL;

/// Line ends and indentation preceding a continuation line.
///
/// Only lives between the two pattern passes; `dedent` turns
/// what is left of it into text.
struct Indent {
    value: String,
    span: Span,
}

enum PatternToken {
    Element(PatternElement),
    Indent(Indent),
}

impl ResourceParser<'_> {
    /// A pattern starting on the current line or on an indented line below.
    pub(crate) fn maybe_pattern(&mut self) -> ParseResult<Option<Pattern>> {
        self.stream.peek_blank_inline();
        if self.stream.is_value_start() {
            self.stream.commit_peek();
            return self.pattern(false).map(Some);
        }

        self.stream.peek_blank_block();
        if self.stream.is_value_continuation() {
            self.stream.commit_peek();
            return self.pattern(true).map(Some);
        }

        Ok(None)
    }

    fn pattern(&mut self, is_block: bool) -> ParseResult<Pattern> {
        let start = self.stream.index();
        let mut tokens = Vec::new();
        let mut common_indent = usize::MAX;

        if is_block {
            // The first line's indentation counts towards the common indent,
            // so a block pattern starts with an indent token.
            let indent_start = self.stream.index();
            let first_indent = self.stream.skip_blank_inline();
            common_indent = first_indent.len();
            tokens.push(PatternToken::Indent(Indent {
                value: first_indent.to_string(),
                span: Span::new(indent_start, self.stream.index()),
            }));
        }

        while let Some(ch) = self.stream.current_char() {
            match ch {
                EOL => {
                    let blank_start = self.stream.index();
                    let line_ends = self.stream.peek_blank_block();
                    if !self.stream.is_value_continuation() {
                        self.stream.reset_peek(0);
                        break;
                    }
                    self.stream.commit_peek();
                    let indent = self.stream.skip_blank_inline();
                    common_indent = common_indent.min(indent.len());

                    let mut value = EOL.to_string().repeat(line_ends);
                    value.push_str(indent);
                    tokens.push(PatternToken::Indent(Indent {
                        value,
                        span: Span::new(blank_start, self.stream.index()),
                    }));
                }
                '{' => {
                    let placeable = self.placeable()?;
                    tokens.push(PatternToken::Element(PatternElement::Placeable(placeable)));
                }
                '}' => return Err(ErrorKind::UnbalancedClosingBrace),
                _ => {
                    let text = self.text_element();
                    tokens.push(PatternToken::Element(PatternElement::TextElement(text)));
                }
            }
        }

        Ok(Pattern {
            elements: self.dedent(tokens, common_indent),
            span: self.span_from(start),
        })
    }

    fn text_element(&mut self) -> TextElement {
        let start = self.stream.index();
        while let Some(ch) = self.stream.current_char() {
            if matches!(ch, '{' | '}' | EOL) {
                break;
            }
            self.stream.next();
        }

        TextElement {
            value: self.stream.slice(start, self.stream.index()).to_string(),
            span: self.span_from(start),
        }
    }

    /// Strips `common_indent` columns from every indent token, merges text
    /// with the indents and text following it, and trims trailing blank space
    /// off the end of the pattern.
    fn dedent(&self, tokens: Vec<PatternToken>, common_indent: usize) -> Vec<PatternElement> {
        let mut trimmed: Vec<PatternElement> = Vec::with_capacity(tokens.len());

        for token in tokens {
            let text = match token {
                PatternToken::Element(PatternElement::Placeable(placeable)) => {
                    trimmed.push(PatternElement::Placeable(placeable));
                    continue;
                }
                PatternToken::Element(PatternElement::TextElement(text)) => text,
                PatternToken::Indent(mut indent) => {
                    // Indentation sits after the line ends.
                    let keep = indent.value.len().saturating_sub(common_indent);
                    indent.value.truncate(keep);
                    if indent.value.is_empty() {
                        continue;
                    }
                    TextElement {
                        value: indent.value,
                        span: self.with_spans().then_some(indent.span),
                    }
                }
            };

            if let Some(PatternElement::TextElement(previous)) = trimmed.last_mut() {
                previous.value.push_str(&text.value);
                if let (Some(previous_span), Some(span)) = (previous.span.as_mut(), text.span) {
                    previous_span.end = span.end;
                }
                continue;
            }

            trimmed.push(PatternElement::TextElement(text));
        }

        if let Some(PatternElement::TextElement(last)) = trimmed.last_mut() {
            let len = last.value.trim_end_matches([' ', EOL, '\r']).len();
            last.value.truncate(len);
            if last.value.is_empty() {
                trimmed.pop();
            }
        }

        trimmed
    }
}
