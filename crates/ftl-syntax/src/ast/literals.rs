//! Decoding of literal source text.

use std::borrow::Cow;

use super::{NumberLiteral, StringLiteral};

const REPLACEMENT_CHAR: char = '\u{FFFD}';

impl StringLiteral {
    /// Decodes the escape sequences kept raw in `value`.
    ///
    /// `\uXXXX` and `\UXXXXXX` escapes naming a surrogate or a code point above
    /// U+10FFFF decode to U+FFFD. Borrows when there is nothing to decode.
    pub fn parse(&self) -> Cow<'_, str> {
        unescape(&self.value)
    }
}

fn unescape(raw: &str) -> Cow<'_, str> {
    let Some(first_escape) = raw.find('\\') else {
        return Cow::Borrowed(raw);
    };

    let mut decoded = String::with_capacity(raw.len());
    decoded.push_str(&raw[..first_escape]);

    let mut chars = raw[first_escape..].char_indices();
    while let Some((offset, ch)) = chars.next() {
        if ch != '\\' {
            decoded.push(ch);
            continue;
        }

        match chars.next() {
            Some((_, escaped @ ('\\' | '"'))) => decoded.push(escaped),
            Some((_, marker @ ('u' | 'U'))) => {
                let len = if marker == 'u' { 4 } else { 6 };
                let start = first_escape + offset + 2;
                let digits = raw.get(start..start + len);
                decoded.push(digits.map_or(REPLACEMENT_CHAR, decode_code_point));
                for _ in 0..len {
                    if chars.next().is_none() {
                        break;
                    }
                }
            }
            _ => decoded.push(REPLACEMENT_CHAR),
        }
    }

    Cow::Owned(decoded)
}

fn decode_code_point(digits: &str) -> char {
    u32::from_str_radix(digits, 16)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(REPLACEMENT_CHAR)
}

/// Numeric value of a [`NumberLiteral`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberValue {
    pub value: f64,
    /// Number of digits after the decimal point in the source text.
    pub precision: usize,
}

impl NumberLiteral {
    /// Returns `None` when `value` isn't valid number syntax, which only
    /// happens for hand-built nodes.
    pub fn parse(&self) -> Option<NumberValue> {
        let value = self.value.parse::<f64>().ok()?;
        let precision = self
            .value
            .split_once('.')
            .map_or(0, |(_, fraction)| fraction.len());
        Some(NumberValue { value, precision })
    }
}
