use crate::ast::{Literal, NumberLiteral, StringLiteral};
use crate::parser::core::ResourceParser;
use crate::parser::error::{ErrorKind, ParseResult};
use crate::parser::stream::EOL;

impl ResourceParser<'_> {
    /// Value of a named argument.
    pub(crate) fn literal(&mut self) -> ParseResult<Literal> {
        if self.stream.is_number_start() {
            return self.number_literal().map(Literal::NumberLiteral);
        }
        if self.stream.current_char() == Some('"') {
            return self.string_literal().map(Literal::StringLiteral);
        }
        Err(ErrorKind::MissingLiteral)
    }

    /// `-?[0-9]+(\.[0-9]+)?`, kept as written.
    pub(crate) fn number_literal(&mut self) -> ParseResult<NumberLiteral> {
        let start = self.stream.index();

        if self.stream.current_char() == Some('-') {
            self.stream.next();
        }
        self.digits()?;

        if self.stream.current_char() == Some('.') {
            self.stream.next();
            self.digits()?;
        }

        Ok(NumberLiteral {
            value: self.stream.slice(start, self.stream.index()).to_string(),
            span: self.span_from(start),
        })
    }

    fn digits(&mut self) -> ParseResult<()> {
        let mut count = 0;
        while self.stream.take_digit().is_some() {
            count += 1;
        }
        if count == 0 {
            return Err(ErrorKind::ExpectedCharRange("0-9"));
        }
        Ok(())
    }

    /// `"..."` on a single line. Escape sequences are validated but kept raw.
    pub(crate) fn string_literal(&mut self) -> ParseResult<StringLiteral> {
        let start = self.stream.index();
        self.stream.expect_char('"')?;

        let mut value = String::new();
        while let Some(ch) = self.stream.take_char(|c| c != '"' && c != EOL) {
            if ch == '\\' {
                self.escape_sequence(&mut value)?;
            } else {
                value.push(ch);
            }
        }

        if self.stream.current_char() != Some('"') {
            return Err(ErrorKind::UnterminatedStringExpression);
        }
        self.stream.next();

        Ok(StringLiteral {
            value,
            span: self.span_from(start),
        })
    }

    /// Validates the escape after a consumed `\` and appends it to `value`
    /// verbatim, backslash included.
    fn escape_sequence(&mut self, value: &mut String) -> ParseResult<()> {
        match self.stream.current_char() {
            Some(ch @ ('\\' | '"')) => {
                self.stream.next();
                value.push('\\');
                value.push(ch);
                Ok(())
            }
            Some(marker @ 'u') => self.unicode_escape(marker, 4, value),
            Some(marker @ 'U') => self.unicode_escape(marker, 6, value),
            Some(ch) => Err(ErrorKind::UnknownEscapeSequence(ch.to_string())),
            None => Err(ErrorKind::UnknownEscapeSequence("EOF".to_string())),
        }
    }

    fn unicode_escape(&mut self, marker: char, digits: usize, value: &mut String) -> ParseResult<()> {
        self.stream.next();

        let mut sequence = String::with_capacity(digits);
        for _ in 0..digits {
            let Some(ch) = self.stream.take_hex_digit() else {
                let found = self
                    .stream
                    .current_char()
                    .map_or_else(|| "EOF".to_string(), String::from);
                return Err(ErrorKind::InvalidUnicodeEscapeSequence(format!(
                    "\\{marker}{sequence}{found}"
                )));
            };
            sequence.push(ch);
        }

        value.push('\\');
        value.push(marker);
        value.push_str(&sequence);
        Ok(())
    }
}
