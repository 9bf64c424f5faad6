use crate::ast::{
    Attribute, Comment, Entry, GroupComment, Identifier, Message, ResourceComment, Term,
};
use crate::parser::core::ResourceParser;
use crate::parser::error::{ErrorKind, ParseResult};
use crate::parser::stream::EOL;

/// Deepest comment level: `###`.
const MAX_COMMENT_LEVEL: usize = 2;

impl ResourceParser<'_> {
    pub(crate) fn entry(&mut self) -> ParseResult<Entry> {
        match self.stream.current_char() {
            Some('#') => self.comment(),
            Some('-') => self.term().map(Entry::Term),
            _ if self.stream.is_identifier_start() => self.message().map(Entry::Message),
            _ => Err(ErrorKind::ExpectedEntry),
        }
    }

    /// `#`, `##` or `###` lines. Consecutive lines of the same level form a
    /// single comment whose content joins the lines with `\n`.
    fn comment(&mut self) -> ParseResult<Entry> {
        let start = self.stream.index();
        let mut level = None;
        let mut content = String::new();

        loop {
            let bound = level.unwrap_or(MAX_COMMENT_LEVEL);
            let mut hashes = 0;
            while hashes <= bound && self.stream.current_char() == Some('#') {
                self.stream.next();
                hashes += 1;
            }
            let current_level = *level.get_or_insert(hashes - 1);

            if !matches!(self.stream.current_char(), Some(EOL) | None) {
                self.stream.expect_char(' ')?;
                while let Some(ch) = self.stream.take_char(|c| c != EOL) {
                    content.push(ch);
                }
            }

            if !self.stream.is_next_line_comment(current_level) {
                break;
            }
            content.push(EOL);
            self.stream.next();
        }

        let span = self.span_from(start);
        Ok(match level {
            Some(0) => Entry::Comment(Comment { content, span }),
            Some(1) => Entry::GroupComment(GroupComment { content, span }),
            _ => Entry::ResourceComment(ResourceComment { content, span }),
        })
    }

    /// `id = pattern` followed by attributes.
    fn message(&mut self) -> ParseResult<Message> {
        let start = self.stream.index();
        let id = self.identifier()?;
        self.stream.skip_blank_inline();
        self.stream.expect_char('=')?;

        let value = self.maybe_pattern()?;
        let attributes = self.attributes()?;

        if value.is_none() && attributes.is_empty() {
            return Err(ErrorKind::ExpectedMessageField(id.name));
        }

        Ok(Message {
            id,
            value,
            attributes,
            comment: None,
            span: self.span_from(start),
        })
    }

    /// `-id = pattern` followed by attributes. The value is mandatory.
    fn term(&mut self) -> ParseResult<Term> {
        let start = self.stream.index();
        self.stream.expect_char('-')?;
        let id = self.identifier()?;
        self.stream.skip_blank_inline();
        self.stream.expect_char('=')?;

        let Some(value) = self.maybe_pattern()? else {
            return Err(ErrorKind::ExpectedTermField(id.name));
        };
        let attributes = self.attributes()?;

        Ok(Term {
            id,
            value,
            attributes,
            comment: None,
            span: self.span_from(start),
        })
    }

    fn attributes(&mut self) -> ParseResult<Vec<Attribute>> {
        let mut attributes = Vec::new();
        self.stream.peek_blank();
        while self.stream.is_attribute_start() {
            self.stream.commit_peek();
            attributes.push(self.attribute()?);
            self.stream.peek_blank();
        }
        Ok(attributes)
    }

    /// `.id = pattern`
    fn attribute(&mut self) -> ParseResult<Attribute> {
        let start = self.stream.index();
        self.stream.expect_char('.')?;
        let id = self.identifier()?;
        self.stream.skip_blank_inline();
        self.stream.expect_char('=')?;

        let value = self.maybe_pattern()?.ok_or(ErrorKind::MissingValue)?;

        Ok(Attribute {
            id,
            value,
            span: self.span_from(start),
        })
    }

    /// `[a-zA-Z][a-zA-Z0-9_-]*`
    pub(crate) fn identifier(&mut self) -> ParseResult<Identifier> {
        let start = self.stream.index();
        self.stream.take_id_start()?;
        while self.stream.take_id_char().is_some() {}

        Ok(Identifier {
            name: self.stream.slice(start, self.stream.index()).to_string(),
            span: self.span_from(start),
        })
    }
}
