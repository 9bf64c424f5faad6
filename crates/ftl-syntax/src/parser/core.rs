//! Parser state, the resource loop and junk recovery.

use crate::ast::{Annotation, Comment, Entry, Junk, Resource, Span, TopLevel, Whitespace};

use super::error::{ErrorKind, ParseResult};
use super::stream::{EOL, Stream};

pub(super) struct ResourceParser<'src> {
    pub(super) stream: Stream<'src>,
    with_spans: bool,
    recursion_limit: Option<u32>,
    depth: u32,
}

impl<'src> ResourceParser<'src> {
    pub fn new(source: &'src str, with_spans: bool, recursion_limit: Option<u32>) -> Self {
        Self {
            stream: Stream::new(source),
            with_spans,
            recursion_limit,
            depth: 0,
        }
    }

    pub fn parse_resource(mut self) -> Resource {
        tracing::debug!(len = self.stream.len(), spans = self.with_spans, "parsing resource");

        let mut body = Vec::new();

        let leading_start = self.stream.index();
        let leading_lines = self.stream.skip_blank_block();
        if leading_lines > 0 {
            body.push(self.whitespace(leading_start, leading_lines));
        }

        // A comment directly followed by a message or term belongs to it, which
        // isn't known until the next entry has been parsed.
        let mut pending_comment: Option<Comment> = None;

        while !self.stream.is_eof() {
            let entry = self.entry_or_junk();

            let blank_start = self.stream.index();
            let blank_lines = self.stream.skip_blank_block();

            let entry = match entry {
                TopLevel::Entry(Entry::Comment(comment))
                    if blank_lines == 0 && !self.stream.is_eof() =>
                {
                    if let Some(previous) = pending_comment.replace(comment) {
                        body.push(TopLevel::Entry(Entry::Comment(previous)));
                    }
                    continue;
                }
                entry => entry,
            };

            match (pending_comment.take(), entry) {
                (Some(comment), TopLevel::Entry(Entry::Message(mut message))) => {
                    message.span = attach_span(message.span, comment.span);
                    message.comment = Some(comment);
                    body.push(TopLevel::Entry(Entry::Message(message)));
                }
                (Some(comment), TopLevel::Entry(Entry::Term(mut term))) => {
                    term.span = attach_span(term.span, comment.span);
                    term.comment = Some(comment);
                    body.push(TopLevel::Entry(Entry::Term(term)));
                }
                (Some(comment), entry) => {
                    body.push(TopLevel::Entry(Entry::Comment(comment)));
                    body.push(entry);
                }
                (None, entry) => body.push(entry),
            }

            if blank_lines > 0 {
                body.push(self.whitespace(blank_start, blank_lines));
            }
        }

        if let Some(comment) = pending_comment {
            body.push(TopLevel::Entry(Entry::Comment(comment)));
        }

        let junk_count = body.iter().filter(|item| matches!(item, TopLevel::Junk(_))).count();
        tracing::debug!(items = body.len(), junk = junk_count, "parsed resource");

        Resource {
            body,
            span: self.span_from(0),
        }
    }

    fn entry_or_junk(&mut self) -> TopLevel {
        let entry_start = self.stream.index();
        self.depth = 0;

        let result = self
            .entry()
            .and_then(|entry| self.stream.expect_line_end().map(|()| entry));

        match result {
            Ok(entry) => TopLevel::Entry(entry),
            Err(kind) => self.junk(entry_start, kind),
        }
    }

    fn junk(&mut self, entry_start: usize, kind: ErrorKind) -> TopLevel {
        let error_index = self.stream.index();
        self.stream.skip_to_next_entry_start(entry_start);
        let next_entry_start = self.stream.index();

        // The scan may have rewound to the start of the failing line.
        let error_index = error_index.min(next_entry_start);

        tracing::debug!(
            code = kind.code(),
            start = entry_start,
            end = next_entry_start,
            "recovered from malformed entry"
        );

        let annotation = Annotation {
            code: kind.code().to_string(),
            message: kind.to_string(),
            arguments: kind.arguments(),
            span: Span::new(error_index, error_index),
        };

        TopLevel::Junk(Junk {
            content: self.stream.slice(entry_start, next_entry_start).to_string(),
            annotations: vec![annotation],
            span: self.span_from(entry_start),
        })
    }

    fn whitespace(&self, start: usize, line_ends: usize) -> TopLevel {
        TopLevel::Whitespace(Whitespace {
            content: EOL.to_string().repeat(line_ends),
            span: self.span_from(start),
        })
    }

    /// Span from `start` to the current index, when spans are enabled.
    pub(super) fn span_from(&self, start: usize) -> Option<Span> {
        self.with_spans
            .then(|| Span::new(start, self.stream.index()))
    }

    pub(super) fn with_spans(&self) -> bool {
        self.with_spans
    }

    pub(super) fn enter_nesting(&mut self) -> ParseResult<()> {
        if let Some(limit) = self.recursion_limit
            && self.depth >= limit
        {
            return Err(ErrorKind::NestingLimitExceeded(limit));
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Extends an entry's span backwards to cover its attached comment.
fn attach_span(entry: Option<Span>, comment: Option<Span>) -> Option<Span> {
    match (entry, comment) {
        (Some(entry), Some(comment)) => Some(Span::new(comment.start, entry.end)),
        (entry, _) => entry,
    }
}
