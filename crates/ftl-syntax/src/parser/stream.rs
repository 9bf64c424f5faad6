//! Character cursor over FTL source.
//!
//! The stream keeps a committed `index` and a speculative `peek_offset` on top
//! of it. Lookahead predicates move the peek offset freely; callers either
//! commit the scan with [`Stream::commit_peek`] or discard it with
//! [`Stream::reset_peek`]. Consuming a character with [`Stream::next`] always
//! discards pending lookahead.
//!
//! CRLF is reported as a single `\n` at the position of the `\r`, and stepping
//! over it moves two bytes at once. Offsets are byte offsets and always fall on
//! character boundaries.

use super::error::{ErrorKind, ParseResult};

pub(crate) const EOL: char = '\n';

const SPECIAL_LINE_START_CHARS: [char; 4] = ['}', '.', '[', '*'];

pub(crate) struct Stream<'src> {
    source: &'src str,
    index: usize,
    peek_offset: usize,
}

impl<'src> Stream<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            index: 0,
            peek_offset: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn slice(&self, start: usize, end: usize) -> &'src str {
        &self.source[start..end]
    }

    pub fn is_eof(&self) -> bool {
        self.index >= self.source.len()
    }

    fn is_crlf_at(&self, offset: usize) -> bool {
        self.source.as_bytes().get(offset..offset + 2) == Some(b"\r\n".as_slice())
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        if self.is_crlf_at(offset) {
            return Some(EOL);
        }
        self.source.get(offset..)?.chars().next()
    }

    /// Byte width of the character at `offset`; zero at end of input.
    fn width_at(&self, offset: usize) -> usize {
        if self.is_crlf_at(offset) {
            return 2;
        }
        self.char_at(offset).map_or(0, char::len_utf8)
    }

    pub fn current_char(&self) -> Option<char> {
        self.char_at(self.index)
    }

    pub fn current_peek(&self) -> Option<char> {
        self.char_at(self.index + self.peek_offset)
    }

    /// Consumes the current character and discards any pending lookahead.
    pub fn next(&mut self) -> Option<char> {
        self.peek_offset = 0;
        self.index += self.width_at(self.index);
        self.current_char()
    }

    pub fn peek(&mut self) -> Option<char> {
        self.peek_offset += self.width_at(self.index + self.peek_offset);
        self.current_peek()
    }

    pub fn reset_peek(&mut self, offset: usize) {
        self.peek_offset = offset;
    }

    pub fn commit_peek(&mut self) {
        self.index += self.peek_offset;
        self.peek_offset = 0;
    }

    pub fn peek_blank_inline(&mut self) -> &'src str {
        let start = self.index + self.peek_offset;
        while self.current_peek() == Some(' ') {
            self.peek();
        }
        &self.source[start..self.index + self.peek_offset]
    }

    pub fn skip_blank_inline(&mut self) -> &'src str {
        let blank = self.peek_blank_inline();
        self.commit_peek();
        blank
    }

    /// Peeks over whole blank lines and returns how many line ends it passed.
    ///
    /// Stops at the start of the first line holding something other than
    /// spaces, or at end of input.
    pub fn peek_blank_block(&mut self) -> usize {
        let mut line_ends = 0;
        loop {
            let line_start = self.peek_offset;
            self.peek_blank_inline();
            match self.current_peek() {
                Some(EOL) => {
                    line_ends += 1;
                    self.peek();
                }
                None => return line_ends,
                Some(_) => {
                    self.reset_peek(line_start);
                    return line_ends;
                }
            }
        }
    }

    pub fn skip_blank_block(&mut self) -> usize {
        let line_ends = self.peek_blank_block();
        self.commit_peek();
        line_ends
    }

    pub fn peek_blank(&mut self) {
        while matches!(self.current_peek(), Some(' ' | EOL)) {
            self.peek();
        }
    }

    pub fn skip_blank(&mut self) {
        self.peek_blank();
        self.commit_peek();
    }

    pub fn expect_char(&mut self, ch: char) -> ParseResult<()> {
        if self.current_char() == Some(ch) {
            self.next();
            return Ok(());
        }
        Err(ErrorKind::ExpectedToken(ch))
    }

    /// Accepts a line end or the end of input.
    pub fn expect_line_end(&mut self) -> ParseResult<()> {
        match self.current_char() {
            Some(EOL) | None => {
                self.next();
                Ok(())
            }
            Some(_) => Err(ErrorKind::ExpectedToken('\u{2424}')),
        }
    }

    pub fn take_char(&mut self, accept: impl FnOnce(char) -> bool) -> Option<char> {
        let ch = self.current_char()?;
        if accept(ch) {
            self.next();
            return Some(ch);
        }
        None
    }

    pub fn is_identifier_start(&self) -> bool {
        self.current_peek().is_some_and(is_id_start)
    }

    pub fn is_number_start(&mut self) -> bool {
        let ch = if self.current_char() == Some('-') {
            self.peek()
        } else {
            self.current_char()
        };
        self.reset_peek(0);
        ch.is_some_and(|c| c.is_ascii_digit())
    }

    pub fn is_value_start(&self) -> bool {
        !matches!(self.current_peek(), Some(EOL) | None)
    }

    /// Whether the peeked line continues the pattern being parsed.
    ///
    /// Expects the peek position at the start of a line. A placeable may start
    /// in any column; anything else needs indentation and must not begin with
    /// a character reserved for variants, attributes or a closing brace. On
    /// success the peek position is left at the start of the line.
    pub fn is_value_continuation(&mut self) -> bool {
        let column_one = self.peek_offset;
        self.peek_blank_inline();

        if self.current_peek() == Some('{') {
            self.reset_peek(column_one);
            return true;
        }

        if self.peek_offset == column_one {
            return false;
        }

        match self.current_peek() {
            Some(ch) if !SPECIAL_LINE_START_CHARS.contains(&ch) => {
                self.reset_peek(column_one);
                true
            }
            _ => false,
        }
    }

    /// Whether the next line is a comment line of exactly `level` (0 for `#`,
    /// 1 for `##`, 2 for `###`). Expects the current character to be a line end.
    pub fn is_next_line_comment(&mut self, level: usize) -> bool {
        if self.current_char() != Some(EOL) {
            return false;
        }

        for _ in 0..=level {
            if self.peek() != Some('#') {
                self.reset_peek(0);
                return false;
            }
        }

        let ch = self.peek();
        self.reset_peek(0);
        matches!(ch, Some(' ' | EOL) | None)
    }

    pub fn is_variant_start(&mut self) -> bool {
        let current_peek_offset = self.peek_offset;
        if self.current_peek() == Some('*') {
            self.peek();
        }
        let is_start = self.current_peek() == Some('[');
        self.reset_peek(current_peek_offset);
        is_start
    }

    pub fn is_attribute_start(&self) -> bool {
        self.current_peek() == Some('.')
    }

    /// Moves to the start of the next line that can begin an entry.
    ///
    /// When the error happened on a later line than the one the broken entry
    /// started on, scanning resumes from the start of the failing line so that
    /// an entry starting there isn't swallowed.
    pub fn skip_to_next_entry_start(&mut self, junk_start: usize) {
        let searched = (self.index + self.width_at(self.index).max(1)).min(self.source.len());
        if let Some(last_newline) = self.source.as_bytes()[..searched]
            .iter()
            .rposition(|&b| b == b'\n')
            && junk_start < last_newline
        {
            self.index = last_newline;
        }
        self.peek_offset = 0;

        while let Some(ch) = self.current_char() {
            if ch != EOL {
                self.next();
                continue;
            }

            let first = self.next();
            if first.is_some_and(|c| is_id_start(c) || c == '-' || c == '#') {
                break;
            }
        }
    }

    pub fn take_id_start(&mut self) -> ParseResult<char> {
        self.take_char(is_id_start)
            .ok_or(ErrorKind::ExpectedCharRange("a-zA-Z"))
    }

    pub fn take_id_char(&mut self) -> Option<char> {
        self.take_char(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    pub fn take_digit(&mut self) -> Option<char> {
        self.take_char(|c| c.is_ascii_digit())
    }

    pub fn take_hex_digit(&mut self) -> Option<char> {
        self.take_char(|c| c.is_ascii_hexdigit())
    }
}

pub(crate) fn is_id_start(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}
