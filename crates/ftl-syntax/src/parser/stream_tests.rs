use super::stream::{EOL, Stream};

#[test]
fn next_and_peek() {
    let mut stream = Stream::new("abcd");

    assert_eq!(stream.current_char(), Some('a'));
    assert_eq!(stream.index(), 0);

    assert_eq!(stream.next(), Some('b'));
    assert_eq!(stream.index(), 1);

    assert_eq!(stream.peek(), Some('c'));
    assert_eq!(stream.current_peek(), Some('c'));
    assert_eq!(stream.current_char(), Some('b'));

    assert_eq!(stream.peek(), Some('d'));
    assert_eq!(stream.peek(), None);
    assert_eq!(stream.current_char(), Some('b'));

    stream.commit_peek();
    assert!(stream.is_eof());
    assert_eq!(stream.index(), 4);
}

#[test]
fn next_discards_lookahead() {
    let mut stream = Stream::new("abcd");
    stream.peek();
    stream.peek();

    assert_eq!(stream.next(), Some('b'));
    assert_eq!(stream.current_peek(), Some('b'));
}

#[test]
fn stepping_past_end_is_a_no_op() {
    let mut stream = Stream::new("a");
    assert_eq!(stream.next(), None);
    assert_eq!(stream.next(), None);
    assert_eq!(stream.index(), 1);

    assert_eq!(stream.peek(), None);
    assert_eq!(stream.peek(), None);
    stream.commit_peek();
    assert_eq!(stream.index(), 1);
}

#[test]
fn crlf_reads_as_single_line_end() {
    let mut stream = Stream::new("a\r\nb");
    stream.next();

    assert_eq!(stream.current_char(), Some(EOL));
    assert_eq!(stream.index(), 1);

    assert_eq!(stream.next(), Some('b'));
    assert_eq!(stream.index(), 3);
}

#[test]
fn lone_carriage_return_is_kept() {
    let mut stream = Stream::new("a\rb");
    assert_eq!(stream.next(), Some('\r'));
    assert_eq!(stream.next(), Some('b'));
}

#[test]
fn multibyte_offsets() {
    let mut stream = Stream::new("żółw");
    stream.next();
    assert_eq!(stream.index(), 2);
    assert_eq!(stream.current_char(), Some('ó'));
    assert_eq!(stream.slice(0, stream.index()), "ż");
}

#[test]
fn blank_inline() {
    let mut stream = Stream::new("   x");
    assert_eq!(stream.peek_blank_inline(), "   ");
    assert_eq!(stream.index(), 0);
    assert_eq!(stream.current_peek(), Some('x'));

    stream.reset_peek(0);
    assert_eq!(stream.skip_blank_inline(), "   ");
    assert_eq!(stream.index(), 3);
}

#[test]
fn blank_block_stops_at_content_line() {
    let mut stream = Stream::new("\n   \n\n  x");
    assert_eq!(stream.skip_blank_block(), 3);
    assert_eq!(stream.current_char(), Some(' '));
    assert_eq!(stream.index(), 6);
}

#[test]
fn blank_block_counts_crlf_once() {
    let mut stream = Stream::new("\r\n\r\nx");
    assert_eq!(stream.skip_blank_block(), 2);
    assert_eq!(stream.current_char(), Some('x'));
}

#[test]
fn blank_block_runs_to_end() {
    let mut stream = Stream::new("\n  ");
    assert_eq!(stream.skip_blank_block(), 1);
    assert!(stream.is_eof());
}

#[test]
fn skip_blank_crosses_lines() {
    let mut stream = Stream::new(" \n \n x");
    stream.skip_blank();
    assert_eq!(stream.current_char(), Some('x'));
}

#[test]
fn expect_char_and_line_end() {
    let mut stream = Stream::new("=\n");
    assert!(stream.expect_char('=').is_ok());
    assert!(stream.expect_char('=').is_err());
    assert!(stream.expect_line_end().is_ok());
    assert!(stream.is_eof());
    assert!(stream.expect_line_end().is_ok());

    let mut stream = Stream::new("x");
    let err = stream.expect_line_end().unwrap_err();
    assert_eq!(err.code(), "E0003");
}

#[test]
fn number_start() {
    assert!(Stream::new("1").is_number_start());
    assert!(Stream::new("-1").is_number_start());
    assert!(!Stream::new("-a").is_number_start());
    assert!(!Stream::new("-").is_number_start());
    assert!(!Stream::new("a").is_number_start());
}

#[test]
fn value_continuation() {
    let check = |source: &str| Stream::new(source).is_value_continuation();

    assert!(check("  text"));
    assert!(check("{ $x }"));
    assert!(check("  { $x }"));
    assert!(!check("text"));
    assert!(!check("  [key] value"));
    assert!(!check("  *[key] value"));
    assert!(!check("  .attr = value"));
    assert!(!check("  }"));
    assert!(!check("   "));
}

#[test]
fn value_continuation_rewinds_to_line_start() {
    let mut stream = Stream::new("    text");
    assert!(stream.is_value_continuation());
    stream.commit_peek();
    assert_eq!(stream.index(), 0);
}

#[test]
fn next_line_comment_levels() {
    let mut stream = Stream::new("\n# a");
    assert!(stream.is_next_line_comment(0));
    assert!(!stream.is_next_line_comment(1));

    let mut stream = Stream::new("\n## a");
    assert!(!stream.is_next_line_comment(0));
    assert!(stream.is_next_line_comment(1));

    let mut stream = Stream::new("\n#");
    assert!(stream.is_next_line_comment(0));

    let mut stream = Stream::new("\n#a");
    assert!(!stream.is_next_line_comment(0));

    assert_eq!(stream.current_peek(), Some(EOL));
}

#[test]
fn variant_and_attribute_starts() {
    assert!(Stream::new("[one]").is_variant_start());
    assert!(Stream::new("*[other]").is_variant_start());
    assert!(!Stream::new("*other").is_variant_start());
    assert!(Stream::new(".attr").is_attribute_start());
    assert!(!Stream::new("attr").is_attribute_start());
}

#[test]
fn skip_to_next_entry_start() {
    let mut stream = Stream::new("bad line\n  indented\n}\nnext = 1\n");
    stream.skip_to_next_entry_start(0);
    assert_eq!(stream.index(), 22);
    assert_eq!(stream.current_char(), Some('n'));

    let mut stream = Stream::new("junk\n# comment\n");
    stream.skip_to_next_entry_start(0);
    assert_eq!(stream.current_char(), Some('#'));

    let mut stream = Stream::new("junk\n-term = 1\n");
    stream.skip_to_next_entry_start(0);
    assert_eq!(stream.current_char(), Some('-'));
}

#[test]
fn skip_to_next_entry_start_rewinds_to_failing_line() {
    // Failure detected while looking at the second line, which starts an entry.
    let source = "a = {\nb = B\n";
    let mut stream = Stream::new(source);
    while stream.index() < 8 {
        stream.next();
    }
    stream.skip_to_next_entry_start(0);
    assert_eq!(stream.index(), 6);
}

#[test]
fn take_helpers() {
    let mut stream = Stream::new("a1_-Ff");
    assert_eq!(stream.take_id_start().unwrap(), 'a');
    assert_eq!(stream.take_id_char(), Some('1'));
    assert_eq!(stream.take_id_char(), Some('_'));
    assert_eq!(stream.take_id_char(), Some('-'));
    assert_eq!(stream.take_hex_digit(), Some('F'));
    assert_eq!(stream.take_digit(), None);
    assert_eq!(stream.take_hex_digit(), Some('f'));
    assert_eq!(stream.take_hex_digit(), None);

    let err = Stream::new("1").take_id_start().unwrap_err();
    assert_eq!(err.code(), "E0004");
}
