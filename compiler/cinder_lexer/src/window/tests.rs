use std::io;

use cinder_ir::Position;
use pretty_assertions::assert_eq;

use super::*;
use crate::SliceSource;

fn window(src: &[u8]) -> Window<SliceSource<'_>> {
    match Window::new(SliceSource::new(src)) {
        Ok(w) => w,
        Err(e) => panic!("slice source cannot fail: {e}"),
    }
}

#[test]
fn prefill_reads_three_bytes() {
    let w = window(b"abcd");
    assert_eq!(w.probe(), [b'a', b'b', b'c']);
    assert_eq!(w.position(), Position::START);
}

#[test]
fn short_input_prefills_with_sentinels() {
    let w = window(b"a");
    assert_eq!(w.probe(), [b'a', 0, 0]);
    let empty = window(b"");
    assert!(empty.at_eof());
}

#[test]
fn advance_shifts_and_counts_columns() {
    let mut w = window(b"abcd");
    assert!(w.advance(2).is_ok());
    assert_eq!(w.current(), b'c');
    assert_eq!(w.peek(), b'd');
    assert_eq!(w.probe(), [b'c', b'd', 0]);
    assert_eq!(w.position(), Position::new(1, 3));
}

#[test]
fn newline_reset_applies_after_the_newline() {
    let mut w = window(b"a\nb");
    assert!(w.advance(1).is_ok());
    // Sitting on the newline: still line 1.
    assert_eq!(w.current(), b'\n');
    assert_eq!(w.position(), Position::new(1, 2));
    assert!(w.advance(1).is_ok());
    assert_eq!(w.current(), b'b');
    assert_eq!(w.position(), Position::new(2, 1));
}

#[test]
fn advance_at_eof_is_a_no_op() {
    let mut w = window(b"ab");
    assert!(w.advance(10).is_ok());
    assert!(w.at_eof());
    let pos = w.position();
    assert_eq!(pos, Position::new(1, 3));
    assert!(w.advance(3).is_ok());
    assert_eq!(w.position(), pos);
}

/// Counts reads and fails if asked again after reporting end.
struct StrictSource<'a> {
    bytes: &'a [u8],
    ended: bool,
}

impl crate::ByteSource for StrictSource<'_> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if self.ended {
            return Err(io::Error::other("read after end"));
        }
        match self.bytes.split_first() {
            Some((&b, rest)) => {
                self.bytes = rest;
                Ok(Some(b))
            }
            None => {
                self.ended = true;
                Ok(None)
            }
        }
    }
}

#[test]
fn source_is_not_read_after_end() {
    let source = StrictSource {
        bytes: b"xyz",
        ended: false,
    };
    let mut w = match Window::new(source) {
        Ok(w) => w,
        Err(e) => panic!("{e}"),
    };
    for _ in 0..8 {
        assert!(w.advance(1).is_ok());
    }
    assert!(w.at_eof());
}

#[test]
fn eat_blanks_optionally_skips_carriage_returns() {
    let mut w = window(b" \t\r x");
    assert!(w.eat_blanks(false).is_ok());
    assert_eq!(w.current(), b'\r');
    assert!(w.eat_blanks(true).is_ok());
    assert_eq!(w.current(), b'x');
    assert_eq!(w.position(), Position::new(1, 5));
}
