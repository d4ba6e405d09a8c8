//! Four-byte lookahead window with line/column tracking.
//!
//! The window holds the previous, current, next and next-next bytes. Bytes
//! are pulled from the [`ByteSource`] one at a time as the window shifts.
//! End of input reads as `0x00`; once the source reports end it is never
//! asked again.
//!
//! # Position
//!
//! `position` is always the position of the *current* byte. Each shift bumps
//! the column; when the byte just shifted into the previous slot is `\n` the
//! line is bumped instead and the column resets to 1. The reset therefore
//! applies to the byte after the newline, never to the newline itself.

use std::io;

use cinder_ir::Position;

use crate::ByteSource;

/// End-of-input sentinel.
pub(crate) const EOF_BYTE: u8 = 0x00;

pub(crate) struct Window<S> {
    source: S,
    prev: u8,
    cur: u8,
    next: u8,
    next2: u8,
    exhausted: bool,
    position: Position,
}

impl<S: ByteSource> Window<S> {
    /// Create a window and pre-fill the three forward slots.
    pub(crate) fn new(source: S) -> io::Result<Self> {
        let mut window = Window {
            source,
            prev: EOF_BYTE,
            cur: EOF_BYTE,
            next: EOF_BYTE,
            next2: EOF_BYTE,
            exhausted: false,
            position: Position::START,
        };
        window.cur = window.pull()?;
        window.next = window.pull()?;
        window.next2 = window.pull()?;
        Ok(window)
    }

    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.cur
    }

    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.next
    }

    /// Current byte plus both lookahead bytes.
    #[inline]
    pub(crate) fn probe(&self) -> [u8; 3] {
        [self.cur, self.next, self.next2]
    }

    #[inline]
    pub(crate) fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub(crate) fn at_eof(&self) -> bool {
        self.cur == EOF_BYTE
    }

    /// Shift the window left `n` times.
    ///
    /// Stops early at the sentinel, so advancing at end of input is a no-op
    /// and the position stays put.
    pub(crate) fn advance(&mut self, n: usize) -> io::Result<()> {
        for _ in 0..n {
            if self.at_eof() {
                break;
            }
            self.prev = self.cur;
            self.cur = self.next;
            self.next = self.next2;
            self.next2 = self.pull()?;

            if self.prev == b'\n' {
                self.position.bump_line();
            } else {
                self.position.bump_column();
            }
        }
        Ok(())
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must be `false`; otherwise this stops at end of input anyway.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> io::Result<()> {
        while !self.at_eof() && pred(self.cur) {
            self.advance(1)?;
        }
        Ok(())
    }

    /// Skip spaces and tabs. Carriage returns are skipped too when
    /// `carriage_return` is set.
    pub(crate) fn eat_blanks(&mut self, carriage_return: bool) -> io::Result<()> {
        self.eat_while(|b| b == b' ' || b == b'\t' || (carriage_return && b == b'\r'))
    }

    fn pull(&mut self) -> io::Result<u8> {
        if self.exhausted {
            return Ok(EOF_BYTE);
        }
        match self.source.next_byte()? {
            Some(b) => Ok(b),
            None => {
                self.exhausted = true;
                Ok(EOF_BYTE)
            }
        }
    }
}

#[cfg(test)]
mod tests;
