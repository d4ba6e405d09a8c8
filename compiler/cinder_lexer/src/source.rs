//! Byte transports feeding the scanner.
//!
//! The scanner never sees the whole input; it asks its source for one byte
//! at a time. `Ok(None)` means end of input and is final.

use std::io::{self, BufReader, Read};

/// A pull-based byte stream.
pub trait ByteSource {
    /// Read the next byte, or `None` at end of input.
    fn next_byte(&mut self) -> io::Result<Option<u8>>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).next_byte()
    }
}

/// In-memory source over a borrowed byte slice.
#[derive(Clone, Debug)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        SliceSource { bytes, pos: 0 }
    }

    /// Bytes not yet handed out.
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    #[inline]
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.bytes.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }
}

/// Buffered source over any reader (files, stdin, pipes).
pub struct ReaderSource<R: Read> {
    bytes: io::Bytes<BufReader<R>>,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource {
            bytes: BufReader::new(reader).bytes(),
        }
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    #[inline]
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        self.bytes.next().transpose()
    }
}
