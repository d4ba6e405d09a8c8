//! The scanner: dispatch loop and literal readers.
//!
//! # Design
//!
//! `next_token` skips blanks, stamps the start position, then dispatches on
//! the current byte. Comments and empty character literals produce no token;
//! the dispatch loop simply goes around again. Lexical problems are reported
//! to the sink and scanning continues with a best-effort token. Only I/O,
//! sink and arena failures end a scan early.

use std::sync::Arc;

use cinder_diagnostic::DiagnosticSink;
use cinder_ir::{Position, StringArena, Token, TokenKind};
use tracing::{debug, trace};

use crate::operators::{compound_table, resolve, single_byte_kind};
use crate::window::{Window, EOF_BYTE};
use crate::{
    decode_escapes, lookup_keyword, lookup_mode, ByteSource, LexErrorKind, ScanError,
};

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[inline]
fn is_numeric_byte(b: u8) -> bool {
    b.is_ascii_digit() || b == b'_'
}

/// Undecoded literal bytes plus the source position of every escape.
#[derive(Default)]
struct RawLiteral {
    bytes: Vec<u8>,
    /// `(offset of the backslash in bytes, its position)`, offsets ascending.
    escapes: Vec<(usize, Position)>,
}

impl RawLiteral {
    /// Record a backslash about to be pushed at `position`.
    fn mark_escape(&mut self, position: Position) {
        self.escapes.push((self.bytes.len(), position));
    }

    fn escape_position(&self, offset: usize) -> Option<Position> {
        self.escapes
            .binary_search_by_key(&offset, |&(at, _)| at)
            .ok()
            .map(|i| self.escapes[i].1)
    }
}

/// Pull-based scanner over a [`ByteSource`].
///
/// Borrows the long-lived arena (string contents) and the diagnostic sink
/// for its whole lifetime. Once `Eof` is returned every later call returns
/// `Eof` again at the same position.
///
/// Also an [`Iterator`] yielding each token up to and including the first
/// `Eof`.
pub struct Scanner<'a, S, D: ?Sized> {
    window: Window<S>,
    source_name: Arc<str>,
    arena: &'a StringArena,
    sink: &'a mut D,
    /// Position of the first byte of the token being built.
    start: Position,
    /// Set once the iterator has yielded `Eof` or an error.
    finished: bool,
}

impl<'a, S: ByteSource, D: DiagnosticSink + ?Sized> Scanner<'a, S, D> {
    /// Create a scanner and pre-fill its lookahead.
    pub fn new(
        source: S,
        source_name: Arc<str>,
        arena: &'a StringArena,
        sink: &'a mut D,
    ) -> Result<Self, ScanError> {
        let window = Window::new(source).map_err(|source| ScanError::Io {
            source_name: Arc::clone(&source_name),
            source,
        })?;
        Ok(Scanner {
            window,
            source_name,
            arena,
            sink,
            start: Position::START,
            finished: false,
        })
    }

    pub fn source_name(&self) -> &Arc<str> {
        &self.source_name
    }

    /// Position of the next unconsumed byte.
    pub fn position(&self) -> Position {
        self.window.position()
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        loop {
            self.eat_blanks()?;
            self.start = self.window.position();

            let kind = match self.window.current() {
                EOF_BYTE => TokenKind::Eof,
                b'"' if self.window.peek() == b'|' => self.multi_line_string()?,
                b'"' => self.string()?,
                b'\'' => match self.character()? {
                    Some(kind) => kind,
                    None => continue,
                },
                b'/' => match self.slash()? {
                    Some(kind) => kind,
                    None => continue,
                },
                b if b.is_ascii_alphabetic() || b == b'_' => self.word()?,
                b if b.is_ascii_digit() => self.number()?,
                b => {
                    if let Some(table) = compound_table(b) {
                        let (kind, len) = resolve(table, self.window.probe());
                        self.advance(len)?;
                        kind
                    } else {
                        self.advance(1)?;
                        single_byte_kind(b)
                    }
                }
            };

            trace!(kind = ?kind, position = %self.start, "token");
            return Ok(Token::new(kind, Arc::clone(&self.source_name), self.start));
        }
    }

    /// Scan everything up to and including `Eof`.
    pub fn tokenize(self) -> Result<Vec<Token>, ScanError> {
        self.collect()
    }

    // ─── Literals ───────────────────────────────────────────────────

    fn string(&mut self) -> Result<TokenKind, ScanError> {
        self.advance(1)?; // opening `"`
        let mut raw = RawLiteral::default();
        loop {
            match self.window.current() {
                EOF_BYTE => {
                    self.report(LexErrorKind::UnterminatedString, self.window.position())?;
                    break;
                }
                b'"' => {
                    self.advance(1)?;
                    break;
                }
                b'\\' => self.push_escape(&mut raw)?,
                b => {
                    raw.bytes.push(b);
                    self.advance(1)?;
                }
            }
        }
        self.intern_decoded(&raw)
    }

    /// `"|` literal. Every newline is kept; each following line must open
    /// with `|` after optional blanks, and `|"` right after a newline closes
    /// the literal.
    fn multi_line_string(&mut self) -> Result<TokenKind, ScanError> {
        self.advance(2)?; // `"|`
        let mut raw = RawLiteral::default();
        loop {
            match self.window.current() {
                EOF_BYTE => {
                    self.report(LexErrorKind::UnterminatedString, self.window.position())?;
                    break;
                }
                b'"' => {
                    self.advance(1)?;
                    break;
                }
                // A backslash ending a line is left for decoding to reject;
                // the newline itself still goes through marker handling.
                b'\\' if self.window.peek() == b'\n' => {
                    raw.mark_escape(self.window.position());
                    raw.bytes.push(b'\\');
                    self.advance(1)?;
                }
                b'\\' => self.push_escape(&mut raw)?,
                b'\n' => {
                    raw.bytes.push(b'\n');
                    self.advance(1)?;
                    self.window
                        .eat_blanks(false)
                        .map_err(|source| self.io_error(source))?;
                    if self.window.current() == b'|' {
                        self.advance(1)?;
                        if self.window.current() == b'"' {
                            self.advance(1)?;
                            break;
                        }
                    } else if !self.window.at_eof() {
                        // Keep the byte as content.
                        self.report(LexErrorKind::MissingLineDelimiter, self.window.position())?;
                    }
                }
                b => {
                    raw.bytes.push(b);
                    self.advance(1)?;
                }
            }
        }
        self.intern_decoded(&raw)
    }

    /// Returns `None` for an empty literal, which yields no token.
    ///
    /// Length problems concern the literal as a whole and are reported at
    /// its opening quote.
    fn character(&mut self) -> Result<Option<TokenKind>, ScanError> {
        self.advance(1)?; // opening `'`
        let mut raw = RawLiteral::default();
        loop {
            match self.window.current() {
                EOF_BYTE => {
                    self.report(LexErrorKind::UnterminatedChar, self.window.position())?;
                    break;
                }
                b'\'' => {
                    self.advance(1)?;
                    break;
                }
                b'\\' => self.push_escape(&mut raw)?,
                b => {
                    raw.bytes.push(b);
                    self.advance(1)?;
                }
            }
        }

        let decoded = self.decode(&raw)?;
        match decoded.as_slice() {
            [] => {
                self.report(LexErrorKind::EmptyChar, self.start)?;
                Ok(None)
            }
            [byte] => Ok(Some(TokenKind::Character(*byte))),
            [first, ..] => {
                self.report(LexErrorKind::TooManyChars, self.start)?;
                Ok(Some(TokenKind::Character(*first)))
            }
        }
    }

    /// Push a backslash and the byte it escapes, undecoded.
    fn push_escape(&mut self, raw: &mut RawLiteral) -> Result<(), ScanError> {
        raw.mark_escape(self.window.position());
        raw.bytes.push(b'\\');
        self.advance(1)?;
        let escaped = self.window.current();
        if escaped != EOF_BYTE {
            raw.bytes.push(escaped);
            self.advance(1)?;
        }
        Ok(())
    }

    /// Decode escapes, reporting each malformed one at its backslash.
    fn decode(&mut self, raw: &RawLiteral) -> Result<Vec<u8>, ScanError> {
        let mut errors = Vec::new();
        let decoded = decode_escapes(&raw.bytes, &mut errors);
        for err in errors {
            let position = raw.escape_position(err.offset()).unwrap_or(self.start);
            self.report(err.into(), position)?;
        }
        Ok(decoded)
    }

    fn intern_decoded(&mut self, raw: &RawLiteral) -> Result<TokenKind, ScanError> {
        let decoded = self.decode(raw)?;
        let symbol = self.arena.try_intern_owned(decoded)?;
        Ok(TokenKind::String(symbol))
    }

    // ─── Comments ───────────────────────────────────────────────────

    /// Returns `None` when a comment was skipped.
    fn slash(&mut self) -> Result<Option<TokenKind>, ScanError> {
        match self.window.peek() {
            b'/' => {
                self.advance(2)?;
                self.window
                    .eat_while(|b| b != b'\n')
                    .map_err(|source| self.io_error(source))?;
                Ok(None)
            }
            b'*' => {
                self.advance(2)?;
                loop {
                    if self.window.at_eof() {
                        self.report(LexErrorKind::UnterminatedComment, self.window.position())?;
                        break;
                    }
                    if self.window.current() == b'*' && self.window.peek() == b'/' {
                        self.advance(2)?;
                        break;
                    }
                    self.advance(1)?;
                }
                Ok(None)
            }
            _ => {
                self.advance(1)?;
                Ok(Some(TokenKind::Slash))
            }
        }
    }

    // ─── Words & Numbers ────────────────────────────────────────────

    fn word(&mut self) -> Result<TokenKind, ScanError> {
        let mut text = Vec::new();
        self.collect_while(&mut text, is_word_byte)?;

        if let Some(mode) = lookup_mode(&text) {
            Ok(TokenKind::Mode(mode))
        } else if let Some(keyword) = lookup_keyword(&text) {
            Ok(TokenKind::Keyword(keyword))
        } else {
            Ok(TokenKind::Identifier(text))
        }
    }

    fn number(&mut self) -> Result<TokenKind, ScanError> {
        let mut text = Vec::new();
        self.collect_while(&mut text, is_numeric_byte)?;

        // `0..10` is a range, not a float.
        if self.window.current() != b'.' || self.window.peek() == b'.' {
            return Ok(TokenKind::Integer(text));
        }

        text.push(b'.');
        self.advance(1)?;
        let integral_start = text.len();
        self.collect_while(&mut text, is_numeric_byte)?;
        if text.len() == integral_start {
            text.push(b'0');
        }
        Ok(TokenKind::Float(text))
    }

    fn collect_while(&mut self, buf: &mut Vec<u8>, pred: fn(u8) -> bool) -> Result<(), ScanError> {
        while pred(self.window.current()) {
            buf.push(self.window.current());
            self.advance(1)?;
        }
        Ok(())
    }

    // ─── Plumbing ───────────────────────────────────────────────────

    fn eat_blanks(&mut self) -> Result<(), ScanError> {
        self.window
            .eat_blanks(true)
            .map_err(|source| self.io_error(source))
    }

    #[inline]
    fn advance(&mut self, n: usize) -> Result<(), ScanError> {
        self.window.advance(n).map_err(|source| self.io_error(source))
    }

    #[cold]
    fn io_error(&self, source: std::io::Error) -> ScanError {
        ScanError::Io {
            source_name: Arc::clone(&self.source_name),
            source,
        }
    }

    fn report(&mut self, kind: LexErrorKind, position: Position) -> Result<(), ScanError> {
        debug!(
            code = %kind.code(),
            source = %self.source_name,
            %position,
            "{}",
            kind.message()
        );
        self.sink
            .report(kind.into_diagnostic(Arc::clone(&self.source_name), position))?;
        Ok(())
    }
}

impl<S: ByteSource, D: DiagnosticSink + ?Sized> Iterator for Scanner<'_, S, D> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        self.finished = match &result {
            Ok(token) => token.is_eof(),
            Err(_) => true,
        };
        Some(result)
    }
}
