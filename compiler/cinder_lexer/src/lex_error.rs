//! Lexer error types.
//!
//! [`LexErrorKind`] covers recoverable lexical problems; each becomes one
//! scanner diagnostic. [`ScanError`] covers failures the scanner cannot
//! recover from and is returned from `next_token`.

use std::io;
use std::sync::Arc;

use cinder_diagnostic::{Diagnostic, ErrorCode, SinkError};
use cinder_ir::{ArenaError, Position};
use thiserror::Error;

use crate::EscapeError;

/// What kind of lexical problem occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Missing closing `"`.
    UnterminatedString,
    /// Missing closing `'`.
    UnterminatedChar,
    /// `''`, or content that decodes to nothing.
    EmptyChar,
    /// Character literal decoding to more than one byte.
    TooManyChars,
    /// `\` followed by a byte outside the escape table.
    UnrecognizedEscape { byte: u8 },
    /// `\` as the last byte of a literal.
    UnterminatedEscape,
    /// `/*` without a matching `*/`.
    UnterminatedComment,
    /// Multi-line string line not starting with `|`.
    MissingLineDelimiter,
}

impl LexErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnterminatedChar => ErrorCode::E0002,
            LexErrorKind::EmptyChar => ErrorCode::E0003,
            LexErrorKind::TooManyChars => ErrorCode::E0004,
            LexErrorKind::UnrecognizedEscape { .. } => ErrorCode::E0005,
            LexErrorKind::UnterminatedEscape => ErrorCode::E0006,
            LexErrorKind::UnterminatedComment => ErrorCode::E0007,
            LexErrorKind::MissingLineDelimiter => ErrorCode::E0008,
        }
    }

    pub fn message(self) -> String {
        match self {
            LexErrorKind::UnterminatedString => "unterminated string literal".into(),
            LexErrorKind::UnterminatedChar => "unterminated character literal".into(),
            LexErrorKind::EmptyChar => "character literal is empty".into(),
            LexErrorKind::TooManyChars => "too many characters in character literal".into(),
            LexErrorKind::UnrecognizedEscape { byte } => {
                format!("unrecognized escape character: {}", byte.escape_ascii())
            }
            LexErrorKind::UnterminatedEscape => "unterminated escape sequence".into(),
            LexErrorKind::UnterminatedComment => "unterminated multiline comment".into(),
            LexErrorKind::MissingLineDelimiter => "missing start of line delimiter `|`".into(),
        }
    }

    /// Build the diagnostic for this problem at `position`.
    #[cold]
    pub fn into_diagnostic(self, source_name: Arc<str>, position: Position) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_location(source_name, position)
            .with_message(self.message())
    }
}

impl From<EscapeError> for LexErrorKind {
    fn from(err: EscapeError) -> Self {
        match err {
            EscapeError::Unrecognized { byte, .. } => LexErrorKind::UnrecognizedEscape { byte },
            EscapeError::Unterminated { .. } => LexErrorKind::UnterminatedEscape,
        }
    }
}

/// A failure that stops scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read `{source_name}`: {source}")]
    Io {
        source_name: Arc<str>,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error(transparent)]
    Arena(#[from] ArenaError),
}
