//! Error codes for compiler diagnostics.
//!
//! Each code is a unique identifier (e.g. `E0001`). The first digit names the
//! phase; only the scanner (`E0xxx`) reports diagnostics today.

use std::fmt;

use crate::Category;

/// Error codes for all compiler diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unterminated string literal
    E0001,
    /// Unterminated character literal
    E0002,
    /// Empty character literal
    E0003,
    /// Too many characters in character literal
    E0004,
    /// Unrecognized escape character
    E0005,
    /// Unterminated escape sequence
    E0006,
    /// Unterminated multiline comment
    E0007,
    /// Missing `|` at the start of a multi-line string line
    E0008,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E0008,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
        }
    }

    /// One-line explanation, used by `--explain`-style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unterminated character literal",
            ErrorCode::E0003 => "empty character literal",
            ErrorCode::E0004 => "too many characters in character literal",
            ErrorCode::E0005 => "unrecognized escape character",
            ErrorCode::E0006 => "unterminated escape sequence",
            ErrorCode::E0007 => "unterminated multiline comment",
            ErrorCode::E0008 => "missing start of line delimiter in multi-line string",
        }
    }

    /// Phase that reports this code.
    pub fn category(&self) -> Category {
        Category::Scanner
    }

    /// Parse a code string like `"E0005"`.
    pub fn parse(s: &str) -> Option<ErrorCode> {
        ErrorCode::ALL.into_iter().find(|code| code.as_str() == s)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
