//! Source positions.
//!
//! Lines and columns are both 1-based. The scanner is the only writer; every
//! other stage treats a `Position` as an immutable stamp.

use std::fmt;

/// A 1-based line/column location in a source file.
///
/// Ordering is lexicographic on `(line, column)`, which is the order in
/// which a left-to-right scan visits positions.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The first byte of a file.
    pub const START: Position = Position { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Move one column to the right.
    #[inline]
    pub fn bump_column(&mut self) {
        self.column += 1;
    }

    /// Move to the first column of the following line.
    #[inline]
    pub fn bump_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests;
