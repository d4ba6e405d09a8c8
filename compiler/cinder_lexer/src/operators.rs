//! Operator tables.
//!
//! Each compound trigger byte owns an ordered candidate list. Resolution
//! tries candidates in order and takes the first whose bytes prefix the
//! probe, so a candidate must precede every shorter candidate that is a
//! prefix of it (`..=` before `..`). `ordering_is_longest_first` in the
//! tests enforces this for every table.

use cinder_ir::TokenKind;

/// A multi-byte operator spelling and the kind it produces.
pub(crate) struct Candidate {
    pub(crate) text: &'static [u8],
    pub(crate) kind: TokenKind,
}

/// Candidates for one trigger byte plus its single-byte fallback.
pub(crate) struct CompoundTable {
    pub(crate) trigger: u8,
    pub(crate) single: TokenKind,
    pub(crate) candidates: &'static [Candidate],
}

macro_rules! candidates {
    ($($text:literal => $kind:ident),* $(,)?) => {
        &[$(Candidate { text: $text, kind: TokenKind::$kind }),*]
    };
}

pub(crate) static COMPOUND_TABLES: [CompoundTable; 10] = [
    CompoundTable {
        trigger: b'=',
        single: TokenKind::Assign,
        candidates: candidates![b"==" => Equal, b"=>" => FatArrow],
    },
    CompoundTable {
        trigger: b':',
        single: TokenKind::Colon,
        candidates: candidates![b":=" => Declare, b"::" => PathSep],
    },
    CompoundTable {
        trigger: b'>',
        single: TokenKind::Greater,
        candidates: candidates![b">=" => GreaterEqual, b">>" => ShiftRight],
    },
    CompoundTable {
        trigger: b'<',
        single: TokenKind::Less,
        candidates: candidates![
            b"<=" => LessEqual,
            b"<|" => PipeLeft,
            b"<<" => ShiftLeft,
            b"<>" => Diamond,
        ],
    },
    CompoundTable {
        trigger: b'-',
        single: TokenKind::Minus,
        candidates: candidates![b"--" => Decrement, b"->" => Arrow, b"-=" => MinusAssign],
    },
    CompoundTable {
        trigger: b'+',
        single: TokenKind::Plus,
        candidates: candidates![b"++" => Increment, b"+=" => PlusAssign],
    },
    CompoundTable {
        trigger: b'*',
        single: TokenKind::Star,
        candidates: candidates![b"**=" => PowerAssign, b"**" => Power, b"*=" => StarAssign],
    },
    CompoundTable {
        trigger: b'.',
        single: TokenKind::Dot,
        candidates: candidates![b"..=" => RangeInclusive, b".." => Range],
    },
    CompoundTable {
        trigger: b'!',
        single: TokenKind::Bang,
        candidates: candidates![b"!=" => NotEqual],
    },
    CompoundTable {
        trigger: b'|',
        single: TokenKind::Pipe,
        candidates: candidates![b"|>" => PipeRight],
    },
];

/// Table for a compound trigger byte, if `byte` is one.
pub(crate) fn compound_table(byte: u8) -> Option<&'static CompoundTable> {
    COMPOUND_TABLES.iter().find(|table| table.trigger == byte)
}

/// Resolve the operator starting at `probe[0]`.
///
/// Returns the kind and the number of bytes it spans. Falls back to the
/// table's single-byte kind when no candidate matches.
pub(crate) fn resolve(table: &CompoundTable, probe: [u8; 3]) -> (TokenKind, usize) {
    debug_assert_eq!(probe[0], table.trigger);
    table
        .candidates
        .iter()
        .find(|c| probe.starts_with(c.text))
        .map_or_else(
            || (table.single.clone(), 1),
            |c| (c.kind.clone(), c.text.len()),
        )
}

/// Kind for a byte outside every other dispatch arm.
pub(crate) fn single_byte_kind(byte: u8) -> TokenKind {
    match byte {
        b'%' => TokenKind::Percent,
        b'^' => TokenKind::Caret,
        b'&' => TokenKind::Ampersand,
        b'~' => TokenKind::Tilde,
        b'?' => TokenKind::Question,
        b'@' => TokenKind::At,
        b'#' => TokenKind::Hash,
        b'$' => TokenKind::Dollar,
        b',' => TokenKind::Comma,
        b';' => TokenKind::Semicolon,
        b'(' => TokenKind::LeftParen,
        b')' => TokenKind::RightParen,
        b'{' => TokenKind::LeftBrace,
        b'}' => TokenKind::RightBrace,
        b'[' => TokenKind::LeftBracket,
        b']' => TokenKind::RightBracket,
        b'\\' => TokenKind::Backslash,
        b'\n' => TokenKind::Newline,
        other => TokenKind::Unknown(other),
    }
}
