//! Token types produced by the scanner.
//!
//! A `Token` is an immutable stamp: what was scanned, which file it came
//! from, and where its first byte sits. Variable-length payloads are owned
//! by the token (identifiers, numeric text) or live in the long-lived
//! [`StringArena`](crate::StringArena) (string literal contents).

use std::fmt;
use std::sync::Arc;

use crate::{Keyword, Mode, Position, Symbol};

/// A classified lexical unit.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Name of the originating source file, shared by every token of a scan.
    pub source_name: Arc<str>,
    /// Position of the token's first byte.
    pub position: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, source_name: Arc<str>, position: Position) -> Self {
        Token {
            kind,
            source_name,
            position,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}:{}", self.kind, self.source_name, self.position)
    }
}

/// Token kinds for Cinder.
///
/// Numeric literals keep their raw text, separators included. Turning that
/// text into a value is a later stage's job.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Single-byte operators and delimiters
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `!`
    Bang,
    /// `|`
    Pipe,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `&`
    Ampersand,
    /// `~`
    Tilde,
    /// `?`
    Question,
    /// `@`
    At,
    /// `#`
    Hash,
    /// `$`
    Dollar,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `\` outside of a literal
    Backslash,
    /// Line break
    Newline,
    /// A byte with no entry in the fixed token table
    Unknown(u8),

    // Compound operators
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `|>`
    PipeRight,
    /// `<|`
    PipeLeft,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `<>`
    Diamond,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `**`
    Power,
    /// `->`
    Arrow,
    /// `=>`
    FatArrow,
    /// `..`
    Range,
    /// `..=`
    RangeInclusive,
    /// `:=`
    Declare,
    /// `::`
    PathSep,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    StarAssign,
    /// `**=`
    PowerAssign,

    // Words
    Keyword(Keyword),
    Mode(Mode),
    Identifier(Vec<u8>),

    // Literals
    /// Decoded string contents, interned in the string arena.
    String(Symbol),
    /// Raw integer text, e.g. `12_000`.
    Integer(Vec<u8>),
    /// Raw float text, e.g. `12_000.50`.
    Float(Vec<u8>),
    /// A single decoded byte.
    Character(u8),

    /// End of input. Repeats forever once reached.
    Eof,
}

impl TokenKind {
    /// Short human-readable description, used by diagnostics and the CLI.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            TokenKind::Bang => "!",
            TokenKind::Pipe => "|",
            TokenKind::Greater => ">",
            TokenKind::Less => "<",
            TokenKind::Percent => "%",
            TokenKind::Caret => "^",
            TokenKind::Ampersand => "&",
            TokenKind::Tilde => "~",
            TokenKind::Question => "?",
            TokenKind::At => "@",
            TokenKind::Hash => "#",
            TokenKind::Dollar => "$",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Backslash => "\\",
            TokenKind::Newline => "newline",
            TokenKind::Unknown(_) => "unknown",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::GreaterEqual => ">=",
            TokenKind::LessEqual => "<=",
            TokenKind::PipeRight => "|>",
            TokenKind::PipeLeft => "<|",
            TokenKind::ShiftLeft => "<<",
            TokenKind::ShiftRight => ">>",
            TokenKind::Diamond => "<>",
            TokenKind::Increment => "++",
            TokenKind::Decrement => "--",
            TokenKind::Power => "**",
            TokenKind::Arrow => "->",
            TokenKind::FatArrow => "=>",
            TokenKind::Range => "..",
            TokenKind::RangeInclusive => "..=",
            TokenKind::Declare => ":=",
            TokenKind::PathSep => "::",
            TokenKind::PlusAssign => "+=",
            TokenKind::MinusAssign => "-=",
            TokenKind::StarAssign => "*=",
            TokenKind::PowerAssign => "**=",
            TokenKind::Keyword(kw) => kw.as_str(),
            TokenKind::Mode(mode) => mode.as_str(),
            TokenKind::Identifier(_) => "identifier",
            TokenKind::String(_) => "string",
            TokenKind::Integer(_) => "integer",
            TokenKind::Float(_) => "float",
            TokenKind::Character(_) => "character",
            TokenKind::Eof => "end of file",
        }
    }

    /// Returns `true` for kinds that carry a payload buffer or arena symbol.
    pub fn has_payload(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier(_)
                | TokenKind::String(_)
                | TokenKind::Integer(_)
                | TokenKind::Float(_)
                | TokenKind::Character(_)
                | TokenKind::Unknown(_)
        )
    }
}
