//! Reserved words.
//!
//! `Keyword` covers the statement and expression vocabulary; `Mode` covers the
//! binding/passing modifiers. Both are resolved from identifier text by the
//! lexer's static tables. The spelling of each variant lives here so the
//! tables and diagnostics agree on it.

use std::fmt;

/// A reserved keyword.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    Let,
    Fn,
    If,
    Else,
    Match,
    While,
    For,
    In,
    Loop,
    Break,
    Continue,
    Return,
    Struct,
    Enum,
    Trait,
    Impl,
    Import,
    Pub,
    True,
    False,
    And,
    Or,
    Not,
    As,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 24] = [
        Keyword::Let,
        Keyword::Fn,
        Keyword::If,
        Keyword::Else,
        Keyword::Match,
        Keyword::While,
        Keyword::For,
        Keyword::In,
        Keyword::Loop,
        Keyword::Break,
        Keyword::Continue,
        Keyword::Return,
        Keyword::Struct,
        Keyword::Enum,
        Keyword::Trait,
        Keyword::Impl,
        Keyword::Import,
        Keyword::Pub,
        Keyword::True,
        Keyword::False,
        Keyword::And,
        Keyword::Or,
        Keyword::Not,
        Keyword::As,
    ];

    /// Source spelling of the keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Let => "let",
            Keyword::Fn => "fn",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Match => "match",
            Keyword::While => "while",
            Keyword::For => "for",
            Keyword::In => "in",
            Keyword::Loop => "loop",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::Return => "return",
            Keyword::Struct => "struct",
            Keyword::Enum => "enum",
            Keyword::Trait => "trait",
            Keyword::Impl => "impl",
            Keyword::Import => "import",
            Keyword::Pub => "pub",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::And => "and",
            Keyword::Or => "or",
            Keyword::Not => "not",
            Keyword::As => "as",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A binding or parameter-passing mode.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Mode {
    /// Mutable binding.
    Mut,
    /// Compile-time constant.
    Const,
    /// Borrowed reference.
    Ref,
    /// Ownership transfer.
    Move,
}

impl Mode {
    /// Every mode, in declaration order.
    pub const ALL: [Mode; 4] = [Mode::Mut, Mode::Const, Mode::Ref, Mode::Move];

    /// Source spelling of the mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Mut => "mut",
            Mode::Const => "const",
            Mode::Ref => "ref",
            Mode::Move => "move",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
