//! Cinder IR - shared front-end types.
//!
//! This crate contains the data structures that flow out of the scanner:
//! - `Position` for 1-based line/column source locations
//! - `Token` and `TokenKind` for the classified token stream
//! - `Keyword` and `Mode` for reserved words
//! - `StringArena` and `Symbol` for string payloads that outlive the scanner
//!
//! Every type here is plain data. Nothing in this crate reads source text or
//! reports diagnostics; that lives in `cinder_lexer` and `cinder_diagnostic`.

mod arena;
mod keyword;
mod position;
mod token;

pub use arena::{ArenaError, StringArena, Symbol};
pub use keyword::{Keyword, Mode};
pub use position::Position;
pub use token::{Token, TokenKind};
