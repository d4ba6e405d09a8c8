//! Scanner for Cinder source.
//!
//! Turns a byte stream into [`Token`](cinder_ir::Token)s, one per call to
//! [`Scanner::next_token`]. The scanner pulls bytes lazily from a
//! [`ByteSource`], interns string contents into a
//! [`StringArena`](cinder_ir::StringArena) and reports lexical problems to a
//! [`DiagnosticSink`](cinder_diagnostic::DiagnosticSink) without stopping.
//!
//! # Layers
//!
//! - [`source`]: byte transports
//! - `window`: four-byte lookahead and line/column tracking
//! - `operators`: single-byte and compound operator tables
//! - [`escape`]: escape decoding and encoding
//! - `keywords`: keyword and mode tables
//! - `scanner`: dispatch and literal readers

pub mod escape;
mod keywords;
mod lex_error;
mod operators;
mod scanner;
pub mod source;
mod window;

pub use escape::{decode_escapes, encode_escapes, EscapeError};
pub use keywords::{lookup_keyword, lookup_mode};
pub use lex_error::{LexErrorKind, ScanError};
pub use scanner::Scanner;
pub use source::{ByteSource, ReaderSource, SliceSource};
