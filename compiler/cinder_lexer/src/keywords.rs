//! Keyword and mode resolution.
//!
//! Both lookups take the raw identifier bytes. The scanner consults the mode
//! table first, so a word present in both would resolve as a mode.

use cinder_ir::{Keyword, Mode};

/// Look up a reserved keyword by text.
///
/// Uses length-bucketing for fast rejection: every keyword is 2-8 bytes.
pub fn lookup_keyword(text: &[u8]) -> Option<Keyword> {
    match text.len() {
        2 => match text {
            b"fn" => Some(Keyword::Fn),
            b"if" => Some(Keyword::If),
            b"in" => Some(Keyword::In),
            b"or" => Some(Keyword::Or),
            b"as" => Some(Keyword::As),
            _ => None,
        },
        3 => match text {
            b"let" => Some(Keyword::Let),
            b"for" => Some(Keyword::For),
            b"pub" => Some(Keyword::Pub),
            b"and" => Some(Keyword::And),
            b"not" => Some(Keyword::Not),
            _ => None,
        },
        4 => match text {
            b"else" => Some(Keyword::Else),
            b"loop" => Some(Keyword::Loop),
            b"enum" => Some(Keyword::Enum),
            b"impl" => Some(Keyword::Impl),
            b"true" => Some(Keyword::True),
            _ => None,
        },
        5 => match text {
            b"match" => Some(Keyword::Match),
            b"while" => Some(Keyword::While),
            b"break" => Some(Keyword::Break),
            b"trait" => Some(Keyword::Trait),
            b"false" => Some(Keyword::False),
            _ => None,
        },
        6 => match text {
            b"return" => Some(Keyword::Return),
            b"struct" => Some(Keyword::Struct),
            b"import" => Some(Keyword::Import),
            _ => None,
        },
        8 => match text {
            b"continue" => Some(Keyword::Continue),
            _ => None,
        },
        _ => None,
    }
}

/// Look up a binding mode by text.
pub fn lookup_mode(text: &[u8]) -> Option<Mode> {
    match text {
        b"mut" => Some(Mode::Mut),
        b"const" => Some(Mode::Const),
        b"ref" => Some(Mode::Ref),
        b"move" => Some(Mode::Move),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
