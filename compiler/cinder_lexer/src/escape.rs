//! Escape processing for string and character literals.
//!
//! Decoding runs once per literal over the raw bytes collected by the
//! scanner. Recognized escapes:
//!
//! | raw   | decoded |
//! |-------|---------|
//! | `\n`  | LF      |
//! | `\r`  | CR      |
//! | `\t`  | TAB     |
//! | `\\`  | `\`     |
//! | `\|`  | `\|`    |
//! | `\'`  | `'`     |
//! | `\"`  | `"`     |
//! | `\0`  | NUL     |
//!
//! An unrecognized escape keeps its backslash and the following byte is
//! decoded as ordinary content, so `\s` survives as `\s`.

/// `(escape letter, decoded byte)` pairs.
const ESCAPES: [(u8, u8); 8] = [
    (b'n', b'\n'),
    (b'r', b'\r'),
    (b't', b'\t'),
    (b'\\', b'\\'),
    (b'|', b'|'),
    (b'\'', b'\''),
    (b'"', b'"'),
    (b'0', b'\0'),
];

/// A malformed escape found while decoding.
///
/// `offset` is the index of the escape's backslash in the raw bytes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EscapeError {
    /// `\` followed by a byte outside the escape table.
    Unrecognized { byte: u8, offset: usize },
    /// `\` as the last byte of the literal.
    Unterminated { offset: usize },
}

impl EscapeError {
    pub fn offset(self) -> usize {
        match self {
            EscapeError::Unrecognized { offset, .. } | EscapeError::Unterminated { offset } => {
                offset
            }
        }
    }
}

#[inline]
fn decode_letter(letter: u8) -> Option<u8> {
    ESCAPES
        .iter()
        .find_map(|&(l, decoded)| (l == letter).then_some(decoded))
}

#[inline]
fn encode_byte(byte: u8) -> Option<u8> {
    ESCAPES
        .iter()
        .find_map(|&(letter, decoded)| (decoded == byte).then_some(letter))
}

/// Decode escapes in `raw`, pushing one error per malformed escape.
pub fn decode_escapes(raw: &[u8], errors: &mut Vec<EscapeError>) -> Vec<u8> {
    if !raw.contains(&b'\\') {
        return raw.to_vec();
    }

    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        let byte = raw[i];
        if byte != b'\\' {
            out.push(byte);
            i += 1;
            continue;
        }
        match raw.get(i + 1) {
            Some(&letter) => {
                if let Some(decoded) = decode_letter(letter) {
                    out.push(decoded);
                    i += 2;
                } else {
                    errors.push(EscapeError::Unrecognized {
                        byte: letter,
                        offset: i,
                    });
                    out.push(b'\\');
                    i += 1;
                }
            }
            None => {
                errors.push(EscapeError::Unterminated { offset: i });
                out.push(b'\\');
                i += 1;
            }
        }
    }
    out
}

/// Inverse of [`decode_escapes`]: escape every byte that has a table entry.
///
/// `decode_escapes(&encode_escapes(bytes))` returns `bytes` for any input.
pub fn encode_escapes(decoded: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(decoded.len());
    for &byte in decoded {
        if let Some(letter) = encode_byte(byte) {
            out.push(b'\\');
            out.push(letter);
        } else {
            out.push(byte);
        }
    }
    out
}
