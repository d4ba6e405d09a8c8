//! The `lex` command: dump the token stream.

use std::io::Write;

use cinder_diagnostic::emitter::TerminalEmitter;
use cinder_ir::{StringArena, Token, TokenKind};
use cinder_lexer::encode_escapes;

use super::report;
use crate::{CompileError, Compiler};

/// One-line rendering of a token kind, payload included.
pub fn describe(kind: &TokenKind, arena: &StringArena) -> String {
    match kind {
        TokenKind::Keyword(kw) => format!("keyword {kw}"),
        TokenKind::Mode(mode) => format!("mode {mode}"),
        TokenKind::Identifier(name) => format!("identifier {}", String::from_utf8_lossy(name)),
        TokenKind::String(sym) => {
            let text = encode_escapes(arena.lookup(*sym));
            format!("string \"{}\"", String::from_utf8_lossy(&text))
        }
        TokenKind::Integer(raw) => format!("integer {}", String::from_utf8_lossy(raw)),
        TokenKind::Float(raw) => format!("float {}", String::from_utf8_lossy(raw)),
        TokenKind::Character(byte) => {
            let text = encode_escapes(&[*byte]);
            format!("character '{}'", String::from_utf8_lossy(&text))
        }
        TokenKind::Unknown(byte) => format!("unknown 0x{byte:02X}"),
        TokenKind::Newline | TokenKind::Eof => kind.display_name().to_string(),
        other => format!("`{}`", other.display_name()),
    }
}

/// Write `line:column kind` for each token.
pub fn write_tokens<W: Write>(
    out: &mut W,
    tokens: &[Token],
    arena: &StringArena,
) -> std::io::Result<()> {
    for token in tokens {
        writeln!(out, "{} {}", token.position, describe(&token.kind, arena))?;
    }
    Ok(())
}

/// Scan `compiler`'s source, print the tokens to `out` and diagnostics to
/// `emitter`. Returns `true` when errors were reported.
pub fn lex<W: Write, E: Write>(
    compiler: &mut Compiler,
    out: &mut W,
    emitter: &mut TerminalEmitter<E>,
) -> Result<bool, CompileError> {
    let output = compiler.compile()?;
    write_tokens(out, &output.tokens, compiler.arena())?;
    out.flush()?;
    report(&output, emitter)?;
    Ok(output.has_errors())
}
