//! Command handlers for the `cinder` CLI.
//!
//! Each handler takes its writers explicitly so it can be driven from tests;
//! the `*_file` wrappers bind them to stdout/stderr.

use std::io::{self, IsTerminal, Write};

use cinder_diagnostic::emitter::TerminalEmitter;

use crate::{CompileError, CompileOutput, Compiler, CompilerConfig};

mod check;
mod lex;

pub use check::check;
pub use lex::{describe, lex, write_tokens};

/// Emit every diagnostic of `output`, then the closing summary.
fn report<W: Write>(
    output: &CompileOutput,
    emitter: &mut TerminalEmitter<W>,
) -> Result<(), CompileError> {
    emitter.emit_all(&output.diagnostics)?;
    let (errors, warnings) = (emitter.error_count(), emitter.warning_count());
    emitter.emit_summary(errors, warnings)?;
    if output.suppressed > 0 {
        emitter.emit_note(&format!(
            "{} further diagnostic(s) suppressed (limit or duplicates)",
            output.suppressed
        ))?;
    }
    emitter.flush()?;
    Ok(())
}

fn stderr_emitter(config: &CompilerConfig) -> TerminalEmitter<io::Stderr> {
    let is_tty = io::stderr().is_terminal();
    TerminalEmitter::with_color_mode(io::stderr(), config.color, is_tty)
}

/// `cinder lex <file>`: print the token stream, diagnostics to stderr.
///
/// Returns `true` when lexical errors were found.
pub fn lex_file(path: &str, config: CompilerConfig) -> Result<bool, CompileError> {
    let mut emitter = stderr_emitter(&config);
    let mut compiler = Compiler::new(path, None, config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    lex(&mut compiler, &mut out, &mut emitter)
}

/// `cinder check <file>`: report diagnostics only.
pub fn check_file(path: &str, config: CompilerConfig) -> Result<bool, CompileError> {
    let mut emitter = stderr_emitter(&config);
    let mut compiler = Compiler::new(path, None, config)?;
    check(&mut compiler, &mut emitter)
}

#[cfg(test)]
mod tests;
