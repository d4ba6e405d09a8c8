//! The `check` command: scan a file and report diagnostics only.

use std::io::Write;

use cinder_diagnostic::emitter::TerminalEmitter;
use tracing::debug;

use super::report;
use crate::{CompileError, Compiler};

/// Returns `true` when errors were reported.
pub fn check<E: Write>(
    compiler: &mut Compiler,
    emitter: &mut TerminalEmitter<E>,
) -> Result<bool, CompileError> {
    let output = compiler.compile()?;
    debug!(tokens = output.tokens.len(), "check finished scanning");
    report(&output, emitter)?;
    Ok(output.has_errors())
}
