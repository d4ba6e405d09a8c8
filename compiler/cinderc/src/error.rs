use std::io;
use std::path::PathBuf;

use cinder_lexer::ScanError;
use thiserror::Error;

/// Failures that stop a compilation. Lexical problems are diagnostics, not
/// `CompileError`s.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("invalid extension: {found}, expected: cin ({})", .path.display())]
    InvalidExtension { path: PathBuf, found: String },
    #[error("missing extension, expected a .cin file: {}", .path.display())]
    MissingExtension { path: PathBuf },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
