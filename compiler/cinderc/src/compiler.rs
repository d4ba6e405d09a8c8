//! The compiler object: one source file, its arena and its diagnostics.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cinder_diagnostic::{Diagnostic, DiagnosticQueue};
use cinder_ir::{StringArena, Token};
use cinder_lexer::{Scanner, SliceSource};
use tracing::{debug, info};

use crate::{CompileError, CompilerConfig};

/// Source file extension, without the dot.
pub const EXTENSION: &str = "cin";

/// Result of a successful compilation run.
#[derive(Debug)]
pub struct CompileOutput {
    /// Every token up to and including `Eof`.
    pub tokens: Vec<Token>,
    /// Diagnostics kept by the queue, sorted by position.
    pub diagnostics: Vec<Diagnostic>,
    pub error_count: usize,
    /// Diagnostics dropped by the error limit or deduplication.
    pub suppressed: usize,
}

impl CompileOutput {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// A compilation of a single source file.
///
/// Lexical problems never make [`compile`](Self::compile) fail; they are
/// collected in the compiler's diagnostic queue and returned in the output.
pub struct Compiler {
    input: Arc<str>,
    output: Option<PathBuf>,
    contents: Vec<u8>,
    arena: StringArena,
    diagnostics: DiagnosticQueue,
    config: CompilerConfig,
}

impl Compiler {
    /// Open `input` (relative to the current directory) for compilation.
    ///
    /// Rejects files whose extension is not `.cin`. Trailing whitespace is
    /// trimmed from the contents.
    pub fn new(
        input: impl AsRef<Path>,
        output: Option<PathBuf>,
        config: CompilerConfig,
    ) -> Result<Self, CompileError> {
        let input = input.as_ref();
        let cwd = env::current_dir().map_err(|source| CompileError::Io {
            path: PathBuf::from("."),
            source,
        })?;
        let path = cwd.join(input);

        match path.extension() {
            None => return Err(CompileError::MissingExtension { path }),
            Some(ext) if ext != EXTENSION => {
                let found = ext.to_string_lossy().into_owned();
                return Err(CompileError::InvalidExtension { path, found });
            }
            Some(_) => {}
        }

        let mut contents = fs::read(&path).map_err(|source| CompileError::Io {
            path: path.clone(),
            source,
        })?;
        let trimmed = contents.trim_ascii_end().len();
        contents.truncate(trimmed);
        debug!(path = %path.display(), bytes = contents.len(), "read source");

        Ok(Self::build(
            Arc::from(input.to_string_lossy().as_ref()),
            output,
            contents,
            config,
        ))
    }

    /// Compile an in-memory source named `name`.
    pub fn from_source(
        name: impl Into<Arc<str>>,
        contents: impl Into<Vec<u8>>,
        config: CompilerConfig,
    ) -> Self {
        Self::build(name.into(), None, contents.into(), config)
    }

    fn build(
        input: Arc<str>,
        output: Option<PathBuf>,
        contents: Vec<u8>,
        config: CompilerConfig,
    ) -> Self {
        Compiler {
            input,
            output,
            contents,
            arena: StringArena::new(),
            diagnostics: DiagnosticQueue::with_config(config.diagnostics.clone()),
            config,
        }
    }

    /// Scan the whole source.
    ///
    /// May be called again; each call rescans from the start and returns
    /// only that run's diagnostics.
    #[tracing::instrument(level = "debug", skip(self), fields(source = %self.input))]
    pub fn compile(&mut self) -> Result<CompileOutput, CompileError> {
        let scanner = Scanner::new(
            SliceSource::new(&self.contents),
            Arc::clone(&self.input),
            &self.arena,
            &mut self.diagnostics,
        )?;
        let tokens = scanner.tokenize()?;

        let error_count = self.diagnostics.error_count();
        let suppressed = self.diagnostics.suppressed_count();
        let diagnostics = self.diagnostics.flush();
        info!(tokens = tokens.len(), errors = error_count, suppressed, "scan complete");

        Ok(CompileOutput {
            tokens,
            diagnostics,
            error_count,
            suppressed,
        })
    }

    /// Arena holding string literal contents of every compiled token.
    pub fn arena(&self) -> &StringArena {
        &self.arena
    }

    /// Source name stamped on every token.
    pub fn input(&self) -> &Arc<str> {
        &self.input
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }
}
