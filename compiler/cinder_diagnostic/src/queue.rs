//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Features:
//! - Error limits to prevent overwhelming output
//! - Deduplication of an error repeated at the same position
//! - Position-sorted flushing

use std::hash::{Hash, Hasher};

use cinder_ir::Position;
use tracing::debug;

use crate::{Diagnostic, DiagnosticSink, ErrorCode, SinkError};

/// Identity of an error for deduplication.
type DedupKey = (Position, ErrorCode, u64);

#[inline]
fn dedup_key(diag: &Diagnostic) -> DedupKey {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    diag.message.hash(&mut hasher);
    (diag.position, diag.code, hasher.finish())
}

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
    /// Drop an error identical to the previous one: same position, code and
    /// message.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.add(diagnostic);
/// // ... add more diagnostics
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    /// Count of errors (not warnings/notes).
    error_count: usize,
    warning_count: usize,
    /// Diagnostics dropped by the limit or by deduplication.
    suppressed: usize,
    /// Key of the last accepted error.
    last_error: Option<DedupKey>,
    config: DiagnosticConfig,
}

impl Default for DiagnosticQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            warning_count: 0,
            suppressed: 0,
            last_error: None,
            config,
        }
    }

    /// Add a diagnostic to the queue.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if self.limit_reached() {
            debug!(code = %diag.code, "error limit reached, dropping diagnostic");
            self.suppressed += 1;
            return false;
        }

        let is_error = diag.is_error();
        if is_error {
            let key = dedup_key(&diag);
            if self.config.deduplicate && self.last_error == Some(key) {
                debug!(code = %diag.code, position = %diag.position, "dropping duplicate diagnostic");
                self.suppressed += 1;
                return false;
            }
            self.last_error = Some(key);
            self.error_count += 1;
        } else if diag.severity == crate::Severity::Warning {
            self.warning_count += 1;
        }

        self.diagnostics.push(diag);
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Number of diagnostics filtered out since the last flush.
    pub fn suppressed_count(&self) -> usize {
        self.suppressed
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn config(&self) -> &DiagnosticConfig {
        &self.config
    }

    /// Sort diagnostics by position and return them.
    ///
    /// Clears the queue after flushing. The sort is stable, so diagnostics at
    /// the same position keep their report order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| w[0].position <= w[1].position);

        if !already_sorted {
            self.diagnostics.sort_by_key(|d| d.position);
        }

        let result = std::mem::take(&mut self.diagnostics);

        self.error_count = 0;
        self.warning_count = 0;
        self.suppressed = 0;
        self.last_error = None;

        result
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn report(&mut self, diagnostic: Diagnostic) -> Result<(), SinkError> {
        self.add(diagnostic);
        Ok(())
    }
}
