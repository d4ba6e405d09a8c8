//! Diagnostic system for Cinder.
//!
//! Every diagnostic carries:
//! - an error code for searchability
//! - a category naming the phase that produced it
//! - the source file and position where it was detected
//! - a message saying what went wrong
//!
//! Producers hand diagnostics to a [`DiagnosticSink`]. Two sinks ship with
//! this crate: [`DiagnosticQueue`] collects, deduplicates and sorts them for
//! batch reporting, and [`emitter::TerminalEmitter`] writes each one as it
//! arrives.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;
mod sink;

pub use diagnostic::{Category, Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
pub use sink::{DiagnosticSink, SinkError};
