//! The receiving end of diagnostic reporting.

use std::io;

use thiserror::Error;

use crate::Diagnostic;

/// Failure to deliver a diagnostic.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write diagnostic: {0}")]
    Io(#[from] io::Error),
}

/// Anything that accepts diagnostics.
///
/// Reporting is fallible only for sinks that do I/O; collecting sinks never
/// fail.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic) -> Result<(), SinkError>;
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) -> Result<(), SinkError> {
        (**self).report(diagnostic)
    }
}

/// Plain collection, unfiltered and in report order.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) -> Result<(), SinkError> {
        self.push(diagnostic);
        Ok(())
    }
}
