//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::{Diagnostic, DiagnosticSink, Severity, SinkError};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const LOCATION: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color` value.
    pub fn parse(s: &str) -> Option<ColorMode> {
        match s {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
///
/// Output for one diagnostic:
///
/// ```text
/// error[E0001]: unterminated string literal
///   --> main.cin:1:9
///   = scanner error
/// ```
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    error_count: usize,
    warning_count: usize,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter; `is_tty` is consulted for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            error_count: 0,
            warning_count: 0,
        }
    }

    fn write_colored(&mut self, text: &str, color: &str) -> io::Result<()> {
        if self.colors {
            write!(self.writer, "{color}{text}{}", colors::RESET)
        } else {
            write!(self.writer, "{text}")
        }
    }

    fn write_severity(&mut self, severity: Severity) -> io::Result<()> {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        };
        self.write_colored(&severity.to_string(), color)
    }

    fn write_code(&mut self, code: &str) -> io::Result<()> {
        if self.colors {
            write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET)
        } else {
            write!(self.writer, "[{code}]")
        }
    }

    /// Write a single diagnostic.
    pub fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
            Severity::Note => {}
        }

        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity)?;
        self.write_code(diagnostic.code.as_str())?;
        writeln!(self.writer, ": {}", diagnostic.message)?;

        write!(self.writer, "  ")?;
        self.write_colored("-->", colors::LOCATION)?;
        writeln!(
            self.writer,
            " {}:{}",
            diagnostic.source_name, diagnostic.position
        )?;
        writeln!(self.writer, "  = {}", diagnostic.category)?;

        for note in &diagnostic.notes {
            write!(self.writer, "  = ")?;
            self.write_colored("note", colors::BOLD)?;
            writeln!(self.writer, ": {note}")?;
        }

        writeln!(self.writer)
    }

    pub fn emit_all(&mut self, diagnostics: &[Diagnostic]) -> io::Result<()> {
        for diag in diagnostics {
            self.emit(diag)?;
        }
        Ok(())
    }

    /// Write a free-standing `note: message` line.
    pub fn emit_note(&mut self, message: &str) -> io::Result<()> {
        self.write_colored("note", colors::NOTE)?;
        writeln!(self.writer, ": {message}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Emit a summary of errors/warnings. Writes nothing when both are zero.
    pub fn emit_summary(&mut self, error_count: usize, warning_count: usize) -> io::Result<()> {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR)?;

            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };

            if warning_count > 0 {
                writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                )
            } else {
                writeln!(self.writer, ": aborting due to {error_part}")
            }
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING)?;
            writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            )
        } else {
            Ok(())
        }
    }

    /// Errors emitted so far through this emitter.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }
}

/// Streams each diagnostic to the writer as soon as it is reported.
impl<W: Write> DiagnosticSink for TerminalEmitter<W> {
    fn report(&mut self, diagnostic: Diagnostic) -> Result<(), SinkError> {
        self.emit(&diagnostic)?;
        Ok(())
    }
}
