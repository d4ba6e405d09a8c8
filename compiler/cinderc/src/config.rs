//! Driver configuration and command-line flag parsing.

use cinder_diagnostic::emitter::ColorMode;
use cinder_diagnostic::DiagnosticConfig;
use thiserror::Error;

/// Settings shared by every command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompilerConfig {
    pub diagnostics: DiagnosticConfig,
    pub color: ColorMode,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for --error-limit: `{0}` (expected a non-negative integer)")]
    InvalidErrorLimit(String),
    #[error("invalid value for --color: `{0}` (expected auto, always or never)")]
    InvalidColor(String),
    #[error("unknown option: {0}")]
    UnknownFlag(String),
}

/// Split `args` into a config and the positional arguments.
///
/// Recognized flags:
/// - `--error-limit=<n>` (0 = unlimited)
/// - `--color=auto|always|never`
/// - `--no-dedup`
pub fn parse_args(args: &[String]) -> Result<(CompilerConfig, Vec<&str>), ConfigError> {
    let mut config = CompilerConfig::default();
    let mut positional = Vec::new();

    for arg in args {
        if let Some(limit) = arg.strip_prefix("--error-limit=") {
            config.diagnostics.error_limit = limit
                .parse()
                .map_err(|_| ConfigError::InvalidErrorLimit(limit.to_string()))?;
        } else if let Some(color) = arg.strip_prefix("--color=") {
            config.color =
                ColorMode::parse(color).ok_or_else(|| ConfigError::InvalidColor(color.to_string()))?;
        } else if arg == "--no-dedup" {
            config.diagnostics.deduplicate = false;
        } else if arg.starts_with("--") {
            return Err(ConfigError::UnknownFlag(arg.clone()));
        } else {
            positional.push(arg.as_str());
        }
    }

    Ok((config, positional))
}
