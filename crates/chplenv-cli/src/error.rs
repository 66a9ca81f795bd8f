//! CLI-specific error types and mappings.
//!
//! Maps core and adapter errors to exit codes and user-facing messages.

use chplenv_core::LauncherError;
use chplenv_probe::ProbeError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The configuration cannot be satisfied.
    #[error("{0}")]
    Config(String),

    /// IO error (unreadable config file, closed stdout, ...).
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code (see sysexits.h).
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 78, // EX_CONFIG
            Self::Io(_) => 74,     // EX_IOERR
        }
    }
}

impl From<LauncherError> for CliError {
    fn from(err: LauncherError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<ProbeError> for CliError {
    fn from(err: ProbeError) -> Self {
        match err {
            ProbeError::ConfigRead { .. } => Self::Io(err.to_string()),
            ProbeError::ConfigParse { .. } => Self::Config(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
