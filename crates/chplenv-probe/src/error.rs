//! Adapter errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration for the resolver.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The chplconfig file exists but could not be opened.
    #[error("Failed to read {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// A line in the chplconfig file is not `KEY=VALUE`.
    #[error("Invalid entry in {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Result type for adapter operations.
pub type ProbeResult<T> = Result<T, ProbeError>;
