//! Launcher resolution errors.

use thiserror::Error;

use crate::domain::{CommLayer, CommSubstrate, LauncherId};

/// Errors raised while resolving the launcher.
///
/// Every variant is a configuration the user has to fix; none of them are
/// retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LauncherError {
    /// An explicit launcher override is incompatible with comm/substrate.
    #[error(
        "CHPL_LAUNCHER={launcher} is not supported for CHPL_COMM={comm} \
         CHPL_COMM_SUBSTRATE={substrate}, CHPL_LAUNCHER={required} is required"
    )]
    UnsupportedOverride {
        launcher: LauncherId,
        comm: CommLayer,
        substrate: CommSubstrate,
        required: &'static str,
    },
}

/// Result type for launcher resolution.
pub type LauncherResult<T> = Result<T, LauncherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_override_message() {
        let err = LauncherError::UnsupportedOverride {
            launcher: LauncherId::new("slurm-srun"),
            comm: CommLayer::Gasnet,
            substrate: CommSubstrate::Udp,
            required: LauncherId::AMUDPRUN,
        };

        assert_eq!(
            err.to_string(),
            "CHPL_LAUNCHER=slurm-srun is not supported for CHPL_COMM=gasnet \
             CHPL_COMM_SUBSTRATE=udp, CHPL_LAUNCHER=amudprun is required"
        );
    }
}
