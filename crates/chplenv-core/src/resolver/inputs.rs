//! The facts a launcher decision is made from.

use crate::domain::{CommLayer, CommSubstrate, LauncherId, PlatformId, PlatformKind};
use crate::ports::{EnvFactsPort, OverrideSource};

/// Configuration key for the launcher override.
pub const LAUNCHER_KEY: &str = "CHPL_LAUNCHER";

/// Snapshot of everything the launcher policy reads, except probe results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherInputs {
    /// Explicit `CHPL_LAUNCHER`, if the user set one.
    pub launcher_override: Option<LauncherId>,
    pub comm: CommLayer,
    pub substrate: CommSubstrate,
    /// Target platform.
    pub platform: PlatformId,
}

impl LauncherInputs {
    pub fn new(
        comm: impl Into<CommLayer>,
        substrate: impl Into<CommSubstrate>,
        platform: impl Into<PlatformId>,
    ) -> Self {
        Self {
            launcher_override: None,
            comm: comm.into(),
            substrate: substrate.into(),
            platform: platform.into(),
        }
    }

    /// Set the launcher override. An empty string counts as unset.
    #[must_use]
    pub fn with_override(mut self, launcher: impl Into<String>) -> Self {
        let launcher = launcher.into();
        self.launcher_override = (!launcher.is_empty()).then(|| LauncherId::new(launcher));
        self
    }

    /// Query the collaborators in order: override, comm, substrate, platform.
    pub fn gather(overrides: &dyn OverrideSource, facts: &dyn EnvFactsPort) -> Self {
        let launcher_override = overrides
            .get(LAUNCHER_KEY)
            .filter(|value| !value.is_empty())
            .map(LauncherId::new);
        let comm = facts.comm();
        let substrate = facts.substrate();
        let platform = facts.platform(PlatformKind::Target);

        Self {
            launcher_override,
            comm,
            substrate,
            platform,
        }
    }
}
