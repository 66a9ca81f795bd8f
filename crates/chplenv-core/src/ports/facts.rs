//! Port for the environment facts the launcher depends on.

use crate::domain::{CommLayer, CommSubstrate, PlatformId, PlatformKind};

/// Source of the communication layer, substrate and platform.
///
/// Each of these is itself the outcome of a resolution step (user setting or
/// platform default); the launcher policy only consumes the final values.
pub trait EnvFactsPort {
    /// Resolved `CHPL_COMM`.
    fn comm(&self) -> CommLayer;

    /// Resolved `CHPL_COMM_SUBSTRATE`.
    fn substrate(&self) -> CommSubstrate;

    /// Resolved `CHPL_TARGET_PLATFORM` or `CHPL_HOST_PLATFORM`.
    fn platform(&self, kind: PlatformKind) -> PlatformId;
}

/// Fixed environment facts, for tests and embedding.
#[derive(Debug, Clone)]
pub struct StaticFacts {
    pub comm: CommLayer,
    pub substrate: CommSubstrate,
    pub target_platform: PlatformId,
    pub host_platform: PlatformId,
}

impl StaticFacts {
    /// Same platform for host and target.
    pub fn new(
        comm: impl Into<CommLayer>,
        substrate: impl Into<CommSubstrate>,
        platform: impl Into<PlatformId>,
    ) -> Self {
        let platform = platform.into();
        Self {
            comm: comm.into(),
            substrate: substrate.into(),
            host_platform: platform.clone(),
            target_platform: platform,
        }
    }
}

impl EnvFactsPort for StaticFacts {
    fn comm(&self) -> CommLayer {
        self.comm.clone()
    }

    fn substrate(&self) -> CommSubstrate {
        self.substrate.clone()
    }

    fn platform(&self, kind: PlatformKind) -> PlatformId {
        match kind {
            PlatformKind::Target => self.target_platform.clone(),
            PlatformKind::Host => self.host_platform.clone(),
        }
    }
}
