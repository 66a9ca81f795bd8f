//! Environment facts: comm layer, substrate and platform.
//!
//! Each fact is the user's override if there is one, otherwise a default derived
//! from the platform.

use chplenv_core::{CommLayer, CommSubstrate, EnvFactsPort, OverrideSource, PlatformId, PlatformKind};

use crate::env::{EnvProvider, SystemEnv};
use crate::host::{HostOs, detect_host_platform};

/// Default `CHPL_COMM` for a target platform.
pub fn default_comm(platform: &PlatformId) -> CommLayer {
    let name = platform.as_str();
    if name.starts_with("cray-x") {
        CommLayer::Ugni
    } else if name.starts_with("hpe-cray-") {
        CommLayer::Ofi
    } else if platform.is_slurm_cluster() {
        CommLayer::Gasnet
    } else {
        CommLayer::None
    }
}

/// Default `CHPL_COMM_SUBSTRATE` for a comm layer on a target platform.
pub fn default_substrate(comm: &CommLayer, platform: &PlatformId) -> CommSubstrate {
    if !comm.is_gasnet() {
        return CommSubstrate::None;
    }

    let name = platform.as_str();
    if name.starts_with("cray-x") {
        CommSubstrate::Aries
    } else if name.starts_with("hpe-cray-") {
        CommSubstrate::Ofi
    } else if platform.is_slurm_cluster() {
        CommSubstrate::Ibv
    } else {
        CommSubstrate::Udp
    }
}

/// [`EnvFactsPort`] that reads `CHPL_*` overrides and falls back to defaults.
#[derive(Debug, Clone)]
pub struct EnvFacts<O, E = SystemEnv> {
    overrides: O,
    env: E,
    host: HostOs,
}

impl<O: OverrideSource, E: EnvProvider> EnvFacts<O, E> {
    pub const fn new(overrides: O, env: E) -> Self {
        Self {
            overrides,
            env,
            host: HostOs::current(),
        }
    }

    /// Pretend to run on a different host OS.
    #[must_use]
    pub fn with_host(mut self, host: HostOs) -> Self {
        self.host = host;
        self
    }
}

impl<O: OverrideSource, E: EnvProvider> EnvFactsPort for EnvFacts<O, E> {
    fn comm(&self) -> CommLayer {
        self.overrides.get("CHPL_COMM").map_or_else(
            || default_comm(&self.platform(PlatformKind::Target)),
            |value| CommLayer::parse(&value),
        )
    }

    fn substrate(&self) -> CommSubstrate {
        self.overrides.get("CHPL_COMM_SUBSTRATE").map_or_else(
            || default_substrate(&self.comm(), &self.platform(PlatformKind::Target)),
            |value| CommSubstrate::parse(&value),
        )
    }

    fn platform(&self, kind: PlatformKind) -> PlatformId {
        match kind {
            PlatformKind::Host => self.overrides.get("CHPL_HOST_PLATFORM").map_or_else(
                || detect_host_platform(&self.env, self.host),
                PlatformId::new,
            ),
            PlatformKind::Target => self
                .overrides
                .get("CHPL_TARGET_PLATFORM")
                .map_or_else(|| self.platform(PlatformKind::Host), PlatformId::new),
        }
    }
}
