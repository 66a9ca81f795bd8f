//! Override source backed by the environment and chplconfig.

use chplenv_core::OverrideSource;

use crate::config::ChplConfig;
use crate::env::{EnvProvider, SystemEnv};
use crate::error::ProbeResult;

/// Looks up `CHPL_*` overrides: the environment first, then chplconfig.
#[derive(Debug, Clone)]
pub struct ChplOverrides<E = SystemEnv> {
    env: E,
    config: ChplConfig,
}

impl<E: EnvProvider> ChplOverrides<E> {
    pub const fn new(env: E, config: ChplConfig) -> Self {
        Self { env, config }
    }

    /// Load chplconfig from the location `env` points at.
    pub fn load(env: E) -> ProbeResult<Self> {
        let config = ChplConfig::load(&env)?;
        Ok(Self::new(env, config))
    }

    pub const fn config(&self) -> &ChplConfig {
        &self.config
    }

    pub const fn env(&self) -> &E {
        &self.env
    }
}

impl<E: EnvProvider> OverrideSource for ChplOverrides<E> {
    fn get(&self, key: &str) -> Option<String> {
        self.env
            .get_str(key)
            .or_else(|| self.config.get(key).map(str::to_string))
    }
}
