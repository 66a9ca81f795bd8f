//! Composition root: wires the adapters into a resolution context.

use std::path::PathBuf;

use chplenv_core::ChplEnvContext;
use chplenv_probe::{ChplConfig, ChplOverrides, EnvFacts, PathProbe, SystemEnv};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Options that shape how the context is built.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Directory holding chplconfig. `None` falls back to `$CHPL_HOME`.
    pub chplconfig_dir: Option<PathBuf>,
}

impl From<&Cli> for CliConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            chplconfig_dir: cli.chplconfig.clone(),
        }
    }
}

/// Everything a handler needs.
#[derive(Debug)]
pub struct CliContext {
    pub chplenv: ChplEnvContext,
}

/// Build the context from the real process environment.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let env = SystemEnv;
    let chplconfig = match &config.chplconfig_dir {
        Some(dir) => ChplConfig::from_dir(dir)?,
        None => ChplConfig::load(&env)?,
    };
    if let Some(path) = chplconfig.path() {
        debug!(path = %path.display(), "Using chplconfig");
    }

    let overrides = ChplOverrides::new(env, chplconfig);
    let facts = EnvFacts::new(overrides.clone(), env);
    let probe = PathProbe::from_env(&env);

    Ok(CliContext {
        chplenv: ChplEnvContext::new(overrides, facts, probe),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_bootstrap_rejects_malformed_chplconfig() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("chplconfig"), "not a valid line\n").unwrap();

        let config = CliConfig {
            chplconfig_dir: Some(dir.path().to_path_buf()),
        };
        let err = bootstrap(&config).unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_bootstrap_with_empty_config_dir() {
        let dir = tempdir().unwrap();
        let config = CliConfig {
            chplconfig_dir: Some(dir.path().to_path_buf()),
        };
        assert!(bootstrap(&config).is_ok());
    }
}
