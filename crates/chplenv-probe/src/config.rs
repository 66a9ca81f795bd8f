//! `chplconfig` file support.
//!
//! A chplconfig file holds `CHPL_*=value` lines with `#` comments and acts as a
//! lower-priority source of overrides than the environment. It is looked up in
//! `$CHPL_CONFIG` first, then `$CHPL_HOME`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::env::EnvProvider;
use crate::error::{ProbeError, ProbeResult};

/// File name looked up inside the config directory.
pub const CHPLCONFIG_FILE: &str = "chplconfig";

/// Parsed contents of a chplconfig file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChplConfig {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl ChplConfig {
    /// Config with no entries and no backing file.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Directory holding the chplconfig file, if one is configured.
    pub fn config_dir(env: &dyn EnvProvider) -> Option<PathBuf> {
        env.get_str("CHPL_CONFIG")
            .or_else(|| env.get_str("CHPL_HOME"))
            .map(PathBuf::from)
    }

    /// Where the chplconfig file would live, if a config directory is known.
    pub fn locate(env: &dyn EnvProvider) -> Option<PathBuf> {
        Self::config_dir(env).map(|dir| dir.join(CHPLCONFIG_FILE))
    }

    /// Load the chplconfig file found through `env`.
    ///
    /// A missing file is not an error and yields an empty config.
    pub fn load(env: &dyn EnvProvider) -> ProbeResult<Self> {
        Self::config_dir(env).map_or_else(|| Ok(Self::empty()), |dir| Self::from_dir(&dir))
    }

    /// Load `<dir>/chplconfig`, or an empty config when the file is absent.
    pub fn from_dir(dir: &Path) -> ProbeResult<Self> {
        let path = dir.join(CHPLCONFIG_FILE);
        if path.is_file() {
            Self::from_path(&path)
        } else {
            debug!(path = %path.display(), "No chplconfig file");
            Ok(Self::empty())
        }
    }

    /// Load a specific chplconfig file.
    ///
    /// Keys that are not `CHPL_*` variables are skipped with a warning.
    pub fn from_path(path: &Path) -> ProbeResult<Self> {
        let lines = dotenvy::from_path_iter(path).map_err(|source| ProbeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries = BTreeMap::new();
        for line in lines {
            let (key, value) = line.map_err(|source| ProbeError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

            if !key.starts_with("CHPL_") {
                warn!(key = %key, path = %path.display(), "Ignoring unknown chplconfig variable");
                continue;
            }
            if let Some(previous) = entries.insert(key.clone(), value) {
                warn!(key = %key, previous = %previous, "Duplicate chplconfig entry, using last value");
            }
        }

        debug!(path = %path.display(), entries = entries.len(), "Loaded chplconfig");
        Ok(Self {
            path: Some(path.to_path_buf()),
            entries,
        })
    }

    /// Value for `key`, if set to something non-empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// File the entries came from.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
