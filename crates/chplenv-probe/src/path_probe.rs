//! `PATH`-based executable probe.

use std::ffi::OsString;
use std::path::PathBuf;

use chplenv_core::ExecutableProbe;
use tracing::debug;

use crate::env::EnvProvider;

/// Checks for executables on a search path, the way `which` does.
#[derive(Debug, Clone)]
pub struct PathProbe {
    search_path: Option<OsString>,
    cwd: PathBuf,
}

impl PathProbe {
    /// Probe the `PATH` visible through `env`.
    pub fn from_env(env: &dyn EnvProvider) -> Self {
        Self {
            search_path: env.get("PATH"),
            cwd: std::env::current_dir().unwrap_or_default(),
        }
    }

    /// Probe an explicit search path (`:`-separated on Unix).
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
            cwd: std::env::current_dir().unwrap_or_default(),
        }
    }

    /// Full path of `name`, if it is an executable on the search path.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        let search_path = self.search_path.as_ref()?;
        which::which_in(name, Some(search_path), &self.cwd).ok()
    }
}

impl ExecutableProbe for PathProbe {
    fn which(&self, name: &str) -> bool {
        let found = self.locate(name);
        match &found {
            Some(path) => debug!(command = name, path = %path.display(), "Executable found"),
            None => debug!(command = name, "Executable not found"),
        }
        found.is_some()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::env::MockEnv;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::tempdir;

    fn install(dir: &Path, name: &str, mode: u32) {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    }

    #[test]
    fn test_finds_executables_on_search_path() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        install(first.path(), "aprun", 0o755);
        install(second.path(), "srun", 0o755);

        let search_path = std::env::join_paths([first.path(), second.path()]).unwrap();
        let probe = PathProbe::with_search_path(search_path);

        assert!(probe.which("aprun"));
        assert!(probe.which("srun"));
        assert!(!probe.which("salloc"));
        assert_eq!(probe.locate("srun"), Some(second.path().join("srun")));
    }

    #[test]
    fn test_ignores_non_executable_files() {
        let dir = tempdir().unwrap();
        install(dir.path(), "salloc", 0o644);

        let probe = PathProbe::with_search_path(dir.path());
        assert!(!probe.which("salloc"));
    }

    #[test]
    fn test_unset_path_finds_nothing() {
        let probe = PathProbe::from_env(&MockEnv::new());
        assert!(!probe.which("sh"));
    }

    #[test]
    fn test_from_env_reads_path() {
        let dir = tempdir().unwrap();
        install(dir.path(), "srun", 0o755);

        let env = MockEnv::new().with_var("PATH", dir.path());
        assert!(PathProbe::from_env(&env).which("srun"));
    }
}
