//! Resolution context with a one-time launcher cache.

use std::fmt;
use std::sync::OnceLock;

use crate::domain::LauncherId;
use crate::error::LauncherResult;
use crate::ports::{EnvFactsPort, ExecutableProbe, OverrideSource};
use crate::resolver::{LauncherInputs, LauncherResolution, resolve_launcher};

/// Owns the collaborators and caches the launcher once it has been resolved.
///
/// The cache lives as long as the context. Errors are not cached; a failed
/// resolution is recomputed (and fails again) on the next call.
///
/// # Example
///
/// ```
/// use chplenv_core::ChplEnvContext;
/// use chplenv_core::ports::{StaticFacts, StaticOverrides, StaticProbe};
///
/// let ctx = ChplEnvContext::new(
///     StaticOverrides::new(),
///     StaticFacts::new("none", "none", "hpe-apollo"),
///     StaticProbe::with(["srun"]),
/// );
/// assert_eq!(ctx.launcher_id().unwrap().as_str(), "slurm-srun");
/// ```
pub struct ChplEnvContext {
    overrides: Box<dyn OverrideSource>,
    facts: Box<dyn EnvFactsPort>,
    probe: Box<dyn ExecutableProbe>,
    launcher: OnceLock<LauncherResolution>,
}

impl ChplEnvContext {
    pub fn new(
        overrides: impl OverrideSource + 'static,
        facts: impl EnvFactsPort + 'static,
        probe: impl ExecutableProbe + 'static,
    ) -> Self {
        Self {
            overrides: Box::new(overrides),
            facts: Box::new(facts),
            probe: Box::new(probe),
            launcher: OnceLock::new(),
        }
    }

    /// Current inputs, read fresh from the collaborators.
    pub fn inputs(&self) -> LauncherInputs {
        LauncherInputs::gather(self.overrides.as_ref(), self.facts.as_ref())
    }

    /// The launcher resolution, computed on first use.
    pub fn launcher(&self) -> LauncherResult<LauncherResolution> {
        if let Some(cached) = self.launcher.get() {
            return Ok(cached.clone());
        }
        let resolution = resolve_launcher(&self.inputs(), self.probe.as_ref())?;
        Ok(self.launcher.get_or_init(|| resolution).clone())
    }

    /// Shorthand for `launcher().map(|r| r.launcher)`.
    pub fn launcher_id(&self) -> LauncherResult<LauncherId> {
        self.launcher().map(|resolution| resolution.launcher)
    }
}

impl fmt::Debug for ChplEnvContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChplEnvContext")
            .field("launcher", &self.launcher.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockExecutableProbe, StaticFacts, StaticOverrides, StaticProbe};
    use crate::resolver::LAUNCHER_KEY;

    #[test]
    fn test_launcher_is_computed_once() {
        let mut probe = MockExecutableProbe::new();
        probe
            .expect_which()
            .withf(|name| name == "aprun")
            .times(1)
            .return_const(true);
        probe
            .expect_which()
            .withf(|name| name == "srun")
            .times(1)
            .return_const(false);

        let ctx = ChplEnvContext::new(
            StaticOverrides::new(),
            StaticFacts::new("ugni", "none", "cray-x1"),
            probe,
        );

        let first = ctx.launcher().unwrap();
        let second = ctx.launcher().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.launcher, "aprun");
    }

    #[test]
    fn test_cached_value_matches_fresh_computation() {
        let ctx = ChplEnvContext::new(
            StaticOverrides::new(),
            StaticFacts::new("gasnet", "ofi", "hpe-apollo"),
            StaticProbe::with(["salloc"]),
        );

        let fresh = resolve_launcher(&ctx.inputs(), &StaticProbe::with(["salloc"])).unwrap();
        assert_eq!(ctx.launcher().unwrap(), fresh);
        assert_eq!(ctx.launcher_id().unwrap(), "slurm-gasnetrun_ofi");
    }

    #[test]
    fn test_errors_are_not_cached() {
        let ctx = ChplEnvContext::new(
            StaticOverrides::new().with(LAUNCHER_KEY, "aprun"),
            StaticFacts::new("gasnet", "udp", "linux64"),
            StaticProbe::empty(),
        );

        assert!(ctx.launcher().is_err());
        assert!(ctx.launcher().is_err());
        assert!(format!("{ctx:?}").contains("launcher: None"));
    }
}
