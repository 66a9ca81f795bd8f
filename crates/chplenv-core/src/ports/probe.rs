//! Executable probe port.

use std::collections::HashSet;

/// Answers "is an executable named `name` reachable on the search path?".
#[cfg_attr(test, mockall::automock)]
pub trait ExecutableProbe {
    fn which(&self, name: &str) -> bool;
}

/// Probe with a fixed set of available executables.
///
/// # Example
///
/// ```
/// use chplenv_core::ports::{ExecutableProbe, StaticProbe};
///
/// let probe = StaticProbe::with(["aprun"]);
/// assert!(probe.which("aprun"));
/// assert!(!probe.which("srun"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    available: HashSet<String>,
}

impl StaticProbe {
    /// Probe where nothing is installed.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl ExecutableProbe for StaticProbe {
    fn which(&self, name: &str) -> bool {
        self.available.contains(name)
    }
}
