//! Platform identifiers.

use std::fmt;

/// Which platform a lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    /// The machine the compiled program runs on.
    Target,
    /// The machine doing the build.
    Host,
}

impl PlatformKind {
    /// Suffix used in configuration keys (`CHPL_TARGET_PLATFORM`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Target => "target",
            Self::Host => "host",
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A platform name such as `linux64`, `cray-xc`, `hpe-cray-ex` or `cray-cs`.
///
/// Launcher policy only looks at platforms through the two predicates below.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformId(String);

impl PlatformId {
    pub const CRAY_CS: &'static str = "cray-cs";
    pub const HPE_APOLLO: &'static str = "hpe-apollo";
    pub const CRAY_XC: &'static str = "cray-xc";
    pub const HPE_CRAY_EX: &'static str = "hpe-cray-ex";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Cray XC/XE-style or HPE Cray EX systems, where `aprun`/`srun` decide.
    #[must_use]
    pub fn is_cray_family(&self) -> bool {
        self.0.starts_with("cray-x") || self.0.starts_with("hpe-cray-")
    }

    /// Commodity clusters sold by Cray/HPE that schedule through Slurm.
    #[must_use]
    pub fn is_slurm_cluster(&self) -> bool {
        self.0 == Self::CRAY_CS || self.0 == Self::HPE_APOLLO
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlatformId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
