//! Launcher identifiers.

use std::fmt;
use std::str::FromStr;

/// Name of a launcher strategy (`aprun`, `slurm-srun`, `gasnetrun_ibv`, ...).
///
/// The set is open: a user override may carry any string and is passed through
/// untouched. The resolver itself only ever produces the associated constants
/// below, optionally wrapped by [`LauncherId::with_slurm_prefix`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LauncherId(String);

impl LauncherId {
    pub const NONE: &'static str = "none";
    pub const SMP: &'static str = "smp";
    pub const AMUDPRUN: &'static str = "amudprun";
    pub const APRUN: &'static str = "aprun";
    pub const SLURM_SRUN: &'static str = "slurm-srun";
    pub const GASNETRUN_MPI: &'static str = "gasnetrun_mpi";
    pub const GASNETRUN_IBV: &'static str = "gasnetrun_ibv";
    pub const GASNETRUN_UCX: &'static str = "gasnetrun_ucx";
    pub const GASNETRUN_OFI: &'static str = "gasnetrun_ofi";

    /// Prefix marking a launcher wrapped to run under Slurm's `salloc`.
    pub const SLURM_PREFIX: &'static str = "slurm-";

    /// Create a launcher id from any string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The `none` launcher: the program runs directly.
    pub fn none() -> Self {
        Self::new(Self::NONE)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0 == Self::NONE
    }

    /// Return `slurm-<self>`.
    #[must_use]
    pub fn with_slurm_prefix(&self) -> Self {
        Self(format!("{}{}", Self::SLURM_PREFIX, self.0))
    }

    /// True if this id is one the resolver can produce on its own.
    #[must_use]
    pub fn is_known(&self) -> bool {
        const GASNETRUN: [&str; 4] = [
            LauncherId::GASNETRUN_MPI,
            LauncherId::GASNETRUN_IBV,
            LauncherId::GASNETRUN_UCX,
            LauncherId::GASNETRUN_OFI,
        ];

        let base = self.0.strip_prefix(Self::SLURM_PREFIX);
        match base {
            Some(base) => GASNETRUN.contains(&base) || base == "srun",
            None => {
                GASNETRUN.contains(&self.0.as_str())
                    || [Self::NONE, Self::SMP, Self::AMUDPRUN, Self::APRUN]
                        .contains(&self.0.as_str())
            }
        }
    }
}

impl fmt::Display for LauncherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LauncherId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for LauncherId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for LauncherId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for LauncherId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LauncherId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
