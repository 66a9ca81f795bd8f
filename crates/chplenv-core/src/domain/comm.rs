//! Communication layer and substrate values.
//!
//! Both are parsed from their configuration strings. Unknown values are kept
//! verbatim in `Other` so they print back exactly as the user wrote them.

use std::fmt;

/// Value of `CHPL_COMM`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CommLayer {
    /// Single-locale build, no communication layer.
    #[default]
    None,
    Gasnet,
    Ugni,
    Ofi,
    Other(String),
}

impl CommLayer {
    /// Parse a `CHPL_COMM` value. Matching is exact.
    pub fn parse(value: &str) -> Self {
        match value {
            "none" => Self::None,
            "gasnet" => Self::Gasnet,
            "ugni" => Self::Ugni,
            "ofi" => Self::Ofi,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Gasnet => "gasnet",
            Self::Ugni => "ugni",
            Self::Ofi => "ofi",
            Self::Other(value) => value,
        }
    }

    #[must_use]
    pub const fn is_gasnet(&self) -> bool {
        matches!(self, Self::Gasnet)
    }
}

impl fmt::Display for CommLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CommLayer {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// Value of `CHPL_COMM_SUBSTRATE` (the GASNet conduit when comm is `gasnet`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CommSubstrate {
    #[default]
    None,
    Udp,
    Smp,
    Mpi,
    Ibv,
    Ucx,
    Ofi,
    Aries,
    Other(String),
}

impl CommSubstrate {
    /// Parse a `CHPL_COMM_SUBSTRATE` value. Matching is exact.
    pub fn parse(value: &str) -> Self {
        match value {
            "none" => Self::None,
            "udp" => Self::Udp,
            "smp" => Self::Smp,
            "mpi" => Self::Mpi,
            "ibv" => Self::Ibv,
            "ucx" => Self::Ucx,
            "ofi" => Self::Ofi,
            "aries" => Self::Aries,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Udp => "udp",
            Self::Smp => "smp",
            Self::Mpi => "mpi",
            Self::Ibv => "ibv",
            Self::Ucx => "ucx",
            Self::Ofi => "ofi",
            Self::Aries => "aries",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for CommSubstrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CommSubstrate {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}
