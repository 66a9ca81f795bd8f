//! Port definitions (trait abstractions) for the resolver's collaborators.
//!
//! Ports describe what the launcher policy needs from the outside world:
//! configuration overrides, the already-resolved environment facts, and a way to
//! ask whether an executable is on the search path. They contain no I/O.
//! Implementations live in adapters (`chplenv-probe`); tests use in-memory fakes.

mod facts;
mod overrides;
mod probe;

pub use facts::{EnvFactsPort, StaticFacts};
pub use overrides::{NoOverrides, OverrideSource, StaticOverrides};
pub use probe::{ExecutableProbe, StaticProbe};

#[cfg(test)]
pub use probe::MockExecutableProbe;
