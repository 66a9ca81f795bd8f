#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for test builds without unix tests
#[cfg(test)]
use tempfile as _;

pub mod config;
pub mod env;
pub mod error;
pub mod facts;
pub mod host;
pub mod overrides;
pub mod path_probe;

pub use config::{CHPLCONFIG_FILE, ChplConfig};
pub use env::{EnvProvider, SystemEnv};
pub use error::{ProbeError, ProbeResult};
pub use facts::{EnvFacts, default_comm, default_substrate};
pub use host::{HostOs, detect_host_platform};
pub use overrides::ChplOverrides;
pub use path_probe::PathProbe;
