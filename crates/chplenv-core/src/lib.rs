#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod context;
pub mod domain;
pub mod error;
pub mod ports;
pub mod resolver;

// Re-export commonly used types for convenience
pub use context::ChplEnvContext;
pub use domain::{CommLayer, CommSubstrate, LauncherId, PlatformId, PlatformKind};
pub use error::{LauncherError, LauncherResult};
pub use ports::{EnvFactsPort, ExecutableProbe, OverrideSource};
pub use resolver::{LAUNCHER_KEY, LauncherInputs, LauncherResolution, RuleName, resolve_launcher};
