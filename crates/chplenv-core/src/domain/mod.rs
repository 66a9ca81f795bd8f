//! Domain value types.
//!
//! Pure data with no I/O. Everything here is cheap to clone and compares by
//! value.

mod comm;
mod launcher;
mod platform;

pub use comm::{CommLayer, CommSubstrate};
pub use launcher::LauncherId;
pub use platform::{PlatformId, PlatformKind};
