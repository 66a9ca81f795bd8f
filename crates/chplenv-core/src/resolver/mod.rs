//! Launcher resolution.
//!
//! ## Architecture
//!
//! - `inputs`: the snapshot of overrides and environment facts a decision uses
//! - `rules`: the ordered policy table
//! - `slurm`: the `slurm-` prefix helper used by GASNet launchers
//! - `resolve`: evaluation of the table
//!
//! ## Usage
//!
//! ```
//! use chplenv_core::ports::StaticProbe;
//! use chplenv_core::resolver::{LauncherInputs, resolve_launcher};
//!
//! let inputs = LauncherInputs::new("gasnet", "mpi", "cray-cs");
//! let probe = StaticProbe::with(["salloc"]);
//!
//! let resolution = resolve_launcher(&inputs, &probe).unwrap();
//! assert_eq!(resolution.launcher.as_str(), "slurm-gasnetrun_mpi");
//! ```

mod inputs;
mod resolve;
mod rules;
mod slurm;

pub use inputs::{LAUNCHER_KEY, LauncherInputs};
pub use resolve::{LauncherResolution, resolve, resolve_launcher};
pub use rules::{Decision, RULES, Rule, RuleName, UNDETECTABLE_LAUNCHER_WARNING};
pub use slurm::slurm_prefix;
