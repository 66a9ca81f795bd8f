//! The launcher policy as an ordered table of guarded rules.
//!
//! Rules are evaluated top to bottom. The first rule whose guard matches and
//! whose decision settles a launcher wins. A rule may also decline to settle
//! (optionally with a warning), in which case evaluation moves on to the next
//! matching rule. The table always ends with an unconditional default.
//!
//! | rule                  | guard                                   |
//! |-----------------------|-----------------------------------------|
//! | `udp-constraint`      | comm `gasnet`, substrate `udp`          |
//! | `user-override`       | `CHPL_LAUNCHER` set                     |
//! | `cray-family`         | platform `cray-x*` / `hpe-cray-*`       |
//! | `gasnet-substrate`    | comm `gasnet`, not Cray family          |
//! | `non-gasnet-fallback` | comm not `gasnet`, not Cray family      |
//! | `default`             | always                                  |
//!
//! The automatic rules (`cray-family` onward) only see inputs without an
//! override, because `user-override` always settles first.
//!
//! When `cray-family` cannot find `aprun` or `srun` it only warns. The guards of
//! the two GASNet rules exclude Cray platforms, so that case always ends at
//! `default` (`none`).

use std::fmt;

use tracing::debug;

use super::inputs::LauncherInputs;
use super::slurm::slurm_prefix;
use crate::domain::{CommSubstrate, LauncherId};
use crate::error::{LauncherError, LauncherResult};
use crate::ports::ExecutableProbe;

/// Warning emitted when a Cray-family system has neither `aprun` nor `srun`.
pub const UNDETECTABLE_LAUNCHER_WARNING: &str =
    "Cannot detect launcher on this system. Please set CHPL_LAUNCHER in the environment.";

/// Identifies a rule in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    UdpConstraint,
    UserOverride,
    CrayFamily,
    GasnetSubstrate,
    NonGasnetFallback,
    Default,
}

impl RuleName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UdpConstraint => "udp-constraint",
            Self::UserOverride => "user-override",
            Self::CrayFamily => "cray-family",
            Self::GasnetSubstrate => "gasnet-substrate",
            Self::NonGasnetFallback => "non-gasnet-fallback",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The rule settled the launcher.
    Launcher(LauncherId),
    /// The rule matched but could not pick a launcher.
    Undetermined { warning: Option<String> },
}

impl Decision {
    fn launcher(value: &str) -> Self {
        Self::Launcher(LauncherId::new(value))
    }

    const fn undetermined() -> Self {
        Self::Undetermined { warning: None }
    }
}

type Guard = fn(&LauncherInputs) -> bool;
type Decide = fn(&LauncherInputs, &dyn ExecutableProbe) -> LauncherResult<Decision>;

/// One row of the policy table.
pub struct Rule {
    pub name: RuleName,
    guard: Guard,
    decide: Decide,
}

impl Rule {
    /// Whether this rule's guard matches the inputs.
    pub fn applies(&self, inputs: &LauncherInputs) -> bool {
        (self.guard)(inputs)
    }

    /// Run the rule's decision. Only meaningful when [`Rule::applies`] holds.
    pub fn decide(
        &self,
        inputs: &LauncherInputs,
        probe: &dyn ExecutableProbe,
    ) -> LauncherResult<Decision> {
        (self.decide)(inputs, probe)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// The launcher policy, in priority order.
pub static RULES: [Rule; 6] = [
    Rule {
        name: RuleName::UdpConstraint,
        guard: is_gasnet_udp,
        decide: decide_udp,
    },
    Rule {
        name: RuleName::UserOverride,
        guard: has_override,
        decide: decide_override,
    },
    Rule {
        name: RuleName::CrayFamily,
        guard: is_cray_family,
        decide: decide_cray,
    },
    Rule {
        name: RuleName::GasnetSubstrate,
        guard: is_gasnet_elsewhere,
        decide: decide_gasnet,
    },
    Rule {
        name: RuleName::NonGasnetFallback,
        guard: is_non_gasnet_elsewhere,
        decide: decide_non_gasnet,
    },
    Rule {
        name: RuleName::Default,
        guard: always,
        decide: decide_default,
    },
];

fn is_gasnet_udp(inputs: &LauncherInputs) -> bool {
    inputs.comm.is_gasnet() && inputs.substrate == CommSubstrate::Udp
}

const fn has_override(inputs: &LauncherInputs) -> bool {
    inputs.launcher_override.is_some()
}

fn is_cray_family(inputs: &LauncherInputs) -> bool {
    inputs.platform.is_cray_family()
}

fn is_gasnet_elsewhere(inputs: &LauncherInputs) -> bool {
    inputs.comm.is_gasnet() && !inputs.platform.is_cray_family()
}

fn is_non_gasnet_elsewhere(inputs: &LauncherInputs) -> bool {
    !inputs.comm.is_gasnet() && !inputs.platform.is_cray_family()
}

const fn always(_inputs: &LauncherInputs) -> bool {
    true
}

/// The UDP conduit only works with `amudprun`, or with no launcher at all.
fn decide_udp(inputs: &LauncherInputs, _probe: &dyn ExecutableProbe) -> LauncherResult<Decision> {
    match &inputs.launcher_override {
        None => Ok(Decision::launcher(LauncherId::AMUDPRUN)),
        Some(launcher)
            if matches!(launcher.as_str(), LauncherId::NONE | LauncherId::AMUDPRUN) =>
        {
            Ok(Decision::Launcher(launcher.clone()))
        }
        Some(launcher) => Err(LauncherError::UnsupportedOverride {
            launcher: launcher.clone(),
            comm: inputs.comm.clone(),
            substrate: inputs.substrate.clone(),
            required: LauncherId::AMUDPRUN,
        }),
    }
}

fn decide_override(
    inputs: &LauncherInputs,
    _probe: &dyn ExecutableProbe,
) -> LauncherResult<Decision> {
    Ok(inputs
        .launcher_override
        .clone()
        .map_or_else(Decision::undetermined, Decision::Launcher))
}

fn decide_cray(_inputs: &LauncherInputs, probe: &dyn ExecutableProbe) -> LauncherResult<Decision> {
    let has_aprun = probe.which("aprun");
    let has_srun = probe.which("srun");

    let decision = match (has_aprun, has_srun) {
        (true, true) => Decision::launcher(LauncherId::NONE),
        (true, false) => Decision::launcher(LauncherId::APRUN),
        (false, true) => Decision::launcher(LauncherId::SLURM_SRUN),
        // TODO: eslogin nodes may lack aprun even though compute jobs use it;
        // look at the loaded modules before giving up.
        (false, false) => {
            debug!("Neither aprun nor srun found on a Cray-family platform");
            Decision::Undetermined {
                warning: Some(UNDETECTABLE_LAUNCHER_WARNING.to_string()),
            }
        }
    };
    Ok(decision)
}

fn decide_gasnet(inputs: &LauncherInputs, probe: &dyn ExecutableProbe) -> LauncherResult<Decision> {
    let base = match inputs.substrate {
        CommSubstrate::Smp => return Ok(Decision::launcher(LauncherId::SMP)),
        CommSubstrate::Mpi => LauncherId::GASNETRUN_MPI,
        CommSubstrate::Ibv => LauncherId::GASNETRUN_IBV,
        CommSubstrate::Ucx => LauncherId::GASNETRUN_UCX,
        CommSubstrate::Ofi => LauncherId::GASNETRUN_OFI,
        _ => return Ok(Decision::undetermined()),
    };
    Ok(Decision::Launcher(slurm_prefix(
        base,
        &inputs.platform,
        probe,
    )))
}

fn decide_non_gasnet(
    inputs: &LauncherInputs,
    probe: &dyn ExecutableProbe,
) -> LauncherResult<Decision> {
    if inputs.platform.is_slurm_cluster() && probe.which("srun") {
        Ok(Decision::launcher(LauncherId::SLURM_SRUN))
    } else {
        Ok(Decision::launcher(LauncherId::NONE))
    }
}

fn decide_default(
    _inputs: &LauncherInputs,
    _probe: &dyn ExecutableProbe,
) -> LauncherResult<Decision> {
    Ok(Decision::launcher(LauncherId::NONE))
}
