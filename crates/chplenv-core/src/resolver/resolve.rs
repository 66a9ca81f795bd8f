//! Rule evaluation.

use tracing::debug;

use super::inputs::LauncherInputs;
use super::rules::{Decision, RULES, RuleName};
use crate::domain::{CommLayer, CommSubstrate, LauncherId, PlatformId};
use crate::error::LauncherResult;
use crate::ports::ExecutableProbe;

/// Result of resolving the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherResolution {
    /// The chosen launcher.
    pub launcher: LauncherId,
    /// Rule that settled the launcher.
    pub rule: RuleName,
    /// Non-fatal warnings raised by rules that matched but did not settle.
    pub warnings: Vec<String>,
}

/// Evaluate the policy table against `inputs`.
///
/// The only error is an override the comm/substrate combination cannot use.
pub fn resolve_launcher(
    inputs: &LauncherInputs,
    probe: &dyn ExecutableProbe,
) -> LauncherResult<LauncherResolution> {
    let mut warnings = Vec::new();

    for rule in RULES.iter().filter(|rule| rule.applies(inputs)) {
        match rule.decide(inputs, probe)? {
            Decision::Launcher(launcher) => {
                debug!(rule = %rule.name, launcher = %launcher, "Launcher resolved");
                return Ok(LauncherResolution {
                    launcher,
                    rule: rule.name,
                    warnings,
                });
            }
            Decision::Undetermined { warning } => {
                debug!(rule = %rule.name, "Rule matched without choosing a launcher");
                warnings.extend(warning);
            }
        }
    }

    // Unreachable while RULES ends with the unconditional default.
    Ok(LauncherResolution {
        launcher: LauncherId::none(),
        rule: RuleName::Default,
        warnings,
    })
}

/// Resolve the launcher id from loose values.
pub fn resolve(
    launcher_override: Option<LauncherId>,
    comm: CommLayer,
    substrate: CommSubstrate,
    platform: PlatformId,
    probe: &dyn ExecutableProbe,
) -> LauncherResult<LauncherId> {
    let inputs = LauncherInputs {
        launcher_override: launcher_override.filter(|launcher| !launcher.as_str().is_empty()),
        comm,
        substrate,
        platform,
    };
    resolve_launcher(&inputs, probe).map(|resolution| resolution.launcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LauncherError;
    use crate::ports::StaticProbe;
    use crate::resolver::rules::UNDETECTABLE_LAUNCHER_WARNING;

    #[test]
    fn test_undetectable_cray_falls_through_to_default() {
        let inputs = LauncherInputs::new("gasnet", "ibv", "cray-xc");
        let resolution = resolve_launcher(&inputs, &StaticProbe::with(["salloc"])).unwrap();

        assert_eq!(resolution.launcher, "none");
        assert_eq!(resolution.rule, RuleName::Default);
        assert_eq!(resolution.warnings, [UNDETECTABLE_LAUNCHER_WARNING]);
    }

    #[test]
    fn test_unknown_gasnet_substrate_falls_through_without_warning() {
        let inputs = LauncherInputs::new("gasnet", "aries", "linux64");
        let resolution = resolve_launcher(&inputs, &StaticProbe::empty()).unwrap();

        assert_eq!(resolution.launcher, "none");
        assert_eq!(resolution.rule, RuleName::Default);
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn test_override_skips_detection() {
        let inputs = LauncherInputs::new("ugni", "none", "cray-xc").with_override("pbs-aprun");
        let resolution = resolve_launcher(&inputs, &StaticProbe::empty()).unwrap();

        assert_eq!(resolution.launcher, "pbs-aprun");
        assert_eq!(resolution.rule, RuleName::UserOverride);
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn test_resolve_from_loose_values() {
        let launcher = resolve(
            Some(LauncherId::new("slurm-srun")),
            CommLayer::Gasnet,
            CommSubstrate::Udp,
            PlatformId::from("linux64"),
            &StaticProbe::empty(),
        );
        assert!(matches!(
            launcher,
            Err(LauncherError::UnsupportedOverride { .. })
        ));

        let launcher = resolve(
            Some(LauncherId::new("")),
            CommLayer::Gasnet,
            CommSubstrate::Udp,
            PlatformId::from("linux64"),
            &StaticProbe::empty(),
        )
        .unwrap();
        assert_eq!(launcher, "amudprun");
    }
}
