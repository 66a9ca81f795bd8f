//! Slurm wrapping for GASNet launchers.

use crate::domain::{LauncherId, PlatformId};
use crate::ports::ExecutableProbe;

/// Return `slurm-<base>` on a Slurm cluster platform with `salloc` installed,
/// otherwise `base`.
///
/// `salloc` is only probed when the platform is `cray-cs` or `hpe-apollo`.
pub fn slurm_prefix(base: &str, platform: &PlatformId, probe: &dyn ExecutableProbe) -> LauncherId {
    let launcher = LauncherId::new(base);
    if platform.is_slurm_cluster() && probe.which("salloc") {
        launcher.with_slurm_prefix()
    } else {
        launcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockExecutableProbe, StaticProbe};

    #[test]
    fn test_prefixed_on_slurm_cluster_with_salloc() {
        let probe = StaticProbe::with(["salloc"]);
        for platform in ["cray-cs", "hpe-apollo"] {
            let launcher = slurm_prefix(
                LauncherId::GASNETRUN_UCX,
                &PlatformId::from(platform),
                &probe,
            );
            assert_eq!(launcher, "slurm-gasnetrun_ucx");
        }
    }

    #[test]
    fn test_unprefixed_without_salloc() {
        let launcher = slurm_prefix(
            LauncherId::GASNETRUN_MPI,
            &PlatformId::from("cray-cs"),
            &StaticProbe::empty(),
        );
        assert_eq!(launcher, "gasnetrun_mpi");
    }

    #[test]
    fn test_salloc_not_probed_on_other_platforms() {
        let mut probe = MockExecutableProbe::new();
        probe.expect_which().never();

        let launcher = slurm_prefix(
            LauncherId::GASNETRUN_IBV,
            &PlatformId::from("linux64"),
            &probe,
        );
        assert_eq!(launcher, "gasnetrun_ibv");
    }
}
