//! Host platform detection.

use chplenv_core::PlatformId;

use crate::env::EnvProvider;

/// Operating system and word size of the build machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostOs {
    /// Value in the style of `std::env::consts::OS`.
    pub os: &'static str,
    pub is_64_bit: bool,
}

impl HostOs {
    /// The OS this binary was compiled for.
    pub const fn current() -> Self {
        Self {
            os: std::env::consts::OS,
            is_64_bit: cfg!(target_pointer_width = "64"),
        }
    }
}

/// Detect the host platform when `CHPL_HOST_PLATFORM` is not set.
///
/// The Cray programming environment exports `CRAYPE_NETWORK_TARGET`, which
/// identifies XC/XE and EX systems. Everything else is named after the OS.
pub fn detect_host_platform(env: &dyn EnvProvider, host: HostOs) -> PlatformId {
    if let Some(network) = env.get_str("CRAYPE_NETWORK_TARGET") {
        match network.as_str() {
            "aries" => return PlatformId::from(PlatformId::CRAY_XC),
            "gemini" => return PlatformId::from("cray-xe"),
            n if n == "ofi" || n.starts_with("slingshot") => {
                return PlatformId::from(PlatformId::HPE_CRAY_EX);
            }
            _ => {}
        }
    }

    let bits = if host.is_64_bit { "64" } else { "32" };
    match host.os {
        "linux" => PlatformId::new(format!("linux{bits}")),
        "macos" => PlatformId::from("darwin"),
        "netbsd" => PlatformId::new(format!("netbsd{bits}")),
        "windows" => PlatformId::new(format!("cygwin{bits}")),
        other => PlatformId::from(other),
    }
}
