//! Platform name resolution.

use anyhow::Result;
use log::debug;

use crate::provider::{DistroInfo, FallbackPlatform, SystemInfo};

use super::sanitize_platform;

/// Compute the platform tag for the host described by the given providers.
///
/// On Linux the tag is assembled from the distribution id, its normalized
/// version, and the machine architecture, e.g. `linux_ubuntu_14_04_x86_64`.
/// Distributions without a recognized id fall back to the generic
/// `linux_<machine>` form. On every other OS the fallback provider's raw
/// platform string is sanitized as-is.
///
/// Provider failures propagate unchanged; there is no retry or recovery.
#[tracing::instrument(skip(system, distro, fallback))]
pub fn default_platform_name(
    system: &impl SystemInfo,
    distro: &impl DistroInfo,
    fallback: &impl FallbackPlatform,
) -> Result<String> {
    if system.os_kind().eq_ignore_ascii_case("linux") {
        let (id, version) = normalize_distro(&distro.id()?, &distro.version()?);
        let machine = system.machine();
        debug!("linux host: id={id:?} version={version:?} machine={machine:?}");

        let tag = ["linux", &id, &version, &machine]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_");
        Ok(sanitize_platform(&tag))
    } else {
        Ok(sanitize_platform(&fallback.get()))
    }
}

/// Normalize a distro (id, version) pair for tagging.
///
/// How much of the version survives depends on the distribution's release
/// scheme: Ubuntu is identified by major.minor, the RHEL/SUSE/Debian families
/// by the major version alone, and Amazon Linux by its full date-style
/// version. Ids outside this table are dropped entirely (together with their
/// version) so the tag degrades to the generic `linux_<machine>` form instead
/// of embedding an unvetted name.
fn normalize_distro(id: &str, version: &str) -> (String, String) {
    let id = id.trim().to_lowercase();
    let version = version.trim();

    match id.as_str() {
        "ubuntu" => (id.clone(), grab_version(version, 2)),
        "debian" | "fedora" | "centos" | "opensuse" | "rhel" | "sles" => {
            (id.clone(), grab_version(version, 1))
        }
        "amzn" => (id.clone(), version.to_string()),
        _ => (String::new(), String::new()),
    }
}

/// Keep the `num` most significant dot-separated version components.
fn grab_version(version: &str, num: usize) -> String {
    version
        .split('.')
        .take(num)
        .collect::<Vec<_>>()
        .join(".")
}
