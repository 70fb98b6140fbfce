//! Capability traits for querying host information.
//!
//! Each trait covers one narrow question about the host, so the resolver can
//! be exercised with deterministic test doubles instead of the real machine.
//!
//! # Structure
//!
//! - `system` - OS family and CPU architecture (compile-time detection)
//! - `distro` - Linux distribution metadata from an os-release file
//! - `fallback` - generic platform descriptor for non-Linux hosts

mod distro;
mod fallback;
mod system;

use anyhow::Result;

pub use distro::OsReleaseDistro;
pub use fallback::GenericPlatform;
pub use system::HostSystem;

/// Basic facts about the host system.
#[cfg_attr(test, mockall::automock)]
pub trait SystemInfo: Send + Sync {
    /// OS family name, e.g. "Linux", "Darwin", or "Windows".
    fn os_kind(&self) -> String;

    /// Machine hardware name, e.g. "x86_64". May be empty when unknown.
    fn machine(&self) -> String;
}

/// Linux distribution metadata.
#[cfg_attr(test, mockall::automock)]
pub trait DistroInfo: Send + Sync {
    /// Distribution identifier, e.g. "ubuntu". Empty when undetermined.
    fn id(&self) -> Result<String>;

    /// Distribution version string, e.g. "14.04". Empty when undetermined.
    fn version(&self) -> Result<String>;
}

/// Generic cross-platform descriptor used when the host is not Linux.
#[cfg_attr(test, mockall::automock)]
pub trait FallbackPlatform: Send + Sync {
    /// A raw OS + architecture string, e.g. "macos-aarch64".
    fn get(&self) -> String;
}
