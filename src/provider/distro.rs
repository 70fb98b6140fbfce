//! Distribution metadata from an os-release file.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use log::debug;

use super::DistroInfo;

const OS_RELEASE_PATH: &str = "/etc/os-release";

/// The fields of an os-release file the resolver cares about.
#[derive(Debug, Default, PartialEq)]
struct OsRelease {
    id: String,
    version_id: String,
}

/// Distro information read from an os-release file (`/etc/os-release` by
/// default).
///
/// The file is parsed at most once per instance, so `id()` and `version()`
/// always report a consistent snapshot. A missing file yields empty id and
/// version, matching hosts that do not ship os-release metadata. Any other
/// read failure propagates to the caller.
pub struct OsReleaseDistro {
    path: PathBuf,
    cache: OnceLock<OsRelease>,
}

impl OsReleaseDistro {
    /// Read from a specific os-release file instead of `/etc/os-release`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceLock::new(),
        }
    }

    fn read(&self) -> Result<&OsRelease> {
        if let Some(info) = self.cache.get() {
            return Ok(info);
        }
        let info = self.load()?;
        Ok(self.cache.get_or_init(|| info))
    }

    #[tracing::instrument(skip(self))]
    fn load(&self) -> Result<OsRelease> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(parse_os_release(&content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} not found, treating distro as unknown", self.path.display());
                Ok(OsRelease::default())
            }
            Err(e) => {
                Err(e).with_context(|| format!("failed to read {}", self.path.display()))
            }
        }
    }
}

impl Default for OsReleaseDistro {
    fn default() -> Self {
        Self::with_path(OS_RELEASE_PATH)
    }
}

impl DistroInfo for OsReleaseDistro {
    fn id(&self) -> Result<String> {
        Ok(self.read()?.id.clone())
    }

    fn version(&self) -> Result<String> {
        Ok(self.read()?.version_id.clone())
    }
}

/// Parse the `ID` and `VERSION_ID` fields out of os-release content.
///
/// Values may be quoted; comments and blank lines are skipped. Missing keys
/// leave the corresponding field empty.
fn parse_os_release(content: &str) -> OsRelease {
    let mut info = OsRelease::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches('"').trim_matches('\'');

        match key.trim() {
            "ID" => info.id = value.to_string(),
            "VERSION_ID" => info.version_id = value.to_string(),
            _ => {}
        }
    }

    info
}
