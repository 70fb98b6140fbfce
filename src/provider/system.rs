use super::SystemInfo;

/// System information backed by compile-time target detection.
pub struct HostSystem;

impl HostSystem {
    fn detect_os_kind() -> String {
        #[cfg(target_os = "macos")]
        {
            "Darwin".to_string()
        }
        #[cfg(target_os = "linux")]
        {
            "Linux".to_string()
        }
        #[cfg(target_os = "windows")]
        {
            "Windows".to_string()
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            std::env::consts::OS.to_string()
        }
    }

    fn detect_machine() -> String {
        #[cfg(target_arch = "x86_64")]
        {
            "x86_64".to_string()
        }
        #[cfg(target_arch = "aarch64")]
        {
            "aarch64".to_string()
        }
        #[cfg(target_arch = "x86")]
        {
            "i686".to_string()
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "x86")))]
        {
            std::env::consts::ARCH.to_string()
        }
    }
}

impl SystemInfo for HostSystem {
    fn os_kind(&self) -> String {
        Self::detect_os_kind()
    }

    fn machine(&self) -> String {
        Self::detect_machine()
    }
}
