use super::FallbackPlatform;

/// Generic `<os>-<arch>` descriptor from the standard library constants.
///
/// Used when the host is not Linux, where no distribution metadata exists
/// and the plain OS + architecture pair is the best available name.
pub struct GenericPlatform;

impl FallbackPlatform for GenericPlatform {
    fn get(&self) -> String {
        format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_platform_shape() {
        let raw = GenericPlatform.get();

        // Always "<os>-<arch>", both halves non-empty
        let (os, arch) = raw.split_once('-').unwrap();
        assert!(!os.is_empty());
        assert!(!arch.is_empty());
    }
}
