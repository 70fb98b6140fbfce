use anyhow::Result;
use clap::Parser;
use platform_tag::platform::default_platform_name;
use platform_tag::provider::{GenericPlatform, HostSystem, OsReleaseDistro};
use std::path::PathBuf;

/// platform-tag - Platform name tags for built artifacts
///
/// Prints a sanitized tag describing the host OS, distribution, and
/// architecture, e.g. `linux_ubuntu_14_04_x86_64` or `macosx_10_9_x86_64`.
///
/// Examples:
///   platform-tag            # Tag for the current host
#[derive(Parser, Debug)]
#[command(author, version = env!("PLATFORM_TAG_VERSION"), about)]
struct Cli {
    /// os-release file to read distro metadata from (defaults to /etc/os-release)
    #[arg(
        long = "os-release",
        env = "PLATFORM_TAG_OS_RELEASE",
        value_name = "PATH"
    )]
    pub os_release: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let distro = match cli.os_release {
        Some(path) => OsReleaseDistro::with_path(path),
        None => OsReleaseDistro::default(),
    };

    let tag = default_platform_name(&HostSystem, &distro, &GenericPlatform)?;
    println!("{tag}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_default_parsing() {
        let cli = Cli::try_parse_from(&["platform-tag"]).unwrap();
        assert_eq!(cli.os_release, None);
    }

    #[test]
    fn test_cli_os_release_parsing() {
        let cli =
            Cli::try_parse_from(&["platform-tag", "--os-release", "/tmp/os-release"]).unwrap();
        assert_eq!(cli.os_release, Some(PathBuf::from("/tmp/os-release")));
    }

    #[test]
    fn test_cli_rejects_positional_args() {
        let result = Cli::try_parse_from(&["platform-tag", "extra"]);
        assert!(result.is_err());
    }
}
