//! Toolchain installers. Each one downloads or drives a vendor installer;
//! the installers themselves are opaque.

pub(crate) mod download;
pub(crate) mod elevation;
pub(crate) mod visual_studio;
pub(crate) mod vscode;
pub(crate) mod xcode;

use std::{env, path::PathBuf};

use anyhow::{Result, bail};

use crate::platform::HostPlatform;

/// Fail unless running on `expected`.
pub(crate) fn require_host(expected: HostPlatform, command: &str) -> Result<()> {
    check_host(HostPlatform::current(), expected, command)
}

fn check_host(actual: HostPlatform, expected: HostPlatform, command: &str) -> Result<()> {
    if actual != expected {
        bail!("`upm {command}` is only supported on {expected} hosts (this host is {actual})");
    }
    Ok(())
}

/// Where downloaded installers are written.
pub(crate) fn download_dir() -> PathBuf {
    env::temp_dir()
}

#[cfg(test)]
mod tests {
    use super::check_host;
    use crate::platform::HostPlatform;

    #[test]
    fn wrong_host_is_rejected_with_command_name() {
        let error = check_host(HostPlatform::Linux, HostPlatform::Windows, "install-vs")
            .expect_err("expected host mismatch");
        let message = error.to_string();
        assert!(message.contains("`upm install-vs`"));
        assert!(message.contains("Windows"));
        assert!(check_host(HostPlatform::Mac, HostPlatform::Mac, "install-xcode").is_ok());
    }
}
