use anyhow::{Result, bail};

use crate::cli::InstallXcodeArgs;
use crate::output;
use crate::platform::HostPlatform;
use crate::process::ToolCommand;

use super::{download, download_dir, elevation, require_host};

pub(crate) const DEFAULT_XCODE_VERSION: &str = "14.1";
const HOMEBREW_INSTALL_URL: &str =
    "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";
const HOMEBREW_INSTALL_FILE: &str = "homebrew-install.sh";
const XCODES_FORMULA: &str = "robotsandpencils/made/xcodes";
const XCODE_DEVELOPER_DIR: &str = "/Applications/Xcode.app/Contents/Developer";

pub(crate) fn run(args: InstallXcodeArgs) -> Result<()> {
    require_host(HostPlatform::Mac, "install-xcode")?;
    if !elevation::is_elevated(HostPlatform::Mac) {
        bail!("`upm install-xcode` requires root privileges; re-run it with sudo");
    }

    ensure_homebrew()?;
    ensure_xcodes()?;
    for command in configure_commands(&args.xcode_version) {
        command.run()?;
    }
    output::print_log(format!(
        "Xcode {} is configured for Unreal Engine development",
        args.xcode_version
    ));
    Ok(())
}

fn ensure_homebrew() -> Result<()> {
    if ToolCommand::new("brew").arg("--version").probe() {
        output::print_log("Homebrew is already installed");
        return Ok(());
    }

    output::print_log("Homebrew not found; installing it");
    let script = download_dir().join(HOMEBREW_INSTALL_FILE);
    download::download(HOMEBREW_INSTALL_URL, &script)?;
    ToolCommand::new("/bin/bash")
        .arg(script.display().to_string())
        .run()?;
    Ok(())
}

fn ensure_xcodes() -> Result<()> {
    if ToolCommand::new("xcodes").arg("--version").probe() {
        output::print_log("`xcodes` is already installed");
        return Ok(());
    }

    output::print_log("`xcodes` not found; installing it with Homebrew");
    ToolCommand::new("brew")
        .args(["install", XCODES_FORMULA])
        .run()?;
    Ok(())
}

/// Install `version`, accept its license, and make it the active developer dir.
pub(crate) fn configure_commands(version: &str) -> Vec<ToolCommand> {
    vec![
        ToolCommand::new("xcodes").args(["install", version]),
        ToolCommand::new("xcodebuild").args(["-license", "accept"]),
        ToolCommand::new("xcode-select").args(["--switch", XCODE_DEVELOPER_DIR]),
        ToolCommand::new("xcodebuild").arg("-runFirstLaunch"),
    ]
}

#[cfg(test)]
mod tests {
    use super::configure_commands;

    #[test]
    fn configure_steps_install_then_select_xcode() {
        let rendered = configure_commands("15.2")
            .iter()
            .map(|command| command.display())
            .collect::<Vec<_>>();
        assert_eq!(
            rendered,
            vec![
                "xcodes install 15.2",
                "xcodebuild -license accept",
                "xcode-select --switch /Applications/Xcode.app/Contents/Developer",
                "xcodebuild -runFirstLaunch",
            ]
        );
    }
}
