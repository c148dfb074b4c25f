use std::{env, path::Path};

use anyhow::{Context, Result};

use crate::output;
use crate::platform::HostPlatform;
use crate::process::ToolCommand;

use super::{download, download_dir, elevation, require_host};

const INSTALLER_URL: &str = "https://aka.ms/vs/17/release/vs_community.exe";
const INSTALLER_FILE: &str = "vs_installer.exe";

const WORKLOADS: &[&str] = &[
    "Microsoft.VisualStudio.Workload.ManagedDesktop",
    "Microsoft.VisualStudio.Workload.NativeDesktop",
    "Microsoft.VisualStudio.Workload.Universal",
    "Microsoft.VisualStudio.Workload.NativeGame",
];

const COMPONENTS: &[&str] = &[
    "Microsoft.VisualStudio.Component.VC.DiagnosticTools",
    "Microsoft.VisualStudio.Component.Windows10SDK.18362",
];

pub(crate) fn run() -> Result<()> {
    require_host(HostPlatform::Windows, "install-vs")?;

    if !elevation::is_elevated(HostPlatform::Windows) {
        output::print_log("re-running `upm install-vs` with elevated privileges");
        let upm_exe = env::current_exe().context("failed to resolve the upm executable path")?;
        relaunch_command(&upm_exe).run()?;
        return Ok(());
    }

    let installer = download_dir().join(INSTALLER_FILE);
    download::download(INSTALLER_URL, &installer)?;
    output::print_log(
        "starting Visual Studio installation; grab some coffee, this could take a while",
    );
    installer_command(&installer).run()?;
    output::print_log("Visual Studio installation complete");
    Ok(())
}

/// Start an elevated copy of `upm install-vs` through a UAC prompt.
pub(crate) fn relaunch_command(upm_exe: &Path) -> ToolCommand {
    ToolCommand::new("powershell")
        .arg("Start-Process")
        .arg(format!("'{}'", upm_exe.display()))
        .args(["-ArgumentList", "install-vs", "-Verb", "runAs"])
}

pub(crate) fn installer_command(installer: &Path) -> ToolCommand {
    let mut command = ToolCommand::new(installer).args(["--wait", "--addProductLang", "en-US"]);
    for id in WORKLOADS.iter().chain(COMPONENTS) {
        command = command.arg("--add").arg(*id);
    }
    command.args([
        "--includeRecommended",
        "--includeOptional",
        "--noStartAfterInstall",
    ])
}
