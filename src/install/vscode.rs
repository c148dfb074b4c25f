use std::path::Path;

use anyhow::Result;

use crate::output;
use crate::platform::HostPlatform;
use crate::process::ToolCommand;

use super::{download, download_dir, require_host};

const INSTALLER_URL: &str =
    "https://code.visualstudio.com/sha/download?build=stable&os=win32-x64-user";
const INSTALLER_FILE: &str = "VSCodeUserSetup-x64.exe";

pub(crate) fn run() -> Result<()> {
    require_host(HostPlatform::Windows, "install-vscode")?;

    let installer = download_dir().join(INSTALLER_FILE);
    download::download(INSTALLER_URL, &installer)?;
    output::print_log("starting Visual Studio Code installation");
    installer_command(&installer).run()?;
    output::print_log("Visual Studio Code installation complete");
    Ok(())
}

pub(crate) fn installer_command(installer: &Path) -> ToolCommand {
    ToolCommand::new(installer).arg("/mergetasks=!runcode")
}
