use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::output;
use crate::platform::{HostPlatform, join_segments};
use crate::process::ToolCommand;
use crate::project::Project;

const UBT_SOURCE_DIR: &[&str] = &["Engine", "Source", "Programs", "UnrealBuildTool"];
const UBT_PROJECT_FILE: &str = "UnrealBuildTool.csproj";

/// Generate native project files with UnrealBuildTool, building it first
/// when the engine install does not ship a binary.
pub(crate) fn generate(project: &Project) -> Result<()> {
    let unreal_path = project.settings.unreal_path()?;
    let ubt = ubt_path(project.platform, &unreal_path);
    if !ubt.exists() {
        output::print_log(format!(
            "UnrealBuildTool not found at {}; building it from source",
            ubt.display()
        ));
        bootstrap_command(&unreal_path)?.run()?;
    }

    generate_command(&ubt, &project.uproject_path()?).run()?;
    Ok(())
}

pub(crate) fn ubt_path(platform: HostPlatform, unreal_path: &Path) -> PathBuf {
    match platform {
        HostPlatform::Windows => join_segments(
            unreal_path,
            &[
                "Engine",
                "Binaries",
                "DotNET",
                "UnrealBuildTool",
                "UnrealBuildTool.exe",
            ],
        ),
        HostPlatform::Mac | HostPlatform::Linux => join_segments(
            unreal_path,
            &[
                "Engine",
                "Build",
                "BatchFiles",
                platform.engine_platform(),
                "RunUBT.sh",
            ],
        ),
    }
}

/// `dotnet build` for the UnrealBuildTool sources inside the engine tree.
pub(crate) fn bootstrap_command(unreal_path: &Path) -> Result<ToolCommand> {
    if !unreal_path.is_dir() {
        bail!("Unreal Engine not found at `{}`", unreal_path.display());
    }
    let source_dir = join_segments(unreal_path, UBT_SOURCE_DIR);
    let csproj = source_dir.join(UBT_PROJECT_FILE);
    if !csproj.is_file() {
        bail!("`{UBT_PROJECT_FILE}` not found at `{}`", csproj.display());
    }

    Ok(ToolCommand::new("dotnet")
        .arg("build")
        .arg(csproj.display().to_string())
        .args(["-c", "Development"])
        .current_dir(source_dir))
}

pub(crate) fn generate_command(ubt: &Path, uproject: &Path) -> ToolCommand {
    ToolCommand::new(ubt)
        .arg("-projectfiles")
        .arg(format!("-project={}", uproject.display()))
        .args(["-game", "-engine", "-dotnet", "-vscode"])
}
