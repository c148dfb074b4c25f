use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::platform::{HostPlatform, join_segments};
use crate::process::ToolCommand;
use crate::project::Project;

use super::BuildType;

pub(crate) const PACKAGES_DIR: &str = "Packages";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BuildAction {
    Clean,
    Build,
    Package,
}

impl BuildAction {
    /// Requested actions in execution order.
    pub(crate) fn requested(clean: bool, build: bool, package: bool) -> Vec<Self> {
        [(clean, Self::Clean), (build, Self::Build), (package, Self::Package)]
            .into_iter()
            .filter_map(|(requested, action)| requested.then_some(action))
            .collect()
    }

    pub(crate) fn verb(self) -> &'static str {
        match self {
            Self::Clean => "cleaning",
            Self::Build => "building",
            Self::Package => "packaging",
        }
    }
}

/// Engine script locations for one host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EngineScripts {
    pub(crate) clean: PathBuf,
    pub(crate) build: PathBuf,
    pub(crate) package: PathBuf,
}

impl EngineScripts {
    pub(crate) fn for_host(platform: HostPlatform, unreal_path: &Path) -> Self {
        let batch_files = join_segments(unreal_path, &["Engine", "Build", "BatchFiles"]);
        match platform {
            HostPlatform::Windows => Self {
                clean: batch_files.join("Clean.bat"),
                build: batch_files.join("Build.bat"),
                package: batch_files.join("RunUAT.bat"),
            },
            HostPlatform::Mac => Self {
                clean: join_segments(&batch_files, &["Mac", "Clean.sh"]),
                build: join_segments(&batch_files, &["Mac", "Build.sh"]),
                package: join_segments(&batch_files, &["Mac", "Package.sh"]),
            },
            HostPlatform::Linux => Self {
                clean: join_segments(&batch_files, &["Linux", "Clean.sh"]),
                build: join_segments(&batch_files, &["Linux", "Build.sh"]),
                package: batch_files.join("RunUAT.sh"),
            },
        }
    }

    pub(crate) fn script_for(&self, action: BuildAction) -> &Path {
        match action {
            BuildAction::Clean => &self.clean,
            BuildAction::Build => &self.build,
            BuildAction::Package => &self.package,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct BuildStep {
    pub(crate) action: BuildAction,
    pub(crate) command: ToolCommand,
}

/// Fully resolved commands for one `upm build` invocation.
#[derive(Debug, Clone)]
pub(crate) struct BuildPlan {
    pub(crate) unreal_path: PathBuf,
    pub(crate) archive_dir: PathBuf,
    pub(crate) steps: Vec<BuildStep>,
}

impl BuildPlan {
    pub(crate) fn new(
        project: &Project,
        target_name: &str,
        build_type: BuildType,
        actions: &[BuildAction],
    ) -> Result<Self> {
        if actions.is_empty() {
            bail!("nothing to do; pass at least one of --clean, --build, --package");
        }

        let settings = &project.settings;
        let unreal_path = settings.unreal_path()?;
        let uproject = project.uproject_path()?;
        let archive_dir = project
            .root
            .join(PACKAGES_DIR)
            .join(project.platform.config_section());
        let engine_platform = project.platform.engine_platform();
        let scripts = EngineScripts::for_host(project.platform, &unreal_path);

        if actions.contains(&BuildAction::Package) && target_name == settings.editor_name()? {
            bail!("cannot package the editor target `{target_name}`");
        }

        let mut steps = Vec::with_capacity(actions.len());
        for action in actions {
            let script = scripts.script_for(*action);
            if !script.is_file() {
                bail!("engine script not found at `{}`", script.display());
            }
            let command = match action {
                BuildAction::Clean | BuildAction::Build => {
                    target_command(script, target_name, engine_platform, build_type, &uproject)
                }
                BuildAction::Package => package_command(
                    script,
                    target_name,
                    engine_platform,
                    build_type,
                    &uproject,
                    &archive_dir,
                ),
            };
            steps.push(BuildStep {
                action: *action,
                command,
            });
        }

        Ok(Self {
            unreal_path,
            archive_dir,
            steps,
        })
    }
}

fn target_command(
    script: &Path,
    target_name: &str,
    engine_platform: &str,
    build_type: BuildType,
    uproject: &Path,
) -> ToolCommand {
    ToolCommand::new(script)
        .arg(target_name)
        .arg(engine_platform)
        .arg(build_type.as_str())
        .arg(uproject.display().to_string())
        .arg("-waitmutex")
}

fn package_command(
    script: &Path,
    target_name: &str,
    engine_platform: &str,
    build_type: BuildType,
    uproject: &Path,
    archive_dir: &Path,
) -> ToolCommand {
    ToolCommand::new(script)
        .args(["BuildCookRun", "-noP4", "-utf8output", "-cook"])
        .arg(format!("-project={}", uproject.display()))
        .arg(format!("-target={target_name}"))
        .arg(format!("-platform={engine_platform}"))
        .arg(format!("-clientconfig={build_type}"))
        .args([
            "-stage",
            "-archive",
            "-package",
            "-build",
            "-clean",
            "-pak",
            "-iostore",
            "-prereqs",
        ])
        .arg(format!("-archivedirectory={}", archive_dir.display()))
        .args(["-manifests", "-nocompileuat", "-waitmutex"])
}

#[cfg(test)]
mod tests {
    use super::{BuildAction, EngineScripts, package_command, target_command};
    use crate::engine::BuildType;
    use crate::platform::HostPlatform;
    use std::path::Path;

    #[test]
    fn requested_actions_run_clean_build_package() {
        assert_eq!(
            BuildAction::requested(true, true, true),
            vec![BuildAction::Clean, BuildAction::Build, BuildAction::Package]
        );
        assert_eq!(
            BuildAction::requested(false, false, true),
            vec![BuildAction::Package]
        );
        assert!(BuildAction::requested(false, false, false).is_empty());
    }

    #[test]
    fn script_table_per_host() {
        let root = Path::new("/opt/ue");
        let mac = EngineScripts::for_host(HostPlatform::Mac, root);
        assert_eq!(
            mac.package,
            Path::new("/opt/ue/Engine/Build/BatchFiles/Mac/Package.sh")
        );
        let linux = EngineScripts::for_host(HostPlatform::Linux, root);
        assert_eq!(
            linux.clean,
            Path::new("/opt/ue/Engine/Build/BatchFiles/Linux/Clean.sh")
        );
        assert_eq!(
            linux.package,
            Path::new("/opt/ue/Engine/Build/BatchFiles/RunUAT.sh")
        );
        let windows = EngineScripts::for_host(HostPlatform::Windows, root);
        assert!(windows.build.ends_with("BatchFiles/Build.bat"));
    }

    #[test]
    fn target_command_arguments() {
        let command = target_command(
            Path::new("/opt/ue/Build.sh"),
            "MoonshotEditor",
            "Linux",
            BuildType::DebugGame,
            Path::new("/work/Moonshot/Moonshot.uproject"),
        );
        assert_eq!(
            command.args,
            vec![
                "MoonshotEditor",
                "Linux",
                "DebugGame",
                "/work/Moonshot/Moonshot.uproject",
                "-waitmutex"
            ]
        );
    }

    #[test]
    fn package_command_arguments() {
        let command = package_command(
            Path::new("/opt/ue/RunUAT.sh"),
            "Moonshot",
            "Linux",
            BuildType::Shipping,
            Path::new("/work/Moonshot/Moonshot.uproject"),
            Path::new("/work/Moonshot/Packages/Linux"),
        );
        assert_eq!(
            command.args,
            vec![
                "BuildCookRun",
                "-noP4",
                "-utf8output",
                "-cook",
                "-project=/work/Moonshot/Moonshot.uproject",
                "-target=Moonshot",
                "-platform=Linux",
                "-clientconfig=Shipping",
                "-stage",
                "-archive",
                "-package",
                "-build",
                "-clean",
                "-pak",
                "-iostore",
                "-prereqs",
                "-archivedirectory=/work/Moonshot/Packages/Linux",
                "-manifests",
                "-nocompileuat",
                "-waitmutex"
            ]
        );
    }
}
