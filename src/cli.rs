//! CLI shape and argument parsing for upm.
//!
//! upm manages the glue around an Unreal Engine project: per-user config,
//! IDE integration files, engine build scripts, and the release changelog.

use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::changelog::version::BumpType;
use crate::engine::BuildType;
use crate::install::xcode::DEFAULT_XCODE_VERSION;

#[derive(Debug, Parser)]
#[command(
    name = "upm",
    version,
    about = "Manage Unreal Engine project workflows",
    long_about = "Manage Unreal Engine project workflows.\n\n\
Use `config` to scaffold `config.upm` and the changelog for a project.\n\
Use `setup` to generate project files and VS Code integration from the config.\n\
Use `build` to clean, build, or package a target with the engine scripts.\n\
Use `changelog` to record versions and changes and sync them into README and INI files.",
    after_help = "Examples:\n\
  upm config --dir MyGame --unreal \"/opt/UnrealEngine\" --gitignore\n\
  upm setup\n\
  upm query --unreal-path\n\
  upm build --project-dir . --build-type Development --target-name MyGameEditor --build\n\
  upm changelog add-change \"Added double jump\"\n\
  upm changelog prebuild"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(
        name = "config",
        about = "Scaffold config.upm, templates, and the changelog for a project",
        long_about = "Scaffold config.upm, templates, and the changelog for a project.\n\n\
Copies the template bundle into `<dir>/upm`, writes `<dir>/config.upm` and the changelog when they are missing, and optionally a `.gitignore`.\n\
Only the section for the current operating system is filled in.",
        after_help = "Examples:\n\
  upm config\n\
  upm config --dir MyGame --unreal \"C:\\Program Files\\Epic Games\\UE_5.4\" --gitignore\n\
  upm config --project-name MyGame --game-name MyGameClient --changelog History.json"
    )]
    Config(ConfigArgs),

    #[command(
        name = "query",
        about = "Print values from the active config section",
        long_about = "Print values from the active config section.\n\n\
Prints one key when given, or every key in the section for this operating system.",
        after_help = "Examples:\n\
  upm query PROJECT_NAME\n\
  upm query --unreal-path\n\
  upm query --format json"
    )]
    Query(QueryArgs),

    #[command(
        name = "setup",
        about = "Generate project files and VS Code integration from the config",
        long_about = "Generate project files and VS Code integration from the config.\n\n\
Writes `.env`, runs UnrealBuildTool to generate native project files (building UnrealBuildTool first when needed), and writes `.vscode/launch.json`, `.vscode/tasks.json`, and the `.code-workspace` file.\n\
Use `--clean` to remove generated files instead.",
        after_help = "Examples:\n\
  upm setup\n\
  upm setup --no-project-files\n\
  upm setup --clean"
    )]
    Setup(SetupArgs),

    #[command(
        name = "build",
        about = "Clean, build, or package a target with the engine scripts",
        long_about = "Clean, build, or package a target with the engine scripts.\n\n\
Requested actions run in the order clean, build, package. The engine script's exit code becomes upm's exit code on failure.\n\
Use `--archive` with `--package` to compress the packaged build into `Packages/`.",
        after_help = "Examples:\n\
  upm build --project-dir . --build-type Development --target-name MyGameEditor --build\n\
  upm build --project-dir . --build-type shipping --target-name MyGame --clean --package --archive"
    )]
    Build(BuildArgs),

    #[command(
        name = "changelog",
        about = "Record releases and sync them into README and INI files",
        long_about = "Record releases and sync them into README and INI files.\n\n\
Every command that saves the changelog stamps the last entry with today's date and the current git commit.",
        after_help = "Examples:\n\
  upm changelog add-version --bump minor\n\
  upm changelog add-version --release\n\
  upm changelog add-change \"Fixed crash on level load\"\n\
  upm changelog update-readme\n\
  upm changelog notes --copy"
    )]
    Changelog(ChangelogArgs),

    #[command(
        name = "install-vscode",
        about = "Download and run the Visual Studio Code installer (Windows)",
        after_help = "Examples:\n\
  upm install-vscode"
    )]
    InstallVscode,

    #[command(
        name = "install-vs",
        about = "Download and run the Visual Studio installer with game workloads (Windows)",
        long_about = "Download and run the Visual Studio installer with game workloads (Windows).\n\n\
Relaunches itself through an elevation prompt when not running as administrator.",
        after_help = "Examples:\n\
  upm install-vs"
    )]
    InstallVs,

    #[command(
        name = "install-xcode",
        about = "Install and select an Xcode version with xcodes (macOS)",
        long_about = "Install and select an Xcode version with xcodes (macOS).\n\n\
Requires root. Installs Homebrew and `xcodes` when missing, then installs Xcode, accepts its license, and selects it.",
        after_help = "Examples:\n\
  sudo upm install-xcode\n\
  sudo upm install-xcode --xcode-version 15.2"
    )]
    InstallXcode(InstallXcodeArgs),
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Project directory to scaffold. Created when missing.
    #[arg(long = "dir", value_name = "path", default_value = ".")]
    pub dir: PathBuf,

    /// Also write the bundled `.gitignore`.
    #[arg(long = "gitignore", action = ArgAction::SetTrue)]
    pub gitignore: bool,

    /// Unreal Engine installation directory.
    #[arg(long = "unreal", value_name = "path")]
    pub unreal: Option<PathBuf>,

    /// Project name. Defaults to the directory name.
    #[arg(long = "project-name", value_name = "name")]
    pub project_name: Option<String>,

    /// Game target name. Defaults to the project name.
    #[arg(long = "game-name", value_name = "name")]
    pub game_name: Option<String>,

    /// Editor target name. Defaults to `<project name>Editor`.
    #[arg(long = "editor-name", value_name = "name")]
    pub editor_name: Option<String>,

    /// VS Code workspace file name. Defaults to `<directory name>.code-workspace`.
    #[arg(long = "workspace", value_name = "file")]
    pub workspace: Option<String>,

    /// Changelog file name, relative to the project directory.
    #[arg(long = "changelog", value_name = "file", default_value = "Changelog.json")]
    pub changelog: String,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Config key to print, for example `PROJECT_NAME`.
    #[arg(value_name = "key", conflicts_with = "unreal_path")]
    pub key: Option<String>,

    /// Print `UNREAL_PATH`.
    #[arg(long = "unreal-path", action = ArgAction::SetTrue)]
    pub unreal_path: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value_t = QueryFormat::Text)]
    pub format: QueryFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct SetupArgs {
    /// Remove `.env`, `.vscode/tasks.json`, and `.vscode/launch.json` and stop.
    #[arg(long = "clean", action = ArgAction::SetTrue)]
    pub clean: bool,

    /// Skip UnrealBuildTool project file generation.
    #[arg(long = "no-project-files", action = ArgAction::SetTrue)]
    pub no_project_files: bool,
}

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("actions")
        .required(true)
        .multiple(true)
        .args(["clean", "build", "package"])
))]
pub struct BuildArgs {
    /// Project directory containing the config.
    #[arg(long = "project-dir", value_name = "path")]
    pub project_dir: PathBuf,

    /// Engine build configuration.
    #[arg(long = "build-type", value_enum, ignore_case = true)]
    pub build_type: BuildType,

    /// Build target, for example `MyGame` or `MyGameEditor`.
    #[arg(long = "target-name", value_name = "name")]
    pub target_name: String,

    /// Clean the target.
    #[arg(long = "clean", action = ArgAction::SetTrue)]
    pub clean: bool,

    /// Build the target.
    #[arg(long = "build", action = ArgAction::SetTrue)]
    pub build: bool,

    /// Cook, stage, and package the target.
    #[arg(long = "package", action = ArgAction::SetTrue)]
    pub package: bool,

    /// Compress the packaged build into `Packages/<project>-<version>-<platform>.tar.gz`.
    #[arg(long = "archive", action = ArgAction::SetTrue, requires = "package")]
    pub archive: bool,
}

#[derive(Debug, Args)]
pub struct ChangelogArgs {
    /// Changelog path. Defaults to `CHANGELOG_FILENAME` from the config.
    #[arg(long = "file", value_name = "path", global = true)]
    pub file: Option<PathBuf>,

    /// README path. Defaults to `README.md` at the project root.
    #[arg(long = "readme", value_name = "path", global = true)]
    pub readme: Option<PathBuf>,

    /// Game settings INI path. Defaults to `Config/DefaultGame.ini`.
    #[arg(long = "ini", value_name = "path", global = true)]
    pub ini: Option<PathBuf>,

    #[command(subcommand)]
    pub command: ChangelogCommand,
}

#[derive(Debug, Subcommand)]
pub enum ChangelogCommand {
    #[command(
        name = "add-version",
        about = "Append a new version entry",
        long_about = "Append a new version entry.\n\n\
Bumps the last version (patch by default). New entries are prereleases (`Alpha`) unless `--release` is passed.",
        after_help = "Examples:\n\
  upm changelog add-version\n\
  upm changelog add-version --bump minor --prerelease Beta\n\
  upm changelog add-version --bump major --release"
    )]
    AddVersion(AddVersionArgs),

    #[command(
        name = "add-change",
        about = "Append a change description to the last version",
        after_help = "Examples:\n\
  upm changelog add-change \"Added double jump\""
    )]
    AddChange(AddChangeArgs),

    #[command(
        name = "update-readme",
        about = "Append release notes for the last version to the README"
    )]
    UpdateReadme,

    #[command(
        name = "update-ini",
        about = "Write the last version into Config/DefaultGame.ini"
    )]
    UpdateIni,

    #[command(
        name = "prebuild",
        about = "Update INI and README, then copy the changelog into game content",
        long_about = "Update INI and README, then copy the changelog into game content.\n\n\
The changelog is copied to `Content/<PROJECT_NAME>/Data/`."
    )]
    Prebuild,

    #[command(
        name = "notes",
        about = "Print release notes for the last version",
        after_help = "Examples:\n\
  upm changelog notes\n\
  upm changelog notes --copy"
    )]
    Notes(NotesArgs),
}

#[derive(Debug, Args)]
pub struct AddVersionArgs {
    /// Version component to bump.
    #[arg(long = "bump", value_enum, default_value_t = BumpType::Patch)]
    pub bump: BumpType,

    /// Prerelease label for the new version.
    #[arg(long = "prerelease", value_name = "label", conflicts_with = "release")]
    pub prerelease: Option<String>,

    /// Mark the new version as a final release.
    #[arg(long = "release", action = ArgAction::SetTrue)]
    pub release: bool,
}

#[derive(Debug, Args)]
pub struct AddChangeArgs {
    /// Change description.
    #[arg(value_name = "description")]
    pub description: String,
}

#[derive(Debug, Args)]
pub struct NotesArgs {
    /// Also copy the notes to the system clipboard.
    #[arg(long = "copy", action = ArgAction::SetTrue)]
    pub copy: bool,
}

#[derive(Debug, Args)]
pub struct InstallXcodeArgs {
    /// Xcode version to install.
    #[arg(
        long = "xcode-version",
        value_name = "version",
        default_value = DEFAULT_XCODE_VERSION
    )]
    pub xcode_version: String,
}
