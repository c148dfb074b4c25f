//! Structured changelog and its synchronized copies.
//!
//! - `add-version` / `add-change`: mutate the last entry (or append one).
//! - `update-readme`: append release notes for the last entry to the README.
//! - `update-ini`: copy the last version into `Config/DefaultGame.ini`.
//! - `prebuild`: both updates plus a copy of the changelog into game content.
//! - `notes`: print (and optionally copy) release notes for the last entry.
pub(crate) mod ini;
pub(crate) mod model;
pub(crate) mod notes;
pub(crate) mod store;
pub(crate) mod version;

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use arboard::Clipboard;

use crate::assets::{self, RELEASE_NOTES_TEMPLATE};
use crate::cli::{AddChangeArgs, AddVersionArgs, ChangelogArgs, ChangelogCommand, NotesArgs};
use crate::config::{DEFAULT_CHANGELOG_FILENAME, locate::find_config};
use crate::output;
use crate::project::Project;

use model::{Changelog, DEFAULT_PRERELEASE};

const README_FILE: &str = "README.md";
const CONTENT_DIR: &str = "Content";
const CONTENT_DATA_DIR: &str = "Data";
const DISABLE_CLIPBOARD_ENV: &str = "UPM_DISABLE_CLIPBOARD";

/// Local calendar date in the changelog's `YYYY-MM-DD` format.
pub(crate) fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

pub(crate) fn run(args: ChangelogArgs) -> Result<()> {
    let paths = ChangelogPaths::resolve(&args)?;
    match args.command {
        ChangelogCommand::AddVersion(add_args) => add_version(&paths, &add_args),
        ChangelogCommand::AddChange(change_args) => add_change(&paths, &change_args),
        ChangelogCommand::UpdateReadme => update_readme(&paths),
        ChangelogCommand::UpdateIni => update_ini(&paths),
        ChangelogCommand::Prebuild => prebuild(&paths),
        ChangelogCommand::Notes(notes_args) => print_notes(&paths, &notes_args),
    }
}

#[derive(Debug)]
struct ChangelogPaths {
    root: PathBuf,
    changelog: PathBuf,
    readme: PathBuf,
    ini: PathBuf,
    project: Option<Project>,
}

impl ChangelogPaths {
    /// Resolve file locations against the project root, or the current
    /// directory when no project config exists.
    fn resolve(args: &ChangelogArgs) -> Result<Self> {
        let cwd = env::current_dir().context("failed to resolve current directory")?;
        let project = match find_config(&cwd) {
            Some(_) => Some(Project::discover_from(&cwd)?),
            None => None,
        };
        let root = project
            .as_ref()
            .map(|project| project.root.clone())
            .unwrap_or(cwd);

        let changelog = match (&args.file, &project) {
            (Some(file), _) => root.join(file),
            (None, Some(project)) => project.changelog_path(),
            (None, None) => root.join(DEFAULT_CHANGELOG_FILENAME),
        };
        let readme = root.join(args.readme.as_deref().unwrap_or(Path::new(README_FILE)));
        let ini = root.join(
            args.ini
                .as_deref()
                .unwrap_or(Path::new(ini::GAME_INI_PATH)),
        );

        Ok(Self {
            root,
            changelog,
            readme,
            ini,
            project,
        })
    }
}

fn add_version(paths: &ChangelogPaths, args: &AddVersionArgs) -> Result<()> {
    let mut changelog = store::load(&paths.changelog)?;
    let prerelease = if args.release {
        None
    } else {
        Some(
            args.prerelease
                .clone()
                .unwrap_or_else(|| DEFAULT_PRERELEASE.to_owned()),
        )
    };

    let today = today();
    let version = changelog
        .add_version(args.bump, prerelease, &today)?
        .version
        .clone();
    store::save(&paths.changelog, &mut changelog, &today)?;
    output::print_log(format!("added version {version}"));
    output::print_path(paths.changelog.display());
    Ok(())
}

fn add_change(paths: &ChangelogPaths, args: &AddChangeArgs) -> Result<()> {
    let mut changelog = store::load(&paths.changelog)?;
    changelog.add_change(&args.description)?;
    store::save(&paths.changelog, &mut changelog, &today())?;
    output::print_log(format!(
        "added change to version {}",
        changelog.latest()?.version
    ));
    output::print_path(paths.changelog.display());
    Ok(())
}

fn update_readme(paths: &ChangelogPaths) -> Result<()> {
    let changelog = store::load(&paths.changelog)?;
    let notes = render_latest_notes(paths, &changelog)?;
    notes::append_to_readme(&paths.readme, &notes)?;
    output::print_path(paths.readme.display());
    Ok(())
}

fn update_ini(paths: &ChangelogPaths) -> Result<()> {
    let changelog = store::load(&paths.changelog)?;
    ini::update_file(&paths.ini, &changelog.latest()?.version)?;
    output::print_path(paths.ini.display());
    Ok(())
}

fn prebuild(paths: &ChangelogPaths) -> Result<()> {
    let project = paths.project.as_ref().ok_or_else(|| {
        anyhow!("`changelog prebuild` needs a project config to locate game content; run `upm config` first")
    })?;

    update_ini(paths)?;
    update_readme(paths)?;

    let data_dir = project
        .root
        .join(CONTENT_DIR)
        .join(project.settings.project_name()?)
        .join(CONTENT_DATA_DIR);
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create `{}`", data_dir.display()))?;
    let file_name = paths
        .changelog
        .file_name()
        .ok_or_else(|| anyhow!("changelog path `{}` has no file name", paths.changelog.display()))?;
    let destination = data_dir.join(file_name);
    fs::copy(&paths.changelog, &destination).with_context(|| {
        format!(
            "failed to copy `{}` to `{}`",
            paths.changelog.display(),
            destination.display()
        )
    })?;
    output::print_path(destination.display());
    Ok(())
}

fn print_notes(paths: &ChangelogPaths, args: &NotesArgs) -> Result<()> {
    let changelog = store::load(&paths.changelog)?;
    let notes = render_latest_notes(paths, &changelog)?;
    let notes = notes.trim();
    println!("{notes}");

    if !args.copy {
        return Ok(());
    }
    if env::var_os(DISABLE_CLIPBOARD_ENV).is_some() {
        output::print_log(format!("clipboard disabled by {DISABLE_CLIPBOARD_ENV}"));
        return Ok(());
    }
    match copy_to_clipboard(notes) {
        Ok(()) => output::print_log("copied release notes to clipboard"),
        Err(error) => output::print_warning(format!(
            "failed to copy release notes to clipboard: {error:#}"
        )),
    }
    Ok(())
}

fn render_latest_notes(paths: &ChangelogPaths, changelog: &Changelog) -> Result<String> {
    let template = assets::load_asset(&paths.root, RELEASE_NOTES_TEMPLATE)?;
    notes::render(&template, changelog.latest()?)
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("failed to access system clipboard")?;
    clipboard
        .set_text(text.to_owned())
        .context("failed to set clipboard text")?;
    Ok(())
}
