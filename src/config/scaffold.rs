use std::{
    fs,
    path::{Component, Path},
};

use anyhow::{Context, Result, anyhow, bail};

use crate::assets::{self, CONFIG_TEMPLATE, GITIGNORE_TEMPLATE, PROJECT_ASSETS_DIR};
use crate::changelog::{self, model::Changelog};
use crate::cli::ConfigArgs;
use crate::output;
use crate::platform::HostPlatform;

use super::{
    CHANGELOG_FILENAME_KEY, ConfigDocument, EDITOR_NAME_KEY, GAME_NAME_KEY, PROJECT_NAME_KEY,
    UNREAL_PATH_KEY, WORKSPACE_NAME_KEY, locate::CONFIG_FILE,
};

const GITIGNORE_FILE: &str = ".gitignore";

/// Scaffold `config.upm`, the changelog, and the template bundle into `--dir`.
pub(crate) fn run(args: ConfigArgs) -> Result<()> {
    scaffold(&args, HostPlatform::current(), &changelog::today())
}

fn scaffold(args: &ConfigArgs, platform: HostPlatform, today: &str) -> Result<()> {
    if let Some(unreal) = &args.unreal {
        if !unreal.is_dir() {
            bail!("invalid Unreal Engine path `{}`: not a directory", unreal.display());
        }
    }

    let dir = args.dir.as_path();
    fs::create_dir_all(dir).with_context(|| format!("failed to create `{}`", dir.display()))?;

    let assets_dir = dir.join(PROJECT_ASSETS_DIR);
    materialize_assets(&assets_dir)?;
    output::print_log(format!("copied upm templates to {}", assets_dir.display()));

    if args.gitignore {
        let destination = dir.join(GITIGNORE_FILE);
        fs::write(&destination, assets::builtin_asset(GITIGNORE_TEMPLATE)?)
            .with_context(|| format!("failed to write `{}`", destination.display()))?;
        output::print_path(destination.display());
    } else {
        output::print_log("skipping .gitignore file");
    }

    let dir_name = directory_name(dir)?;
    let document = render_config(args, platform, &dir_name)?;

    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() {
        output::print_log(format!(
            "skipping config; `{}` already exists",
            config_path.display()
        ));
    } else {
        fs::write(&config_path, document.to_pretty_json()?)
            .with_context(|| format!("failed to write `{}`", config_path.display()))?;
        output::print_path(config_path.display());
    }

    let changelog_path = dir.join(&args.changelog);
    if changelog_path.exists() {
        output::print_log(format!(
            "skipping changelog; `{}` already exists",
            changelog_path.display()
        ));
    } else {
        changelog::store::write(&changelog_path, &Changelog::initial(today))?;
        output::print_log(format!(
            "created changelog with v0.0.0 at {}",
            changelog_path.display()
        ));
    }

    output::print_hint(format!(
        "navigate to `{}` and run `upm setup` to finish setting up the project",
        dir.display()
    ));
    Ok(())
}

fn render_config(args: &ConfigArgs, platform: HostPlatform, dir_name: &str) -> Result<ConfigDocument> {
    let mut document = ConfigDocument::parse(&assets::builtin_asset(CONFIG_TEMPLATE)?)
        .context("embedded config template is invalid")?;
    let section = document.section_mut(platform);

    if let Some(unreal) = &args.unreal {
        section.insert(UNREAL_PATH_KEY.to_owned(), unreal.display().to_string());
    }

    let project_name = args
        .project_name
        .clone()
        .unwrap_or_else(|| dir_name.to_owned());
    let game_name = args
        .game_name
        .clone()
        .unwrap_or_else(|| project_name.clone());
    let editor_name = args
        .editor_name
        .clone()
        .unwrap_or_else(|| format!("{project_name}Editor"));
    let workspace_name = args
        .workspace
        .clone()
        .unwrap_or_else(|| format!("{dir_name}.code-workspace"));

    section.insert(PROJECT_NAME_KEY.to_owned(), project_name);
    section.insert(GAME_NAME_KEY.to_owned(), game_name);
    section.insert(EDITOR_NAME_KEY.to_owned(), editor_name);
    section.insert(WORKSPACE_NAME_KEY.to_owned(), workspace_name);
    section.insert(CHANGELOG_FILENAME_KEY.to_owned(), args.changelog.clone());
    Ok(document)
}

fn materialize_assets(target: &Path) -> Result<()> {
    fs::create_dir_all(target)
        .with_context(|| format!("failed to create `{}`", target.display()))?;
    for asset in assets::load_assets()? {
        let destination = target.join(&asset.name);
        fs::write(&destination, &asset.content)
            .with_context(|| format!("failed to write `{}`", destination.display()))?;
        output::print_path(destination.display());
    }
    Ok(())
}

fn directory_name(dir: &Path) -> Result<String> {
    let resolved = fs::canonicalize(dir)
        .with_context(|| format!("failed to resolve `{}`", dir.display()))?;
    last_normal_component(&resolved).ok_or_else(|| {
        anyhow!(
            "cannot derive a project name from `{}`; pass --project-name",
            dir.display()
        )
    })
}

fn last_normal_component(path: &Path) -> Option<String> {
    path.components().rev().find_map(|component| match component {
        Component::Normal(name) => name.to_str().map(ToOwned::to_owned),
        _ => None,
    })
}
