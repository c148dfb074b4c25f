use anyhow::{Result, bail};
use serde::Serialize;

use crate::cli::{QueryArgs, QueryFormat};
use crate::project::Project;

use super::{
    CHANGELOG_FILENAME_KEY, EDITOR_NAME_KEY, GAME_NAME_KEY, PlatformSettings, UNREAL_PATH_KEY,
    WORKSPACE_NAME_KEY,
};

pub(crate) fn run(args: QueryArgs) -> Result<()> {
    let project = Project::discover()?;
    let key = if args.unreal_path {
        Some(UNREAL_PATH_KEY.to_owned())
    } else {
        args.key
    };

    match key {
        Some(key) => {
            let value = lookup(&project.settings, &key)?;
            match args.format {
                QueryFormat::Text => println!("{value}"),
                QueryFormat::Json => println!("{}", serde_json::to_string_pretty(&value)?),
            }
        }
        None => match args.format {
            QueryFormat::Text => print_text(&project.settings),
            QueryFormat::Json => print_json(&project)?,
        },
    }
    Ok(())
}

/// Value of `key` in the active section. Keys with a documented default
/// resolve the same way `setup` and `build` see them when left unset; any
/// other key is returned raw.
pub(crate) fn lookup(settings: &PlatformSettings, key: &str) -> Result<String> {
    match key {
        GAME_NAME_KEY => settings.game_name(),
        EDITOR_NAME_KEY => settings.editor_name(),
        WORKSPACE_NAME_KEY => settings.workspace_name(),
        CHANGELOG_FILENAME_KEY => Ok(settings.changelog_filename()),
        _ => match settings.values.get(key) {
            Some(value) => Ok(value.clone()),
            None => bail!(
                "unknown config key `{key}` in the `{}` section",
                settings.section
            ),
        },
    }
}

fn print_text(settings: &PlatformSettings) {
    for (key, value) in &settings.values {
        println!("{key}\t{value}");
    }
}

fn print_json(project: &Project) -> Result<()> {
    let payload = QueryResponseJson {
        schema_version: 1,
        config: project.config_path.display().to_string(),
        section: &project.settings.section,
        values: &project.settings.values,
    };
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

#[derive(Debug, Serialize)]
struct QueryResponseJson<'a> {
    schema_version: u32,
    config: String,
    section: &'a str,
    values: &'a super::Section,
}
