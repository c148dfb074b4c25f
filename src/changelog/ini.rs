//! `ProjectVersion` synchronization into the engine's game settings INI.
//!
//! Only the one key is touched; every other byte of the file is preserved,
//! including comments, duplicate keys, and CRLF line endings.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

pub(crate) const GAME_INI_PATH: &str = "Config/DefaultGame.ini";
pub(crate) const PROJECT_SETTINGS_SECTION: &str = "/Script/EngineSettings.GeneralProjectSettings";
const PROJECT_VERSION_KEY: &str = "ProjectVersion";

pub(crate) fn update_file(path: &Path, version: &str) -> Result<()> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    let updated = set_project_version(&source, version)
        .with_context(|| format!("failed to update `{}`", path.display()))?;
    fs::write(path, updated).with_context(|| format!("failed to write `{}`", path.display()))
}

/// Replace the first `ProjectVersion` in the project settings section, or
/// insert it directly under the section header.
pub(crate) fn set_project_version(source: &str, version: &str) -> Result<String> {
    let header = format!("[{PROJECT_SETTINGS_SECTION}]");
    let mut lines = source
        .split_inclusive('\n')
        .map(ToOwned::to_owned)
        .collect::<Vec<_>>();

    let Some(header_index) = lines.iter().position(|line| line.trim() == header) else {
        bail!("section `{header}` not found");
    };

    let section_end = lines[header_index + 1..]
        .iter()
        .position(|line| line.trim_start().starts_with('['))
        .map(|offset| header_index + 1 + offset)
        .unwrap_or(lines.len());

    let existing = (header_index + 1..section_end).find(|index| is_version_line(&lines[*index]));
    match existing {
        Some(index) => {
            let ending = line_ending(&lines[index]).to_owned();
            lines[index] = format!("{PROJECT_VERSION_KEY}={version}{ending}");
        }
        None => {
            let mut ending = line_ending(&lines[header_index]).to_owned();
            if ending.is_empty() {
                ending = "\n".to_owned();
                lines[header_index].push('\n');
            }
            lines.insert(
                header_index + 1,
                format!("{PROJECT_VERSION_KEY}={version}{ending}"),
            );
        }
    }

    Ok(lines.concat())
}

fn is_version_line(line: &str) -> bool {
    line.split_once('=')
        .map(|(key, _)| key.trim() == PROJECT_VERSION_KEY)
        .unwrap_or(false)
}

fn line_ending(line: &str) -> &str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}
