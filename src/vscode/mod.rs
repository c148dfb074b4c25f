//! VS Code integration files: `launch.json`, `tasks.json`, and the
//! `.code-workspace` file at the project root.
//!
//! `launch.json` and `tasks.json` start from the project's `upm/*.upm`
//! templates (or the embedded copies) and get the generated entries appended.
//! The workspace file is always generated from scratch.

pub(crate) mod launch;
pub(crate) mod tasks;
pub(crate) mod workspace;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use serde_json::Value;

use crate::assets::{self, LAUNCH_TEMPLATE, TASKS_TEMPLATE};
use crate::json;
use crate::output;
use crate::platform::HostPlatform;
use crate::project::Project;

pub(crate) const LAUNCH_FILE: &str = "launch.json";
pub(crate) const TASKS_FILE: &str = "tasks.json";

/// Everything the generators need, resolved once from the project config.
#[derive(Debug, Clone)]
pub(crate) struct IdeContext {
    pub(crate) platform: HostPlatform,
    pub(crate) root: PathBuf,
    pub(crate) unreal_path: PathBuf,
    pub(crate) project_name: String,
    pub(crate) game_name: String,
    pub(crate) editor_name: String,
    /// Executable the generated tasks invoke.
    pub(crate) upm_exe: PathBuf,
}

impl IdeContext {
    pub(crate) fn from_project(project: &Project, upm_exe: PathBuf) -> Result<Self> {
        let settings = &project.settings;
        Ok(Self {
            platform: project.platform,
            root: project.root.clone(),
            unreal_path: settings.unreal_path()?,
            project_name: settings.project_name()?.to_owned(),
            game_name: settings.game_name()?,
            editor_name: settings.editor_name()?,
            upm_exe,
        })
    }

    pub(crate) fn uproject_path(&self) -> PathBuf {
        self.root.join(format!("{}.uproject", self.project_name))
    }
}

/// Write all three files for `project`.
pub(crate) fn write_all(project: &Project, ctx: &IdeContext) -> Result<()> {
    let vscode_dir = project.vscode_dir();
    fs::create_dir_all(&vscode_dir)
        .with_context(|| format!("failed to create `{}`", vscode_dir.display()))?;

    let mut launch_document = load_template(&ctx.root, LAUNCH_TEMPLATE)?;
    launch::extend(&mut launch_document, ctx)?;
    let launch_path = vscode_dir.join(LAUNCH_FILE);
    json::write_pretty(&launch_path, &launch_document)?;
    output::print_path(launch_path.display());

    let mut tasks_document = load_template(&ctx.root, TASKS_TEMPLATE)?;
    tasks::extend(&mut tasks_document, ctx)?;
    let tasks_path = vscode_dir.join(TASKS_FILE);
    json::write_pretty(&tasks_path, &tasks_document)?;
    output::print_path(tasks_path.display());

    let workspace_path = project.root.join(project.settings.workspace_name()?);
    json::write_pretty(&workspace_path, &workspace::document(ctx))?;
    output::print_path(workspace_path.display());
    Ok(())
}

fn load_template(root: &Path, name: &str) -> Result<Value> {
    let source = assets::load_asset(root, name)?;
    serde_json::from_str(&source).with_context(|| format!("failed to parse template `{name}`"))
}

/// Append `items` to the array stored under `key` in a template document.
pub(crate) fn append_to_array(document: &mut Value, key: &str, items: Vec<Value>) -> Result<()> {
    let array = document
        .get_mut(key)
        .and_then(Value::as_array_mut)
        .ok_or_else(|| anyhow!("template is missing a `{key}` array"))?;
    array.extend(items);
    Ok(())
}

pub(crate) fn path_string(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::IdeContext;
    use crate::platform::HostPlatform;
    use std::path::PathBuf;

    pub(crate) fn context(platform: HostPlatform) -> IdeContext {
        IdeContext {
            platform,
            root: PathBuf::from("/work/Moonshot"),
            unreal_path: PathBuf::from("/opt/ue"),
            project_name: "Moonshot".to_owned(),
            game_name: "MoonshotGame".to_owned(),
            editor_name: "MoonshotEditor".to_owned(),
            upm_exe: PathBuf::from("/usr/local/bin/upm"),
        }
    }
}
