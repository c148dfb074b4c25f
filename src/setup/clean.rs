use std::{fs, io, path::Path};

use anyhow::{Context, Result};

use crate::config::dotenv::DOTENV_FILE;
use crate::output;
use crate::project::Project;
use crate::vscode::{LAUNCH_FILE, TASKS_FILE};

/// Remove generated files; the workspace file is left in place.
pub(crate) fn run(project: &Project) -> Result<()> {
    let vscode_dir = project.vscode_dir();
    let targets = [
        project.root.join(DOTENV_FILE),
        vscode_dir.join(TASKS_FILE),
        vscode_dir.join(LAUNCH_FILE),
    ];
    for target in &targets {
        if remove_if_present(target)? {
            output::print_log(format!("removed {}", target.display()));
        }
    }

    output::print_hint(format!(
        "`{}` still exists; run `upm setup` to regenerate it",
        project.settings.workspace_name()?
    ));
    Ok(())
}

fn remove_if_present(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(error) => {
            Err(error).with_context(|| format!("failed to remove `{}`", path.display()))
        }
    }
}
