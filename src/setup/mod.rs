//! `upm setup`: export the config, generate native project files, and write
//! the VS Code integration files.

pub(crate) mod clean;
pub(crate) mod project_files;

use std::env;

use anyhow::{Context, Result};

use crate::cli::SetupArgs;
use crate::config::dotenv::{self, DOTENV_FILE};
use crate::output;
use crate::project::Project;
use crate::vscode::{self, IdeContext};

pub(crate) fn run(args: SetupArgs) -> Result<()> {
    let project = Project::discover()?;
    let dotenv_path = project.root.join(DOTENV_FILE);
    dotenv::write(&dotenv_path, &project.settings.values)?;
    output::print_path(dotenv_path.display());

    if args.clean {
        return clean::run(&project);
    }

    if args.no_project_files {
        output::print_log("skipping project file generation");
    } else {
        project_files::generate(&project)?;
    }

    let upm_exe = env::current_exe().context("failed to resolve the upm executable path")?;
    let ctx = IdeContext::from_project(&project, upm_exe)?;
    vscode::write_all(&project, &ctx)
}
