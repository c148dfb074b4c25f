//! `upm build`: drive the engine's clean, build, and package scripts for a
//! single target.

pub(crate) mod archive;
pub(crate) mod scripts;

use std::fmt;

use anyhow::Result;
use clap::ValueEnum;

use crate::cli::BuildArgs;
use crate::output;
use crate::project::Project;

use scripts::{BuildAction, BuildPlan};

/// Engine build configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuildType {
    #[value(name = "Debug")]
    Debug,
    #[value(name = "DebugGame")]
    DebugGame,
    #[value(name = "Development")]
    Development,
    #[value(name = "Test")]
    Test,
    #[value(name = "Shipping")]
    Shipping,
}

impl BuildType {
    /// Order offered to users in the IDE.
    pub(crate) const ALL: [Self; 5] = [
        Self::Development,
        Self::Debug,
        Self::DebugGame,
        Self::Test,
        Self::Shipping,
    ];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::DebugGame => "DebugGame",
            Self::Development => "Development",
            Self::Test => "Test",
            Self::Shipping => "Shipping",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn run(args: BuildArgs) -> Result<()> {
    let project = Project::discover_from(&args.project_dir)?;
    let actions = BuildAction::requested(args.clean, args.build, args.package);
    let plan = BuildPlan::new(&project, &args.target_name, args.build_type, &actions)?;

    for step in &plan.steps {
        output::print_log(format!(
            "{} {} target `{}` with Unreal Engine at {}",
            step.action.verb(),
            args.build_type,
            args.target_name,
            plan.unreal_path.display()
        ));
        step.command.run()?;
    }

    if args.archive {
        let archive_path = archive::create(&project, &plan.archive_dir)?;
        output::print_path(archive_path.display());
    }
    Ok(())
}
