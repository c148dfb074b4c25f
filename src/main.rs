mod assets;
mod changelog;
mod cli;
mod config;
mod engine;
mod install;
mod json;
mod output;
mod platform;
mod process;
mod project;
mod setup;
mod vscode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use cli::{Cli, Command};
use process::ToolError;

fn main() {
    if let Err(error) = run() {
        output::print_error(format!("{error:#}"));
        std::process::exit(exit_code(&error));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command()
            .print_help()
            .context("failed to print help")?;
        return Ok(());
    };

    match command {
        Command::Config(args) => config::scaffold::run(args),
        Command::Query(args) => config::query::run(args),
        Command::Setup(args) => setup::run(args),
        Command::Build(args) => engine::run(args),
        Command::Changelog(args) => changelog::run(args),
        Command::InstallVscode => install::vscode::run(),
        Command::InstallVs => install::visual_studio::run(),
        Command::InstallXcode(args) => install::xcode::run(args),
    }
}

/// Forward a failed external tool's exit code; everything else exits 1.
fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ToolError>())
        .and_then(ToolError::exit_code)
        .unwrap_or(1)
}
