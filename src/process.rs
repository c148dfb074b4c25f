//! External process invocation.
//!
//! Every engine script, installer, and helper tool is described as a
//! [`ToolCommand`] first so the argument list can be inspected (and tested)
//! before anything is spawned.

use std::{
    io,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use thiserror::Error;

use crate::output;

#[derive(Debug, Error)]
pub(crate) enum ToolError {
    #[error("failed to launch `{program}`")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("`{program}` exited with status {code}")]
    Failed { program: String, code: i32 },
    #[error("`{program}` was terminated before it exited")]
    Terminated { program: String },
}

impl ToolError {
    /// Exit code the CLI should forward, when the tool produced one.
    pub(crate) fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Failed { code, .. } => Some(*code),
            Self::Launch { .. } | Self::Terminated { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ToolCommand {
    pub(crate) program: PathBuf,
    pub(crate) args: Vec<String>,
    pub(crate) current_dir: Option<PathBuf>,
}

impl ToolCommand {
    pub(crate) fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub(crate) fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub(crate) fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub(crate) fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub(crate) fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    /// Shell-like rendering used for logging.
    pub(crate) fn display(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(quote(&self.program_name()));
        parts.extend(self.args.iter().map(|arg| quote(arg)));
        parts.join(" ")
    }

    /// Run with inherited stdio; a non-zero exit is an error.
    pub(crate) fn run(&self) -> Result<(), ToolError> {
        output::print_log(format!("running {}", self.display()));
        let status = self
            .to_command()
            .status()
            .map_err(|source| ToolError::Launch {
                program: self.program_name(),
                source,
            })?;

        if status.success() {
            return Ok(());
        }
        match status.code() {
            Some(code) => Err(ToolError::Failed {
                program: self.program_name(),
                code,
            }),
            None => Err(ToolError::Terminated {
                program: self.program_name(),
            }),
        }
    }

    /// Run silently and report whether the tool is available and succeeded.
    pub(crate) fn probe(&self) -> bool {
        self.to_command()
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Run silently and return trimmed stdout on success.
    pub(crate) fn capture(&self) -> Result<String, ToolError> {
        let output = self
            .to_command()
            .stderr(Stdio::null())
            .output()
            .map_err(|source| ToolError::Launch {
                program: self.program_name(),
                source,
            })?;
        if !output.status.success() {
            return Err(match output.status.code() {
                Some(code) => ToolError::Failed {
                    program: self.program_name(),
                    code,
                },
                None => ToolError::Terminated {
                    program: self.program_name(),
                },
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }
        command
    }
}

fn quote(value: &str) -> String {
    if value.is_empty() || value.contains(char::is_whitespace) {
        return format!("\"{value}\"");
    }
    value.to_owned()
}
