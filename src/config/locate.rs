//! Config discovery.
//!
//! Resolution precedence, checked in each ancestor of the starting directory:
//! 1. `.vscode/config.upm` (per-user override)
//! 2. `config.upm`
//!
//! The first directory holding either file is the project root.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

pub(crate) const CONFIG_FILE: &str = "config.upm";
pub(crate) const VSCODE_DIR: &str = ".vscode";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConfigLocation {
    pub(crate) root: PathBuf,
    pub(crate) config_path: PathBuf,
}

pub(crate) fn override_path(root: &Path) -> PathBuf {
    root.join(VSCODE_DIR).join(CONFIG_FILE)
}

pub(crate) fn find_config(start: &Path) -> Option<ConfigLocation> {
    for dir in start.ancestors() {
        let candidate = override_path(dir);
        if candidate.is_file() {
            return Some(ConfigLocation {
                root: dir.to_path_buf(),
                config_path: candidate,
            });
        }

        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(ConfigLocation {
                root: dir.to_path_buf(),
                config_path: candidate,
            });
        }
    }
    None
}

pub(crate) fn locate_config(start: &Path) -> Result<ConfigLocation> {
    if let Some(location) = find_config(start) {
        return Ok(location);
    }
    bail!(
        "could not find `{}` or `{}` in `{}` or any parent directory; run `upm config` first",
        start.join(CONFIG_FILE).display(),
        override_path(start).display(),
        start.display()
    )
}
