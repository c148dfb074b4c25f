use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::config::{
    ConfigDocument, PlatformSettings,
    locate::{VSCODE_DIR, locate_config},
};
use crate::platform::HostPlatform;

/// A configured project: its root directory and the host section of its config.
#[derive(Debug, Clone)]
pub(crate) struct Project {
    pub(crate) root: PathBuf,
    pub(crate) config_path: PathBuf,
    pub(crate) platform: HostPlatform,
    pub(crate) settings: PlatformSettings,
}

impl Project {
    pub(crate) fn discover() -> Result<Self> {
        let cwd = env::current_dir().context("failed to resolve current directory")?;
        Self::discover_from(&cwd)
    }

    pub(crate) fn discover_from(start: &Path) -> Result<Self> {
        let start = std::path::absolute(start)
            .with_context(|| format!("failed to resolve `{}`", start.display()))?;
        let location = locate_config(&start)?;
        let platform = HostPlatform::current();
        let settings = ConfigDocument::load(&location.config_path)?
            .settings(platform)
            .with_context(|| format!("invalid config `{}`", location.config_path.display()))?;
        Ok(Self {
            root: location.root,
            config_path: location.config_path,
            platform,
            settings,
        })
    }

    pub(crate) fn uproject_path(&self) -> Result<PathBuf> {
        Ok(self
            .root
            .join(format!("{}.uproject", self.settings.project_name()?)))
    }

    pub(crate) fn vscode_dir(&self) -> PathBuf {
        self.root.join(VSCODE_DIR)
    }

    pub(crate) fn changelog_path(&self) -> PathBuf {
        self.root.join(self.settings.changelog_filename())
    }
}
