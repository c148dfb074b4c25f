//! Per-project configuration document (`config.upm`).
//!
//! The document maps a platform section name to a flat string map. Only the
//! host's section is ever read; the other sections ride along untouched so
//! one file can be shared by a team working on several operating systems.

pub(crate) mod dotenv;
pub(crate) mod locate;
pub(crate) mod query;
pub(crate) mod scaffold;

use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result, anyhow};
use indexmap::IndexMap;

use crate::json;
use crate::platform::HostPlatform;

pub(crate) const UNREAL_PATH_KEY: &str = "UNREAL_PATH";
pub(crate) const PROJECT_NAME_KEY: &str = "PROJECT_NAME";
pub(crate) const GAME_NAME_KEY: &str = "GAME_NAME";
pub(crate) const EDITOR_NAME_KEY: &str = "EDITOR_NAME";
pub(crate) const WORKSPACE_NAME_KEY: &str = "WORKSPACE_NAME";
pub(crate) const CHANGELOG_FILENAME_KEY: &str = "CHANGELOG_FILENAME";

pub(crate) const DEFAULT_CHANGELOG_FILENAME: &str = "Changelog.json";

/// One platform section; keys keep the order they have on disk.
pub(crate) type Section = IndexMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ConfigDocument {
    pub(crate) sections: IndexMap<String, Section>,
}

impl ConfigDocument {
    pub(crate) fn parse(source: &str) -> Result<Self> {
        let sections = serde_json::from_str(source)
            .context("config must be a JSON object of platform sections with string values")?;
        Ok(Self { sections })
    }

    pub(crate) fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        Self::parse(&source).with_context(|| format!("failed to parse `{}`", path.display()))
    }

    pub(crate) fn to_pretty_json(&self) -> Result<String> {
        json::to_pretty_string(&self.sections).context("failed to encode config")
    }

    pub(crate) fn section_mut(&mut self, platform: HostPlatform) -> &mut Section {
        self.sections
            .entry(platform.config_section().to_owned())
            .or_default()
    }

    pub(crate) fn settings(&self, platform: HostPlatform) -> Result<PlatformSettings> {
        let section = platform.config_section();
        let values = self
            .sections
            .get(section)
            .cloned()
            .ok_or_else(|| anyhow!("config has no `{section}` section for this platform"))?;
        Ok(PlatformSettings {
            section: section.to_owned(),
            values,
        })
    }
}

/// Resolved values of the host section, with the documented defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlatformSettings {
    pub(crate) section: String,
    pub(crate) values: Section,
}

impl PlatformSettings {
    /// Value for `key`; empty strings count as unset.
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    pub(crate) fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| {
            anyhow!(
                "config key `{key}` is not set in the `{}` section",
                self.section
            )
        })
    }

    pub(crate) fn unreal_path(&self) -> Result<PathBuf> {
        self.require(UNREAL_PATH_KEY).map(PathBuf::from)
    }

    pub(crate) fn project_name(&self) -> Result<&str> {
        self.require(PROJECT_NAME_KEY)
    }

    pub(crate) fn game_name(&self) -> Result<String> {
        match self.get(GAME_NAME_KEY) {
            Some(name) => Ok(name.to_owned()),
            None => self.project_name().map(ToOwned::to_owned),
        }
    }

    pub(crate) fn editor_name(&self) -> Result<String> {
        match self.get(EDITOR_NAME_KEY) {
            Some(name) => Ok(name.to_owned()),
            None => Ok(format!("{}Editor", self.project_name()?)),
        }
    }

    pub(crate) fn workspace_name(&self) -> Result<String> {
        match self.get(WORKSPACE_NAME_KEY) {
            Some(name) => Ok(name.to_owned()),
            None => Ok(format!("{}.code-workspace", self.project_name()?)),
        }
    }

    pub(crate) fn changelog_filename(&self) -> String {
        self.get(CHANGELOG_FILENAME_KEY)
            .unwrap_or(DEFAULT_CHANGELOG_FILENAME)
            .to_owned()
    }
}
