use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::version::BumpType;

pub(crate) const INITIAL_VERSION: &str = "0.0.0";
pub(crate) const DEFAULT_PRERELEASE: &str = "Alpha";

/// One release record. Field names follow the on-disk PascalCase format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ReleaseEntry {
    pub(crate) version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) prerelease_type: Option<String>,
    #[serde(default)]
    pub(crate) release_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) commit: Option<String>,
    #[serde(default)]
    pub(crate) changes: Vec<String>,
    /// Fields this tool does not know about, kept as-is.
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

impl ReleaseEntry {
    pub(crate) fn new(version: String, prerelease_type: Option<String>, release_date: &str) -> Self {
        Self {
            version,
            prerelease_type,
            release_date: release_date.to_owned(),
            commit: None,
            changes: Vec::new(),
            extra: Map::new(),
        }
    }
}

/// Ordered release history; only the last entry is ever mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct Changelog {
    pub(crate) entries: Vec<ReleaseEntry>,
}

impl Changelog {
    pub(crate) fn initial(today: &str) -> Self {
        Self {
            entries: vec![ReleaseEntry::new(
                INITIAL_VERSION.to_owned(),
                Some(DEFAULT_PRERELEASE.to_owned()),
                today,
            )],
        }
    }

    pub(crate) fn latest(&self) -> Result<&ReleaseEntry> {
        self.entries
            .last()
            .ok_or_else(|| anyhow!("changelog has no entries"))
    }

    pub(crate) fn latest_mut(&mut self) -> Result<&mut ReleaseEntry> {
        self.entries
            .last_mut()
            .ok_or_else(|| anyhow!("changelog has no entries"))
    }

    pub(crate) fn add_version(
        &mut self,
        bump: BumpType,
        prerelease_type: Option<String>,
        today: &str,
    ) -> Result<&ReleaseEntry> {
        let next = bump.apply(&self.latest()?.version)?;
        self.entries
            .push(ReleaseEntry::new(next, prerelease_type, today));
        self.latest()
    }

    /// Append `change` verbatim; whitespace-only text is rejected.
    pub(crate) fn add_change(&mut self, change: &str) -> Result<()> {
        if change.trim().is_empty() {
            return Err(anyhow!("change description cannot be empty"));
        }
        self.latest_mut()?.changes.push(change.to_owned());
        Ok(())
    }

    /// Stamp the last entry with the save date and, when known, the commit.
    pub(crate) fn stamp(&mut self, today: &str, commit: Option<String>) -> Result<()> {
        let latest = self.latest_mut()?;
        latest.release_date = today.to_owned();
        if commit.is_some() {
            latest.commit = commit;
        }
        Ok(())
    }
}
