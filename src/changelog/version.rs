use anyhow::{Context, Result};
use clap::ValueEnum;

/// Which part of the semantic version a new changelog entry bumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BumpType {
    Major,
    Minor,
    #[default]
    Patch,
}

impl BumpType {
    /// Bump `current`; lower components reset and prerelease/build tags drop.
    pub(crate) fn apply(self, current: &str) -> Result<String> {
        let mut version: semver::Version = current
            .trim()
            .parse()
            .with_context(|| format!("invalid semantic version `{current}`"))?;

        match self {
            BumpType::Major => {
                version.major += 1;
                version.minor = 0;
                version.patch = 0;
            }
            BumpType::Minor => {
                version.minor += 1;
                version.patch = 0;
            }
            BumpType::Patch => {
                version.patch += 1;
            }
        }
        version.pre = semver::Prerelease::EMPTY;
        version.build = semver::BuildMetadata::EMPTY;

        Ok(version.to_string())
    }
}
