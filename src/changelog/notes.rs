use std::{fs::OpenOptions, io::Write, path::Path};

use anyhow::{Context, Result};
use tera::{Context as TeraContext, Tera};

use super::model::ReleaseEntry;

const UNKNOWN: &str = "Unknown";

/// Render release notes for `entry` with a tera template.
pub(crate) fn render(template: &str, entry: &ReleaseEntry) -> Result<String> {
    let mut context = TeraContext::new();
    context.insert("version", &entry.version);
    context.insert("prerelease", &entry.prerelease_type);
    context.insert("release_date", &or_unknown(Some(&entry.release_date)));
    context.insert("commit", &or_unknown(entry.commit.as_ref()));
    context.insert("changes", &entry.changes);

    Tera::one_off(template, &context, false).context("failed to render release notes template")
}

/// Append rendered notes to the README, creating it when missing.
pub(crate) fn append_to_readme(readme: &Path, notes: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(readme)
        .with_context(|| format!("failed to open `{}`", readme.display()))?;
    file.write_all(notes.as_bytes())
        .with_context(|| format!("failed to append to `{}`", readme.display()))
}

fn or_unknown(value: Option<&String>) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value.clone(),
        _ => UNKNOWN.to_owned(),
    }
}
