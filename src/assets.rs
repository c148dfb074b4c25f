//! Templates bundled into the binary at build time.
//!
//! A project may carry its own copy of any asset under `<root>/upm/`; that copy
//! wins over the embedded one so teams can customize generated files.

use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;

const BUILTIN_CATALOG_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/builtin_assets.json"));
const CATALOG_SCHEMA_VERSION: u32 = 1;

pub(crate) const PROJECT_ASSETS_DIR: &str = "upm";
pub(crate) const CONFIG_TEMPLATE: &str = "config.upm";
pub(crate) const GITIGNORE_TEMPLATE: &str = "gitignore.upm";
pub(crate) const LAUNCH_TEMPLATE: &str = "launch.upm";
pub(crate) const TASKS_TEMPLATE: &str = "tasks.upm";
pub(crate) const RELEASE_NOTES_TEMPLATE: &str = "release-notes.md";

#[derive(Debug, Clone)]
pub(crate) struct BuiltinAsset {
    pub(crate) name: String,
    pub(crate) content: String,
}

pub(crate) fn load_assets() -> Result<Vec<BuiltinAsset>> {
    decode_catalog(BUILTIN_CATALOG_JSON)
}

fn decode_catalog(source: &str) -> Result<Vec<BuiltinAsset>> {
    let catalog: AssetCatalogJson =
        serde_json::from_str(source).context("failed to decode embedded asset catalog")?;
    if catalog.schema_version != CATALOG_SCHEMA_VERSION {
        bail!(
            "unsupported asset catalog schema version {} (expected {CATALOG_SCHEMA_VERSION})",
            catalog.schema_version
        );
    }
    Ok(catalog
        .files
        .into_iter()
        .map(|file| BuiltinAsset {
            name: file.name,
            content: file.content,
        })
        .collect())
}

pub(crate) fn builtin_asset(name: &str) -> Result<String> {
    load_assets()?
        .into_iter()
        .find(|asset| asset.name == name)
        .map(|asset| asset.content)
        .ok_or_else(|| anyhow!("embedded asset `{name}` is missing from the catalog"))
}

/// Load `<root>/upm/<name>` when present, otherwise the embedded copy.
pub(crate) fn load_asset(root: &Path, name: &str) -> Result<String> {
    let project_copy = root.join(PROJECT_ASSETS_DIR).join(name);
    if !project_copy.is_file() {
        return builtin_asset(name);
    }

    fs::read_to_string(&project_copy)
        .with_context(|| format!("failed to read template `{}`", project_copy.display()))
}

#[derive(Debug, Deserialize)]
struct AssetCatalogJson {
    schema_version: u32,
    files: Vec<AssetFileJson>,
}

#[derive(Debug, Deserialize)]
struct AssetFileJson {
    name: String,
    content: String,
}
