use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use toml_edit::{Array, DocumentMut, Item};

const ASSETS_ROOT: &str = "assets/upm";
const ASSETS_MANIFEST: &str = "assets/upm/manifest.toml";

fn main() {
    if let Err(error) = run() {
        panic!("failed to generate builtin asset catalog: {error:#}");
    }
}

fn run() -> Result<()> {
    println!("cargo:rerun-if-changed={ASSETS_MANIFEST}");

    let manifest = load_manifest(Path::new(ASSETS_MANIFEST))?;

    let mut files = Vec::with_capacity(manifest.len());
    for name in manifest {
        validate_asset_name(&name)?;
        let path = Path::new(ASSETS_ROOT).join(&name);
        println!("cargo:rerun-if-changed={}", path.display());

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read `{}` as UTF-8 text", path.display()))?;
        files.push(AssetFileJson { name, content });
    }

    let catalog = AssetCatalogJson {
        schema_version: 1,
        files,
    };

    let out_dir = PathBuf::from(env::var("OUT_DIR").context("OUT_DIR is not set")?);
    let out_path = out_dir.join("builtin_assets.json");
    let encoded = serde_json::to_string(&catalog).context("failed to serialize builtin assets")?;
    fs::write(&out_path, encoded)
        .with_context(|| format!("failed to write `{}`", out_path.display()))?;

    Ok(())
}

fn load_manifest(manifest_path: &Path) -> Result<Vec<String>> {
    let source = fs::read_to_string(manifest_path)
        .with_context(|| format!("failed to read `{}`", manifest_path.display()))?;
    let document = source
        .parse::<DocumentMut>()
        .with_context(|| format!("failed to parse `{}`", manifest_path.display()))?;

    let files = match document.get("files") {
        Some(item) => parse_files_array(item)?,
        None => bail!("`{}` must define a `files` array", manifest_path.display()),
    };
    if files.is_empty() {
        bail!(
            "`{}` must include at least one file",
            manifest_path.display()
        );
    }
    Ok(files)
}

fn parse_files_array(item: &Item) -> Result<Vec<String>> {
    let Some(values) = item.as_array() else {
        bail!("manifest key `files` must be an array of strings");
    };

    extract_array_strings(values)
}

fn extract_array_strings(values: &Array) -> Result<Vec<String>> {
    let mut output = Vec::with_capacity(values.len());
    for value in values {
        let Some(name) = value.as_str() else {
            bail!("manifest `files` entries must be strings");
        };
        output.push(name.to_owned());
    }
    Ok(output)
}

fn validate_asset_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("asset file name must not be empty");
    }
    if name.contains('/') || name.contains('\\') || name.starts_with('.') {
        bail!("asset file `{name}` must be a plain file name inside `{ASSETS_ROOT}`");
    }
    if name == "manifest.toml" {
        bail!("the asset manifest cannot list itself");
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct AssetCatalogJson {
    schema_version: u32,
    files: Vec<AssetFileJson>,
}

#[derive(Debug, Serialize)]
struct AssetFileJson {
    name: String,
    content: String,
}
