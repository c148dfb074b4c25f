use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use flate2::{Compression, write::GzEncoder};
use tar::Builder;

use crate::changelog::store;
use crate::project::Project;

use super::scripts::PACKAGES_DIR;

const UNVERSIONED: &str = "unversioned";

/// Compress the packaged build into `Packages/<project>-<version>-<platform>.tar.gz`.
pub(crate) fn create(project: &Project, archive_dir: &Path) -> Result<PathBuf> {
    if !archive_dir.is_dir() {
        bail!(
            "packaged build not found at `{}`; run with --package first",
            archive_dir.display()
        );
    }

    let project_name = project.settings.project_name()?;
    let version = release_version(&project.changelog_path());
    let stem = format!(
        "{project_name}-{version}-{}",
        project.platform.engine_platform()
    );
    let output = project
        .root
        .join(PACKAGES_DIR)
        .join(format!("{stem}.tar.gz"));
    write_tar_gz(archive_dir, &stem, &output)?;
    Ok(output)
}

/// Version of the last changelog entry, or `unversioned`.
pub(crate) fn release_version(changelog_path: &Path) -> String {
    store::load(changelog_path)
        .ok()
        .and_then(|changelog| {
            changelog
                .latest()
                .ok()
                .map(|entry| entry.version.clone())
        })
        .unwrap_or_else(|| UNVERSIONED.to_owned())
}

/// Archive every file under `source` beneath a single `prefix` directory.
pub(crate) fn write_tar_gz(source: &Path, prefix: &str, output: &Path) -> Result<()> {
    let archive_file = File::create(output)
        .with_context(|| format!("failed to create `{}`", output.display()))?;
    let encoder = GzEncoder::new(archive_file, Compression::default());
    let mut builder = Builder::new(encoder);
    builder
        .append_dir_all(prefix, source)
        .with_context(|| format!("failed to archive `{}`", source.display()))?;

    let encoder = builder
        .into_inner()
        .context("failed to finalize package tar archive")?;
    encoder
        .finish()
        .context("failed to finalize package gzip stream")?;
    Ok(())
}
