use std::{fs::File, path::Path, time::Duration};

use anyhow::{Context, Result};

use crate::output;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Stream `url` into `destination`, replacing any previous download.
pub(crate) fn download(url: &str, destination: &Path) -> Result<()> {
    output::print_log(format!("downloading {url}"));
    let client = reqwest::blocking::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .context("failed to build HTTP client")?;
    let mut response = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .with_context(|| format!("failed to download `{url}`"))?;

    let mut file = File::create(destination)
        .with_context(|| format!("failed to create `{}`", destination.display()))?;
    response
        .copy_to(&mut file)
        .with_context(|| format!("failed to write `{}`", destination.display()))?;
    output::print_path(destination.display());
    Ok(())
}
