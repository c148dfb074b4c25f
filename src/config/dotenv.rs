use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::Section;

pub(crate) const DOTENV_FILE: &str = ".env";

/// Render a section as `KEY=VALUE` lines.
pub(crate) fn render(section: &Section) -> String {
    let mut rendered = String::new();
    for (key, value) in section {
        rendered.push_str(key);
        rendered.push('=');
        rendered.push_str(value);
        rendered.push('\n');
    }
    rendered
}

pub(crate) fn write(path: &Path, section: &Section) -> Result<()> {
    fs::write(path, render(section))
        .with_context(|| format!("failed to write `{}`", path.display()))
}
