use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::json;
use crate::output;
use crate::process::ToolCommand;

use super::model::Changelog;

pub(crate) fn load(path: &Path) -> Result<Changelog> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read changelog `{}`", path.display()))?;
    serde_json::from_str(&source)
        .with_context(|| format!("failed to parse changelog `{}`", path.display()))
}

/// Write the changelog as-is, four-space indented.
pub(crate) fn write(path: &Path, changelog: &Changelog) -> Result<()> {
    json::write_pretty(path, changelog)
        .with_context(|| format!("failed to save changelog `{}`", path.display()))
}

/// Stamp the last entry with `today` and the current commit, then write.
pub(crate) fn save(path: &Path, changelog: &mut Changelog, today: &str) -> Result<()> {
    let repo_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    changelog.stamp(today, head_commit(repo_dir))?;
    write(path, changelog)
}

/// `git rev-parse HEAD` in `repo_dir`; `None` (with a warning) when unavailable.
pub(crate) fn head_commit(repo_dir: &Path) -> Option<String> {
    let command = ToolCommand::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(repo_dir);
    match command.capture() {
        Ok(hash) if !hash.is_empty() => Some(hash),
        Ok(_) => None,
        Err(error) => {
            output::print_warning(format!(
                "could not resolve the current commit ({error}); keeping the previous value"
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{load, write};
    use crate::changelog::model::Changelog;
    use std::{fs, time::SystemTime};

    #[test]
    fn written_changelog_uses_four_space_indent_and_reloads() {
        let dir = std::env::temp_dir().join(format!(
            "upm-changelog-store-{}-{}",
            std::process::id(),
            SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .expect("system time should be after epoch")
                .as_nanos()
        ));
        fs::create_dir_all(&dir).expect("failed to create temp dir");
        let path = dir.join("Changelog.json");

        let changelog = Changelog::initial("2024-05-06");
        write(&path, &changelog).expect("write");

        let text = fs::read_to_string(&path).expect("read");
        assert!(text.starts_with("[\n    {\n        \"Version\": \"0.0.0\""));
        assert!(text.contains("\"PrereleaseType\": \"Alpha\""));
        assert!(text.contains("\"Changes\": []"));
        assert_eq!(load(&path).expect("reload"), changelog);

        fs::remove_dir_all(dir).expect("failed to clean temp dir");
    }

    #[test]
    fn malformed_changelog_names_the_file() {
        let path = std::env::temp_dir().join(format!(
            "upm-bad-changelog-{}.json",
            std::process::id()
        ));
        fs::write(&path, "{not json").expect("write");
        let error = load(&path).expect_err("expected parse error");
        assert!(error.to_string().contains("failed to parse changelog"));
        fs::remove_file(path).expect("cleanup");
    }
}
