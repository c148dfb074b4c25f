//! JSON files written for humans: four-space indent, trailing newline.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

const INDENT: &[u8] = b"    ";

pub(crate) fn to_pretty_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut serializer)
        .context("failed to encode JSON")?;
    buffer.push(b'\n');
    String::from_utf8(buffer).context("encoded JSON is not valid UTF-8")
}

pub(crate) fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let encoded = to_pretty_string(value)?;
    fs::write(path, encoded).with_context(|| format!("failed to write `{}`", path.display()))
}
