use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use appdeck_core::AppRecord;

/// Read and parse the manifest module from disk.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<AppRecord>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read manifest at {}", path.display()))?;
    let records = appdeck_manifest::parse_module(&text)
        .with_context(|| format!("Cannot parse manifest at {}", path.display()))?;
    Ok(records)
}

/// Read the raw manifest text (for marker-based insertion).
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("Cannot read manifest at {}", path.display()))
}

/// Write manifest text back to disk.
pub fn write_text(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, text).with_context(|| format!("Cannot write manifest at {}", path.display()))
}
