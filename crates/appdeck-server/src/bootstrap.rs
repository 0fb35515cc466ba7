use anyhow::Context;
use appdeck_core::Directory;
use std::path::Path;

/// Load the directory from the persisted config module on disk.
/// Called once per process; the result is immutable afterwards.
pub fn load_directory(manifest_path: impl AsRef<Path>) -> anyhow::Result<Directory> {
    let path = manifest_path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read directory manifest at {}", path.display()))?;
    let records = appdeck_manifest::parse_module(&text)
        .with_context(|| format!("Cannot parse directory manifest at {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "directory loaded"
    );
    Ok(Directory::new(records))
}
