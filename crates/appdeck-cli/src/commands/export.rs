use anyhow::Result;

use crate::manifest_file;

/// Regenerate the full module text and print it for copy-paste into the
/// repository's web-based file editor.
pub fn export(manifest_path: &str) -> Result<()> {
    let records = manifest_file::read_records(manifest_path)?;
    print!("{}", appdeck_manifest::render_module(&records));
    Ok(())
}
