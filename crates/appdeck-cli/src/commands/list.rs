use anyhow::Result;
use appdeck_core::visible_records;

use crate::cli::ListArgs;
use crate::manifest_file;
use crate::output::print_records;

pub fn list(manifest_path: &str, args: &ListArgs) -> Result<()> {
    let records = manifest_file::read_records(manifest_path)?;
    let visible = visible_records(&records, args.all);
    print_records(&visible);
    Ok(())
}
