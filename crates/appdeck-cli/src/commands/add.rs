use anyhow::Result;
use appdeck_core::{AppRecord, today_utc};

use crate::cli::AddArgs;
use crate::manifest_file;
use crate::output::print_success;

/// Append a new record to the manifest file via marker-based insertion,
/// leaving every other byte of the hand-maintained module untouched.
pub fn add(manifest_path: &str, args: &AddArgs) -> Result<()> {
    let slug = args.slug.clone().unwrap_or_else(|| slugify(&args.title));

    let text = manifest_file::read_text(manifest_path)?;
    let records = appdeck_manifest::parse_module(&text)?;
    if records.iter().any(|r| r.slug == slug) {
        anyhow::bail!("Slug '{slug}' already exists in the manifest");
    }

    let mut record = AppRecord::new(
        slug.clone(),
        args.title.clone(),
        args.icon.clone(),
        args.color.clone(),
        args.url.clone(),
        today_utc(),
        args.status.into(),
    );
    if let Some(ref category) = args.category {
        record = record.with_category(category.clone());
    }

    let updated = appdeck_manifest::insert_record(&text, &record)?;
    manifest_file::write_text(manifest_path, &updated)?;

    print_success(&format!("Added {} ({slug})", args.title));
    println!("Commit and push the manifest to deploy.");
    Ok(())
}

fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
