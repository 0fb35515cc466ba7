use anyhow::Result;
use appdeck_admin::Board;
use appdeck_core::{AppStatus, today_utc};

use crate::cli::EditArgs;
use crate::manifest_file;
use crate::output::print_success;

pub fn set_status(manifest_path: &str, slug: &str, status: AppStatus) -> Result<()> {
    let mut board = Board::new(manifest_file::read_records(manifest_path)?);
    board.set_status(slug, status)?;
    manifest_file::write_text(manifest_path, &board.export())?;
    print_success(&format!("Moved {slug} to {}", status.meta().label));
    Ok(())
}

pub fn edit(manifest_path: &str, args: &EditArgs) -> Result<()> {
    let mut board = Board::new(manifest_file::read_records(manifest_path)?);
    let mut record = board
        .find(&args.slug)
        .ok_or_else(|| anyhow::anyhow!("Unknown slug: '{}' is not in the manifest", args.slug))?
        .clone();

    if let Some(ref title) = args.title {
        record.title = title.clone();
    }
    if let Some(ref icon) = args.icon {
        record.icon = icon.clone();
    }
    if let Some(ref color) = args.color {
        record.color = color.clone();
    }
    if let Some(ref url) = args.url {
        record.embed_url = url.clone();
    }
    if let Some(ref category) = args.category {
        record.category = Some(category.clone());
    }
    if let Some(ref price) = args.price {
        record.price = Some(price.clone());
    }
    if let Some(ref price_id) = args.price_id {
        record.stripe_price_id = Some(price_id.clone());
    }
    if let Some(update_type) = args.update {
        record.updated_at = Some(today_utc());
        record.update_type = Some(update_type.into());
    }

    board.update(record)?;
    manifest_file::write_text(manifest_path, &board.export())?;
    print_success(&format!("Updated {}", args.slug));
    Ok(())
}

pub fn remove(manifest_path: &str, slug: &str) -> Result<()> {
    let mut board = Board::new(manifest_file::read_records(manifest_path)?);
    let removed = board.remove(slug)?;
    manifest_file::write_text(manifest_path, &board.export())?;
    print_success(&format!("Removed {} ({slug})", removed.title));
    Ok(())
}
