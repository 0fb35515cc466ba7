use anyhow::Result;
use appdeck_admin::Board;
use colored::Colorize;

use crate::manifest_file;

/// Print the kanban columns with their entries.
pub fn board(manifest_path: &str) -> Result<()> {
    let board = Board::new(manifest_file::read_records(manifest_path)?);
    for (status, column) in board.columns() {
        let meta = status.meta();
        println!(
            "{} {} ({})",
            meta.icon,
            meta.label.bold(),
            column.len()
        );
        for record in column {
            println!("  {} {} ({})", record.icon, record.title, record.slug.dimmed());
        }
        println!();
    }
    Ok(())
}
