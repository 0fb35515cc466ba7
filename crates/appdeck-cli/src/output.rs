use appdeck_core::{AppRecord, DEFAULT_WINDOW_DAYS, badge_for, is_new};
use colored::Colorize;
use tabled::builder::Builder;
use tabled::settings::Style;
use time::OffsetDateTime;

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Render records as a table with their derived presentation state.
pub fn print_records(records: &[&AppRecord]) {
    if records.is_empty() {
        println!("No apps found.");
        return;
    }
    let now = OffsetDateTime::now_utc();
    let mut builder = Builder::default();
    builder.push_record(["Slug", "Title", "Status", "Created", "Badges", "Price"]);
    for record in records {
        let meta = record.status.meta();
        let mut badges = Vec::new();
        if is_new(record, now, DEFAULT_WINDOW_DAYS) {
            badges.push("NEW".to_string());
        }
        if let Some(badge) = badge_for(record, now) {
            badges.push(badge.text.to_string());
        }
        builder.push_record([
            record.slug.clone(),
            format!("{} {}", record.icon, record.title),
            format!("{} {}", meta.icon, meta.label),
            record.created_at.to_string(),
            badges.join(", "),
            record.price.clone().unwrap_or_default(),
        ]);
    }
    let table = builder.build().with(Style::rounded()).to_string();
    println!("{table}");
    println!("Total: {}", records.len());
}
