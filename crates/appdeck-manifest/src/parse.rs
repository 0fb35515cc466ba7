use crate::error::{ManifestError, Result};
use crate::render::{APPS_CLOSE, APPS_OPEN};
use appdeck_core::{AppRecord, AppStatus, CalendarDate, UpdateType};
use std::str::FromStr;

/// Parse the record collection out of the persisted module text.
///
/// Only the section between the collection markers is interpreted; the
/// type declarations, status config, and derivation functions around it
/// are carried as opaque text. Inverse of `render_module` for any record
/// set satisfying the data-model invariants.
pub fn parse_module(text: &str) -> Result<Vec<AppRecord>> {
    let open = text.find(APPS_OPEN).ok_or(ManifestError::MarkerNotFound)?;
    let body_start = open + APPS_OPEN.len();
    let close = text[body_start..]
        .find(APPS_CLOSE)
        .ok_or(ManifestError::MarkerNotFound)?;
    let body = &text[body_start..body_start + close];

    let mut records = Vec::new();
    let mut current: Option<RawRecord> = None;

    for line in body.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "{" {
            current = Some(RawRecord::default());
            continue;
        }
        if trimmed == "}," || trimmed == "}" {
            let raw = current.take().ok_or_else(|| ManifestError::invalid_line(line))?;
            records.push(raw.into_record()?);
            continue;
        }
        match current.as_mut() {
            Some(raw) => raw.set(trimmed)?,
            None => return Err(ManifestError::invalid_line(line)),
        }
    }

    if current.is_some() {
        return Err(ManifestError::UnterminatedRecord);
    }
    Ok(records)
}

#[derive(Default)]
struct RawRecord {
    slug: Option<String>,
    title: Option<String>,
    icon: Option<String>,
    color: Option<String>,
    embed_url: Option<String>,
    category: Option<String>,
    created_at: Option<String>,
    updated_at: Option<String>,
    update_type: Option<String>,
    status: Option<String>,
    private: bool,
    stripe_product_id: Option<String>,
    stripe_price_id: Option<String>,
    price: Option<String>,
}

impl RawRecord {
    fn set(&mut self, line: &str) -> Result<()> {
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| ManifestError::invalid_line(line))?;
        let key = key.trim();
        let value = value.trim().trim_end_matches(',').trim();

        if key == "private" {
            self.private = value == "true";
            return Ok(());
        }

        let value = unquote(value).ok_or_else(|| ManifestError::invalid_line(line))?;
        match key {
            "slug" => self.slug = Some(value),
            "title" => self.title = Some(value),
            "icon" => self.icon = Some(value),
            "color" => self.color = Some(value),
            "embedUrl" => self.embed_url = Some(value),
            "category" => self.category = Some(value),
            "createdAt" => self.created_at = Some(value),
            "updatedAt" => self.updated_at = Some(value),
            "updateType" => self.update_type = Some(value),
            "status" => self.status = Some(value),
            "stripeProductId" => self.stripe_product_id = Some(value),
            "stripePriceId" => self.stripe_price_id = Some(value),
            "price" => self.price = Some(value),
            // Fields outside the schema are unknown; carry no defaults for them.
            _ => {}
        }
        Ok(())
    }

    fn into_record(self) -> Result<AppRecord> {
        // Missing-field reporting follows schema field order.
        let slug = self.slug.ok_or_else(|| ManifestError::missing_field("slug"))?;
        let title = self
            .title
            .ok_or_else(|| ManifestError::missing_field("title"))?;
        let icon = self.icon.ok_or_else(|| ManifestError::missing_field("icon"))?;
        let color = self
            .color
            .ok_or_else(|| ManifestError::missing_field("color"))?;
        let embed_url = self
            .embed_url
            .ok_or_else(|| ManifestError::missing_field("embedUrl"))?;
        let created_at = self
            .created_at
            .ok_or_else(|| ManifestError::missing_field("createdAt"))?;
        let status = self
            .status
            .ok_or_else(|| ManifestError::missing_field("status"))?;

        let mut record = AppRecord::new(
            slug,
            title,
            icon,
            color,
            embed_url,
            CalendarDate::from_str(&created_at)?,
            AppStatus::from_str(&status)?,
        );
        record.category = self.category;
        record.updated_at = self
            .updated_at
            .map(|d| CalendarDate::from_str(&d))
            .transpose()?;
        record.update_type = self
            .update_type
            .map(|t| UpdateType::from_str(&t))
            .transpose()?;
        record.private = self.private;
        record.stripe_product_id = self.stripe_product_id;
        record.stripe_price_id = self.stripe_price_id;
        record.price = self.price;
        Ok(record)
    }
}

/// Strip the single-quote delimiters. No escape handling: values must not
/// contain the delimiter character, per the persisted-format contract.
fn unquote(value: &str) -> Option<String> {
    let inner = value.strip_prefix('\'')?.strip_suffix('\'')?;
    Some(inner.to_string())
}
