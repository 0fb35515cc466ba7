use crate::date::CalendarDate;
use crate::status::{AppStatus, UpdateType};
use serde::{Deserialize, Serialize};

fn is_false(v: &bool) -> bool {
    !*v
}

/// One entry in the app directory.
///
/// Required fields are always present; optional fields are omitted from
/// any serialized form when absent. `slug` is the external identifier and
/// must stay stable once referenced from outside the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRecord {
    pub slug: String,
    pub title: String,
    /// Single glyph/emoji used as the tile identifier.
    pub icon: String,
    /// Background color token (hex string) for the icon tile.
    pub color: String,
    #[serde(rename = "embedUrl")]
    pub embed_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: CalendarDate,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<CalendarDate>,
    #[serde(rename = "updateType", skip_serializing_if = "Option::is_none")]
    pub update_type: Option<UpdateType>,
    pub status: AppStatus,
    /// Advisory flag: true means keep out of public listings. No reader
    /// filters on it today.
    #[serde(default, skip_serializing_if = "is_false")]
    pub private: bool,
    #[serde(rename = "stripeProductId", skip_serializing_if = "Option::is_none")]
    pub stripe_product_id: Option<String>,
    /// Presence marks the record as requiring purchase before embedding.
    #[serde(rename = "stripePriceId", skip_serializing_if = "Option::is_none")]
    pub stripe_price_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl AppRecord {
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
        embed_url: impl Into<String>,
        created_at: CalendarDate,
        status: AppStatus,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            icon: icon.into(),
            color: color.into(),
            embed_url: embed_url.into(),
            category: None,
            created_at,
            updated_at: None,
            update_type: None,
            status,
            private: false,
            stripe_product_id: None,
            stripe_price_id: None,
            price: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_update(mut self, updated_at: CalendarDate, update_type: UpdateType) -> Self {
        self.updated_at = Some(updated_at);
        self.update_type = Some(update_type);
        self
    }

    pub fn with_price(mut self, stripe_price_id: impl Into<String>, price: impl Into<String>) -> Self {
        self.stripe_price_id = Some(stripe_price_id.into());
        self.price = Some(price.into());
        self
    }

    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    /// A record with a Stripe price id requires purchase before the
    /// embedded app is shown.
    pub fn is_paid(&self) -> bool {
        self.stripe_price_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn record(slug: &str) -> AppRecord {
        AppRecord::new(
            slug,
            "Timer",
            "⏱️",
            "#2196F3",
            "https://example.com/timer",
            CalendarDate::from_str("2025-11-20").unwrap(),
            AppStatus::Shipped,
        )
    }

    #[test]
    fn test_record_new_defaults() {
        let r = record("timer");
        assert_eq!(r.slug, "timer");
        assert!(r.category.is_none());
        assert!(r.updated_at.is_none());
        assert!(r.update_type.is_none());
        assert!(!r.private);
        assert!(!r.is_paid());
    }

    #[test]
    fn test_is_paid() {
        let r = record("tips").with_price("price_xxxxx", "$5");
        assert!(r.is_paid());
        assert_eq!(r.price.as_deref(), Some("$5"));
    }

    #[test]
    fn test_optional_fields_omitted_from_json() {
        let json = serde_json::to_value(record("timer")).unwrap();
        assert!(json.get("category").is_none());
        assert!(json.get("updatedAt").is_none());
        assert!(json.get("updateType").is_none());
        assert!(json.get("private").is_none());
        assert!(json.get("stripePriceId").is_none());
        assert!(json.get("price").is_none());
        assert_eq!(json["embedUrl"], "https://example.com/timer");
        assert_eq!(json["createdAt"], "2025-11-20");
        assert_eq!(json["status"], "shipped");
    }

    #[test]
    fn test_record_json_roundtrip() {
        let r = record("timer")
            .with_category("productivity")
            .with_update(
                CalendarDate::from_str("2025-11-26").unwrap(),
                UpdateType::Features,
            )
            .with_price("price_123", "$3")
            .with_private(true);
        let json = serde_json::to_string(&r).unwrap();
        let back: AppRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_record_deserializes_persisted_field_names() {
        let json = serde_json::json!({
            "slug": "tips",
            "title": "Tips",
            "icon": "💰",
            "color": "#FF9800",
            "embedUrl": "https://example.com/tips",
            "category": "finance",
            "createdAt": "2025-01-10",
            "status": "mvp",
            "stripePriceId": "price_xxxxx",
            "price": "$5"
        });
        let r: AppRecord = serde_json::from_value(json).unwrap();
        assert_eq!(r.status, AppStatus::Mvp);
        assert_eq!(r.stripe_price_id.as_deref(), Some("price_xxxxx"));
        assert!(!r.private);
    }
}
