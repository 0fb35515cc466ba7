use appdeck_core::{AppRecord, AppStatus};
use std::fmt::Write;

/// Opening marker of the persisted record collection.
pub(crate) const APPS_OPEN: &str = "export const apps: App[] = [";
/// Closing marker: first `]` on its own line after the opening marker.
pub(crate) const APPS_CLOSE: &str = "\n]";

/// Render one record as its literal entry in the collection.
///
/// Required fields render unconditionally, optional fields only when
/// present. Values are single-quoted verbatim: the serializer performs no
/// escaping, so field values must not contain the quote delimiter.
pub fn render_record(record: &AppRecord) -> String {
    let mut out = String::new();
    out.push_str("  {\n");
    push_field(&mut out, "slug", &record.slug);
    push_field(&mut out, "title", &record.title);
    push_field(&mut out, "icon", &record.icon);
    push_field(&mut out, "color", &record.color);
    push_field(&mut out, "embedUrl", &record.embed_url);
    if let Some(ref category) = record.category {
        push_field(&mut out, "category", category);
    }
    push_field(&mut out, "createdAt", &record.created_at.to_string());
    if let Some(updated_at) = record.updated_at {
        push_field(&mut out, "updatedAt", &updated_at.to_string());
    }
    if let Some(update_type) = record.update_type {
        push_field(&mut out, "updateType", update_type.as_str());
    }
    push_field(&mut out, "status", record.status.as_str());
    if record.private {
        out.push_str("    private: true,\n");
    }
    if let Some(ref product_id) = record.stripe_product_id {
        push_field(&mut out, "stripeProductId", product_id);
    }
    if let Some(ref price_id) = record.stripe_price_id {
        push_field(&mut out, "stripePriceId", price_id);
    }
    if let Some(ref price) = record.price {
        push_field(&mut out, "price", price);
    }
    out.push_str("  },");
    out
}

fn push_field(out: &mut String, key: &str, value: &str) {
    let _ = writeln!(out, "    {key}: '{value}',");
}

/// Render the complete persisted module: enumerations, record shape,
/// status config literal, the ordered record collection, and the
/// derivation functions re-exported for the viewer and home listing.
/// Deterministic: input order is output order.
pub fn render_module(records: &[AppRecord]) -> String {
    let mut out = String::new();
    out.push_str(TYPE_DECLS);
    out.push('\n');
    render_status_config(&mut out);
    out.push('\n');
    out.push_str(APPS_OPEN);
    for record in records {
        out.push('\n');
        out.push_str(&render_record(record));
    }
    out.push_str("\n]\n");
    out.push_str(DERIVATION_FNS);
    out
}

fn render_status_config(out: &mut String) {
    out.push_str(
        "export const STATUS_CONFIG: Record<AppStatus, { icon: string; label: string; visible: boolean }> = {\n",
    );
    for status in AppStatus::ALL {
        let meta = status.meta();
        let _ = writeln!(
            out,
            "  {}: {{ icon: '{}', label: '{}', visible: {} }},",
            status.as_str(),
            meta.icon,
            meta.label,
            meta.visible
        );
    }
    out.push_str("}\n");
}

const TYPE_DECLS: &str = "export type AppStatus = 'idea' | 'building' | 'testing' | 'mvp' | 'shipped'

export type UpdateType = 'fixed' | 'features'

export type App = {
  slug: string
  title: string
  icon: string
  color: string
  embedUrl: string
  category?: string
  createdAt: string
  updatedAt?: string
  updateType?: UpdateType
  status: AppStatus
  private?: boolean
  stripeProductId?: string
  stripePriceId?: string
  price?: string
}
";

const DERIVATION_FNS: &str = "
function isWithinDays(dateStr: string, days: number): boolean {
  const date = new Date(dateStr)
  const now = new Date()
  const diffTime = now.getTime() - date.getTime()
  const diffDays = diffTime / (1000 * 60 * 60 * 24)
  return diffDays <= days
}

export function isNewApp(createdAt: string, days: number = 14): boolean {
  return isWithinDays(createdAt, days)
}

export function isUpdatedApp(app: App, days: number = 14): boolean {
  if (!app.updatedAt) return false
  return isWithinDays(app.updatedAt, days)
}

export function getVisibleApps(showAll: boolean = false): App[] {
  if (showAll) return apps
  return apps.filter(app => STATUS_CONFIG[app.status].visible)
}
";

#[cfg(test)]
mod tests {
    use super::*;
    use appdeck_core::{CalendarDate, UpdateType};
    use std::str::FromStr;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::from_str(s).unwrap()
    }

    #[test]
    fn test_render_record_required_fields_only() {
        let r = AppRecord::new(
            "dice-roller",
            "Dice",
            "🎲",
            "#F44336",
            "https://example.com/dice",
            date("2025-01-05"),
            appdeck_core::AppStatus::Shipped,
        );
        let text = render_record(&r);
        assert_eq!(
            text,
            "  {\n    slug: 'dice-roller',\n    title: 'Dice',\n    icon: '🎲',\n    color: '#F44336',\n    embedUrl: 'https://example.com/dice',\n    createdAt: '2025-01-05',\n    status: 'shipped',\n  },"
        );
    }

    #[test]
    fn test_render_record_omits_absent_optionals() {
        let r = AppRecord::new(
            "notes",
            "Notes",
            "📝",
            "#9C27B0",
            "https://example.com/notes",
            date("2025-01-18"),
            appdeck_core::AppStatus::Building,
        );
        let text = render_record(&r);
        assert!(!text.contains("category"));
        assert!(!text.contains("updatedAt"));
        assert!(!text.contains("private"));
        assert!(!text.contains("null"));
    }

    #[test]
    fn test_render_record_all_optionals() {
        let r = AppRecord::new(
            "timer",
            "Timer",
            "⏱️",
            "#2196F3",
            "https://example.com/timer",
            date("2025-11-20"),
            appdeck_core::AppStatus::Shipped,
        )
        .with_category("productivity")
        .with_update(date("2025-11-26"), UpdateType::Features)
        .with_price("price_123", "$3")
        .with_private(true);
        let text = render_record(&r);
        assert!(text.contains("category: 'productivity',"));
        assert!(text.contains("updatedAt: '2025-11-26',"));
        assert!(text.contains("updateType: 'features',"));
        assert!(text.contains("private: true,"));
        assert!(text.contains("stripePriceId: 'price_123',"));
        assert!(text.contains("price: '$3',"));
    }

    #[test]
    fn test_render_module_empty_collection() {
        let text = render_module(&[]);
        assert!(text.contains("export const apps: App[] = [\n]"));
        assert!(text.contains("export type AppStatus"));
        assert!(text.contains("export function getVisibleApps"));
    }

    #[test]
    fn test_render_module_status_config_visibility() {
        let text = render_module(&[]);
        assert!(text.contains("idea: { icon: '💡', label: 'Idea', visible: false },"));
        assert!(text.contains("building: { icon: '🧪', label: 'Building', visible: false },"));
        assert!(text.contains("testing: { icon: '🔬', label: 'Testing', visible: true },"));
        assert!(text.contains("mvp: { icon: '⚛️', label: 'MVP', visible: true },"));
        assert!(text.contains("shipped: { icon: '🚀', label: 'Shipped', visible: true },"));
    }

    #[test]
    fn test_render_module_preserves_record_order() {
        let a = AppRecord::new(
            "zeta",
            "Z",
            "🎨",
            "#111111",
            "https://example.com/z",
            date("2025-01-01"),
            appdeck_core::AppStatus::Idea,
        );
        let b = AppRecord::new(
            "alpha",
            "A",
            "🎨",
            "#222222",
            "https://example.com/a",
            date("2025-01-02"),
            appdeck_core::AppStatus::Shipped,
        );
        let text = render_module(&[a, b]);
        let zeta = text.find("slug: 'zeta'").unwrap();
        let alpha = text.find("slug: 'alpha'").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_render_module_is_deterministic() {
        let r = AppRecord::new(
            "timer",
            "Timer",
            "⏱️",
            "#2196F3",
            "https://example.com/timer",
            date("2025-11-20"),
            appdeck_core::AppStatus::Shipped,
        );
        let records = vec![r];
        assert_eq!(render_module(&records), render_module(&records));
    }
}
