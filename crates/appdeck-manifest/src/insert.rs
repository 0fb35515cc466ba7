use crate::error::{ManifestError, Result};
use crate::render::{APPS_CLOSE, APPS_OPEN, render_record};
use appdeck_core::AppRecord;

/// Append `record` to the persisted collection, immediately before its
/// closing marker. Every byte outside the insertion point is preserved.
/// Errors when the marker pair cannot be located rather than writing
/// corrupted output.
pub fn insert_record(text: &str, record: &AppRecord) -> Result<String> {
    let open = text.find(APPS_OPEN).ok_or(ManifestError::MarkerNotFound)?;
    let body_start = open + APPS_OPEN.len();
    let close = text[body_start..]
        .find(APPS_CLOSE)
        .ok_or(ManifestError::MarkerNotFound)?;
    let insert_at = body_start + close;

    let mut out = String::with_capacity(text.len() + 256);
    out.push_str(&text[..insert_at]);
    out.push('\n');
    out.push_str(&render_record(record));
    out.push_str(&text[insert_at..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_module;
    use crate::render::render_module;
    use appdeck_core::{AppStatus, CalendarDate};
    use std::str::FromStr;

    fn record(slug: &str) -> AppRecord {
        AppRecord::new(
            slug,
            "App",
            "🎨",
            "#E91E63",
            format!("https://example.com/{slug}"),
            CalendarDate::from_str("2025-01-20").unwrap(),
            AppStatus::Shipped,
        )
    }

    #[test]
    fn test_insert_into_empty_collection() {
        let text = render_module(&[]);
        let updated = insert_record(&text, &record("colors")).unwrap();
        let records = parse_module(&updated).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].slug, "colors");
    }

    #[test]
    fn test_insert_twice_preserves_insertion_order() {
        let text = render_module(&[]);
        let once = insert_record(&text, &record("first")).unwrap();
        let twice = insert_record(&once, &record("second")).unwrap();
        let records = parse_module(&twice).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].slug, "first");
        assert_eq!(records[1].slug, "second");
    }

    #[test]
    fn test_insert_leaves_surrounding_text_unchanged() {
        let text = format!(
            "// hand-written preamble\n{}\n// hand-written epilogue\n",
            render_module(&[record("existing")])
        );
        let updated = insert_record(&text, &record("added")).unwrap();
        assert!(updated.starts_with("// hand-written preamble\n"));
        assert!(updated.ends_with("// hand-written epilogue\n"));

        // Everything before the insertion point is byte-for-byte intact.
        let insert_at = updated.find("  {\n    slug: 'added'").unwrap();
        assert_eq!(&updated[..insert_at - 1], &text[..insert_at - 1]);
    }

    #[test]
    fn test_insert_matches_direct_render() {
        // Splicing into a rendered module equals rendering the grown list.
        let grown = render_module(&[record("a"), record("b")]);
        let spliced = insert_record(&render_module(&[record("a")]), &record("b")).unwrap();
        assert_eq!(spliced, grown);
    }

    #[test]
    fn test_insert_fails_without_markers() {
        match insert_record("no collection here", &record("a")) {
            Err(ManifestError::MarkerNotFound) => {}
            other => panic!("Expected MarkerNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_insert_fails_without_closing_marker() {
        let text = "export const apps: App[] = [ ";
        match insert_record(text, &record("a")) {
            Err(ManifestError::MarkerNotFound) => {}
            other => panic!("Expected MarkerNotFound, got {other:?}"),
        }
    }
}
