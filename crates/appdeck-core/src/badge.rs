use crate::date::CalendarDate;
use crate::record::AppRecord;
use crate::status::UpdateType;
use serde::Serialize;
use time::OffsetDateTime;

/// Trailing window, in days, during which a record counts as new or
/// recently updated.
pub const DEFAULT_WINDOW_DAYS: u32 = 14;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Badge shown on a recently updated tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub text: &'static str,
    pub style: BadgeStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    Warning,
    Success,
}

/// Whether `date` falls inside the trailing window ending at `now`.
///
/// Pure elapsed-time subtraction, no calendar-aware day counting. A date
/// in the future gives a negative difference, which is always inside the
/// window; callers relying on this for future-dated records get "within".
pub fn is_within_window(date: CalendarDate, now: OffsetDateTime, window_days: u32) -> bool {
    let diff = now - date.midnight_utc();
    let diff_days = diff.whole_milliseconds() as f64 / MILLIS_PER_DAY;
    diff_days <= f64::from(window_days)
}

/// Whether the record was created inside the window.
pub fn is_new(record: &AppRecord, now: OffsetDateTime, window_days: u32) -> bool {
    is_within_window(record.created_at, now, window_days)
}

/// Whether the record was substantively updated inside the window.
/// False when the record carries no update date at all.
pub fn is_recently_updated(record: &AppRecord, now: OffsetDateTime, window_days: u32) -> bool {
    match record.updated_at {
        Some(updated_at) => is_within_window(updated_at, now, window_days),
        None => false,
    }
}

/// Badge for a recently updated record, selected by its update type.
/// A recently updated record without an update type gets no badge.
pub fn badge_for(record: &AppRecord, now: OffsetDateTime) -> Option<Badge> {
    if !is_recently_updated(record, now, DEFAULT_WINDOW_DAYS) {
        return None;
    }
    match record.update_type {
        Some(UpdateType::Fixed) => Some(Badge {
            text: "UPDATED",
            style: BadgeStyle::Warning,
        }),
        Some(UpdateType::Features) => Some(Badge {
            text: "NEW STUFF",
            style: BadgeStyle::Success,
        }),
        None => None,
    }
}
