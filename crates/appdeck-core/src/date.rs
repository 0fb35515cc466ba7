use crate::error::{CoreError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, Time};

const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar date (ISO 8601, date-only) as persisted in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(pub Date);

impl CalendarDate {
    pub fn new(date: Date) -> Self {
        Self(date)
    }

    pub fn inner(&self) -> &Date {
        &self.0
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    /// The instant this date begins, UTC midnight. Window arithmetic works
    /// on elapsed time from this point, not on calendar day counting.
    pub fn midnight_utc(&self) -> OffsetDateTime {
        self.0.with_time(Time::MIDNIGHT).assume_utc()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self.0.format(ISO_DATE).map_err(|_| fmt::Error)?;
        write!(f, "{formatted}")
    }
}

impl FromStr for CalendarDate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let date = Date::parse(s, ISO_DATE)
            .map_err(|e| CoreError::invalid_date(format!("Failed to parse date '{s}': {e}")))?;
        Ok(CalendarDate(date))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = self.0.format(ISO_DATE).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CalendarDate::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Today as a calendar date, UTC.
pub fn today_utc() -> CalendarDate {
    CalendarDate(OffsetDateTime::now_utc().date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn test_calendar_date_display() {
        let d = CalendarDate::new(date!(2025 - 01 - 20));
        assert_eq!(d.to_string(), "2025-01-20");
    }

    #[test]
    fn test_calendar_date_from_str() {
        let d = CalendarDate::from_str("2025-01-20").unwrap();
        assert_eq!(d.0, date!(2025 - 01 - 20));
    }

    #[test]
    fn test_calendar_date_from_str_invalid() {
        assert!(CalendarDate::from_str("not-a-date").is_err());
        assert!(CalendarDate::from_str("2025-13-01").is_err());
        assert!(CalendarDate::from_str("2025-01-32").is_err());
        assert!(CalendarDate::from_str("").is_err());
    }

    #[test]
    fn test_calendar_date_serde_roundtrip() {
        let d = CalendarDate::new(date!(2025 - 11 - 26));
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2025-11-26\"");
        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_midnight_utc() {
        let d = CalendarDate::new(date!(2025 - 01 - 20));
        assert_eq!(d.midnight_utc(), datetime!(2025-01-20 00:00:00 UTC));
    }

    #[test]
    fn test_calendar_date_ordering() {
        let a = CalendarDate::from_str("2025-01-01").unwrap();
        let b = CalendarDate::from_str("2025-01-02").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_error_message_content() {
        match CalendarDate::from_str("bad-date") {
            Err(CoreError::InvalidDate(msg)) => {
                assert!(msg.contains("bad-date"));
            }
            _ => panic!("Expected InvalidDate error"),
        }
    }
}
