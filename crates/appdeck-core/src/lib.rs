pub mod badge;
pub mod date;
pub mod directory;
pub mod error;
pub mod record;
pub mod status;

pub use badge::{Badge, BadgeStyle, DEFAULT_WINDOW_DAYS, badge_for, is_new, is_recently_updated, is_within_window};
pub use date::{CalendarDate, today_utc};
pub use directory::{Directory, find_by_slug, visible_records};
pub use error::{CoreError, Result};
pub use record::AppRecord;
pub use status::{AppStatus, StatusMeta, UpdateType};
