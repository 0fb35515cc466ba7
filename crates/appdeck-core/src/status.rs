use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of a directory entry. The board is a kanban, not a
/// pipeline: any status may move to any other status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppStatus {
    Idea,
    Building,
    Testing,
    Mvp,
    Shipped,
}

impl AppStatus {
    /// All statuses in board-column order.
    pub const ALL: [AppStatus; 5] = [
        AppStatus::Idea,
        AppStatus::Building,
        AppStatus::Testing,
        AppStatus::Mvp,
        AppStatus::Shipped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Building => "building",
            Self::Testing => "testing",
            Self::Mvp => "mvp",
            Self::Shipped => "shipped",
        }
    }

    /// Static status configuration: column icon, display label, and
    /// whether records in this status appear in the default listing.
    pub fn meta(&self) -> &'static StatusMeta {
        match self {
            Self::Idea => &StatusMeta {
                icon: "💡",
                label: "Idea",
                visible: false,
            },
            Self::Building => &StatusMeta {
                icon: "🧪",
                label: "Building",
                visible: false,
            },
            Self::Testing => &StatusMeta {
                icon: "🔬",
                label: "Testing",
                visible: true,
            },
            Self::Mvp => &StatusMeta {
                icon: "⚛️",
                label: "MVP",
                visible: true,
            },
            Self::Shipped => &StatusMeta {
                icon: "🚀",
                label: "Shipped",
                visible: true,
            },
        }
    }

    pub fn is_visible(&self) -> bool {
        self.meta().visible
    }
}

impl fmt::Display for AppStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AppStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "idea" => Ok(Self::Idea),
            "building" => Ok(Self::Building),
            "testing" => Ok(Self::Testing),
            "mvp" => Ok(Self::Mvp),
            "shipped" => Ok(Self::Shipped),
            other => Err(CoreError::invalid_status(other)),
        }
    }
}

/// Per-status display configuration, process-wide static.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMeta {
    pub icon: &'static str,
    pub label: &'static str,
    pub visible: bool,
}

/// Kind of the most recent substantive update, selects the badge shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateType {
    Fixed,
    Features,
}

impl UpdateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Features => "features",
        }
    }
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UpdateType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fixed" => Ok(Self::Fixed),
            "features" => Ok(Self::Features),
            other => Err(CoreError::invalid_update_type(other)),
        }
    }
}
