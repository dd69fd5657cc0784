//! Sidebar rows and their status vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed status vocabulary for sidebar rows.
///
/// The styling collaborator maps each status to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Success,
    Info,
    Warning,
    Error,
    #[default]
    Muted,
}

impl ItemStatus {
    /// Maps a lower-case status name to a status, falling back to `Muted`.
    ///
    /// ```
    /// use dashframe::ItemStatus;
    ///
    /// assert_eq!(ItemStatus::from_name("warning"), ItemStatus::Warning);
    /// assert_eq!(ItemStatus::from_name("unheard-of"), ItemStatus::Muted);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "info" => Self::Info,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Muted,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Muted => "muted",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered sidebar row.
///
/// Built fresh on every `render_items` call from provider state; the framework
/// never keeps or mutates these between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    /// Short glyph shown before the label.
    pub icon: String,
    /// Main label, already truncated by the provider.
    pub text: String,
    /// Secondary label, right-aligned.
    pub value: String,
    pub status: ItemStatus,
}

impl SidebarItem {
    #[must_use]
    pub fn new(
        icon: impl Into<String>,
        text: impl Into<String>,
        value: impl Into<String>,
        status: ItemStatus,
    ) -> Self {
        Self {
            icon: icon.into(),
            text: text.into(),
            value: value.into(),
            status,
        }
    }
}
