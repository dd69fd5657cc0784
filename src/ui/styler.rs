//! The styling seam between composition and the theme.
//!
//! Composition never builds escape sequences itself. It asks a [`Styler`] for
//! pre-styled strings and places them verbatim, measuring them with
//! [`text::visible_width`](crate::ui::text::visible_width).

use crate::domain::ItemStatus;

/// Named semantic text styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Regular body text.
    Text,
    /// Secondary information.
    Muted,
    /// Least prominent text, separators.
    Subtle,
    /// Bold section titles.
    Title,
    /// Borders and rules.
    Border,
    Success,
    Info,
    Warning,
    Error,
}

impl From<ItemStatus> for TextStyle {
    fn from(status: ItemStatus) -> Self {
        match status {
            ItemStatus::Success => Self::Success,
            ItemStatus::Info => Self::Info,
            ItemStatus::Warning => Self::Warning,
            ItemStatus::Error => Self::Error,
            ItemStatus::Muted => Self::Muted,
        }
    }
}

/// Turns plain text into display-ready text.
///
/// Implementations must not change the visible characters, only wrap them in
/// styling, so that layout measurements stay valid.
pub trait Styler {
    /// Bold text with a horizontal color gradient (brand names, titles).
    fn gradient(&self, text: &str) -> String;

    /// Text in a named semantic style.
    fn style(&self, style: TextStyle, text: &str) -> String;

    /// Text colored for a sidebar status.
    fn status(&self, status: ItemStatus, text: &str) -> String {
        self.style(status.into(), text)
    }
}

/// A styler that returns text untouched.
///
/// Used in tests and for terminals without color.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn gradient(&self, text: &str) -> String {
        text.to_string()
    }

    fn style(&self, _style: TextStyle, text: &str) -> String {
        text.to_string()
    }
}
