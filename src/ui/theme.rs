//! Theme management and ANSI escape sequence generation.
//!
//! Themes are plain TOML palettes. A few are built in; custom ones are loaded
//! from a file. [`Theme`] implements [`Styler`] with 24-bit color escapes.
//!
//! # Built-in Themes
//!
//! - `crush`: Violet/magenta on dark (default)
//! - `catppuccin-mocha`: Dark theme with warm tones
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! primary = "#6b50ff"
//! secondary = "#ff60ff"
//! text = "#dfdbdd"
//! muted = "#858392"
//! subtle = "#605f6b"
//! border = "#3a3943"
//! success = "#12c78f"
//! info = "#00a4ff"
//! warning = "#e8fe96"
//! error = "#eb4268"
//! ```

use crate::domain::{DashError, Result};
use crate::ui::styler::{Styler, TextStyle};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "crush";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette.
    pub colors: ThemeColors,
}

/// Palette entries, all hex strings such as `"#cdd6f4"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Gradient start, accents.
    pub primary: String,
    /// Gradient end.
    pub secondary: String,
    pub text: String,
    pub muted: String,
    pub subtle: String,
    pub border: String,
    pub success: String,
    pub info: String,
    pub warning: String,
    pub error: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for unknown names.
    ///
    /// ```
    /// use dashframe::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-mocha").unwrap();
    /// assert_eq!(theme.name, "catppuccin-mocha");
    /// assert!(Theme::from_name("nope").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "crush" => include_str!("../../themes/crush.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DashError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| DashError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Resolves the configured theme: file first, then name, then the default.
    ///
    /// Load failures are logged and fall back to the default theme; a bad theme
    /// never prevents the dashboard from starting.
    #[must_use]
    pub fn resolve(name: Option<&str>, file: Option<&Path>) -> Self {
        if let Some(file) = file {
            match Self::from_file(file) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(
                        theme_file = %file.display(),
                        error = %e,
                        "failed to load theme file, using default"
                    );
                }
            }
        }
        if let Some(name) = name {
            if let Some(theme) = Self::from_name(name) {
                return theme;
            }
            tracing::warn!(theme_name = %name, "unknown theme, using default");
        }
        Self::default()
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Returns white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        Self::fg_rgb((r, g, b))
    }

    fn fg_rgb((r, g, b): (u8, u8, u8)) -> String {
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    fn color_for(&self, style: TextStyle) -> &str {
        let c = &self.colors;
        match style {
            TextStyle::Text => &c.text,
            TextStyle::Muted => &c.muted,
            TextStyle::Subtle => &c.subtle,
            TextStyle::Title => &c.primary,
            TextStyle::Border => &c.border,
            TextStyle::Success => &c.success,
            TextStyle::Info => &c.info,
            TextStyle::Warning => &c.warning,
            TextStyle::Error => &c.error,
        }
    }
}

/// Linear interpolation between two channels, `step` out of `steps`.
fn lerp(from: u8, to: u8, step: usize, steps: usize) -> u8 {
    if steps == 0 {
        return from;
    }
    let from = i64::from(from);
    let to = i64::from(to);
    #[allow(clippy::cast_possible_wrap)]
    let value = from + (to - from) * step as i64 / steps as i64;
    u8::try_from(value).unwrap_or(u8::MAX)
}

impl Styler for Theme {
    fn gradient(&self, text: &str) -> String {
        let start = Self::hex_to_rgb(&self.colors.primary);
        let end = Self::hex_to_rgb(&self.colors.secondary);
        let steps = text.chars().count().saturating_sub(1);

        let mut out = String::from(Self::bold());
        for (i, c) in text.chars().enumerate() {
            let rgb = (
                lerp(start.0, end.0, i, steps),
                lerp(start.1, end.1, i, steps),
                lerp(start.2, end.2, i, steps),
            );
            out.push_str(&Self::fg_rgb(rgb));
            out.push(c);
        }
        out.push_str(Self::reset());
        out
    }

    fn style(&self, style: TextStyle, text: &str) -> String {
        let mut out = String::new();
        if style == TextStyle::Title {
            out.push_str(Self::bold());
        }
        out.push_str(&Self::fg(self.color_for(style)));
        let _ = write!(out, "{text}{}", Self::reset());
        out
    }
}

impl Default for Theme {
    /// Returns the default theme (`crush`).
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which is a build defect.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in crush theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemStatus;
    use crate::ui::text::visible_width;

    #[test]
    fn every_builtin_theme_parses() {
        for name in ["crush", "catppuccin-mocha", "catppuccin-latte"] {
            assert!(Theme::from_name(name).is_some(), "{name}");
        }
        assert_eq!(
            Theme::from_name("catppuccin-latte").map(|t| t.name),
            Some("catppuccin-latte".to_string())
        );
    }

    #[test]
    fn styling_preserves_visible_text() {
        let theme = Theme::default();
        assert_eq!(visible_width(&theme.gradient("MyApp™")), 6);
        assert_eq!(visible_width(&theme.style(TextStyle::Muted, "muted")), 5);
        assert_eq!(visible_width(&theme.status(ItemStatus::Error, "x")), 1);
    }

    #[test]
    fn gradient_runs_from_primary_to_secondary() {
        let theme = Theme::default();
        let out = theme.gradient("ab");
        assert!(out.contains(&Theme::fg(&theme.colors.primary)));
        assert!(out.contains(&Theme::fg(&theme.colors.secondary)));
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#12"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("zzzzzz"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn from_file_reports_parse_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = 3").expect("write theme");
        assert!(matches!(Theme::from_file(&path), Err(DashError::Theme(_))));
    }

    #[test]
    fn resolve_falls_back_to_default() {
        let theme = Theme::resolve(Some("missing"), Some(Path::new("/nonexistent/theme.toml")));
        assert_eq!(theme.name, DEFAULT_THEME);
        let mocha = Theme::resolve(Some("catppuccin-mocha"), None);
        assert_eq!(mocha.name, "catppuccin-mocha");
    }
}
