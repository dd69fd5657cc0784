//! Dashboard configuration: providers plus layout and behavior settings.
//!
//! [`Settings`] holds everything that can live in a TOML file. [`AppConfig`]
//! pairs settings with the host's providers and is immutable once built.
//!
//! # TOML Format
//!
//! ```toml
//! show_sidebar_by_default = true
//! compact_width_breakpoint = 100
//! compact_height_breakpoint = 25
//! sidebar_width = 32
//! header_height = 2
//! refresh_interval_ms = 1000
//! sidebar_toggle_key = "ctrl+b"
//! quit_key = "ctrl+c"
//! theme = "crush"
//! # theme_file = "~/.config/dashframe/theme.toml"
//! trace_level = "info"
//! ```

use crate::domain::{DashError, Key, Result};
use crate::infrastructure::paths;
use crate::providers::{ContentProvider, HeaderDataProvider, SidebarSection};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name looked up inside the config directory by [`Settings::load`].
pub const SETTINGS_FILE: &str = "config.toml";

/// Layout and behavior options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Whether the sidebar starts visible in Normal mode.
    pub show_sidebar_by_default: bool,

    /// Terminals narrower than this render in Compact mode.
    pub compact_width_breakpoint: usize,

    /// Terminals shorter than this render in Compact mode.
    pub compact_height_breakpoint: usize,

    /// Sidebar width in columns, including its gutter.
    pub sidebar_width: usize,

    /// Header rows in Normal mode (Compact always uses one).
    pub header_height: usize,

    /// Cadence of `refresh_section` calls. Zero disables the cadence.
    pub refresh_interval_ms: u64,

    /// Toggles the sidebar. Handled by the dispatcher, never forwarded.
    pub sidebar_toggle_key: Key,

    /// Ends the program. Handled by the dispatcher, never forwarded.
    pub quit_key: Key,

    /// Built-in theme name. Ignored if `theme_file` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Path to a custom TOML theme. `~` is expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_file: Option<String>,

    /// Log filter directive, e.g. `"debug"` or `"dashframe=trace"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_sidebar_by_default: true,
            compact_width_breakpoint: 80,
            compact_height_breakpoint: 24,
            sidebar_width: 32,
            header_height: 2,
            refresh_interval_ms: 1000,
            sidebar_toggle_key: Key::Ctrl('b'),
            quit_key: Key::Ctrl('c'),
            theme: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Settings {
    /// Parses settings from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Config`] on malformed TOML, unknown keys, or values
    /// that fail [`validate`](Self::validate).
    ///
    /// ```
    /// use dashframe::Settings;
    ///
    /// let settings = Settings::from_toml_str("compact_width_breakpoint = 100").unwrap();
    /// assert_eq!(settings.compact_width_breakpoint, 100);
    /// assert!(settings.show_sidebar_by_default);
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Self::default().overlay_toml(toml_str)
    }

    /// Applies the keys present in `toml_str` on top of `self`.
    ///
    /// Keys the text leaves out keep their current values, so a host can set
    /// its own defaults and still let the user's file override them.
    ///
    /// # Errors
    ///
    /// As [`from_toml_str`](Self::from_toml_str).
    ///
    /// ```
    /// use dashframe::Settings;
    ///
    /// let base = Settings { compact_height_breakpoint: 25, ..Settings::default() };
    /// let settings = base.overlay_toml("compact_width_breakpoint = 60").unwrap();
    /// assert_eq!(settings.compact_width_breakpoint, 60);
    /// assert_eq!(settings.compact_height_breakpoint, 25);
    /// ```
    pub fn overlay_toml(self, toml_str: &str) -> Result<Self> {
        let overrides: toml::Table = toml::from_str(toml_str).map_err(parse_error)?;
        let toml::Value::Table(mut merged) = toml::Value::try_from(&self).map_err(parse_error)?
        else {
            return Err(DashError::Config("settings must serialize to a table".to_string()));
        };
        merged.extend(overrides);

        let settings: Self = toml::Value::Table(merged).try_into().map_err(parse_error)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads and parses a settings file.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads `<config_dir>/config.toml` when present, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Fails only if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_over(Self::default())
    }

    /// Like [`load`](Self::load), but keys missing from the file fall back to
    /// `base` instead of the built-in defaults.
    ///
    /// # Errors
    ///
    /// Fails only if the file exists but cannot be read or parsed.
    pub fn load_over(base: Self) -> Result<Self> {
        base.overlay_file(&paths::config_dir().join(SETTINGS_FILE))
    }

    fn overlay_file(self, path: &Path) -> Result<Self> {
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading settings");
            let contents = std::fs::read_to_string(path)?;
            self.overlay_toml(&contents)
        } else {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(self)
        }
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Config`] if the toggle and quit keys collide.
    pub fn validate(&self) -> Result<()> {
        if self.sidebar_toggle_key == self.quit_key {
            return Err(DashError::Config(format!(
                "sidebar_toggle_key and quit_key are both bound to {}",
                self.quit_key
            )));
        }
        Ok(())
    }

    /// Refresh cadence, `None` when disabled.
    #[must_use]
    pub const fn refresh_interval(&self) -> Option<Duration> {
        if self.refresh_interval_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.refresh_interval_ms))
        }
    }

    /// Theme file path with `~` expanded.
    #[must_use]
    pub fn theme_path(&self) -> Option<PathBuf> {
        self.theme_file.as_deref().map(paths::expand_tilde)
    }
}

fn parse_error(e: impl fmt::Display) -> DashError {
    DashError::Config(format!("Failed to parse settings: {e}"))
}

/// Everything the dispatcher needs: the host's providers and the settings.
///
/// Built once with [`AppConfig::builder`]; providers are never swapped at
/// runtime.
pub struct AppConfig {
    pub(crate) content: Box<dyn ContentProvider>,
    pub(crate) header: Box<dyn HeaderDataProvider>,
    pub(crate) sections: Vec<Box<dyn SidebarSection>>,
    pub(crate) settings: Settings,
}

impl AppConfig {
    #[must_use]
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let titles: Vec<String> = self.sections.iter().map(|s| s.title()).collect();
        f.debug_struct("AppConfig")
            .field("app_name", &self.header.app_name())
            .field("sections", &titles)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Step-by-step construction of an [`AppConfig`].
///
/// ```
/// use dashframe::demo::{CenteredTextContent, ClockHeader, TasksSection};
/// use dashframe::AppConfig;
///
/// let config = AppConfig::builder()
///     .content(CenteredTextContent::new("CUSTOM APP"))
///     .header(ClockHeader::new("MyApp™", "Custom App"))
///     .section(TasksSection::new())
///     .compact_breakpoints(100, 25)
///     .build()
///     .unwrap();
/// assert_eq!(config.section_count(), 1);
///
/// assert!(AppConfig::builder().build().is_err());
/// ```
#[derive(Default)]
pub struct AppConfigBuilder {
    content: Option<Box<dyn ContentProvider>>,
    header: Option<Box<dyn HeaderDataProvider>>,
    sections: Vec<Box<dyn SidebarSection>>,
    settings: Settings,
}

impl AppConfigBuilder {
    #[must_use]
    pub fn content(mut self, provider: impl ContentProvider + 'static) -> Self {
        self.content = Some(Box::new(provider));
        self
    }

    #[must_use]
    pub fn header(mut self, provider: impl HeaderDataProvider + 'static) -> Self {
        self.header = Some(Box::new(provider));
        self
    }

    /// Appends a sidebar section. Sections render in the order added.
    #[must_use]
    pub fn section(mut self, section: impl SidebarSection + 'static) -> Self {
        self.sections.push(Box::new(section));
        self
    }

    /// Appends already-boxed sections, for mixing custom and built-in ones.
    #[must_use]
    pub fn sections(mut self, sections: impl IntoIterator<Item = Box<dyn SidebarSection>>) -> Self {
        self.sections.extend(sections);
        self
    }

    /// Replaces all settings at once.
    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub const fn show_sidebar_by_default(mut self, show: bool) -> Self {
        self.settings.show_sidebar_by_default = show;
        self
    }

    #[must_use]
    pub const fn compact_breakpoints(mut self, width: usize, height: usize) -> Self {
        self.settings.compact_width_breakpoint = width;
        self.settings.compact_height_breakpoint = height;
        self
    }

    /// Finishes the config.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::MissingProvider`] if the content or header provider
    /// was not set, or [`DashError::Config`] if the settings are invalid.
    pub fn build(self) -> Result<AppConfig> {
        let content = self.content.ok_or(DashError::MissingProvider("content"))?;
        let header = self.header.ok_or(DashError::MissingProvider("header"))?;
        self.settings.validate()?;

        Ok(AppConfig {
            content,
            header,
            sections: self.sections,
            settings: self.settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
        assert_eq!(
            Settings::default().refresh_interval(),
            Some(Duration::from_secs(1))
        );
    }

    #[test]
    fn parses_keys_and_options() {
        let settings = Settings::from_toml_str(
            r#"
            show_sidebar_by_default = false
            sidebar_toggle_key = "f2"
            quit_key = "q"
            refresh_interval_ms = 0
            theme = "catppuccin-latte"
            "#,
        )
        .expect("valid settings");
        assert!(!settings.show_sidebar_by_default);
        assert_eq!(settings.sidebar_toggle_key, Key::F(2));
        assert_eq!(settings.quit_key, Key::Char('q'));
        assert_eq!(settings.refresh_interval(), None);
        assert_eq!(settings.theme.as_deref(), Some("catppuccin-latte"));
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        assert!(matches!(
            Settings::from_toml_str("sidebar = true"),
            Err(DashError::Config(_))
        ));
        assert!(matches!(
            Settings::from_toml_str("quit_key = \"hyper+q\""),
            Err(DashError::Config(_))
        ));
    }

    #[test]
    fn rejects_colliding_dispatcher_keys() {
        let err = Settings::from_toml_str("sidebar_toggle_key = \"ctrl+c\"").unwrap_err();
        assert!(err.to_string().contains("ctrl+c"));
    }

    #[test]
    fn reads_settings_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "sidebar_width = 40").expect("write settings");
        let settings = Settings::from_file(file.path()).expect("settings file");
        assert_eq!(settings.sidebar_width, 40);
    }

    fn host_defaults() -> Settings {
        Settings {
            compact_width_breakpoint: 100,
            compact_height_breakpoint: 25,
            ..Settings::default()
        }
    }

    #[test]
    fn file_overrides_host_defaults_key_by_key() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "show_sidebar_by_default = false").expect("write settings");
        writeln!(file, "compact_width_breakpoint = 60").expect("write settings");
        writeln!(file, "theme = \"catppuccin-mocha\"").expect("write settings");

        let settings = host_defaults().overlay_file(file.path()).expect("settings file");
        assert!(!settings.show_sidebar_by_default);
        assert_eq!(settings.compact_width_breakpoint, 60);
        assert_eq!(settings.compact_height_breakpoint, 25);
        assert_eq!(settings.theme.as_deref(), Some("catppuccin-mocha"));
        assert_eq!(settings.quit_key, Key::Ctrl('c'));
    }

    #[test]
    fn absent_file_keeps_host_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let settings = host_defaults()
            .overlay_file(&dir.path().join(SETTINGS_FILE))
            .expect("defaults");
        assert_eq!(settings, host_defaults());
    }

    #[test]
    fn loaded_settings_survive_into_the_config() {
        use crate::demo::{CenteredTextContent, ClockHeader};

        let settings = host_defaults()
            .overlay_toml("show_sidebar_by_default = false\ncompact_height_breakpoint = 10")
            .expect("settings");
        let config = AppConfig::builder()
            .settings(settings)
            .content(CenteredTextContent::new("APP"))
            .header(ClockHeader::new("B", "A"))
            .build()
            .expect("config");
        assert!(!config.settings().show_sidebar_by_default);
        assert_eq!(config.settings().compact_width_breakpoint, 100);
        assert_eq!(config.settings().compact_height_breakpoint, 10);
    }

    #[test]
    fn overlay_rejects_unknown_keys() {
        assert!(matches!(
            host_defaults().overlay_toml("sidebar = true"),
            Err(DashError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            Settings::from_file("/nonexistent/dashframe.toml"),
            Err(DashError::Io(_))
        ));
    }
}
