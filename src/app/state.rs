//! Root layout state owned by the dispatcher.

use crate::app::config::Settings;
use crate::layout::{self, LayoutMode, RegionGeometry};

/// Terminal size, layout mode and sidebar visibility.
///
/// `sidebar_preference` is what the user last asked for; the sidebar is only
/// shown when the preference is on and the mode is Normal. Toggling in Compact
/// mode flips the preference, which takes effect once the terminal grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootState {
    pub width: usize,
    pub height: usize,
    pub mode: LayoutMode,
    pub sidebar_preference: bool,
    pub geometry: RegionGeometry,
}

impl RootState {
    /// Zero-sized state; everything collapses until the first resize.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let mut state = Self {
            width: 0,
            height: 0,
            mode: LayoutMode::Normal,
            sidebar_preference: settings.show_sidebar_by_default,
            geometry: RegionGeometry::default(),
        };
        state.recompute(settings);
        state
    }

    /// Applies a new terminal size. Returns `true` if the mode changed.
    pub fn resize(&mut self, width: usize, height: usize, settings: &Settings) -> bool {
        let previous = self.mode;
        self.width = width;
        self.height = height;
        self.recompute(settings);
        if previous != self.mode {
            tracing::info!(from = ?previous, to = ?self.mode, width, height, "layout mode changed");
        }
        previous != self.mode
    }

    /// Flips the sidebar preference. Returns `true` if the geometry changed.
    pub fn toggle_sidebar(&mut self, settings: &Settings) -> bool {
        self.sidebar_preference = !self.sidebar_preference;
        let before = self.geometry;
        self.recompute(settings);
        tracing::debug!(
            preference = self.sidebar_preference,
            visible = self.sidebar_visible(),
            "sidebar toggled"
        );
        before != self.geometry
    }

    /// Whether the sidebar occupies screen space right now.
    #[must_use]
    pub const fn sidebar_visible(&self) -> bool {
        self.geometry.sidebar.is_some()
    }

    fn recompute(&mut self, settings: &Settings) {
        self.mode = LayoutMode::for_size(
            self.width,
            self.height,
            settings.compact_width_breakpoint,
            settings.compact_height_breakpoint,
        );
        self.geometry = layout::compute(
            self.width,
            self.height,
            self.mode,
            self.sidebar_preference,
            settings,
        );
    }
}
