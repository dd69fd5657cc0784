//! Capability contracts for the three pluggable regions.
//!
//! A host supplies one [`ContentProvider`], one [`HeaderDataProvider`] and any
//! number of [`SidebarSection`]s. The framework only ever calls these methods;
//! provider state stays private to the provider.
//!
//! # Contract
//!
//! - Calls are synchronous and fast. Long work is modelled by returning a
//!   [`FollowUp`] and continuing when its tick is delivered.
//! - Rendering methods must not fail. A provider that cannot render for the
//!   given constraints returns an empty result; the region is then left blank.
//! - Output should fit the given size. The framework clips anything that does
//!   not, but providers know best where to cut.
//!
//! # Example
//!
//! ```
//! use dashframe::providers::SidebarSection;
//! use dashframe::{ItemStatus, SidebarItem};
//!
//! struct Deploys(Vec<&'static str>);
//!
//! impl SidebarSection for Deploys {
//!     fn title(&self) -> String {
//!         "Deploys".to_string()
//!     }
//!
//!     fn render_items(&self, max_items: usize, width: usize) -> Vec<SidebarItem> {
//!         self.0
//!             .iter()
//!             .take(max_items)
//!             .map(|name| {
//!                 let text = dashframe::providers::truncate_label(name, width);
//!                 SidebarItem::new("●", text, "ok", ItemStatus::Success)
//!             })
//!             .collect()
//!     }
//! }
//!
//! let section = Deploys(vec!["api", "web", "worker"]);
//! assert_eq!(section.render_items(2, 30).len(), 2);
//! ```

use crate::domain::{Event, FollowUp, SidebarItem, StatusData, Timestamp};
use crate::ui::styler::Styler;
use crate::ui::text::truncate_with_marker;

/// Columns a sidebar row reserves for icon, spacing and value.
pub const SIDEBAR_LABEL_RESERVE: usize = 10;

/// Provides the main content pane.
pub trait ContentProvider {
    /// Renders the pane as newline-separated lines within `width × height`.
    ///
    /// Must be idempotent: same state and size, same output.
    fn render_content(&self, width: usize, height: usize, styler: &dyn Styler) -> String;

    /// Called once before the first frame.
    fn init_content(&mut self) -> Vec<FollowUp> {
        Vec::new()
    }

    /// Receives resizes, keys, mouse events and the provider's own ticks.
    fn handle_content_update(&mut self, _event: &Event) -> Vec<FollowUp> {
        Vec::new()
    }
}

/// Provides the data shown in the header bar.
///
/// The header is styled and laid out by the framework; providers only supply
/// names and status fields, which are read fresh every frame.
pub trait HeaderDataProvider {
    fn brand_name(&self) -> String;

    fn app_name(&self) -> String;

    /// Ordered status fields shown on the right of the header.
    fn status_data(&self) -> StatusData;

    /// Called once before the first frame.
    fn init_header(&mut self) -> Vec<FollowUp> {
        Vec::new()
    }

    /// Receives resizes and the provider's own ticks.
    fn handle_header_update(&mut self, _event: &Event) -> Vec<FollowUp> {
        Vec::new()
    }
}

/// One titled block in the sidebar.
pub trait SidebarSection {
    fn title(&self) -> String;

    /// Returns at most `max_items` rows for a sidebar `width` columns wide.
    fn render_items(&self, max_items: usize, width: usize) -> Vec<SidebarItem>;

    /// Called once before the first frame.
    fn init_section(&mut self) -> Vec<FollowUp> {
        Vec::new()
    }

    /// Receives resizes, mouse events over the section and its own ticks.
    fn handle_section_update(&mut self, _event: &Event) -> Vec<FollowUp> {
        Vec::new()
    }

    /// Periodic hook driven by the framework's refresh cadence.
    ///
    /// `at` is the cadence's fire time; sections use it instead of a clock.
    fn refresh_section(&mut self, _at: Timestamp) -> Vec<FollowUp> {
        Vec::new()
    }
}

/// Fits a sidebar label into a row of `width` columns.
///
/// Labels longer than `width - 10` are cut and end with `...`. Small widths
/// never panic; the label just shrinks to nothing.
///
/// ```
/// use dashframe::providers::truncate_label;
///
/// assert_eq!(truncate_label("Documentation", 20), "Documen...");
/// assert_eq!(truncate_label("Testing", 20), "Testing");
/// assert_eq!(truncate_label("Testing", 5), "");
/// ```
#[must_use]
pub fn truncate_label(text: &str, width: usize) -> String {
    truncate_with_marker(text, width.saturating_sub(SIDEBAR_LABEL_RESERVE))
}
