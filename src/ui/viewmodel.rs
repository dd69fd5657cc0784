//! Render-ready snapshots and the composed frame.
//!
//! The dispatcher reads providers once per frame into these plain structs, so
//! composition itself never calls into host code.

use crate::domain::{SidebarItem, StatusData};
use crate::layout::{LayoutMode, RegionGeometry};
use std::fmt;

/// Header data read from the header provider for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderView {
    pub brand: String,
    pub app: String,
    pub status: StatusData,
}

/// One sidebar section read for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionView {
    pub title: String,
    pub items: Vec<SidebarItem>,
}

/// Everything composition needs for one frame.
#[derive(Debug, Clone, Default)]
pub struct FrameInputs {
    pub mode: LayoutMode,
    pub geometry: RegionGeometry,
    /// `None` when the header region is empty or its provider failed.
    pub header: Option<HeaderView>,
    pub content: String,
    /// One entry per visible slot, in declaration order.
    pub sections: Vec<SectionView>,
}

/// A composed frame ready for the rendering backend.
///
/// Holds one string per terminal row; each row spans the full width. Rows may
/// contain escape sequences produced by the styler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub mode: LayoutMode,
    pub geometry: RegionGeometry,
    pub lines: Vec<String>,
}

impl Frame {
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// `true` if any row contains `needle`. Handy for plain-styled tests.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Index of the first row containing `needle`.
    #[must_use]
    pub fn find_row(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.contains(needle))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
