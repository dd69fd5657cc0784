//! Responsive layout: mode selection and region geometry.
//!
//! The layout is a pure function of the terminal size and a handful of
//! settings. Nothing here is cached between frames; the dispatcher recomputes
//! it on every resize.
//!
//! ```text
//! ┌──────────────────────────── header ────────────────────────────┐
//! ├───────────────────────────────────────────────┬────────────────┤
//! │                                               │ sidebar        │
//! │ content                                       │  section A     │
//! │                                               │  section B     │
//! └───────────────────────────────────────────────┴────────────────┘
//! ```
//!
//! In [`LayoutMode::Compact`] the header shrinks to one row and the sidebar is
//! never shown. All arithmetic saturates: regions that would get a negative or
//! zero extent collapse to zero area.

use crate::app::config::Settings;

/// Content keeps at least this many columns before the sidebar is dropped.
pub const MIN_CONTENT_WIDTH: usize = 20;

/// Columns taken by the sidebar's left rule and padding.
pub const SIDEBAR_GUTTER: usize = 2;

/// Rows each sidebar section spends on its title and trailing spacer.
pub const SECTION_CHROME_ROWS: usize = 2;

/// Discrete rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutMode {
    #[default]
    Normal,
    Compact,
}

impl LayoutMode {
    /// Compact iff `width < width_breakpoint` or `height < height_breakpoint`.
    ///
    /// The comparison is strict: a terminal exactly at a breakpoint is Normal.
    ///
    /// ```
    /// use dashframe::LayoutMode;
    ///
    /// assert_eq!(LayoutMode::for_size(100, 25, 100, 25), LayoutMode::Normal);
    /// assert_eq!(LayoutMode::for_size(99, 25, 100, 25), LayoutMode::Compact);
    /// assert_eq!(LayoutMode::for_size(100, 24, 100, 25), LayoutMode::Compact);
    /// ```
    #[must_use]
    pub const fn for_size(
        width: usize,
        height: usize,
        width_breakpoint: usize,
        height_breakpoint: usize,
    ) -> Self {
        if width < width_breakpoint || height < height_breakpoint {
            Self::Compact
        } else {
            Self::Normal
        }
    }
}

/// A rectangle of terminal cells, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    /// Creates a rectangle; a zero extent on either axis collapses both to zero.
    #[must_use]
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            Self { x, y, width: 0, height: 0 }
        } else {
            Self { x, y, width, height }
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub const fn right(&self) -> usize {
        self.x + self.width
    }

    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }

    #[must_use]
    pub const fn contains(&self, column: usize, row: usize) -> bool {
        column >= self.x && column < self.right() && row >= self.y && row < self.bottom()
    }

    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Regions assigned for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionGeometry {
    pub header: Rect,
    pub content: Rect,
    /// Present only when the sidebar is visible and the mode allows it.
    pub sidebar: Option<Rect>,
}

/// Computes region geometry for a terminal of `width × height`.
///
/// The sidebar is placed on the right when `mode` is Normal, the host wants it
/// visible, and at least [`MIN_CONTENT_WIDTH`] columns remain for content.
#[must_use]
pub fn compute(
    width: usize,
    height: usize,
    mode: LayoutMode,
    sidebar_visible: bool,
    settings: &Settings,
) -> RegionGeometry {
    let header_rows = match mode {
        LayoutMode::Normal => settings.header_height,
        LayoutMode::Compact => settings.header_height.min(1),
    }
    .min(height);

    let header = Rect::new(0, 0, width, header_rows);
    let body_y = header_rows;
    let body_height = height.saturating_sub(header_rows);

    let sidebar_width = settings.sidebar_width;
    let show_sidebar = mode == LayoutMode::Normal
        && sidebar_visible
        && sidebar_width > 0
        && body_height > 0
        && width >= sidebar_width.saturating_add(MIN_CONTENT_WIDTH);

    let (content_width, sidebar) = if show_sidebar {
        let content_width = width - sidebar_width;
        (
            content_width,
            Some(Rect::new(content_width, body_y, sidebar_width, body_height)),
        )
    } else {
        (width, None)
    };

    RegionGeometry {
        header,
        content: Rect::new(0, body_y, content_width, body_height),
        sidebar,
    }
}

/// Splits the sidebar into one vertical slot per section, in declaration order.
///
/// Rows are shared evenly; leftover rows go to the earlier sections.
#[must_use]
pub fn sidebar_slots(sidebar: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let base = sidebar.height / count;
    let extra = sidebar.height % count;

    let mut y = sidebar.y;
    (0..count)
        .map(|i| {
            let rows = base + usize::from(i < extra);
            let slot = Rect::new(sidebar.x, y, sidebar.width, rows);
            y += rows;
            slot
        })
        .collect()
}

/// How many items a section may render inside `slot`.
#[must_use]
pub const fn max_items_for(slot: Rect) -> usize {
    slot.height.saturating_sub(SECTION_CHROME_ROWS)
}

/// Width handed to sections rendering inside a sidebar of `sidebar_width`.
#[must_use]
pub const fn item_width_for(sidebar_width: usize) -> usize {
    sidebar_width.saturating_sub(SIDEBAR_GUTTER)
}
