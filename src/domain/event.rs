//! Events flowing from the runner into the dispatcher and on to providers.
//!
//! Time only enters the framework through these values: a [`Tick`] carries the
//! moment it fired, so providers never read a clock themselves and tests can
//! inject synthetic ticks.

use super::key::Key;
use chrono::{DateTime, Local};

/// Wall-clock instant used for ticks and scheduling.
pub type Timestamp = DateTime<Local>;

/// Tag used by [`FollowUp::tick`](crate::domain::FollowUp::tick) when a provider
/// does not name its cadence.
pub const DEFAULT_TICK_TAG: &str = "tick";

/// An input delivered to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The terminal changed size.
    Resize {
        /// New width in columns.
        width: usize,
        /// New height in rows.
        height: usize,
    },
    /// A key was pressed.
    Key(Key),
    /// A mouse action happened at a cell.
    Mouse(Mouse),
    /// A timer requested by a provider fired.
    Tick(Tick),
}

impl Event {
    /// Short name for span fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Resize { .. } => "resize",
            Self::Key(_) => "key",
            Self::Mouse(_) => "mouse",
            Self::Tick(_) => "tick",
        }
    }
}

/// Timer-originated event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// When the timer fired.
    pub at: Timestamp,
    /// Cadence name chosen by the provider that requested the tick.
    pub tag: &'static str,
}

/// Mouse event at a zero-based cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mouse {
    pub column: usize,
    pub row: usize,
    pub kind: MouseKind,
}

/// What the mouse did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseKind {
    Down,
    Up,
    Drag,
    Moved,
    ScrollUp,
    ScrollDown,
}
