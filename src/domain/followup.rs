//! Follow-up requests returned by providers.
//!
//! A provider never blocks or spawns timers. It returns zero or more
//! [`FollowUp`] values from its init/handle calls and the dispatcher arms them.
//! Stopping a recurring tick is simply returning no renewal.

use super::event::DEFAULT_TICK_TAG;
use std::time::Duration;

/// A "do this later" instruction handed back to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Deliver a [`Tick`](crate::domain::Tick) back to the requesting provider
    /// no earlier than `after` from now.
    Tick {
        /// Minimum delay before firing.
        after: Duration,
        /// Cadence name echoed in the delivered tick.
        tag: &'static str,
    },
    /// Ask the host runner to stop the program.
    Quit,
}

impl FollowUp {
    /// A tick with the default tag.
    ///
    /// ```
    /// use dashframe::FollowUp;
    /// use std::time::Duration;
    ///
    /// let next = FollowUp::tick(Duration::from_secs(1));
    /// assert!(matches!(next, FollowUp::Tick { tag: "tick", .. }));
    /// ```
    #[must_use]
    pub const fn tick(after: Duration) -> Self {
        Self::Tick {
            after,
            tag: DEFAULT_TICK_TAG,
        }
    }

    /// A tick with a provider-chosen tag, for providers running several cadences.
    #[must_use]
    pub const fn tagged_tick(after: Duration, tag: &'static str) -> Self {
        Self::Tick { after, tag }
    }
}
