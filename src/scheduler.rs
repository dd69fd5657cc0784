//! Timed follow-up queue.
//!
//! The scheduler stores pending triggers, each tagged with the region that
//! asked for it. It never reads the clock: callers pass `now` in, which keeps
//! firing deterministic under test. Triggers from different providers are never
//! coalesced, so independent cadences drift independently.

use crate::domain::Timestamp;
use chrono::TimeDelta;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

/// Who receives a trigger when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Content,
    Header,
    /// Sidebar section by declaration index.
    Section(usize),
    /// The framework's own periodic `refresh_section` cadence.
    SidebarRefresh,
}

/// A trigger that has come due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub target: Target,
    pub tag: &'static str,
    /// When it was due; delivery happens at the caller's `now`, never earlier.
    pub due: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    due: Timestamp,
    seq: u64,
    target: Target,
    tag: &'static str,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of pending triggers ordered by due time, then arming order.
#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<Pending>>,
    next_seq: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a trigger for `target` no earlier than `after` past `now`.
    ///
    /// Returns the due time, or `None` when the delay overflows the calendar
    /// (the request is dropped and logged).
    pub fn schedule(
        &mut self,
        now: Timestamp,
        target: Target,
        after: Duration,
        tag: &'static str,
    ) -> Option<Timestamp> {
        let due = TimeDelta::from_std(after)
            .ok()
            .and_then(|delta| now.checked_add_signed(delta));
        let Some(due) = due else {
            tracing::warn!(?target, ?after, "follow-up delay out of range, dropping");
            return None;
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Pending { due, seq, target, tag }));
        tracing::trace!(?target, tag, %due, pending = self.queue.len(), "trigger armed");
        Some(due)
    }

    /// Earliest pending due time.
    #[must_use]
    pub fn next_due(&self) -> Option<Timestamp> {
        self.queue.peek().map(|Reverse(p)| p.due)
    }

    /// Removes and returns every trigger due at or before `now`, in due order.
    ///
    /// Triggers armed after this call returns are left for the next call, so a
    /// handler that re-arms with zero delay cannot starve the loop.
    pub fn take_due(&mut self, now: Timestamp) -> Vec<Trigger> {
        let mut due = Vec::new();
        while self.queue.peek().is_some_and(|Reverse(p)| p.due <= now) {
            if let Some(Reverse(p)) = self.queue.pop() {
                due.push(Trigger {
                    target: p.target,
                    tag: p.tag,
                    due: p.due,
                });
            }
        }
        due
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> Timestamp {
        chrono::Local
            .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
            .single()
            .expect("unambiguous local time")
    }

    fn secs(n: i64) -> TimeDelta {
        TimeDelta::seconds(n)
    }

    #[test]
    fn fires_no_earlier_than_requested() {
        let mut s = Scheduler::new();
        s.schedule(t0(), Target::Header, Duration::from_secs(1), "tick");

        assert!(s.take_due(t0()).is_empty());
        assert!(s.take_due(t0() + TimeDelta::milliseconds(999)).is_empty());
        let fired = s.take_due(t0() + secs(1));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].target, Target::Header);
        assert!(s.is_empty());
    }

    #[test]
    fn orders_by_due_then_arming_order() {
        let mut s = Scheduler::new();
        s.schedule(t0(), Target::Section(1), Duration::from_secs(2), "b");
        s.schedule(t0(), Target::Content, Duration::from_secs(1), "a");
        s.schedule(t0(), Target::Header, Duration::from_secs(2), "c");

        let tags: Vec<&str> = s.take_due(t0() + secs(5)).iter().map(|t| t.tag).collect();
        assert_eq!(tags, ["a", "b", "c"]);
    }

    #[test]
    fn duplicate_requests_are_not_coalesced() {
        let mut s = Scheduler::new();
        s.schedule(t0(), Target::Header, Duration::from_secs(1), "tick");
        s.schedule(t0(), Target::Header, Duration::from_secs(1), "tick");
        assert_eq!(s.len(), 2);
        assert_eq!(s.take_due(t0() + secs(1)).len(), 2);
    }

    #[test]
    fn next_due_tracks_the_earliest_trigger() {
        let mut s = Scheduler::new();
        assert_eq!(s.next_due(), None);
        s.schedule(t0(), Target::Header, Duration::from_secs(3), "tick");
        s.schedule(t0(), Target::Content, Duration::from_millis(500), "tick");
        assert_eq!(s.next_due(), Some(t0() + TimeDelta::milliseconds(500)));
    }

    #[test]
    fn absurd_delays_are_dropped() {
        let mut s = Scheduler::new();
        assert!(s.schedule(t0(), Target::Header, Duration::MAX, "tick").is_none());
        assert!(s.is_empty());
    }
}
