//! Commands the dispatcher hands back to the runner.
//!
//! Providers only ever produce [`FollowUp`](crate::domain::FollowUp)s; the
//! dispatcher arms the timed ones itself and turns the rest into actions the
//! runner must carry out.

/// Side effects requested of the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the event loop and restore the terminal.
    ///
    /// Emitted for the configured quit key or when any provider returns
    /// [`FollowUp::Quit`](crate::domain::FollowUp::Quit).
    Quit,
}
