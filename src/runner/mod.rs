//! Terminal event loop.
//!
//! The runner is the only code that touches the real terminal and the wall
//! clock. It feeds [`App`] with mapped input and the current time, sleeps
//! until the next input or scheduled trigger, and paints frames.
//!
//! ```no_run
//! use dashframe::demo::{CenteredTextContent, ClockHeader};
//! use dashframe::runner::{Program, ProgramOptions};
//! use dashframe::AppConfig;
//!
//! let config = AppConfig::builder()
//!     .content(CenteredTextContent::new("HELLO"))
//!     .header(ClockHeader::new("Brand", "Hello"))
//!     .build()?;
//!
//! Program::new(dashframe::new_app(config))
//!     .with_options(ProgramOptions { alt_screen: true, mouse_cell_motion: true })
//!     .run()?;
//! # Ok::<(), dashframe::DashError>(())
//! ```

mod input;
mod terminal;

pub use input::map_event;

use crate::app::{Action, App};
use crate::domain::{Event, Result, Timestamp};
use crate::ui::Frame;
use chrono::Local;
use crossterm::{cursor, event, queue, style, terminal as term};
use std::io::{self, Write};
use std::time::Duration;
use terminal::TerminalGuard;

/// Longest sleep between loop iterations when nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Terminal features enabled for the lifetime of a [`Program`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgramOptions {
    /// Draw on the alternate screen and restore the previous contents on exit.
    pub alt_screen: bool,
    /// Report mouse presses, drags and motion.
    pub mouse_cell_motion: bool,
}

/// Drives an [`App`] against the real terminal.
#[derive(Debug)]
pub struct Program {
    app: App,
    options: ProgramOptions,
}

impl Program {
    #[must_use]
    pub fn new(app: App) -> Self {
        Self {
            app,
            options: ProgramOptions::default(),
        }
    }

    #[must_use]
    pub const fn with_options(mut self, options: ProgramOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs until [`Action::Quit`], then restores the terminal and hands the
    /// app back.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Io`](crate::DashError::Io) if the terminal cannot
    /// be set up, read or written.
    pub fn run(mut self) -> Result<App> {
        let _span = tracing::info_span!("run").entered();
        let guard = TerminalGuard::enter(&self.options)?;
        let mut stdout = io::stdout();

        let (width, height) = term::size()?;
        let mut quit = wants_quit(&self.app.init(Local::now()));
        let resize = Event::Resize {
            width: usize::from(width),
            height: usize::from(height),
        };
        let (_, actions) = self.app.handle_event(&resize, Local::now());
        quit |= wants_quit(&actions);
        draw(&mut stdout, &self.app.view())?;

        while !quit {
            let mut should_render = false;

            if event::poll(poll_timeout(self.app.next_wake(), Local::now()))? {
                loop {
                    if let Some(event) = map_event(event::read()?) {
                        if matches!(event, Event::Resize { .. }) {
                            queue!(stdout, term::Clear(term::ClearType::All))?;
                        }
                        let (render, actions) = self.app.handle_event(&event, Local::now());
                        should_render |= render;
                        quit |= wants_quit(&actions);
                    }
                    if quit || !event::poll(Duration::ZERO)? {
                        break;
                    }
                }
            }

            if !quit {
                let (render, actions) = self.app.fire_due(Local::now());
                should_render |= render;
                quit |= wants_quit(&actions);
            }

            if should_render && !quit {
                draw(&mut stdout, &self.app.view())?;
            }
        }

        drop(guard);
        tracing::info!("dashboard stopped");
        Ok(self.app)
    }
}

/// Returns `true` if the actions ask to quit.
fn wants_quit(actions: &[Action]) -> bool {
    actions.iter().any(|action| match action {
        Action::Quit => true,
    })
}

/// Time until `next_wake`, capped at [`IDLE_POLL`]; zero if already due.
fn poll_timeout(next_wake: Option<Timestamp>, now: Timestamp) -> Duration {
    next_wake.map_or(IDLE_POLL, |due| {
        (due - now).to_std().unwrap_or(Duration::ZERO).min(IDLE_POLL)
    })
}

fn draw(out: &mut impl Write, frame: &Frame) -> io::Result<()> {
    for (row, line) in frame.lines.iter().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, cursor::MoveTo(0, row), style::Print(line))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn t0() -> Timestamp {
        Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid time")
    }

    #[test]
    fn poll_timeout_waits_for_the_next_trigger() {
        let now = t0();
        assert_eq!(poll_timeout(None, now), IDLE_POLL);
        assert_eq!(
            poll_timeout(Some(now + TimeDelta::milliseconds(100)), now),
            Duration::from_millis(100)
        );
        assert_eq!(poll_timeout(Some(now + TimeDelta::seconds(5)), now), IDLE_POLL);
        assert_eq!(poll_timeout(Some(now - TimeDelta::seconds(1)), now), Duration::ZERO);
    }

    #[test]
    fn draw_positions_each_row() {
        let frame = Frame {
            mode: crate::LayoutMode::Normal,
            geometry: crate::layout::RegionGeometry::default(),
            lines: vec!["ab".to_string(), "cd".to_string()],
        };
        let mut out = Vec::new();
        draw(&mut out, &frame).expect("draw to buffer");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("\u{1b}[1;1Hab"));
        assert!(text.contains("\u{1b}[2;1Hcd"));
    }
}
