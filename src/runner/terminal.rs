//! Terminal setup and guaranteed restore.

use super::ProgramOptions;
use crossterm::{cursor, event, execute, terminal};
use std::fmt;
use std::io::{self, Write};
use std::panic;

/// Sends panic messages to the log until dropped, then puts back whichever
/// hook was installed before.
pub(crate) struct PanicHookGuard {
    restore: Option<Box<dyn FnOnce() + Send>>,
}

impl PanicHookGuard {
    pub(crate) fn install() -> Self {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|info| {
            tracing::error!(%info, "panic");
        }));
        Self {
            restore: Some(Box::new(move || panic::set_hook(previous))),
        }
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        // The hook cannot be swapped from a panicking thread.
        if std::thread::panicking() {
            return;
        }
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

impl fmt::Debug for PanicHookGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanicHookGuard")
            .field("installed", &self.restore.is_some())
            .finish()
    }
}

/// Puts the terminal into dashboard mode; undoes it on drop, including when
/// the loop exits with an error or a panic unwinds through it.
///
/// While the guard lives, panic messages go to the log instead of the
/// screen, where they would be overdrawn by the next frame.
#[derive(Debug)]
pub(crate) struct TerminalGuard {
    alt_screen: bool,
    mouse: bool,
    panic_hook: Option<PanicHookGuard>,
}

impl TerminalGuard {
    pub(crate) fn enter(options: &ProgramOptions) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut guard = Self {
            alt_screen: false,
            mouse: false,
            panic_hook: None,
        };
        let mut stdout = io::stdout();

        if options.alt_screen {
            execute!(stdout, terminal::EnterAlternateScreen)?;
            guard.alt_screen = true;
        }
        if options.mouse_cell_motion {
            execute!(stdout, event::EnableMouseCapture)?;
            guard.mouse = true;
        }
        execute!(stdout, cursor::Hide, terminal::Clear(terminal::ClearType::All))?;

        guard.panic_hook = Some(PanicHookGuard::install());
        tracing::info!(alt_screen = guard.alt_screen, mouse = guard.mouse, "terminal ready");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        if self.alt_screen {
            let _ = execute!(stdout, terminal::LeaveAlternateScreen);
        }
        let _ = execute!(stdout, cursor::Show);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
        tracing::info!("terminal restored");
        self.panic_hook = None;
    }
}
