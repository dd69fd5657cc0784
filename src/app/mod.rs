//! Application layer: configuration, root state and the event dispatcher.
//!
//! ```text
//! runner ──Event──▶ App::handle_event ──▶ providers ──FollowUp──▶ Scheduler
//!    ▲                                                               │
//!    └──────── Action / Frame ◀── App::view        App::fire_due ◀───┘
//! ```
//!
//! - [`actions`]: side effects handed back to the runner
//! - [`config`]: [`Settings`] and the provider bundle [`AppConfig`]
//! - [`handler`]: the dispatcher, [`App`]
//! - [`state`]: terminal size, layout mode and sidebar visibility

pub mod actions;
pub mod config;
mod guard;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use config::{AppConfig, AppConfigBuilder, Settings};
pub use handler::{App, REFRESH_TICK_TAG};
pub use state::RootState;
