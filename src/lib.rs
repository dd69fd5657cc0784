//! Dashframe: a pluggable terminal dashboard framework.
//!
//! A host application supplies providers for three regions and the framework
//! does the rest:
//! - a **content** pane, the main view
//! - a **header** bar with brand, app name and status fields
//! - any number of **sidebar sections**, each a titled list of items
//!
//! The framework owns layout, the responsive Normal/Compact switch, styling,
//! event routing and timed follow-ups that keep provider output current.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Runner (runner/)                                   │  ← crossterm, clock
//! └─────────────────────────────────────────────────────┘
//!                        │ Event, now
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← dispatcher
//! │  - Event routing and follow-up arming               │
//! │  - Root layout state                                │
//! │  - Settings and provider bundle                     │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Providers     │   │ Layout        │   │ Scheduler     │
//! │ (providers/)  │   │ (layout/)     │   │ (scheduler)   │
//! │ - Contracts   │   │ - Modes       │   │ - Due queue   │
//! │ - Host impls  │   │ - Regions     │   │ - Targets     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI Layer (ui/)                                     │  ← Frame composition
//! │  - Themes, styler, escape-aware text                │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, Observability              │
//! │  - Events, keys, items, errors (domain/)            │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Rotating log file (observability/)               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: the dispatcher [`App`], [`Settings`] and [`AppConfig`]
//! - [`providers`]: the three capability contracts
//! - [`layout`]: layout modes and region geometry
//! - [`scheduler`]: timed follow-up queue
//! - [`ui`]: frame composition, themes and styling
//! - [`domain`]: events, keys, status data, items and errors
//! - [`runner`]: the crossterm event loop
//! - [`demo`]: sample providers used by the binary
//! - [`infrastructure`]: config and data directories
//! - [`observability`]: tracing to a rotating log file
//!
//! # Configuration
//!
//! Non-provider options come from `~/.config/dashframe/config.toml`:
//!
//! ```toml
//! compact_width_breakpoint = 100
//! compact_height_breakpoint = 25
//! sidebar_toggle_key = "ctrl+b"
//! theme = "catppuccin-mocha"
//! trace_level = "info"
//! ```
//!
//! # Example
//!
//! ```
//! use chrono::Local;
//! use dashframe::demo::{CenteredTextContent, ClockHeader, ServersSection, TasksSection};
//! use dashframe::{AppConfig, Event, Key, LayoutMode, PlainStyler};
//!
//! let config = AppConfig::builder()
//!     .content(CenteredTextContent::new("CUSTOM APP"))
//!     .header(ClockHeader::new("MyApp™", "Custom App"))
//!     .section(TasksSection::new())
//!     .section(ServersSection::new())
//!     .compact_breakpoints(100, 25)
//!     .build()?;
//!
//! let mut app = dashframe::App::with_styler(config, PlainStyler);
//! let now = Local::now();
//! app.init(now);
//!
//! app.handle_event(&Event::Resize { width: 80, height: 20 }, now);
//! assert_eq!(app.layout_mode(), LayoutMode::Compact);
//! assert!(!app.view().contains("Tasks"));
//!
//! app.handle_event(&Event::Resize { width: 120, height: 40 }, now);
//! assert!(app.view().contains("Tasks"));
//!
//! app.handle_event(&Event::Key(Key::Ctrl('b')), now);
//! assert!(!app.sidebar_visible());
//! # Ok::<(), dashframe::DashError>(())
//! ```

pub mod app;
pub mod demo;
pub mod domain;
pub mod infrastructure;
pub mod layout;
pub mod observability;
pub mod providers;
pub mod runner;
pub mod scheduler;
pub mod ui;

pub use app::{Action, App, AppConfig, AppConfigBuilder, Settings};
pub use domain::{
    DashError, Event, FollowUp, ItemStatus, Key, Mouse, MouseKind, Result, SidebarItem,
    StatusData, StatusValue, Tick, Timestamp, DEFAULT_TICK_TAG,
};
pub use layout::{LayoutMode, Rect, RegionGeometry};
pub use providers::{ContentProvider, HeaderDataProvider, SidebarSection};
pub use ui::{Frame, PlainStyler, Styler, TextStyle, Theme};

/// Creates a dashboard from a finished config, styled by the configured theme.
///
/// Equivalent to [`App::new`]; provided as the crate's front door.
#[must_use]
pub fn new_app(config: AppConfig) -> App {
    App::new(config)
}
