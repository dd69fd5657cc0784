//! Domain layer for dashframe.
//!
//! Plain value types shared by providers, the dispatcher and the runner,
//! independent of any terminal backend.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`event`]: Events, ticks and mouse input
//! - [`key`]: Backend-independent keys
//! - [`followup`]: Scheduling requests returned by providers
//! - [`item`]: Sidebar rows and statuses
//! - [`status`]: Header status values

pub mod error;
pub mod event;
pub mod followup;
pub mod item;
pub mod key;
pub mod status;

pub use error::{DashError, Result};
pub use event::{Event, Mouse, MouseKind, Tick, Timestamp, DEFAULT_TICK_TAG};
pub use followup::FollowUp;
pub use item::{ItemStatus, SidebarItem};
pub use key::Key;
pub use status::{StatusData, StatusValue};
