//! Sample providers.
//!
//! These show the provider contracts in use and power the demo binary. They
//! are ordinary consumers of the public API; nothing in the framework depends
//! on them.

mod content;
mod header;
mod servers;
mod status;
mod tasks;

pub use content::CenteredTextContent;
pub use header::ClockHeader;
pub use servers::ServersSection;
pub use status::StatusSection;
pub use tasks::{Task, TaskState, TasksSection};
