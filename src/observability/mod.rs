//! Structured logging to a rotating file.
//!
//! The dashboard owns the terminal, so nothing may be printed to stdout or
//! stderr while it runs. Events from `tracing` go through a plain-text `fmt`
//! layer into `<data_dir>/dashframe.log` instead:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFile → dashframe.log{,.1,.2,.3}
//! ```
//!
//! # Level
//!
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the settings file
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```no_run
//! use dashframe::observability::init_tracing;
//! use dashframe::Settings;
//!
//! if let Some(path) = init_tracing(&Settings::default()) {
//!     tracing::info!(log = %path.display(), "logging ready");
//! }
//! ```

mod file_writer;
mod init;

pub use file_writer::{RotatingFile, RotatingWriter, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::{init_tracing, LOG_FILE};
