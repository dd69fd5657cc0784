//! Subscriber setup.

use super::file_writer::RotatingFile;
use crate::app::Settings;
use crate::infrastructure::paths;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "dashframe.log";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber writing to `<data_dir>/dashframe.log`.
///
/// Returns the log path, or `None` if logging could not be set up: the data
/// directory could not be created, or a global subscriber already exists.
/// Both cases are silent; observability is optional.
pub fn init_tracing(settings: &Settings) -> Option<PathBuf> {
    let data_dir = paths::data_dir();
    std::fs::create_dir_all(&data_dir).ok()?;
    let log_path = data_dir.join(LOG_FILE);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(settings.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL))
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(RotatingFile::new(log_path.clone()))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(log_path)
}
