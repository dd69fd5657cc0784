//! Error types for the dashframe framework.
//!
//! This module defines the centralized error type [`DashError`] and a type alias
//! [`Result`]. Errors only surface at the edges of the framework: while building
//! an [`AppConfig`](crate::app::AppConfig), loading settings or themes, and in
//! the terminal runner. Once the event loop is running, provider faults degrade
//! to empty regions instead of errors.

use thiserror::Error;

/// The main error type for dashframe operations.
///
/// # Examples
///
/// ```
/// use dashframe::DashError;
///
/// fn validate() -> Result<(), DashError> {
///     Err(DashError::Config("sidebar_width must be positive".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum DashError {
    /// A required provider was not supplied to the config builder.
    ///
    /// The only error class that aborts startup. The string names the missing
    /// role (`"content"` or `"header"`).
    #[error("Missing required provider: {0}")]
    MissingProvider(&'static str),

    /// Settings are invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Terminal or filesystem I/O failed.
    ///
    /// Automatically converts from `std::io::Error` using `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for dashframe operations.
pub type Result<T> = std::result::Result<T, DashError>;
