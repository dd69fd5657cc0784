//! Fault isolation around provider calls.
//!
//! A provider that panics must not take the dashboard down. Each call is run
//! under `catch_unwind`; a panic is logged and the caller falls back to an
//! empty result for that region.

use std::panic::{self, AssertUnwindSafe};

/// Runs `f`, returning `None` if it panicked.
///
/// `region` names the provider role for the log line.
pub(crate) fn isolate<T>(region: &str, call: &str, f: impl FnOnce() -> T) -> Option<T> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Some(value),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            tracing::error!(region, call, %message, "provider panicked, region degraded");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_values_through() {
        assert_eq!(isolate("content", "render", || 7), Some(7));
    }

    #[test]
    fn contains_panics() {
        let result: Option<u8> = isolate("header", "status_data", || panic!("boom"));
        assert_eq!(result, None);
    }
}
