//! Error taxonomy and the diagnostic channel.
//!
//! Every boundary failure is terminal-local: it is logged and the session
//! carries on (or stays closed). The overlay has no error-display surface,
//! so nothing here ever reaches the UI.

use thiserror::Error;
use tracing::{error, warn};

use crate::broker::BrokerError;

/// Boundary failures, tagged with the operation that was in flight.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// Initial enumeration failed; the overlay degrades to an empty list.
    #[error("tab enumeration failed: {0}")]
    Fetch(#[source] BrokerError),

    /// The target tab vanished or its window could not be focused; no state
    /// change, the user can retry or pick another item.
    #[error("tab activation failed: {0}")]
    Activate(#[source] BrokerError),

    /// Best-effort closure failed after the local state was already updated.
    #[error("tab close failed: {0}")]
    Close(#[source] BrokerError),
}

/// Extension trait for routing recoverable failures to the diagnostic
/// channel with caller location.
pub trait ResultExt<T> {
    /// Log at error level and return `None`. Use for failures that degrade
    /// behavior.
    fn log_err(self) -> Option<T>;
    /// Log at warn level and return `None`. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = %e,
                    file = caller.file(),
                    line = caller.line(),
                    "operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = %e,
                    file = caller.file(),
                    line = caller.line(),
                    "operation had warning"
                );
                None
            }
        }
    }
}
