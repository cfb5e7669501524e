//! Cooperative cancellation for the collector loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::DashError;

/// Cooperative cancellation token backed by an atomic flag.
///
/// Cloned freely across threads; the Ctrl+C handler and the TUI both
/// hold a clone and the collector polls it between ticks.
///
/// # Example
/// ```
/// use netdash_core::cancel::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check().is_err());
/// ```
#[derive(Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new, un-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Error if cancellation has been requested.
    pub fn check(&self) -> Result<(), DashError> {
        if self.is_cancelled() {
            Err(DashError::Interrupted)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
