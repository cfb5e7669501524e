//! Constants for window sizing, polling cadence, and exit codes.

use std::time::Duration;

/// Default number of samples retained per channel for the live charts.
pub const WINDOW_CAPACITY: usize = 20;

/// Default interval between collector ticks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Timeout for a single device probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Response time (ms) at or above which a reachable device is degraded.
pub const DEGRADED_RESPONSE_MS: u64 = 100;

/// Exit codes for the netdash binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Interrupted by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
