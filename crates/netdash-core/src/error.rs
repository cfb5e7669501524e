//! Shared error type for the netdash crates.

use thiserror::Error;

/// Errors surfaced by the dashboard components.
#[derive(Debug, Error)]
pub enum DashError {
    /// Invalid configuration (flags, device file contents).
    #[error("configuration error: {0}")]
    Config(String),

    /// Device file could not be read.
    #[error("failed to read device file {path}: {source}")]
    DeviceFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Device file could not be parsed.
    #[error("failed to parse device file {path}: {source}")]
    DeviceFileFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Session interrupted by the user.
    #[error("interrupted")]
    Interrupted,
}
