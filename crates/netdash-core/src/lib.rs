//! # netdash-core
//!
//! Core data model for the NetDash monitoring dashboard: the bounded
//! rolling-window series store that backs the live charts, plus the
//! channel, sample, device, and alert types shared by the collector
//! and the TUI.

pub mod alert;
pub mod cancel;
pub mod channel;
pub mod constants;
pub mod device;
pub mod error;
pub mod sample;
pub mod series;
pub mod store;

// Re-exports
pub use alert::{Alert, Severity};
pub use cancel::CancellationToken;
pub use channel::Channel;
pub use constants::{exit_codes, DEFAULT_POLL_INTERVAL, WINDOW_CAPACITY};
pub use device::{Device, DeviceReport, DeviceStatus};
pub use error::DashError;
pub use sample::SampleBatch;
pub use series::{RollingSeries, SamplePoint, SeriesSnapshot};
pub use store::SeriesSet;
