//! # netdash-collector
//!
//! Produces the samples the dashboard consumes: a sysinfo-based system
//! sampler, TCP device probes, alert evaluation on status transitions,
//! and the background tick loop that feeds the TUI over a channel.

pub mod alerts;
pub mod collector;
pub mod devices;
pub mod events;
pub mod probe;
pub mod system;

pub use alerts::AlertEngine;
pub use collector::{tick_label, Collector};
pub use devices::load_devices;
pub use events::CollectorEvent;
pub use probe::probe_device;
pub use system::SystemSampler;
