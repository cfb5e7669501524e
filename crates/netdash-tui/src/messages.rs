//! Messages driving the dashboard update cycle (Elm Messages).

use netdash_collector::CollectorEvent;
use netdash_core::{Alert, DeviceReport, SampleBatch};

/// Messages that drive the dashboard update cycle.
#[derive(Debug, Clone)]
pub enum DashMessage {
    /// One tick of system metrics with its tick label.
    Metrics { batch: SampleBatch, label: String },
    /// Fresh device probe results.
    Devices(Vec<DeviceReport>),
    /// An alert raised by the collector.
    Alert(Alert),
    /// Log line for the log panel.
    Log(String),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Key press forwarded from the event loop.
    KeyPress(crate::keymap::KeyAction),
    /// Quit the application.
    Quit,
}

impl From<CollectorEvent> for DashMessage {
    fn from(event: CollectorEvent) -> Self {
        match event {
            CollectorEvent::Metrics { batch, label } => DashMessage::Metrics { batch, label },
            CollectorEvent::Devices(reports) => DashMessage::Devices(reports),
            CollectorEvent::Alert(alert) => DashMessage::Alert(alert),
        }
    }
}
