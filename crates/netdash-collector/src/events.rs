//! Events flowing from the collector to the dashboard.

use netdash_core::{Alert, DeviceReport, SampleBatch};

/// One message from the collector thread.
#[derive(Debug, Clone)]
pub enum CollectorEvent {
    /// One tick of system metrics, with its tick label.
    Metrics { batch: SampleBatch, label: String },
    /// Fresh probe results for all configured devices.
    Devices(Vec<DeviceReport>),
    /// An alert raised on a device status transition.
    Alert(Alert),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_variants() {
        let event = CollectorEvent::Metrics {
            batch: SampleBatch::default(),
            label: "00:05".to_string(),
        };
        assert!(matches!(event, CollectorEvent::Metrics { .. }));

        let event = CollectorEvent::Devices(Vec::new());
        assert!(matches!(event, CollectorEvent::Devices(_)));
    }
}
