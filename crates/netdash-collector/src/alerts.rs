//! Alert evaluation on device status transitions.

use std::collections::HashMap;

use netdash_core::{Alert, DeviceReport, DeviceStatus, Severity};

/// Raises alerts when a device's status changes between ticks.
///
/// An alert fires only on a transition, so an unchanged degraded or
/// down device does not re-alert every tick. Recovery back to healthy
/// raises an informational alert, except on the very first probe.
#[derive(Debug, Default)]
pub struct AlertEngine {
    last_status: HashMap<String, DeviceStatus>,
}

impl AlertEngine {
    /// Create an engine with no device history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare reports against the previous tick and emit alerts for
    /// every transition.
    pub fn evaluate(&mut self, reports: &[DeviceReport], tick: &str) -> Vec<Alert> {
        let mut alerts = Vec::new();
        for report in reports {
            let previous = self
                .last_status
                .insert(report.name.clone(), report.status)
                .unwrap_or(DeviceStatus::Unknown);
            if previous == report.status {
                continue;
            }
            if let Some(alert) = Self::transition_alert(report, previous, tick) {
                tracing::info!(device = %report.name, status = %report.status, "raising alert");
                alerts.push(alert);
            }
        }
        alerts
    }

    fn transition_alert(
        report: &DeviceReport,
        previous: DeviceStatus,
        tick: &str,
    ) -> Option<Alert> {
        match report.status {
            DeviceStatus::Down => Some(Alert::new(
                Severity::Critical,
                &report.name,
                "is unreachable",
                tick,
            )),
            DeviceStatus::Degraded => Some(Alert::new(
                Severity::Warning,
                &report.name,
                format!(
                    "response time above threshold ({} ms)",
                    report.response_ms.unwrap_or(0)
                ),
                tick,
            )),
            DeviceStatus::Healthy if previous != DeviceStatus::Unknown => Some(Alert::new(
                Severity::Info,
                &report.name,
                "recovered",
                tick,
            )),
            DeviceStatus::Healthy | DeviceStatus::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &str, status: DeviceStatus, response_ms: Option<u64>) -> DeviceReport {
        DeviceReport {
            name: name.to_string(),
            endpoint: "10.0.0.1:22".to_string(),
            status,
            response_ms,
        }
    }

    #[test]
    fn first_healthy_probe_is_silent() {
        let mut engine = AlertEngine::new();
        let alerts = engine.evaluate(&[report("web", DeviceStatus::Healthy, Some(10))], "00:05");
        assert!(alerts.is_empty());
    }

    #[test]
    fn first_down_probe_alerts() {
        let mut engine = AlertEngine::new();
        let alerts = engine.evaluate(&[report("backup", DeviceStatus::Down, None)], "00:05");
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, Severity::Critical);
        assert_eq!(alerts[0].device, "backup");
    }

    #[test]
    fn unchanged_status_does_not_realert() {
        let mut engine = AlertEngine::new();
        let down = [report("backup", DeviceStatus::Down, None)];
        assert_eq!(engine.evaluate(&down, "00:05").len(), 1);
        assert!(engine.evaluate(&down, "00:10").is_empty());
        assert!(engine.evaluate(&down, "00:15").is_empty());
    }

    #[test]
    fn degradation_then_recovery() {
        let mut engine = AlertEngine::new();
        engine.evaluate(&[report("lb", DeviceStatus::Healthy, Some(20))], "00:05");

        let degraded = engine.evaluate(&[report("lb", DeviceStatus::Degraded, Some(150))], "00:10");
        assert_eq!(degraded.len(), 1);
        assert_eq!(degraded[0].severity, Severity::Warning);
        assert!(degraded[0].message.contains("150 ms"));

        let recovered = engine.evaluate(&[report("lb", DeviceStatus::Healthy, Some(15))], "00:15");
        assert_eq!(recovered.len(), 1);
        assert_eq!(recovered[0].severity, Severity::Info);
    }

    #[test]
    fn devices_are_tracked_independently() {
        let mut engine = AlertEngine::new();
        let alerts = engine.evaluate(
            &[
                report("web", DeviceStatus::Healthy, Some(10)),
                report("backup", DeviceStatus::Down, None),
            ],
            "00:05",
        );
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].device, "backup");
    }
}
