//! Monitored devices and their probe results.

use std::fmt;

use serde::Deserialize;

use crate::constants::DEGRADED_RESPONSE_MS;

/// A device to probe, as configured by the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Device {
    /// Display name.
    pub name: String,
    /// Hostname or IP address.
    pub host: String,
    /// TCP port to probe.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Tags for grouping.
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_port() -> u16 {
    22
}

/// Health classification of a probed device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceStatus {
    /// Reachable with a fast response.
    Healthy,
    /// Reachable but slower than the degraded threshold.
    Degraded,
    /// Unreachable.
    Down,
    /// Not probed yet.
    Unknown,
}

impl DeviceStatus {
    /// Classify a probe outcome by response time.
    #[must_use]
    pub fn from_response(response_ms: Option<u64>) -> Self {
        match response_ms {
            Some(ms) if ms < DEGRADED_RESPONSE_MS => DeviceStatus::Healthy,
            Some(_) => DeviceStatus::Degraded,
            None => DeviceStatus::Down,
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeviceStatus::Healthy => "healthy",
            DeviceStatus::Degraded => "degraded",
            DeviceStatus::Down => "down",
            DeviceStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Result of probing one device on one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceReport {
    /// Device display name.
    pub name: String,
    /// `host:port` probed.
    pub endpoint: String,
    /// Classified status.
    pub status: DeviceStatus,
    /// Round-trip time in milliseconds, when reachable.
    pub response_ms: Option<u64>,
}

impl DeviceReport {
    /// Build a report from a probe outcome.
    #[must_use]
    pub fn new(device: &Device, response_ms: Option<u64>) -> Self {
        Self {
            name: device.name.clone(),
            endpoint: format!("{}:{}", device.host, device.port),
            status: DeviceStatus::from_response(response_ms),
            response_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str) -> Device {
        Device {
            name: name.to_string(),
            host: "192.168.1.10".to_string(),
            port: 22,
            description: String::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn fast_response_is_healthy() {
        assert_eq!(DeviceStatus::from_response(Some(10)), DeviceStatus::Healthy);
        assert_eq!(DeviceStatus::from_response(Some(99)), DeviceStatus::Healthy);
    }

    #[test]
    fn slow_response_is_degraded() {
        assert_eq!(
            DeviceStatus::from_response(Some(100)),
            DeviceStatus::Degraded
        );
        assert_eq!(
            DeviceStatus::from_response(Some(1500)),
            DeviceStatus::Degraded
        );
    }

    #[test]
    fn no_response_is_down() {
        assert_eq!(DeviceStatus::from_response(None), DeviceStatus::Down);
    }

    #[test]
    fn report_endpoint_formats_host_port() {
        let report = DeviceReport::new(&device("Web Server 01"), Some(12));
        assert_eq!(report.endpoint, "192.168.1.10:22");
        assert_eq!(report.status, DeviceStatus::Healthy);
        assert_eq!(report.response_ms, Some(12));
    }

    #[test]
    fn device_deserializes_with_defaults() {
        let json = r#"{"name": "Router", "host": "10.0.0.1"}"#;
        let dev: Device = serde_json::from_str(json).unwrap();
        assert_eq!(dev.port, 22);
        assert!(dev.tags.is_empty());
        assert!(dev.description.is_empty());
    }

    #[test]
    fn device_deserializes_full() {
        let json = r#"{
            "name": "Load Balancer",
            "host": "192.168.1.5",
            "port": 80,
            "description": "HAProxy load balancer",
            "tags": ["network", "loadbalancer"]
        }"#;
        let dev: Device = serde_json::from_str(json).unwrap();
        assert_eq!(dev.port, 80);
        assert_eq!(dev.tags, vec!["network", "loadbalancer"]);
    }

    #[test]
    fn status_display() {
        assert_eq!(DeviceStatus::Healthy.to_string(), "healthy");
        assert_eq!(DeviceStatus::Down.to_string(), "down");
        assert_eq!(DeviceStatus::Unknown.to_string(), "unknown");
    }
}
