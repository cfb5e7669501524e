//! Alerts raised from device status transitions.

use std::fmt;

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// An alert shown in the dashboard's alert panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub severity: Severity,
    pub message: String,
    /// Device the alert concerns.
    pub device: String,
    /// Session tick label at which the alert was raised.
    pub raised_at: String,
}

impl Alert {
    /// Create a new alert.
    #[must_use]
    pub fn new(
        severity: Severity,
        device: impl Into<String>,
        message: impl Into<String>,
        raised_at: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            device: device.into(),
            raised_at: raised_at.into(),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}: {}",
            self.severity.to_string().to_uppercase(),
            self.raised_at,
            self.device,
            self.message
        )
    }
}
