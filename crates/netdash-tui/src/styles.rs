//! Styles and color mapping for statuses and severities.

use netdash_core::{DeviceStatus, Severity};
use ratatui::style::{Color, Modifier, Style};

/// Color theme for the dashboard.
pub struct ColorTheme {
    pub primary: Color,
    pub healthy: Color,
    pub degraded: Color,
    pub down: Color,
    pub unknown: Color,
    pub muted: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            healthy: Color::Green,
            degraded: Color::Yellow,
            down: Color::Red,
            unknown: Color::DarkGray,
            muted: Color::DarkGray,
        }
    }
}

impl ColorTheme {
    /// Style for a device status cell.
    #[must_use]
    pub fn status_style(&self, status: DeviceStatus) -> Style {
        let color = match status {
            DeviceStatus::Healthy => self.healthy,
            DeviceStatus::Degraded => self.degraded,
            DeviceStatus::Down => self.down,
            DeviceStatus::Unknown => self.unknown,
        };
        Style::default().fg(color)
    }

    /// Style for an alert line.
    #[must_use]
    pub fn severity_style(&self, severity: Severity) -> Style {
        match severity {
            Severity::Critical => Style::default().fg(self.down).add_modifier(Modifier::BOLD),
            Severity::Warning => Style::default().fg(self.degraded),
            Severity::Info => Style::default().fg(self.healthy),
        }
    }

    /// Style for the header title.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted chrome (borders, hints).
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
