//! Named metric streams fed into the series store.

use std::fmt;

/// A metric channel with its own bounded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Average CPU usage across all cores, percent.
    Cpu,
    /// Used physical memory, percent.
    Memory,
    /// Used disk space on the root mount, percent.
    Disk,
    /// Inbound network traffic, KiB per tick.
    NetworkIn,
    /// Outbound network traffic, KiB per tick.
    NetworkOut,
    /// One-minute load average.
    Load,
}

impl Channel {
    /// All channels, in display order.
    pub const ALL: [Channel; 6] = [
        Channel::Cpu,
        Channel::Memory,
        Channel::Disk,
        Channel::NetworkIn,
        Channel::NetworkOut,
        Channel::Load,
    ];

    /// Stable identifier, matching the metric payload keys.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Cpu => "cpu",
            Channel::Memory => "memory",
            Channel::Disk => "disk",
            Channel::NetworkIn => "network_in",
            Channel::NetworkOut => "network_out",
            Channel::Load => "load",
        }
    }

    /// Human-readable panel title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Channel::Cpu => "CPU %",
            Channel::Memory => "Memory %",
            Channel::Disk => "Disk %",
            Channel::NetworkIn => "Net In (KiB)",
            Channel::NetworkOut => "Net Out (KiB)",
            Channel::Load => "Load Avg",
        }
    }

    /// Whether values on this channel are percentages in [0, 100].
    #[must_use]
    pub fn is_percentage(self) -> bool {
        matches!(self, Channel::Cpu | Channel::Memory | Channel::Disk)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
