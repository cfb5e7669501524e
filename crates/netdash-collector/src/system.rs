//! System metrics sampling via sysinfo.

use netdash_core::SampleBatch;
use sysinfo::{Disks, Networks, System};

/// Samples CPU, memory, disk, network, and load on each tick.
///
/// Network readings are per-tick deltas (KiB received/transmitted since
/// the previous refresh). CPU usage needs two refreshes before sysinfo
/// reports a meaningful value, so the first tick typically reads 0.
pub struct SystemSampler {
    system: System,
    networks: Networks,
    disks: Disks,
}

impl SystemSampler {
    /// Create a sampler with freshly enumerated networks and disks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            system: System::new(),
            networks: Networks::new_with_refreshed_list(),
            disks: Disks::new_with_refreshed_list(),
        }
    }

    /// Refresh and read all channels for one tick.
    pub fn sample(&mut self) -> SampleBatch {
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();
        self.networks.refresh();
        self.disks.refresh();

        SampleBatch {
            cpu: self.cpu_percent(),
            memory: self.memory_percent(),
            disk: self.disk_percent(),
            network_in: Some(self.network_kib(NetDirection::In)),
            network_out: Some(self.network_kib(NetDirection::Out)),
            load: Some(System::load_average().one),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn cpu_percent(&self) -> Option<f64> {
        let cpus = self.system.cpus();
        if cpus.is_empty() {
            return None;
        }
        let total: f64 = cpus.iter().map(|c| f64::from(c.cpu_usage())).sum();
        Some(total / cpus.len() as f64)
    }

    #[allow(clippy::cast_precision_loss)]
    fn memory_percent(&self) -> Option<f64> {
        let total = self.system.total_memory();
        if total == 0 {
            return None;
        }
        Some(self.system.used_memory() as f64 / total as f64 * 100.0)
    }

    #[allow(clippy::cast_precision_loss)]
    fn disk_percent(&self) -> Option<f64> {
        // Prefer the root mount, fall back to the first disk.
        let disk = self
            .disks
            .iter()
            .find(|d| d.mount_point() == std::path::Path::new("/"))
            .or_else(|| self.disks.iter().next())?;
        let total = disk.total_space();
        if total == 0 {
            return None;
        }
        let used = total.saturating_sub(disk.available_space());
        Some(used as f64 / total as f64 * 100.0)
    }

    #[allow(clippy::cast_precision_loss)]
    fn network_kib(&self, direction: NetDirection) -> f64 {
        let bytes: u64 = self
            .networks
            .iter()
            .map(|(_, data)| match direction {
                NetDirection::In => data.received(),
                NetDirection::Out => data.transmitted(),
            })
            .sum();
        bytes as f64 / 1024.0
    }
}

impl Default for SystemSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
enum NetDirection {
    In,
    Out,
}
