//! Background collector loop.

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;

use netdash_core::{CancellationToken, Device};

use crate::alerts::AlertEngine;
use crate::events::CollectorEvent;
use crate::probe::probe_all;
use crate::system::SystemSampler;

/// Granularity at which the sleep between ticks checks for cancellation.
const CANCEL_POLL: Duration = Duration::from_millis(100);

/// Periodic collector feeding the dashboard channel.
///
/// One logical writer: samples and probe results are sent in the order
/// they are taken, so the receiver always observes a prefix of all
/// updates.
pub struct Collector {
    interval: Duration,
    devices: Vec<Device>,
}

impl Collector {
    /// Create a collector polling at `interval`.
    #[must_use]
    pub fn new(interval: Duration, devices: Vec<Device>) -> Self {
        Self { interval, devices }
    }

    /// Spawn the tick loop on a background thread.
    ///
    /// The loop stops when the token is cancelled or the receiver is
    /// dropped.
    pub fn spawn(
        self,
        tx: Sender<CollectorEvent>,
        cancel: CancellationToken,
    ) -> std::io::Result<thread::JoinHandle<()>> {
        thread::Builder::new()
            .name("netdash-collector".to_string())
            .spawn(move || self.run(&tx, &cancel))
    }

    fn run(self, tx: &Sender<CollectorEvent>, cancel: &CancellationToken) {
        let started = Instant::now();
        let mut sampler = SystemSampler::new();
        let mut alerts = AlertEngine::new();

        tracing::info!(
            interval_ms = u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX),
            devices = self.devices.len(),
            "collector started"
        );

        while !cancel.is_cancelled() {
            let label = tick_label(started.elapsed());

            let batch = sampler.sample();
            if tx
                .send(CollectorEvent::Metrics {
                    batch,
                    label: label.clone(),
                })
                .is_err()
            {
                break;
            }

            if !self.devices.is_empty() {
                let reports = probe_all(&self.devices);
                for alert in alerts.evaluate(&reports, &label) {
                    let _ = tx.send(CollectorEvent::Alert(alert));
                }
                if tx.send(CollectorEvent::Devices(reports)).is_err() {
                    break;
                }
            }

            if !sleep_until_next_tick(self.interval, cancel) {
                break;
            }
        }

        tracing::info!("collector stopped");
    }
}

/// Sleep for one interval, waking early on cancellation.
///
/// Returns false when cancelled.
fn sleep_until_next_tick(interval: Duration, cancel: &CancellationToken) -> bool {
    let deadline = Instant::now() + interval;
    while Instant::now() < deadline {
        if cancel.is_cancelled() {
            return false;
        }
        thread::sleep(CANCEL_POLL.min(deadline.saturating_duration_since(Instant::now())));
    }
    !cancel.is_cancelled()
}

/// Format elapsed session time as a `mm:ss` tick label.
#[must_use]
pub fn tick_label(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
