//! Per-channel series set: the store feeding every live chart.

use std::collections::HashMap;

use crate::channel::Channel;
use crate::sample::SampleBatch;
use crate::series::{RollingSeries, SeriesSnapshot};

/// Mapping from channel to its bounded history.
///
/// Owned explicitly by the dashboard session and passed to the
/// collector and renderer; channels never share storage and are
/// created lazily on first append.
#[derive(Debug, Clone)]
pub struct SeriesSet {
    series: HashMap<Channel, RollingSeries>,
    capacity: usize,
}

impl SeriesSet {
    /// Create an empty set whose channels are bounded at `capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            series: HashMap::new(),
            capacity,
        }
    }

    /// Append one sample to a channel.
    ///
    /// The channel's series is created on first use. Non-finite values
    /// are skipped by the underlying series.
    pub fn append(&mut self, channel: Channel, label: impl Into<String>, value: f64) {
        self.series
            .entry(channel)
            .or_insert_with(|| RollingSeries::new(self.capacity))
            .push(label, value);
    }

    /// Apply one tick's readings in a single pass.
    ///
    /// Channels without a reading are skipped for this tick; every
    /// present reading is appended under the same tick label.
    pub fn on_sample(&mut self, batch: &SampleBatch, label: &str) {
        for (channel, reading) in batch.iter() {
            if let Some(value) = reading {
                self.append(channel, label, value);
            }
        }
    }

    /// Ordered copy of a channel's window for rendering.
    ///
    /// An unknown channel yields an empty snapshot; reading never
    /// mutates the set.
    #[must_use]
    pub fn snapshot(&self, channel: Channel) -> SeriesSnapshot {
        self.series
            .get(&channel)
            .map(RollingSeries::snapshot)
            .unwrap_or_default()
    }

    /// Borrow a channel's series, if it has ever been appended to.
    #[must_use]
    pub fn series(&self, channel: Channel) -> Option<&RollingSeries> {
        self.series.get(&channel)
    }

    /// The most recent value on a channel, if any.
    #[must_use]
    pub fn latest(&self, channel: Channel) -> Option<f64> {
        self.series
            .get(&channel)?
            .latest()
            .map(|point| point.value)
    }

    /// Window capacity applied to every channel.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for SeriesSet {
    fn default() -> Self {
        Self::new(crate::constants::WINDOW_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_channel_snapshot_is_empty() {
        let set = SeriesSet::new(20);
        assert!(set.snapshot(Channel::Cpu).is_empty());
        assert!(set.series(Channel::Cpu).is_none());
    }

    #[test]
    fn append_creates_channel_lazily() {
        let mut set = SeriesSet::new(20);
        set.append(Channel::Cpu, "t0", 55.0);
        let snap = set.snapshot(Channel::Cpu);
        assert_eq!(snap.len(), 1);
        assert_eq!(snap.values, vec![55.0]);
    }

    #[test]
    fn channels_are_independent() {
        let mut set = SeriesSet::new(20);
        set.append(Channel::Cpu, "t0", 10.0);
        set.append(Channel::Cpu, "t1", 20.0);
        set.append(Channel::Memory, "t0", 70.0);

        assert_eq!(set.snapshot(Channel::Cpu).len(), 2);
        assert_eq!(set.snapshot(Channel::Memory).values, vec![70.0]);
        assert!(set.snapshot(Channel::Disk).is_empty());
    }

    #[test]
    fn window_bound_per_channel() {
        let mut set = SeriesSet::new(20);
        for i in 0..25 {
            set.append(Channel::Cpu, format!("t{i}"), f64::from(i));
        }
        let snap = set.snapshot(Channel::Cpu);
        assert_eq!(snap.len(), 20);
        assert_eq!(snap.values[0], 5.0);
        assert_eq!(snap.values[19], 24.0);
    }

    #[test]
    fn on_sample_skips_absent_readings() {
        let mut set = SeriesSet::new(20);
        let batch = SampleBatch {
            cpu: Some(33.0),
            memory: None,
            load: Some(1.25),
            ..SampleBatch::default()
        };
        set.on_sample(&batch, "00:05");

        assert_eq!(set.latest(Channel::Cpu), Some(33.0));
        assert_eq!(set.latest(Channel::Load), Some(1.25));
        assert!(set.snapshot(Channel::Memory).is_empty());
        assert_eq!(set.snapshot(Channel::Cpu).labels, vec!["00:05"]);
    }

    #[test]
    fn on_sample_skips_non_finite_readings() {
        let mut set = SeriesSet::new(20);
        let batch = SampleBatch {
            cpu: Some(f64::NAN),
            memory: Some(50.0),
            ..SampleBatch::default()
        };
        set.on_sample(&batch, "00:05");
        assert!(set.snapshot(Channel::Cpu).is_empty());
        assert_eq!(set.latest(Channel::Memory), Some(50.0));
    }

    #[test]
    fn snapshot_does_not_mutate() {
        let mut set = SeriesSet::new(20);
        set.append(Channel::Cpu, "t0", 1.0);
        let first = set.snapshot(Channel::Cpu);
        let second = set.snapshot(Channel::Cpu);
        assert_eq!(first, second);
        assert_eq!(set.snapshot(Channel::Cpu).len(), 1);
    }

    #[test]
    fn default_uses_window_capacity() {
        let set = SeriesSet::default();
        assert_eq!(set.capacity(), crate::constants::WINDOW_CAPACITY);
    }
}
