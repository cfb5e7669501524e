//! One collector tick's worth of per-channel readings.

use crate::channel::Channel;

/// Per-channel readings produced by one collector tick.
///
/// A `None` means the platform could not provide that metric on this
/// tick; downstream consumers skip it rather than record a gap.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SampleBatch {
    pub cpu: Option<f64>,
    pub memory: Option<f64>,
    pub disk: Option<f64>,
    pub network_in: Option<f64>,
    pub network_out: Option<f64>,
    pub load: Option<f64>,
}

impl SampleBatch {
    /// Reading for a given channel.
    #[must_use]
    pub fn get(&self, channel: Channel) -> Option<f64> {
        match channel {
            Channel::Cpu => self.cpu,
            Channel::Memory => self.memory,
            Channel::Disk => self.disk,
            Channel::NetworkIn => self.network_in,
            Channel::NetworkOut => self.network_out,
            Channel::Load => self.load,
        }
    }

    /// Iterate over all channels with their readings.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, Option<f64>)> + '_ {
        Channel::ALL.iter().map(|&c| (c, self.get(c)))
    }

    /// Whether no channel has a reading.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, v)| v.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(SampleBatch::default().is_empty());
    }

    #[test]
    fn get_maps_channels() {
        let batch = SampleBatch {
            cpu: Some(42.0),
            network_out: Some(17.5),
            ..SampleBatch::default()
        };
        assert_eq!(batch.get(Channel::Cpu), Some(42.0));
        assert_eq!(batch.get(Channel::NetworkOut), Some(17.5));
        assert_eq!(batch.get(Channel::Memory), None);
    }

    #[test]
    fn iter_covers_all_channels() {
        let batch = SampleBatch::default();
        assert_eq!(batch.iter().count(), Channel::ALL.len());
    }
}
