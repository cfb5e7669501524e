//! Bounded rolling-window series: the history behind one live chart.

use std::collections::VecDeque;

/// A single timestamped measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePoint {
    /// Tick label shown on the chart axis (e.g. "03:25").
    pub label: String,
    /// Measured value.
    pub value: f64,
}

/// Read-only copy of a series handed to the renderer.
///
/// Labels and values are split so a chart can swap its displayed
/// arrays in one pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSnapshot {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl SeriesSnapshot {
    /// Number of points in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the snapshot holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A FIFO sliding window of the most recent `capacity` samples.
///
/// Count-based, not time-based: eviction always removes from the
/// front until `len() <= capacity`, so the bound holds even when
/// several samples arrive between renders.
#[derive(Debug, Clone)]
pub struct RollingSeries {
    points: VecDeque<SamplePoint>,
    capacity: usize,
}

impl RollingSeries {
    /// Create an empty series bounded at `capacity` samples.
    ///
    /// A zero capacity is clamped to 1 so the series can always hold
    /// the latest sample.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest entries while over capacity.
    ///
    /// Non-finite values (NaN, ±inf) are skipped silently: a missing
    /// metric on one tick must never corrupt the window.
    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        if !value.is_finite() {
            tracing::trace!(value, "skipping non-finite sample");
            return;
        }
        self.points.push_back(SamplePoint {
            label: label.into(),
            value,
        });
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Current number of retained samples. Always `<= capacity()`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maximum number of retained samples.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over retained points, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &SamplePoint> {
        self.points.iter()
    }

    /// The most recent sample, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&SamplePoint> {
        self.points.back()
    }

    /// Ordered copy of the retained window for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SeriesSnapshot {
        SeriesSnapshot {
            labels: self.points.iter().map(|p| p.label.clone()).collect(),
            values: self.points.iter().map(|p| p.value).collect(),
        }
    }
}
