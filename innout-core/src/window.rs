//! Time-Bucketed Rolling Statistics
//!
//! ## Overview
//!
//! [`WindowedAggregator`] keeps a rolling mean and population variance over
//! irregularly timestamped scalar readings. Readings are grouped into
//! one-second buckets keyed by `timestamp / 1000`:
//!
//! ```text
//! key:   1000      1001      1002      ...      1009
//!       ┌───────┐ ┌───────┐ ┌───────┐          ┌───────┐
//!       │ 48.1  │ │ 47.9  │ │ 52.3  │   ...    │ 49.0  │
//!       │ 48.4  │ │       │ │ 51.8  │          │ 49.2  │
//!       └───────┘ └───────┘ └───────┘          └───────┘
//! ```
//!
//! ## Two-Phase Contract
//!
//! Recording is cheap: append to a bucket, bump a counter, try one eviction.
//! The statistics are only refreshed when [`recompute_mean`] and then
//! [`recompute_variance`] are called, typically from a one-second timer.
//! Each recompute is a full pass over the retained buckets.
//!
//! ## Eviction
//!
//! When more than `retention_buckets` buckets are held, the bucket keyed
//! exactly `now - eviction_offset_secs` is removed. If no bucket sits at that
//! key nothing is removed, so the bucket count can exceed the retention
//! target until an exact match comes along. Gaps in the input stream leave
//! stragglers behind. This mirrors the deployed behaviour and is kept as is.
//!
//! ## Quirks
//!
//! - No mean is computed until `retention_buckets` buckets exist.
//! - A mean of exactly 0.0 is indistinguishable from "never computed":
//!   variance is not updated while the mean is zero.
//!
//! [`recompute_mean`]: WindowedAggregator::recompute_mean
//! [`recompute_variance`]: WindowedAggregator::recompute_variance

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::{
    constants::window::{DEFAULT_EVICTION_OFFSET_SECS, DEFAULT_RETENTION_BUCKETS},
    errors::{ClassifierError, ClassifierResult},
    time::{second_key, Timestamp},
    traits::Observation,
};

/// Sizing of a [`WindowedAggregator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowConfig {
    /// Buckets retained before eviction is attempted (`R`)
    pub retention_buckets: usize,
    /// Age in seconds of the bucket evicted on each attempt (`W`)
    pub eviction_offset_secs: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            retention_buckets: DEFAULT_RETENTION_BUCKETS,
            eviction_offset_secs: DEFAULT_EVICTION_OFFSET_SECS,
        }
    }
}

impl WindowConfig {
    /// Create a config, rejecting a zero retention count
    pub fn new(retention_buckets: usize, eviction_offset_secs: u64) -> ClassifierResult<Self> {
        if retention_buckets == 0 {
            return Err(ClassifierError::InvalidConfig {
                reason: "retention must hold at least one bucket",
            });
        }

        Ok(Self {
            retention_buckets,
            eviction_offset_secs,
        })
    }
}

/// Rolling mean and population variance over one-second buckets
#[derive(Debug, Clone)]
pub struct WindowedAggregator<T: Observation = f32> {
    config: WindowConfig,
    /// Second key -> readings recorded within that second
    buckets: BTreeMap<u64, Vec<T>>,
    /// Always equals the summed length of every bucket
    observations: usize,
    mean: f64,
    variance: Option<f64>,
}

impl<T: Observation> Default for WindowedAggregator<T> {
    fn default() -> Self {
        Self::new(WindowConfig::default())
    }
}

impl<T: Observation> WindowedAggregator<T> {
    /// Empty aggregator
    pub fn new(config: WindowConfig) -> Self {
        Self {
            config,
            buckets: BTreeMap::new(),
            observations: 0,
            mean: 0.0,
            variance: None,
        }
    }

    /// Active bucketing config
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Append a reading to the bucket for `at`, then attempt one eviction
    pub fn record(&mut self, value: T, at: Timestamp) {
        self.buckets.entry(second_key(at)).or_default().push(value);
        self.observations += 1;
        self.evict(at);
    }

    /// Remove the bucket keyed exactly `now - W` if more than `R` buckets are held
    ///
    /// Returns the number of readings dropped.
    pub fn evict(&mut self, now: Timestamp) -> usize {
        if self.buckets.len() <= self.config.retention_buckets {
            return 0;
        }

        let Some(target) = second_key(now).checked_sub(self.config.eviction_offset_secs) else {
            return 0;
        };

        match self.buckets.remove(&target) {
            Some(bucket) => {
                self.observations -= bucket.len();
                log_trace!("evicted bucket {} ({} readings)", target, bucket.len());
                bucket.len()
            }
            None => {
                log_trace!(
                    "no bucket at {}, {} buckets retained",
                    target,
                    self.buckets.len()
                );
                0
            }
        }
    }

    /// Refresh the mean over every retained reading
    ///
    /// No-op until at least `R` buckets are present.
    pub fn recompute_mean(&mut self) {
        if self.buckets.len() < self.config.retention_buckets || self.observations == 0 {
            log_trace!("mean skipped: {} buckets retained", self.buckets.len());
            return;
        }

        let sum: f64 = self.values().map(Observation::to_f64).sum();
        self.mean = sum / self.observations as f64;
    }

    /// Refresh the population variance around the current mean
    ///
    /// No-op while the mean is exactly zero, which is also its value before
    /// the first successful [`recompute_mean`](Self::recompute_mean).
    pub fn recompute_variance(&mut self) {
        if self.mean == 0.0 || self.observations == 0 {
            return;
        }

        let mean = self.mean;
        let sum: f64 = self
            .values()
            .map(|value| {
                let deviation = value.to_f64() - mean;
                deviation * deviation
            })
            .sum();
        self.variance = Some(sum / self.observations as f64);
    }

    /// Mean then variance, in the order the variance depends on
    pub fn refresh(&mut self) {
        self.recompute_mean();
        self.recompute_variance();
    }

    /// Last computed mean, `None` before the first successful computation
    pub fn current_mean(&self) -> Option<f64> {
        (self.mean != 0.0).then_some(self.mean)
    }

    /// Last computed variance, `None` before the first successful computation
    pub fn current_variance(&self) -> Option<f64> {
        self.variance
    }

    /// One-second buckets currently held
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Readings across every held bucket
    pub fn observation_count(&self) -> usize {
        self.observations
    }

    /// Retained readings, oldest bucket first
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.buckets.values().flat_map(|bucket| bucket.iter().copied())
    }

    /// Drop all readings and computed statistics
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.observations = 0;
        self.mean = 0.0;
        self.variance = None;
    }
}
