//! Batch motion detector over acceleration magnitude
//!
//! The classifier only updates while the user is walking: a stationary
//! phone in a pocket or on a table says little about its surroundings and
//! would let stale readings dominate.
//!
//! ## Algorithm
//!
//! For each accepted sample:
//! ```text
//! delta     = magnitude - previous_magnitude
//! filtered  = filtered * 0.9 + delta
//! batch_sum += |filtered|
//! ```
//! The filter is additive and not normalised, so a steady ramp settles at
//! ten times its per-sample delta while a constant signal decays to zero.
//!
//! When the batch counter passes `sample_size` the batch closes:
//! `batch_sum / sample_size` above `threshold` means MOVING, otherwise
//! STATIONARY. The counter passes `sample_size` on sample 51 of a nominal
//! 50-sample batch, and all 51 samples are summed before dividing by 50.
//! Between batch boundaries the previous state is reported unchanged.

use crate::{
    constants::motion::{MOTION_FILTER_DECAY, MOTION_SAMPLE_SIZE, MOTION_THRESHOLD},
    errors::{ClassifierError, ClassifierResult},
};

/// Observable detector state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    /// Last batch stayed under the threshold, or no batch has closed yet
    #[default]
    Stationary,
    /// Last batch exceeded the threshold
    Moving,
}

impl MotionState {
    /// True for [`MotionState::Moving`]
    pub const fn is_moving(self) -> bool {
        matches!(self, MotionState::Moving)
    }
}

/// Detector tuning
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionConfig {
    /// Nominal batch length
    pub sample_size: u32,
    /// Mean absolute filtered delta that counts as movement
    pub threshold: f64,
    /// Filter state decay per sample
    pub decay: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            sample_size: MOTION_SAMPLE_SIZE,
            threshold: MOTION_THRESHOLD,
            decay: MOTION_FILTER_DECAY,
        }
    }
}

impl MotionConfig {
    /// Tuning with the default filter decay
    pub fn new(sample_size: u32, threshold: f64) -> ClassifierResult<Self> {
        if sample_size == 0 {
            return Err(ClassifierError::InvalidConfig {
                reason: "motion batch must hold at least one sample",
            });
        }
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ClassifierError::InvalidConfig {
                reason: "motion threshold must be finite and non-negative",
            });
        }

        Ok(Self {
            sample_size,
            threshold,
            ..Self::default()
        })
    }
}

/// Detects walking from a stream of acceleration magnitudes
#[derive(Debug, Clone)]
pub struct MotionDetector {
    config: MotionConfig,
    previous: f64,
    current: f64,
    filtered: f64,
    count: u32,
    batch_sum: f64,
    state: MotionState,
}

impl Default for MotionDetector {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}

impl MotionDetector {
    /// Fresh detector with an implicit previous magnitude of zero
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config,
            previous: 0.0,
            current: 0.0,
            filtered: 0.0,
            count: 0,
            batch_sum: 0.0,
            state: MotionState::Stationary,
        }
    }

    /// Start from a known resting magnitude (typically gravity)
    ///
    /// Avoids the large first delta a fresh detector sees when its implicit
    /// previous magnitude of zero meets a real accelerometer reading.
    pub fn primed(config: MotionConfig, resting_magnitude: f64) -> Self {
        Self {
            previous: resting_magnitude,
            current: resting_magnitude,
            ..Self::new(config)
        }
    }

    /// Feed one acceleration magnitude; returns the (possibly updated) state
    pub fn log(&mut self, magnitude: f64) -> MotionState {
        self.previous = self.current;
        self.current = magnitude;
        let delta = self.current - self.previous;
        self.filtered = self.filtered * self.config.decay + delta;

        self.batch_sum += libm::fabs(self.filtered);
        self.count += 1;

        if self.count > self.config.sample_size {
            let result = self.batch_sum / self.config.sample_size as f64;
            let next = if result > self.config.threshold {
                MotionState::Moving
            } else {
                MotionState::Stationary
            };

            if next != self.state {
                log_debug!("motion {:?} -> {:?} (batch mean {:.3})", self.state, next, result);
            }
            self.state = next;
            self.count = 0;
            self.batch_sum = 0.0;
        }

        self.state
    }

    /// State decided by the last closed batch
    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Whether the motion gate is open
    pub fn is_moving(&self) -> bool {
        self.state.is_moving()
    }

    /// Samples accumulated in the open batch
    pub fn pending_samples(&self) -> u32 {
        self.count
    }

    /// Active tuning
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Back to a fresh, stationary detector with the same tuning
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }
}
