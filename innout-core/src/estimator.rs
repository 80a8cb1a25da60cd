//! Event-Driven Classifier Host
//!
//! ## Overview
//!
//! [`Estimator`] wires the three algorithmic components together and owns
//! all mutable classifier state. Acquisition code pushes [`SensorEvent`]s
//! into [`Estimator::handle`]; each accepted event is routed to its
//! component and fusion is re-evaluated afterwards:
//!
//! ```text
//! Acceleration  ─→ MotionDetector::log
//! MagneticField ─→ WindowedAggregator::record
//! Light, Proximity, Satellites, WirelessScan, TimeOfDay ─→ SensorSnapshot
//! Tick          ─→ WindowedAggregator::refresh
//!                         │
//!                         ▼
//!              FusionClassifier::evaluate ─→ observers
//! ```
//!
//! ## Scheduling
//!
//! The aggregator statistics are only refreshed on a tick. Hosts either
//! deliver [`SensorEvent::Tick`] from their own timer, or call
//! [`Estimator::poll`] with a [`TimeSource`] and let the estimator decide
//! whether `recompute_interval_ms` has elapsed.
//!
//! ## Usage Example
//!
//! ```rust
//! use innout_core::{Estimator, SensorEvent, Verdict};
//!
//! let mut estimator = Estimator::default();
//! estimator.handle(SensorEvent::Light { lux: 12.0 }).unwrap();
//!
//! // Still stationary, so nothing is published yet
//! assert_eq!(estimator.verdict(), Verdict::Loading);
//! ```

use alloc::{boxed::Box, vec::Vec};

use crate::{
    constants::time::DEFAULT_RECOMPUTE_INTERVAL_MS,
    errors::{ClassifierError, ClassifierResult},
    events::{magnitude, SensorEvent},
    fusion::{FusionClassifier, FusionConfig, FusionOutput, Verdict},
    motion::{MotionConfig, MotionDetector},
    snapshot::{FusionInputs, SensorSnapshot},
    time::{TimeOfDay, TimeSource, Timestamp},
    traits::FusionObserver,
    window::{WindowConfig, WindowedAggregator},
};

/// Full configuration of an [`Estimator`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimatorConfig {
    /// Magnetic aggregator bucketing
    pub window: WindowConfig,
    /// Motion gate tuning
    pub motion: MotionConfig,
    /// Mapper set, weights and calibrations
    pub fusion: FusionConfig,
    /// Minimum spacing of [`Estimator::poll`] recomputes (ms)
    pub recompute_interval_ms: u64,
    /// Seed the motion detector with this magnitude instead of zero
    pub resting_magnitude: Option<f64>,
    /// Fixed day/night flag; `None` reads the local clock at startup
    pub time_of_day: Option<TimeOfDay>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            motion: MotionConfig::default(),
            fusion: FusionConfig::default(),
            recompute_interval_ms: DEFAULT_RECOMPUTE_INTERVAL_MS,
            resting_magnitude: None,
            time_of_day: None,
        }
    }
}

impl EstimatorConfig {
    /// Replace the aggregator config
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Replace the motion detector config
    pub fn with_motion(mut self, motion: MotionConfig) -> Self {
        self.motion = motion;
        self
    }

    /// Replace the fusion config
    pub fn with_fusion(mut self, fusion: FusionConfig) -> Self {
        self.fusion = fusion;
        self
    }

    /// Set the minimum spacing of polled recomputes (ms)
    pub fn with_recompute_interval(mut self, interval_ms: u64) -> Self {
        self.recompute_interval_ms = interval_ms;
        self
    }

    /// Prime the motion detector, typically with standard gravity
    pub fn with_resting_magnitude(mut self, magnitude: f64) -> Self {
        self.resting_magnitude = Some(magnitude);
        self
    }

    /// Pin the day/night flag instead of reading the local clock
    pub fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = Some(time_of_day);
        self
    }

    /// Day/night flag a fresh estimator starts with
    pub fn initial_time_of_day(&self) -> TimeOfDay {
        self.time_of_day.unwrap_or_else(TimeOfDay::at_startup)
    }

    /// Check a config that was assembled field by field or deserialized
    pub fn validate(&self) -> ClassifierResult<()> {
        if self.window.retention_buckets == 0 {
            return Err(ClassifierError::InvalidConfig {
                reason: "retention must hold at least one bucket",
            });
        }
        // Re-run the motion constructor checks on the stored values
        MotionConfig::new(self.motion.sample_size, self.motion.threshold)?;
        if !self.motion.decay.is_finite() {
            return Err(ClassifierError::InvalidConfig {
                reason: "motion filter decay must be finite",
            });
        }
        if self.recompute_interval_ms == 0 {
            return Err(ClassifierError::InvalidConfig {
                reason: "recompute interval must be non-zero",
            });
        }
        if let Some(resting) = self.resting_magnitude {
            if !resting.is_finite() {
                return Err(ClassifierError::InvalidConfig {
                    reason: "resting magnitude must be finite",
                });
            }
        }

        self.fusion.validate()
    }
}

/// Owns the aggregator, detector, snapshot and classifier of one device
pub struct Estimator {
    recompute_interval_ms: u64,
    time_of_day: Option<TimeOfDay>,
    magnetic: WindowedAggregator<f32>,
    motion: MotionDetector,
    snapshot: SensorSnapshot,
    classifier: FusionClassifier,
    observers: Vec<Box<dyn FusionObserver + Send>>,
    last_recompute: Option<Timestamp>,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::from_parts(EstimatorConfig::default())
    }
}

impl Estimator {
    /// Build an estimator, validating the whole config first
    pub fn new(config: EstimatorConfig) -> ClassifierResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: EstimatorConfig) -> Self {
        let motion = match config.resting_magnitude {
            Some(resting) => MotionDetector::primed(config.motion, resting),
            None => MotionDetector::new(config.motion),
        };

        Self {
            recompute_interval_ms: config.recompute_interval_ms,
            time_of_day: config.time_of_day,
            magnetic: WindowedAggregator::new(config.window),
            motion,
            snapshot: SensorSnapshot::new(config.initial_time_of_day()),
            classifier: FusionClassifier::new(config.fusion),
            observers: Vec::new(),
            last_recompute: None,
        }
    }

    /// Register a display collaborator for every published output
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: FusionObserver + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Ingest one event and re-evaluate fusion
    ///
    /// Non-finite readings are rejected before any state is touched. Returns
    /// the freshly published output, or `None` while the user is stationary.
    pub fn handle(&mut self, event: SensorEvent) -> ClassifierResult<Option<FusionOutput>> {
        if let Err(err) = event.validate() {
            log_warn!("dropping {} event: {}", event.kind().name(), err);
            return Err(err);
        }

        match event {
            SensorEvent::Acceleration { x, y, z } => {
                self.motion.log(magnitude(x, y, z));
            }
            SensorEvent::MagneticField { x, y, z, timestamp } => {
                self.magnetic.record(magnitude(x, y, z) as f32, timestamp);
            }
            SensorEvent::Light { lux } => self.snapshot.set_light(lux),
            SensorEvent::Proximity { distance_cm } => self.snapshot.set_proximity(distance_cm),
            SensorEvent::Satellites(summary) => self.snapshot.set_satellites(&summary),
            SensorEvent::WirelessScan(summary) => self.snapshot.set_wireless(summary),
            SensorEvent::TimeOfDay(time_of_day) => self.snapshot.time_of_day = time_of_day,
            SensorEvent::Tick { timestamp } => self.tick(timestamp),
        }

        Ok(self.evaluate())
    }

    /// Recompute the magnetic mean and variance
    pub fn tick(&mut self, now: Timestamp) {
        self.magnetic.refresh();
        self.last_recompute = Some(now);
    }

    /// Tick and re-evaluate if the recompute interval has elapsed
    ///
    /// Returns `None` when no recompute was due or the motion gate is closed.
    pub fn poll(&mut self, time: &dyn TimeSource) -> Option<FusionOutput> {
        let now = time.now();
        let due = self
            .last_recompute
            .map_or(true, |last| now.saturating_sub(last) >= self.recompute_interval_ms);
        if !due {
            return None;
        }

        self.tick(now);
        self.evaluate()
    }

    /// Run fusion over the current state and notify observers
    pub fn evaluate(&mut self) -> Option<FusionOutput> {
        let inputs = self.inputs();
        let output = self.classifier.evaluate(&inputs)?;
        for observer in self.observers.iter_mut() {
            observer.on_fusion(&output);
        }
        Some(output)
    }

    /// What fusion would read right now
    pub fn inputs(&self) -> FusionInputs {
        self.snapshot
            .inputs(self.magnetic.current_variance(), self.motion.is_moving())
    }

    /// Switch the light curve between day and night
    pub fn set_time_of_day(&mut self, time_of_day: TimeOfDay) {
        self.snapshot.time_of_day = time_of_day;
    }

    /// Last published verdict, LOADING until the first update
    pub fn verdict(&self) -> Verdict {
        self.classifier.verdict()
    }

    /// Last published output
    pub fn latest(&self) -> Option<&FusionOutput> {
        self.classifier.latest()
    }

    /// Magnetic magnitude aggregator
    pub fn magnetic(&self) -> &WindowedAggregator<f32> {
        &self.magnetic
    }

    /// Motion gate
    pub fn motion(&self) -> &MotionDetector {
        &self.motion
    }

    /// Latest non-windowed readings
    pub fn snapshot(&self) -> &SensorSnapshot {
        &self.snapshot
    }

    /// Mutable access for hosts that report sentinel-encoded values
    pub fn snapshot_mut(&mut self) -> &mut SensorSnapshot {
        &mut self.snapshot
    }

    /// Fusion classifier holding the published state
    pub fn classifier(&self) -> &FusionClassifier {
        &self.classifier
    }

    /// Number of subscribed observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Forget every reading and published result; observers stay subscribed
    ///
    /// An unpinned day/night flag is read from the local clock again.
    pub fn reset(&mut self) {
        self.magnetic.clear();
        self.motion.reset();
        let time_of_day = self.time_of_day.unwrap_or_else(TimeOfDay::at_startup);
        self.snapshot = SensorSnapshot::new(time_of_day);
        self.classifier.reset();
        self.last_recompute = None;
    }

    /// Split into components, used to build a shared estimator
    #[cfg(feature = "std")]
    pub(crate) fn into_parts(
        self,
    ) -> (
        WindowedAggregator<f32>,
        MotionDetector,
        SensorSnapshot,
        FusionClassifier,
        u64,
    ) {
        (
            self.magnetic,
            self.motion,
            self.snapshot,
            self.classifier,
            self.recompute_interval_ms,
        )
    }
}
