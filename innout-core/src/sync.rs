//! Thread-safe estimator for hosts with concurrent sensor callbacks
//!
//! Each component sits behind its own `Mutex`, so a magnetometer callback
//! recording into the aggregator never waits on an accelerometer callback
//! feeding the detector. There is no global lock: [`SharedEstimator::evaluate`]
//! takes the classifier lock first, then copies out what fusion needs one
//! component lock at a time, so outputs are published in evaluation order.
//!
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//! use innout_core::{SensorEvent, SharedEstimator};
//!
//! let estimator = Arc::new(SharedEstimator::default());
//!
//! let light = Arc::clone(&estimator);
//! let handle = thread::spawn(move || {
//!     light.handle(SensorEvent::Light { lux: 40.0 }).unwrap();
//! });
//! estimator.handle(SensorEvent::Proximity { distance_cm: 5.0 }).unwrap();
//! handle.join().unwrap();
//!
//! assert_eq!(estimator.inputs().lux, Some(40.0));
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    errors::ClassifierResult,
    estimator::{Estimator, EstimatorConfig},
    events::{magnitude, SensorEvent},
    fusion::{FusionClassifier, FusionOutput, Verdict},
    motion::{MotionDetector, MotionState},
    snapshot::{FusionInputs, SensorSnapshot},
    time::{TimeSource, Timestamp},
    traits::FusionObserver,
    window::WindowedAggregator,
};

/// A panicked holder can only leave a component mid-update, never unsound,
/// so poisoning is ignored.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// [`Estimator`] with per-component locking, shareable across threads
pub struct SharedEstimator {
    recompute_interval_ms: u64,
    magnetic: Mutex<WindowedAggregator<f32>>,
    motion: Mutex<MotionDetector>,
    snapshot: Mutex<SensorSnapshot>,
    classifier: Mutex<FusionClassifier>,
    observers: Mutex<Vec<Box<dyn FusionObserver + Send>>>,
    last_recompute: Mutex<Option<Timestamp>>,
}

impl Default for SharedEstimator {
    fn default() -> Self {
        Self::from_estimator(Estimator::default())
    }
}

impl SharedEstimator {
    /// Build a shared estimator, validating the whole config first
    pub fn new(config: EstimatorConfig) -> ClassifierResult<Self> {
        Ok(Self::from_estimator(Estimator::new(config)?))
    }

    fn from_estimator(estimator: Estimator) -> Self {
        let (magnetic, motion, snapshot, classifier, recompute_interval_ms) =
            estimator.into_parts();

        Self {
            recompute_interval_ms,
            magnetic: Mutex::new(magnetic),
            motion: Mutex::new(motion),
            snapshot: Mutex::new(snapshot),
            classifier: Mutex::new(classifier),
            observers: Mutex::new(Vec::new()),
            last_recompute: Mutex::new(None),
        }
    }

    /// Register a display collaborator for every published output
    pub fn subscribe<O>(&self, observer: O)
    where
        O: FusionObserver + Send + 'static,
    {
        lock(&self.observers).push(Box::new(observer));
    }

    /// Ingest one event, locking only the component it targets, then evaluate
    pub fn handle(&self, event: SensorEvent) -> ClassifierResult<Option<FusionOutput>> {
        if let Err(err) = event.validate() {
            log_warn!("dropping {} event: {}", event.kind().name(), err);
            return Err(err);
        }

        match event {
            SensorEvent::Acceleration { x, y, z } => {
                lock(&self.motion).log(magnitude(x, y, z));
            }
            SensorEvent::MagneticField { x, y, z, timestamp } => {
                lock(&self.magnetic).record(magnitude(x, y, z) as f32, timestamp);
            }
            SensorEvent::Light { lux } => lock(&self.snapshot).set_light(lux),
            SensorEvent::Proximity { distance_cm } => {
                lock(&self.snapshot).set_proximity(distance_cm)
            }
            SensorEvent::Satellites(summary) => lock(&self.snapshot).set_satellites(&summary),
            SensorEvent::WirelessScan(summary) => lock(&self.snapshot).set_wireless(summary),
            SensorEvent::TimeOfDay(time_of_day) => lock(&self.snapshot).time_of_day = time_of_day,
            SensorEvent::Tick { timestamp } => self.tick(timestamp),
        }

        Ok(self.evaluate())
    }

    /// Recompute the magnetic mean and variance
    pub fn tick(&self, now: Timestamp) {
        lock(&self.magnetic).refresh();
        *lock(&self.last_recompute) = Some(now);
    }

    /// Tick and re-evaluate if the recompute interval has elapsed
    pub fn poll(&self, time: &dyn TimeSource) -> Option<FusionOutput> {
        let now = time.now();
        {
            let mut last = lock(&self.last_recompute);
            let due = last.map_or(true, |at| now.saturating_sub(at) >= self.recompute_interval_ms);
            if !due {
                return None;
            }
            *last = Some(now);
        }

        lock(&self.magnetic).refresh();
        self.evaluate()
    }

    /// Copy out the fusion view, one component lock at a time
    pub fn inputs(&self) -> FusionInputs {
        let variance = lock(&self.magnetic).current_variance();
        let moving = lock(&self.motion).is_moving();
        lock(&self.snapshot).inputs(variance, moving)
    }

    /// Run fusion over the current state and notify observers
    ///
    /// The classifier lock is held while the inputs are read, so the last
    /// evaluation to publish is also the one that saw the newest state.
    pub fn evaluate(&self) -> Option<FusionOutput> {
        let output = {
            let mut classifier = lock(&self.classifier);
            let inputs = self.inputs();
            classifier.evaluate(&inputs)?
        };
        for observer in lock(&self.observers).iter_mut() {
            observer.on_fusion(&output);
        }
        Some(output)
    }

    /// Last published verdict
    pub fn verdict(&self) -> Verdict {
        lock(&self.classifier).verdict()
    }

    /// Copy of the last published output
    pub fn latest(&self) -> Option<FusionOutput> {
        lock(&self.classifier).latest().cloned()
    }

    /// Current motion gate state
    pub fn motion_state(&self) -> MotionState {
        lock(&self.motion).state()
    }

    /// Windowed magnetic magnitude mean, if computed
    pub fn magnetic_mean(&self) -> Option<f64> {
        lock(&self.magnetic).current_mean()
    }

    /// Run `f` against the snapshot, for sentinel-encoded host values
    pub fn with_snapshot<R>(&self, f: impl FnOnce(&mut SensorSnapshot) -> R) -> R {
        f(&mut lock(&self.snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TimeOfDay;
    use std::sync::Arc;
    use std::thread;

    fn daytime() -> SharedEstimator {
        SharedEstimator::new(EstimatorConfig::default().with_time_of_day(TimeOfDay::Day)).unwrap()
    }

    fn walk(estimator: &SharedEstimator) {
        for i in 0..51 {
            let z = if i % 2 == 0 { 12.0 } else { 7.5 };
            estimator
                .handle(SensorEvent::Acceleration { x: 0.0, y: 0.0, z })
                .unwrap();
        }
    }

    #[test]
    fn shared_estimator_is_sync() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<SharedEstimator>();
    }

    #[test]
    fn concurrent_streams_do_not_lose_samples() {
        let estimator = Arc::new(SharedEstimator::default());

        let magnetic = {
            let estimator = Arc::clone(&estimator);
            thread::spawn(move || {
                for second in 0..10u64 {
                    estimator
                        .handle(SensorEvent::MagneticField {
                            x: 45.0,
                            y: 0.0,
                            z: 0.0,
                            timestamp: second * 1_000,
                        })
                        .unwrap();
                }
            })
        };

        let motion = {
            let estimator = Arc::clone(&estimator);
            thread::spawn(move || {
                for i in 0..51 {
                    let z = if i % 2 == 0 { 12.0 } else { 7.5 };
                    estimator
                        .handle(SensorEvent::Acceleration { x: 0.0, y: 0.0, z })
                        .unwrap();
                }
            })
        };

        magnetic.join().unwrap();
        motion.join().unwrap();

        estimator.tick(10_000);
        assert_eq!(estimator.magnetic_mean(), Some(45.0));
        assert_eq!(estimator.motion_state(), MotionState::Moving);
        assert_eq!(estimator.inputs().magnetic_variance, Some(0.0));
    }

    #[test]
    fn observers_fire_from_any_thread() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let estimator = daytime();
        {
            let calls = Arc::clone(&calls);
            estimator.subscribe(move |_: &FusionOutput| {
                calls.fetch_add(1, Ordering::Relaxed);
            });
        }

        walk(&estimator);
        assert_eq!(calls.load(Ordering::Relaxed), 1);

        estimator.handle(SensorEvent::Light { lux: 0.5 }).unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 2);
        assert_eq!(estimator.verdict(), Verdict::Indoor);
    }

    #[test]
    fn latest_reflects_final_state_after_contention() {
        let estimator = Arc::new(daytime());
        walk(&estimator);

        let writers: Vec<_> = [1.0f32, 40_000.0]
            .into_iter()
            .map(|lux| {
                let estimator = Arc::clone(&estimator);
                thread::spawn(move || {
                    for _ in 0..200 {
                        estimator.handle(SensorEvent::Light { lux }).unwrap();
                        estimator.evaluate();
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        // The last evaluation to publish read the state both writers left
        let expected = FusionClassifier::default().compute(&estimator.inputs());
        let latest = estimator.latest().unwrap();
        assert_eq!(latest.probability, expected.probability);
        assert_eq!(latest.verdict, expected.verdict);
    }

    #[test]
    fn raw_sentinels_through_snapshot() {
        let estimator = SharedEstimator::default();
        estimator.with_snapshot(|snapshot| snapshot.set_wireless_raw(-1, -1.0));
        assert_eq!(estimator.inputs().wireless, None);
    }
}
