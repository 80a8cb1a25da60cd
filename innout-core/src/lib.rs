//! Core classification engine for InnOut
//!
//! Decides whether a phone is indoors or outdoors by fusing noisy,
//! asynchronously arriving sensor streams into a probability and a
//! LOADING / INDOOR / OUTDOOR verdict.
//!
//! Three components carry the algorithmic weight:
//! - [`window`]: time-bucketed rolling mean and variance
//! - [`motion`]: batch motion detector that gates updates
//! - [`mappers`] + [`fusion`]: per-sensor indoor probabilities combined by
//!   fixed weights
//!
//! Key constraints:
//! - Builds without `std` (needs `alloc`)
//! - Statistics, mappers and fusion never fail; only configs and
//!   non-finite readings are rejected
//!
//! ```rust
//! use innout_core::{Estimator, SensorEvent, TimeOfDay, Verdict};
//!
//! let mut estimator = Estimator::default();
//! estimator.handle(SensorEvent::TimeOfDay(TimeOfDay::Day)).unwrap();
//! estimator.handle(SensorEvent::Light { lux: 3.0 }).unwrap();
//!
//! // A walking gait opens the motion gate
//! for i in 0..51 {
//!     let z = if i % 2 == 0 { 12.0 } else { 7.5 };
//!     estimator.handle(SensorEvent::Acceleration { x: 0.0, y: 0.0, z }).unwrap();
//! }
//!
//! assert_eq!(estimator.verdict(), Verdict::Indoor);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod constants;
pub mod errors;
pub mod estimator;
pub mod events;
pub mod fusion;
pub mod mappers;
pub mod motion;
pub mod snapshot;
#[cfg(feature = "std")]
pub mod sync;
pub mod time;
pub mod traits;
pub mod window;

// Public API
pub use errors::{ClassifierError, ClassifierResult};
pub use estimator::{Estimator, EstimatorConfig};
pub use events::{SatelliteSummary, SensorEvent, WirelessSummary};
pub use fusion::{FusionClassifier, FusionConfig, FusionOutput, Signal, Verdict, WeightedSignal};
pub use motion::{MotionConfig, MotionDetector, MotionState};
#[cfg(feature = "std")]
pub use sync::SharedEstimator;
pub use time::{FixedTime, TimeOfDay, TimeSource, Timestamp};
pub use traits::FusionObserver;
pub use window::{WindowConfig, WindowedAggregator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
