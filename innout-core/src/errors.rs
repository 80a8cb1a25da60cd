//! Error Types for Configuration and Ingestion Failures
//!
//! ## Design Philosophy
//!
//! The statistics, mapper and fusion code paths never fail: missing data is
//! modelled as a neutral probability or an absent variance, and a stale
//! verdict is surfaced as data. Errors exist only at the two edges of the
//! crate:
//!
//! 1. **Configuration**: weight vectors that don't sum to one, empty batches,
//!    zero retention. These are rejected once, when the config is built.
//!
//! 2. **Ingestion**: a non-finite sample (NaN, infinity) arriving from the
//!    acquisition layer. The sample is dropped and no state changes.
//!
//! Like the rest of the crate, errors are `Copy`, carry only `&'static str`
//! messages, and never allocate.
//!
//! ```rust
//! use innout_core::{ClassifierError, Estimator, SensorEvent};
//!
//! let mut estimator = Estimator::default();
//! let result = estimator.handle(SensorEvent::Light { lux: f32::NAN });
//! assert!(matches!(result, Err(ClassifierError::InvalidReading { sensor: "light" })));
//! ```

use thiserror_no_std::Error;

/// Result type for classifier operations
pub type ClassifierResult<T> = Result<T, ClassifierError>;

/// Classifier errors - kept small and `Copy` so they can be returned from hot paths
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ClassifierError {
    /// Sample was NaN or infinite
    #[error("Invalid {sensor} reading: not a finite number")]
    InvalidReading {
        /// Name of the sensor that produced the sample
        sensor: &'static str,
    },

    /// Fusion weight is negative or not finite
    #[error("Invalid fusion weight {weight}")]
    InvalidWeight {
        /// The offending weight
        weight: f64,
    },

    /// Fusion weights must sum to one
    #[error("Fusion weights sum to {sum}, expected 1.0")]
    WeightSumMismatch {
        /// Actual sum of the configured weights
        sum: f64,
    },

    /// Same signal listed twice in a fusion mapper set
    #[error("Signal {signal} configured more than once")]
    DuplicateSignal {
        /// Name of the duplicated signal
        signal: &'static str,
    },

    /// Mapper set exceeds its fixed capacity
    #[error("Too many fusion signals, at most {max} supported")]
    TooManySignals {
        /// Capacity of the mapper set
        max: usize,
    },

    /// Structural configuration error (zero sizes, empty sets)
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What was wrong
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ClassifierError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidReading { sensor } =>
                defmt::write!(fmt, "Invalid {} reading", sensor),
            Self::InvalidWeight { weight } =>
                defmt::write!(fmt, "Invalid weight {}", weight),
            Self::WeightSumMismatch { sum } =>
                defmt::write!(fmt, "Weights sum to {}", sum),
            Self::DuplicateSignal { signal } =>
                defmt::write!(fmt, "Duplicate signal {}", signal),
            Self::TooManySignals { max } =>
                defmt::write!(fmt, "Too many signals (max {})", max),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "Invalid config: {}", reason),
        }
    }
}
