//! Weighted Sensor Fusion
//!
//! ## Overview
//!
//! Each sensor votes with an indoor probability from its mapper; fusion
//! combines the votes with a fixed weight vector and derives a verdict:
//!
//! ```text
//! Light      ─→ p₁ × 0.295 ─┐
//! Navigation ─→ p₂ × 0.370 ─┤
//! Magnetic   ─→ p₃ × 0.130 ─┼─→ Σ wᵢ·pᵢ ─→ prob ─→ verdict
//! Wireless   ─→ p₄ × 0.205 ─┘
//! ```
//!
//! ```text
//! prob == 0.5  →  LOADING
//! prob >  0.5  →  INDOOR
//! prob <  0.5  →  OUTDOOR
//! ```
//!
//! ## Motion Gate
//!
//! Fusion only runs while the motion detector reports the user is moving.
//! A stationary phone keeps whatever verdict it last had.
//!
//! ## Configuration
//!
//! The mapper set and its weights are data, not code paths: a
//! [`FusionConfig`] lists the [`Signal`]s to combine with their weights,
//! plus the calibrated [`Mappers`]. Weights must be non-negative and sum to
//! one.
//!
//! ## Usage Example
//!
//! ```rust
//! use innout_core::fusion::{FusionClassifier, Verdict};
//! use innout_core::snapshot::FusionInputs;
//!
//! let mut classifier = FusionClassifier::default();
//!
//! // Nothing known yet, but the user is walking
//! let inputs = FusionInputs { moving: true, ..FusionInputs::default() };
//! let output = classifier.evaluate(&inputs).unwrap();
//!
//! assert_eq!(output.probability, 0.5);
//! assert_eq!(output.verdict, Verdict::Loading);
//! ```

mod classifier;
mod verdict;

pub use classifier::{Contribution, FusionClassifier, FusionOutput};
pub use verdict::Verdict;

use heapless::Vec as HVec;

use crate::{
    constants::fusion::{
        LIGHT_WEIGHT, MAGNETIC_WEIGHT, MAX_SIGNALS, NAVIGATION_WEIGHT, WEIGHT_SUM_TOLERANCE,
        WIRELESS_WEIGHT,
    },
    errors::{ClassifierError, ClassifierResult},
    mappers::Mappers,
    snapshot::FusionInputs,
};

/// A sensor channel that contributes to fusion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signal {
    /// Ambient light against the day/night curve
    Light,
    /// Satellite count and C/N0
    Navigation,
    /// Magnetic field variance
    Magnetic,
    /// Wireless access point count and strength
    Wireless,
}

impl Signal {
    /// Lower-case name used in logs and errors
    pub const fn name(&self) -> &'static str {
        match self {
            Signal::Light => "light",
            Signal::Navigation => "navigation",
            Signal::Magnetic => "magnetic",
            Signal::Wireless => "wireless",
        }
    }

    /// Run this signal's mapper over the inputs
    pub fn probability(&self, mappers: &Mappers, inputs: &FusionInputs) -> f64 {
        match self {
            Signal::Light => mappers
                .light
                .probability(inputs.lux, inputs.covered, inputs.time_of_day),
            Signal::Navigation => mappers
                .navigation
                .probability(inputs.satellite_count, inputs.mean_cnr),
            Signal::Magnetic => mappers.magnetic.probability(inputs.magnetic_variance),
            Signal::Wireless => mappers.wireless.probability(inputs.wireless.as_ref()),
        }
    }
}

/// A signal and its share of the fused probability
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedSignal {
    /// Contributing channel
    pub signal: Signal,
    /// Share of the fused probability
    pub weight: f64,
}

impl WeightedSignal {
    /// Pair a signal with its weight
    pub const fn new(signal: Signal, weight: f64) -> Self {
        Self { signal, weight }
    }
}

/// Default mapper set, in evaluation order
pub const DEFAULT_SIGNALS: [WeightedSignal; 4] = [
    WeightedSignal::new(Signal::Light, LIGHT_WEIGHT),
    WeightedSignal::new(Signal::Navigation, NAVIGATION_WEIGHT),
    WeightedSignal::new(Signal::Magnetic, MAGNETIC_WEIGHT),
    WeightedSignal::new(Signal::Wireless, WIRELESS_WEIGHT),
];

/// Mapper set, weights and calibrations for a [`FusionClassifier`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FusionConfig {
    signals: HVec<WeightedSignal, MAX_SIGNALS>,
    mappers: Mappers,
}

impl Default for FusionConfig {
    fn default() -> Self {
        let mut signals = HVec::new();
        for signal in DEFAULT_SIGNALS {
            let _ = signals.push(signal);
        }

        Self {
            signals,
            mappers: Mappers::default(),
        }
    }
}

impl FusionConfig {
    /// Build a mapper set, validating its weights
    ///
    /// Weights must be finite, non-negative and sum to 1.0; each signal may
    /// appear once.
    pub fn new(signals: &[WeightedSignal]) -> ClassifierResult<Self> {
        check_signals(signals)?;

        let signals = HVec::from_slice(signals)
            .map_err(|_| ClassifierError::TooManySignals { max: MAX_SIGNALS })?;

        Ok(Self {
            signals,
            mappers: Mappers::default(),
        })
    }

    /// Re-run the weight checks, for configs that arrived through serde
    pub fn validate(&self) -> ClassifierResult<()> {
        check_signals(&self.signals)
    }

    /// Replace the calibrated mappers
    pub fn with_mappers(mut self, mappers: Mappers) -> Self {
        self.mappers = mappers;
        self
    }

    /// Weighted signals, in evaluation order
    pub fn signals(&self) -> &[WeightedSignal] {
        &self.signals
    }

    /// Calibrated mappers
    pub fn mappers(&self) -> &Mappers {
        &self.mappers
    }

    /// Weight of a signal, zero if it isn't in the set
    pub fn weight(&self, signal: Signal) -> f64 {
        self.signals
            .iter()
            .find(|entry| entry.signal == signal)
            .map_or(0.0, |entry| entry.weight)
    }
}

fn check_signals(signals: &[WeightedSignal]) -> ClassifierResult<()> {
    if signals.is_empty() {
        return Err(ClassifierError::InvalidConfig {
            reason: "fusion needs at least one signal",
        });
    }
    if signals.len() > MAX_SIGNALS {
        return Err(ClassifierError::TooManySignals { max: MAX_SIGNALS });
    }

    let mut sum = 0.0;
    for (i, entry) in signals.iter().enumerate() {
        if !entry.weight.is_finite() || entry.weight < 0.0 {
            return Err(ClassifierError::InvalidWeight { weight: entry.weight });
        }
        if signals[..i].iter().any(|prior| prior.signal == entry.signal) {
            return Err(ClassifierError::DuplicateSignal {
                signal: entry.signal.name(),
            });
        }
        sum += entry.weight;
    }

    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ClassifierError::WeightSumMismatch { sum });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let config = FusionConfig::default();
        let sum: f64 = config.signals().iter().map(|s| s.weight).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(config.weight(Signal::Navigation), 0.370);
    }

    #[test]
    fn default_config_passes_validation() {
        let config = FusionConfig::new(&DEFAULT_SIGNALS).unwrap();
        assert_eq!(config, FusionConfig::default());
    }

    #[test]
    fn subset_with_renormalised_weights() {
        let config = FusionConfig::new(&[
            WeightedSignal::new(Signal::Light, 0.4),
            WeightedSignal::new(Signal::Navigation, 0.6),
        ])
        .unwrap();

        assert_eq!(config.signals().len(), 2);
        assert_eq!(config.weight(Signal::Magnetic), 0.0);
    }

    #[test]
    fn rejects_bad_weights() {
        let result = FusionConfig::new(&[
            WeightedSignal::new(Signal::Light, 0.5),
            WeightedSignal::new(Signal::Navigation, 0.4),
        ]);
        assert!(matches!(result, Err(ClassifierError::WeightSumMismatch { .. })));

        let result = FusionConfig::new(&[
            WeightedSignal::new(Signal::Light, 1.5),
            WeightedSignal::new(Signal::Navigation, -0.5),
        ]);
        assert_eq!(result, Err(ClassifierError::InvalidWeight { weight: -0.5 }));

        let result = FusionConfig::new(&[
            WeightedSignal::new(Signal::Light, 0.5),
            WeightedSignal::new(Signal::Light, 0.5),
        ]);
        assert_eq!(result, Err(ClassifierError::DuplicateSignal { signal: "light" }));

        assert!(matches!(
            FusionConfig::new(&[]),
            Err(ClassifierError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn neutral_inputs_map_to_neutral() {
        let mappers = Mappers::default();
        let inputs = FusionInputs::default();
        for entry in DEFAULT_SIGNALS {
            assert_eq!(entry.signal.probability(&mappers, &inputs), 0.5);
        }
    }
}
