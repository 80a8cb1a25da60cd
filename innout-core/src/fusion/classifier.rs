//! Motion-gated weighted fusion classifier

use heapless::Vec as HVec;

use crate::{constants::fusion::MAX_SIGNALS, snapshot::FusionInputs};

use super::{FusionConfig, Signal, Verdict};

/// One signal's share of a fused result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    /// Contributing channel
    pub signal: Signal,
    /// Mapper output in [0, 1]
    pub probability: f64,
    /// Configured weight
    pub weight: f64,
}

impl Contribution {
    /// Weighted term added to the fused probability
    pub fn weighted(&self) -> f64 {
        self.weight * self.probability
    }
}

/// Result of one fusion pass
#[derive(Debug, Clone, PartialEq)]
pub struct FusionOutput {
    /// Weighted indoor probability
    pub probability: f64,
    /// Verdict derived from `probability`
    pub verdict: Verdict,
    /// Per-signal breakdown, in evaluation order
    pub contributions: HVec<Contribution, MAX_SIGNALS>,
}

impl FusionOutput {
    /// Breakdown entry for one signal, if it is configured
    pub fn contribution(&self, signal: Signal) -> Option<&Contribution> {
        self.contributions.iter().find(|c| c.signal == signal)
    }
}

/// Combines mapper outputs into a probability and verdict
///
/// Holds no sensor data: every evaluation reads a fresh [`FusionInputs`].
/// The only state kept is the last published output, which persists while
/// the motion gate is closed.
#[derive(Debug, Clone, Default)]
pub struct FusionClassifier {
    config: FusionConfig,
    latest: Option<FusionOutput>,
}

impl FusionClassifier {
    /// Classifier with nothing published yet
    pub fn new(config: FusionConfig) -> Self {
        Self {
            config,
            latest: None,
        }
    }

    /// Active mapper set
    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    /// Fuse the inputs without consulting the motion gate or updating state
    pub fn compute(&self, inputs: &FusionInputs) -> FusionOutput {
        let mappers = self.config.mappers();
        let mut contributions = HVec::new();
        let mut probability = 0.0;

        for entry in self.config.signals() {
            let contribution = Contribution {
                signal: entry.signal,
                probability: entry.signal.probability(mappers, inputs),
                weight: entry.weight,
            };
            probability += contribution.weighted();
            // signals() never holds more than MAX_SIGNALS entries
            let _ = contributions.push(contribution);
        }

        FusionOutput {
            probability,
            verdict: Verdict::from_probability(probability),
            contributions,
        }
    }

    /// Recompute if the user is moving
    ///
    /// Returns the new output, or `None` when the motion gate is closed and
    /// the previous result stands.
    pub fn evaluate(&mut self, inputs: &FusionInputs) -> Option<FusionOutput> {
        if !inputs.moving {
            return None;
        }

        let output = self.compute(inputs);
        let previous = self.verdict();
        if output.verdict != previous {
            log_debug!(
                "verdict {} -> {} (p = {:.4})",
                previous,
                output.verdict,
                output.probability
            );
        }

        self.latest = Some(output.clone());
        Some(output)
    }

    /// Last published output, if any
    pub fn latest(&self) -> Option<&FusionOutput> {
        self.latest.as_ref()
    }

    /// Last published verdict, LOADING before the first update
    pub fn verdict(&self) -> Verdict {
        self.latest
            .as_ref()
            .map_or(Verdict::Loading, |output| output.verdict)
    }

    /// Last published probability, if any
    pub fn probability(&self) -> Option<f64> {
        self.latest.as_ref().map(|output| output.probability)
    }

    /// Forget the published output
    pub fn reset(&mut self) {
        self.latest = None;
    }
}
