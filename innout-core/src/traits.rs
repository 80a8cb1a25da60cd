//! Core traits
//!
//! These traits sit at the seams between the classifier and its
//! collaborators: the values the aggregator can hold, the finiteness check
//! applied at ingestion, and the sink that receives fusion results.
//! Keep them simple.

use crate::fusion::FusionOutput;

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is physically valid (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Scalar reading that can be stored in a [`WindowedAggregator`](crate::window::WindowedAggregator)
///
/// Statistics are always accumulated in `f64` regardless of the storage type,
/// so narrow sensor types keep their compact buckets without losing
/// precision in the sums.
pub trait Observation: Copy + Validatable {
    /// Widen the reading for accumulation
    fn to_f64(self) -> f64;
}

impl Observation for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Observation for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

/// Receives every freshly computed fusion result
///
/// This is the display boundary: implementations render or forward the
/// verdict. They are not called when the motion gate suppresses an update.
pub trait FusionObserver {
    /// Called after each recomputation
    fn on_fusion(&mut self, output: &FusionOutput);
}

impl<F> FusionObserver for F
where
    F: FnMut(&FusionOutput),
{
    fn on_fusion(&mut self, output: &FusionOutput) {
        self(output)
    }
}
