//! Magnetic field variance mapper
//!
//! Steel frames, wiring and appliances make the indoor magnetic field
//! lumpy. Walking through it produces a high variance in field magnitude,
//! while the open-air field is nearly uniform.

use crate::constants::sensors::{
    MAGNETIC_VARIANCE_INTERCEPT, MAGNETIC_VARIANCE_SLOPE, NEUTRAL_PROBABILITY,
};

use super::AffineCurve;

/// Magnetic magnitude variance to indoor probability
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagneticMapper {
    /// Response to variance (µT²)
    pub variance: AffineCurve,
}

impl Default for MagneticMapper {
    fn default() -> Self {
        Self {
            variance: AffineCurve::new(MAGNETIC_VARIANCE_SLOPE, MAGNETIC_VARIANCE_INTERCEPT),
        }
    }
}

impl MagneticMapper {
    /// Indoor probability for the windowed magnitude variance (µT²)
    pub fn probability(&self, variance: Option<f64>) -> f64 {
        variance.map_or(NEUTRAL_PROBABILITY, |v| self.variance.probability(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_variance_is_neutral() {
        assert_eq!(MagneticMapper::default().probability(None), NEUTRAL_PROBABILITY);
    }

    #[test]
    fn variance_scales_linearly_to_thirty() {
        let mapper = MagneticMapper::default();
        assert_eq!(mapper.probability(Some(0.0)), 0.0);
        assert!((mapper.probability(Some(15.0)) - 0.5).abs() < 1e-12);
        assert_eq!(mapper.probability(Some(90.0)), 1.0);
    }
}
