//! Satellite navigation visibility mapper
//!
//! Roofs and walls block most satellites and attenuate the rest. Two
//! independent terms are blended:
//!
//! ```text
//! p = 0.9 · clamp01(-0.083333·count + 1.25)
//!   + 0.1 · clamp01(-1/15·meanCnr + 7/3)
//! ```
//!
//! Each term falls back to the neutral probability, still scaled by its
//! weight, when its reading is unavailable.

use crate::constants::sensors::{
    NEUTRAL_PROBABILITY, SATELLITE_CNR_INTERCEPT, SATELLITE_CNR_SLOPE, SATELLITE_CNR_WEIGHT,
    SATELLITE_COUNT_INTERCEPT, SATELLITE_COUNT_SLOPE, SATELLITE_COUNT_WEIGHT,
};

use super::AffineCurve;

/// Satellite visibility to indoor probability
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationMapper {
    /// Response to the visible satellite count
    pub count: AffineCurve,
    /// Share of the count term
    pub count_weight: f64,
    /// Response to mean C/N0 (dB-Hz)
    pub cnr: AffineCurve,
    /// Share of the C/N0 term
    pub cnr_weight: f64,
}

impl Default for NavigationMapper {
    fn default() -> Self {
        Self {
            count: AffineCurve::new(SATELLITE_COUNT_SLOPE, SATELLITE_COUNT_INTERCEPT),
            count_weight: SATELLITE_COUNT_WEIGHT,
            cnr: AffineCurve::new(SATELLITE_CNR_SLOPE, SATELLITE_CNR_INTERCEPT),
            cnr_weight: SATELLITE_CNR_WEIGHT,
        }
    }
}

impl NavigationMapper {
    /// Indoor probability from visible satellite count and mean C/N0 (dB-Hz)
    pub fn probability(&self, count: Option<u32>, mean_cnr: Option<f64>) -> f64 {
        let count_term = count.map_or(NEUTRAL_PROBABILITY, |n| self.count.probability(n as f64));
        let cnr_term = mean_cnr.map_or(NEUTRAL_PROBABILITY, |cnr| self.cnr.probability(cnr));

        self.count_weight * count_term + self.cnr_weight * cnr_term
    }
}
