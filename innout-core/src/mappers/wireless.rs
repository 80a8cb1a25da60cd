//! Wireless network visibility mapper
//!
//! Inside a building a phone sees a handful of strong access points;
//! outside it sees many weak ones. Count and mean signal strength are
//! blended with equal weight.

use crate::{
    constants::sensors::{
        NEUTRAL_PROBABILITY, WIRELESS_COUNT_INTERCEPT, WIRELESS_COUNT_SLOPE,
        WIRELESS_COUNT_WEIGHT, WIRELESS_STRENGTH_INTERCEPT, WIRELESS_STRENGTH_SLOPE,
        WIRELESS_STRENGTH_WEIGHT,
    },
    events::WirelessSummary,
};

use super::AffineCurve;

/// Wireless scan to indoor probability
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WirelessMapper {
    /// Response to the access point count
    pub count: AffineCurve,
    /// Share of the count term
    pub count_weight: f64,
    /// Response to mean strength (dBm)
    pub strength: AffineCurve,
    /// Share of the strength term
    pub strength_weight: f64,
}

impl Default for WirelessMapper {
    fn default() -> Self {
        Self {
            count: AffineCurve::new(WIRELESS_COUNT_SLOPE, WIRELESS_COUNT_INTERCEPT),
            count_weight: WIRELESS_COUNT_WEIGHT,
            strength: AffineCurve::new(WIRELESS_STRENGTH_SLOPE, WIRELESS_STRENGTH_INTERCEPT),
            strength_weight: WIRELESS_STRENGTH_WEIGHT,
        }
    }
}

impl WirelessMapper {
    /// Indoor probability from the latest scan, neutral before the first one
    pub fn probability(&self, scan: Option<&WirelessSummary>) -> f64 {
        let Some(scan) = scan else {
            return NEUTRAL_PROBABILITY;
        };

        let count_term = self.count.probability(scan.access_points as f64);
        let strength_term = self.strength.probability(scan.mean_strength_dbm);

        self.count_weight * count_term + self.strength_weight * strength_term
    }
}
