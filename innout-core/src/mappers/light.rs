//! Ambient light mapper
//!
//! Daylight is orders of magnitude brighter than interior lighting, so by
//! day low lux means indoors. At night lit interiors outshine the street and
//! the curve flips. A covered sensor (phone in a pocket, face down) reads
//! near zero regardless of surroundings and is ignored.

use crate::{
    constants::sensors::{
        LIGHT_DAY_INTERCEPT, LIGHT_DAY_SLOPE, LIGHT_NIGHT_INTERCEPT, LIGHT_NIGHT_SLOPE,
        NEUTRAL_PROBABILITY,
    },
    time::TimeOfDay,
};

use super::AffineCurve;

/// Lux to indoor probability, one curve per time of day
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightMapper {
    /// Response while it is day
    pub day: AffineCurve,
    /// Response while it is night
    pub night: AffineCurve,
}

impl Default for LightMapper {
    fn default() -> Self {
        Self {
            day: AffineCurve::new(LIGHT_DAY_SLOPE, LIGHT_DAY_INTERCEPT),
            night: AffineCurve::new(LIGHT_NIGHT_SLOPE, LIGHT_NIGHT_INTERCEPT),
        }
    }
}

impl LightMapper {
    /// Indoor probability for a lux reading
    ///
    /// Neutral when the sensor is covered or has never reported.
    pub fn probability(&self, lux: Option<f32>, covered: bool, time_of_day: TimeOfDay) -> f64 {
        let Some(lux) = lux else {
            return NEUTRAL_PROBABILITY;
        };
        if covered {
            return NEUTRAL_PROBABILITY;
        }

        let curve = match time_of_day {
            TimeOfDay::Day => &self.day,
            TimeOfDay::Night => &self.night,
        };
        curve.probability(lux as f64)
    }
}
