//! Per-Sensor Indoor Probability Mappers
//!
//! ## Overview
//!
//! Each mapper turns the latest reading of one sensor into a probability of
//! being indoors, from 0.0 (certainly outdoors) to 1.0 (certainly indoors).
//! Every mapper is a pure function of its configuration and inputs.
//!
//! ## Response Curves
//!
//! All mappers are built from the same primitive, an affine response curve
//! clamped to the unit interval:
//! ```text
//! p = clamp01(m·x + c)
//!
//!  1.0 ┤‾‾‾‾‾‾╲
//!      │       ╲
//!  0.5 ┤        ╲
//!      │         ╲
//!  0.0 ┤          ╲______
//!      └──────────────────→ x
//! ```
//! The slopes and intercepts are hand calibrations, see
//! [`constants::sensors`](crate::constants::sensors).
//!
//! ## Missing Data
//!
//! A mapper never fails. When its sensor has nothing to offer (covered light
//! sensor, no variance yet, no satellite fix, no scan) it reports
//! [`NEUTRAL_PROBABILITY`], which pulls the fused result toward the LOADING
//! verdict rather than either side.
//!
//! | Mapper     | Input                        | Neutral when                 |
//! |------------|------------------------------|------------------------------|
//! | Light      | lux, day/night, covered flag | covered or never reported    |
//! | Magnetic   | aggregator variance          | no variance computed yet     |
//! | Navigation | satellite count, mean C/N0   | per term, when unavailable   |
//! | Wireless   | AP count, mean RSSI          | no scan result yet           |

mod light;
mod magnetic;
mod navigation;
mod wireless;

pub use light::LightMapper;
pub use magnetic::MagneticMapper;
pub use navigation::NavigationMapper;
pub use wireless::WirelessMapper;

pub use crate::constants::sensors::NEUTRAL_PROBABILITY;

/// Clamp a score into [0, 1]
#[inline]
pub fn clamp01(x: f64) -> f64 {
    x.max(0.0).min(1.0)
}

/// Affine response `slope · x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineCurve {
    /// Change in probability per input unit
    pub slope: f64,
    /// Response at zero input
    pub intercept: f64,
}

impl AffineCurve {
    /// Curve from its coefficients
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Raw response, unclamped
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Response clamped to a probability
    #[inline]
    pub fn probability(&self, x: f64) -> f64 {
        clamp01(self.eval(x))
    }
}

/// The full set of calibrated mappers used by fusion
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mappers {
    /// Ambient light curves
    pub light: LightMapper,
    /// Magnetic variance curve
    pub magnetic: MagneticMapper,
    /// Satellite visibility curves
    pub navigation: NavigationMapper,
    /// Wireless visibility curves
    pub wireless: WirelessMapper,
}
