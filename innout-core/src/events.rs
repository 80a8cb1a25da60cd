//! Sensor Events at the Acquisition Boundary
//!
//! ## Overview
//!
//! Acquisition code (platform sensor callbacks, log replayers) delivers
//! already-timestamped readings as [`SensorEvent`]s. This module also holds
//! the small reductions applied before a reading enters the classifier:
//!
//! - 3-axis samples are reduced to their Euclidean [`magnitude`]
//! - proximity distances become a covered flag ([`is_covered`])
//! - a batch of satellite measurements becomes a [`SatelliteSummary`]
//! - a list of wireless scan results becomes a [`WirelessSummary`]
//!
//! ## Event Flow
//!
//! ```text
//! Accelerometer ─→ magnitude ─→ MotionDetector ──────────┐
//! Magnetometer  ─→ magnitude ─→ WindowedAggregator ──────┤
//! Light / Proximity / GNSS / Wi-Fi ─→ SensorSnapshot ────┼─→ FusionClassifier
//! Tick ─→ recompute mean, variance ──────────────────────┘
//! ```
//!
//! Events are `Copy` and allocation-free so they can be queued from
//! interrupt or callback context.

use crate::{
    constants::sensors::PROXIMITY_COVERED_CM,
    errors::{ClassifierError, ClassifierResult},
    time::{TimeOfDay, Timestamp},
    traits::Validatable,
};

/// Kind of sensor an event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SensorKind {
    /// 3-axis accelerometer
    Accelerometer = 0,
    /// 3-axis magnetometer
    MagneticField = 1,
    /// Ambient light sensor
    Light = 2,
    /// Proximity sensor
    Proximity = 3,
    /// Satellite navigation receiver
    Satellite = 4,
    /// Wireless network scanner
    Wireless = 5,
    /// Host timer and wall clock
    Clock = 6,
}

impl SensorKind {
    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            SensorKind::Accelerometer => "accelerometer",
            SensorKind::MagneticField => "magnetic_field",
            SensorKind::Light => "light",
            SensorKind::Proximity => "proximity",
            SensorKind::Satellite => "satellite",
            SensorKind::Wireless => "wireless",
            SensorKind::Clock => "clock",
        }
    }

    /// Get expected unit of measurement
    pub const fn unit(&self) -> &'static str {
        match self {
            SensorKind::Accelerometer => "m/s²",
            SensorKind::MagneticField => "µT",
            SensorKind::Light => "lx",
            SensorKind::Proximity => "cm",
            SensorKind::Satellite => "dB-Hz",
            SensorKind::Wireless => "dBm",
            SensorKind::Clock => "ms",
        }
    }
}

/// Summary of one satellite measurement batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatelliteSummary {
    /// Satellites with a measurement in the batch
    pub count: u32,
    /// Mean carrier-to-noise density (dB-Hz)
    pub mean_cnr: f64,
    /// Population variance of carrier-to-noise density (dB-Hz²)
    pub cnr_variance: f64,
}

impl SatelliteSummary {
    /// Summarise the C/N0 of every satellite in a measurement batch
    ///
    /// An empty batch yields a count of zero with zero mean and variance.
    pub fn from_cn0(cn0_db_hz: &[f32]) -> Self {
        let count = cn0_db_hz.len();
        if count == 0 {
            return Self {
                count: 0,
                mean_cnr: 0.0,
                cnr_variance: 0.0,
            };
        }

        let n = count as f64;
        let mean_cnr = cn0_db_hz.iter().map(|&c| c as f64).sum::<f64>() / n;
        let cnr_variance = cn0_db_hz
            .iter()
            .map(|&c| {
                let d = c as f64 - mean_cnr;
                d * d
            })
            .sum::<f64>()
            / n;

        Self {
            count: count as u32,
            mean_cnr,
            cnr_variance,
        }
    }
}

/// Summary of one wireless scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WirelessSummary {
    /// Access points seen in the scan
    pub access_points: u32,
    /// Mean received signal strength (dBm)
    pub mean_strength_dbm: f64,
}

impl WirelessSummary {
    /// Summarise the RSSI levels of every access point in a scan
    ///
    /// An empty scan yields zero access points and a mean of 0 dBm.
    pub fn from_levels(levels_dbm: &[i32]) -> Self {
        let access_points = levels_dbm.len();
        let mean_strength_dbm = if access_points == 0 {
            0.0
        } else {
            levels_dbm.iter().map(|&l| l as f64).sum::<f64>() / access_points as f64
        };

        Self {
            access_points: access_points as u32,
            mean_strength_dbm,
        }
    }
}

/// Event delivered by the acquisition layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorEvent {
    /// Raw 3-axis accelerometer sample (m/s²)
    Acceleration {
        /// X axis
        x: f32,
        /// Y axis
        y: f32,
        /// Z axis
        z: f32,
    },
    /// Raw 3-axis magnetometer sample (µT)
    MagneticField {
        /// X axis
        x: f32,
        /// Y axis
        y: f32,
        /// Z axis
        z: f32,
        /// When the sample was taken; picks the window bucket
        timestamp: Timestamp,
    },
    /// Ambient light (lux)
    Light {
        /// Illuminance (lux)
        lux: f32,
    },
    /// Proximity distance (cm); 0 means covered
    Proximity {
        /// Distance to the nearest object (cm)
        distance_cm: f32,
    },
    /// Satellite measurement batch
    Satellites(SatelliteSummary),
    /// Completed wireless scan
    WirelessScan(WirelessSummary),
    /// Day/night changed
    TimeOfDay(TimeOfDay),
    /// Timer tick; triggers the periodic mean/variance recompute
    Tick {
        /// Time of the tick
        timestamp: Timestamp,
    },
}

impl SensorEvent {
    /// Sensor this event came from
    pub const fn kind(&self) -> SensorKind {
        match self {
            SensorEvent::Acceleration { .. } => SensorKind::Accelerometer,
            SensorEvent::MagneticField { .. } => SensorKind::MagneticField,
            SensorEvent::Light { .. } => SensorKind::Light,
            SensorEvent::Proximity { .. } => SensorKind::Proximity,
            SensorEvent::Satellites(_) => SensorKind::Satellite,
            SensorEvent::WirelessScan(_) => SensorKind::Wireless,
            SensorEvent::TimeOfDay(_) | SensorEvent::Tick { .. } => SensorKind::Clock,
        }
    }

    /// Reject events carrying NaN or infinite values
    pub fn validate(&self) -> ClassifierResult<()> {
        let valid = match *self {
            SensorEvent::Acceleration { x, y, z } | SensorEvent::MagneticField { x, y, z, .. } => {
                x.is_valid() && y.is_valid() && z.is_valid()
            }
            SensorEvent::Light { lux } => lux.is_valid(),
            SensorEvent::Proximity { distance_cm } => distance_cm.is_valid(),
            SensorEvent::Satellites(summary) => {
                summary.mean_cnr.is_valid() && summary.cnr_variance.is_valid()
            }
            SensorEvent::WirelessScan(summary) => summary.mean_strength_dbm.is_valid(),
            SensorEvent::TimeOfDay(_) | SensorEvent::Tick { .. } => true,
        };

        if valid {
            Ok(())
        } else {
            Err(ClassifierError::InvalidReading {
                sensor: self.kind().name(),
            })
        }
    }
}

/// Euclidean magnitude of a 3-axis sample
#[inline]
pub fn magnitude(x: f32, y: f32, z: f32) -> f64 {
    let (x, y, z) = (x as f64, y as f64, z as f64);
    libm::sqrt(x * x + y * y + z * z)
}

/// Whether a proximity distance means the sensor is covered
///
/// Most handsets report a binary near/far value, near being exactly zero.
#[inline]
pub fn is_covered(distance_cm: f32) -> bool {
    distance_cm == PROXIMITY_COVERED_CM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_of_axes() {
        assert_eq!(magnitude(3.0, 4.0, 0.0), 5.0);
        assert_eq!(magnitude(0.0, 0.0, -9.0), 9.0);
        assert_eq!(magnitude(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn proximity_is_binary() {
        assert!(is_covered(0.0));
        assert!(!is_covered(5.0));
        assert!(!is_covered(0.5));
    }

    #[test]
    fn satellite_summary_statistics() {
        let summary = SatelliteSummary::from_cn0(&[20.0, 30.0, 40.0]);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.mean_cnr, 30.0);
        assert!((summary.cnr_variance - 200.0 / 3.0).abs() < 1e-9);

        let empty = SatelliteSummary::from_cn0(&[]);
        assert_eq!(empty.count, 0);
        assert_eq!(empty.mean_cnr, 0.0);
    }

    #[test]
    fn wireless_summary_mean() {
        let summary = WirelessSummary::from_levels(&[-60, -70, -80]);
        assert_eq!(summary.access_points, 3);
        assert_eq!(summary.mean_strength_dbm, -70.0);

        let empty = WirelessSummary::from_levels(&[]);
        assert_eq!(empty.access_points, 0);
        assert_eq!(empty.mean_strength_dbm, 0.0);
    }

    #[test]
    fn non_finite_events_rejected() {
        let event = SensorEvent::MagneticField {
            x: 1.0,
            y: f32::NAN,
            z: 0.0,
            timestamp: 0,
        };
        assert_eq!(
            event.validate(),
            Err(ClassifierError::InvalidReading { sensor: "magnetic_field" })
        );

        assert!(SensorEvent::Light { lux: 120.0 }.validate().is_ok());
        assert!(SensorEvent::Tick { timestamp: 0 }.validate().is_ok());
    }

    #[test]
    fn kinds_and_units() {
        let event = SensorEvent::Acceleration { x: 0.0, y: 0.0, z: 9.81 };
        assert_eq!(event.kind(), SensorKind::Accelerometer);
        assert_eq!(event.kind().unit(), "m/s²");
    }
}
