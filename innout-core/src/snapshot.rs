//! Latest readings of the non-windowed sensors
//!
//! Light, proximity, satellite and wireless readings are not smoothed: the
//! classifier only needs the most recent value of each. [`SensorSnapshot`]
//! keeps those values, and [`FusionInputs`] is the read-only view handed to
//! fusion once the aggregator variance and motion flag are added.
//!
//! Every field starts out unavailable, so a fresh snapshot maps to the
//! neutral probability across the board.

use crate::{
    constants::sensors::UNAVAILABLE_STRENGTH,
    events::{is_covered, SatelliteSummary, WirelessSummary},
    time::TimeOfDay,
};

/// Most recent value of each directly-sampled sensor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SensorSnapshot {
    /// Ambient light (lux), `None` until the first reading
    pub lux: Option<f32>,
    /// Proximity sensor reports the phone is covered
    pub covered: bool,
    /// Selects the light response curve
    pub time_of_day: TimeOfDay,
    /// Visible satellites in the last measurement batch
    pub satellite_count: Option<u32>,
    /// Mean C/N0 of the last batch (dB-Hz)
    pub mean_cnr: Option<f64>,
    /// C/N0 variance of the last batch, kept for display
    pub cnr_variance: Option<f64>,
    /// Last completed wireless scan
    pub wireless: Option<WirelessSummary>,
}

impl SensorSnapshot {
    /// Empty snapshot starting at the given time of day
    pub fn new(time_of_day: TimeOfDay) -> Self {
        Self {
            time_of_day,
            ..Self::default()
        }
    }

    /// Store an ambient light reading (lux)
    pub fn set_light(&mut self, lux: f32) {
        self.lux = Some(lux);
    }

    /// Update the covered flag from a proximity distance (cm)
    pub fn set_proximity(&mut self, distance_cm: f32) {
        self.covered = is_covered(distance_cm);
    }

    /// Store a satellite batch; a negative mean C/N0 marks the C/N0 unavailable
    pub fn set_satellites(&mut self, summary: &SatelliteSummary) {
        let cnr_available = summary.mean_cnr >= 0.0;
        self.satellite_count = Some(summary.count);
        self.mean_cnr = cnr_available.then_some(summary.mean_cnr);
        self.cnr_variance = cnr_available.then_some(summary.cnr_variance);
    }

    /// Store satellite values reported with sentinels
    ///
    /// A negative count or a negative mean C/N0 marks that value unavailable.
    pub fn set_satellites_raw(&mut self, count: i32, mean_cnr: f64) {
        self.satellite_count = u32::try_from(count).ok();
        self.mean_cnr = (mean_cnr >= 0.0).then_some(mean_cnr);
    }

    /// Store a completed scan; a strength of exactly -1 means no scan
    pub fn set_wireless(&mut self, summary: WirelessSummary) {
        self.wireless = (summary.mean_strength_dbm != UNAVAILABLE_STRENGTH).then_some(summary);
    }

    /// Store wireless values reported with sentinels
    ///
    /// A strength of exactly -1 means no scan has completed. A negative
    /// count alongside a real strength is read as zero access points.
    pub fn set_wireless_raw(&mut self, count: i32, mean_strength_dbm: f64) {
        if mean_strength_dbm == UNAVAILABLE_STRENGTH {
            self.wireless = None;
            return;
        }

        self.wireless = Some(WirelessSummary {
            access_points: u32::try_from(count).unwrap_or(0),
            mean_strength_dbm,
        });
    }

    /// Assemble the fusion view from this snapshot and the smoothed signals
    pub fn inputs(&self, magnetic_variance: Option<f64>, moving: bool) -> FusionInputs {
        FusionInputs {
            lux: self.lux,
            covered: self.covered,
            time_of_day: self.time_of_day,
            magnetic_variance,
            satellite_count: self.satellite_count,
            mean_cnr: self.mean_cnr,
            wireless: self.wireless,
            moving,
        }
    }
}

/// Everything fusion reads, captured at one instant
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FusionInputs {
    /// Ambient light (lux)
    pub lux: Option<f32>,
    /// Light sensor is covered
    pub covered: bool,
    /// Day/night flag for the light curve
    pub time_of_day: TimeOfDay,
    /// Windowed magnetic field variance (µT²)
    pub magnetic_variance: Option<f64>,
    /// Visible satellites
    pub satellite_count: Option<u32>,
    /// Mean C/N0 (dB-Hz)
    pub mean_cnr: Option<f64>,
    /// Last wireless scan
    pub wireless: Option<WirelessSummary>,
    /// Motion gate; fusion does not update while this is false
    pub moving: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_snapshot_is_unavailable() {
        let snapshot = SensorSnapshot::default();
        let inputs = snapshot.inputs(None, true);

        assert_eq!(inputs.lux, None);
        assert_eq!(inputs.satellite_count, None);
        assert_eq!(inputs.mean_cnr, None);
        assert_eq!(inputs.wireless, None);
        assert!(inputs.moving);
    }

    #[test]
    fn raw_satellite_sentinels() {
        let mut snapshot = SensorSnapshot::default();
        snapshot.set_satellites_raw(-1, 28.0);
        assert_eq!(snapshot.satellite_count, None);
        assert_eq!(snapshot.mean_cnr, Some(28.0));

        snapshot.set_satellites_raw(9, -1.0);
        assert_eq!(snapshot.satellite_count, Some(9));
        assert_eq!(snapshot.mean_cnr, None);
    }

    #[test]
    fn raw_wireless_sentinel() {
        let mut snapshot = SensorSnapshot::default();
        snapshot.set_wireless_raw(-1, -1.0);
        assert_eq!(snapshot.wireless, None);

        snapshot.set_wireless_raw(12, -71.5);
        assert_eq!(
            snapshot.wireless,
            Some(WirelessSummary {
                access_points: 12,
                mean_strength_dbm: -71.5
            })
        );
    }

    #[test]
    fn summaries_with_sentinels_are_unavailable() {
        let mut snapshot = SensorSnapshot::default();
        snapshot.set_satellites(&SatelliteSummary {
            count: 12,
            mean_cnr: -1.0,
            cnr_variance: 4.0,
        });
        assert_eq!(snapshot.satellite_count, Some(12));
        assert_eq!(snapshot.mean_cnr, None);
        assert_eq!(snapshot.cnr_variance, None);

        snapshot.set_wireless(WirelessSummary {
            access_points: 3,
            mean_strength_dbm: UNAVAILABLE_STRENGTH,
        });
        assert_eq!(snapshot.wireless, None);

        // An empty scan averages to 0 dBm, which is a real reading
        snapshot.set_wireless(WirelessSummary::from_levels(&[]));
        assert!(snapshot.wireless.is_some());
    }

    #[test]
    fn proximity_toggles_cover() {
        let mut snapshot = SensorSnapshot::default();
        snapshot.set_proximity(0.0);
        assert!(snapshot.covered);
        snapshot.set_proximity(5.0);
        assert!(!snapshot.covered);
    }

    #[test]
    fn satellite_summary_fills_all_fields() {
        let mut snapshot = SensorSnapshot::new(TimeOfDay::Night);
        snapshot.set_satellites(&SatelliteSummary::from_cn0(&[25.0, 35.0]));

        assert_eq!(snapshot.satellite_count, Some(2));
        assert_eq!(snapshot.mean_cnr, Some(30.0));
        assert_eq!(snapshot.cnr_variance, Some(25.0));
        assert_eq!(snapshot.time_of_day, TimeOfDay::Night);
    }
}
