//! Sensor Response Curves and Sentinels
//!
//! Each sensor reading is mapped to an indoor probability with an affine
//! curve `m·x + c`, clamped to [0, 1]. Indoor = 1, outdoor = 0.
//!
//! The coefficients are hand calibrations taken from field recordings. They
//! are reproduced exactly for output compatibility with earlier builds.

// ===== SHARED =====

/// Probability reported when a sensor has nothing informative to say.
///
/// Distinct from a genuine 50/50 reading, though numerically identical.
pub const NEUTRAL_PROBABILITY: f64 = 0.5;

/// Count sentinel used by acquisition layers for "no measurement yet".
pub const UNAVAILABLE_COUNT: i32 = -1;

/// Wireless strength sentinel for "no scan result yet" (dBm).
pub const UNAVAILABLE_STRENGTH: f64 = -1.0;

// ===== LIGHT =====

/// Daytime light slope (per lux).
///
/// Daytime indoor lighting sits around 100-1000 lux, daylight far above.
/// 500 lux maps to 1.0, 1500 lux to 0.0.
///
/// Source: Field calibration
pub const LIGHT_DAY_SLOPE: f64 = -0.001;

/// Daytime light intercept.
pub const LIGHT_DAY_INTERCEPT: f64 = 1.5;

/// Night-time light slope (per lux).
///
/// At night the relationship inverts: lit interiors are brighter than
/// streets. 100 lux maps to 0.0, 500 lux to 1.0.
///
/// Source: Field calibration
pub const LIGHT_NIGHT_SLOPE: f64 = 0.0025;

/// Night-time light intercept.
pub const LIGHT_NIGHT_INTERCEPT: f64 = -0.25;

// ===== MAGNETIC FIELD =====

/// Magnetic variance slope (per µT²).
///
/// Building steel distorts the field: outdoor variance is near 0, indoor
/// around 18-30 µT².
///
/// Source: Field calibration
pub const MAGNETIC_VARIANCE_SLOPE: f64 = 1.0 / 30.0;

/// Magnetic variance intercept.
pub const MAGNETIC_VARIANCE_INTERCEPT: f64 = 0.0;

// ===== SATELLITE NAVIGATION =====

/// Visible satellite count slope.
///
/// Indoors 1-7 satellites, outdoors 7-15.
///
/// Source: Field calibration (GNSS raw measurements API)
pub const SATELLITE_COUNT_SLOPE: f64 = -0.083333;

/// Visible satellite count intercept.
pub const SATELLITE_COUNT_INTERCEPT: f64 = 1.25;

/// Weight of the count term within the navigation probability.
pub const SATELLITE_COUNT_WEIGHT: f64 = 0.9;

/// Mean carrier-to-noise density slope (per dB-Hz).
///
/// Indoors 20 dB-Hz, outdoors 35 dB-Hz, midpoint 27.5.
///
/// Source: Field calibration
pub const SATELLITE_CNR_SLOPE: f64 = -1.0 / 15.0;

/// Mean carrier-to-noise density intercept.
pub const SATELLITE_CNR_INTERCEPT: f64 = 7.0 / 3.0;

/// Weight of the carrier-to-noise term within the navigation probability.
pub const SATELLITE_CNR_WEIGHT: f64 = 0.1;

// ===== WIRELESS NETWORKS =====

/// Visible access point count slope.
///
/// Indoors 0 visible networks, outdoors 50.
///
/// Source: Field calibration
pub const WIRELESS_COUNT_SLOPE: f64 = -0.02;

/// Visible access point count intercept.
pub const WIRELESS_COUNT_INTERCEPT: f64 = 1.0;

/// Weight of the count term within the wireless probability.
pub const WIRELESS_COUNT_WEIGHT: f64 = 0.5;

/// Mean signal strength slope (per dBm).
///
/// -75 dBm and stronger reads as indoor, -90 dBm and weaker as outdoor.
///
/// Source: Field calibration
pub const WIRELESS_STRENGTH_SLOPE: f64 = 1.0 / 15.0;

/// Mean signal strength intercept.
pub const WIRELESS_STRENGTH_INTERCEPT: f64 = 6.0;

/// Weight of the strength term within the wireless probability.
pub const WIRELESS_STRENGTH_WEIGHT: f64 = 0.5;

// ===== PROXIMITY =====

/// Proximity distance reported when the sensor is covered (cm).
///
/// Most handsets report a binary near/far value: 0 when covered and the
/// sensor maximum (often 5 cm) otherwise.
pub const PROXIMITY_COVERED_CM: f32 = 0.0;
