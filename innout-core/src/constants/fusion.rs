//! Fusion Constants
//!
//! Default weight vector for combining per-sensor indoor probabilities.
//! The four weights sum to exactly 1.0.

/// Weight of the light probability.
///
/// Source: Field calibration
pub const LIGHT_WEIGHT: f64 = 0.295;

/// Weight of the satellite navigation probability.
///
/// Strongest single indicator: satellites disappear quickly under a roof.
///
/// Source: Field calibration
pub const NAVIGATION_WEIGHT: f64 = 0.370;

/// Weight of the magnetic variance probability.
///
/// Source: Field calibration
pub const MAGNETIC_WEIGHT: f64 = 0.130;

/// Weight of the wireless network probability.
///
/// Source: Field calibration
pub const WIRELESS_WEIGHT: f64 = 0.205;

/// Probability separating the INDOOR and OUTDOOR verdicts.
///
/// A fused probability exactly equal to this value is reported as LOADING.
/// That happens whenever every input is neutral, so the equality check is
/// a real branch.
pub const VERDICT_THRESHOLD: f64 = 0.5;

/// Maximum number of signals a fusion mapper set can hold.
pub const MAX_SIGNALS: usize = 8;

/// Tolerance when checking that configured weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;
