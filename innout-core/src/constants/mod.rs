//! Constants for InnOut Core
//!
//! Every calibration value used by the classifier lives here, with its unit
//! and where it came from. The response-curve coefficients were fitted by
//! hand against field recordings and must be reproduced exactly: changing
//! one shifts every downstream verdict.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Window**: bucket width and retention of the windowed aggregator
//! - **Motion**: batch size, threshold and filter decay of the step detector
//! - **Sensors**: per-sensor response curves and unavailable sentinels
//! - **Fusion**: default weight vector and verdict threshold
//! - **Time**: unit conversions, recompute period, day/night hours
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Keep the unit in the name where one applies
//! 3. Record where a calibration value came from

/// Windowed aggregator sizing.
pub mod window;

/// Motion detector parameters.
pub mod motion;

/// Per-sensor response curves and sentinels.
pub mod sensors;

/// Fusion weights and verdict threshold.
pub mod fusion;

/// Time conversions and schedules.
pub mod time;

// Re-export commonly used constants for convenience
pub use window::{DEFAULT_RETENTION_BUCKETS, DEFAULT_EVICTION_OFFSET_SECS};

pub use motion::{MOTION_SAMPLE_SIZE, MOTION_THRESHOLD, MOTION_FILTER_DECAY};

pub use sensors::{NEUTRAL_PROBABILITY, UNAVAILABLE_COUNT, UNAVAILABLE_STRENGTH};

pub use fusion::{
    LIGHT_WEIGHT, NAVIGATION_WEIGHT, MAGNETIC_WEIGHT, WIRELESS_WEIGHT,
    VERDICT_THRESHOLD, MAX_SIGNALS,
};

pub use time::{MS_PER_SECOND, DEFAULT_RECOMPUTE_INTERVAL_MS, DAY_START_HOUR, DAY_END_HOUR};
