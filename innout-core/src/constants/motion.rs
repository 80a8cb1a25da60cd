//! Motion Detector Constants

/// Samples per detection batch.
///
/// Higher is more stable but slower to react. The batch closes when the
/// counter exceeds this value, so 51 samples are accumulated and the sum is
/// divided by 50.
///
/// Source: Tuned at SENSOR_DELAY_GAME (~50 Hz), about one second per batch
pub const MOTION_SAMPLE_SIZE: u32 = 50;

/// Mean absolute filtered delta above which the device counts as moving (m/s²).
///
/// Higher values demand more vigorous movement.
///
/// Source: Walking trials, handheld and in-pocket
pub const MOTION_THRESHOLD: f64 = 0.3;

/// Decay applied to the filter state before adding the new delta.
///
/// `filtered = filtered * 0.9 + delta`. Additive and not normalised, so a
/// constant delta settles at ten times its value.
pub const MOTION_FILTER_DECAY: f64 = 0.9;
