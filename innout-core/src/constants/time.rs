//! Time-Related Constants

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Hours per day.
pub const HOURS_PER_DAY: u32 = 24;

// ===== SCHEDULES =====

/// Period of the mean/variance recompute tick (milliseconds).
///
/// Matches the one-second bucket width, so every tick sees at most one new
/// bucket.
pub const DEFAULT_RECOMPUTE_INTERVAL_MS: u64 = 1000;

// ===== DAY / NIGHT =====

/// First local hour counted as daytime (inclusive).
pub const DAY_START_HOUR: u32 = 7;

/// Last local hour counted as daytime (inclusive).
///
/// 19:59 is still day, 20:00 is night.
pub const DAY_END_HOUR: u32 = 19;
