//! Time handling for the classifier
//!
//! Provides:
//! - Millisecond timestamps and their one-second bucket keys
//! - A clock abstraction so recompute scheduling can be driven by real or
//!   simulated time
//! - The day/night flag that selects the light response curve

use chrono::Timelike;

use crate::constants::time::{DAY_END_HOUR, DAY_START_HOUR, HOURS_PER_DAY, MS_PER_SECOND};

/// Timestamp in milliseconds since epoch (or device boot for monotonic)
pub type Timestamp = u64;

/// Coarsen a timestamp to its one-second bucket key
#[inline]
pub const fn second_key(timestamp: Timestamp) -> u64 {
    timestamp / MS_PER_SECOND
}

/// Source of time for the system
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Fixed time source for testing and replays
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to an absolute time
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move forward by `ms` milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// Coarse time of day, used to pick the light response curve
///
/// Daylight saturates outdoor light sensors while interiors sit at a few
/// hundred lux; at night the relationship flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeOfDay {
    /// Local hours 7 through 19
    #[default]
    Day,
    /// Every other hour
    Night,
}

impl TimeOfDay {
    /// Classify a local hour (0-23). Hours 7 through 19 inclusive are day.
    pub const fn from_hour(hour: u32) -> Self {
        let hour = hour % HOURS_PER_DAY;
        if hour >= DAY_START_HOUR && hour <= DAY_END_HOUR {
            TimeOfDay::Day
        } else {
            TimeOfDay::Night
        }
    }

    /// Classify any chrono time or datetime by its hour field
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self::from_hour(time.hour())
    }

    /// Classify the current local time
    #[cfg(feature = "std")]
    pub fn now_local() -> Self {
        Self::from_time(&chrono::Local::now())
    }

    /// Local time of day where a clock is available, day otherwise
    pub fn at_startup() -> Self {
        #[cfg(feature = "std")]
        {
            Self::now_local()
        }
        #[cfg(not(feature = "std"))]
        {
            TimeOfDay::Day
        }
    }

    /// True during day hours
    pub const fn is_day(self) -> bool {
        matches!(self, TimeOfDay::Day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn fixed_time_advances() {
        let mut time = FixedTime::new(1000);
        assert_eq!(time.now(), 1000);

        time.advance(500);
        assert_eq!(time.now(), 1500);

        time.set(42);
        assert_eq!(time.now(), 42);
    }

    #[test]
    fn second_keys_truncate() {
        assert_eq!(second_key(0), 0);
        assert_eq!(second_key(999), 0);
        assert_eq!(second_key(1000), 1);
        assert_eq!(second_key(12_345), 12);
    }

    #[test]
    fn day_boundaries_are_inclusive() {
        assert_eq!(TimeOfDay::from_hour(6), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(7), TimeOfDay::Day);
        assert_eq!(TimeOfDay::from_hour(19), TimeOfDay::Day);
        assert_eq!(TimeOfDay::from_hour(20), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Night);
    }

    #[test]
    fn day_from_chrono_time() {
        let evening = NaiveTime::from_hms_opt(19, 59, 59).unwrap();
        assert!(TimeOfDay::from_time(&evening).is_day());

        let late = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
        assert!(!TimeOfDay::from_time(&late).is_day());
    }

    #[cfg(feature = "std")]
    #[test]
    fn startup_follows_local_clock() {
        // Sampled on both sides in case the hour rolls over in between
        let before = TimeOfDay::from_time(&chrono::Local::now());
        let startup = TimeOfDay::at_startup();
        let after = TimeOfDay::from_time(&chrono::Local::now());

        assert!(startup == before || startup == after);
    }
}
