//! Windowed Aggregator Constants
//!
//! Sizing for the one-second bucketed rolling statistics used to smooth
//! magnetic-field magnitude.

/// Number of one-second buckets retained before eviction is attempted.
///
/// Also the minimum bucket count before a mean is computed at all, so the
/// aggregator stays silent for the first ten seconds of data.
///
/// Source: Original field prototype
pub const DEFAULT_RETENTION_BUCKETS: usize = 10;

/// Offset, in seconds, of the bucket removed on each eviction attempt.
///
/// Eviction removes the bucket keyed exactly `now - offset`. It is not an
/// oldest-first policy: if no bucket exists at that key, nothing is removed.
///
/// Source: Original field prototype
pub const DEFAULT_EVICTION_OFFSET_SECS: u64 = 5;
