//! Millisecond-precision signed timestamp type
//!
//! Timestamps are stored as signed milliseconds relative to the Unix epoch
//! (1970-01-01 00:00:00 UTC). Negative values are instants before the epoch.
//!
//! ## Range
//!
//! The full `i64` range is valid. Calendar interpretation (leap seconds,
//! time zones) is not modeled: a `Timestamp` is an opaque millisecond count.
//! Conversion to `chrono` is offered where chrono can represent the instant.
//!
//! ## Usage
//!
//! ```
//! use ordstamp_core::Timestamp;
//!
//! let before_epoch = Timestamp::from_millis(-1_500);
//! let after_epoch = Timestamp::from_secs(2);
//!
//! assert!(before_epoch < Timestamp::EPOCH);
//! assert_eq!(before_epoch.as_secs(), -2);
//! assert_eq!(after_epoch.as_millis(), 2_000);
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Signed millisecond timestamp
///
/// ## Invariants
///
/// - Every `i64` value is a valid timestamp
/// - Ordering of timestamps is the numeric ordering of the millisecond count
/// - The zero timestamp represents the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Unix epoch (1970-01-01 00:00:00 UTC)
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Earliest representable timestamp
    pub const MIN: Timestamp = Timestamp(i64::MIN);

    /// Latest representable timestamp
    pub const MAX: Timestamp = Timestamp(i64::MAX);

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a timestamp for the current moment from the system clock
    pub fn now() -> Self {
        Timestamp(Utc::now().timestamp_millis())
    }

    /// Create a timestamp from milliseconds since epoch
    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Create a timestamp from seconds since epoch
    ///
    /// Saturates at `MIN`/`MAX` when the millisecond count does not fit.
    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(1_000))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get milliseconds since Unix epoch
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Get whole seconds since Unix epoch, rounding towards the past
    #[inline]
    pub const fn as_secs(&self) -> i64 {
        self.0.div_euclid(1_000)
    }

    // =========================================================================
    // Duration Operations
    // =========================================================================

    /// Compute duration since an earlier timestamp
    ///
    /// Returns `None` if `earlier` is actually later than `self`.
    pub fn duration_since(&self, earlier: Timestamp) -> Option<Duration> {
        if self.0 >= earlier.0 {
            Some(Duration::from_millis(self.0.abs_diff(earlier.0)))
        } else {
            None
        }
    }

    /// Add a duration, returning `None` on overflow
    ///
    /// Truncates sub-millisecond precision of `duration`.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        let millis = u64::try_from(duration.as_millis()).ok()?;
        self.0.checked_add_unsigned(millis).map(Timestamp)
    }

    /// Subtract a duration, returning `None` on overflow
    ///
    /// Truncates sub-millisecond precision of `duration`.
    pub fn checked_sub(&self, duration: Duration) -> Option<Self> {
        let millis = u64::try_from(duration.as_millis()).ok()?;
        self.0.checked_sub_unsigned(millis).map(Timestamp)
    }

    /// Add a duration, saturating at `Timestamp::MAX`
    ///
    /// Truncates sub-millisecond precision of `duration`.
    pub fn saturating_add(&self, duration: Duration) -> Self {
        self.checked_add(duration).unwrap_or(Timestamp::MAX)
    }

    /// Subtract a duration, saturating at `Timestamp::MIN`
    ///
    /// Truncates sub-millisecond precision of `duration`.
    pub fn saturating_sub(&self, duration: Duration) -> Self {
        self.checked_sub(duration).unwrap_or(Timestamp::MIN)
    }

    /// Check if this timestamp is before another
    #[inline]
    pub fn is_before(&self, other: Timestamp) -> bool {
        self.0 < other.0
    }

    /// Check if this timestamp is after another
    #[inline]
    pub fn is_after(&self, other: Timestamp) -> bool {
        self.0 > other.0
    }

    // =========================================================================
    // chrono interop
    // =========================================================================

    /// Convert to a UTC datetime
    ///
    /// Returns `None` when the instant lies outside chrono's supported range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.0)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::EPOCH
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}ms", self.0),
        }
    }
}

// ============================================================================
// From Implementations
// ============================================================================

impl From<i64> for Timestamp {
    /// Create from raw milliseconds
    fn from(millis: i64) -> Self {
        Timestamp::from_millis(millis)
    }
}

impl From<Timestamp> for i64 {
    /// Extract raw milliseconds
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    /// Truncates sub-millisecond precision
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt.timestamp_millis())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_epoch() {
        assert_eq!(Timestamp::EPOCH.as_millis(), 0);
        assert_eq!(Timestamp::EPOCH.as_secs(), 0);
    }

    #[test]
    fn test_timestamp_from_secs() {
        let ts = Timestamp::from_secs(1000);
        assert_eq!(ts.as_secs(), 1000);
        assert_eq!(ts.as_millis(), 1_000_000);

        assert_eq!(Timestamp::from_secs(i64::MAX), Timestamp::MAX);
        assert_eq!(Timestamp::from_secs(i64::MIN), Timestamp::MIN);
    }

    #[test]
    fn test_timestamp_as_secs_rounds_towards_past() {
        assert_eq!(Timestamp::from_millis(1_999).as_secs(), 1);
        assert_eq!(Timestamp::from_millis(-1).as_secs(), -1);
        assert_eq!(Timestamp::from_millis(-1_000).as_secs(), -1);
        assert_eq!(Timestamp::from_millis(-1_001).as_secs(), -2);
    }

    #[test]
    fn test_timestamp_now_is_after_2020() {
        let jan_2020 = Timestamp::from_secs(1_577_836_800);
        assert!(Timestamp::now().is_after(jan_2020));
    }

    #[test]
    fn test_timestamp_ordering_across_epoch() {
        let t1 = Timestamp::from_millis(-100);
        let t2 = Timestamp::from_millis(200);
        let t3 = Timestamp::from_millis(-100);

        assert!(t1 < t2);
        assert!(Timestamp::MIN < t1);
        assert!(t2 < Timestamp::MAX);
        assert_eq!(t1, t3);
        assert!(t1.is_before(t2));
        assert!(t2.is_after(t1));
    }

    #[test]
    fn test_timestamp_duration_since() {
        let t1 = Timestamp::from_millis(-1000);
        let t2 = Timestamp::from_millis(3000);

        let duration = t2.duration_since(t1).unwrap();
        assert_eq!(duration.as_millis(), 4000);
        assert!(t1.duration_since(t2).is_none());

        let full = Timestamp::MAX.duration_since(Timestamp::MIN).unwrap();
        assert_eq!(full.as_millis(), u64::MAX as u128);
    }

    #[test]
    fn test_timestamp_checked_arithmetic() {
        let ts = Timestamp::from_millis(1000);
        assert_eq!(
            ts.checked_add(Duration::from_millis(500)),
            Some(Timestamp::from_millis(1500))
        );
        assert_eq!(
            ts.checked_sub(Duration::from_millis(1500)),
            Some(Timestamp::from_millis(-500))
        );
        assert!(Timestamp::MAX.checked_add(Duration::from_millis(1)).is_none());
        assert!(Timestamp::MIN.checked_sub(Duration::from_millis(1)).is_none());
        assert!(ts.checked_add(Duration::MAX).is_none());
    }

    #[test]
    fn test_timestamp_saturating_arithmetic() {
        assert_eq!(
            Timestamp::MAX.saturating_add(Duration::from_millis(1)),
            Timestamp::MAX
        );
        assert_eq!(
            Timestamp::MIN.saturating_sub(Duration::from_millis(1)),
            Timestamp::MIN
        );
        assert_eq!(
            Timestamp::EPOCH.saturating_sub(Duration::from_secs(1)),
            Timestamp::from_millis(-1000)
        );
    }

    #[test]
    fn test_timestamp_arithmetic_spanning_full_range() {
        let half_range = Duration::from_millis(1 << 63);
        let full_range = Duration::from_millis(u64::MAX);

        assert_eq!(
            Timestamp::MAX.checked_sub(half_range),
            Some(Timestamp::from_millis(-1))
        );
        assert_eq!(
            Timestamp::MIN.checked_add(half_range),
            Some(Timestamp::EPOCH)
        );
        assert_eq!(
            Timestamp::MIN.saturating_add(half_range),
            Timestamp::EPOCH
        );
        assert_eq!(
            Timestamp::MAX.saturating_sub(half_range),
            Timestamp::from_millis(-1)
        );
        assert_eq!(Timestamp::MIN.checked_add(full_range), Some(Timestamp::MAX));
        assert_eq!(Timestamp::MAX.checked_sub(full_range), Some(Timestamp::MIN));
        assert!(Timestamp::EPOCH.checked_add(full_range).is_none());
        assert_eq!(
            Timestamp::from_millis(1).saturating_sub(full_range),
            Timestamp::MIN
        );
    }

    #[test]
    fn test_timestamp_arithmetic_truncates_sub_millisecond() {
        let ts = Timestamp::from_millis(1000);
        assert_eq!(
            ts.checked_add(Duration::from_micros(1500)),
            Some(Timestamp::from_millis(1001))
        );
        assert_eq!(
            ts.checked_sub(Duration::from_micros(999)),
            Some(ts)
        );
    }

    #[test]
    fn test_timestamp_display() {
        let ts = Timestamp::from_millis(1_234_567);
        assert_eq!(ts.to_string(), "1970-01-01T00:20:34.567Z");

        let before = Timestamp::from_millis(-1);
        assert_eq!(before.to_string(), "1969-12-31T23:59:59.999Z");

        assert_eq!(Timestamp::MAX.to_string(), format!("{}ms", i64::MAX));
    }

    #[test]
    fn test_timestamp_chrono_roundtrip() {
        let dt = Utc.with_ymd_and_hms(1950, 6, 15, 12, 30, 0).unwrap();
        let ts = Timestamp::from(dt);
        assert!(ts.is_before(Timestamp::EPOCH));
        assert_eq!(ts.to_datetime(), Some(dt));
        assert!(Timestamp::MIN.to_datetime().is_none());
    }

    #[test]
    fn test_timestamp_i64_conversions() {
        let ts: Timestamp = (-12345i64).into();
        assert_eq!(ts.as_millis(), -12345);
        let millis: i64 = ts.into();
        assert_eq!(millis, -12345);
    }

    #[test]
    fn test_timestamp_serialization_is_transparent() {
        let ts = Timestamp::from_millis(-1_234_567);
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "-1234567");
        let restored: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, restored);
    }

    #[test]
    fn test_timestamp_default() {
        assert_eq!(Timestamp::default(), Timestamp::EPOCH);
    }
}
