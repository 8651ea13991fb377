use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Milliseconds between 0001-01-01T00:00:00Z (proleptic Gregorian) and the Unix epoch.
pub const CALENDAR_EPOCH_OFFSET_MS: i64 = 62_135_596_800_000;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// An absolute point in time, stored as milliseconds since the Unix epoch.
/// Timezone-free: callers convert local wall-clock readings before constructing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    unix_ms: i64,
}

impl Instant {
    /// The calendar epoch itself (year 1, day 1, 00:00:00).
    pub const EPOCH: Instant = Instant { unix_ms: -CALENDAR_EPOCH_OFFSET_MS };

    pub const fn from_unix_millis(unix_ms: i64) -> Self {
        Self { unix_ms }
    }

    /// Build from a JS-style `f64` millisecond timestamp (`Date.getTime()`).
    /// Sub-millisecond fractions are truncated.
    pub fn from_unix_millis_f64(unix_ms: f64) -> Self {
        Self { unix_ms: unix_ms as i64 }
    }

    /// Build from a system clock reading. Times before 1970 are supported.
    pub fn from_system_time(time: SystemTime) -> Self {
        let unix_ms = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
            Err(before) => i64::try_from(before.duration().as_millis()).map_or(i64::MIN, |ms| -ms),
        };
        Self { unix_ms }
    }

    pub fn unix_millis(&self) -> i64 {
        self.unix_ms
    }

    /// Shift by a duration (saturating at the `i64` range).
    pub fn plus(&self, by: Duration) -> Self {
        let by_ms = i64::try_from(by.as_millis()).unwrap_or(i64::MAX);
        Self { unix_ms: self.unix_ms.saturating_add(by_ms) }
    }

    /// Hours elapsed since the calendar epoch, as a real number.
    /// Summed in `f64` so instants near `i64::MAX` stay in range.
    pub fn hours_since_epoch(&self) -> f64 {
        (self.unix_ms as f64 + CALENDAR_EPOCH_OFFSET_MS as f64) / MS_PER_HOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_zero_hours() {
        assert_eq!(Instant::EPOCH.hours_since_epoch(), 0.0);
    }

    #[test]
    fn unix_epoch_hours() {
        // 719162 days from 0001-01-01 to 1970-01-01
        let h = Instant::from_unix_millis(0).hours_since_epoch();
        assert!((h - 719_162.0 * 24.0).abs() < 1e-9, "hours = {h}");
    }

    #[test]
    fn system_time_round_trips_millis() {
        let t = UNIX_EPOCH + Duration::from_millis(1_700_000_000_123);
        assert_eq!(Instant::from_system_time(t).unix_millis(), 1_700_000_000_123);

        let before = UNIX_EPOCH - Duration::from_millis(5_000);
        assert_eq!(Instant::from_system_time(before).unix_millis(), -5_000);
    }

    #[test]
    fn plus_advances() {
        let t = Instant::from_unix_millis(1_000).plus(Duration::from_secs(1));
        assert_eq!(t.unix_millis(), 2_000);
        assert!(t > Instant::from_unix_millis(1_000));
    }

    #[test]
    fn plus_saturates_on_huge_durations() {
        let t = Instant::from_unix_millis(0).plus(Duration::MAX);
        assert_eq!(t.unix_millis(), i64::MAX);
        assert!(t > Instant::from_unix_millis(0));
    }

    #[test]
    fn hours_near_i64_max_do_not_overflow() {
        let h = Instant::from_unix_millis(i64::MAX).hours_since_epoch();
        let expected = (i64::MAX as f64 + CALENDAR_EPOCH_OFFSET_MS as f64) / MS_PER_HOUR;
        assert!(h.is_finite() && h > 0.0);
        assert_eq!(h, expected);
    }

    #[test]
    fn f64_millis_truncate() {
        assert_eq!(Instant::from_unix_millis_f64(1234.9).unix_millis(), 1234);
    }
}
