/// Proposed Martian calendar.
///
/// A year is either 668 or 669 sols long. Odd years and years divisible by ten
/// are leap years, except that years divisible by 100 never are.

use std::fmt;

use crate::calendar::instant::Instant;

/// Length of a leap year in Earth hours.
pub const LEAP_YEAR_HOURS: f64 = 16497.4731;
/// Length of a common year in Earth hours.
pub const COMMON_YEAR_HOURS: f64 = 16472.8132;
/// Length of one sol (Martian day) in Earth hours.
pub const SOL_HOURS: f64 = 24.6599;
/// The calendar's seconds are a third of the length implied by the hour.
pub const SECOND_DIVISOR: f64 = 3.0;

/// A date in the Martian calendar. Ordering is lexicographic over
/// `(year, day, hour, minute, second)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MartianDate {
    /// 1-based year.
    pub year: u32,
    /// 1-based sol of the year.
    pub day: u32,
    /// Whole hours into the sol. A sol is 24h39m, so this reaches 24.
    pub hour: u32,
    pub minute: u32,
    /// Rounded calendar second, `0..=20`.
    pub second: u32,
}

impl MartianDate {
    pub fn new(year: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self { year, day, hour, minute, second }
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32, u32) {
        (self.year, self.day, self.hour, self.minute, self.second)
    }
}

impl fmt::Display for MartianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Year {}, day {}, {:02}:{:02}:{:02}",
            self.year, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Leap rule for a 1-based year counter. Divisible-by-100 always wins.
pub fn is_leap_year(year: u32) -> bool {
    (year % 2 != 0 || year % 10 == 0) && year % 100 != 0
}

/// Length of the given year in Earth hours.
pub fn year_length_hours(year: u32) -> f64 {
    if is_leap_year(year) {
        LEAP_YEAR_HOURS
    } else {
        COMMON_YEAR_HOURS
    }
}

/// Convert an instant to a Martian date.
///
/// Instants before 0001-01-01T00:00:00Z are outside the calendar; the result
/// for them is not meaningful.
pub fn to_mars(instant: Instant) -> MartianDate {
    let mut hours = instant.hours_since_epoch();

    // Continuation is tested against the leap length, not the length of the
    // year about to be consumed, so a common year's tail can survive the loop.
    let mut year: u32 = 0;
    while hours >= LEAP_YEAR_HOURS {
        year += 1;
        hours -= year_length_hours(year);
    }

    let day_index = (hours / SOL_HOURS).floor();
    hours -= day_index * SOL_HOURS;

    let mut leftover = hours % 1.0;
    hours -= leftover;
    let minute = (leftover * 60.0).floor();
    leftover -= minute / 60.0;
    let second = (leftover * 3600.0 / SECOND_DIVISOR).round();

    MartianDate {
        year: year + 1,
        day: day_index as u32 + 1,
        hour: hours.floor() as u32,
        minute: minute as u32,
        second: second as u32,
    }
}

/// Convert and render in one step: `"Year Y, day D, HH:MM:SS"`.
pub fn format_mars_time(instant: Instant) -> String {
    to_mars(instant).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::instant::CALENDAR_EPOCH_OFFSET_MS;

    fn at_epoch_plus_ms(ms: i64) -> Instant {
        Instant::from_unix_millis(ms - CALENDAR_EPOCH_OFFSET_MS)
    }

    #[test]
    fn leap_year_table() {
        assert!(is_leap_year(1));
        assert!(is_leap_year(10));
        assert!(!is_leap_year(100));
        assert!(is_leap_year(110));
        assert!(!is_leap_year(200));
        assert!(!is_leap_year(2));
        // Odd but divisible by 100 is impossible; 300 is even, 1100 too.
        assert!(!is_leap_year(300));
        assert!(is_leap_year(1001));
    }

    #[test]
    fn leap_rule_matches_definition() {
        for y in 1..=2000u32 {
            let expected = (y % 2 == 1 || y % 10 == 0) && y % 100 != 0;
            assert_eq!(is_leap_year(y), expected, "year {y}");
        }
    }

    #[test]
    fn year_lengths() {
        assert_eq!(year_length_hours(1), LEAP_YEAR_HOURS);
        assert_eq!(year_length_hours(2), COMMON_YEAR_HOURS);
        assert_eq!(year_length_hours(100), COMMON_YEAR_HOURS);
    }

    #[test]
    fn epoch_is_first_moment() {
        assert_eq!(to_mars(Instant::EPOCH).as_tuple(), (1, 1, 0, 0, 0));
    }

    #[test]
    fn second_sol_starts_after_one_sol() {
        // 24.6599 h = 88 775 640 ms
        assert_eq!(to_mars(at_epoch_plus_ms(88_775_640)).as_tuple(), (1, 2, 0, 0, 0));
    }

    #[test]
    fn twenty_five_hours_in() {
        assert_eq!(to_mars(at_epoch_plus_ms(25 * 3_600_000)).as_tuple(), (1, 2, 0, 20, 8));
    }

    #[test]
    fn year_two_starts_after_leap_year() {
        // 16497.4731 h = 59 390 903 160 ms
        assert_eq!(to_mars(at_epoch_plus_ms(59_390_903_160)).as_tuple(), (2, 1, 0, 0, 0));
    }

    #[test]
    fn last_moment_of_year_one_reports_hour_24() {
        let date = to_mars(at_epoch_plus_ms(59_390_903_159));
        assert_eq!(date.as_tuple(), (1, 669, 24, 39, 12));
    }

    #[test]
    fn common_year_tail_survives_loop() {
        // 32980 h: past one leap + one common year, but below the leap threshold
        // after the first subtraction, so it is still reported as year 2.
        let date = to_mars(at_epoch_plus_ms(32_980 * 3_600_000));
        assert_eq!(date.as_tuple(), (2, 669, 9, 42, 16));
    }

    #[test]
    fn known_unix_instants() {
        assert_eq!(to_mars(Instant::from_unix_millis(0)).as_tuple(), (1047, 573, 4, 46, 6));
        assert_eq!(
            to_mars(Instant::from_unix_millis(1_700_000_000_000)).as_tuple(),
            (1076, 332, 14, 34, 3)
        );
        // 2026-01-01T00:00:00Z
        assert_eq!(
            to_mars(Instant::from_unix_millis(1_767_225_600_000)).as_tuple(),
            (1077, 421, 20, 48, 3)
        );
    }

    #[test]
    fn monotonic_over_increasing_instants() {
        let mut prev = to_mars(Instant::EPOCH);
        // Step ~37 minutes at a time through the first few years.
        let step = 2_221_111_i64;
        for i in 1..60_000i64 {
            let next = to_mars(at_epoch_plus_ms(i * step));
            assert!(next >= prev, "went backwards at step {i}: {prev:?} -> {next:?}");
            prev = next;
        }
    }

    #[test]
    fn components_stay_in_range() {
        let step = 7_919_993_i64;
        for i in 0..40_000i64 {
            let date = to_mars(Instant::from_unix_millis(i * step));
            assert!(date.year >= 1);
            assert!(date.day >= 1 && date.day <= 669, "day = {}", date.day);
            assert!(date.hour <= 24, "hour = {}", date.hour);
            assert!(date.minute <= 59, "minute = {}", date.minute);
            assert!(date.second <= 20, "second = {}", date.second);
        }
    }

    #[test]
    fn latest_representable_instant_converts() {
        let date = to_mars(Instant::from_unix_millis(i64::MAX));
        assert!(date.year > 100_000_000, "year = {}", date.year);
        assert!(date.day >= 1 && date.day <= 669);
        assert!(date.hour <= 24);

        // The bridge's f64 constructor saturates to the same instant.
        assert_eq!(Instant::from_unix_millis_f64(1e300), Instant::from_unix_millis(i64::MAX));
    }

    #[test]
    fn display_pads_time_fields() {
        let date = MartianDate::new(1047, 573, 4, 46, 6);
        assert_eq!(date.to_string(), "Year 1047, day 573, 04:46:06");
        assert_eq!(format_mars_time(Instant::EPOCH), "Year 1, day 1, 00:00:00");
    }
}
