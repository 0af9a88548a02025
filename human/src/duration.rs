//! Durations and relative times as short strings like `"2m  3s"` or `"5h"`.

use crate::round::js_round;

/// A display unit and its length in seconds.
#[derive(Debug, Clone, Copy)]
struct Unit {
    suffix: char,
    seconds: u32,
}

/// Units from largest to smallest.
const UNITS: [Unit; 5] = [
    Unit { suffix: 'w', seconds: 7 * 24 * 60 * 60 },
    Unit { suffix: 'd', seconds: 24 * 60 * 60 },
    Unit { suffix: 'h', seconds: 60 * 60 },
    Unit { suffix: 'm', seconds: 60 },
    Unit { suffix: 's', seconds: 1 },
];

/// Formats a duration in seconds using every non-zero unit.
///
/// Each unit is right-aligned in a field of four characters so columns of
/// durations line up. Negative durations format like positive ones.
///
/// ```
/// assert_eq!(human::str_duration(123), "  2m  3s");
/// assert_eq!(human::str_duration(0), "  0s");
/// ```
#[must_use]
pub fn str_duration(seconds: i64) -> String {
    let mut remaining = seconds.unsigned_abs();
    if remaining == 0 {
        return "  0s".to_string();
    }
    let mut out = String::new();
    for unit in UNITS {
        let unit_seconds = u64::from(unit.seconds);
        if unit_seconds <= remaining {
            let count = remaining / unit_seconds;
            let field = format!("{count}{}", unit.suffix);
            out.push_str(&format!("{field:>4}"));
            remaining %= unit_seconds;
        }
    }
    out
}

/// Formats the distance between two instants, given in milliseconds since
/// the epoch, as a single rounded unit.
///
/// The largest unit is used whose next smaller unit would round to at least
/// one of it, so 59.6 seconds reads `"1m"` rather than `"60s"`. Direction is
/// ignored.
///
/// ```
/// assert_eq!(human::diff_date(0.0, 123_000.0), "2m");
/// ```
#[must_use]
pub fn diff_date(then_ms: f64, now_ms: f64) -> String {
    let diff = ((then_ms - now_ms) / 1000.0).abs();
    for pair in UNITS.windows(2) {
        let (unit, next) = (pair[0], pair[1]);
        let next_seconds = f64::from(next.seconds);
        let next_rounded = js_round(diff / next_seconds) * next_seconds;
        if next_rounded / f64::from(unit.seconds) >= 1.0 {
            return format_rounded(diff, unit);
        }
    }
    format_rounded(diff, UNITS[UNITS.len() - 1])
}

fn format_rounded(diff: f64, unit: Unit) -> String {
    let count = js_round(diff / f64::from(unit.seconds));
    format!("{count}{}", unit.suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_units_are_padded() {
        assert_eq!(str_duration(1), "  1s");
        assert_eq!(str_duration(60), "  1m");
        assert_eq!(str_duration(3600), "  1h");
        assert_eq!(str_duration(86_400), "  1d");
        assert_eq!(str_duration(604_800), "  1w");
    }

    #[test]
    fn mixed_units_skip_zero_fields() {
        assert_eq!(str_duration(123), "  2m  3s");
        assert_eq!(str_duration(3601), "  1h  1s");
        assert_eq!(str_duration(90_061), "  1d  1h  1m  1s");
    }

    #[test]
    fn wide_counts_are_not_truncated() {
        assert_eq!(str_duration(59), " 59s");
        assert_eq!(str_duration(604_800 * 120), "120w");
        assert_eq!(str_duration(604_800 * 1234), "1234w");
    }

    #[test]
    fn zero_and_negative() {
        assert_eq!(str_duration(0), "  0s");
        assert_eq!(str_duration(-123), str_duration(123));
    }

    #[test]
    fn diff_date_picks_single_unit() {
        assert_eq!(diff_date(0.0, 5_000.0), "5s");
        assert_eq!(diff_date(0.0, 123_000.0), "2m");
        assert_eq!(diff_date(0.0, 5.0 * 3_600_000.0), "5h");
        assert_eq!(diff_date(0.0, 3.0 * 86_400_000.0), "3d");
        assert_eq!(diff_date(0.0, 2.0 * 604_800_000.0), "2w");
    }

    #[test]
    fn diff_date_promotes_near_boundaries() {
        assert_eq!(diff_date(0.0, 59_600.0), "1m");
        assert_eq!(diff_date(0.0, 59_400.0), "59s");
        assert_eq!(diff_date(0.0, 23.6 * 3_600_000.0), "1d");
    }

    #[test]
    fn diff_date_ignores_direction() {
        assert_eq!(diff_date(123_000.0, 0.0), diff_date(0.0, 123_000.0));
        assert_eq!(diff_date(1_000.0, 1_000.0), "0s");
    }
}
