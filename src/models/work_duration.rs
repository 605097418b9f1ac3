//! Helpers for presenting minute durations.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Converts a (possibly fractional) minute count to whole seconds, truncating.
///
/// Negative durations clamp to zero.
///
/// # Example
///
/// ```
/// use clt_shift_engine::models::whole_seconds;
/// use rust_decimal::Decimal;
///
/// assert_eq!(whole_seconds(Decimal::new(945, 1)), 5670);
/// ```
pub fn whole_seconds(minutes: Decimal) -> i64 {
    (minutes.max(Decimal::ZERO) * Decimal::from(60))
        .trunc()
        .to_i64()
        .unwrap_or(i64::MAX)
}

/// Formats a minute count as `"HHh MMm"`, dropping leftover seconds.
///
/// # Example
///
/// ```
/// use clt_shift_engine::models::format_hours_minutes;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_hours_minutes(Decimal::from(528)), "08h 48m");
/// ```
pub fn format_hours_minutes(minutes: Decimal) -> String {
    let total_seconds = whole_seconds(minutes);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    format!("{:02}h {:02}m", hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_whole_seconds_truncates() {
        assert_eq!(whole_seconds(dec("1")), 60);
        assert_eq!(whole_seconds(dec("1.999")), 119);
    }

    #[test]
    fn test_whole_seconds_clamps_negative() {
        assert_eq!(whole_seconds(dec("-5")), 0);
    }

    #[test]
    fn test_format_five_day_regime_target() {
        assert_eq!(format_hours_minutes(dec("528")), "08h 48m");
    }

    #[test]
    fn test_format_six_day_regime_target() {
        assert_eq!(format_hours_minutes(dec("440")), "07h 20m");
    }

    #[test]
    fn test_format_weekly_total_over_a_day() {
        assert_eq!(format_hours_minutes(dec("2640")), "44h 00m");
    }

    #[test]
    fn test_format_drops_partial_minute() {
        assert_eq!(format_hours_minutes(dec("107.9")), "01h 47m");
    }
}
