//! Weekly work regime model.
//!
//! A regime fixes which weekdays are worked and the net daily target that
//! adds up to the weekly ceiling (e.g. 5 × 8h48m or 6 × 7h20m for 44 hours).

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A weekly distribution of working time.
///
/// # Example
///
/// ```
/// use clt_shift_engine::models::WorkRegime;
///
/// let regime = WorkRegime::five_day();
/// assert_eq!(regime.days_per_week(), 5);
/// assert_eq!(regime.weekly_target_minutes(), 2640);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRegime {
    /// Identifier used in configuration and requests (e.g. "five_day").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// The worked weekdays, in calendar order.
    pub working_days: Vec<Weekday>,
    /// Net daily target in effective minutes.
    pub daily_net_minutes: u32,
    /// Average number of working days in a month.
    pub working_days_per_month: u32,
}

impl WorkRegime {
    /// Five days a week with weekly compensation: Monday to Friday, 8h48m per day.
    pub fn five_day() -> Self {
        Self {
            code: "five_day".to_string(),
            name: "5 days (weekly compensation)".to_string(),
            working_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            daily_net_minutes: 528,
            working_days_per_month: 22,
        }
    }

    /// Six days a week: Monday to Saturday, 7h20m per day.
    pub fn six_day() -> Self {
        Self {
            code: "six_day".to_string(),
            name: "6 days (standard schedule)".to_string(),
            working_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
            ],
            daily_net_minutes: 440,
            working_days_per_month: 26,
        }
    }

    /// Returns the number of worked days per week.
    pub fn days_per_week(&self) -> u32 {
        self.working_days.len() as u32
    }

    /// Returns the net weekly target in effective minutes.
    ///
    /// Saturates for regimes that [`validate`](Self::validate) rejects.
    pub fn weekly_target_minutes(&self) -> u32 {
        self.daily_net_minutes.saturating_mul(self.days_per_week())
    }

    /// Returns the daily target as a decimal.
    pub fn daily_target(&self) -> Decimal {
        Decimal::from(self.daily_net_minutes)
    }

    /// Returns true if `day` is one of the regime's working days.
    pub fn works_on(&self, day: Weekday) -> bool {
        self.working_days.contains(&day)
    }

    /// Checks that the regime describes a usable week.
    pub fn validate(&self) -> EngineResult<()> {
        if self.working_days.is_empty() {
            return Err(EngineError::invalid_input(
                format!("regimes.{}.working_days", self.code),
                "at least one working day is required",
            ));
        }
        for (index, day) in self.working_days.iter().enumerate() {
            if self.working_days[..index].contains(day) {
                return Err(EngineError::invalid_input(
                    format!("regimes.{}.working_days", self.code),
                    format!("{} is listed more than once", day),
                ));
            }
        }
        if self
            .daily_net_minutes
            .checked_mul(self.days_per_week())
            .is_none()
        {
            return Err(EngineError::invalid_input(
                format!("regimes.{}.daily_net_minutes", self.code),
                format!(
                    "{} minutes over {} days overflows the weekly target",
                    self.daily_net_minutes,
                    self.days_per_week()
                ),
            ));
        }
        if self.working_days_per_month == 0 {
            return Err(EngineError::invalid_input(
                format!("regimes.{}.working_days_per_month", self.code),
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_day_regime_totals() {
        let regime = WorkRegime::five_day();
        assert_eq!(regime.days_per_week(), 5);
        assert_eq!(regime.weekly_target_minutes(), 44 * 60);
        assert!(regime.works_on(Weekday::Fri));
        assert!(!regime.works_on(Weekday::Sat));
    }

    #[test]
    fn test_six_day_regime_totals() {
        let regime = WorkRegime::six_day();
        assert_eq!(regime.days_per_week(), 6);
        assert_eq!(regime.weekly_target_minutes(), 44 * 60);
        assert!(regime.works_on(Weekday::Sat));
        assert!(!regime.works_on(Weekday::Sun));
    }

    #[test]
    fn test_builtin_regimes_are_valid() {
        assert!(WorkRegime::five_day().validate().is_ok());
        assert!(WorkRegime::six_day().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_days() {
        let mut regime = WorkRegime::five_day();
        regime.working_days.push(Weekday::Mon);

        match regime.validate() {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "regimes.five_day.working_days");
                assert!(message.contains("Mon"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_validate_rejects_overflowing_weekly_target() {
        let mut regime = WorkRegime::six_day();
        regime.daily_net_minutes = u32::MAX / 2;

        match regime.validate() {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "regimes.six_day.daily_net_minutes");
            }
            _ => panic!("Expected InvalidInput error"),
        }
        assert_eq!(regime.weekly_target_minutes(), u32::MAX);
    }

    #[test]
    fn test_validate_rejects_empty_week() {
        let mut regime = WorkRegime::six_day();
        regime.working_days.clear();
        assert!(regime.validate().is_err());
    }
}
