//! Monthly projection of a weekly schedule.
//!
//! This module scales a week's net working time to a commercial month and
//! places it next to the CLT reference figures (44 hours a week, 220 hours a
//! month). The figures are informational; no compliance verdict is drawn.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{LegalReferences, WorkRegime};

/// Monthly totals for a regime, with the legal reference figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Net minutes credited over one week.
    pub weekly_net_minutes: Decimal,
    /// Weekly ceiling of working time, in minutes.
    pub weekly_limit_minutes: u32,
    /// Monthly reference hours used for salary computation.
    pub monthly_reference_hours: u32,
    /// Average working days in a month for the regime.
    pub working_days_per_month: u32,
    /// Weekly net scaled to the regime's working days per month.
    pub estimated_monthly_minutes: Decimal,
}

/// Projects `weekly_net_minutes` over a month of the given regime.
///
/// The estimate is `weekly × working_days_per_month / days_per_week`.
///
/// # Examples
///
/// ```
/// use clt_shift_engine::calculation::summarize_month;
/// use clt_shift_engine::models::{LegalReferences, WorkRegime};
/// use rust_decimal::Decimal;
///
/// let summary = summarize_month(
///     Decimal::from(2640),
///     &WorkRegime::five_day(),
///     &LegalReferences::clt(),
/// )
/// .unwrap();
///
/// assert_eq!(summary.estimated_monthly_minutes, Decimal::from(11616));
/// assert_eq!(summary.monthly_reference_hours, 220);
/// ```
pub fn summarize_month(
    weekly_net_minutes: Decimal,
    regime: &WorkRegime,
    references: &LegalReferences,
) -> EngineResult<MonthlySummary> {
    regime.validate()?;

    let estimated_monthly_minutes = weekly_net_minutes
        * Decimal::from(regime.working_days_per_month)
        / Decimal::from(regime.days_per_week());

    Ok(MonthlySummary {
        weekly_net_minutes,
        weekly_limit_minutes: references.weekly_limit_minutes,
        monthly_reference_hours: references.monthly_reference_hours,
        working_days_per_month: regime.working_days_per_month,
        estimated_monthly_minutes,
    })
}
