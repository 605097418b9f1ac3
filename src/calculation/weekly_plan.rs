//! Weekly schedule planning.
//!
//! This module lays out a week of shifts for a work regime. Every working day
//! shares the entry time and break length. Days whose exit is fixed in
//! advance (a shortened Friday, for instance) are measured with the reverse
//! calculation; whatever they leave of the weekly target is spread evenly
//! over the remaining days, which are then simulated forward.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    BreakWindow, ClockTime, LegalReferences, ShiftInstant, ShiftRules, ShiftSimulationResult,
    WorkRegime,
};

use super::monthly_summary::{MonthlySummary, summarize_month};
use super::net_minutes::{FixedShiftWalk, walk_fixed_shift};
use super::shift_exit::compute_shift_exit;

/// An exit time fixed in advance for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedExit {
    /// The weekday the exit applies to.
    pub day: Weekday,
    /// The fixed exit time.
    pub exit: ClockTime,
}

/// Parameters shared by every day of the planned week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlanRequest {
    /// Entry time used on every working day.
    pub entry: ClockTime,
    /// Break length in minutes.
    pub break_minutes: u32,
    /// Days whose exit time is fixed in advance.
    #[serde(default)]
    pub fixed_exits: Vec<FixedExit>,
}

/// The planned shift for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// The weekday.
    pub weekday: Weekday,
    /// Entry time.
    pub entry: ClockTime,
    /// The break taken, if any.
    pub break_window: Option<BreakWindow>,
    /// Exit time.
    pub exit_time: ShiftInstant,
    /// Net effective minutes credited for the day.
    pub net_minutes: Decimal,
    /// Whether the exit time was fixed in advance.
    pub fixed: bool,
}

impl DayPlan {
    fn fixed(weekday: Weekday, entry: ClockTime, walk: &FixedShiftWalk) -> Self {
        Self {
            weekday,
            entry,
            break_window: walk.break_window,
            exit_time: walk.exit_time,
            net_minutes: walk.net_minutes,
            fixed: true,
        }
    }

    fn simulated(weekday: Weekday, entry: ClockTime, shift: &ShiftSimulationResult) -> Self {
        Self {
            weekday,
            entry,
            break_window: shift.break_window,
            exit_time: shift.exit_time,
            net_minutes: shift.net_minutes_realized,
            fixed: false,
        }
    }
}

/// A complete week of shifts with its weekly and monthly totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// Code of the regime the week was planned for.
    pub regime: String,
    /// One entry per working day, in the regime's order.
    pub days: Vec<DayPlan>,
    /// The regime's weekly target in effective minutes.
    pub weekly_target_minutes: u32,
    /// Sum of the days' net minutes.
    pub weekly_net_minutes: Decimal,
    /// Daily target given to the non-fixed days when some exits were fixed.
    pub redistributed_daily_target: Option<Decimal>,
    /// Monthly projection of the week.
    pub monthly: MonthlySummary,
}

/// Plans a week of shifts for `regime`.
///
/// Without fixed exits every day gets the regime's daily target. With fixed
/// exits, each fixed day is measured with the reverse calculation and the
/// remainder of the weekly target is divided evenly across the other days.
///
/// # Errors
///
/// - [`EngineError::InvalidInput`] if a fixed exit names a day outside the
///   regime or names the same day twice, or if the fixed days already credit
///   more than the weekly target.
/// - [`EngineError::UnreachableTarget`] if the redistributed daily target
///   cannot be reached within the simulation's safety cap.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use clt_shift_engine::calculation::{FixedExit, WeekPlanRequest, plan_week};
/// use clt_shift_engine::models::{ClockTime, LegalReferences, ShiftRules, WorkRegime};
/// use rust_decimal::Decimal;
///
/// let request = WeekPlanRequest {
///     entry: ClockTime::new(8, 0).unwrap(),
///     break_minutes: 60,
///     fixed_exits: vec![FixedExit {
///         day: Weekday::Fri,
///         exit: ClockTime::new(14, 0).unwrap(),
///     }],
/// };
///
/// let plan = plan_week(
///     &request,
///     &WorkRegime::five_day(),
///     &ShiftRules::clt(),
///     &LegalReferences::clt(),
/// )
/// .unwrap();
///
/// // Friday credits 300 minutes; the other four days share the remaining 2340.
/// assert_eq!(plan.redistributed_daily_target, Some(Decimal::from(585)));
/// assert_eq!(plan.days[0].exit_time.to_string(), "18:45");
/// ```
pub fn plan_week(
    request: &WeekPlanRequest,
    regime: &WorkRegime,
    rules: &ShiftRules,
    references: &LegalReferences,
) -> EngineResult<WeekPlan> {
    regime.validate()?;

    for (index, fixed) in request.fixed_exits.iter().enumerate() {
        if !regime.works_on(fixed.day) {
            return Err(EngineError::invalid_input(
                "fixed_exits",
                format!(
                    "{} is not a working day of regime '{}'",
                    fixed.day, regime.code
                ),
            ));
        }
        if request.fixed_exits[..index]
            .iter()
            .any(|other| other.day == fixed.day)
        {
            return Err(EngineError::invalid_input(
                "fixed_exits",
                format!("{} has more than one fixed exit", fixed.day),
            ));
        }
    }

    let fixed_walks: Vec<(Weekday, FixedShiftWalk)> = request
        .fixed_exits
        .iter()
        .map(|fixed| {
            let walk = walk_fixed_shift(request.entry, fixed.exit, request.break_minutes, rules);
            (fixed.day, walk)
        })
        .collect();

    let fixed_net: Decimal = fixed_walks.iter().map(|(_, walk)| walk.net_minutes).sum();
    let weekly_target = regime.weekly_target_minutes();
    let open_days = regime.days_per_week() - fixed_walks.len() as u32;

    let redistributed_daily_target = if fixed_walks.is_empty() || open_days == 0 {
        None
    } else {
        let remaining = Decimal::from(weekly_target) - fixed_net;
        if remaining < Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "fixed_exits",
                format!(
                    "fixed days already credit {} of the {} weekly minutes",
                    fixed_net.round_dp(2).normalize(),
                    weekly_target
                ),
            ));
        }
        Some(remaining / Decimal::from(open_days))
    };

    let open_shift = if open_days > 0 {
        let target = redistributed_daily_target.unwrap_or_else(|| regime.daily_target());
        Some(compute_shift_exit(
            request.entry,
            request.break_minutes,
            target,
            rules,
        )?)
    } else {
        None
    };

    let mut days = Vec::with_capacity(regime.working_days.len());
    for weekday in &regime.working_days {
        let fixed_walk = fixed_walks.iter().find(|(day, _)| day == weekday);
        let day_plan = match (fixed_walk, &open_shift) {
            (Some((_, walk)), _) => DayPlan::fixed(*weekday, request.entry, walk),
            (None, Some(shift)) => DayPlan::simulated(*weekday, request.entry, shift),
            (None, None) => continue,
        };
        days.push(day_plan);
    }

    let weekly_net_minutes: Decimal = days.iter().map(|day| day.net_minutes).sum();
    let monthly = summarize_month(weekly_net_minutes, regime, references)?;

    Ok(WeekPlan {
        regime: regime.code.clone(),
        days,
        weekly_target_minutes: weekly_target,
        weekly_net_minutes,
        redistributed_daily_target,
        monthly,
    })
}
