//! Forward shift simulation.
//!
//! This module walks a shift minute by minute from its entry time until the
//! target net working time has been credited, converting real minutes into
//! effective minutes with the night factor and inserting the single break
//! once enough effective work has accrued.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{BreakWindow, ClockTime, ShiftRules, ShiftSimulationResult, SimulationStats};

use super::night_classifier::is_night;
use super::virtual_clock::VirtualClock;

/// Computes exit time and break window for a shift that must credit
/// `target_net_minutes` effective minutes.
///
/// The walk proceeds one real minute at a time. A minute inside the night
/// window earns the night factor (60/52.5 under CLT), any other minute earns
/// one. As soon as the effective total reaches the break threshold the break
/// is taken in one step and earns nothing; it is taken at most once and only
/// when `break_minutes > 0`. The walk stops at the first minute boundary
/// where the effective total is at least the target.
///
/// The break threshold here is measured in *effective* minutes; the reverse
/// calculation in [`compute_net_minutes`](super::compute_net_minutes) measures
/// it in real minutes.
///
/// `net_minutes_realized` reports the requested target. The raw accumulator,
/// which can overshoot by less than one night minute, is in `stats`.
///
/// # Errors
///
/// - [`EngineError::InvalidInput`] if `target_net_minutes` is negative, or if
///   `break_minutes` exceeds `rules.safety_cap_minutes` (such a break could
///   never end inside the cap).
/// - [`EngineError::UnreachableTarget`] if more than
///   `rules.safety_cap_minutes` real minutes elapse before the target is met.
///   The truncated result is attached to the error.
///
/// # Examples
///
/// ## Day shift with a one-hour break
///
/// ```
/// use clt_shift_engine::calculation::compute_shift_exit;
/// use clt_shift_engine::models::{ClockTime, ShiftRules};
/// use rust_decimal::Decimal;
///
/// let entry = ClockTime::new(8, 0).unwrap();
/// let result = compute_shift_exit(entry, 60, Decimal::from(528), &ShiftRules::clt()).unwrap();
///
/// assert_eq!(result.exit_time.to_string(), "17:48");
/// assert_eq!(result.break_window.unwrap().to_string(), "12:00 - 13:00");
/// ```
///
/// ## Night shift rolling past midnight
///
/// ```
/// use clt_shift_engine::calculation::compute_shift_exit;
/// use clt_shift_engine::models::{ClockTime, ShiftRules};
/// use rust_decimal::Decimal;
///
/// let entry = ClockTime::new(23, 30).unwrap();
/// let result = compute_shift_exit(entry, 0, Decimal::from(90), &ShiftRules::clt()).unwrap();
///
/// assert!(result.exit_time.is_next_day());
/// assert_eq!(result.exit_time.to_string(), "00:49 (+1)");
/// ```
pub fn compute_shift_exit(
    entry: ClockTime,
    break_minutes: u32,
    target_net_minutes: Decimal,
    rules: &ShiftRules,
) -> EngineResult<ShiftSimulationResult> {
    if target_net_minutes < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "target_net_minutes",
            format!("{} must not be negative", target_net_minutes),
        ));
    }

    if break_minutes > rules.safety_cap_minutes {
        return Err(EngineError::invalid_input(
            "break_minutes",
            format!(
                "{} exceeds the {}-minute simulation cap",
                break_minutes, rules.safety_cap_minutes
            ),
        ));
    }

    let threshold = rules.break_threshold();
    let mut clock = VirtualClock::start_at(entry);
    let mut stats = SimulationStats::default();
    let mut effective = Decimal::ZERO;
    let mut break_window: Option<BreakWindow> = None;
    let mut truncated = false;

    while effective < target_net_minutes {
        if stats.real_minutes > rules.safety_cap_minutes {
            truncated = true;
            break;
        }

        if effective >= threshold && break_window.is_none() && break_minutes > 0 {
            let start = clock.instant();
            clock.advance(break_minutes);
            stats.real_minutes = stats.real_minutes.saturating_add(break_minutes);
            stats.break_minutes = break_minutes;
            break_window = Some(BreakWindow {
                start,
                end: clock.instant(),
            });
            continue;
        }

        if is_night(clock.hour(), &rules.night_window) {
            stats.night_minutes += 1;
        } else {
            stats.day_minutes += 1;
        }
        effective =
            Decimal::from(stats.day_minutes) + rules.night_factor.credit(stats.night_minutes);
        clock.advance(1);
        stats.real_minutes += 1;
    }

    stats.effective_minutes = effective;

    let result = ShiftSimulationResult {
        exit_time: clock.instant(),
        break_window,
        net_minutes_realized: target_net_minutes,
        stats,
    };

    if truncated {
        return Err(EngineError::UnreachableTarget {
            target_net_minutes,
            reached_minutes: effective,
            real_minutes: stats.real_minutes,
            truncated: Box::new(result),
        });
    }

    Ok(result)
}
