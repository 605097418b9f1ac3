//! Reverse shift calculation.
//!
//! Given an entry and an exit time that is already fixed (for example a
//! shortened Friday), this module recovers how many effective minutes the
//! shift actually credits. The weekly planner uses it to work out the deficit
//! left for the remaining days.

use rust_decimal::Decimal;

use crate::models::{BreakWindow, ClockTime, ShiftInstant, ShiftRules};

use super::night_classifier::is_night;
use super::virtual_clock::VirtualClock;

/// Full outcome of walking a shift with a fixed exit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FixedShiftWalk {
    pub(crate) exit_time: ShiftInstant,
    pub(crate) break_window: Option<BreakWindow>,
    pub(crate) net_minutes: Decimal,
}

/// Computes the effective minutes credited between `entry` and a fixed `exit`.
///
/// An exit that is not strictly after the entry is taken to fall on the next
/// day, so `22:00 → 06:00` is an eight-hour overnight shift and an exit equal
/// to the entry spans a full day.
///
/// The break is inserted once **real** elapsed minutes reach the break
/// threshold. This differs on purpose from
/// [`compute_shift_exit`](super::compute_shift_exit), which places the break by
/// effective minutes: here the question is how much a shift of fixed real
/// length contains, not when to stop for a break while working towards a
/// target. Breaks that would start at or after the exit are never taken, and a
/// break that would run past the exit is cut short at the exit.
///
/// # Examples
///
/// ```
/// use clt_shift_engine::calculation::compute_net_minutes;
/// use clt_shift_engine::models::{ClockTime, ShiftRules};
/// use rust_decimal::Decimal;
///
/// let entry = ClockTime::new(8, 0).unwrap();
/// let exit = ClockTime::new(14, 0).unwrap();
///
/// let net = compute_net_minutes(entry, exit, 60, &ShiftRules::clt());
/// assert_eq!(net, Decimal::from(300));
/// ```
pub fn compute_net_minutes(
    entry: ClockTime,
    exit: ClockTime,
    break_minutes: u32,
    rules: &ShiftRules,
) -> Decimal {
    walk_fixed_shift(entry, exit, break_minutes, rules).net_minutes
}

pub(crate) fn walk_fixed_shift(
    entry: ClockTime,
    exit: ClockTime,
    break_minutes: u32,
    rules: &ShiftRules,
) -> FixedShiftWalk {
    let mut clock = VirtualClock::start_at(entry);
    let end = clock.resolve_exit(exit);

    let mut real_minutes: u32 = 0;
    let mut day_minutes: u32 = 0;
    let mut night_minutes: u32 = 0;
    let mut break_window: Option<BreakWindow> = None;

    while clock.now() < end {
        if real_minutes >= rules.break_threshold_minutes
            && break_window.is_none()
            && break_minutes > 0
        {
            // A break running past the exit ends at the exit.
            let left = u32::try_from((end - clock.now()).num_minutes()).unwrap_or(u32::MAX);
            let taken = break_minutes.min(left);
            let start = clock.instant();
            clock.advance(taken);
            real_minutes = real_minutes.saturating_add(taken);
            break_window = Some(BreakWindow {
                start,
                end: clock.instant(),
            });
            continue;
        }

        if is_night(clock.hour(), &rules.night_window) {
            night_minutes += 1;
        } else {
            day_minutes += 1;
        }
        clock.advance(1);
        real_minutes += 1;
    }

    FixedShiftWalk {
        exit_time: VirtualClock::instant_of(clock.anchor(), end),
        break_window,
        net_minutes: Decimal::from(day_minutes) + rules.night_factor.credit(night_minutes),
    }
}
