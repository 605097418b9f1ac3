//! Shift simulation result models.
//!
//! This module contains the [`ShiftSimulationResult`] type produced by the
//! forward simulator, together with the day-aware [`ShiftInstant`] and the
//! realized [`BreakWindow`].

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ClockTime;

/// A clock time tagged with how many calendar days after the entry day it falls.
///
/// Ordering compares the day offset first, so instants order chronologically
/// across midnight.
///
/// # Example
///
/// ```
/// use clt_shift_engine::models::{ClockTime, ShiftInstant};
///
/// let exit = ShiftInstant::new(ClockTime::new(0, 49).unwrap(), 1);
/// assert!(exit.is_next_day());
/// assert_eq!(exit.to_string(), "00:49 (+1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShiftInstant {
    /// Calendar days after the entry day (0 for the entry day itself).
    pub day_offset: u32,
    /// The wall-clock time.
    pub time: ClockTime,
}

impl ShiftInstant {
    /// Creates an instant `day_offset` days after the entry day.
    pub fn new(time: ClockTime, day_offset: u32) -> Self {
        Self { day_offset, time }
    }

    /// Returns true if the instant falls on a later day than the entry.
    pub fn is_next_day(&self) -> bool {
        self.day_offset > 0
    }
}

impl fmt::Display for ShiftInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.day_offset == 0 {
            write!(f, "{}", self.time)
        } else {
            write!(f, "{} (+{})", self.time, self.day_offset)
        }
    }
}

/// The realized meal/rest break of a simulated shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakWindow {
    /// When the break starts.
    pub start: ShiftInstant,
    /// When the break ends.
    pub end: ShiftInstant,
}

impl BreakWindow {
    /// Returns true if the break ends on a later day than it starts.
    pub fn crosses_midnight(&self) -> bool {
        self.end.day_offset > self.start.day_offset
    }
}

impl fmt::Display for BreakWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Minute-level bookkeeping of a simulation run.
///
/// `day_minutes + night_minutes + break_minutes` always equals `real_minutes`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Real minutes elapsed between entry and exit, break included.
    pub real_minutes: u32,
    /// Real minutes worked outside the night window.
    pub day_minutes: u32,
    /// Real minutes worked inside the night window.
    pub night_minutes: u32,
    /// Real minutes spent on the break.
    pub break_minutes: u32,
    /// Effective minutes accumulated when the walk stopped.
    pub effective_minutes: Decimal,
}

/// The outcome of a forward shift simulation.
///
/// # Example
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
/// assert_eq!(result.net_minutes_realized, Decimal::from(528));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSimulationResult {
    /// When the shift ends.
    pub exit_time: ShiftInstant,
    /// The inserted break, or `None` when the target was met before the threshold.
    pub break_window: Option<BreakWindow>,
    /// Net working time credited for the shift, in effective minutes.
    pub net_minutes_realized: Decimal,
    /// Minute-level bookkeeping of the walk.
    pub stats: SimulationStats,
}
