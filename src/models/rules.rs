//! Simulation rules: night window, night factor, break threshold and safety cap.
//!
//! The CLT defaults live here as constructors rather than process-wide
//! constants so that alternative policies can be simulated side by side.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The clock-hour interval during which night work is counted at the reduced rate.
///
/// `start_hour` is inclusive and `end_hour` exclusive. When `start_hour > end_hour`
/// the window wraps midnight (`[start, 24) ∪ [0, end)`); otherwise it covers
/// `[start, end)`, which is empty when both bounds are equal.
///
/// # Example
///
/// ```
/// use clt_shift_engine::models::NightWindow;
///
/// let window = NightWindow::clt();
/// assert_eq!(window.start_hour(), 22);
/// assert_eq!(window.end_hour(), 5);
/// assert!(window.wraps_midnight());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NightWindow {
    start_hour: u32,
    end_hour: u32,
}

impl NightWindow {
    /// Creates a night window from an inclusive start hour and exclusive end hour.
    ///
    /// `start_hour` must be 0–23; `end_hour` may be 0–24 so that a
    /// non-wrapping window can run up to midnight.
    pub fn new(start_hour: u32, end_hour: u32) -> EngineResult<Self> {
        if start_hour > 23 {
            return Err(EngineError::invalid_input(
                "night_window.start_hour",
                format!("{} is outside 0-23", start_hour),
            ));
        }
        if end_hour > 24 {
            return Err(EngineError::invalid_input(
                "night_window.end_hour",
                format!("{} is outside 0-24", end_hour),
            ));
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// The CLT night window, 22:00 to 05:00 (art. 73 §2).
    pub fn clt() -> Self {
        Self {
            start_hour: 22,
            end_hour: 5,
        }
    }

    /// Returns the inclusive start hour.
    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// Returns the exclusive end hour.
    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Returns true if the window spans midnight.
    pub fn wraps_midnight(&self) -> bool {
        self.start_hour > self.end_hour
    }
}

impl Default for NightWindow {
    fn default() -> Self {
        Self::clt()
    }
}

/// Effective minutes credited per real minute of night work.
///
/// Kept as the ratio between a legal hour and the reduced night hour, so the
/// CLT value is `60 / 52.5 ≈ 1.142857`. Credits for a run of night minutes are
/// computed from the ratio in one step, which keeps exact multiples exact
/// (210 night minutes credit exactly 240).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NightFactor {
    legal_hour_minutes: Decimal,
    reduced_hour_minutes: Decimal,
}

impl NightFactor {
    /// Creates a factor from its decimal value. It must be strictly positive.
    pub fn new(value: Decimal) -> EngineResult<Self> {
        Self::from_reduced_hour(value, Decimal::ONE)
    }

    /// Creates a factor from the legal hour length and the reduced hour length,
    /// both in minutes.
    pub fn from_reduced_hour(
        legal_hour_minutes: Decimal,
        reduced_hour_minutes: Decimal,
    ) -> EngineResult<Self> {
        if legal_hour_minutes <= Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "night_factor",
                format!("{} must be greater than zero", legal_hour_minutes),
            ));
        }
        if reduced_hour_minutes <= Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "night_work.reduced_hour_minutes",
                format!("{} must be greater than zero", reduced_hour_minutes),
            ));
        }
        Ok(Self {
            legal_hour_minutes,
            reduced_hour_minutes,
        })
    }

    /// The CLT factor: 60 effective minutes per 52.5 real night minutes.
    pub fn clt() -> Self {
        Self {
            legal_hour_minutes: Decimal::from(60),
            reduced_hour_minutes: Decimal::new(525, 1),
        }
    }

    /// Returns the factor as a decimal.
    pub fn value(&self) -> Decimal {
        self.legal_hour_minutes / self.reduced_hour_minutes
    }

    /// Effective minutes credited for `night_minutes` real night minutes.
    pub fn credit(&self, night_minutes: u32) -> Decimal {
        Decimal::from(night_minutes) * self.legal_hour_minutes / self.reduced_hour_minutes
    }
}

/// Factors are equal when their values are, however the ratio was written.
impl PartialEq for NightFactor {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for NightFactor {}

impl Default for NightFactor {
    fn default() -> Self {
        Self::clt()
    }
}

/// The complete rule set both simulators run under.
///
/// # Example
///
/// ```
/// use clt_shift_engine::models::ShiftRules;
///
/// let rules = ShiftRules::clt();
/// assert_eq!(rules.break_threshold_minutes, 240);
/// assert_eq!(rules.safety_cap_minutes, 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShiftRules {
    /// Hours during which the night factor applies.
    pub night_window: NightWindow,
    /// Effective minutes per real night minute.
    pub night_factor: NightFactor,
    /// Accumulated work after which the single break is inserted.
    ///
    /// Measured in effective minutes by the forward simulator and in real
    /// minutes by the reverse simulator.
    pub break_threshold_minutes: u32,
    /// Upper bound on real minutes the forward simulator will walk.
    pub safety_cap_minutes: u32,
}

impl ShiftRules {
    /// The CLT rule set: 22:00–05:00 night window, 60/52.5 factor,
    /// break after 4 hours of work, 2000-minute cap.
    pub fn clt() -> Self {
        Self {
            night_window: NightWindow::clt(),
            night_factor: NightFactor::clt(),
            break_threshold_minutes: 240,
            safety_cap_minutes: 2000,
        }
    }

    /// Returns the break threshold as a decimal for comparison with effective minutes.
    pub fn break_threshold(&self) -> Decimal {
        Decimal::from(self.break_threshold_minutes)
    }
}

impl Default for ShiftRules {
    fn default() -> Self {
        Self::clt()
    }
}

/// Legal reference figures shown alongside weekly and monthly totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalReferences {
    /// Weekly ceiling of working time, in minutes (44h under CLT).
    pub weekly_limit_minutes: u32,
    /// Monthly reference hours used for salary computation (220h under CLT).
    pub monthly_reference_hours: u32,
}

impl LegalReferences {
    /// The CLT references: 44 hours per week, 220 hours per month.
    pub fn clt() -> Self {
        Self {
            weekly_limit_minutes: 44 * 60,
            monthly_reference_hours: 220,
        }
    }
}

impl Default for LegalReferences {
    fn default() -> Self {
        Self::clt()
    }
}
