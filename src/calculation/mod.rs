//! Calculation logic for the CLT Shift Engine.
//!
//! This module contains the minute-resolution shift simulators and the
//! planning built on top of them: night-hour classification, the forward
//! simulation that finds exit time and break window for a net target, the
//! reverse calculation that measures a shift with a fixed exit, weekly
//! planning with redistribution of fixed days, and the monthly projection.

mod monthly_summary;
mod net_minutes;
mod night_classifier;
mod shift_exit;
mod virtual_clock;
mod weekly_plan;

pub use monthly_summary::{MonthlySummary, summarize_month};
pub use net_minutes::compute_net_minutes;
pub use night_classifier::is_night;
pub use shift_exit::compute_shift_exit;
pub use weekly_plan::{DayPlan, FixedExit, WeekPlan, WeekPlanRequest, plan_week};
