//! Core data models for the CLT Shift Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod clock_time;
mod rules;
mod shift_result;
mod work_duration;
mod work_regime;

pub use clock_time::ClockTime;
pub use rules::{LegalReferences, NightFactor, NightWindow, ShiftRules};
pub use shift_result::{BreakWindow, ShiftInstant, ShiftSimulationResult, SimulationStats};
pub use work_duration::{format_hours_minutes, whole_seconds};
pub use work_regime::WorkRegime;
