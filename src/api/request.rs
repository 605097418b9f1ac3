//! Request types for the CLT Shift Engine API.
//!
//! This module defines the JSON request structures for the shift and week
//! planning endpoints. Clock times travel as `"HH:MM"` (or `"HH"`) strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{FixedExit, WeekPlanRequest};
use crate::models::ClockTime;

/// Request body for the `/shift/exit` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftExitRequest {
    /// Entry time.
    pub entry: ClockTime,
    /// Break length in minutes.
    pub break_minutes: u32,
    /// Net working time to credit, in effective minutes.
    pub target_net_minutes: Decimal,
}

/// Request body for the `/shift/net` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetMinutesRequest {
    /// Entry time.
    pub entry: ClockTime,
    /// Fixed exit time; an exit at or before the entry is on the next day.
    pub exit: ClockTime,
    /// Break length in minutes.
    pub break_minutes: u32,
}

/// Request body for the `/week/plan` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekPlanApiRequest {
    /// Code of the work regime (e.g., "five_day").
    pub regime: String,
    /// Entry time used on every working day.
    pub entry: ClockTime,
    /// Break length in minutes.
    pub break_minutes: u32,
    /// Days whose exit time is fixed in advance.
    #[serde(default)]
    pub fixed_exits: Vec<FixedExit>,
}

impl From<WeekPlanApiRequest> for WeekPlanRequest {
    fn from(req: WeekPlanApiRequest) -> Self {
        WeekPlanRequest {
            entry: req.entry,
            break_minutes: req.break_minutes,
            fixed_exits: req.fixed_exits,
        }
    }
}
