//! HTTP API module for the CLT Shift Engine.
//!
//! This module exposes the forward simulator, the reverse simulator and the
//! weekly planner as JSON endpoints:
//!
//! - `POST /shift/exit`
//! - `POST /shift/net`
//! - `POST /week/plan`

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{NetMinutesRequest, ShiftExitRequest, WeekPlanApiRequest};
pub use response::{
    ApiError, ApiErrorResponse, NetMinutesResponse, ShiftDisplay, ShiftExitResponse,
    WeekPlanResponse,
};
pub use state::AppState;
