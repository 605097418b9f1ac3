//! Response types for the CLT Shift Engine API.
//!
//! This module defines the success payloads, the error response structures
//! and the mapping from engine errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::WeekPlan;
use crate::error::EngineError;
use crate::models::{ClockTime, ShiftInstant, ShiftSimulationResult, format_hours_minutes};

use super::request::{NetMinutesRequest, ShiftExitRequest};

/// Response body for the `/shift/exit` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftExitResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Entry time as requested.
    pub entry: ClockTime,
    /// Break length as requested.
    pub break_minutes: u32,
    /// The simulation outcome.
    pub result: ShiftSimulationResult,
    /// Display strings for the outcome.
    pub display: ShiftDisplay,
}

/// Human-readable rendering of a simulated shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDisplay {
    /// Exit time, with a `(+1)` marker when it falls on the next day.
    pub exit: String,
    /// Break window as `"HH:MM - HH:MM"`, if a break was taken.
    pub break_window: Option<String>,
    /// Net working time as `"HHh MMm"`.
    pub net: String,
}

impl ShiftExitResponse {
    /// Builds the response for a completed simulation.
    pub fn new(request: &ShiftExitRequest, result: ShiftSimulationResult) -> Self {
        let display = ShiftDisplay {
            exit: result.exit_time.to_string(),
            break_window: result.break_window.map(|window| window.to_string()),
            net: format_hours_minutes(result.net_minutes_realized),
        };
        Self {
            calculation_id: Uuid::new_v4(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            entry: request.entry,
            break_minutes: request.break_minutes,
            result,
            display,
        }
    }
}

/// Response body for the `/shift/net` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetMinutesResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// Entry time as requested.
    pub entry: ClockTime,
    /// The fixed exit, placed on the entry day or the next one.
    pub exit_time: ShiftInstant,
    /// Break length as requested.
    pub break_minutes: u32,
    /// Effective minutes credited between entry and exit.
    pub net_minutes: Decimal,
    /// Net working time as `"HHh MMm"`.
    pub net_formatted: String,
}

impl NetMinutesResponse {
    /// Builds the response for a reverse calculation.
    pub fn new(request: &NetMinutesRequest, net_minutes: Decimal) -> Self {
        let day_offset = if request.exit <= request.entry { 1 } else { 0 };
        Self {
            calculation_id: Uuid::new_v4(),
            entry: request.entry,
            exit_time: ShiftInstant::new(request.exit, day_offset),
            break_minutes: request.break_minutes,
            net_minutes,
            net_formatted: format_hours_minutes(net_minutes),
        }
    }
}

/// Response body for the `/week/plan` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlanResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// The planned week.
    pub plan: WeekPlan,
    /// Weekly net total as `"HHh MMm"`.
    pub weekly_net_formatted: String,
    /// Estimated monthly total as `"HHh MMm"`.
    pub estimated_monthly_formatted: String,
}

impl WeekPlanResponse {
    /// Builds the response for a planned week.
    pub fn new(plan: WeekPlan) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            weekly_net_formatted: format_hours_minutes(plan.weekly_net_minutes),
            estimated_monthly_formatted: format_hours_minutes(
                plan.monthly.estimated_monthly_minutes,
            ),
            plan,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a regime not found error response.
    pub fn regime_not_found(code: &str) -> Self {
        Self::with_details(
            "REGIME_NOT_FOUND",
            format!("Work regime not found: {}", code),
            format!("The regime code '{}' is not configured in this engine", code),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::RegimeNotFound { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::regime_not_found(&code),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input '{}': {}", field, message),
                    "The request contains a value outside its allowed range",
                ),
            },
            EngineError::UnreachableTarget {
                target_net_minutes,
                reached_minutes,
                real_minutes,
                truncated,
            } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "UNREACHABLE_TARGET",
                    format!(
                        "Target of {} net minutes not reached after {} real minutes ({} credited)",
                        target_net_minutes.normalize(),
                        real_minutes,
                        reached_minutes.round_dp(2).normalize()
                    ),
                    // The truncated walk is reported for diagnosis; its exit time is not usable.
                    serde_json::to_string(&truncated)
                        .unwrap_or_else(|_| truncated.exit_time.to_string()),
                ),
            },
        }
    }
}
