//! HTTP request handlers for the CLT Shift Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{compute_net_minutes, compute_shift_exit, plan_week};
use crate::error::EngineError;

use super::request::{NetMinutesRequest, ShiftExitRequest, WeekPlanApiRequest};
use super::response::{
    ApiError, ApiErrorResponse, NetMinutesResponse, ShiftExitResponse, WeekPlanResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shift/exit", post(shift_exit_handler))
        .route("/shift/net", post(net_minutes_handler))
        .route("/week/plan", post(week_plan_handler))
        .with_state(state)
}

/// Handler for POST /shift/exit.
///
/// Simulates a shift from its entry time and returns the exit time at which
/// the requested net working time is credited.
async fn shift_exit_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftExitRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift exit request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match compute_shift_exit(
        request.entry,
        request.break_minutes,
        request.target_net_minutes,
        state.config().rules(),
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                entry = %request.entry,
                exit = %result.exit_time,
                night_minutes = result.stats.night_minutes,
                duration_us = start_time.elapsed().as_micros(),
                "Shift exit computed"
            );
            json_response(StatusCode::OK, ShiftExitResponse::new(&request, result))
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /shift/net.
///
/// Walks a shift with a fixed exit time and returns the net working time it
/// credits.
async fn net_minutes_handler(
    State(state): State<AppState>,
    payload: Result<Json<NetMinutesRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing net minutes request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let net_minutes = compute_net_minutes(
        request.entry,
        request.exit,
        request.break_minutes,
        state.config().rules(),
    );
    info!(
        correlation_id = %correlation_id,
        entry = %request.entry,
        exit = %request.exit,
        net_minutes = %net_minutes,
        duration_us = start_time.elapsed().as_micros(),
        "Net minutes computed"
    );

    json_response(
        StatusCode::OK,
        NetMinutesResponse::new(&request, net_minutes),
    )
}

/// Handler for POST /week/plan.
///
/// Plans the exit time of every working day of a regime, redistributing the
/// weekly target over the days whose exit is not fixed.
async fn week_plan_handler(
    State(state): State<AppState>,
    payload: Result<Json<WeekPlanApiRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing week plan request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = state.config();
    let regime = match config.get_regime(&request.regime) {
        Ok(regime) => regime,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                regime = %request.regime,
                "Work regime not found"
            );
            return error_response(err, correlation_id);
        }
    };

    let start_time = Instant::now();
    match plan_week(
        &request.into(),
        regime,
        config.rules(),
        config.references(),
    ) {
        Ok(plan) => {
            info!(
                correlation_id = %correlation_id,
                regime = %plan.regime,
                weekly_net_minutes = %plan.weekly_net_minutes,
                duration_us = start_time.elapsed().as_micros(),
                "Week plan computed"
            );
            json_response(StatusCode::OK, WeekPlanResponse::new(plan))
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    debug!(correlation_id = %correlation_id, code = %api_error.error.code, "Mapped engine error");
    json_response(api_error.status, api_error.error)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
