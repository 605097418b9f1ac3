//! Integration tests for the CLT Shift Engine HTTP API.
//!
//! This test suite covers:
//! - Daytime shifts with a break
//! - Night shifts and the reduced night hour
//! - Midnight rollover of exits and breaks
//! - Reverse (fixed exit) calculations
//! - Weekly planning and redistribution
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use clt_shift_engine::api::{AppState, create_router};
use clt_shift_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/clt").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_shift_exit(entry: &str, break_minutes: u32, target: &str) -> (StatusCode, Value) {
    post(
        create_router_for_test(),
        "/shift/exit",
        json!({
            "entry": entry,
            "break_minutes": break_minutes,
            "target_net_minutes": target
        }),
    )
    .await
}

async fn post_net_minutes(entry: &str, exit: &str, break_minutes: u32) -> (StatusCode, Value) {
    post(
        create_router_for_test(),
        "/shift/net",
        json!({
            "entry": entry,
            "exit": exit,
            "break_minutes": break_minutes
        }),
    )
    .await
}

fn assert_exit(result: &Value, time: &str, day_offset: u64) {
    let exit = &result["result"]["exit_time"];
    assert_eq!(exit["time"].as_str().unwrap(), time, "unexpected exit time");
    assert_eq!(exit["day_offset"].as_u64().unwrap(), day_offset);
}

fn assert_break(result: &Value, start: &str, end: &str) {
    let window = &result["result"]["break_window"];
    assert_eq!(window["start"]["time"].as_str().unwrap(), start);
    assert_eq!(window["end"]["time"].as_str().unwrap(), end);
}

fn assert_decimal(actual: &Value, expected: &str) {
    let actual = normalize_decimal(actual.as_str().unwrap());
    let expected = normalize_decimal(expected);
    assert_eq!(actual, expected, "Expected {}, got {}", expected, actual);
}

// =============================================================================
// SECTION 1: Daytime Shifts
// =============================================================================

#[tokio::test]
async fn test_standard_daytime_shift() {
    let (status, result) = post_shift_exit("08:00", 60, "528").await;

    assert_eq!(status, StatusCode::OK);
    assert_exit(&result, "17:48", 0);
    assert_break(&result, "12:00", "13:00");
    assert_decimal(&result["result"]["net_minutes_realized"], "528");
    assert_eq!(result["display"]["exit"], "17:48");
    assert_eq!(result["display"]["break_window"], "12:00 - 13:00");
    assert_eq!(result["display"]["net"], "08h 48m");
}

#[tokio::test]
async fn test_short_target_has_no_break() {
    let (status, result) = post_shift_exit("09:00", 60, "240").await;

    assert_eq!(status, StatusCode::OK);
    assert_exit(&result, "13:00", 0);
    assert!(result["result"]["break_window"].is_null());
    assert!(result["display"]["break_window"].is_null());
}

#[tokio::test]
async fn test_stats_account_for_every_real_minute() {
    let (status, result) = post_shift_exit("08:00", 60, "528").await;

    assert_eq!(status, StatusCode::OK);
    let stats = &result["result"]["stats"];
    assert_eq!(stats["real_minutes"].as_u64().unwrap(), 588);
    assert_eq!(stats["day_minutes"].as_u64().unwrap(), 528);
    assert_eq!(stats["night_minutes"].as_u64().unwrap(), 0);
    assert_eq!(stats["break_minutes"].as_u64().unwrap(), 60);
}

#[tokio::test]
async fn test_entry_accepts_bare_hour() {
    let (status, result) = post_shift_exit("8", 60, "528").await;

    assert_eq!(status, StatusCode::OK);
    assert_exit(&result, "17:48", 0);
}

// =============================================================================
// SECTION 2: Night Work
// =============================================================================

#[tokio::test]
async fn test_night_shift_reduced_hour() {
    let (status, result) = post_shift_exit("22:00", 0, "108").await;

    assert_eq!(status, StatusCode::OK);
    assert_exit(&result, "23:35", 0);
    assert_eq!(
        result["result"]["stats"]["night_minutes"].as_u64().unwrap(),
        95
    );
}

#[tokio::test]
async fn test_afternoon_shift_entering_night_window() {
    let (status, result) = post_shift_exit("14:00", 60, "528").await;

    assert_eq!(status, StatusCode::OK);
    assert_break(&result, "18:00", "19:00");
    assert_exit(&result, "23:35", 0);
}

// =============================================================================
// SECTION 3: Midnight Rollover
// =============================================================================

#[tokio::test]
async fn test_exit_rolls_over_midnight() {
    let (status, result) = post_shift_exit("23:30", 0, "90").await;

    assert_eq!(status, StatusCode::OK);
    assert_exit(&result, "00:49", 1);
    assert_eq!(result["display"]["exit"], "00:49 (+1)");
}

#[tokio::test]
async fn test_break_after_midnight() {
    let (status, result) = post_shift_exit("22:00", 60, "420").await;

    assert_eq!(status, StatusCode::OK);
    assert_break(&result, "01:30", "02:30");
    let window = &result["result"]["break_window"];
    assert_eq!(window["start"]["day_offset"].as_u64().unwrap(), 1);
}

#[tokio::test]
async fn test_break_crossing_midnight() {
    let (status, result) = post_shift_exit("20:00", 60, "300").await;

    assert_eq!(status, StatusCode::OK);
    assert_break(&result, "23:45", "00:45");
    let window = &result["result"]["break_window"];
    assert_eq!(window["start"]["day_offset"].as_u64().unwrap(), 0);
    assert_eq!(window["end"]["day_offset"].as_u64().unwrap(), 1);
}

// =============================================================================
// SECTION 4: Reverse Calculation
// =============================================================================

#[tokio::test]
async fn test_net_minutes_daytime() {
    let (status, result) = post_net_minutes("08:00", "14:00", 60).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["net_minutes"], "300");
    assert_eq!(result["net_formatted"], "05h 00m");
    assert_eq!(result["exit_time"]["day_offset"].as_u64().unwrap(), 0);
}

#[tokio::test]
async fn test_net_minutes_overnight_exit_is_next_day() {
    let (status, result) = post_net_minutes("22:00", "06:00", 0).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["exit_time"]["day_offset"].as_u64().unwrap(), 1);
    // 420 night minutes credit 480; 60 day minutes from 05:00.
    assert_decimal(&result["net_minutes"], "540");
}

#[tokio::test]
async fn test_net_minutes_matches_forward_simulation() {
    let (_, forward) = post_shift_exit("08:00", 60, "528").await;
    let exit = forward["result"]["exit_time"]["time"].as_str().unwrap();

    let (status, reverse) = post_net_minutes("08:00", exit, 60).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&reverse["net_minutes"], "528");
}

// =============================================================================
// SECTION 5: Weekly Planning
// =============================================================================

#[tokio::test]
async fn test_week_plan_five_day_regime() {
    let (status, result) = post(
        create_router_for_test(),
        "/week/plan",
        json!({
            "regime": "five_day",
            "entry": "08:00",
            "break_minutes": 60
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let days = result["plan"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 5);
    for day in days {
        assert_eq!(day["exit_time"]["time"], "17:48");
        assert_eq!(day["fixed"], false);
    }
    assert_decimal(&result["plan"]["weekly_net_minutes"], "2640");
    assert_eq!(result["weekly_net_formatted"], "44h 00m");
    assert!(result["plan"]["redistributed_daily_target"].is_null());
}

#[tokio::test]
async fn test_week_plan_redistributes_shortened_friday() {
    let (status, result) = post(
        create_router_for_test(),
        "/week/plan",
        json!({
            "regime": "five_day",
            "entry": "08:00",
            "break_minutes": 60,
            "fixed_exits": [{"day": "Fri", "exit": "14:00"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let plan = &result["plan"];
    assert_decimal(&plan["redistributed_daily_target"], "585");

    let days = plan["days"].as_array().unwrap();
    assert_eq!(days[0]["weekday"], "Mon");
    assert_eq!(days[0]["exit_time"]["time"], "18:45");
    assert_eq!(days[4]["weekday"], "Fri");
    assert_eq!(days[4]["fixed"], true);
    assert_decimal(&days[4]["net_minutes"], "300");
}

#[tokio::test]
async fn test_week_plan_monthly_projection() {
    let (status, result) = post(
        create_router_for_test(),
        "/week/plan",
        json!({
            "regime": "six_day",
            "entry": "08:00",
            "break_minutes": 60
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let monthly = &result["plan"]["monthly"];
    assert_eq!(monthly["working_days_per_month"].as_u64().unwrap(), 26);
    assert_eq!(monthly["monthly_reference_hours"].as_u64().unwrap(), 220);
    assert_decimal(&monthly["estimated_monthly_minutes"], "11440");
}

// =============================================================================
// SECTION 6: Error Cases
// =============================================================================

#[tokio::test]
async fn test_error_unreachable_target() {
    let (status, error) = post_shift_exit("08:00", 60, "5000").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error["code"], "UNREACHABLE_TARGET");

    let truncated: Value = serde_json::from_str(error["details"].as_str().unwrap()).unwrap();
    assert!(truncated["stats"]["real_minutes"].as_u64().unwrap() > 2000);
}

#[tokio::test]
async fn test_error_negative_target() {
    let (status, error) = post_shift_exit("08:00", 60, "-1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_error_invalid_minute() {
    let (status, error) = post_shift_exit("08:75", 60, "528").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_error_missing_target() {
    let (status, error) = post(
        create_router_for_test(),
        "/shift/exit",
        json!({"entry": "08:00", "break_minutes": 60}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_error_unknown_regime() {
    let (status, error) = post(
        create_router_for_test(),
        "/week/plan",
        json!({"regime": "four_day", "entry": "08:00", "break_minutes": 60}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "REGIME_NOT_FOUND");
}

#[tokio::test]
async fn test_error_fixed_day_outside_regime() {
    let (status, error) = post(
        create_router_for_test(),
        "/week/plan",
        json!({
            "regime": "five_day",
            "entry": "08:00",
            "break_minutes": 60,
            "fixed_exits": [{"day": "Sun", "exit": "12:00"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("fixed_exits"));
}

#[tokio::test]
async fn test_error_malformed_json() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/shift/net")
                .header("Content-Type", "application/json")
                .body(Body::from("{\"entry\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_content_type() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/shift/exit")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "MISSING_CONTENT_TYPE");
}

#[tokio::test]
async fn test_error_break_longer_than_safety_cap() {
    let (status, error) = post_shift_exit("08:00", u32::MAX, "528").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("break_minutes"));
}

#[tokio::test]
async fn test_week_plan_rejects_break_longer_than_safety_cap() {
    let (status, error) = post(
        create_router_for_test(),
        "/week/plan",
        json!({
            "regime": "five_day",
            "entry": "08:00",
            "break_minutes": 4294967295u64
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_net_minutes_cuts_maximum_break_at_exit() {
    let (status, result) = post_net_minutes("08:00", "14:00", u32::MAX).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["net_minutes"], "240");
}
