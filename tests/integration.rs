//! Integration tests for the Pay and Withholding Engine API.
//!
//! This test suite drives the HTTP surface end to end:
//! - Pay splitting across day boundaries, windows, and all-day rules
//! - Integer-cent rounding
//! - Withholding across residency, threshold, levy, and loan branches
//! - Effective-dated schedule selection and the early-date fallback
//! - Error cases: invalid intervals, invalid dates, malformed requests

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tower::ServiceExt;

use shiftpay_engine::api::{create_router, AppState};
use shiftpay_engine::config::TaxTableLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let tables = TaxTableLoader::load("./config/tax-au").expect("Failed to load tables");
    AppState::new(tables)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

fn assert_decimal_field(result: &Value, field: &str, expected: &str) {
    let actual = result[field]
        .as_str()
        .unwrap_or_else(|| panic!("field '{}' missing or not a string: {}", field, result));
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {} {}, got {}",
        field,
        expected,
        actual
    );
}

async fn send_post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
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

async fn send_get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
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

fn pay_request(
    start: &str,
    end: &str,
    penalty_rules: Value,
    base_rate: i64,
    penalty_rate: i64,
) -> Value {
    json!({
        "shift": { "start": start, "end": end },
        "penalty_rules": penalty_rules,
        "base_rate_cents_per_hour": base_rate,
        "penalty_rate_cents_per_hour": penalty_rate
    })
}

fn weekend_rules() -> Value {
    json!({
        "all_day_weekdays": ["saturday", "sunday"],
        "include_public_holidays": false
    })
}

fn early_window_rules() -> Value {
    json!({
        "daily_window_enabled": true,
        "daily_start_minute": 0,
        "daily_end_minute": 420,
        "include_public_holidays": false
    })
}

fn withholding_request(pay_date: &str, gross: &str, frequency: &str, profile: Value) -> Value {
    json!({
        "pay_date": pay_date,
        "gross_for_period": gross,
        "frequency": frequency,
        "profile": profile
    })
}

fn resident_profile(has_study_loan: bool) -> Value {
    json!({
        "residency": "resident",
        "claims_tax_free_threshold": true,
        "medicare_levy_status": "standard",
        "has_study_loan": has_study_loan
    })
}

// =============================================================================
// POST /pay
// =============================================================================

/// INT-PAY-001: weekday shift with no penalty rules pays base rate only
#[tokio::test]
async fn test_weekday_shift_all_base() {
    let body = pay_request(
        "2026-01-14T09:00:00",
        "2026-01-14T17:00:00",
        json!({ "include_public_holidays": false }),
        2500,
        3750,
    );

    let (status, result) = send_post(create_router_for_test(), "/pay", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["base_minutes"], 480);
    assert_eq!(result["penalty_minutes"], 0);
    assert_eq!(result["base_pay_cents"], 20000);
    assert_eq!(result["total_pay_cents"], 20000);
    assert_eq!(result["segments"].as_array().unwrap().len(), 1);
}

/// INT-PAY-002: Friday-to-Saturday overnight shift splits at midnight
#[tokio::test]
async fn test_overnight_shift_splits_at_midnight() {
    let body = pay_request(
        "2026-01-16T22:00:00",
        "2026-01-17T06:00:00",
        weekend_rules(),
        2500,
        3750,
    );

    let (status, result) = send_post(create_router_for_test(), "/pay", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["base_minutes"], 120);
    assert_eq!(result["penalty_minutes"], 360);
    assert_eq!(result["base_pay_cents"], 5000);
    assert_eq!(result["penalty_pay_cents"], 22500);
    assert_eq!(result["total_pay_cents"], 27500);

    let segments = result["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0]["date"], "2026-01-16");
    assert_eq!(segments[0]["minutes_penalty"], 0);
    assert_eq!(segments[1]["date"], "2026-01-17");
    assert_eq!(segments[1]["minutes_penalty"], 360);
}

/// INT-PAY-003: full weekend overnight shift is entirely penalty time
#[tokio::test]
async fn test_weekend_overnight_fully_penalty() {
    let body = pay_request(
        "2026-01-17T22:00:00",
        "2026-01-18T06:00:00",
        weekend_rules(),
        2500,
        3750,
    );

    let (status, result) = send_post(create_router_for_test(), "/pay", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["base_minutes"], 0);
    assert_eq!(result["penalty_minutes"], 480);
}

/// INT-PAY-004: the daily window splits a shift straddling its end
#[tokio::test]
async fn test_daily_window_classification() {
    let body = pay_request(
        "2026-01-15T06:30:00",
        "2026-01-15T07:30:00",
        early_window_rules(),
        2500,
        3750,
    );

    let (status, result) = send_post(create_router_for_test(), "/pay", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["penalty_minutes"], 30);
    assert_eq!(result["base_minutes"], 30);
}

/// INT-PAY-005: tracked public holidays override the window
#[tokio::test]
async fn test_public_holiday_all_day_penalty() {
    let rules = json!({
        "daily_window_enabled": true,
        "daily_start_minute": 0,
        "daily_end_minute": 420,
        "include_public_holidays": true,
        "public_holiday_dates": ["2026-01-26"]
    });
    let body = pay_request(
        "2026-01-26T09:00:00",
        "2026-01-26T17:00:00",
        rules,
        2500,
        3750,
    );

    let (status, result) = send_post(create_router_for_test(), "/pay", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["penalty_minutes"], 480);
    assert_eq!(result["base_minutes"], 0);
}

/// INT-PAY-006: one minute at $25.00/hour rounds to 42 cents
#[tokio::test]
async fn test_one_minute_rounds_to_42_cents() {
    let body = pay_request(
        "2026-01-14T09:00:00",
        "2026-01-14T09:01:00",
        json!({ "include_public_holidays": false }),
        2500,
        3750,
    );

    let (status, result) = send_post(create_router_for_test(), "/pay", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total_pay_cents"], 42);
}

/// INT-PAY-007: a reversed interval is rejected
#[tokio::test]
async fn test_reversed_interval_rejected() {
    let body = pay_request(
        "2026-01-14T17:00:00",
        "2026-01-14T09:00:00",
        json!({ "include_public_holidays": false }),
        2500,
        3750,
    );

    let (status, result) = send_post(create_router_for_test(), "/pay", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_INTERVAL");
}

/// INT-PAY-008: an unparsable datetime is rejected as INVALID_DATE
#[tokio::test]
async fn test_unparsable_datetime_rejected() {
    let body = pay_request(
        "next tuesday",
        "2026-01-14T17:00:00",
        json!({ "include_public_holidays": false }),
        2500,
        3750,
    );

    let (status, result) = send_post(create_router_for_test(), "/pay", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_DATE");
    assert!(result["message"].as_str().unwrap().contains("next tuesday"));
}

/// INT-PAY-009: an unparsable holiday date is rejected as INVALID_DATE
#[tokio::test]
async fn test_unparsable_holiday_date_rejected() {
    let rules = json!({
        "include_public_holidays": true,
        "public_holiday_dates": ["2026-13-99"]
    });
    let body = pay_request(
        "2026-01-14T09:00:00",
        "2026-01-14T17:00:00",
        rules,
        2500,
        3750,
    );

    let (status, result) = send_post(create_router_for_test(), "/pay", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_DATE");
}

/// INT-PAY-010: malformed JSON is rejected
#[tokio::test]
async fn test_malformed_json_rejected() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/pay")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// INT-PAY-011: a missing required field is reported as a validation error
#[tokio::test]
async fn test_missing_field_rejected() {
    let body = json!({
        "shift": { "start": "2026-01-14T09:00:00", "end": "2026-01-14T17:00:00" },
        "penalty_rules": {}
    });

    let (status, result) = send_post(create_router_for_test(), "/pay", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

// =============================================================================
// POST /withholding
// =============================================================================

/// INT-WH-001: resident with study loan, $1,200/week on the 2024-25 schedules
#[tokio::test]
async fn test_resident_with_loan_weekly() {
    let body = withholding_request("2024-08-15", "1200", "weekly", resident_profile(true));

    let (status, result) = send_post(create_router_for_test(), "/withholding", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "base_withholding", "206");
    assert_decimal_field(&result, "study_loan_component", "12");
    assert_decimal_field(&result, "total_withheld", "218");
    assert_eq!(result["schedule1_effective_from"], "2024-07-01");
    assert_eq!(result["schedule8_effective_from"], "2024-07-01");
}

/// INT-WH-002: without a loan the component is zero and its date is omitted
#[tokio::test]
async fn test_resident_without_loan() {
    let body = withholding_request("2024-08-15", "1200", "weekly", resident_profile(false));

    let (status, result) = send_post(create_router_for_test(), "/withholding", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "study_loan_component", "0");
    assert_decimal_field(&result, "total_withheld", "206");
    assert!(result.get("schedule8_effective_from").is_none());
}

/// INT-WH-003: non-resident pays flat rates and no levy for any levy status
#[tokio::test]
async fn test_non_resident_ignores_levy_status() {
    for levy_status in ["standard", "half_exempt", "full_exempt"] {
        let profile = json!({
            "residency": "non_resident",
            "claims_tax_free_threshold": false,
            "medicare_levy_status": levy_status,
            "has_study_loan": false
        });
        let body = withholding_request("2024-08-15", "1200", "weekly", profile);

        let (status, result) = send_post(create_router_for_test(), "/withholding", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_decimal_field(&result, "total_withheld", "360");
        let notes = result["notes"].as_array().unwrap();
        assert!(notes
            .iter()
            .any(|n| n.as_str().unwrap().contains("Non-resident rates")));
    }
}

/// INT-WH-004: levy exemptions reduce the total monotonically
#[tokio::test]
async fn test_levy_exemptions_reduce_total() {
    let mut totals = Vec::new();
    for levy_status in ["standard", "half_exempt", "full_exempt"] {
        let profile = json!({
            "residency": "resident",
            "claims_tax_free_threshold": true,
            "medicare_levy_status": levy_status,
            "has_study_loan": false
        });
        let body = withholding_request("2024-08-15", "1200", "weekly", profile);

        let (status, result) = send_post(create_router_for_test(), "/withholding", body).await;
        assert_eq!(status, StatusCode::OK);
        totals.push(Decimal::from_str(result["total_withheld"].as_str().unwrap()).unwrap());
    }

    assert!(totals[0] > totals[1], "standard should exceed half exempt");
    assert!(totals[1] > totals[2], "half exempt should exceed full exempt");
}

/// INT-WH-005: a 2025-10-01 pay date selects the 2025-09-24 schedule versions
#[tokio::test]
async fn test_selects_latest_effective_schedules() {
    let body = withholding_request("2025-10-01", "1200", "weekly", resident_profile(true));

    let (status, result) = send_post(create_router_for_test(), "/withholding", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["schedule1_effective_from"], "2025-09-24");
    assert_eq!(result["schedule8_effective_from"], "2025-09-24");
}

/// INT-WH-006: a pay date before every version falls back with a note
#[tokio::test]
async fn test_early_pay_date_falls_back_with_note() {
    let body = withholding_request("2020-01-01", "1200", "weekly", resident_profile(false));

    let (status, result) = send_post(create_router_for_test(), "/withholding", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["schedule1_effective_from"], "2024-06-17");
    let notes = result["notes"].as_array().unwrap();
    assert!(notes
        .iter()
        .any(|n| n.as_str().unwrap().contains("precedes all schedule versions")));
}

/// INT-WH-007: identical requests produce identical responses
#[tokio::test]
async fn test_withholding_is_idempotent() {
    let body = withholding_request("2025-10-01", "1234.56", "fortnightly", resident_profile(true));

    let (status_a, first) = send_post(create_router_for_test(), "/withholding", body.clone()).await;
    let (status_b, second) = send_post(create_router_for_test(), "/withholding", body).await;

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    assert_eq!(first, second);
}

/// INT-WH-008: income below the loan threshold notes that no repayment applies
#[tokio::test]
async fn test_low_income_no_loan_repayment() {
    let body = withholding_request("2024-08-15", "1000", "weekly", resident_profile(true));

    let (status, result) = send_post(create_router_for_test(), "/withholding", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "study_loan_component", "0");
    let notes = result["notes"].as_array().unwrap();
    assert!(notes
        .iter()
        .any(|n| n.as_str().unwrap().contains("no study loan component")));
}

/// INT-WH-009: zero gross withholds nothing
#[tokio::test]
async fn test_zero_gross_withholds_nothing() {
    let body = withholding_request("2024-08-15", "0", "weekly", resident_profile(true));

    let (status, result) = send_post(create_router_for_test(), "/withholding", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result, "total_withheld", "0");
}

/// INT-WH-010: an unparsable pay date is rejected as INVALID_DATE
#[tokio::test]
async fn test_unparsable_pay_date_rejected() {
    let body = withholding_request("01/10/2025", "1200", "weekly", resident_profile(false));

    let (status, result) = send_post(create_router_for_test(), "/withholding", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_DATE");
}

/// INT-WH-011: quarterly frequency is supported end to end
#[tokio::test]
async fn test_quarterly_frequency() {
    let body = withholding_request("2024-08-15", "15600", "quarterly", resident_profile(false));

    let (status, result) = send_post(create_router_for_test(), "/withholding", body).await;

    assert_eq!(status, StatusCode::OK);
    // Same annual income as $1,200/week: annual tax 10,692 / 4 = 2,673
    assert_decimal_field(&result, "base_withholding", "2673");
}

// =============================================================================
// GET /schedules/effective
// =============================================================================

/// INT-SCH-001: effective dates for a current pay date
#[tokio::test]
async fn test_effective_schedule_dates() {
    let (status, result) = send_get(
        create_router_for_test(),
        "/schedules/effective?pay_date=2025-10-01",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["schedule1_effective_from"], "2025-09-24");
    assert_eq!(result["schedule8_effective_from"], "2025-09-24");
}

/// INT-SCH-002: effective dates between versions
#[tokio::test]
async fn test_effective_schedule_dates_between_versions() {
    let (status, result) = send_get(
        create_router_for_test(),
        "/schedules/effective?pay_date=2024-06-20",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["schedule1_effective_from"], "2024-06-17");
    assert_eq!(result["schedule8_effective_from"], "2024-06-17");
}

/// INT-SCH-003: an unparsable pay date is rejected as INVALID_DATE
#[tokio::test]
async fn test_effective_schedule_dates_invalid_date() {
    let (status, result) = send_get(
        create_router_for_test(),
        "/schedules/effective?pay_date=october",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_DATE");
}
