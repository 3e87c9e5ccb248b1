//! HTTP request handlers for the bonus engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_monthly_bonus, check_perfect_week};
use crate::models::Attendance;

use super::request::{BonusCalculationRequest, PerfectWeekCheckRequest};
use super::response::{ApiError, ApiErrorResponse, BonusCalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/bonus/calculate", post(calculate_bonus_handler))
        .route("/perfect-week/check", post(perfect_week_check_handler))
        .route("/policy", get(policy_handler))
        .with_state(state)
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
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

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /bonus/calculate endpoint.
///
/// Validates the request, runs the monthly bonus calculation under the
/// configured policy, and returns the result with a calculation ID.
async fn calculate_bonus_handler(
    State(state): State<AppState>,
    payload: Result<Json<BonusCalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bonus calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = request.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Bonus calculation request rejected"
        );
        return ApiErrorResponse::from(err).into_response();
    }

    let start_time = Instant::now();
    let result = calculate_monthly_bonus(&request.as_input(), state.policy());
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        employees = result.payouts.len(),
        net_pool = %result.breakdown.net_pool,
        total_disbursed = %result.total_disbursed(),
        warnings = result.audit_trace.warnings.len(),
        duration_us = duration.as_micros(),
        "Bonus calculation completed successfully"
    );

    let response = BonusCalculationResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        result,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /perfect-week/check endpoint.
///
/// Derives tardiness from the policy cutoff and evaluates the week.
async fn perfect_week_check_handler(
    State(state): State<AppState>,
    payload: Result<Json<PerfectWeekCheckRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let cutoff = state.policy().tardy_cutoff;
    let attendance: Vec<Attendance> = request
        .attendance
        .into_iter()
        .map(|a| a.into_attendance(cutoff))
        .collect();
    let check = check_perfect_week(&attendance, &request.checklist_completions);

    info!(
        correlation_id = %correlation_id,
        achieved = check.achieved,
        days_worked = check.days_worked,
        "Perfect week evaluated"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(check),
    )
        .into_response()
}

/// Handler for GET /policy endpoint.
async fn policy_handler(State(state): State<AppState>) -> Response {
    Json(state.policy().clone()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::PerfectWeekCheck;
    use crate::config::{BonusPolicy, ConfigLoader};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config").expect("Failed to load config");
        AppState::new(config)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    async fn post_json(router: Router, uri: &str, body: String) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let body = r#"{
            "total_revenue": "10000",
            "as_of_date": "2026-03-31",
            "employees": [
                {"id": "emp_001", "name": "Dana Reyes", "start_date": "2025-12-31", "is_active": true}
            ]
        }"#;

        let response = post_json(router, "/bonus/calculate", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response: BonusCalculationResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(response.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(response.result.breakdown.gross_pool, dec("450.00"));
        assert_eq!(response.result.payouts.len(), 1);
        assert_eq!(response.result.payouts[0].tenure_amount, dec("225.00"));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = post_json(router, "/bonus/calculate", "{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/bonus/calculate")
                    .body(Body::from(r#"{"total_revenue": "10000"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_missing_revenue_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = post_json(router, "/bonus/calculate", r#"{"employees": []}"#.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("total_revenue"));
    }

    #[tokio::test]
    async fn test_non_positive_revenue_returns_400() {
        let router = create_router(create_test_state());

        let response =
            post_json(router, "/bonus/calculate", r#"{"total_revenue": "0"}"#.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_REVENUE");
    }

    #[tokio::test]
    async fn test_perfect_week_check_uses_policy_cutoff() {
        let router = create_router(create_test_state());
        let body = r#"{
            "attendance": [
                {"id": "a1", "employee_id": "emp_001", "date": "2026-03-02", "arrival_time": "07:14:00", "in_uniform": true},
                {"id": "a2", "employee_id": "emp_001", "date": "2026-03-03", "arrival_time": "07:16:00", "in_uniform": true}
            ]
        }"#;

        let response = post_json(router, "/perfect-week/check", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let check: PerfectWeekCheck = serde_json::from_slice(&body).unwrap();
        assert!(!check.achieved);
        assert_eq!(check.days_worked, 2);
        assert_eq!(check.tardy_days, 1);
    }

    #[tokio::test]
    async fn test_policy_endpoint_returns_loaded_policy() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/policy")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let policy: BonusPolicy = serde_json::from_slice(&body).unwrap();
        assert_eq!(policy, BonusPolicy::default());
    }
}
