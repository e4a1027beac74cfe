//! HTTP request handlers for the attendance payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::reconcile;
use crate::error::EngineError;
use crate::models::{LogUpdate, PayrollReport, Worker};

use super::request::{
    CreateLogRequest, CreateWorkerRequest, PayrollRequest, UpdateDailyPayRequest,
    UpdateLogRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .route("/workers", post(create_worker_handler))
        .route("/workers/:worker_id", get(get_worker_handler))
        .route("/workers/:worker_id/daily-pay", put(update_daily_pay_handler))
        .route("/logs", post(create_log_handler))
        .route("/logs/:log_id", put(update_log_handler))
        .with_state(state)
}

/// Handler for POST /payroll.
///
/// Reconciles the stored attendance logs of a date range into weekly
/// payroll rows.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match build_report(&state, &request) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                date_from = %report.date_from,
                date_to = %report.date_to,
                weeks = report.weeks.len(),
                rows = report.rows.len(),
                grand_total = %report.grand_total,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll completed successfully"
            );
            json_response(StatusCode::OK, &report)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

fn build_report(state: &AppState, request: &PayrollRequest) -> Result<PayrollReport, EngineError> {
    let logs = state.logs().logs_between(request.date_from, request.date_to)?;
    let roster = state.roster().all_workers()?;
    let sheet = reconcile(
        request.date_from,
        request.date_to,
        &logs,
        &roster,
        state.config(),
    )?;
    Ok(PayrollReport::new(request.date_from, request.date_to, sheet))
}

/// Handler for POST /workers.
async fn create_worker_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateWorkerRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create worker request");

    let worker: Worker = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.roster().insert_worker(worker) {
        Ok(worker) => {
            info!(correlation_id = %correlation_id, worker_id = %worker.id, "Worker created");
            json_response(StatusCode::CREATED, &worker)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /workers/:worker_id.
async fn get_worker_handler(
    State(state): State<AppState>,
    Path(worker_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, worker_id = %worker_id, "Processing get worker request");

    match state.roster().find_worker(&worker_id) {
        Ok(worker) => json_response(StatusCode::OK, &worker),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /workers/:worker_id/daily-pay.
async fn update_daily_pay_handler(
    State(state): State<AppState>,
    Path(worker_id): Path<String>,
    payload: Result<Json<UpdateDailyPayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, worker_id = %worker_id, "Processing daily pay update");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.roster().update_daily_pay(&worker_id, request.daily_pay) {
        Ok(worker) => {
            info!(
                correlation_id = %correlation_id,
                worker_id = %worker.id,
                daily_pay = %worker.daily_pay,
                "Daily pay updated"
            );
            json_response(StatusCode::OK, &worker)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /logs.
///
/// Clocks a worker in, creating the attendance log for that day.
async fn create_log_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLogRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create log request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.logs().insert_log(&request.worker_id, request.start_work) {
        Ok(log) => {
            info!(
                correlation_id = %correlation_id,
                log_id = %log.id,
                worker_id = %log.worker_id,
                work_date = %log.work_date,
                "Attendance log created"
            );
            json_response(StatusCode::CREATED, &log)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /logs/:log_id.
async fn update_log_handler(
    State(state): State<AppState>,
    Path(log_id): Path<String>,
    payload: Result<Json<UpdateLogRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, log_id = %log_id, "Processing update log request");

    let log_id = match Uuid::parse_str(&log_id) {
        Ok(id) => id,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid log id");
            return ApiErrorResponse::bad_request(ApiError::validation_error(format!(
                "Invalid log id '{}': {}",
                log_id, err
            )))
            .into_response();
        }
    };

    let update: LogUpdate = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.logs().update_log(log_id, &update) {
        Ok(log) => json_response(StatusCode::OK, &log),
        Err(err) => error_response(correlation_id, err),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Maps a JSON body rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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
    ApiErrorResponse::bad_request(error).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayrollConfig;
    use crate::models::{AttendanceLog, ClockEvent, PayrollRow};
    use crate::store::InMemoryStore;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn full_day(worker_id: &str, date: &str, start_work: &str) -> AttendanceLog {
        let mut log = AttendanceLog::clock_in(worker_id, make_datetime(date, start_work));
        log.record(ClockEvent::StartBreak, make_datetime(date, "12:00:00"));
        log.record(ClockEvent::EndBreak, make_datetime(date, "13:00:00"));
        log.record(ClockEvent::EndWork, make_datetime(date, "17:00:00"));
        log
    }

    fn create_test_store() -> InMemoryStore {
        InMemoryStore::new().with_workers(vec![Worker {
            id: "wrk_001".to_string(),
            full_name: "Budi Santoso".to_string(),
            daily_pay: Decimal::new(100_000, 0),
        }])
    }

    fn create_test_state(store: InMemoryStore) -> AppState {
        AppState::in_memory(PayrollConfig::default(), store)
    }

    fn json_request(method: &str, uri: &str, body: impl Into<String>) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.into()))
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_payroll_for_one_week_returns_200() {
        let store = create_test_store().with_logs(vec![
            full_day("wrk_001", "2024-01-01", "08:00:00"),
            full_day("wrk_001", "2024-01-02", "08:05:00"),
        ]);
        let router = create_router(create_test_state(store));

        let response = router
            .oneshot(json_request(
                "POST",
                "/payroll",
                r#"{"date_from": "2024-01-01", "date_to": "2024-01-05"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let report: PayrollReport = body_json(response).await;
        assert_eq!(report.weeks.len(), 1);
        assert_eq!(report.rows.len(), 3);
        match &report.rows[2] {
            PayrollRow::WeeklyTotal(total) => {
                assert_eq!(total.net_pay, Decimal::from_str("175000").unwrap());
            }
            other => panic!("Expected weekly total, got {:?}", other),
        }
        assert_eq!(report.grand_total, Decimal::from_str("175000").unwrap());
    }

    #[tokio::test]
    async fn test_payroll_inverted_range_returns_400() {
        let router = create_router(create_test_state(create_test_store()));

        let response = router
            .oneshot(json_request(
                "POST",
                "/payroll",
                r#"{"date_from": "2024-01-05", "date_to": "2024-01-01"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "INVALID_DATE_RANGE");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state(create_test_store()));

        let response = router
            .oneshot(json_request("POST", "/payroll", "{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_router(create_test_state(create_test_store()));

        let response = router
            .oneshot(json_request("POST", "/payroll", r#"{"date_from": "2024-01-01"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("date_to"), "got: {}", error.message);
    }

    #[tokio::test]
    async fn test_create_and_get_worker() {
        let state = create_test_state(InMemoryStore::new());

        let response = create_router(state.clone())
            .oneshot(json_request(
                "POST",
                "/workers",
                r#"{"id": "wrk_002", "full_name": "Siti Rahma", "daily_pay": "125000"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = create_router(state)
            .oneshot(
                Request::builder()
                    .uri("/workers/wrk_002")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let worker: Worker = body_json(response).await;
        assert_eq!(worker.full_name, "Siti Rahma");
        assert_eq!(worker.daily_pay, Decimal::new(125_000, 0));
    }

    #[tokio::test]
    async fn test_get_unknown_worker_returns_404() {
        let router = create_router(create_test_state(create_test_store()));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/workers/nobody")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "WORKER_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_update_daily_pay() {
        let router = create_router(create_test_state(create_test_store()));

        let response = router
            .oneshot(json_request(
                "PUT",
                "/workers/wrk_001/daily-pay",
                r#"{"daily_pay": "110000"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let worker: Worker = body_json(response).await;
        assert_eq!(worker.daily_pay, Decimal::new(110_000, 0));
    }

    #[tokio::test]
    async fn test_duplicate_log_returns_409() {
        let state = create_test_state(create_test_store());
        let body = r#"{"worker_id": "wrk_001", "start_work": "2024-01-02T08:00:00"}"#;

        let first = create_router(state.clone())
            .oneshot(json_request("POST", "/logs", body))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = create_router(state)
            .oneshot(json_request("POST", "/logs", body))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        let error: ApiError = body_json(second).await;
        assert_eq!(error.code, "DUPLICATE_LOG");
    }

    #[tokio::test]
    async fn test_update_log_with_bad_id_returns_400() {
        let router = create_router(create_test_state(create_test_store()));

        let response = router
            .oneshot(json_request(
                "PUT",
                "/logs/not-a-uuid",
                r#"{"end_work": "2024-01-02T17:00:00"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_update_unknown_log_returns_404() {
        let router = create_router(create_test_state(create_test_store()));

        let response = router
            .oneshot(json_request(
                "PUT",
                &format!("/logs/{}", Uuid::new_v4()),
                r#"{"end_work": "2024-01-02T17:00:00"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
