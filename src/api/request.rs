//! Request types for the attendance payroll API.
//!
//! This module defines the JSON request bodies for the payroll, worker and
//! attendance log endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{LogUpdate, Worker};

/// Request body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// First day of the payroll range (inclusive).
    pub date_from: NaiveDate,
    /// Last day of the payroll range (inclusive).
    pub date_to: NaiveDate,
}

/// Request body for creating a worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkerRequest {
    /// Identifier to use; a UUID is generated when omitted.
    #[serde(default)]
    pub id: Option<String>,
    /// The worker's full name.
    pub full_name: String,
    /// Base pay for one working day.
    pub daily_pay: Decimal,
}

impl From<CreateWorkerRequest> for Worker {
    fn from(req: CreateWorkerRequest) -> Self {
        Worker {
            id: req.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            full_name: req.full_name,
            daily_pay: req.daily_pay,
        }
    }
}

/// Request body for changing a worker's daily pay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDailyPayRequest {
    /// The new daily pay.
    pub daily_pay: Decimal,
}

/// Request body for clocking a worker in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLogRequest {
    /// The worker clocking in.
    pub worker_id: String,
    /// Clock-in time; its date becomes the log's work day.
    pub start_work: NaiveDateTime,
}

/// Request body for updating a log's clock timestamps.
///
/// Fields left out keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLogRequest {
    /// New clock-in time.
    #[serde(default)]
    pub start_work: Option<NaiveDateTime>,
    /// New break start time.
    #[serde(default)]
    pub start_break: Option<NaiveDateTime>,
    /// New break end time.
    #[serde(default)]
    pub end_break: Option<NaiveDateTime>,
    /// New clock-out time.
    #[serde(default)]
    pub end_work: Option<NaiveDateTime>,
}

impl From<UpdateLogRequest> for LogUpdate {
    fn from(req: UpdateLogRequest) -> Self {
        LogUpdate {
            start_work: req.start_work,
            start_break: req.start_break,
            end_break: req.end_break,
            end_work: req.end_work,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_payroll_request() {
        let json = r#"{"date_from": "2024-01-01", "date_to": "2024-01-31"}"#;
        let request: PayrollRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.date_from, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(request.date_to, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }

    #[test]
    fn test_create_worker_generates_id_when_missing() {
        let json = r#"{"full_name": "Budi Santoso", "daily_pay": "100000"}"#;
        let request: CreateWorkerRequest = serde_json::from_str(json).unwrap();
        let worker: Worker = request.into();

        assert!(Uuid::parse_str(&worker.id).is_ok());
        assert_eq!(worker.daily_pay, Decimal::new(100_000, 0));
    }

    #[test]
    fn test_create_worker_keeps_given_id() {
        let json = r#"{"id": "wrk_001", "full_name": "Budi Santoso", "daily_pay": "100000"}"#;
        let worker: Worker = serde_json::from_str::<CreateWorkerRequest>(json)
            .unwrap()
            .into();
        assert_eq!(worker.id, "wrk_001");
    }

    #[test]
    fn test_update_log_request_with_partial_fields() {
        let json = r#"{"end_work": "2024-01-02T17:00:00"}"#;
        let update: LogUpdate = serde_json::from_str::<UpdateLogRequest>(json)
            .unwrap()
            .into();

        assert!(update.start_work.is_none());
        assert!(update.end_work.is_some());
    }
}
