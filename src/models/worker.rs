//! Worker model.
//!
//! This module defines the [`Worker`] struct for the people whose
//! attendance is reconciled into payroll.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A person being paid a fixed amount per working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique identifier for the worker.
    pub id: String,
    /// The worker's full name as shown on the payroll sheet.
    pub full_name: String,
    /// Base pay for one working day, before lateness penalties.
    pub daily_pay: Decimal,
}

impl Worker {
    /// Checks the fields an administrator can get wrong.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_payroll::models::Worker;
    /// use rust_decimal::Decimal;
    ///
    /// let worker = Worker {
    ///     id: "wrk_001".to_string(),
    ///     full_name: "Budi Santoso".to_string(),
    ///     daily_pay: Decimal::new(100_000, 0),
    /// };
    /// assert!(worker.validate().is_ok());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidWorker {
                field: "id".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.full_name.trim().is_empty() {
            return Err(EngineError::InvalidWorker {
                field: "full_name".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.daily_pay.is_sign_negative() {
            return Err(EngineError::InvalidWorker {
                field: "daily_pay".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_worker() -> Worker {
        Worker {
            id: "wrk_001".to_string(),
            full_name: "Budi Santoso".to_string(),
            daily_pay: Decimal::new(100_000, 0),
        }
    }

    #[test]
    fn test_deserialize_worker() {
        let json = r#"{
            "id": "wrk_002",
            "full_name": "Siti Rahma",
            "daily_pay": "125000"
        }"#;

        let worker: Worker = serde_json::from_str(json).unwrap();
        assert_eq!(worker.id, "wrk_002");
        assert_eq!(worker.full_name, "Siti Rahma");
        assert_eq!(worker.daily_pay, Decimal::new(125_000, 0));
    }

    #[test]
    fn test_daily_pay_serializes_as_string() {
        let json = serde_json::to_string(&create_test_worker()).unwrap();
        assert!(json.contains("\"daily_pay\":\"100000\""));
    }

    #[test]
    fn test_valid_worker_passes_validation() {
        assert!(create_test_worker().validate().is_ok());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut worker = create_test_worker();
        worker.full_name = "   ".to_string();

        match worker.validate() {
            Err(EngineError::InvalidWorker { field, .. }) => assert_eq!(field, "full_name"),
            other => panic!("Expected InvalidWorker, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_daily_pay_is_rejected() {
        let mut worker = create_test_worker();
        worker.daily_pay = Decimal::new(-1, 0);

        match worker.validate() {
            Err(EngineError::InvalidWorker { field, .. }) => assert_eq!(field, "daily_pay"),
            other => panic!("Expected InvalidWorker, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_daily_pay_is_allowed() {
        let mut worker = create_test_worker();
        worker.daily_pay = Decimal::ZERO;
        assert!(worker.validate().is_ok());
    }
}
