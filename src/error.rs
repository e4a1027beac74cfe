//! Error types for the attendance payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the engine, its configuration layer and its
//! attendance store can report.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the attendance payroll engine.
///
/// The payroll core itself only ever rejects an inverted date range; the
/// remaining variants belong to configuration loading and the attendance
/// store.
///
/// # Example
///
/// ```
/// use attendance_payroll::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidDateRange {
///     date_from: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
///     date_to: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range: 2024-01-05 is after 2024-01-01"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but describes an unusable schedule.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What made the configuration unusable.
        message: String,
    },

    /// The start of a payroll range lies after its end.
    #[error("Invalid date range: {date_from} is after {date_to}")]
    InvalidDateRange {
        /// The requested first day.
        date_from: NaiveDate,
        /// The requested last day.
        date_to: NaiveDate,
    },

    /// No worker with the given identifier exists.
    #[error("Worker not found: {worker_id}")]
    WorkerNotFound {
        /// The identifier that was looked up.
        worker_id: String,
    },

    /// A worker with the given identifier already exists.
    #[error("Worker already exists: {worker_id}")]
    DuplicateWorker {
        /// The conflicting identifier.
        worker_id: String,
    },

    /// A worker record was invalid.
    #[error("Invalid worker field '{field}': {message}")]
    InvalidWorker {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No attendance log with the given identifier exists.
    #[error("Attendance log not found: {log_id}")]
    LogNotFound {
        /// The identifier that was looked up.
        log_id: Uuid,
    },

    /// The worker already has an attendance log for that work day.
    #[error("Worker '{worker_id}' already has an attendance log for {work_date}")]
    DuplicateLog {
        /// The worker owning the existing log.
        worker_id: String,
        /// The work day of the existing log.
        work_date: NaiveDate,
    },

    /// The backing store could not serve the request.
    #[error("Storage error: {message}")]
    StorageError {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/schedule.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/schedule.yaml"
        );
    }

    #[test]
    fn test_invalid_date_range_displays_both_dates() {
        let error = EngineError::InvalidDateRange {
            date_from: make_date("2024-02-10"),
            date_to: make_date("2024-02-01"),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: 2024-02-10 is after 2024-02-01"
        );
    }

    #[test]
    fn test_duplicate_log_displays_worker_and_date() {
        let error = EngineError::DuplicateLog {
            worker_id: "wrk_001".to_string(),
            work_date: make_date("2024-01-03"),
        };
        assert_eq!(
            error.to_string(),
            "Worker 'wrk_001' already has an attendance log for 2024-01-03"
        );
    }

    #[test]
    fn test_invalid_worker_displays_field_and_message() {
        let error = EngineError::InvalidWorker {
            field: "daily_pay".to_string(),
            message: "cannot be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid worker field 'daily_pay': cannot be negative"
        );
    }

    #[test]
    fn test_log_not_found_displays_id() {
        let log_id = Uuid::nil();
        let error = EngineError::LogNotFound { log_id };
        assert_eq!(
            error.to_string(),
            "Attendance log not found: 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_worker_not_found() -> EngineResult<()> {
            Err(EngineError::WorkerNotFound {
                worker_id: "ghost".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_worker_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
