//! Worker roster and attendance log storage.
//!
//! The payroll calculation only needs a roster and a set of logs; these
//! traits let the HTTP layer read them from any backing store. An
//! [`InMemoryStore`] implements both.

mod memory;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{AttendanceLog, LogUpdate, Worker};

pub use memory::InMemoryStore;

/// Read and write access to the workers being paid.
pub trait WorkerRoster: Send + Sync {
    /// Returns every worker, ordered by full name.
    fn all_workers(&self) -> EngineResult<Vec<Worker>>;

    /// Looks up one worker.
    ///
    /// Returns [`EngineError::WorkerNotFound`](crate::error::EngineError::WorkerNotFound)
    /// when no worker has that id.
    fn find_worker(&self, worker_id: &str) -> EngineResult<Worker>;

    /// Adds a worker, rejecting invalid records and duplicate ids.
    fn insert_worker(&self, worker: Worker) -> EngineResult<Worker>;

    /// Changes the daily pay of an existing worker.
    fn update_daily_pay(&self, worker_id: &str, daily_pay: Decimal) -> EngineResult<Worker>;
}

/// Read and write access to attendance logs.
pub trait AttendanceLogStore: Send + Sync {
    /// Returns the logs whose work day lies in `[date_from, date_to]`,
    /// ordered by worker full name and then work day.
    ///
    /// Returns [`EngineError::InvalidDateRange`](crate::error::EngineError::InvalidDateRange)
    /// when `date_from` is after `date_to`.
    fn logs_between(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> EngineResult<Vec<AttendanceLog>>;

    /// Looks up one log by id.
    fn find_log(&self, log_id: Uuid) -> EngineResult<AttendanceLog>;

    /// Clocks a worker in, creating the log for the day of `at`.
    ///
    /// Fails when the worker is unknown or already has a log for that day.
    fn insert_log(&self, worker_id: &str, at: NaiveDateTime) -> EngineResult<AttendanceLog>;

    /// Patches the clock timestamps present in `update`.
    fn update_log(&self, log_id: Uuid, update: &LogUpdate) -> EngineResult<AttendanceLog>;
}
