//! In-memory roster and attendance log store.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceLog, LogUpdate, Worker};

use super::{AttendanceLogStore, WorkerRoster};

/// Roster and logs held in `RwLock`-guarded maps.
///
/// Cloning is cheap and every clone shares the same data.
///
/// # Examples
///
/// ```
/// use attendance_payroll::models::Worker;
/// use attendance_payroll::store::{InMemoryStore, WorkerRoster};
/// use rust_decimal::Decimal;
///
/// let store = InMemoryStore::new().with_workers(vec![Worker {
///     id: "wrk_001".to_string(),
///     full_name: "Budi Santoso".to_string(),
///     daily_pay: Decimal::new(100_000, 0),
/// }]);
///
/// assert_eq!(store.find_worker("wrk_001").unwrap().full_name, "Budi Santoso");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    workers: Arc<RwLock<HashMap<String, Worker>>>,
    logs: Arc<RwLock<HashMap<Uuid, AttendanceLog>>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the roster, replacing workers with the same id.
    pub fn with_workers(self, workers: Vec<Worker>) -> Self {
        if let Ok(mut map) = self.workers.write() {
            for worker in workers {
                map.insert(worker.id.clone(), worker);
            }
        }
        self
    }

    /// Seeds attendance logs as-is, without roster or duplicate checks.
    pub fn with_logs(self, logs: Vec<AttendanceLog>) -> Self {
        if let Ok(mut map) = self.logs.write() {
            for log in logs {
                map.insert(log.id, log);
            }
        }
        self
    }
}

fn poisoned<T>(_: PoisonError<T>) -> EngineError {
    EngineError::StorageError {
        message: "store lock poisoned".to_string(),
    }
}

impl WorkerRoster for InMemoryStore {
    fn all_workers(&self) -> EngineResult<Vec<Worker>> {
        let workers = self.workers.read().map_err(poisoned)?;
        let mut all: Vec<Worker> = workers.values().cloned().collect();
        all.sort_by(|a, b| a.full_name.cmp(&b.full_name).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }

    fn find_worker(&self, worker_id: &str) -> EngineResult<Worker> {
        let workers = self.workers.read().map_err(poisoned)?;
        workers
            .get(worker_id)
            .cloned()
            .ok_or_else(|| EngineError::WorkerNotFound {
                worker_id: worker_id.to_string(),
            })
    }

    fn insert_worker(&self, worker: Worker) -> EngineResult<Worker> {
        worker.validate()?;

        let mut workers = self.workers.write().map_err(poisoned)?;
        if workers.contains_key(&worker.id) {
            return Err(EngineError::DuplicateWorker {
                worker_id: worker.id,
            });
        }

        debug!(worker_id = %worker.id, "Worker added to roster");
        workers.insert(worker.id.clone(), worker.clone());
        Ok(worker)
    }

    fn update_daily_pay(&self, worker_id: &str, daily_pay: Decimal) -> EngineResult<Worker> {
        let mut workers = self.workers.write().map_err(poisoned)?;
        let worker = workers
            .get_mut(worker_id)
            .ok_or_else(|| EngineError::WorkerNotFound {
                worker_id: worker_id.to_string(),
            })?;

        let updated = Worker {
            daily_pay,
            ..worker.clone()
        };
        updated.validate()?;

        *worker = updated.clone();
        Ok(updated)
    }
}

impl AttendanceLogStore for InMemoryStore {
    fn logs_between(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> EngineResult<Vec<AttendanceLog>> {
        if date_from > date_to {
            return Err(EngineError::InvalidDateRange { date_from, date_to });
        }

        let workers = self.workers.read().map_err(poisoned)?;
        let logs = self.logs.read().map_err(poisoned)?;

        let name_of = |log: &AttendanceLog| -> String {
            workers
                .get(&log.worker_id)
                .map(|w| w.full_name.clone())
                .unwrap_or_else(|| log.worker_id.clone())
        };

        let mut selected: Vec<(String, AttendanceLog)> = logs
            .values()
            .filter(|log| log.work_date >= date_from && log.work_date <= date_to)
            .map(|log| (name_of(log), log.clone()))
            .collect();

        selected.sort_by(|(name_a, a), (name_b, b)| {
            name_a
                .cmp(name_b)
                .then_with(|| a.worker_id.cmp(&b.worker_id))
                .then_with(|| a.work_date.cmp(&b.work_date))
        });

        Ok(selected.into_iter().map(|(_, log)| log).collect())
    }

    fn find_log(&self, log_id: Uuid) -> EngineResult<AttendanceLog> {
        let logs = self.logs.read().map_err(poisoned)?;
        logs.get(&log_id)
            .cloned()
            .ok_or(EngineError::LogNotFound { log_id })
    }

    fn insert_log(&self, worker_id: &str, at: NaiveDateTime) -> EngineResult<AttendanceLog> {
        let workers = self.workers.read().map_err(poisoned)?;
        if !workers.contains_key(worker_id) {
            return Err(EngineError::WorkerNotFound {
                worker_id: worker_id.to_string(),
            });
        }

        let mut logs = self.logs.write().map_err(poisoned)?;
        let work_date = at.date();
        if logs
            .values()
            .any(|log| log.worker_id == worker_id && log.work_date == work_date)
        {
            return Err(EngineError::DuplicateLog {
                worker_id: worker_id.to_string(),
                work_date,
            });
        }

        let log = AttendanceLog::clock_in(worker_id, at);
        debug!(log_id = %log.id, worker_id, %work_date, "Attendance log created");
        logs.insert(log.id, log.clone());
        Ok(log)
    }

    fn update_log(&self, log_id: Uuid, update: &LogUpdate) -> EngineResult<AttendanceLog> {
        let mut logs = self.logs.write().map_err(poisoned)?;
        let log = logs
            .get_mut(&log_id)
            .ok_or(EngineError::LogNotFound { log_id })?;

        log.apply(update);
        Ok(log.clone())
    }
}
