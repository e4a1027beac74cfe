//! Application state for the attendance payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PayrollConfig;
use crate::store::{AttendanceLogStore, InMemoryStore, WorkerRoster};

/// Shared application state.
///
/// Holds the loaded work-day configuration and the stores the handlers
/// read the roster and attendance logs from.
#[derive(Clone)]
pub struct AppState {
    config: Arc<PayrollConfig>,
    roster: Arc<dyn WorkerRoster>,
    logs: Arc<dyn AttendanceLogStore>,
}

impl AppState {
    /// Creates application state over the given stores.
    pub fn new(
        config: PayrollConfig,
        roster: Arc<dyn WorkerRoster>,
        logs: Arc<dyn AttendanceLogStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            roster,
            logs,
        }
    }

    /// Creates application state backed by a single in-memory store.
    pub fn in_memory(config: PayrollConfig, store: InMemoryStore) -> Self {
        let store = Arc::new(store);
        Self::new(config, store.clone(), store)
    }

    /// Returns the work-day configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the worker roster.
    pub fn roster(&self) -> &dyn WorkerRoster {
        self.roster.as_ref()
    }

    /// Returns the attendance log store.
    pub fn logs(&self) -> &dyn AttendanceLogStore {
        self.logs.as_ref()
    }
}
