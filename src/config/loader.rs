//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! schedule from a YAML file inside a configuration directory.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollConfig;

/// Name of the schedule file inside a configuration directory.
pub const SCHEDULE_FILE: &str = "schedule.yaml";

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// └── schedule.yaml   # Work-day template and penalty rate
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// println!("Schedule: {}", loader.config().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `schedule.yaml` is missing, is not valid YAML, or
    /// describes a work day whose reference times are out of order.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let schedule_path = path.as_ref().join(SCHEDULE_FILE);
        let config = Self::load_yaml::<PayrollConfig>(&schedule_path)?;
        config.template.validate()?;

        debug!(
            path = %schedule_path.display(),
            schedule = %config.name,
            "Loaded payroll schedule"
        );

        Ok(Self { config })
    }

    /// Returns a loader holding the built-in standard schedule.
    pub fn standard() -> Self {
        Self {
            config: PayrollConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
