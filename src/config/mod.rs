//! Configuration loading and management for the payroll engine.
//!
//! This module loads the reference work-day template and the lateness
//! penalty rate from a YAML schedule file, falling back to the standard
//! 08:00 / 12:00 / 13:00 / 17:00 day.
//!
//! # Example
//!
//! ```no_run
//! use attendance_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Loaded schedule: {}", config.config().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, SCHEDULE_FILE};
pub use types::{DEFAULT_PENALTY_RATE, PayrollConfig, PenaltyPolicy, WorkDayTemplate};
