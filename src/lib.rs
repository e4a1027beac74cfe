//! Attendance reconciliation and weekly payroll engine.
//!
//! This crate turns daily attendance logs (clock-in, break start, break end,
//! clock-out) into payroll rows grouped by Monday-Friday pay weeks. Each day
//! is paid a worker's fixed daily pay minus a punctuality penalty that grows
//! with the square of the minutes late or early, and every worker's week
//! closes with a weekly total.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
