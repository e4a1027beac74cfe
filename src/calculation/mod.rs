//! Calculation logic for the attendance payroll engine.
//!
//! This module contains the week partitioner, the lateness penalty rule,
//! the per-day pay calculation and the payroll reconciliation that ties
//! them together into weekly totals.

mod day_pay;
mod lateness_penalty;
mod payroll;
mod week_partition;

pub use day_pay::calculate_day_row;
pub use lateness_penalty::{LatenessPenaltyResult, calculate_lateness_penalty, penalized_minutes};
pub use payroll::{calculate_payroll, reconcile};
pub use week_partition::{PartitionState, PayWeeks, partition_weeks};
