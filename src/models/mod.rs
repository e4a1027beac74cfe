//! Core data models for the attendance payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance_log;
mod pay_week;
mod payroll_report;
mod payroll_row;
mod worker;

pub use attendance_log::{AttendanceLog, ClockEvent, LogUpdate};
pub use pay_week::PayWeek;
pub use payroll_report::{PayrollReport, PayrollSheet};
pub use payroll_row::{ComputedDayRow, PayrollRow, PenaltyMinutes, WeeklyTotalRow};
pub use worker::Worker;
