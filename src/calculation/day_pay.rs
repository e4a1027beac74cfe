//! Daily pay calculation.
//!
//! Turns one attendance log into a [`ComputedDayRow`]: the observed clock
//! times, the lateness penalty and the resulting net pay.

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::models::{AttendanceLog, ComputedDayRow};

use super::lateness_penalty::calculate_lateness_penalty;

/// Computes the payroll row for a single day.
///
/// Net pay is `daily_pay - penalty` with no floor, so a bad enough day
/// produces a negative amount.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::calculate_day_row;
/// use attendance_payroll::config::PayrollConfig;
/// use attendance_payroll::models::{AttendanceLog, ClockEvent};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let at = |t: &str| NaiveDateTime::parse_from_str(&format!("2024-01-02 {}", t), "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let mut log = AttendanceLog::clock_in("wrk_001", at("08:00:00"));
/// log.record(ClockEvent::StartBreak, at("12:00:00"));
/// log.record(ClockEvent::EndBreak, at("13:00:00"));
/// log.record(ClockEvent::EndWork, at("16:50:00"));
///
/// let row = calculate_day_row(&log, "Budi Santoso", Decimal::new(100_000, 0), &PayrollConfig::default());
/// assert_eq!(row.penalty, Decimal::new(100_000, 0));
/// assert_eq!(row.net_pay, Decimal::ZERO);
/// ```
pub fn calculate_day_row(
    log: &AttendanceLog,
    worker_name: &str,
    daily_pay: Decimal,
    config: &PayrollConfig,
) -> ComputedDayRow {
    let result = calculate_lateness_penalty(log, &config.template, &config.penalty);

    ComputedDayRow {
        worker_id: log.worker_id.clone(),
        worker_name: worker_name.to_string(),
        work_date: log.work_date,
        start_work: log.start_work.map(|at| at.time()),
        start_break: log.start_break.map(|at| at.time()),
        end_break: log.end_break.map(|at| at.time()),
        end_work: log.end_work.map(|at| at.time()),
        daily_pay,
        penalty_minutes: result.minutes,
        penalty: result.penalty,
        net_pay: daily_pay - result.penalty,
    }
}
