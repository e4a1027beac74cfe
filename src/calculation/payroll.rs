//! Payroll reconciliation.
//!
//! Groups attendance logs into pay weeks per worker and emits the payroll
//! sheet rows: weeks ascending, workers in order of first appearance in the
//! log sequence, days ascending, and a weekly total after each worker's
//! days.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{AttendanceLog, PayWeek, PayrollRow, PayrollSheet, WeeklyTotalRow, Worker};

use super::day_pay::calculate_day_row;
use super::week_partition::partition_weeks;

/// A worker seen in the log set, with their logs sorted by work day.
struct WorkerLogs<'a> {
    worker_id: &'a str,
    worker_name: String,
    daily_pay: Decimal,
    logs: Vec<&'a AttendanceLog>,
}

/// Computes the payroll rows for a set of weeks.
///
/// Logs whose work day falls in none of the weeks (weekends, days outside
/// the range) produce no rows. A worker without logs in a given week
/// produces no rows for that week.
///
/// A log whose worker is missing from `roster` is still reported, using the
/// worker id as the name and a daily pay of zero.
///
/// # Arguments
///
/// * `weeks` - Pay weeks in ascending order, as produced by [`partition_weeks`]
/// * `logs` - Attendance logs in any order
/// * `roster` - Workers used for name and daily pay lookup
/// * `config` - The work-day template and penalty rate
pub fn calculate_payroll(
    weeks: &[PayWeek],
    logs: &[AttendanceLog],
    roster: &[Worker],
    config: &PayrollConfig,
) -> Vec<PayrollRow> {
    let workers = group_by_worker(logs, roster);
    let mut rows = Vec::new();

    for week in weeks {
        for worker in &workers {
            let mut total = Decimal::ZERO;
            let mut days = 0;

            for log in worker.logs.iter().filter(|l| week.contains_date(l.work_date)) {
                let row = calculate_day_row(log, &worker.worker_name, worker.daily_pay, config);
                total += row.net_pay;
                days += 1;
                rows.push(PayrollRow::Day(row));
            }

            if days > 0 {
                rows.push(PayrollRow::WeeklyTotal(WeeklyTotalRow {
                    week: *week,
                    label: week.label(),
                    worker_id: worker.worker_id.to_string(),
                    worker_name: worker.worker_name.clone(),
                    days,
                    net_pay: total,
                }));
            }
        }
    }

    let reported = rows.iter().filter(|r| r.as_day().is_some()).count();
    if reported < logs.len() {
        debug!(
            logs = logs.len(),
            reported,
            "Attendance logs outside every pay week were skipped"
        );
    }

    rows
}

/// Partitions a date range and computes its payroll sheet.
///
/// Fails only when `date_from` is after `date_to`.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::reconcile;
/// use attendance_payroll::config::PayrollConfig;
/// use chrono::NaiveDate;
///
/// let sheet = reconcile(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
///     &[],
///     &[],
///     &PayrollConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(sheet.weeks.len(), 2);
/// assert!(sheet.rows.is_empty());
/// ```
pub fn reconcile(
    date_from: NaiveDate,
    date_to: NaiveDate,
    logs: &[AttendanceLog],
    roster: &[Worker],
    config: &PayrollConfig,
) -> EngineResult<PayrollSheet> {
    let weeks = partition_weeks(date_from, date_to)?;
    let rows = calculate_payroll(&weeks, logs, roster, config);
    Ok(PayrollSheet { weeks, rows })
}

fn group_by_worker<'a>(logs: &'a [AttendanceLog], roster: &[Worker]) -> Vec<WorkerLogs<'a>> {
    let roster: HashMap<&str, &Worker> = roster.iter().map(|w| (w.id.as_str(), w)).collect();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut workers: Vec<WorkerLogs<'a>> = Vec::new();

    for log in logs {
        let worker_id = log.worker_id.as_str();
        let index = *positions.entry(worker_id).or_insert_with(|| {
            let (worker_name, daily_pay) = match roster.get(worker_id) {
                Some(worker) => (worker.full_name.clone(), worker.daily_pay),
                None => {
                    warn!(worker_id, "Attendance log references a worker missing from the roster");
                    (worker_id.to_string(), Decimal::ZERO)
                }
            };
            workers.push(WorkerLogs {
                worker_id,
                worker_name,
                daily_pay,
                logs: Vec::new(),
            });
            workers.len() - 1
        });
        workers[index].logs.push(log);
    }

    for worker in &mut workers {
        worker.logs.sort_by_key(|l| l.work_date);
    }

    workers
}
