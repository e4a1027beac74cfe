//! Computed payroll rows.
//!
//! The payroll calculator emits an ordered sequence of [`PayrollRow`]s:
//! day rows for each worker and week, each worker's block closed by a
//! weekly total row.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ClockEvent, PayWeek};

/// Display format for clock times on a payroll sheet.
const CLOCK_TIME_FORMAT: &str = "%H:%M:%S";

/// Penalized deviation in whole minutes for each clock event of a day.
///
/// Only the penalized direction is counted, so every field is zero or
/// positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyMinutes {
    /// Minutes clocked in after the reference start.
    pub start_work: i64,
    /// Minutes the break started after its reference time.
    pub start_break: i64,
    /// Minutes the break ended before its reference time.
    pub end_break: i64,
    /// Minutes clocked out before the reference end.
    pub end_work: i64,
}

impl PenaltyMinutes {
    /// Returns the minutes counted for one event.
    pub fn get(&self, event: ClockEvent) -> i64 {
        match event {
            ClockEvent::StartWork => self.start_work,
            ClockEvent::StartBreak => self.start_break,
            ClockEvent::EndBreak => self.end_break,
            ClockEvent::EndWork => self.end_work,
        }
    }

    /// Sets the minutes counted for one event.
    pub fn set(&mut self, event: ClockEvent, minutes: i64) {
        match event {
            ClockEvent::StartWork => self.start_work = minutes,
            ClockEvent::StartBreak => self.start_break = minutes,
            ClockEvent::EndBreak => self.end_break = minutes,
            ClockEvent::EndWork => self.end_work = minutes,
        }
    }
}

/// One worker's computed attendance and pay for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedDayRow {
    /// The worker the row belongs to.
    pub worker_id: String,
    /// The worker's full name.
    pub worker_name: String,
    /// The work day.
    pub work_date: NaiveDate,
    /// Observed clock-in time, if recorded.
    pub start_work: Option<NaiveTime>,
    /// Observed break start, if recorded.
    pub start_break: Option<NaiveTime>,
    /// Observed break end, if recorded.
    pub end_break: Option<NaiveTime>,
    /// Observed clock-out time, if recorded.
    pub end_work: Option<NaiveTime>,
    /// The worker's daily base pay.
    pub daily_pay: Decimal,
    /// Penalized minutes per event.
    pub penalty_minutes: PenaltyMinutes,
    /// Total lateness penalty for the day.
    pub penalty: Decimal,
    /// Daily pay minus penalty. May be negative.
    pub net_pay: Decimal,
}

impl ComputedDayRow {
    /// Returns the observed time for an event.
    pub fn clock_time(&self, event: ClockEvent) -> Option<NaiveTime> {
        match event {
            ClockEvent::StartWork => self.start_work,
            ClockEvent::StartBreak => self.start_break,
            ClockEvent::EndBreak => self.end_break,
            ClockEvent::EndWork => self.end_work,
        }
    }

    /// Returns the time as printed on a sheet ("08:00:00"), or blank when absent.
    pub fn clock_display(&self, event: ClockEvent) -> String {
        self.clock_time(event)
            .map(|t| t.format(CLOCK_TIME_FORMAT).to_string())
            .unwrap_or_default()
    }
}

/// The sum of one worker's day rows within one pay week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTotalRow {
    /// The week being totalled.
    pub week: PayWeek,
    /// Label of the week.
    pub label: String,
    /// The worker the total belongs to.
    pub worker_id: String,
    /// The worker's full name.
    pub worker_name: String,
    /// Number of day rows summed.
    pub days: usize,
    /// Summed net pay.
    pub net_pay: Decimal,
}

/// A row of the payroll sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayrollRow {
    /// A single worker's single day.
    Day(ComputedDayRow),
    /// A worker's total for one week.
    WeeklyTotal(WeeklyTotalRow),
}

impl PayrollRow {
    /// Returns the day row, if this is one.
    pub fn as_day(&self) -> Option<&ComputedDayRow> {
        match self {
            PayrollRow::Day(row) => Some(row),
            PayrollRow::WeeklyTotal(_) => None,
        }
    }

    /// Returns the weekly total row, if this is one.
    pub fn as_weekly_total(&self) -> Option<&WeeklyTotalRow> {
        match self {
            PayrollRow::WeeklyTotal(row) => Some(row),
            PayrollRow::Day(_) => None,
        }
    }
}
