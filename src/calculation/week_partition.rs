//! Week partitioning logic.
//!
//! This module splits an inclusive date range into payroll weeks anchored
//! to a Monday-Friday work week. Partial weeks appear where the range
//! starts or ends mid-week.
//!
//! The partitioner is a small finite-state machine driven one day at a
//! time:
//!
//! ```text
//!                  Friday, not the last day
//!   ScanningWeek ───────────────────────────► WeekendSkip
//!     │      ▲                                    │
//!     │      └──────── next Monday <= date_to ────┤
//!     │ last day                                  │ next Monday > date_to
//!     ▼                                           ▼
//!   Closed ◄──────────────────────────────────────┘
//! ```
//!
//! A range of more than one day that starts on a Saturday or Sunday begins
//! in `WeekendSkip`, so it snaps forward to the following Monday. A
//! single-day range always yields exactly that day, weekend or not.

use std::iter::FusedIterator;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::PayWeek;

/// The state of the partitioner between two steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionState {
    /// Walking the days of an open week that began on `week_start`.
    ScanningWeek {
        /// First day of the open week.
        week_start: NaiveDate,
    },
    /// A week was closed on Friday (or the range began on a weekend) and the
    /// cursor must move to the next Monday.
    WeekendSkip,
    /// The last day of the range has been handled.
    Closed,
}

/// Lazily yields the [`PayWeek`]s of an inclusive date range.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::PayWeeks;
/// use chrono::NaiveDate;
///
/// // Wednesday 2024-01-03 through Tuesday 2024-01-09
/// let weeks: Vec<_> = PayWeeks::new(
///     NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
/// )
/// .unwrap()
/// .collect();
///
/// assert_eq!(weeks.len(), 2);
/// assert_eq!(weeks[0].start.to_string(), "2024-01-03");
/// assert_eq!(weeks[0].end.to_string(), "2024-01-05");
/// assert_eq!(weeks[1].start.to_string(), "2024-01-08");
/// assert_eq!(weeks[1].end.to_string(), "2024-01-09");
/// ```
#[derive(Debug, Clone)]
pub struct PayWeeks {
    cursor: NaiveDate,
    date_to: NaiveDate,
    state: PartitionState,
}

impl PayWeeks {
    /// Starts partitioning `[date_from, date_to]`.
    ///
    /// Returns [`EngineError::InvalidDateRange`] when `date_from` is after
    /// `date_to`.
    pub fn new(date_from: NaiveDate, date_to: NaiveDate) -> EngineResult<Self> {
        if date_from > date_to {
            return Err(EngineError::InvalidDateRange { date_from, date_to });
        }

        let state = if date_from == date_to || !is_weekend(date_from) {
            PartitionState::ScanningWeek {
                week_start: date_from,
            }
        } else {
            PartitionState::WeekendSkip
        };

        Ok(Self {
            cursor: date_from,
            date_to,
            state,
        })
    }

    /// The current state of the machine.
    pub fn state(&self) -> PartitionState {
        self.state
    }

    /// Advances the machine by one transition, returning a week if one closed.
    fn step(&mut self) -> Option<PayWeek> {
        match self.state {
            PartitionState::Closed => None,
            PartitionState::WeekendSkip => {
                match next_monday(self.cursor) {
                    Some(monday) if monday <= self.date_to => {
                        self.cursor = monday;
                        self.state = PartitionState::ScanningWeek { week_start: monday };
                    }
                    _ => self.state = PartitionState::Closed,
                }
                None
            }
            PartitionState::ScanningWeek { week_start } => {
                let day = self.cursor;

                if day == self.date_to {
                    self.state = PartitionState::Closed;
                    return Some(PayWeek::new(week_start, day));
                }

                if day.weekday() == Weekday::Fri {
                    match day.succ_opt() {
                        Some(saturday) => {
                            self.cursor = saturday;
                            self.state = PartitionState::WeekendSkip;
                        }
                        None => self.state = PartitionState::Closed,
                    }
                    return Some(PayWeek::new(week_start, day));
                }

                match day.succ_opt() {
                    Some(next) => self.cursor = next,
                    None => self.state = PartitionState::Closed,
                }
                None
            }
        }
    }
}

impl Iterator for PayWeeks {
    type Item = PayWeek;

    fn next(&mut self) -> Option<PayWeek> {
        while self.state != PartitionState::Closed {
            if let Some(week) = self.step() {
                return Some(week);
            }
        }
        None
    }
}

impl FusedIterator for PayWeeks {}

/// Partitions an inclusive date range into pay weeks.
///
/// # Arguments
///
/// * `date_from` - First day of the range (inclusive)
/// * `date_to` - Last day of the range (inclusive)
///
/// # Returns
///
/// The weeks in ascending order, or [`EngineError::InvalidDateRange`] when
/// `date_from` is after `date_to`. Weeks never overlap and every weekday in
/// the range belongs to exactly one of them.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::partition_weeks;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
///
/// let weeks = partition_weeks(monday, friday).unwrap();
/// assert_eq!(weeks.len(), 1);
/// assert_eq!((weeks[0].start, weeks[0].end), (monday, friday));
/// ```
pub fn partition_weeks(date_from: NaiveDate, date_to: NaiveDate) -> EngineResult<Vec<PayWeek>> {
    Ok(PayWeeks::new(date_from, date_to)?.collect())
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The Monday on or after `date`.
fn next_monday(date: NaiveDate) -> Option<NaiveDate> {
    let offset = (7 - date.weekday().num_days_from_monday()) % 7;
    date.checked_add_days(Days::new(u64::from(offset)))
}
