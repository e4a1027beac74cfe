//! Pay week model.
//!
//! A [`PayWeek`] is a transient, inclusive grouping of work days produced by
//! the week partitioner and used to total a worker's pay.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Display format for the days in a week label.
const LABEL_DAY_FORMAT: &str = "%A, %d %B %Y";

/// One payroll week: an inclusive range of days, normally Monday to Friday.
///
/// Partial weeks occur at the edges of a requested range. The week ends at
/// the last second (23:59:59) of its final day.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::PayWeek;
/// use chrono::NaiveDate;
///
/// let week = PayWeek::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
/// );
///
/// assert!(week.contains_date(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()));
/// assert_eq!(week.end_instant().to_string(), "2024-01-05 23:59:59");
/// assert_eq!(
///     week.label(),
///     "Monday, 01 January 2024 - Friday, 05 January 2024"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayWeek {
    /// The first day of the week (inclusive).
    pub start: NaiveDate,
    /// The last day of the week (inclusive).
    pub end: NaiveDate,
}

impl PayWeek {
    /// Creates a week spanning `start` through `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The first moment of the week.
    pub fn start_instant(&self) -> NaiveDateTime {
        self.start
            .and_hms_opt(0, 0, 0)
            .expect("Valid start of day")
    }

    /// The last moment of the week, 23:59:59 on its final day.
    pub fn end_instant(&self) -> NaiveDateTime {
        self.end
            .and_hms_opt(23, 59, 59)
            .expect("Valid end of day")
    }

    /// Checks if a work day falls within this week (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Checks if an instant falls between the week's start and end instants.
    pub fn contains_instant(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start_instant() && instant <= self.end_instant()
    }

    /// Number of calendar days in the week.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Human-readable label such as "Monday, 01 January 2024 - Friday, 05 January 2024".
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format(LABEL_DAY_FORMAT),
            self.end.format(LABEL_DAY_FORMAT)
        )
    }
}
