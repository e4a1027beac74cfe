//! Configuration types for payroll reconciliation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML schedule file.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::ClockEvent;

/// Penalty charged per squared minute of deviation in the standard schedule.
pub const DEFAULT_PENALTY_RATE: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// The reference work day every clock event is measured against.
///
/// # Example
///
/// ```
/// use attendance_payroll::config::WorkDayTemplate;
/// use attendance_payroll::models::ClockEvent;
/// use chrono::NaiveTime;
///
/// let template = WorkDayTemplate::default();
/// assert_eq!(
///     template.reference_time(ClockEvent::EndBreak),
///     NaiveTime::from_hms_opt(13, 0, 0).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDayTemplate {
    /// Expected clock-in time.
    pub start_work: NaiveTime,
    /// Expected start of the break.
    pub start_break: NaiveTime,
    /// Expected end of the break.
    pub end_break: NaiveTime,
    /// Expected clock-out time.
    pub end_work: NaiveTime,
}

impl Default for WorkDayTemplate {
    fn default() -> Self {
        Self {
            start_work: hms(8, 0, 0),
            start_break: hms(12, 0, 0),
            end_break: hms(13, 0, 0),
            end_work: hms(17, 0, 0),
        }
    }
}

impl WorkDayTemplate {
    /// Returns the reference time for a clock event.
    pub fn reference_time(&self, event: ClockEvent) -> NaiveTime {
        match event {
            ClockEvent::StartWork => self.start_work,
            ClockEvent::StartBreak => self.start_break,
            ClockEvent::EndBreak => self.end_break,
            ClockEvent::EndWork => self.end_work,
        }
    }

    /// Checks that the four reference times are in chronological order.
    pub fn validate(&self) -> EngineResult<()> {
        let ordered = self.start_work <= self.start_break
            && self.start_break <= self.end_break
            && self.end_break <= self.end_work;

        if ordered {
            Ok(())
        } else {
            Err(EngineError::InvalidConfig {
                message: format!(
                    "work day template must be ordered, got {} / {} / {} / {}",
                    self.start_work, self.start_break, self.end_break, self.end_work
                ),
            })
        }
    }
}

/// How deviations from the template are turned into money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyPolicy {
    /// Amount charged per squared minute of deviation for each event.
    pub rate_per_squared_minute: Decimal,
}

impl Default for PenaltyPolicy {
    fn default() -> Self {
        Self {
            rate_per_squared_minute: DEFAULT_PENALTY_RATE,
        }
    }
}

/// The complete payroll configuration loaded from `schedule.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// Human-readable name of the schedule.
    pub name: String,
    /// The reference work day.
    pub template: WorkDayTemplate,
    /// The lateness penalty policy.
    pub penalty: PenaltyPolicy,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            name: "Standard work day".to_string(),
            template: WorkDayTemplate::default(),
            penalty: PenaltyPolicy::default(),
        }
    }
}

fn hms(hour: u32, minute: u32, second: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, second).unwrap_or(NaiveTime::MIN)
}
