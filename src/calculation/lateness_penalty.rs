//! Lateness penalty calculation.
//!
//! Each of the four clock events of a day is compared with the reference
//! work-day template. Only the direction that hurts the employer is
//! penalized: arriving late (start-work, start-break) and leaving early
//! (end-break, end-work). A deviation of `m` whole minutes, rounded up,
//! costs `rate x m²`.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::config::{PenaltyPolicy, WorkDayTemplate};
use crate::models::{AttendanceLog, ClockEvent, PenaltyMinutes};

const MILLIS_PER_MINUTE: i64 = 60_000;

/// The result of evaluating one day's clock events against the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatenessPenaltyResult {
    /// Penalized minutes per event.
    pub minutes: PenaltyMinutes,
    /// Total penalty for the day.
    pub penalty: Decimal,
}

/// Returns the penalized deviation of one event in whole minutes.
///
/// The deviation in the penalized direction is rounded up to the next whole
/// minute, so a single second late counts as one minute. A deviation in the
/// protective direction (early start, late return from break, working past
/// the end of the day) counts as zero.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::penalized_minutes;
/// use attendance_payroll::models::ClockEvent;
/// use chrono::NaiveTime;
///
/// let reference = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
/// let late = NaiveTime::from_hms_opt(8, 4, 10).unwrap();
/// let early = NaiveTime::from_hms_opt(7, 45, 0).unwrap();
///
/// assert_eq!(penalized_minutes(ClockEvent::StartWork, late, reference), 5);
/// assert_eq!(penalized_minutes(ClockEvent::StartWork, early, reference), 0);
/// ```
pub fn penalized_minutes(event: ClockEvent, observed: NaiveTime, reference: NaiveTime) -> i64 {
    let deviation = if event.penalizes_lateness() {
        observed.signed_duration_since(reference)
    } else {
        reference.signed_duration_since(observed)
    };

    let millis = deviation.num_milliseconds();
    if millis <= 0 {
        0
    } else {
        (millis + MILLIS_PER_MINUTE - 1) / MILLIS_PER_MINUTE
    }
}

/// Calculates the lateness penalty for one attendance log.
///
/// A missing timestamp is evaluated as midnight (00:00:00). For the
/// start events that is never late, but a missing end-break or end-work
/// counts as leaving 13 or 17 hours early and yields a very large penalty.
///
/// # Arguments
///
/// * `log` - The attendance log to evaluate
/// * `template` - The reference work day
/// * `policy` - The penalty rate
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::calculate_lateness_penalty;
/// use attendance_payroll::config::{PenaltyPolicy, WorkDayTemplate};
/// use attendance_payroll::models::{AttendanceLog, ClockEvent};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let at = |t: &str| NaiveDateTime::parse_from_str(&format!("2024-01-02 {}", t), "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let mut log = AttendanceLog::clock_in("wrk_001", at("08:05:00"));
/// log.record(ClockEvent::StartBreak, at("12:00:00"));
/// log.record(ClockEvent::EndBreak, at("13:00:00"));
/// log.record(ClockEvent::EndWork, at("17:00:00"));
///
/// let result = calculate_lateness_penalty(&log, &WorkDayTemplate::default(), &PenaltyPolicy::default());
/// assert_eq!(result.minutes.start_work, 5);
/// assert_eq!(result.penalty, Decimal::new(25_000, 0));
/// ```
pub fn calculate_lateness_penalty(
    log: &AttendanceLog,
    template: &WorkDayTemplate,
    policy: &PenaltyPolicy,
) -> LatenessPenaltyResult {
    let mut minutes = PenaltyMinutes::default();
    let mut penalty = Decimal::ZERO;

    for event in ClockEvent::ALL {
        let observed = log
            .timestamp(event)
            .map(|at| at.time())
            .unwrap_or(NaiveTime::MIN);
        let event_minutes = penalized_minutes(event, observed, template.reference_time(event));

        minutes.set(event, event_minutes);
        penalty += policy.rate_per_squared_minute * Decimal::from(event_minutes * event_minutes);
    }

    LatenessPenaltyResult { minutes, penalty }
}
