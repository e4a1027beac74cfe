//! Attendance log model and clock events.
//!
//! An [`AttendanceLog`] is one worker's record for one work day. It is
//! created by a clock-in and filled in by later clock actions.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the four clock actions a worker performs during a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockEvent {
    /// Clocking in at the start of the day.
    StartWork,
    /// Leaving for the break.
    StartBreak,
    /// Returning from the break.
    EndBreak,
    /// Clocking out at the end of the day.
    EndWork,
}

impl ClockEvent {
    /// All events in the order they happen during a day.
    pub const ALL: [ClockEvent; 4] = [
        ClockEvent::StartWork,
        ClockEvent::StartBreak,
        ClockEvent::EndBreak,
        ClockEvent::EndWork,
    ];

    /// Returns true when arriving after the reference time is the
    /// penalized direction, false when leaving before it is.
    pub fn penalizes_lateness(self) -> bool {
        matches!(self, ClockEvent::StartWork | ClockEvent::StartBreak)
    }
}

impl std::fmt::Display for ClockEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClockEvent::StartWork => write!(f, "start work"),
            ClockEvent::StartBreak => write!(f, "start break"),
            ClockEvent::EndBreak => write!(f, "end break"),
            ClockEvent::EndWork => write!(f, "end work"),
        }
    }
}

/// One worker's attendance record for one work day.
///
/// Timestamps are expected in the order start-work, start-break, end-break,
/// end-work, but nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceLog {
    /// Unique identifier for the log.
    pub id: Uuid,
    /// The worker this log belongs to.
    pub worker_id: String,
    /// The work day the log was created for.
    pub work_date: NaiveDate,
    /// When the worker clocked in.
    #[serde(default)]
    pub start_work: Option<NaiveDateTime>,
    /// When the worker left for the break.
    #[serde(default)]
    pub start_break: Option<NaiveDateTime>,
    /// When the worker returned from the break.
    #[serde(default)]
    pub end_break: Option<NaiveDateTime>,
    /// When the worker clocked out.
    #[serde(default)]
    pub end_work: Option<NaiveDateTime>,
}

impl AttendanceLog {
    /// Creates the log a clock-in produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_payroll::models::{AttendanceLog, ClockEvent};
    /// use chrono::NaiveDateTime;
    ///
    /// let at = NaiveDateTime::parse_from_str("2024-01-02 07:58:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let log = AttendanceLog::clock_in("wrk_001", at);
    ///
    /// assert_eq!(log.work_date, at.date());
    /// assert_eq!(log.timestamp(ClockEvent::StartWork), Some(at));
    /// assert_eq!(log.timestamp(ClockEvent::EndWork), None);
    /// ```
    pub fn clock_in(worker_id: impl Into<String>, at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            worker_id: worker_id.into(),
            work_date: at.date(),
            start_work: Some(at),
            start_break: None,
            end_break: None,
            end_work: None,
        }
    }

    /// Returns the recorded timestamp for an event, if any.
    pub fn timestamp(&self, event: ClockEvent) -> Option<NaiveDateTime> {
        match event {
            ClockEvent::StartWork => self.start_work,
            ClockEvent::StartBreak => self.start_break,
            ClockEvent::EndBreak => self.end_break,
            ClockEvent::EndWork => self.end_work,
        }
    }

    /// Records a clock action, replacing any earlier value for that event.
    pub fn record(&mut self, event: ClockEvent, at: NaiveDateTime) {
        let slot = match event {
            ClockEvent::StartWork => &mut self.start_work,
            ClockEvent::StartBreak => &mut self.start_break,
            ClockEvent::EndBreak => &mut self.end_break,
            ClockEvent::EndWork => &mut self.end_work,
        };
        *slot = Some(at);
    }

    /// Applies a partial update; events absent from the update are kept.
    pub fn apply(&mut self, update: &LogUpdate) {
        for event in ClockEvent::ALL {
            if let Some(at) = update.timestamp(event) {
                self.record(event, at);
            }
        }
    }
}

/// A partial update of a log's clock timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogUpdate {
    /// New clock-in time.
    #[serde(default)]
    pub start_work: Option<NaiveDateTime>,
    /// New break start time.
    #[serde(default)]
    pub start_break: Option<NaiveDateTime>,
    /// New break end time.
    #[serde(default)]
    pub end_break: Option<NaiveDateTime>,
    /// New clock-out time.
    #[serde(default)]
    pub end_work: Option<NaiveDateTime>,
}

impl LogUpdate {
    fn timestamp(&self, event: ClockEvent) -> Option<NaiveDateTime> {
        match event {
            ClockEvent::StartWork => self.start_work,
            ClockEvent::StartBreak => self.start_break,
            ClockEvent::EndBreak => self.end_break,
            ClockEvent::EndWork => self.end_work,
        }
    }

    /// Returns true when the update carries no timestamp at all.
    pub fn is_empty(&self) -> bool {
        ClockEvent::ALL.iter().all(|e| self.timestamp(*e).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    #[test]
    fn test_clock_in_sets_only_start_work() {
        let at = make_datetime("2024-01-03", "08:02:00");
        let log = AttendanceLog::clock_in("wrk_001", at);

        assert_eq!(log.worker_id, "wrk_001");
        assert_eq!(log.work_date, at.date());
        assert_eq!(log.start_work, Some(at));
        assert!(log.start_break.is_none());
        assert!(log.end_break.is_none());
        assert!(log.end_work.is_none());
    }

    #[test]
    fn test_record_fills_each_event() {
        let mut log = AttendanceLog::clock_in("wrk_001", make_datetime("2024-01-03", "08:00:00"));

        log.record(ClockEvent::StartBreak, make_datetime("2024-01-03", "12:00:00"));
        log.record(ClockEvent::EndBreak, make_datetime("2024-01-03", "13:00:00"));
        log.record(ClockEvent::EndWork, make_datetime("2024-01-03", "17:00:00"));

        for event in ClockEvent::ALL {
            assert!(log.timestamp(event).is_some(), "{} missing", event);
        }
    }

    #[test]
    fn test_apply_keeps_fields_absent_from_update() {
        let start = make_datetime("2024-01-03", "08:00:00");
        let mut log = AttendanceLog::clock_in("wrk_001", start);

        let update = LogUpdate {
            end_work: Some(make_datetime("2024-01-03", "17:05:00")),
            ..LogUpdate::default()
        };
        log.apply(&update);

        assert_eq!(log.start_work, Some(start));
        assert_eq!(log.end_work, Some(make_datetime("2024-01-03", "17:05:00")));
        assert!(log.start_break.is_none());
    }

    #[test]
    fn test_empty_update() {
        assert!(LogUpdate::default().is_empty());
        let update = LogUpdate {
            start_break: Some(make_datetime("2024-01-03", "12:00:00")),
            ..LogUpdate::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_penalized_direction_per_event() {
        assert!(ClockEvent::StartWork.penalizes_lateness());
        assert!(ClockEvent::StartBreak.penalizes_lateness());
        assert!(!ClockEvent::EndBreak.penalizes_lateness());
        assert!(!ClockEvent::EndWork.penalizes_lateness());
    }

    #[test]
    fn test_deserialize_log_with_missing_timestamps() {
        let json = r#"{
            "id": "6f1c1a52-4a57-4f38-9f7c-6c2f0b0f4a11",
            "worker_id": "wrk_001",
            "work_date": "2024-01-03",
            "start_work": "2024-01-03T08:00:00"
        }"#;

        let log: AttendanceLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.start_work, Some(make_datetime("2024-01-03", "08:00:00")));
        assert!(log.end_work.is_none());
    }

    #[test]
    fn test_clock_event_serialization() {
        assert_eq!(
            serde_json::to_string(&ClockEvent::StartBreak).unwrap(),
            "\"start_break\""
        );
    }
}
