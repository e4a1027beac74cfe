//! Payroll sheet and report models.
//!
//! [`PayrollSheet`] is what the reconciliation core produces for a date
//! range. [`PayrollReport`] wraps a sheet with the identifying metadata
//! returned to API callers.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayWeek, PayrollRow};

/// The weeks of a date range and the payroll rows computed over them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSheet {
    /// Pay weeks in ascending order.
    pub weeks: Vec<PayWeek>,
    /// Day rows and weekly totals in sheet order.
    pub rows: Vec<PayrollRow>,
}

impl PayrollSheet {
    /// Sum of every weekly total on the sheet.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_payroll::models::PayrollSheet;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(PayrollSheet::default().grand_total(), Decimal::ZERO);
    /// ```
    pub fn grand_total(&self) -> Decimal {
        self.rows
            .iter()
            .filter_map(PayrollRow::as_weekly_total)
            .map(|total| total.net_pay)
            .sum()
    }

    /// Number of day rows on the sheet.
    pub fn day_count(&self) -> usize {
        self.rows.iter().filter(|r| r.as_day().is_some()).count()
    }
}

/// The complete result of a payroll reconciliation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the report was generated.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// First requested day (inclusive).
    pub date_from: NaiveDate,
    /// Last requested day (inclusive).
    pub date_to: NaiveDate,
    /// Pay weeks in ascending order.
    pub weeks: Vec<PayWeek>,
    /// Day rows and weekly totals in sheet order.
    pub rows: Vec<PayrollRow>,
    /// Net pay summed over every worker and week.
    pub grand_total: Decimal,
}

impl PayrollReport {
    /// Wraps a computed sheet with a fresh calculation id and timestamp.
    pub fn new(date_from: NaiveDate, date_to: NaiveDate, sheet: PayrollSheet) -> Self {
        let grand_total = sheet.grand_total();
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            date_from,
            date_to,
            weeks: sheet.weeks,
            rows: sheet.rows,
            grand_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeeklyTotalRow;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn weekly_total(worker_id: &str, net_pay: i64) -> PayrollRow {
        PayrollRow::WeeklyTotal(WeeklyTotalRow {
            week: PayWeek::new(make_date("2024-01-01"), make_date("2024-01-05")),
            label: "week 1".to_string(),
            worker_id: worker_id.to_string(),
            worker_name: worker_id.to_string(),
            days: 5,
            net_pay: Decimal::new(net_pay, 0),
        })
    }

    #[test]
    fn test_grand_total_sums_weekly_totals() {
        let sheet = PayrollSheet {
            weeks: vec![PayWeek::new(make_date("2024-01-01"), make_date("2024-01-05"))],
            rows: vec![weekly_total("a", 500_000), weekly_total("b", -20_000)],
        };
        assert_eq!(sheet.grand_total(), Decimal::new(480_000, 0));
        assert_eq!(sheet.day_count(), 0);
    }

    #[test]
    fn test_report_carries_sheet_and_metadata() {
        let sheet = PayrollSheet {
            weeks: vec![PayWeek::new(make_date("2024-01-01"), make_date("2024-01-05"))],
            rows: vec![weekly_total("a", 500_000)],
        };
        let report = PayrollReport::new(make_date("2024-01-01"), make_date("2024-01-05"), sheet);

        assert_eq!(report.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(report.weeks.len(), 1);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.grand_total, Decimal::new(500_000, 0));
    }

    #[test]
    fn test_reports_get_distinct_ids() {
        let a = PayrollReport::new(
            make_date("2024-01-01"),
            make_date("2024-01-01"),
            PayrollSheet::default(),
        );
        let b = PayrollReport::new(
            make_date("2024-01-01"),
            make_date("2024-01-01"),
            PayrollSheet::default(),
        );
        assert_ne!(a.calculation_id, b.calculation_id);
    }
}
