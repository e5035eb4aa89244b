//! Stored payroll records.
//!
//! A [`PayrollRecord`] is a [`DeductionBreakdown`] persisted for one employee
//! and one [`PayPeriod`]. At most one record exists per [`PayrollKey`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DeductionBreakdown, EmployeeId, PayPeriod};

/// Identifier assigned to a payroll record by the store.
pub type PayrollRecordId = u64;

/// The identity a payroll record is upserted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PayrollKey {
    /// The employee the record belongs to.
    pub employee_id: EmployeeId,
    /// The month the record covers.
    pub period: PayPeriod,
}

impl PayrollKey {
    /// Creates a key for an employee and period.
    pub fn new(employee_id: EmployeeId, period: PayPeriod) -> Self {
        Self {
            employee_id,
            period,
        }
    }
}

/// Whether an upsert inserted a new record or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertStatus {
    /// No record existed for the key.
    Created,
    /// An existing record for the key was overwritten.
    Updated,
}

/// Everything the store needs to write a record; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayrollRecord {
    /// Employee name at the time of calculation.
    pub employee_name: String,
    /// The salary the deductions were computed on.
    pub basic_salary: Decimal,
    /// The computed deductions.
    pub breakdown: DeductionBreakdown,
    /// When the deductions were computed.
    pub calculated_at: DateTime<Utc>,
}

/// A persisted payroll calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollRecord {
    /// Unique identifier for the record.
    pub id: PayrollRecordId,
    /// The employee the record belongs to.
    pub employee_id: EmployeeId,
    /// Employee name at the time of calculation.
    pub employee_name: String,
    /// Month of the pay period (1-12).
    pub period_month: u32,
    /// Year of the pay period.
    pub period_year: i32,
    /// The salary the deductions were computed on.
    pub basic_salary: Decimal,
    /// The computed deductions, serialized as top-level fields.
    #[serde(flatten)]
    pub breakdown: DeductionBreakdown,
    /// When the deductions were computed.
    pub calculated_at: DateTime<Utc>,
}

impl PayrollRecord {
    /// Builds a record from a draft written under `key`.
    pub fn from_draft(id: PayrollRecordId, key: PayrollKey, draft: NewPayrollRecord) -> Self {
        Self {
            id,
            employee_id: key.employee_id,
            employee_name: draft.employee_name,
            period_month: key.period.month,
            period_year: key.period.year,
            basic_salary: draft.basic_salary,
            breakdown: draft.breakdown,
            calculated_at: draft.calculated_at,
        }
    }

    /// The period this record covers.
    pub fn period(&self) -> PayPeriod {
        PayPeriod {
            year: self.period_year,
            month: self.period_month,
        }
    }

    /// The key this record is stored under.
    pub fn key(&self) -> PayrollKey {
        PayrollKey::new(self.employee_id, self.period())
    }
}

/// Filters for listing payroll history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct HistoryFilter {
    /// Only records for this employee.
    pub employee_id: Option<EmployeeId>,
    /// Only records in this period year.
    pub year: Option<i32>,
}

impl HistoryFilter {
    /// Returns true if `record` passes every present filter.
    pub fn matches(&self, record: &PayrollRecord) -> bool {
        self.employee_id.is_none_or(|id| record.employee_id == id)
            && self.year.is_none_or(|year| record.period_year == year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Contribution;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_record(employee_id: EmployeeId, month: u32, year: i32) -> PayrollRecord {
        let breakdown = DeductionBreakdown::new(
            dec("4000"),
            Contribution::new(dec("180.00"), dec("380.00")),
            Contribution::new(dec("250.00"), dec("250.00")),
            Contribution::new(dec("80.00"), dec("80.00")),
            dec("0.00"),
        );
        let key = PayrollKey::new(employee_id, PayPeriod::new(month, year).unwrap());
        PayrollRecord::from_draft(
            9,
            key,
            NewPayrollRecord {
                employee_name: "Ana Reyes".to_string(),
                basic_salary: dec("4000"),
                breakdown,
                calculated_at: Utc::now(),
            },
        )
    }

    #[test]
    fn test_record_key_round_trips_period() {
        let record = create_test_record(3, 7, 2025);
        assert_eq!(record.key(), PayrollKey::new(3, PayPeriod::new(7, 2025).unwrap()));
        assert_eq!(record.period_month, 7);
        assert_eq!(record.period_year, 2025);
    }

    #[test]
    fn test_record_serializes_breakdown_at_top_level() {
        let json = serde_json::to_value(create_test_record(3, 7, 2025)).unwrap();
        assert_eq!(json["id"], 9);
        assert_eq!(json["employee_name"], "Ana Reyes");
        assert_eq!(json["pagibig_employee"], "80.00");
        assert_eq!(json["net_pay"], "3490.00");
        assert!(json.get("breakdown").is_none());
    }

    #[test]
    fn test_upsert_status_serialization() {
        assert_eq!(
            serde_json::to_string(&UpsertStatus::Created).unwrap(),
            "\"created\""
        );
        assert_eq!(
            serde_json::to_string(&UpsertStatus::Updated).unwrap(),
            "\"updated\""
        );
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let record = create_test_record(3, 7, 2025);
        assert!(HistoryFilter::default().matches(&record));
    }

    #[test]
    fn test_filter_by_employee_and_year() {
        let record = create_test_record(3, 7, 2025);
        let filter = HistoryFilter {
            employee_id: Some(3),
            year: Some(2025),
        };
        assert!(filter.matches(&record));

        let other_year = HistoryFilter {
            year: Some(2024),
            ..filter
        };
        assert!(!other_year.matches(&record));

        let other_employee = HistoryFilter {
            employee_id: Some(4),
            ..filter
        };
        assert!(!other_employee.matches(&record));
    }
}
