//! Core data models for the payroll deduction engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod deduction;
mod employee;
mod pay_period;
mod payroll_record;

pub use calculation_result::{AuditStep, AuditTrace, PayrollOutcome};
pub use deduction::{Contribution, DeductionBreakdown};
pub use employee::{Employee, EmployeeId, EmployeeUpdate, EmploymentType, NewEmployee};
pub use pay_period::{MAX_PERIOD_YEAR, MIN_PERIOD_YEAR, PayPeriod};
pub use payroll_record::{
    HistoryFilter, NewPayrollRecord, PayrollKey, PayrollRecord, PayrollRecordId, UpsertStatus,
};
