//! Persistence contracts for employees and payroll records.
//!
//! The calculation engine only depends on [`EmployeeDirectory`] and
//! [`PayrollStore`]. [`InMemoryStore`] implements every contract and backs the
//! HTTP service.

mod memory;

pub use memory::InMemoryStore;

use crate::error::EngineResult;
use crate::models::{
    Employee, EmployeeId, EmployeeUpdate, HistoryFilter, NewEmployee, NewPayrollRecord,
    PayrollKey, PayrollRecord, PayrollRecordId, UpsertStatus,
};

/// Read access to the employees payroll can be computed for.
pub trait EmployeeDirectory: Send + Sync {
    /// Returns the employee if it exists and is active.
    fn find_active_employee(&self, id: EmployeeId) -> EngineResult<Option<Employee>>;
}

/// Full employee management on top of [`EmployeeDirectory`].
pub trait EmployeeRepository: EmployeeDirectory {
    /// Active employees ordered by last name, then first name.
    fn list_active_employees(&self) -> EngineResult<Vec<Employee>>;

    /// Returns the employee regardless of status.
    fn get_employee(&self, id: EmployeeId) -> EngineResult<Option<Employee>>;

    /// Registers a new employee, rejecting a duplicate email.
    fn create_employee(&self, new_employee: NewEmployee) -> EngineResult<Employee>;

    /// Applies a partial update, rejecting a duplicate email.
    fn update_employee(&self, id: EmployeeId, update: EmployeeUpdate) -> EngineResult<Employee>;

    /// Marks the employee inactive. Payroll history is kept.
    fn deactivate_employee(&self, id: EmployeeId) -> EngineResult<()>;
}

/// Storage for computed payroll records, keyed by employee and period.
///
/// `upsert` must be atomic per key: concurrent writers for the same key see
/// last-writer-wins, never a merged record.
pub trait PayrollStore: Send + Sync {
    /// Creates the record for `key`, or replaces every field of the existing one.
    fn upsert(
        &self,
        key: PayrollKey,
        record: NewPayrollRecord,
    ) -> EngineResult<(PayrollRecord, UpsertStatus)>;

    /// Returns the record with the given id.
    fn find_record(&self, id: PayrollRecordId) -> EngineResult<Option<PayrollRecord>>;

    /// Records matching `filter`, newest period first.
    fn list_records(&self, filter: &HistoryFilter) -> EngineResult<Vec<PayrollRecord>>;

    /// Deletes the record, returning false if it did not exist.
    fn delete_record(&self, id: PayrollRecordId) -> EngineResult<bool>;
}
