//! In-memory implementation of the persistence contracts.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, PoisonError, RwLock};

use chrono::Utc;
use tracing::debug;

use super::{EmployeeDirectory, EmployeeRepository, PayrollStore};
use crate::calculation::round_money;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Employee, EmployeeId, EmployeeUpdate, HistoryFilter, NewEmployee, NewPayrollRecord,
    PayrollKey, PayrollRecord, PayrollRecordId, UpsertStatus,
};

#[derive(Debug, Default)]
struct EmployeeTable {
    last_id: EmployeeId,
    rows: BTreeMap<EmployeeId, Employee>,
}

impl EmployeeTable {
    fn email_taken(&self, email: &str, except: Option<EmployeeId>) -> bool {
        self.rows
            .values()
            .any(|e| Some(e.id) != except && e.email.eq_ignore_ascii_case(email))
    }
}

#[derive(Debug, Default)]
struct PayrollTable {
    last_id: PayrollRecordId,
    rows: BTreeMap<PayrollRecordId, PayrollRecord>,
    by_key: HashMap<PayrollKey, PayrollRecordId>,
}

/// Thread-safe store holding employees and payroll records in memory.
///
/// Each table sits behind its own lock; a payroll upsert holds the payroll
/// lock for the whole lookup-and-write, so writes to one key are serialized.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    employees: RwLock<EmployeeTable>,
    payroll: Mutex<PayrollTable>,
}

fn poisoned<T>(_: PoisonError<T>) -> EngineError {
    EngineError::Storage {
        message: "store lock poisoned by a panicked writer".to_string(),
    }
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeDirectory for InMemoryStore {
    fn find_active_employee(&self, id: EmployeeId) -> EngineResult<Option<Employee>> {
        let table = self.employees.read().map_err(poisoned)?;
        Ok(table.rows.get(&id).filter(|e| e.is_active).cloned())
    }
}

impl EmployeeRepository for InMemoryStore {
    fn list_active_employees(&self) -> EngineResult<Vec<Employee>> {
        let table = self.employees.read().map_err(poisoned)?;
        let mut employees: Vec<Employee> =
            table.rows.values().filter(|e| e.is_active).cloned().collect();
        employees.sort_by(|a, b| {
            (&a.last_name, &a.first_name, a.id).cmp(&(&b.last_name, &b.first_name, b.id))
        });
        Ok(employees)
    }

    fn get_employee(&self, id: EmployeeId) -> EngineResult<Option<Employee>> {
        let table = self.employees.read().map_err(poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    fn create_employee(&self, new_employee: NewEmployee) -> EngineResult<Employee> {
        new_employee.validate()?;

        let mut table = self.employees.write().map_err(poisoned)?;
        if table.email_taken(&new_employee.email, None) {
            return Err(EngineError::validation(
                "email",
                format!("an employee with email '{}' already exists", new_employee.email),
            ));
        }

        table.last_id += 1;
        let now = Utc::now();
        let employee = Employee {
            id: table.last_id,
            first_name: new_employee.first_name,
            last_name: new_employee.last_name,
            email: new_employee.email,
            position: new_employee.position,
            department: new_employee.department,
            employment_type: new_employee.employment_type,
            monthly_salary: round_money(new_employee.monthly_salary),
            date_hired: new_employee.date_hired,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(employee.id, employee.clone());

        debug!(employee_id = employee.id, "Employee created");
        Ok(employee)
    }

    fn update_employee(&self, id: EmployeeId, update: EmployeeUpdate) -> EngineResult<Employee> {
        update.validate()?;

        let mut table = self.employees.write().map_err(poisoned)?;
        if let Some(email) = &update.email {
            if table.email_taken(email, Some(id)) {
                return Err(EngineError::validation(
                    "email",
                    format!("an employee with email '{}' already exists", email),
                ));
            }
        }

        let employee = table.rows.get_mut(&id).ok_or(EngineError::NotFound {
            entity: "Employee",
            id,
        })?;
        update.apply_to(employee);
        employee.updated_at = Utc::now();

        debug!(employee_id = id, "Employee updated");
        Ok(employee.clone())
    }

    fn deactivate_employee(&self, id: EmployeeId) -> EngineResult<()> {
        let mut table = self.employees.write().map_err(poisoned)?;
        let employee = table.rows.get_mut(&id).ok_or(EngineError::NotFound {
            entity: "Employee",
            id,
        })?;
        employee.is_active = false;
        employee.updated_at = Utc::now();

        debug!(employee_id = id, "Employee deactivated");
        Ok(())
    }
}

impl PayrollStore for InMemoryStore {
    fn upsert(
        &self,
        key: PayrollKey,
        record: NewPayrollRecord,
    ) -> EngineResult<(PayrollRecord, UpsertStatus)> {
        let mut table = self.payroll.lock().map_err(poisoned)?;

        let existing = table.by_key.get(&key).copied();
        let (id, status) = match existing {
            Some(id) => (id, UpsertStatus::Updated),
            None => {
                table.last_id += 1;
                let id = table.last_id;
                table.by_key.insert(key, id);
                (id, UpsertStatus::Created)
            }
        };

        let stored = PayrollRecord::from_draft(id, key, record);
        table.rows.insert(id, stored.clone());

        debug!(
            record_id = id,
            employee_id = key.employee_id,
            period = %key.period,
            ?status,
            "Payroll record upserted"
        );
        Ok((stored, status))
    }

    fn find_record(&self, id: PayrollRecordId) -> EngineResult<Option<PayrollRecord>> {
        let table = self.payroll.lock().map_err(poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    fn list_records(&self, filter: &HistoryFilter) -> EngineResult<Vec<PayrollRecord>> {
        let table = self.payroll.lock().map_err(poisoned)?;
        let mut records: Vec<PayrollRecord> = table
            .rows
            .values()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        records.sort_by(|a, b| {
            (b.period(), b.calculated_at, b.id).cmp(&(a.period(), a.calculated_at, a.id))
        });
        Ok(records)
    }

    fn delete_record(&self, id: PayrollRecordId) -> EngineResult<bool> {
        let mut table = self.payroll.lock().map_err(poisoned)?;
        match table.rows.remove(&id) {
            Some(record) => {
                table.by_key.remove(&record.key());
                debug!(record_id = id, "Payroll record deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
