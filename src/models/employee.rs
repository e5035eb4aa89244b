//! Employee model and related types.
//!
//! This module defines the Employee struct, the EmploymentType enum, and the
//! payloads used to create and partially update employees in the directory.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{money_precision_violation, round_money};
use crate::error::{EngineError, EngineResult};

/// Identifier assigned to an employee by the directory.
pub type EmployeeId = u64;

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Regular (permanent) employment.
    #[default]
    Regular,
    /// Fixed-term contractual employment.
    Contractual,
    /// Probationary employment prior to regularization.
    Probationary,
}

/// An employee whose salary is subject to statutory deductions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: EmployeeId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Work email, unique across the directory.
    pub email: String,
    /// Job title.
    pub position: String,
    /// Department name.
    pub department: String,
    /// The type of employment arrangement.
    pub employment_type: EmploymentType,
    /// The stored monthly basic salary.
    pub monthly_salary: Decimal,
    /// The date the employee was hired.
    pub date_hired: NaiveDate,
    /// Inactive employees are kept for history but cannot be paid.
    pub is_active: bool,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Returns "first last".
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, EmploymentType};
    /// use chrono::{NaiveDate, Utc};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: 1,
    ///     first_name: "Juan".to_string(),
    ///     last_name: "Dela Cruz".to_string(),
    ///     email: "juan@example.com".to_string(),
    ///     position: "Developer".to_string(),
    ///     department: "Engineering".to_string(),
    ///     employment_type: EmploymentType::Regular,
    ///     monthly_salary: Decimal::from(50000),
    ///     date_hired: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    ///     is_active: true,
    ///     created_at: Utc::now(),
    ///     updated_at: Utc::now(),
    /// };
    /// assert_eq!(employee.full_name(), "Juan Dela Cruz");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields required to register a new employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Work email.
    pub email: String,
    /// Job title.
    pub position: String,
    /// Department name.
    pub department: String,
    /// Defaults to regular employment.
    #[serde(default)]
    pub employment_type: EmploymentType,
    /// The monthly basic salary.
    pub monthly_salary: Decimal,
    /// The date the employee was hired.
    pub date_hired: NaiveDate,
}

impl NewEmployee {
    /// Checks every field, returning the first violation found.
    pub fn validate(&self) -> EngineResult<()> {
        validate_name("first_name", &self.first_name)?;
        validate_name("last_name", &self.last_name)?;
        validate_email(&self.email)?;
        validate_name("position", &self.position)?;
        validate_name("department", &self.department)?;
        validate_salary(self.monthly_salary)
    }
}

/// A partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeUpdate {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New work email.
    pub email: Option<String>,
    /// New job title.
    pub position: Option<String>,
    /// New department.
    pub department: Option<String>,
    /// New employment type.
    pub employment_type: Option<EmploymentType>,
    /// New monthly basic salary.
    pub monthly_salary: Option<Decimal>,
    /// Corrected hire date.
    pub date_hired: Option<NaiveDate>,
    /// Reactivates or deactivates the employee.
    pub is_active: Option<bool>,
}

impl EmployeeUpdate {
    /// Checks the fields that are present.
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(first_name) = &self.first_name {
            validate_name("first_name", first_name)?;
        }
        if let Some(last_name) = &self.last_name {
            validate_name("last_name", last_name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(position) = &self.position {
            validate_name("position", position)?;
        }
        if let Some(department) = &self.department {
            validate_name("department", department)?;
        }
        if let Some(salary) = self.monthly_salary {
            validate_salary(salary)?;
        }
        Ok(())
    }

    /// Writes the present fields onto `employee`.
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(first_name) = self.first_name {
            employee.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            employee.last_name = last_name;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if let Some(position) = self.position {
            employee.position = position;
        }
        if let Some(department) = self.department {
            employee.department = department;
        }
        if let Some(employment_type) = self.employment_type {
            employee.employment_type = employment_type;
        }
        if let Some(salary) = self.monthly_salary {
            employee.monthly_salary = round_money(salary);
        }
        if let Some(date_hired) = self.date_hired {
            employee.date_hired = date_hired;
        }
        if let Some(is_active) = self.is_active {
            employee.is_active = is_active;
        }
    }
}

fn validate_name(field: &str, value: &str) -> EngineResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::validation(field, "may not be blank"));
    }
    if trimmed.chars().count() > 100 {
        return Err(EngineError::validation(
            field,
            "may not be longer than 100 characters",
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> EngineResult<()> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(EngineError::validation(
            "email",
            format!("'{}' is not a valid email address", email),
        ));
    }
    Ok(())
}

fn validate_salary(salary: Decimal) -> EngineResult<()> {
    if salary.is_sign_negative() && !salary.is_zero() {
        return Err(EngineError::validation(
            "monthly_salary",
            "may not be negative",
        ));
    }
    if let Some(message) = money_precision_violation(salary) {
        return Err(EngineError::validation("monthly_salary", message));
    }
    Ok(())
}
