//! Request types for the payroll API.
//!
//! Salary amounts arrive as raw JSON values and are parsed here, so a
//! non-numeric salary is reported as invalid input rather than as a
//! malformed body.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::calculation::PayrollRequest;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeId, HistoryFilter};

/// Parses a salary given as a JSON number or numeric string.
pub fn parse_amount(field: &str, value: &Value) -> EngineResult<Decimal> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_string(),
        other => {
            return Err(EngineError::invalid_input(
                field,
                format!("expected a decimal amount, found {}", other),
            ));
        }
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| EngineError::invalid_input(field, format!("'{}' is not a decimal amount", text)))
}

/// Request body for `POST /api/calculate-payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatePayrollRequest {
    /// The employee to compute payroll for.
    pub employee_id: EmployeeId,
    /// Month of the pay period (1-12).
    pub period_month: u32,
    /// Year of the pay period.
    pub period_year: i32,
    /// Optional salary replacing the stored monthly salary, unparsed.
    #[serde(default)]
    pub override_salary: Option<Value>,
}

impl TryFrom<CalculatePayrollRequest> for PayrollRequest {
    type Error = EngineError;

    fn try_from(req: CalculatePayrollRequest) -> EngineResult<Self> {
        let override_salary = req
            .override_salary
            .as_ref()
            .map(|raw| parse_amount("override_salary", raw))
            .transpose()?;

        Ok(PayrollRequest {
            employee_id: req.employee_id,
            period_month: req.period_month,
            period_year: req.period_year,
            override_salary,
        })
    }
}

/// Query string for `GET /api/payroll-history`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HistoryQuery {
    /// Only records for this employee.
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
    /// Only records for this period year.
    #[serde(default)]
    pub year: Option<i32>,
}

impl From<HistoryQuery> for HistoryFilter {
    fn from(query: HistoryQuery) -> Self {
        HistoryFilter {
            employee_id: query.employee_id,
            year: query.year,
        }
    }
}
