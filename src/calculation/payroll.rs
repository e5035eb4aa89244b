//! Payroll orchestration.
//!
//! This module runs the four statutory calculators against a salary basis,
//! derives total deductions and net pay, and upserts the result for an
//! employee and pay period.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use super::income_tax::{
    INCOME_TAX_LEGAL_BASIS, annualize, calculate_annual_income_tax,
    calculate_monthly_withholding_tax, find_tax_bracket,
};
use super::money::{money_precision_violation, round_money};
use super::pagibig::{PAGIBIG_LEGAL_BASIS, calculate_pagibig, pagibig_max_contribution};
use super::philhealth::{PHILHEALTH_LEGAL_BASIS, calculate_philhealth, philhealth_premium_base};
use super::sss::{SSS_LEGAL_BASIS, calculate_sss, monthly_salary_credit};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, DeductionBreakdown, EmployeeId, NewPayrollRecord, PayPeriod,
    PayrollKey, PayrollOutcome,
};
use crate::store::{EmployeeDirectory, PayrollStore};

/// A request to compute and store payroll for one employee and period.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollRequest {
    /// The employee to compute payroll for.
    pub employee_id: EmployeeId,
    /// Month of the pay period (1-12).
    pub period_month: u32,
    /// Year of the pay period.
    pub period_year: i32,
    /// Salary to use instead of the employee's stored monthly salary.
    pub override_salary: Option<Decimal>,
}

/// Computes the full deduction breakdown for a salary basis.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_breakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = compute_breakdown(Decimal::from(25000));
/// assert_eq!(breakdown.total_deductions(), Decimal::from_str("2350.00").unwrap());
/// assert_eq!(breakdown.net_pay(), Decimal::from_str("22650.00").unwrap());
/// ```
pub fn compute_breakdown(salary_basis: Decimal) -> DeductionBreakdown {
    DeductionBreakdown::new(
        salary_basis,
        calculate_sss(salary_basis),
        calculate_philhealth(salary_basis),
        calculate_pagibig(salary_basis),
        calculate_monthly_withholding_tax(salary_basis),
    )
}

/// Calculates payroll for an employee and period and upserts the record.
///
/// The period is validated first, then the override salary, then the
/// employee is looked up. The salary basis is the override when one is
/// given and non-zero, otherwise the stored monthly salary. It is stored
/// with exactly two decimal places.
///
/// # Errors
///
/// - `ValidationError` if the month or year is out of range
/// - `InvalidInput` if the override salary has more than two decimal places
///   or more than twelve digits
/// - `NotFound` if the employee does not exist or is inactive
/// - `Storage` if the directory or store fails
pub fn calculate_payroll<D, S>(
    directory: &D,
    store: &S,
    request: &PayrollRequest,
) -> EngineResult<PayrollOutcome>
where
    D: EmployeeDirectory + ?Sized,
    S: PayrollStore + ?Sized,
{
    let start_time = Instant::now();
    let period = PayPeriod::new(request.period_month, request.period_year)?;

    if let Some(salary) = request.override_salary {
        if let Some(message) = money_precision_violation(salary) {
            return Err(EngineError::invalid_input("override_salary", message));
        }
    }

    let employee = directory
        .find_active_employee(request.employee_id)?
        .ok_or_else(|| {
            warn!(employee_id = request.employee_id, "Active employee not found");
            EngineError::NotFound {
                entity: "Employee",
                id: request.employee_id,
            }
        })?;

    // A zero override means "no override"
    let salary_basis = round_money(
        request
            .override_salary
            .filter(|salary| !salary.is_zero())
            .unwrap_or(employee.monthly_salary),
    );
    let breakdown = compute_breakdown(salary_basis);
    let steps = audit_steps(salary_basis, &breakdown);

    let calculated_at = Utc::now();
    let (record, status) = store.upsert(
        PayrollKey::new(employee.id, period),
        NewPayrollRecord {
            employee_name: employee.full_name(),
            basic_salary: salary_basis,
            breakdown,
            calculated_at,
        },
    )?;

    let duration_us = start_time.elapsed().as_micros() as u64;
    info!(
        employee_id = employee.id,
        period = %period,
        net_pay = %record.breakdown.net_pay(),
        ?status,
        duration_us,
        "Payroll calculated"
    );

    Ok(PayrollOutcome {
        calculation_id: Uuid::new_v4(),
        timestamp: calculated_at,
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        status,
        record,
        audit_trace: AuditTrace { steps, duration_us },
    })
}

/// Records how each statutory rule was applied to `salary_basis`.
fn audit_steps(salary_basis: Decimal, breakdown: &DeductionBreakdown) -> Vec<AuditStep> {
    let basis = salary_basis.to_string();
    let positive = salary_basis > Decimal::ZERO;

    let sss = breakdown.sss();
    let msc = monthly_salary_credit(salary_basis);
    let sss_step = AuditStep {
        step_number: 1,
        rule_id: "sss_contribution".to_string(),
        rule_name: "SSS Contribution".to_string(),
        legal_basis: SSS_LEGAL_BASIS.to_string(),
        input: serde_json::json!({ "monthly_salary": basis }),
        output: serde_json::json!({
            "msc": if positive { Some(msc.to_string()) } else { None },
            "employee": sss.employee.to_string(),
            "employer": sss.employer.to_string()
        }),
        reasoning: if positive {
            format!(
                "Salary ₱{} maps to MSC ₱{}; employee 4.5% = ₱{}, employer 9.5% = ₱{}",
                salary_basis, msc, sss.employee, sss.employer
            )
        } else {
            "Non-positive salary carries no SSS contribution".to_string()
        },
    };

    let philhealth = breakdown.philhealth();
    let premium_base = philhealth_premium_base(salary_basis);
    let philhealth_step = AuditStep {
        step_number: 2,
        rule_id: "philhealth_contribution".to_string(),
        rule_name: "PhilHealth Contribution".to_string(),
        legal_basis: PHILHEALTH_LEGAL_BASIS.to_string(),
        input: serde_json::json!({ "monthly_salary": basis }),
        output: serde_json::json!({
            "premium_base": if positive { Some(premium_base.to_string()) } else { None },
            "employee": philhealth.employee.to_string(),
            "employer": philhealth.employer.to_string()
        }),
        reasoning: if positive {
            format!(
                "Premium base ₱{} at 5%, split equally: ₱{} each",
                premium_base, philhealth.employee
            )
        } else {
            "Non-positive salary carries no PhilHealth premium".to_string()
        },
    };

    let pagibig = breakdown.pagibig();
    let pagibig_step = AuditStep {
        step_number: 3,
        rule_id: "pagibig_contribution".to_string(),
        rule_name: "Pag-IBIG Contribution".to_string(),
        legal_basis: PAGIBIG_LEGAL_BASIS.to_string(),
        input: serde_json::json!({ "monthly_salary": basis }),
        output: serde_json::json!({
            "capped": pagibig.employee == pagibig_max_contribution(),
            "employee": pagibig.employee.to_string(),
            "employer": pagibig.employer.to_string()
        }),
        reasoning: if positive {
            format!("2% of salary per side, ₱200 cap above ₱5,000: ₱{} each", pagibig.employee)
        } else {
            "Non-positive salary carries no Pag-IBIG contribution".to_string()
        },
    };

    // Unrepresentable annual income only arises in the top bracket
    let annual_income = annualize(salary_basis);
    let annual_tax = annual_income.map(calculate_annual_income_tax);
    let bracket = find_tax_bracket(annual_income.unwrap_or(Decimal::MAX));
    let tax_step = AuditStep {
        step_number: 4,
        rule_id: "withholding_tax".to_string(),
        rule_name: "Withholding Tax".to_string(),
        legal_basis: INCOME_TAX_LEGAL_BASIS.to_string(),
        input: serde_json::json!({
            "monthly_salary": basis,
            "annual_income": annual_income.map(|income| income.to_string())
        }),
        output: serde_json::json!({
            "bracket": bracket.label,
            "annual_tax": annual_tax.map(|tax| tax.to_string()),
            "monthly_tax": breakdown.income_tax().to_string()
        }),
        reasoning: match (annual_income, annual_tax) {
            (Some(income), Some(tax)) => format!(
                "Annual income ₱{} falls in bracket {}: annual tax ₱{} / 12 = ₱{}",
                income,
                bracket.label,
                tax,
                breakdown.income_tax()
            ),
            _ => format!(
                "Salary ₱{} annualizes beyond every bracket; taxed monthly at the {} rate: ₱{}",
                salary_basis,
                bracket.label,
                breakdown.income_tax()
            ),
        },
    };

    let totals_step = AuditStep {
        step_number: 5,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        legal_basis: "employee shares only".to_string(),
        input: serde_json::json!({ "salary_basis": basis }),
        output: serde_json::json!({
            "total_deductions": breakdown.total_deductions().to_string(),
            "net_pay": breakdown.net_pay().to_string(),
            "employer_contributions": breakdown.employer_contributions().to_string()
        }),
        reasoning: format!(
            "₱{} less employee deductions ₱{} = ₱{}; employer contributions ₱{} not deducted",
            salary_basis,
            breakdown.total_deductions(),
            breakdown.net_pay(),
            breakdown.employer_contributions()
        ),
    };

    vec![sss_step, philhealth_step, pagibig_step, tax_step, totals_step]
}
