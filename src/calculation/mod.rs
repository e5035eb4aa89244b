//! Calculation logic for the payroll deduction engine.
//!
//! This module contains the statutory deduction calculators (SSS, PhilHealth,
//! Pag-IBIG and withholding tax), the money rounding helpers they share, and
//! the payroll orchestration that combines them for one employee and period.

mod income_tax;
mod money;
mod pagibig;
mod payroll;
mod philhealth;
mod sss;

pub use income_tax::{
    INCOME_TAX_LEGAL_BASIS, TaxBracket, annualize, calculate_annual_income_tax,
    calculate_monthly_withholding_tax, find_tax_bracket, months_per_year, tax_brackets,
};
pub use money::{MONEY_MAX_DIGITS, MONEY_SCALE, money_precision_violation, round_money, zero_money};
pub use pagibig::{
    PAGIBIG_LEGAL_BASIS, calculate_pagibig, pagibig_max_contribution, pagibig_rate,
    pagibig_salary_threshold,
};
pub use payroll::{PayrollRequest, calculate_payroll, compute_breakdown};
pub use philhealth::{
    PHILHEALTH_LEGAL_BASIS, calculate_philhealth, philhealth_ceiling, philhealth_floor,
    philhealth_premium_base, philhealth_rate,
};
pub use sss::{
    SSS_LEGAL_BASIS, SssBracket, calculate_sss, monthly_salary_credit, sss_brackets,
    sss_employee_rate, sss_employer_rate, sss_max_msc,
};
