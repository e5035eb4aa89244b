//! Pag-IBIG (HDMF) contribution calculation.
//!
//! Employee and employer each contribute 2% of the monthly salary; above a
//! ₱5,000 salary each share is capped at ₱200.

use rust_decimal::Decimal;

use super::money::round_money;
use crate::models::Contribution;

/// The law the Pag-IBIG contribution schedule implements.
pub const PAGIBIG_LEGAL_BASIS: &str = "RA 9679";

/// The rate applied to each side (2%).
pub fn pagibig_rate() -> Decimal {
    Decimal::new(2, 2)
}

/// The salary above which the cap applies.
pub fn pagibig_salary_threshold() -> Decimal {
    Decimal::from(5_000)
}

/// The largest contribution per side once the salary exceeds the threshold.
pub fn pagibig_max_contribution() -> Decimal {
    Decimal::new(200_00, 2)
}

/// Calculates the Pag-IBIG employee and employer contributions.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_pagibig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(calculate_pagibig(Decimal::from(4000)).employee, Decimal::from_str("80.00").unwrap());
/// assert_eq!(calculate_pagibig(Decimal::from(25000)).employer, Decimal::from_str("200.00").unwrap());
/// ```
pub fn calculate_pagibig(monthly_salary: Decimal) -> Contribution {
    if monthly_salary <= Decimal::ZERO {
        return Contribution::zero();
    }

    let mut contribution = round_money(monthly_salary * pagibig_rate());
    if monthly_salary > pagibig_salary_threshold() {
        contribution = contribution.min(pagibig_max_contribution());
    }

    Contribution::new(contribution, contribution)
}
