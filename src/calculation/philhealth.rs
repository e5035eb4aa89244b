//! PhilHealth premium calculation.
//!
//! The premium is 5% of the monthly basic salary, with the salary held between
//! a ₱10,000 floor and a ₱100,000 ceiling, shared equally by employee and
//! employer.

use rust_decimal::Decimal;

use super::money::round_money;
use crate::models::Contribution;

/// The law the PhilHealth premium schedule implements.
pub const PHILHEALTH_LEGAL_BASIS: &str = "RA 11223";

/// The total premium rate (5%).
pub fn philhealth_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// The lowest salary the premium is computed on.
pub fn philhealth_floor() -> Decimal {
    Decimal::from(10_000)
}

/// The highest salary the premium is computed on.
pub fn philhealth_ceiling() -> Decimal {
    Decimal::from(100_000)
}

/// Clamps a salary into the PhilHealth premium base.
pub fn philhealth_premium_base(monthly_salary: Decimal) -> Decimal {
    monthly_salary.clamp(philhealth_floor(), philhealth_ceiling())
}

/// Calculates the PhilHealth employee and employer shares.
///
/// A non-positive salary yields `0.00` for both shares. Otherwise the total
/// premium is rounded to centavos, halved, and the half rounded again; both
/// shares equal that half, so an odd-centavo total is not split exactly.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_philhealth;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let philhealth = calculate_philhealth(Decimal::from(45000));
/// assert_eq!(philhealth.employee, Decimal::from_str("1125.00").unwrap());
/// assert_eq!(philhealth.employer, Decimal::from_str("1125.00").unwrap());
/// ```
pub fn calculate_philhealth(monthly_salary: Decimal) -> Contribution {
    if monthly_salary <= Decimal::ZERO {
        return Contribution::zero();
    }

    let total = round_money(philhealth_premium_base(monthly_salary) * philhealth_rate());
    let half = round_money(total / Decimal::TWO);
    Contribution::new(half, half)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_salary() {
        let philhealth = calculate_philhealth(Decimal::ZERO);
        assert_eq!(philhealth.employee.to_string(), "0.00");
        assert_eq!(philhealth.employer.to_string(), "0.00");
    }

    #[test]
    fn test_negative_salary() {
        assert_eq!(calculate_philhealth(dec("-1")), Contribution::zero());
    }

    #[test]
    fn test_floor_applied() {
        let philhealth = calculate_philhealth(dec("5000"));
        assert_eq!(philhealth.employee, dec("250.00"));
        assert_eq!(philhealth.employer, dec("250.00"));
    }

    #[test]
    fn test_normal_salary() {
        let philhealth = calculate_philhealth(dec("45000"));
        assert_eq!(philhealth.employee, dec("1125.00"));
        assert_eq!(philhealth.employer, dec("1125.00"));
    }

    #[test]
    fn test_ceiling_applied() {
        let philhealth = calculate_philhealth(dec("300000"));
        assert_eq!(philhealth.employee, dec("2500.00"));
        assert_eq!(philhealth.employer, dec("2500.00"));
    }

    #[test]
    fn test_floor_and_ceiling_are_inclusive() {
        assert_eq!(calculate_philhealth(dec("10000")).employee, dec("250.00"));
        assert_eq!(calculate_philhealth(dec("100000")).employee, dec("2500.00"));
    }

    #[test]
    fn test_odd_centavo_total_gives_equal_shares() {
        // 10,000.10 * 5% = 500.005 -> 500.01 total; 500.01 / 2 = 250.005 -> 250.01 each
        let philhealth = calculate_philhealth(dec("10000.10"));
        assert_eq!(philhealth.employee, dec("250.01"));
        assert_eq!(philhealth.employer, dec("250.01"));
        assert_ne!(philhealth.employee + philhealth.employer, dec("500.01"));
    }

    #[test]
    fn test_premium_base_clamps() {
        assert_eq!(philhealth_premium_base(dec("1")), dec("10000"));
        assert_eq!(philhealth_premium_base(dec("45000")), dec("45000"));
        assert_eq!(philhealth_premium_base(dec("100000.01")), dec("100000"));
    }
}
