//! SSS contribution calculation.
//!
//! Social Security System contributions are computed on a Monthly Salary
//! Credit (MSC) rather than on the actual salary. The MSC comes from a banded
//! schedule running from ₱3,000 to ₱20,000 in ₱500 steps.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::Serialize;

use super::money::round_money;
use crate::models::Contribution;

/// The law the SSS contribution schedule implements.
pub const SSS_LEGAL_BASIS: &str = "RA 11199";

/// The MSC used when a salary exceeds every finite bracket.
pub fn sss_max_msc() -> Decimal {
    Decimal::from(20_000)
}

/// The employee share of the MSC (4.5%).
pub fn sss_employee_rate() -> Decimal {
    Decimal::new(45, 3)
}

/// The employer share of the MSC (9.5%).
pub fn sss_employer_rate() -> Decimal {
    Decimal::new(95, 3)
}

/// One row of the SSS contribution schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SssBracket {
    /// Lowest salary in the bracket.
    pub min: Decimal,
    /// Highest salary in the bracket; `None` for the open-ended top bracket.
    pub max: Option<Decimal>,
    /// The Monthly Salary Credit for salaries in the bracket.
    pub msc: Decimal,
}

/// (min pesos, max centavos, MSC pesos)
const SSS_SCHEDULE: [(i64, Option<i64>, i64); 35] = [
    (0, Some(3_249_99), 3_000),
    (3_250, Some(3_749_99), 3_500),
    (3_750, Some(4_249_99), 4_000),
    (4_250, Some(4_749_99), 4_500),
    (4_750, Some(5_249_99), 5_000),
    (5_250, Some(5_749_99), 5_500),
    (5_750, Some(6_249_99), 6_000),
    (6_250, Some(6_749_99), 6_500),
    (6_750, Some(7_249_99), 7_000),
    (7_250, Some(7_749_99), 7_500),
    (7_750, Some(8_249_99), 8_000),
    (8_250, Some(8_749_99), 8_500),
    (8_750, Some(9_249_99), 9_000),
    (9_250, Some(9_749_99), 9_500),
    (9_750, Some(10_249_99), 10_000),
    (10_250, Some(10_749_99), 10_500),
    (10_750, Some(11_249_99), 11_000),
    (11_250, Some(11_749_99), 11_500),
    (11_750, Some(12_249_99), 12_000),
    (12_250, Some(12_749_99), 12_500),
    (12_750, Some(13_249_99), 13_000),
    (13_250, Some(13_749_99), 13_500),
    (13_750, Some(14_249_99), 14_000),
    (14_250, Some(14_749_99), 14_500),
    (14_750, Some(15_249_99), 15_000),
    (15_250, Some(15_749_99), 15_500),
    (15_750, Some(16_249_99), 16_000),
    (16_250, Some(16_749_99), 16_500),
    (16_750, Some(17_249_99), 17_000),
    (17_250, Some(17_749_99), 17_500),
    (17_750, Some(18_249_99), 18_000),
    (18_250, Some(18_749_99), 18_500),
    (18_750, Some(19_249_99), 19_000),
    (19_250, Some(19_749_99), 19_500),
    (19_750, None, 20_000),
];

static SSS_BRACKETS: LazyLock<Vec<SssBracket>> = LazyLock::new(|| {
    SSS_SCHEDULE
        .iter()
        .map(|&(min, max_centavos, msc)| SssBracket {
            min: Decimal::from(min),
            max: max_centavos.map(|centavos| Decimal::new(centavos, 2)),
            msc: Decimal::from(msc),
        })
        .collect()
});

/// Returns the SSS contribution schedule, ordered by salary.
pub fn sss_brackets() -> &'static [SssBracket] {
    &SSS_BRACKETS
}

/// Finds the Monthly Salary Credit for a monthly salary.
///
/// Brackets are scanned in order and the first one whose upper bound is open
/// or at least `monthly_salary` wins; lower bounds are not consulted.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::monthly_salary_credit;
/// use rust_decimal::Decimal;
///
/// assert_eq!(monthly_salary_credit(Decimal::from(3000)), Decimal::from(3000));
/// assert_eq!(monthly_salary_credit(Decimal::from(3250)), Decimal::from(3500));
/// assert_eq!(monthly_salary_credit(Decimal::from(50000)), Decimal::from(20000));
/// ```
pub fn monthly_salary_credit(monthly_salary: Decimal) -> Decimal {
    sss_brackets()
        .iter()
        .find(|bracket| bracket.max.is_none_or(|max| monthly_salary <= max))
        .map(|bracket| bracket.msc)
        .unwrap_or_else(sss_max_msc)
}

/// Calculates the SSS employee and employer contributions.
///
/// A non-positive salary yields `0.00` for both shares. Otherwise each share
/// is the MSC times its rate, rounded half-up to centavos.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_sss;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let sss = calculate_sss(Decimal::from(3000));
/// assert_eq!(sss.employee, Decimal::from_str("135.00").unwrap());
/// assert_eq!(sss.employer, Decimal::from_str("285.00").unwrap());
/// ```
pub fn calculate_sss(monthly_salary: Decimal) -> Contribution {
    if monthly_salary <= Decimal::ZERO {
        return Contribution::zero();
    }

    let msc = monthly_salary_credit(monthly_salary);
    Contribution::new(
        round_money(msc * sss_employee_rate()),
        round_money(msc * sss_employer_rate()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_salary_has_no_contribution() {
        let sss = calculate_sss(Decimal::ZERO);
        assert_eq!(sss.employee, dec("0.00"));
        assert_eq!(sss.employer, dec("0.00"));
        assert_eq!(sss.employee.to_string(), "0.00");
    }

    #[test]
    fn test_negative_salary_has_no_contribution() {
        assert_eq!(calculate_sss(dec("-5000")), Contribution::zero());
    }

    #[test]
    fn test_salary_below_3250_uses_minimum_msc() {
        let sss = calculate_sss(dec("3000"));
        assert_eq!(sss.employee, dec("135.00"));
        assert_eq!(sss.employer, dec("285.00"));
    }

    #[test]
    fn test_tiny_salary_uses_minimum_msc() {
        let sss = calculate_sss(dec("0.01"));
        assert_eq!(sss.employee, dec("135.00"));
    }

    #[test]
    fn test_salary_ceiling() {
        let sss = calculate_sss(dec("50000"));
        assert_eq!(sss.employee, dec("900.00"));
        assert_eq!(sss.employer, dec("1900.00"));
    }

    #[test]
    fn test_salary_25000_uses_ceiling() {
        assert_eq!(calculate_sss(dec("25000")).employee, dec("900.00"));
    }

    #[test]
    fn test_bracket_upper_bound_is_inclusive() {
        assert_eq!(monthly_salary_credit(dec("3249.99")), dec("3000"));
        assert_eq!(monthly_salary_credit(dec("3250.00")), dec("3500"));
        assert_eq!(monthly_salary_credit(dec("19749.99")), dec("19500"));
        assert_eq!(monthly_salary_credit(dec("19750")), dec("20000"));
    }

    #[test]
    fn test_fractional_centavo_above_bound_moves_to_next_bracket() {
        assert_eq!(monthly_salary_credit(dec("3249.995")), dec("3500"));
    }

    #[test]
    fn test_mid_bracket_salary() {
        // 12,600 falls in 12,250 - 12,749.99 -> MSC 12,500
        let sss = calculate_sss(dec("12600"));
        assert_eq!(sss.employee, dec("562.50"));
        assert_eq!(sss.employer, dec("1187.50"));
    }

    #[test]
    fn test_schedule_is_contiguous_and_increasing() {
        let brackets = sss_brackets();
        assert_eq!(brackets.len(), 35);
        assert_eq!(brackets[0].min, Decimal::ZERO);
        assert!(brackets.last().unwrap().max.is_none());

        for pair in brackets.windows(2) {
            let max = pair[0].max.expect("only the last bracket is open-ended");
            assert_eq!(max + dec("0.01"), pair[1].min);
            assert_eq!(pair[1].msc - pair[0].msc, dec("500"));
        }
    }

    #[test]
    fn test_every_msc_yields_exact_centavo_shares() {
        for bracket in sss_brackets() {
            let sss = calculate_sss(bracket.msc);
            assert_eq!(sss.employee, bracket.msc * sss_employee_rate());
            assert_eq!(sss.employer, bracket.msc * sss_employer_rate());
        }
    }
}
