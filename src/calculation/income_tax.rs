//! Withholding tax calculation under the TRAIN Law annual schedule.
//!
//! The monthly withholding is derived from the annual schedule: the monthly
//! salary is annualized, taxed, and the annual tax divided back by twelve.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::Serialize;

use super::money::{round_money, zero_money};

/// The law the income tax schedule implements.
pub const INCOME_TAX_LEGAL_BASIS: &str = "RA 10963";

/// Pay periods per year used to annualize a monthly salary.
pub fn months_per_year() -> Decimal {
    Decimal::from(12)
}

/// One row of the annual income tax schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxBracket {
    /// Lowest annual income in the bracket, as published.
    pub min: Decimal,
    /// Highest annual income in the bracket; `None` for the top bracket.
    pub max: Option<Decimal>,
    /// Tax owed on income up to `excess_over`.
    pub base_tax: Decimal,
    /// Marginal rate on income above `excess_over`, in percent.
    pub rate_percent: Decimal,
    /// The income threshold the marginal rate applies above.
    pub excess_over: Decimal,
    /// Display label.
    pub label: String,
}

impl TaxBracket {
    /// Returns true if `annual_income` does not exceed this bracket's upper bound.
    fn covers(&self, annual_income: Decimal) -> bool {
        self.max.is_none_or(|max| annual_income <= max)
    }

    /// The marginal rate as a fraction (15% -> 0.15).
    fn rate(&self) -> Decimal {
        self.rate_percent / Decimal::ONE_HUNDRED
    }

    /// Tax owed on `annual_income` under this bracket, unrounded.
    ///
    /// The rate is applied as a fraction so the product never exceeds the
    /// income itself.
    fn tax_on(&self, annual_income: Decimal) -> Decimal {
        (annual_income - self.excess_over)
            .saturating_mul(self.rate())
            .saturating_add(self.base_tax)
    }

    /// Monthly tax owed on `monthly_salary` under this bracket, unrounded.
    ///
    /// Equivalent to `tax_on(monthly_salary * 12) / 12` without forming the
    /// annual figure, for salaries whose annualized value is not representable.
    fn monthly_tax_on(&self, monthly_salary: Decimal) -> Decimal {
        let fixed = (self.base_tax - self.excess_over * self.rate()) / months_per_year();
        monthly_salary.saturating_mul(self.rate()).saturating_add(fixed)
    }
}

static TAX_BRACKETS: LazyLock<Vec<TaxBracket>> = LazyLock::new(|| {
    [
        (0, Some(250_000), 0, 0, 0, "₱0 – ₱250,000"),
        (250_001, Some(400_000), 0, 15, 250_000, "₱250,001 – ₱400,000"),
        (400_001, Some(800_000), 22_500, 20, 400_000, "₱400,001 – ₱800,000"),
        (800_001, Some(2_000_000), 102_500, 25, 800_000, "₱800,001 – ₱2,000,000"),
        (2_000_001, Some(8_000_000), 402_500, 30, 2_000_000, "₱2,000,001 – ₱8,000,000"),
        (8_000_001, None, 2_202_500, 35, 8_000_000, "Over ₱8,000,000"),
    ]
    .into_iter()
    .map(|(min, max, base_tax, rate, excess_over, label): (i64, Option<i64>, i64, i64, i64, &str)| {
        TaxBracket {
            min: Decimal::from(min),
            max: max.map(Decimal::from),
            base_tax: Decimal::from(base_tax),
            rate_percent: Decimal::from(rate),
            excess_over: Decimal::from(excess_over),
            label: label.to_string(),
        }
    })
    .collect()
});

/// Returns the annual income tax schedule, ordered by income, for display.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::tax_brackets;
///
/// let brackets = tax_brackets();
/// assert_eq!(brackets.len(), 6);
/// assert_eq!(brackets[5].label, "Over ₱8,000,000");
/// ```
pub fn tax_brackets() -> &'static [TaxBracket] {
    &TAX_BRACKETS
}

fn top_bracket() -> &'static TaxBracket {
    let brackets = tax_brackets();
    &brackets[brackets.len() - 1]
}

/// Annualizes a monthly amount, or `None` if the result is not representable.
pub fn annualize(monthly_amount: Decimal) -> Option<Decimal> {
    monthly_amount.checked_mul(months_per_year())
}

/// Finds the bracket an annual income is taxed under.
///
/// The first bracket whose upper bound is open or at least `annual_income`
/// applies, so an income of exactly ₱250,000 stays in the exempt bracket.
pub fn find_tax_bracket(annual_income: Decimal) -> &'static TaxBracket {
    tax_brackets()
        .iter()
        .find(|bracket| bracket.covers(annual_income))
        .unwrap_or_else(top_bracket)
}

/// Calculates the annual income tax on taxable income.
///
/// Non-positive income owes nothing. The result is rounded half-up to
/// centavos.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_annual_income_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(calculate_annual_income_tax(Decimal::from(250000)), Decimal::ZERO);
/// assert_eq!(
///     calculate_annual_income_tax(Decimal::from(500000)),
///     Decimal::from_str("42500.00").unwrap()
/// );
/// ```
pub fn calculate_annual_income_tax(annual_income: Decimal) -> Decimal {
    if annual_income <= Decimal::ZERO {
        return zero_money();
    }

    round_money(find_tax_bracket(annual_income).tax_on(annual_income))
}

/// Calculates the monthly withholding tax on a monthly salary.
///
/// Salaries too large to annualize are necessarily in the top bracket and are
/// taxed there directly.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_monthly_withholding_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 25,000 x 12 = 300,000 -> 7,500 a year -> 625 a month
/// assert_eq!(
///     calculate_monthly_withholding_tax(Decimal::from(25000)),
///     Decimal::from_str("625.00").unwrap()
/// );
/// ```
pub fn calculate_monthly_withholding_tax(monthly_salary: Decimal) -> Decimal {
    if monthly_salary <= Decimal::ZERO {
        return zero_money();
    }

    match annualize(monthly_salary) {
        Some(annual_income) => {
            round_money(calculate_annual_income_tax(annual_income) / months_per_year())
        }
        None => round_money(top_bracket().monthly_tax_on(monthly_salary)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_income_no_tax() {
        assert_eq!(calculate_annual_income_tax(Decimal::ZERO).to_string(), "0.00");
    }

    #[test]
    fn test_negative_income_no_tax() {
        assert_eq!(calculate_annual_income_tax(dec("-100000")), dec("0.00"));
    }

    #[test]
    fn test_below_250000_no_tax() {
        assert_eq!(calculate_annual_income_tax(dec("200000")), dec("0.00"));
    }

    #[test]
    fn test_exactly_250000_is_exempt() {
        let tax = calculate_annual_income_tax(dec("250000"));
        assert_eq!(tax, dec("0.00"));
        assert_eq!(tax.to_string(), "0.00");
    }

    #[test]
    fn test_250001_taxed_at_15_percent() {
        assert_eq!(calculate_annual_income_tax(dec("250001")), dec("0.15"));
    }

    #[test]
    fn test_fraction_above_exemption_is_taxed() {
        // 0.50 * 15% = 0.075 -> 0.08
        assert_eq!(calculate_annual_income_tax(dec("250000.50")), dec("0.08"));
    }

    #[test]
    fn test_400000_is_top_of_15_percent_bracket() {
        assert_eq!(calculate_annual_income_tax(dec("400000")), dec("22500.00"));
    }

    #[test]
    fn test_500000_bracket() {
        assert_eq!(calculate_annual_income_tax(dec("500000")), dec("42500.00"));
    }

    #[test]
    fn test_25_percent_bracket() {
        // 102,500 + 25% of 200,000
        assert_eq!(calculate_annual_income_tax(dec("1000000")), dec("152500.00"));
    }

    #[test]
    fn test_30_percent_bracket() {
        // 402,500 + 30% of 1,000,000
        assert_eq!(calculate_annual_income_tax(dec("3000000")), dec("702500.00"));
    }

    #[test]
    fn test_35_percent_bracket() {
        // 2,202,500 + 35% of 2,000,000
        assert_eq!(calculate_annual_income_tax(dec("10000000")), dec("2902500.00"));
    }

    #[test]
    fn test_base_tax_equals_tax_at_previous_upper_bound() {
        let brackets = tax_brackets();
        for pair in brackets.windows(2) {
            let boundary = pair[0].max.unwrap();
            assert_eq!(pair[1].excess_over, boundary);
            assert_eq!(calculate_annual_income_tax(boundary), pair[1].base_tax);
        }
    }

    #[test]
    fn test_rates_grow_monotonically() {
        let brackets = tax_brackets();
        for pair in brackets.windows(2) {
            assert!(pair[1].rate_percent > pair[0].rate_percent);
        }
    }

    #[test]
    fn test_find_tax_bracket_boundaries() {
        assert_eq!(find_tax_bracket(dec("250000")).rate_percent, dec("0"));
        assert_eq!(find_tax_bracket(dec("250000.01")).rate_percent, dec("15"));
        assert_eq!(find_tax_bracket(dec("8000000")).rate_percent, dec("30"));
        assert_eq!(find_tax_bracket(dec("8000000.01")).rate_percent, dec("35"));
    }

    #[test]
    fn test_monthly_withholding_for_25000_salary() {
        assert_eq!(calculate_monthly_withholding_tax(dec("25000")), dec("625.00"));
    }

    #[test]
    fn test_monthly_withholding_at_exemption_boundary() {
        // 20,833.33 * 12 = 249,999.96
        assert_eq!(calculate_monthly_withholding_tax(dec("20833.33")), dec("0.00"));
    }

    #[test]
    fn test_negative_monthly_salary_no_tax() {
        assert_eq!(calculate_monthly_withholding_tax(Decimal::MIN), dec("0.00"));
    }

    #[test]
    fn test_annual_tax_on_largest_income_does_not_overflow() {
        let tax = calculate_annual_income_tax(Decimal::MAX);
        assert!(tax > Decimal::MAX * dec("0.34"));
        assert!(tax < Decimal::MAX * dec("0.35"));
    }

    #[test]
    fn test_unannualizable_salary_taxed_at_top_rate() {
        let salary = Decimal::MAX / Decimal::TEN;
        assert!(annualize(salary).is_none());

        let tax = calculate_monthly_withholding_tax(salary);
        assert!(tax > salary * dec("0.34"));
        assert!(tax < salary * dec("0.35"));
    }

    #[test]
    fn test_direct_monthly_top_bracket_matches_annualized_path() {
        // 1,000,000 * 12 = 12,000,000 -> 2,202,500 + 35% of 4,000,000 = 3,602,500 / 12
        let salary = dec("1000000");
        assert_eq!(calculate_monthly_withholding_tax(salary), dec("300208.33"));
        assert_eq!(round_money(top_bracket().monthly_tax_on(salary)), dec("300208.33"));
    }

    #[test]
    fn test_monthly_withholding_rounds_after_division() {
        // 50,000 * 12 = 600,000 -> 22,500 + 40,000 = 62,500 / 12 = 5,208.333...
        assert_eq!(calculate_monthly_withholding_tax(dec("50000")), dec("5208.33"));
    }
}
