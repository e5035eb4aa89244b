//! Peso amount helpers shared by every calculator.
//!
//! All stored or returned amounts carry exactly two fraction digits and are
//! rounded half-up (midpoint away from zero).

use rust_decimal::{Decimal, RoundingStrategy};

/// The number of fraction digits carried by every peso amount.
pub const MONEY_SCALE: u32 = 2;

/// The maximum number of significant digits a peso input may carry.
pub const MONEY_MAX_DIGITS: u32 = 12;

/// Rounds an amount to centavos, half-up, and fixes its scale at two digits.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("0.075").unwrap()).to_string(), "0.08");
/// assert_eq!(round_money(Decimal::from(135)).to_string(), "135.00");
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Returns `0.00`.
pub fn zero_money() -> Decimal {
    Decimal::new(0, MONEY_SCALE)
}

/// Describes why `value` cannot be accepted as a peso amount, if it cannot.
///
/// An amount may carry at most two fraction digits and twelve significant
/// digits in total.
pub fn money_precision_violation(value: Decimal) -> Option<String> {
    let normalized = value.normalize();
    if normalized.scale() > MONEY_SCALE {
        return Some(format!(
            "'{}' has more than {} decimal places",
            value, MONEY_SCALE
        ));
    }

    let integer_digits = normalized.abs().trunc().to_string().trim_start_matches('0').len() as u32;
    if integer_digits + MONEY_SCALE > MONEY_MAX_DIGITS {
        return Some(format!(
            "'{}' has more than {} digits in total",
            value, MONEY_MAX_DIGITS
        ));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_money_rounds_midpoint_up() {
        assert_eq!(round_money(dec("0.125")), dec("0.13"));
        assert_eq!(round_money(dec("0.135")), dec("0.14"));
        assert_eq!(round_money(dec("1262.5")), dec("1262.50"));
    }

    #[test]
    fn test_round_money_rounds_negative_midpoint_away_from_zero() {
        assert_eq!(round_money(dec("-0.125")), dec("-0.13"));
    }

    #[test]
    fn test_round_money_always_has_two_fraction_digits() {
        assert_eq!(round_money(dec("900")).to_string(), "900.00");
        assert_eq!(round_money(dec("42500.000")).to_string(), "42500.00");
        assert_eq!(zero_money().to_string(), "0.00");
    }

    #[test]
    fn test_precision_accepts_two_decimal_places() {
        assert_eq!(money_precision_violation(dec("25000.50")), None);
        assert_eq!(money_precision_violation(dec("25000.500")), None);
        assert_eq!(money_precision_violation(dec("0")), None);
        assert_eq!(money_precision_violation(dec("9999999999.99")), None);
    }

    #[test]
    fn test_precision_rejects_three_decimal_places() {
        let message = money_precision_violation(dec("25000.123")).unwrap();
        assert!(message.contains("decimal places"));
    }

    #[test]
    fn test_precision_rejects_too_many_digits() {
        let message = money_precision_violation(dec("10000000000")).unwrap();
        assert!(message.contains("digits"));
    }
}
