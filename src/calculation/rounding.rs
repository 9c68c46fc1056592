//! Monetary rounding.
//!
//! This module is the single rounding authority for the engine. Every
//! multiplication or division that produces a monetary amount is rounded
//! through [`round2`] immediately, before the value is reused; intermediate
//! amounts are never carried at full precision. Historical payslips were
//! produced under this step-wise policy, so it must be preserved exactly.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to two decimal places, half away from zero.
///
/// Half-away-from-zero matches the rounding of the payroll runtime that
/// produced existing payslips; the default banker's rounding would diverge
/// on exact midpoints.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round2(Decimal::from_str("13636.3636").unwrap());
/// assert_eq!(rounded, Decimal::from_str("13636.36").unwrap());
/// ```
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// RD-001: truncating case rounds down
    #[test]
    fn test_rounds_down_below_midpoint() {
        assert_eq!(round2(dec("2.674")), dec("2.67"));
    }

    /// RD-002: above midpoint rounds up
    #[test]
    fn test_rounds_up_above_midpoint() {
        assert_eq!(round2(dec("2.676")), dec("2.68"));
    }

    /// RD-003: exact midpoint rounds away from zero
    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round2(dec("0.125")), dec("0.13"));
        assert_eq!(round2(dec("2.675")), dec("2.68"));
    }

    /// RD-004: negative midpoint also rounds away from zero
    #[test]
    fn test_negative_midpoint_rounds_away_from_zero() {
        assert_eq!(round2(dec("-0.125")), dec("-0.13"));
    }

    #[test]
    fn test_values_with_two_or_fewer_decimals_unchanged() {
        assert_eq!(round2(dec("30000")), dec("30000"));
        assert_eq!(round2(dec("199.99")), dec("199.99"));
    }

    #[test]
    fn test_repeating_quotient_rounds_to_two_places() {
        let ratio = Decimal::from(10) / Decimal::from(22);
        assert_eq!(round2(dec("30000") * ratio), dec("13636.36"));
    }
}
