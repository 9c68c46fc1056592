//! Pay component resolution.
//!
//! This module resolves a single allowance or deduction component of a
//! salary structure into a display rate and a monetary amount. Resolution
//! follows a fixed priority: an explicit percent on the structure wins, a
//! percent implied by the stored fixed amount comes next, and components
//! that end up without a usable percent fall back to the fixed amount
//! pro-rated directly by the attendance ratio.

use rust_decimal::Decimal;

use super::rounding::round2;

/// How a component behaves when its percent resolves to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedFallback {
    /// Pay the stored fixed amount, pro-rated by the attendance ratio.
    Prorated,
    /// No fallback; the component pays nothing without a usable percent.
    /// The leave travel allowance is the only component configured this way,
    /// mirroring the historical payroll behavior.
    None,
}

/// A pay component resolved to a display rate and a monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedComponent {
    /// The percent of pro-rated basic shown against the line.
    pub rate: Decimal,
    /// The rounded monetary amount, always non-negative.
    pub amount: Decimal,
}

/// Resolves one pay component of a salary structure.
///
/// The effective percent is determined first:
/// 1. An explicit percent on the structure is used as-is (rounded to two
///    decimals), even when a fixed amount is also stored.
/// 2. Otherwise, when both the basic salary and the fixed amount are
///    positive, a percent is implied as `fixed / basic * 100` so legacy
///    fixed-amount structures behave as if they had always been
///    percent-based.
/// 3. Otherwise the percent is zero.
///
/// When the resolved percent is positive the amount is
/// `round2(prorated_basic * percent / 100)`. When it is not, the component
/// falls back to `round2(fixed_amount * attendance_ratio)` if its
/// [`FixedFallback`] allows it, and the display rate is recomputed from the
/// amount so the payslip still shows a coherent percent for legacy records.
///
/// # Arguments
///
/// * `percent` - The structure's explicit percent for this component, if any
/// * `fixed_amount` - The structure's fixed amount for this component
/// * `basic_salary` - The structure's full (un-prorated) basic salary
/// * `prorated_basic` - The attendance-prorated basic salary
/// * `attendance_ratio` - Ratio of worked days to the policy denominator
/// * `fallback` - Whether the fixed-amount fallback path applies
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::{FixedFallback, resolve_component};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// // 20% of a prorated basic of 30000.00
/// let hra = resolve_component(
///     Some(dec("20")),
///     dec("999999"),
///     dec("30000"),
///     dec("30000.00"),
///     Decimal::ONE,
///     FixedFallback::Prorated,
/// );
/// assert_eq!(hra.rate, dec("20"));
/// assert_eq!(hra.amount, dec("6000.00"));
/// ```
pub fn resolve_component(
    percent: Option<Decimal>,
    fixed_amount: Decimal,
    basic_salary: Decimal,
    prorated_basic: Decimal,
    attendance_ratio: Decimal,
    fallback: FixedFallback,
) -> ResolvedComponent {
    let resolved_percent = match percent {
        Some(explicit) => round2(explicit),
        None => {
            if basic_salary > Decimal::ZERO && fixed_amount > Decimal::ZERO {
                round2(fixed_amount / basic_salary * Decimal::ONE_HUNDRED)
            } else {
                Decimal::ZERO
            }
        }
    };

    if resolved_percent > Decimal::ZERO {
        let amount = round2(prorated_basic * resolved_percent / Decimal::ONE_HUNDRED);
        return ResolvedComponent {
            rate: resolved_percent,
            amount,
        };
    }

    match fallback {
        FixedFallback::Prorated => {
            let amount = round2(fixed_amount * attendance_ratio);
            let rate = if prorated_basic > Decimal::ZERO {
                round2(amount / prorated_basic * Decimal::ONE_HUNDRED)
            } else {
                Decimal::ZERO
            };
            ResolvedComponent { rate, amount }
        }
        FixedFallback::None => ResolvedComponent {
            rate: Decimal::ZERO,
            amount: Decimal::ZERO,
        },
    }
}
