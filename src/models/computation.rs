//! Salary computation result models.
//!
//! This module contains the [`SalaryComputation`] value object produced by
//! the engine, along with the [`PayLine`] entries it is built from. Callers
//! embed the computation verbatim in API responses and payslip documents.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single earnings or deduction line on a payslip.
///
/// Deduction lines carry negative amounts; earnings lines carry non-negative
/// amounts. The `rate` is the percent of pro-rated basic salary the line
/// represents, recomputed for display when the amount did not come from a
/// percent rule.
///
/// # Example
///
/// ```
/// use payslip_engine::models::PayLine;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = PayLine {
///     rule_name: "House Rent Allowance".to_string(),
///     rate: Decimal::from_str("20").unwrap(),
///     amount: Decimal::from_str("6000.00").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLine {
    /// The display name of the pay rule (e.g., "Basic Salary").
    pub rule_name: String,
    /// The percent of pro-rated basic this line represents.
    pub rate: Decimal,
    /// The monetary amount; negative for deductions.
    pub amount: Decimal,
}

/// The complete result of a salary computation for one pay period.
///
/// The breakdown always contains six earnings lines (Basic Salary, House
/// Rent Allowance, Standard Allowance, Performance Bonus, Leave Travel
/// Allowance, Fixed Allowance) and three deduction lines (PF Employee,
/// Professional Tax, Other Deductions), in that order, even when amounts are
/// zero. The trailing fields echo the attendance inputs for display and
/// audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComputation {
    /// Itemized earnings, in fixed payslip order.
    pub gross_earnings: Vec<PayLine>,
    /// Itemized deductions, in fixed payslip order, amounts negative.
    pub deductions: Vec<PayLine>,
    /// Sum of all earnings amounts.
    pub gross_total: Decimal,
    /// Sum of all deduction amounts, as a positive figure.
    pub deductions_total: Decimal,
    /// Gross total minus deductions total.
    pub net_amount: Decimal,
    /// The pro-rated basic salary the percent rules were applied to.
    pub computed_base_salary: Decimal,
    /// Ratio of worked days to the policy working-day denominator.
    pub attendance_ratio: Decimal,
    /// Days counted as worked (present plus paid leave).
    pub working_days: u32,
    /// Days with attendance status "present".
    pub days_present: u32,
    /// Approved paid leave days overlapping the period.
    pub total_paid_leaves: u32,
    /// The policy working-day denominator used.
    pub total_working_days: u32,
}

impl SalaryComputation {
    /// Looks up an earnings line by its rule name.
    pub fn earning(&self, rule_name: &str) -> Option<&PayLine> {
        self.gross_earnings.iter().find(|l| l.rule_name == rule_name)
    }

    /// Looks up a deduction line by its rule name.
    pub fn deduction(&self, rule_name: &str) -> Option<&PayLine> {
        self.deductions.iter().find(|l| l.rule_name == rule_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_computation() -> SalaryComputation {
        SalaryComputation {
            gross_earnings: vec![
                PayLine {
                    rule_name: "Basic Salary".to_string(),
                    rate: dec("100"),
                    amount: dec("30000.00"),
                },
                PayLine {
                    rule_name: "House Rent Allowance".to_string(),
                    rate: dec("20"),
                    amount: dec("6000.00"),
                },
            ],
            deductions: vec![PayLine {
                rule_name: "Professional Tax".to_string(),
                rate: dec("0.67"),
                amount: dec("-200"),
            }],
            gross_total: dec("36000.00"),
            deductions_total: dec("200"),
            net_amount: dec("35800.00"),
            computed_base_salary: dec("30000.00"),
            attendance_ratio: dec("1"),
            working_days: 22,
            days_present: 20,
            total_paid_leaves: 2,
            total_working_days: 22,
        }
    }

    #[test]
    fn test_earning_lookup_by_rule_name() {
        let computation = sample_computation();
        let hra = computation.earning("House Rent Allowance").unwrap();
        assert_eq!(hra.amount, dec("6000.00"));
        assert!(computation.earning("Overtime").is_none());
    }

    #[test]
    fn test_deduction_lookup_by_rule_name() {
        let computation = sample_computation();
        let tax = computation.deduction("Professional Tax").unwrap();
        assert_eq!(tax.amount, dec("-200"));
    }

    #[test]
    fn test_pay_line_serialization() {
        let line = PayLine {
            rule_name: "Basic Salary".to_string(),
            rate: dec("100"),
            amount: dec("30000.00"),
        };

        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"rule_name\":\"Basic Salary\""));
        assert!(json.contains("\"rate\":\"100\""));
        assert!(json.contains("\"amount\":\"30000.00\""));
    }

    #[test]
    fn test_pay_line_deserialization() {
        let json = r#"{
            "rule_name": "PF Employee",
            "rate": "12",
            "amount": "-3600.00"
        }"#;

        let line: PayLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.rule_name, "PF Employee");
        assert_eq!(line.rate, dec("12"));
        assert_eq!(line.amount, dec("-3600.00"));
    }

    #[test]
    fn test_computation_serialization_round_trip() {
        let computation = sample_computation();
        let json = serde_json::to_string(&computation).unwrap();
        assert!(json.contains("\"gross_earnings\":["));
        assert!(json.contains("\"deductions\":["));
        assert!(json.contains("\"total_working_days\":22"));

        let deserialized: SalaryComputation = serde_json::from_str(&json).unwrap();
        assert_eq!(computation, deserialized);
    }
}
