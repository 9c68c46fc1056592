//! The salary computation pipeline.
//!
//! This module contains [`compute_salary`], the pure function every payslip
//! figure in the system comes from. It is total over its inputs: missing
//! structure fields default to zero, every division is zero-guarded, and the
//! same inputs always produce the same breakdown.

use rust_decimal::Decimal;

use crate::models::{AttendanceCounts, PayLine, SalaryComputation, SalaryStructure};

use super::component::{FixedFallback, resolve_component};
use super::rounding::round2;

/// Display name of the basic salary earnings line.
pub const RULE_BASIC_SALARY: &str = "Basic Salary";
/// Display name of the house rent allowance earnings line.
pub const RULE_HOUSE_RENT_ALLOWANCE: &str = "House Rent Allowance";
/// Display name of the standard allowance earnings line.
pub const RULE_STANDARD_ALLOWANCE: &str = "Standard Allowance";
/// Display name of the performance bonus earnings line.
pub const RULE_PERFORMANCE_BONUS: &str = "Performance Bonus";
/// Display name of the leave travel allowance earnings line.
pub const RULE_LEAVE_TRAVEL_ALLOWANCE: &str = "Leave Travel Allowance";
/// Display name of the fixed allowance earnings line.
pub const RULE_FIXED_ALLOWANCE: &str = "Fixed Allowance";
/// Display name of the employee provident fund deduction line.
pub const RULE_PF_EMPLOYEE: &str = "PF Employee";
/// Display name of the professional tax deduction line.
pub const RULE_PROFESSIONAL_TAX: &str = "Professional Tax";
/// Display name of the other deductions line.
pub const RULE_OTHER_DEDUCTIONS: &str = "Other Deductions";

/// Returns the flat professional tax charged on every payslip.
///
/// The amount is 200 currency units. It is a statutory policy of the engine:
/// attendance pro-ration, percent configuration, and the structure's stored
/// `professional_tax` field have no effect on it.
pub fn professional_tax() -> Decimal {
    Decimal::new(200, 0)
}

/// Computes the payslip breakdown for one salary structure and pay period.
///
/// The computation proceeds in a fixed order: the attendance ratio is
/// derived from the day counts, the basic salary is pro-rated by it, each
/// allowance is resolved against the pro-rated basic, and deductions follow
/// the same resolution with professional tax charged flat. Monetary values
/// are rounded to two decimals immediately after every multiplication or
/// division, and the rounded values are what later steps consume.
///
/// When the working-day denominator or the worked-day count is zero the
/// attendance ratio falls back to 1 and the structure pays in full; absent
/// attendance data is treated as full attendance rather than zero pay.
///
/// The result always carries six earnings lines and three deduction lines,
/// zero amounts included, so payslip renderers can rely on the layout.
///
/// # Arguments
///
/// * `structure` - The salary structure in effect for the pay period
/// * `counts` - Attendance-derived day counts for the pay period
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::compute_salary;
/// use payslip_engine::models::{AttendanceCounts, SalaryStructure};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut structure =
///     SalaryStructure::empty(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// structure.basic_salary = Decimal::new(30000, 0);
/// structure.hra_percent = Some(Decimal::new(20, 0));
///
/// let result = compute_salary(&structure, &AttendanceCounts::new(22, 0));
/// assert_eq!(result.computed_base_salary, Decimal::new(30000, 0));
/// ```
pub fn compute_salary(
    structure: &SalaryStructure,
    counts: &AttendanceCounts,
) -> SalaryComputation {
    let working_days = counts.working_days();

    // Full pay when there is no attendance data to pro-rate against.
    let attendance_ratio = if counts.total_working_days > 0 && working_days > 0 {
        Decimal::from(working_days) / Decimal::from(counts.total_working_days)
    } else {
        Decimal::ONE
    };

    let prorated_basic = round2(structure.basic_salary * attendance_ratio);

    let hra = resolve_component(
        structure.hra_percent,
        structure.house_rent_allowance,
        structure.basic_salary,
        prorated_basic,
        attendance_ratio,
        FixedFallback::Prorated,
    );
    let standard_allowance = resolve_component(
        structure.standard_allowance_percent,
        structure.standard_allowance,
        structure.basic_salary,
        prorated_basic,
        attendance_ratio,
        FixedFallback::Prorated,
    );
    let performance_bonus = resolve_component(
        structure.performance_bonus_percent,
        structure.performance_bonus,
        structure.basic_salary,
        prorated_basic,
        attendance_ratio,
        FixedFallback::Prorated,
    );
    // LTA pays only through a percent rule; a legacy fixed travel allowance
    // is never pro-rated directly.
    let lta = resolve_component(
        structure.lta_percent,
        structure.travel_allowance,
        structure.basic_salary,
        prorated_basic,
        attendance_ratio,
        FixedFallback::None,
    );
    let fixed_allowance = resolve_component(
        structure.fixed_allowance_percent,
        structure.fixed_allowance,
        structure.basic_salary,
        prorated_basic,
        attendance_ratio,
        FixedFallback::Prorated,
    );

    let gross_total = round2(
        prorated_basic
            + hra.amount
            + standard_allowance.amount
            + lta.amount
            + performance_bonus.amount
            + fixed_allowance.amount,
    );

    let pf_employee = resolve_component(
        structure.pf_employee_percent,
        structure.pf_employee,
        structure.basic_salary,
        prorated_basic,
        attendance_ratio,
        FixedFallback::Prorated,
    );
    let tax = professional_tax();
    let other_deductions = resolve_component(
        structure.other_deductions_percent,
        structure.other_deductions,
        structure.basic_salary,
        prorated_basic,
        attendance_ratio,
        FixedFallback::Prorated,
    );

    let deductions_total = round2(pf_employee.amount + tax + other_deductions.amount);
    let net_amount = round2(gross_total - deductions_total);

    // The basic line's rate is the percent of full entitlement actually paid.
    let basic_rate = if structure.basic_salary > Decimal::ZERO {
        round2(prorated_basic / structure.basic_salary * Decimal::ONE_HUNDRED)
    } else {
        Decimal::ONE_HUNDRED
    };
    let tax_rate = if prorated_basic > Decimal::ZERO {
        round2(tax / prorated_basic * Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    let gross_earnings = vec![
        PayLine {
            rule_name: RULE_BASIC_SALARY.to_string(),
            rate: basic_rate,
            amount: prorated_basic,
        },
        PayLine {
            rule_name: RULE_HOUSE_RENT_ALLOWANCE.to_string(),
            rate: hra.rate,
            amount: hra.amount,
        },
        PayLine {
            rule_name: RULE_STANDARD_ALLOWANCE.to_string(),
            rate: standard_allowance.rate,
            amount: standard_allowance.amount,
        },
        PayLine {
            rule_name: RULE_PERFORMANCE_BONUS.to_string(),
            rate: performance_bonus.rate,
            amount: performance_bonus.amount,
        },
        PayLine {
            rule_name: RULE_LEAVE_TRAVEL_ALLOWANCE.to_string(),
            rate: lta.rate,
            amount: lta.amount,
        },
        PayLine {
            rule_name: RULE_FIXED_ALLOWANCE.to_string(),
            rate: fixed_allowance.rate,
            amount: fixed_allowance.amount,
        },
    ];

    let deductions = vec![
        PayLine {
            rule_name: RULE_PF_EMPLOYEE.to_string(),
            rate: pf_employee.rate,
            amount: -pf_employee.amount,
        },
        PayLine {
            rule_name: RULE_PROFESSIONAL_TAX.to_string(),
            rate: tax_rate,
            amount: -tax,
        },
        PayLine {
            rule_name: RULE_OTHER_DEDUCTIONS.to_string(),
            rate: other_deductions.rate,
            amount: -other_deductions.amount,
        },
    ];

    SalaryComputation {
        gross_earnings,
        deductions,
        gross_total,
        deductions_total,
        net_amount,
        computed_base_salary: prorated_basic,
        attendance_ratio,
        working_days,
        days_present: counts.days_present,
        total_paid_leaves: counts.total_paid_leaves,
        total_working_days: counts.total_working_days,
    }
}
