//! Calculation logic for the Payslip Computation Engine.
//!
//! This module contains the pure functions behind payslip figures: monetary
//! rounding, per-component percent resolution, the salary computation
//! pipeline itself, attendance day-count derivation, and effective-dated
//! salary structure lookup.

mod attendance_counts;
mod component;
mod engine;
mod rounding;
mod structure_lookup;

pub use attendance_counts::{count_days_present, count_paid_leave_days, derive_attendance_counts};
pub use component::{FixedFallback, ResolvedComponent, resolve_component};
pub use engine::{
    RULE_BASIC_SALARY, RULE_FIXED_ALLOWANCE, RULE_HOUSE_RENT_ALLOWANCE,
    RULE_LEAVE_TRAVEL_ALLOWANCE, RULE_OTHER_DEDUCTIONS, RULE_PERFORMANCE_BONUS, RULE_PF_EMPLOYEE,
    RULE_PROFESSIONAL_TAX, RULE_STANDARD_ALLOWANCE, compute_salary, professional_tax,
};
pub use rounding::round2;
pub use structure_lookup::select_structure;
