//! Configuration types for payroll policy.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the YAML policy file.

use serde::Deserialize;

/// Payroll policy loaded from `policy.yaml`.
///
/// The policy carries the values that are organisational choices rather than
/// engine rules: the organisation's display name and the working-day
/// denominator a full pay period is pro-rated against. Statutory amounts
/// such as professional tax are engine policy and do not appear here.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollPolicy {
    /// The organisation the payslips are issued for.
    pub organisation: String,
    /// Denominator used when pro-rating pay by attendance.
    pub total_working_days: u32,
}
