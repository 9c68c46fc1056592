//! Salary structure model.
//!
//! This module defines the [`SalaryStructure`] type: one effective-dated
//! version of an employee's pay configuration, combining fixed amounts and
//! optional percentages for each pay component.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One version of an employee's pay configuration.
///
/// Structures are versioned by an effective date range: `effective_from` is
/// inclusive and `effective_to` is inclusive when present, open-ended when
/// `None`. The storage layer guarantees that ranges for a given employee do
/// not overlap.
///
/// Every component carries a fixed amount and, optionally, a percent of the
/// pro-rated basic salary. When a percent is present it takes precedence over
/// the fixed amount. All monetary fields default to zero when absent so that
/// sparse storage rows never make the computation fail.
///
/// # Example
///
/// ```
/// use payslip_engine::models::SalaryStructure;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let structure = SalaryStructure {
///     effective_from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     effective_to: None,
///     basic_salary: Decimal::new(30000, 0),
///     hra_percent: Some(Decimal::new(20, 0)),
///     ..SalaryStructure::empty(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
/// };
/// assert!(structure.covers(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// First date this structure is in effect (inclusive).
    pub effective_from: NaiveDate,
    /// Last date this structure is in effect (inclusive); open-ended if `None`.
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
    /// Base monthly amount.
    #[serde(default)]
    pub basic_salary: Decimal,
    /// Fixed house rent allowance amount.
    #[serde(default)]
    pub house_rent_allowance: Decimal,
    /// Fixed standard allowance amount.
    #[serde(default)]
    pub standard_allowance: Decimal,
    /// Fixed performance bonus amount.
    #[serde(default)]
    pub performance_bonus: Decimal,
    /// Fixed leave travel allowance amount.
    #[serde(default)]
    pub travel_allowance: Decimal,
    /// Fixed miscellaneous allowance amount.
    #[serde(default)]
    pub fixed_allowance: Decimal,
    /// Fixed employee provident fund contribution.
    #[serde(default)]
    pub pf_employee: Decimal,
    /// Fixed other-deductions amount.
    #[serde(default)]
    pub other_deductions: Decimal,
    /// Stored professional tax amount. The computation does not read this
    /// field; the statutory flat amount is charged regardless.
    #[serde(default)]
    pub professional_tax: Decimal,
    /// House rent allowance as a percent of pro-rated basic.
    #[serde(default)]
    pub hra_percent: Option<Decimal>,
    /// Standard allowance as a percent of pro-rated basic.
    #[serde(default)]
    pub standard_allowance_percent: Option<Decimal>,
    /// Performance bonus as a percent of pro-rated basic.
    #[serde(default)]
    pub performance_bonus_percent: Option<Decimal>,
    /// Leave travel allowance as a percent of pro-rated basic.
    #[serde(default)]
    pub lta_percent: Option<Decimal>,
    /// Miscellaneous allowance as a percent of pro-rated basic.
    #[serde(default)]
    pub fixed_allowance_percent: Option<Decimal>,
    /// Employee provident fund as a percent of pro-rated basic.
    #[serde(default)]
    pub pf_employee_percent: Option<Decimal>,
    /// Other deductions as a percent of pro-rated basic.
    #[serde(default)]
    pub other_deductions_percent: Option<Decimal>,
}

impl SalaryStructure {
    /// Creates a structure with all amounts zero and no percent overrides,
    /// effective from the given date with no end date.
    ///
    /// Useful as a base for struct-update syntax in callers and tests.
    pub fn empty(effective_from: NaiveDate) -> Self {
        Self {
            effective_from,
            effective_to: None,
            basic_salary: Decimal::ZERO,
            house_rent_allowance: Decimal::ZERO,
            standard_allowance: Decimal::ZERO,
            performance_bonus: Decimal::ZERO,
            travel_allowance: Decimal::ZERO,
            fixed_allowance: Decimal::ZERO,
            pf_employee: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
            professional_tax: Decimal::ZERO,
            hra_percent: None,
            standard_allowance_percent: None,
            performance_bonus_percent: None,
            lta_percent: None,
            fixed_allowance_percent: None,
            pf_employee_percent: None,
            other_deductions_percent: None,
        }
    }

    /// Returns true if this structure is in effect on the given date.
    ///
    /// # Example
    ///
    /// ```
    /// use payslip_engine::models::SalaryStructure;
    /// use chrono::NaiveDate;
    ///
    /// let mut structure = SalaryStructure::empty(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    /// structure.effective_to = Some(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
    ///
    /// assert!(structure.covers(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()));
    /// assert!(!structure.covers(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()));
    /// ```
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.effective_from && self.effective_to.is_none_or(|to| date <= to)
    }
}
