//! Effective-dated salary structure lookup.
//!
//! This module selects which version of an employee's salary structure
//! applies on a given date, mirroring the storage layer's versioning rules.

use chrono::NaiveDate;

use crate::models::SalaryStructure;

/// Selects the salary structure in effect on the given date.
///
/// A structure applies when its effective range covers the date. The storage
/// layer guarantees that ranges do not overlap; if overlapping versions are
/// nevertheless supplied, the one with the most recent `effective_from`
/// wins.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::select_structure;
/// use payslip_engine::models::SalaryStructure;
/// use chrono::NaiveDate;
///
/// let structures = vec![
///     SalaryStructure::empty(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
///     SalaryStructure::empty(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
/// ];
///
/// let selected =
///     select_structure(&structures, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()).unwrap();
/// assert_eq!(
///     selected.effective_from,
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
/// );
/// ```
pub fn select_structure(
    structures: &[SalaryStructure],
    on_date: NaiveDate,
) -> Option<&SalaryStructure> {
    structures
        .iter()
        .filter(|s| s.covers(on_date))
        .max_by_key(|s| s.effective_from)
}
