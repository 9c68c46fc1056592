//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type that defines the date window
//! a payslip is computed for.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a pay period with an inclusive date range.
///
/// A pay period defines the time window for payslip computation. Attendance
/// and leave records are counted against this window, and the salary
/// structure in effect on the start date is the one applied.
///
/// # Example
///
/// ```
/// use payslip_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()));
/// assert!(period.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    ///
    /// # Example
    ///
    /// ```
    /// use payslip_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
    /// };
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())); // start date
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 4, 30).unwrap())); // end date
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap())); // before
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if the period's end date is on or after its start date.
    pub fn is_valid(&self) -> bool {
        self.end_date >= self.start_date
    }
}
