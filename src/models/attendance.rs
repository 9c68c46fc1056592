//! Attendance and leave models.
//!
//! This module defines the attendance and leave record types consumed by the
//! engine's day-count derivation, and the [`AttendanceCounts`] value that the
//! salary computation itself takes as input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default number of working days a full pay period is pro-rated against.
///
/// This is a payroll policy constant, not the calendar length of the period.
pub const DEFAULT_TOTAL_WORKING_DAYS: u32 = 22;

/// The recorded attendance outcome for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee was present.
    Present,
    /// The employee was absent without leave.
    Absent,
    /// The employee was away on leave (counted via leave records, not here).
    OnLeave,
}

/// A single day's attendance record for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The date the record applies to.
    pub date: NaiveDate,
    /// The recorded attendance status.
    pub status: AttendanceStatus,
}

/// The category of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid sick leave.
    Sick,
    /// Paid vacation leave.
    Vacation,
    /// Paid personal leave.
    Personal,
    /// Unpaid leave; never counts toward paid leave days.
    Unpaid,
}

impl LeaveType {
    /// Returns true if days of this leave type are paid.
    ///
    /// # Example
    ///
    /// ```
    /// use payslip_engine::models::LeaveType;
    ///
    /// assert!(LeaveType::Sick.is_paid());
    /// assert!(!LeaveType::Unpaid.is_paid());
    /// ```
    pub fn is_paid(&self) -> bool {
        !matches!(self, LeaveType::Unpaid)
    }
}

/// The approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved; paid types count toward paid leave days.
    Approved,
    /// Rejected.
    Rejected,
}

/// A leave request spanning an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// The approval state of the request.
    pub status: LeaveStatus,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
}

/// Attendance-derived day counts for a pay period.
///
/// This is the attendance input to the salary computation: how many days the
/// employee was present, how many approved paid leave days overlapped the
/// period, and the policy denominator the two are pro-rated against.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{AttendanceCounts, DEFAULT_TOTAL_WORKING_DAYS};
///
/// let counts = AttendanceCounts::new(20, 2);
/// assert_eq!(counts.working_days(), 22);
/// assert_eq!(counts.total_working_days, DEFAULT_TOTAL_WORKING_DAYS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceCounts {
    /// Days with attendance status "present" within the pay period.
    pub days_present: u32,
    /// Approved paid leave days overlapping the pay period.
    pub total_paid_leaves: u32,
    /// Policy denominator the counts are pro-rated against.
    pub total_working_days: u32,
}

impl AttendanceCounts {
    /// Creates counts pro-rated against the default working-day denominator.
    pub fn new(days_present: u32, total_paid_leaves: u32) -> Self {
        Self::with_total_working_days(days_present, total_paid_leaves, DEFAULT_TOTAL_WORKING_DAYS)
    }

    /// Creates counts with an explicit working-day denominator.
    pub fn with_total_working_days(
        days_present: u32,
        total_paid_leaves: u32,
        total_working_days: u32,
    ) -> Self {
        Self {
            days_present,
            total_paid_leaves,
            total_working_days,
        }
    }

    /// Days counted as worked: present days plus approved paid leave days.
    pub fn working_days(&self) -> u32 {
        self.days_present + self.total_paid_leaves
    }
}
