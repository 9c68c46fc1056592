//! Attendance day-count derivation.
//!
//! This module turns raw attendance and leave records into the
//! [`AttendanceCounts`] the salary computation consumes: present days inside
//! the pay period, and approved paid leave days overlapping it.

use crate::models::{
    AttendanceCounts, AttendanceRecord, AttendanceStatus, LeaveRecord, LeaveStatus, PayPeriod,
};

/// Counts attendance records marked present within the pay period.
///
/// Records outside the period and records with any other status are ignored.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::count_days_present;
/// use payslip_engine::models::{AttendanceRecord, AttendanceStatus, PayPeriod};
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
/// };
/// let records = vec![AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     status: AttendanceStatus::Present,
/// }];
///
/// assert_eq!(count_days_present(&records, &period), 1);
/// ```
pub fn count_days_present(records: &[AttendanceRecord], period: &PayPeriod) -> u32 {
    records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Present && period.contains_date(r.date))
        .count() as u32
}

/// Sums approved paid leave days overlapping the pay period.
///
/// Each qualifying leave contributes its inclusive-day overlap with the
/// period: `min(leave end, period end) - max(leave start, period start) + 1`
/// days, clamped to zero when the ranges do not intersect. Unpaid leave and
/// requests that are not approved contribute nothing.
pub fn count_paid_leave_days(leaves: &[LeaveRecord], period: &PayPeriod) -> u32 {
    leaves
        .iter()
        .filter(|l| l.status == LeaveStatus::Approved && l.leave_type.is_paid())
        .map(|l| {
            let overlap_start = l.start_date.max(period.start_date);
            let overlap_end = l.end_date.min(period.end_date);
            let days = (overlap_end - overlap_start).num_days() + 1;
            if days > 0 { days as u32 } else { 0 }
        })
        .sum()
}

/// Derives the attendance counts for a pay period.
///
/// Combines [`count_days_present`] and [`count_paid_leave_days`] with the
/// configured working-day denominator.
pub fn derive_attendance_counts(
    records: &[AttendanceRecord],
    leaves: &[LeaveRecord],
    period: &PayPeriod,
    total_working_days: u32,
) -> AttendanceCounts {
    AttendanceCounts::with_total_working_days(
        count_days_present(records, period),
        count_paid_leave_days(leaves, period),
        total_working_days,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeaveType;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn april() -> PayPeriod {
        PayPeriod {
            start_date: date("2025-04-01"),
            end_date: date("2025-04-30"),
        }
    }

    fn present(s: &str) -> AttendanceRecord {
        AttendanceRecord {
            date: date(s),
            status: AttendanceStatus::Present,
        }
    }

    fn leave(leave_type: LeaveType, status: LeaveStatus, start: &str, end: &str) -> LeaveRecord {
        LeaveRecord {
            leave_type,
            status,
            start_date: date(start),
            end_date: date(end),
        }
    }

    /// AC-001: only present days inside the period count
    #[test]
    fn test_only_present_days_inside_period_count() {
        let records = vec![
            present("2025-04-01"),
            present("2025-04-02"),
            AttendanceRecord {
                date: date("2025-04-03"),
                status: AttendanceStatus::Absent,
            },
            AttendanceRecord {
                date: date("2025-04-04"),
                status: AttendanceStatus::OnLeave,
            },
            present("2025-03-31"),
            present("2025-05-01"),
        ];

        assert_eq!(count_days_present(&records, &april()), 2);
    }

    /// AC-002: leave fully inside the period counts every day
    #[test]
    fn test_leave_fully_inside_period() {
        let leaves = vec![leave(
            LeaveType::Vacation,
            LeaveStatus::Approved,
            "2025-04-07",
            "2025-04-09",
        )];

        assert_eq!(count_paid_leave_days(&leaves, &april()), 3);
    }

    /// AC-003: leave spanning the period start is clipped
    #[test]
    fn test_leave_clipped_at_period_start() {
        let leaves = vec![leave(
            LeaveType::Sick,
            LeaveStatus::Approved,
            "2025-03-28",
            "2025-04-02",
        )];

        // only 2025-04-01 and 2025-04-02 fall inside the period
        assert_eq!(count_paid_leave_days(&leaves, &april()), 2);
    }

    /// AC-004: leave spanning the period end is clipped
    #[test]
    fn test_leave_clipped_at_period_end() {
        let leaves = vec![leave(
            LeaveType::Personal,
            LeaveStatus::Approved,
            "2025-04-29",
            "2025-05-05",
        )];

        assert_eq!(count_paid_leave_days(&leaves, &april()), 2);
    }

    /// AC-005: leave outside the period contributes nothing
    #[test]
    fn test_leave_outside_period_is_zero() {
        let leaves = vec![leave(
            LeaveType::Vacation,
            LeaveStatus::Approved,
            "2025-05-10",
            "2025-05-12",
        )];

        assert_eq!(count_paid_leave_days(&leaves, &april()), 0);
    }

    /// AC-006: unpaid and non-approved leave are excluded
    #[test]
    fn test_unpaid_and_unapproved_leave_excluded() {
        let leaves = vec![
            leave(LeaveType::Unpaid, LeaveStatus::Approved, "2025-04-07", "2025-04-09"),
            leave(LeaveType::Sick, LeaveStatus::Pending, "2025-04-10", "2025-04-11"),
            leave(LeaveType::Vacation, LeaveStatus::Rejected, "2025-04-14", "2025-04-15"),
        ];

        assert_eq!(count_paid_leave_days(&leaves, &april()), 0);
    }

    /// AC-007: single-day leave on a boundary counts once
    #[test]
    fn test_single_day_leave_on_boundary() {
        let leaves = vec![
            leave(LeaveType::Sick, LeaveStatus::Approved, "2025-04-01", "2025-04-01"),
            leave(LeaveType::Sick, LeaveStatus::Approved, "2025-04-30", "2025-04-30"),
        ];

        assert_eq!(count_paid_leave_days(&leaves, &april()), 2);
    }

    #[test]
    fn test_multiple_leaves_sum() {
        let leaves = vec![
            leave(LeaveType::Sick, LeaveStatus::Approved, "2025-04-02", "2025-04-03"),
            leave(LeaveType::Vacation, LeaveStatus::Approved, "2025-04-21", "2025-04-25"),
        ];

        assert_eq!(count_paid_leave_days(&leaves, &april()), 7);
    }

    #[test]
    fn test_derive_attendance_counts_combines_sources() {
        let records = vec![present("2025-04-01"), present("2025-04-02")];
        let leaves = vec![leave(
            LeaveType::Personal,
            LeaveStatus::Approved,
            "2025-04-03",
            "2025-04-04",
        )];

        let counts = derive_attendance_counts(&records, &leaves, &april(), 22);
        assert_eq!(counts.days_present, 2);
        assert_eq!(counts.total_paid_leaves, 2);
        assert_eq!(counts.total_working_days, 22);
        assert_eq!(counts.working_days(), 4);
    }

    #[test]
    fn test_empty_inputs_yield_zero_counts() {
        let counts = derive_attendance_counts(&[], &[], &april(), 22);
        assert_eq!(counts.days_present, 0);
        assert_eq!(counts.total_paid_leaves, 0);
    }
}
