//! Request types for the Payslip Computation Engine API.
//!
//! This module defines the JSON request structures for the `/payslip`
//! endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceRecord, AttendanceStatus, LeaveRecord, LeaveStatus, LeaveType, PayPeriod,
    SalaryStructure,
};

/// Request body for the `/payslip` endpoint.
///
/// Contains everything needed to compute a payslip for one employee and pay
/// period: the employee's salary structure versions and their attendance and
/// leave records. The caller (normally the storage layer's query results) is
/// free to send more records than the period needs; anything outside the
/// period is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// Identifier of the employee the payslip is for.
    pub employee_id: String,
    /// The pay period to compute for.
    pub pay_period: PayPeriodRequest,
    /// The employee's salary structure versions.
    pub salary_structures: Vec<SalaryStructureRequest>,
    /// Daily attendance records.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecordRequest>,
    /// Leave requests.
    #[serde(default)]
    pub leaves: Vec<LeaveRecordRequest>,
}

/// Pay period information in a payslip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

/// One salary structure version in a payslip request.
///
/// Mirrors [`SalaryStructure`]; every monetary field defaults to zero and
/// every percent to absent, so sparse storage rows deserialize cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryStructureRequest {
    /// First date this structure is in effect (inclusive).
    pub effective_from: NaiveDate,
    /// Last date this structure is in effect (inclusive), if bounded.
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
    /// Stored professional tax amount (ignored by the computation).
    #[serde(default)]
    pub professional_tax: Decimal,
    /// House rent allowance percent.
    #[serde(default)]
    pub hra_percent: Option<Decimal>,
    /// Standard allowance percent.
    #[serde(default)]
    pub standard_allowance_percent: Option<Decimal>,
    /// Performance bonus percent.
    #[serde(default)]
    pub performance_bonus_percent: Option<Decimal>,
    /// Leave travel allowance percent.
    #[serde(default)]
    pub lta_percent: Option<Decimal>,
    /// Miscellaneous allowance percent.
    #[serde(default)]
    pub fixed_allowance_percent: Option<Decimal>,
    /// Employee provident fund percent.
    #[serde(default)]
    pub pf_employee_percent: Option<Decimal>,
    /// Other deductions percent.
    #[serde(default)]
    pub other_deductions_percent: Option<Decimal>,
}

/// Attendance record information in a payslip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
    /// The date the record applies to.
    pub date: NaiveDate,
    /// The recorded attendance status.
    pub status: AttendanceStatus,
}

/// Leave record information in a payslip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRecordRequest {
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// The approval state of the request.
    pub status: LeaveStatus,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<SalaryStructureRequest> for SalaryStructure {
    fn from(req: SalaryStructureRequest) -> Self {
        SalaryStructure {
            effective_from: req.effective_from,
            effective_to: req.effective_to,
            basic_salary: req.basic_salary,
            house_rent_allowance: req.house_rent_allowance,
            standard_allowance: req.standard_allowance,
            performance_bonus: req.performance_bonus,
            travel_allowance: req.travel_allowance,
            fixed_allowance: req.fixed_allowance,
            pf_employee: req.pf_employee,
            other_deductions: req.other_deductions,
            professional_tax: req.professional_tax,
            hra_percent: req.hra_percent,
            standard_allowance_percent: req.standard_allowance_percent,
            performance_bonus_percent: req.performance_bonus_percent,
            lta_percent: req.lta_percent,
            fixed_allowance_percent: req.fixed_allowance_percent,
            pf_employee_percent: req.pf_employee_percent,
            other_deductions_percent: req.other_deductions_percent,
        }
    }
}

impl From<AttendanceRecordRequest> for AttendanceRecord {
    fn from(req: AttendanceRecordRequest) -> Self {
        AttendanceRecord {
            date: req.date,
            status: req.status,
        }
    }
}

impl From<LeaveRecordRequest> for LeaveRecord {
    fn from(req: LeaveRecordRequest) -> Self {
        LeaveRecord {
            leave_type: req.leave_type,
            status: req.status,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_payslip_request() {
        let json = r#"{
            "employee_id": "emp_001",
            "pay_period": {
                "start_date": "2025-04-01",
                "end_date": "2025-04-30"
            },
            "salary_structures": [
                {
                    "effective_from": "2025-01-01",
                    "basic_salary": "30000",
                    "hra_percent": "20"
                }
            ],
            "attendance": [
                { "date": "2025-04-01", "status": "present" }
            ],
            "leaves": [
                {
                    "leave_type": "sick",
                    "status": "approved",
                    "start_date": "2025-04-02",
                    "end_date": "2025-04-03"
                }
            ]
        }"#;

        let request: PayslipRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id, "emp_001");
        assert_eq!(request.salary_structures.len(), 1);
        assert_eq!(request.attendance.len(), 1);
        assert_eq!(request.leaves.len(), 1);
    }

    #[test]
    fn test_attendance_and_leaves_default_to_empty() {
        let json = r#"{
            "employee_id": "emp_001",
            "pay_period": {
                "start_date": "2025-04-01",
                "end_date": "2025-04-30"
            },
            "salary_structures": []
        }"#;

        let request: PayslipRequest = serde_json::from_str(json).unwrap();
        assert!(request.attendance.is_empty());
        assert!(request.leaves.is_empty());
    }

    #[test]
    fn test_structure_conversion_preserves_fields() {
        let req = SalaryStructureRequest {
            effective_from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            effective_to: None,
            basic_salary: Decimal::from_str("30000").unwrap(),
            house_rent_allowance: Decimal::ZERO,
            standard_allowance: Decimal::ZERO,
            performance_bonus: Decimal::ZERO,
            travel_allowance: Decimal::ZERO,
            fixed_allowance: Decimal::ZERO,
            pf_employee: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
            professional_tax: Decimal::ZERO,
            hra_percent: Some(Decimal::from_str("20").unwrap()),
            standard_allowance_percent: None,
            performance_bonus_percent: None,
            lta_percent: None,
            fixed_allowance_percent: None,
            pf_employee_percent: None,
            other_deductions_percent: None,
        };

        let structure: SalaryStructure = req.into();
        assert_eq!(structure.basic_salary, Decimal::from_str("30000").unwrap());
        assert_eq!(
            structure.hra_percent,
            Some(Decimal::from_str("20").unwrap())
        );
    }

    #[test]
    fn test_pay_period_conversion() {
        let req = PayPeriodRequest {
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
        };

        let period: PayPeriod = req.into();
        assert!(period.is_valid());
        assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()));
    }
}
