//! Core data models for the Payslip Computation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod computation;
mod pay_period;
mod salary_structure;

pub use attendance::{
    AttendanceCounts, AttendanceRecord, AttendanceStatus, DEFAULT_TOTAL_WORKING_DAYS, LeaveRecord,
    LeaveStatus, LeaveType,
};
pub use computation::{PayLine, SalaryComputation};
pub use pay_period::PayPeriod;
pub use salary_structure::SalaryStructure;
