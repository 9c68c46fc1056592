//! HTTP API module for the Payslip Computation Engine.
//!
//! This module provides the REST endpoint for computing payslip breakdowns
//! from salary structures and attendance data.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayslipRequest;
pub use response::{ApiError, PayslipResponse};
pub use state::AppState;
