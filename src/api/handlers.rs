//! HTTP request handlers for the Payslip Computation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_salary, derive_attendance_counts, select_structure};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, LeaveRecord, PayPeriod, SalaryStructure};

use super::request::PayslipRequest;
use super::response::{ApiError, ApiErrorResponse, PayslipResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payslip", post(payslip_handler))
        .with_state(state)
}

/// Handler for POST /payslip endpoint.
///
/// Accepts a payslip request and returns the computed salary breakdown.
async fn payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let employee_id = request.employee_id;
    let pay_period: PayPeriod = request.pay_period.into();
    let structures: Vec<SalaryStructure> = request
        .salary_structures
        .into_iter()
        .map(Into::into)
        .collect();
    let attendance: Vec<AttendanceRecord> =
        request.attendance.into_iter().map(Into::into).collect();
    let leaves: Vec<LeaveRecord> = request.leaves.into_iter().map(Into::into).collect();

    // Compute the payslip
    match build_payslip(
        &employee_id,
        &pay_period,
        &structures,
        &attendance,
        &leaves,
        state.config(),
    ) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %response.employee_id,
                gross_total = %response.computation.gross_total,
                net_amount = %response.computation.net_amount,
                "Payslip computed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payslip computation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Builds the payslip response for an employee's pay period.
fn build_payslip(
    employee_id: &str,
    pay_period: &PayPeriod,
    structures: &[SalaryStructure],
    attendance: &[AttendanceRecord],
    leaves: &[LeaveRecord],
    config: &ConfigLoader,
) -> EngineResult<PayslipResponse> {
    if !pay_period.is_valid() {
        return Err(EngineError::InvalidPayPeriod {
            message: format!(
                "end date {} is before start date {}",
                pay_period.end_date, pay_period.start_date
            ),
        });
    }

    // The structure in effect on the period's first day governs the payslip.
    let structure = select_structure(structures, pay_period.start_date).ok_or(
        EngineError::StructureNotFound {
            date: pay_period.start_date,
        },
    )?;

    let counts =
        derive_attendance_counts(attendance, leaves, pay_period, config.total_working_days());
    let computation = compute_salary(structure, &counts);

    Ok(PayslipResponse {
        payslip_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        organisation: config.organisation().to_string(),
        employee_id: employee_id.to_string(),
        pay_period: pay_period.clone(),
        computation,
    })
}
