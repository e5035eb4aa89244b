//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PayrollRequest, calculate_payroll, tax_brackets};
use crate::error::EngineError;
use crate::models::{EmployeeId, EmployeeUpdate, NewEmployee, PayrollRecordId, UpsertStatus};
use crate::store::{EmployeeRepository, PayrollStore};

use super::request::{CalculatePayrollRequest, HistoryQuery, parse_amount};
use super::response::{ApiError, ApiErrorResponse, HealthResponse, TaxBracketsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints mounted under `/api`.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health_handler))
        .route(
            "/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/employees/:id",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route("/calculate-payroll", post(calculate_payroll_handler))
        .route("/payroll-history", get(list_history_handler))
        .route(
            "/payroll-history/:id",
            get(get_history_handler).delete(delete_history_handler),
        )
        .route("/tax-brackets", get(tax_brackets_handler));

    Router::new().nest("/api", api).with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Maps a body rejection to the API error taxonomy.
///
/// Missing fields are validation errors and anything else is malformed JSON.
/// Salary amounts never reach this point since they are parsed from raw
/// values by [`parse_amount`].
fn json_rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            data_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
}

fn data_error(message: String) -> ApiError {
    if message.contains("missing field") {
        ApiError::validation_error(message)
    } else {
        ApiError::malformed_json(message)
    }
}

/// Decodes an employee body whose `monthly_salary` is parsed on its own.
///
/// A non-numeric salary is `InvalidInput`; the remaining fields follow the
/// same rules as any other JSON body.
fn decode_employee_body<T: DeserializeOwned>(
    mut body: Value,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    if let Some(raw) = body.get_mut("monthly_salary").filter(|raw| !raw.is_null()) {
        let salary = parse_amount("monthly_salary", raw).map_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid salary");
            ApiErrorResponse::from(err)
        })?;
        *raw = Value::String(salary.to_string());
    }

    serde_json::from_value(body).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "JSON data error");
        ApiErrorResponse::new(StatusCode::BAD_REQUEST, data_error(err.to_string()))
    })
}

/// Non-numeric ids cannot name a record, so they are reported as absent.
fn path_rejection_error(rejection: PathRejection, correlation_id: Uuid) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %rejection, "Invalid path id");
    ApiErrorResponse::new(
        StatusCode::NOT_FOUND,
        ApiError::new("NOT_FOUND", rejection.body_text()),
    )
}

fn engine_error(error: EngineError, correlation_id: Uuid) -> Response {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    error_response(error.into())
}

/// Handler for GET /api/health.
async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse::ok())
}

/// Handler for GET /api/employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().list_active_employees() {
        Ok(employees) => json_response(StatusCode::OK, employees),
        Err(err) => engine_error(err, correlation_id),
    }
}

/// Handler for POST /api/employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let new_employee: NewEmployee = match payload {
        Ok(Json(body)) => match decode_employee_body(body, correlation_id) {
            Ok(new_employee) => new_employee,
            Err(error) => return error_response(error),
        },
        Err(rejection) => return error_response(json_rejection_error(rejection, correlation_id)),
    };

    match state.store().create_employee(new_employee) {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = employee.id,
                "Employee created"
            );
            json_response(StatusCode::CREATED, employee)
        }
        Err(err) => engine_error(err, correlation_id),
    }
}

/// Handler for GET /api/employees/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(id) = match id {
        Ok(path) => path,
        Err(rejection) => return error_response(path_rejection_error(rejection, correlation_id)),
    };

    match state.store().get_employee(id) {
        Ok(Some(employee)) => json_response(StatusCode::OK, employee),
        Ok(None) => engine_error(
            EngineError::NotFound {
                entity: "Employee",
                id,
            },
            correlation_id,
        ),
        Err(err) => engine_error(err, correlation_id),
    }
}

/// Handler for PUT /api/employees/:id.
///
/// Only the fields present in the body are changed.
async fn update_employee_handler(
    State(state): State<AppState>,
    id: Result<Path<EmployeeId>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(id) = match id {
        Ok(path) => path,
        Err(rejection) => return error_response(path_rejection_error(rejection, correlation_id)),
    };
    let update: EmployeeUpdate = match payload {
        Ok(Json(body)) => match decode_employee_body(body, correlation_id) {
            Ok(update) => update,
            Err(error) => return error_response(error),
        },
        Err(rejection) => return error_response(json_rejection_error(rejection, correlation_id)),
    };

    match state.store().update_employee(id, update) {
        Ok(employee) => {
            info!(correlation_id = %correlation_id, employee_id = id, "Employee updated");
            json_response(StatusCode::OK, employee)
        }
        Err(err) => engine_error(err, correlation_id),
    }
}

/// Handler for DELETE /api/employees/:id.
///
/// Deactivates the employee; payroll history is kept.
async fn delete_employee_handler(
    State(state): State<AppState>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(id) = match id {
        Ok(path) => path,
        Err(rejection) => return error_response(path_rejection_error(rejection, correlation_id)),
    };

    match state.store().deactivate_employee(id) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, employee_id = id, "Employee deactivated");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => engine_error(err, correlation_id),
    }
}

/// Handler for POST /api/calculate-payroll.
///
/// Responds 201 when a new record was stored and 200 when an existing record
/// for the same employee and period was replaced.
async fn calculate_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculatePayrollRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll calculation request");

    let request = match payload {
        Ok(Json(req)) => match PayrollRequest::try_from(req) {
            Ok(request) => request,
            Err(err) => return engine_error(err, correlation_id),
        },
        Err(rejection) => return error_response(json_rejection_error(rejection, correlation_id)),
    };

    let store = state.store();
    match calculate_payroll(store, store, &request) {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %outcome.calculation_id,
                record_id = outcome.record.id,
                net_pay = %outcome.record.breakdown.net_pay(),
                duration_us = outcome.audit_trace.duration_us,
                "Payroll calculation completed successfully"
            );
            let status = match outcome.status {
                UpsertStatus::Created => StatusCode::CREATED,
                UpsertStatus::Updated => StatusCode::OK,
            };
            json_response(status, outcome)
        }
        Err(err) => engine_error(err, correlation_id),
    }
}

/// Handler for GET /api/payroll-history.
async fn list_history_handler(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid history query");
            return error_response(ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(rejection.body_text()),
            ));
        }
    };

    match state.store().list_records(&query.into()) {
        Ok(records) => json_response(StatusCode::OK, records),
        Err(err) => engine_error(err, correlation_id),
    }
}

/// Handler for GET /api/payroll-history/:id.
async fn get_history_handler(
    State(state): State<AppState>,
    id: Result<Path<PayrollRecordId>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(id) = match id {
        Ok(path) => path,
        Err(rejection) => return error_response(path_rejection_error(rejection, correlation_id)),
    };

    match state.store().find_record(id) {
        Ok(Some(record)) => json_response(StatusCode::OK, record),
        Ok(None) => engine_error(
            EngineError::NotFound {
                entity: "Payroll record",
                id,
            },
            correlation_id,
        ),
        Err(err) => engine_error(err, correlation_id),
    }
}

/// Handler for DELETE /api/payroll-history/:id.
async fn delete_history_handler(
    State(state): State<AppState>,
    id: Result<Path<PayrollRecordId>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Path(id) = match id {
        Ok(path) => path,
        Err(rejection) => return error_response(path_rejection_error(rejection, correlation_id)),
    };

    match state.store().delete_record(id) {
        Ok(true) => {
            info!(correlation_id = %correlation_id, record_id = id, "Payroll record deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => engine_error(
            EngineError::NotFound {
                entity: "Payroll record",
                id,
            },
            correlation_id,
        ),
        Err(err) => engine_error(err, correlation_id),
    }
}

/// Handler for GET /api/tax-brackets.
async fn tax_brackets_handler() -> Response {
    json_response(
        StatusCode::OK,
        TaxBracketsResponse {
            brackets: tax_brackets(),
        },
    )
}
