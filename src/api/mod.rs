//! HTTP API module for the payroll deduction engine.
//!
//! This module provides the REST endpoints for managing employees,
//! calculating payroll and browsing payroll history.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculatePayrollRequest, HistoryQuery};
pub use response::{ApiError, ApiErrorResponse, HealthResponse, TaxBracketsResponse};
pub use state::AppState;
