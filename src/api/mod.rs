//! HTTP API module for the attendance payroll engine.
//!
//! This module provides the REST API endpoints for reconciling attendance
//! into weekly payroll and for maintaining workers and their daily logs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreateLogRequest, CreateWorkerRequest, PayrollRequest, UpdateDailyPayRequest,
    UpdateLogRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
