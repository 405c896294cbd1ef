//! HTTP API module for the shift schedule engine.
//!
//! This module exposes the week report endpoint used by presentation code
//! to turn extracted schedule text into day summaries and hour totals.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DayRequest, EmployeeRequest, WeekReportRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
