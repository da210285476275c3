//! HTTP API module for the payroll finishing engine.
//!
//! This module provides the REST API endpoints for finishing biweekly
//! payroll batches and reporting union benefit costs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{FinishingRequest, UnionBenefitRequest};
pub use response::ApiError;
pub use state::AppState;
