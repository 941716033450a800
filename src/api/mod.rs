//! HTTP API for the Deployment Roster Engine.
//!
//! A thin `axum` layer over the pipeline: endpoints for parsing schedule
//! text, evaluating and rendering staffing rules, and importing staff
//! CSVs. All domain behavior lives in the library modules; handlers only
//! translate between HTTP and engine types.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DescribeRequest, EvaluateRequest, ImportRequest, ParseRequest};
pub use response::{
    ApiError, ApiErrorResponse, DescribeResponse, EvaluateResponse, ImportResponse, ParseResponse,
    ParseStats,
};
pub use state::AppState;
