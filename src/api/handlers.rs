//! HTTP request handlers for the roster engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::csv_import::import_staff_csv;
use crate::pipeline::{
    build_deployments, link_staff, parse_schedule_with_observer, TracingObserver,
};
use crate::rules::{describe_rule, evaluate};

use super::request::{DescribeRequest, EvaluateRequest, ImportRequest, ParseRequest};
use super::response::{
    ApiError, ApiErrorResponse, DescribeResponse, EvaluateResponse, ImportResponse, ParseResponse,
    ParseStats,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule/parse", post(parse_handler))
        .route("/rules/evaluate", post(evaluate_handler))
        .route("/rules/describe", post(describe_handler))
        .route("/staff/import", post(import_handler))
        .with_state(state)
}

/// Handler for POST /schedule/parse.
///
/// Parses uploaded schedule text, derives deployment records, and
/// reconciles against the supplied staff list when one is present.
async fn parse_handler(
    State(_state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule parse request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
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
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
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

    let mut observer = TracingObserver;
    let document = match parse_schedule_with_observer(&request.text, &mut observer) {
        Ok(document) => document,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Schedule parse failed");
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let deployments = build_deployments(&document);
    let roster = request
        .staff
        .as_deref()
        .map(|staff| link_staff(&document, staff));

    let stats = ParseStats {
        employees: document.employees.len(),
        deployments: deployments.len(),
    };
    info!(
        correlation_id = %correlation_id,
        location = %document.location,
        week_start = %document.week_start,
        employees = stats.employees,
        deployments = stats.deployments,
        "Schedule parsed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ParseResponse {
            document,
            deployments,
            roster,
            stats,
        }),
    )
        .into_response()
}

/// Handler for POST /rules/evaluate.
///
/// Evaluates the supplied rules (or the configured rule set when none
/// are supplied) against the given deployment context.
async fn evaluate_handler(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> impl IntoResponse {
    let rules = request
        .rules
        .unwrap_or_else(|| state.config().rules().to_vec());
    let actions = evaluate(&rules, &request.context);

    info!(
        rules = rules.len(),
        actions = actions.len(),
        "Evaluated staffing rules"
    );

    (StatusCode::OK, Json(EvaluateResponse { actions }))
}

/// Handler for POST /rules/describe.
async fn describe_handler(Json(request): Json<DescribeRequest>) -> impl IntoResponse {
    let fragments = describe_rule(&request.condition, &request.action);
    (StatusCode::OK, Json(DescribeResponse { fragments }))
}

/// Handler for POST /staff/import.
///
/// Imports a staff roster from CSV text; row-level problems come back as
/// collected messages, not failures.
async fn import_handler(Json(request): Json<ImportRequest>) -> impl IntoResponse {
    match import_staff_csv(&request.csv) {
        Ok(import) => {
            info!(
                imported = import.staff.len(),
                row_errors = import.errors.len(),
                "Imported staff CSV"
            );
            let errors = import.errors.iter().map(ToString::to_string).collect();
            (
                StatusCode::OK,
                Json(ImportResponse {
                    staff: import.staff,
                    errors,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(error = %err, "Staff CSV import failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
