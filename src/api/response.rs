//! Response types for the roster engine API.
//!
//! This module defines the success payloads, the error response
//! structures, and the mapping from engine errors to HTTP statuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{ActionExpr, DeploymentRecord, ScheduleDocument, StaffRecord};
use crate::pipeline::LinkedRoster;

/// Summary counts for a parse operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseStats {
    /// How many employee rows were recognized.
    pub employees: usize,
    /// How many deployment records were derived.
    pub deployments: usize,
}

/// Response body for the `/schedule/parse` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    /// The structured schedule document.
    pub document: ScheduleDocument,
    /// The derived deployment records.
    pub deployments: Vec<DeploymentRecord>,
    /// The reconciled roster, when a staff list was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster: Option<LinkedRoster>,
    /// Summary counts.
    pub stats: ParseStats,
}

/// Response body for the `/rules/evaluate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateResponse {
    /// The matched actions in application order.
    pub actions: Vec<ActionExpr>,
}

/// Response body for the `/rules/describe` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescribeResponse {
    /// The English sentence fragments, condition first.
    pub fragments: Vec<String>,
}

/// Response body for the `/staff/import` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    /// The successfully imported records.
    pub staff: Vec<StaffRecord>,
    /// Collected per-row error messages.
    pub errors: Vec<String>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ScheduleParse { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "PARSE_ERROR",
                    format!("Schedule parse failed: {}", message),
                    "No structured schedule could be recovered from the uploaded text",
                ),
            },
            EngineError::MalformedTime { token } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "TIME_FORMAT_ERROR",
                    format!("Malformed time token: '{}'", token),
                    "A time in the schedule text could not be read as h:mm[a|p]",
                ),
            },
            EngineError::CsvImport { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("CSV_IMPORT_ERROR", format!("CSV import failed: {}", message)),
            },
            EngineError::CsvRow { row, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("CSV_ROW_ERROR", format!("CSV row {}: {}", row, message)),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::RuleNotFound { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("RULE_NOT_FOUND", format!("Staffing rule not found: {}", name)),
            },
        }
    }
}
