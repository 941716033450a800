//! Request types for the roster engine API.
//!
//! This module defines the JSON request structures for all endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{ActionExpr, ConditionExpr, DeploymentContext, StaffRecord, StaffingRule};

/// Request body for the `/schedule/parse` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRequest {
    /// The raw schedule text extracted from the uploaded document.
    pub text: String,
    /// When present, the parsed roster is reconciled against this staff
    /// list and the response carries the linked result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff: Option<Vec<StaffRecord>>,
}

/// Request body for the `/rules/evaluate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// The deployment context to evaluate against.
    pub context: DeploymentContext,
    /// Rules to evaluate; the configured rule set is used when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<StaffingRule>>,
}

/// Request body for the `/rules/describe` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescribeRequest {
    /// The condition to render; an empty condition renders no fragments.
    #[serde(default)]
    pub condition: ConditionExpr,
    /// The action to render.
    pub action: ActionExpr,
}

/// Request body for the `/staff/import` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// The staff roster CSV text.
    pub csv: String,
}
