//! HTTP handler types for the sentinel auditor
//!
//! Request/response shapes for the audit, health, sample-data, and service
//! info endpoints, plus the API error type. The audit endpoint serializes
//! the [`sentinel_core::AuditReport`] directly; no extra envelope.

pub mod mcp;
pub mod routes;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use routes::{create_router, AppState};

/// Audit request: activity logs from one or more agents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRequest {
    /// Raw activity logs to classify
    pub activity_logs: String,

    /// Route through the model-backed classifier when one is configured
    #[serde(default)]
    pub use_ai: bool,
}

/// Overall service health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Per-component health flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub rule_engine: bool,
    pub model_classifier: bool,
    pub telemetry: bool,
}

/// GET /health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub components: ComponentHealth,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// GET /sample-data response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleDataResponse {
    pub description: String,
    pub logs: String,
}

/// GET /api response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub description: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

/// Machine-readable error details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
}

/// API error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg.clone(),
        };
        let body = serde_json::json!({
            "error": ErrorInfo {
                code: self.error_code().to_string(),
                message,
            }
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_request_use_ai_defaults_false() {
        let request: AuditRequest =
            serde_json::from_str(r#"{"activity_logs": "Agent-A: ok"}"#).unwrap();
        assert!(!request.use_ai);
        assert_eq!(request.activity_logs, "Agent-A: ok");
    }

    #[test]
    fn test_health_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
        assert_eq!(
            serde_json::to_string(&HealthStatus::Degraded).unwrap(),
            "\"degraded\""
        );
    }

    #[test]
    fn test_api_error_codes() {
        let error = ApiError::BadRequest("missing field".to_string());
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.error_code(), "BAD_REQUEST");

        let error = ApiError::Internal("metrics encoding failed".to_string());
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.error_code(), "INTERNAL_ERROR");
    }
}
