//! Route definitions for the sentinel auditor
//!
//! - POST /audit — classify activity logs and return the audit report
//! - GET /sample-data — bundled multi-agent sample transcript
//! - GET /health — health check for load balancers
//! - GET /api — service metadata and endpoint map
//! - GET /metrics — Prometheus exposition
//! - POST /mcp — JSON-RPC tool surface (see [`super::mcp`])

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use sentinel_core::{AuditEngine, AuditReport, Classifier};
use sentinel_model::ModelClassifier;
use sentinel_simulation::{sample_activity_logs, SAMPLE_DESCRIPTION};

use super::{
    mcp, ApiError, AuditRequest, ComponentHealth, HealthResponse, HealthStatus,
    SampleDataResponse, ServiceInfo,
};
use crate::telemetry::AuditMetrics;

/// Shared state for all routes
#[derive(Clone)]
pub struct AppState {
    /// Deterministic rule engine, shared read-only across requests
    pub engine: Arc<AuditEngine>,
    /// Model-backed classifier; falls back to the rule engine internally
    pub model: Arc<ModelClassifier>,
    /// Prometheus metrics
    pub metrics: Arc<AuditMetrics>,
    /// Start time for uptime calculation
    pub start_time: Instant,
}

impl AppState {
    /// Build state from the environment (model path enabled only when a
    /// credential is configured)
    pub fn from_env() -> Result<Self, prometheus::Error> {
        Ok(Self {
            engine: Arc::new(AuditEngine::new()),
            model: Arc::new(ModelClassifier::from_env()),
            metrics: Arc::new(AuditMetrics::new()?),
            start_time: Instant::now(),
        })
    }
}

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/audit", post(audit))
        .route("/sample-data", get(sample_data))
        .route("/health", get(health_check))
        .route("/api", get(api_info))
        .route("/metrics", get(metrics))
        .route("/mcp", post(mcp::handle))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// POST /audit - classify agent activity logs
///
/// Stateless and deterministic on the rule path; `use_ai` routes through the
/// model classifier, which silently degrades to the rule engine on failure.
pub async fn audit(
    State(state): State<AppState>,
    Json(request): Json<AuditRequest>,
) -> Json<AuditReport> {
    let request_id = Uuid::new_v4();
    tracing::info!(
        %request_id,
        use_ai = request.use_ai,
        bytes = request.activity_logs.len(),
        "audit request received"
    );

    let report = if request.use_ai {
        state.model.classify(&request.activity_logs).await
    } else {
        state.engine.classify(&request.activity_logs)
    };

    state.metrics.record_audit(&report);
    tracing::info!(
        %request_id,
        risk_score = report.risk_score,
        violations = report.violations.len(),
        "audit request complete"
    );

    Json(report)
}

/// GET /sample-data - sample agent activity logs for testing
pub async fn sample_data() -> Json<SampleDataResponse> {
    Json(SampleDataResponse {
        description: SAMPLE_DESCRIPTION.to_string(),
        logs: sample_activity_logs().to_string(),
    })
}

/// GET /health - health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let rule_engine = !state.engine.rules().is_empty();
    let status = if rule_engine {
        HealthStatus::Healthy
    } else {
        HealthStatus::Unhealthy
    };

    Json(HealthResponse {
        status,
        components: ComponentHealth {
            rule_engine,
            model_classifier: state.model.is_remote_enabled(),
            telemetry: true,
        },
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// GET /api - service metadata
pub async fn api_info() -> Json<ServiceInfo> {
    let mut endpoints = BTreeMap::new();
    endpoints.insert("/audit".to_string(), "POST - Audit agent activity logs".to_string());
    endpoints.insert(
        "/sample-data".to_string(),
        "GET - Sample agent activity for testing".to_string(),
    );
    endpoints.insert("/health".to_string(), "GET - Health check".to_string());
    endpoints.insert("/metrics".to_string(), "GET - Prometheus metrics".to_string());
    endpoints.insert(
        "/mcp".to_string(),
        "POST - JSON-RPC tool surface (initialize, tools/list, tools/call)".to_string(),
    );

    Json(ServiceInfo {
        service: "Sentinel - AI Agent Auditor".to_string(),
        description: "Governance for AI agents: cost control, security, and observability"
            .to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

/// GET /metrics - Prometheus exposition format
pub async fn metrics(State(state): State<AppState>) -> Result<String, ApiError> {
    state
        .metrics
        .render()
        .map_err(|e| ApiError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_env() {
        let state = AppState::from_env().unwrap();
        assert!(!state.engine.rules().is_empty());
    }

    #[tokio::test]
    async fn test_sample_data_handler() {
        let Json(response) = sample_data().await;
        assert!(response.logs.contains("Agent-A"));
        assert!(!response.description.is_empty());
    }

    #[tokio::test]
    async fn test_api_info_lists_audit_endpoint() {
        let Json(info) = api_info().await;
        assert!(info.endpoints.contains_key("/audit"));
        assert!(info.endpoints.contains_key("/mcp"));
    }
}
