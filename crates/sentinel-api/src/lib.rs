//! Sentinel API
//!
//! Transport layer for the sentinel agent auditor. Thin pass-throughs over
//! the [`sentinel_core`] engine:
//!
//! - **HTTP** (`handler::routes`): axum service with audit, sample-data,
//!   health, service-info, and metrics endpoints.
//! - **Tool protocol** (`handler::mcp`): JSON-RPC surface exposing the
//!   auditor to host-orchestrated agent frameworks.
//! - **Telemetry** (`telemetry`): Prometheus metrics for audit operations.
//!
//! The transports impose no contract beyond serializing the engine's
//! [`sentinel_core::AuditReport`].

pub mod handler;
pub mod telemetry;

pub use handler::{
    create_router, ApiError, AppState, AuditRequest, ComponentHealth, ErrorInfo, HealthResponse,
    HealthStatus, SampleDataResponse, ServiceInfo,
};
pub use telemetry::AuditMetrics;
