//! Telemetry for the sentinel auditor
//!
//! Prometheus metrics covering audit throughput, detected violations by kind
//! and severity, and the risk-score distribution. Exposed by the `/metrics`
//! route in Prometheus exposition format.

pub mod metrics;

pub use metrics::AuditMetrics;
