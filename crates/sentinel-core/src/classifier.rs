//! Classifier abstraction
//!
//! Both the deterministic rule engine and the optional remote-model backend
//! implement the same `classify` contract, so transports stay polymorphic
//! over where the report comes from.

use async_trait::async_trait;

use crate::engine::AuditEngine;
use crate::report::AuditReport;

/// Anything that can turn raw activity logs into an [`AuditReport`].
///
/// Implementations must be total over string input: any text, however
/// malformed, produces a report rather than an error.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, activity_logs: &str) -> AuditReport;
}

#[async_trait]
impl Classifier for AuditEngine {
    async fn classify(&self, activity_logs: &str) -> AuditReport {
        AuditEngine::classify(self, activity_logs)
    }
}
