//! Model-backed classifier with deterministic fallback
//!
//! Implements the same `classify` contract as the rule engine by asking an
//! OpenAI-compatible model for a JSON audit report. Any failure on the remote
//! path — missing credential, transport error, bad status, unparseable
//! payload — silently falls back to the rule engine; callers never see an
//! error.

use async_trait::async_trait;

use sentinel_core::{AuditEngine, AuditReport, Classifier, Severity, Violation, ViolationKind};
use serde::Deserialize;

use crate::client::{ModelClient, ModelClientConfig};
use crate::error::{ModelError, Result};

/// System prompt demanding a strict JSON audit report
pub const AUDIT_SYSTEM_PROMPT: &str = r#"You are an AI agent governance auditor. Analyze activity logs from AI agents and output a JSON audit report.

Output ONLY valid JSON in this exact shape (no markdown, no extra text):
{
  "risk_score": <0-100 integer, higher = worse>,
  "violations": [
    {
      "type": "COST_SPIKE | SECURITY | RATE_LIMIT | ANOMALY",
      "severity": "CRITICAL | HIGH | MEDIUM | LOW",
      "agent_id": "<agent name from logs>",
      "description": "<what happened>",
      "recommendation": "<how to fix>"
    }
  ],
  "summary": "<one sentence executive summary>",
  "agents_audited": ["<list of agent IDs found in logs>"]
}

Rules: Flag cost spikes ($, spending, billing), security (unauthorized access, credentials, DB writes), rate limits (429, throttle, excessive calls), anomalies (loops, errors, retries). Be precise; only report real violations. risk_score 0 if no violations."#;

/// Environment variable holding the API credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Classifier that prefers a remote model and falls back to the rule engine
pub struct ModelClassifier {
    client: Option<ModelClient>,
    engine: AuditEngine,
}

impl ModelClassifier {
    /// Create a classifier with an explicit client (None disables the remote
    /// path entirely)
    pub fn new(client: Option<ModelClient>) -> Self {
        Self {
            client,
            engine: AuditEngine::new(),
        }
    }

    /// Create a classifier from the environment.
    ///
    /// The remote path is enabled only when `OPENAI_API_KEY` is set and
    /// non-empty; otherwise every call goes straight to the rule engine.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .unwrap_or_default()
            .trim()
            .to_string();
        if api_key.is_empty() {
            return Self::new(None);
        }

        match ModelClient::new(api_key, ModelClientConfig::from_env()) {
            Ok(client) => Self::new(Some(client)),
            Err(e) => {
                tracing::warn!(error = %e, "model client unavailable, using rule engine only");
                Self::new(None)
            }
        }
    }

    /// Whether the remote model path is configured
    pub fn is_remote_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// The deterministic fallback engine
    pub fn engine(&self) -> &AuditEngine {
        &self.engine
    }

    async fn classify_remote(&self, activity_logs: &str) -> Result<AuditReport> {
        let client = self.client.as_ref().ok_or(ModelError::MissingCredential)?;

        let user_prompt = format!("Audit these agent activity logs:\n\n{}", activity_logs);
        let text = client.complete(AUDIT_SYSTEM_PROMPT, &user_prompt).await?;

        parse_report(&text)
    }
}

#[async_trait]
impl Classifier for ModelClassifier {
    async fn classify(&self, activity_logs: &str) -> AuditReport {
        // Empty input has a fixed answer; skip the network round-trip.
        if activity_logs.trim().is_empty() {
            return self.engine.classify(activity_logs);
        }

        match self.classify_remote(activity_logs).await {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(error = %e, "remote classification failed, falling back to rule engine");
                self.engine.classify(activity_logs)
            }
        }
    }
}

/// Wire shape of the model's report, tolerant of absent fields
#[derive(Deserialize)]
struct RemoteReport {
    #[serde(default)]
    risk_score: i64,
    #[serde(default)]
    violations: Vec<RemoteViolation>,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    agents_audited: Vec<String>,
}

#[derive(Deserialize)]
struct RemoteViolation {
    #[serde(rename = "type")]
    kind: Option<ViolationKind>,
    severity: Option<Severity>,
    agent_id: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    recommendation: String,
}

impl RemoteReport {
    fn into_report(self) -> AuditReport {
        AuditReport {
            risk_score: self.risk_score.clamp(0, 100) as u8,
            violations: self
                .violations
                .into_iter()
                .map(|v| Violation {
                    kind: v.kind.unwrap_or(ViolationKind::Anomaly),
                    severity: v.severity.unwrap_or(Severity::Medium),
                    agent_id: v.agent_id.unwrap_or_else(|| "Unknown".to_string()),
                    description: v.description,
                    recommendation: v.recommendation,
                })
                .collect(),
            summary: self.summary,
            agents_audited: self.agents_audited,
        }
    }
}

/// Parse a model completion into an [`AuditReport`]
fn parse_report(text: &str) -> Result<AuditReport> {
    let body = strip_code_fence(text);
    let remote: RemoteReport = serde_json::from_str(body)
        .map_err(|e| ModelError::MalformedResponse(e.to_string()))?;
    Ok(remote.into_report())
}

/// Strip a Markdown code fence from a completion, if present
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let rest = if let Some((_, rest)) = trimmed.split_once("```json") {
        rest
    } else if let Some((_, rest)) = trimmed.split_once("```") {
        rest
    } else {
        return trimmed;
    };

    match rest.split_once("```") {
        Some((body, _)) => body.trim(),
        None => rest.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence_variants() {
        assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn test_parse_report_clamps_score() {
        let report = parse_report(r#"{"risk_score": 150, "summary": "bad"}"#).unwrap();
        assert_eq!(report.risk_score, 100);

        let report = parse_report(r#"{"risk_score": -5}"#).unwrap();
        assert_eq!(report.risk_score, 0);
    }

    #[test]
    fn test_parse_report_defaults_violation_fields() {
        let payload = r#"{
            "risk_score": 40,
            "violations": [{"description": "something odd"}],
            "summary": "one issue",
            "agents_audited": ["Agent-A"]
        }"#;
        let report = parse_report(payload).unwrap();

        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].kind, ViolationKind::Anomaly);
        assert_eq!(report.violations[0].severity, Severity::Medium);
        assert_eq!(report.violations[0].agent_id, "Unknown");
        assert_eq!(report.violations[0].description, "something odd");
    }

    #[test]
    fn test_parse_report_rejects_garbage() {
        assert!(parse_report("the logs look fine to me").is_err());
        assert!(parse_report("").is_err());
    }

    #[test]
    fn test_disabled_classifier_uses_engine() {
        let classifier = ModelClassifier::new(None);
        assert!(!classifier.is_remote_enabled());

        let logs = "Agent-A: permission denied";
        let expected = classifier.engine().classify(logs);
        let report = tokio_test::block_on(Classifier::classify(&classifier, logs));
        assert_eq!(report, expected);
    }

    #[test]
    fn test_empty_input_short_circuits() {
        let classifier = ModelClassifier::new(None);
        let report = tokio_test::block_on(Classifier::classify(&classifier, "   \n  "));
        assert_eq!(report.risk_score, 0);
        assert!(report.violations.is_empty());
    }
}
