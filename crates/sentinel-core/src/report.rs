//! Report data model for agent activity audits
//!
//! Defines the violation taxonomy (kind and severity), individual violations,
//! and the `AuditReport` returned by every classification call. All types
//! serialize to the wire format consumed by the HTTP and tool transports.

use serde::{Deserialize, Serialize};

/// Category of a detected governance violation. Fixed, closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    /// Spending spikes and runaway model costs
    CostSpike,
    /// Unauthorized access, credential exposure, privilege misuse
    Security,
    /// Excessive API usage and quota exhaustion
    RateLimit,
    /// Loops, error bursts, and other stability issues
    Anomaly,
}

impl ViolationKind {
    /// Wire-format name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::CostSpike => "COST_SPIKE",
            ViolationKind::Security => "SECURITY",
            ViolationKind::RateLimit => "RATE_LIMIT",
            ViolationKind::Anomaly => "ANOMALY",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a violation, ordered by scoring weight.
///
/// The ordering (`Critical > High > Medium > Low`) governs scoring
/// contribution only; rule selection is always table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Contribution of one violation of this severity to the risk score
    pub fn weight(&self) -> u32 {
        match self {
            Severity::Critical => 35,
            Severity::High => 25,
            Severity::Medium => 15,
            Severity::Low => 5,
        }
    }

    /// Wire-format name of the severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Agent identifier used when no token could be extracted from a line
pub const UNKNOWN_AGENT: &str = "Unknown";

/// A single violation detected on one activity-log line.
///
/// Created during classification and owned by the containing report;
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Violation category
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    /// Severity for scoring
    pub severity: Severity,
    /// Agent that triggered the violation
    pub agent_id: String,
    /// What happened, rendered from the matching rule's template
    pub description: String,
    /// How to fix it, copied verbatim from the matching rule
    pub recommendation: String,
}

/// Structured governance report for one classification call.
///
/// `violations` preserves input line order; `agents_audited` is the sorted,
/// deduplicated set of every agent token seen in the input, including agents
/// that produced no violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Overall risk score, saturating at 100 (higher = worse)
    pub risk_score: u8,
    /// Detected violations in input line order
    pub violations: Vec<Violation>,
    /// Executive summary of audit findings
    pub summary: String,
    /// Sorted distinct agent IDs included in the audit
    pub agents_audited: Vec<String>,
}

impl AuditReport {
    /// Whether any violation was detected
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Number of violations of the given severity
    pub fn count_severity(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }

    /// Number of violations of the given kind
    pub fn count_kind(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }
}
