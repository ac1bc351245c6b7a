//! Audit engine for agent activity logs
//!
//! The engine splits raw multi-line text into trimmed lines, classifies each
//! line independently against the ordered rule table (first match wins, at
//! most one violation per line), and aggregates the matches into an
//! [`AuditReport`] with a saturating risk score and a narrative summary.
//!
//! Classification is a pure, stateless, synchronous computation: the engine
//! holds only the immutable rule table, so a single instance can be shared
//! behind an `Arc` and called concurrently without locking.

pub mod rules;

use std::collections::BTreeSet;

use regex::Regex;

use crate::report::{AuditReport, Severity, Violation};
use self::rules::AuditRule;

/// Summary used for empty or whitespace-only input
const NO_DATA_SUMMARY: &str = "No activity logs provided for audit.";

/// Flat per-violation contribution to the risk score, added on top of the
/// severity weight
const VIOLATION_BASE_SCORE: u32 = 15;

/// The rule-based audit engine
pub struct AuditEngine {
    rules: Vec<AuditRule>,
    agent_token: Regex,
}

impl Default for AuditEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditEngine {
    /// Create an engine with the canonical rule table
    pub fn new() -> Self {
        Self {
            rules: rules::default_rules(),
            // Agent discovery is case-sensitive, unlike rule matching.
            agent_token: Regex::new(r"Agent-\w+").expect("agent token pattern must compile"),
        }
    }

    /// The rule table in evaluation order
    pub fn rules(&self) -> &[AuditRule] {
        &self.rules
    }

    /// Audit raw activity logs and return a structured governance report.
    ///
    /// Deterministic for identical input; never fails for any string input.
    /// Empty or whitespace-only input yields a zero-risk report, which is a
    /// valid result rather than an error.
    pub fn classify(&self, activity_logs: &str) -> AuditReport {
        if activity_logs.trim().is_empty() {
            return AuditReport {
                risk_score: 0,
                violations: Vec::new(),
                summary: NO_DATA_SUMMARY.to_string(),
                agents_audited: Vec::new(),
            };
        }

        let mut violations: Vec<Violation> = Vec::new();
        let mut agents_seen: BTreeSet<String> = BTreeSet::new();

        for line in activity_logs
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
        {
            // Agents are collected even when the line matches no rule.
            if let Some(token) = self.agent_token.find(line) {
                agents_seen.insert(token.as_str().to_string());
            }

            if let Some(violation) = self.rules.iter().find_map(|rule| rule.evaluate(line)) {
                violations.push(violation);
            }
        }

        let risk_score = risk_score(&violations);
        let summary = summarize(&violations, agents_seen.len());

        tracing::debug!(
            violations = violations.len(),
            agents = agents_seen.len(),
            risk_score,
            "classified activity logs"
        );

        AuditReport {
            risk_score,
            violations,
            summary,
            agents_audited: agents_seen.into_iter().collect(),
        }
    }
}

/// Saturating risk score: `min(100, 15 * count + Σ severity_weight)`.
///
/// Monotonic and order-independent over the violation multiset.
fn risk_score(violations: &[Violation]) -> u8 {
    let weighted: u32 = violations.iter().map(|v| v.severity.weight()).sum();
    let raw = VIOLATION_BASE_SCORE * violations.len() as u32 + weighted;
    raw.min(100) as u8
}

/// Executive summary derived from the violation list and distinct-agent count
fn summarize(violations: &[Violation], agent_count: usize) -> String {
    if violations.is_empty() {
        return format!(
            "✅ No violations detected. Audited {} agent(s). System healthy.",
            agent_count
        );
    }

    let critical = violations
        .iter()
        .filter(|v| v.severity == Severity::Critical)
        .count();
    let high = violations
        .iter()
        .filter(|v| v.severity == Severity::High)
        .count();

    format!(
        "⚠️ {} violation(s) detected across {} agent(s). {} CRITICAL, {} HIGH. Immediate action required.",
        violations.len(),
        agent_count,
        critical,
        high
    )
}
