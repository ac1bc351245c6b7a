//! Audit rule table
//!
//! The closed, ordered set of textual signatures recognized as governance
//! violations. Order is significant: rules are tried top to bottom against
//! each line and the first match wins, so more specific or higher-severity
//! signatures must precede the generic ones that would otherwise shadow them
//! (a line mentioning both "cost" and a raw dollar figure must hit the
//! critical cost rule, not the generic numeric-currency rule).
//!
//! Every pattern is case-insensitive, uses "contains" semantics, and anchors
//! on an `Agent-<name>` token via the named capture `agent`. The remaining
//! captures (`cost`, `model`, `count`, `time`) are named so template filling
//! never depends on positional group indices.

use regex::Regex;

use crate::report::{Severity, Violation, ViolationKind, UNKNOWN_AGENT};

/// One immutable audit rule: pattern, taxonomy entry, description template,
/// and fixed recommendation.
pub struct AuditRule {
    pattern: Regex,
    kind: ViolationKind,
    severity: Severity,
    template: &'static str,
    recommendation: &'static str,
}

impl AuditRule {
    fn new(
        pattern: &str,
        kind: ViolationKind,
        severity: Severity,
        template: &'static str,
        recommendation: &'static str,
    ) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("audit rule pattern must compile"),
            kind,
            severity,
            template,
            recommendation,
        }
    }

    /// Violation category this rule reports
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// Severity this rule assigns
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Evaluate the rule against a single trimmed line.
    ///
    /// Returns the synthesized violation on match, `None` otherwise.
    pub fn evaluate(&self, line: &str) -> Option<Violation> {
        let caps = self.pattern.captures(line)?;

        let agent_id = caps
            .name("agent")
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| UNKNOWN_AGENT.to_string());

        Some(Violation {
            kind: self.kind,
            severity: self.severity,
            agent_id: agent_id.clone(),
            description: self.render_description(&agent_id, &caps),
            recommendation: self.recommendation.to_string(),
        })
    }

    /// Fill the description template from named captures.
    ///
    /// Absent captures substitute safe defaults rather than failing:
    /// "unknown" for cost and model, "multiple" for count, "short period"
    /// for time. A captured minute count renders as "<n> min".
    fn render_description(&self, agent_id: &str, caps: &regex::Captures<'_>) -> String {
        let capture = |name: &str| caps.name(name).map(|m| m.as_str().to_string());

        let time = capture("time")
            .map(|minutes| format!("{} min", minutes))
            .unwrap_or_else(|| "short period".to_string());

        self.template
            .replace("{agent}", agent_id)
            .replace("{cost}", &capture("cost").unwrap_or_else(|| "unknown".to_string()))
            .replace("{model}", &capture("model").unwrap_or_else(|| "unknown".to_string()))
            .replace("{count}", &capture("count").unwrap_or_else(|| "multiple".to_string()))
            .replace("{time}", &time)
    }
}

/// Build the canonical rule table in evaluation order.
///
/// Reordering changes classification outcomes.
pub fn default_rules() -> Vec<AuditRule> {
    vec![
        // ----- Cost -----
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+).*cost.*\$(?P<cost>\d+)",
            ViolationKind::CostSpike,
            Severity::Critical,
            "Agent {agent} incurred ${cost} in charges - exceeds threshold",
            "Set cost limits; review agent prompt efficiency; consider cheaper models",
        ),
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+).*(?P<model>gpt-4|claude-opus|o1).*(?P<count>\d{2,})\s*calls?",
            ViolationKind::CostSpike,
            Severity::High,
            "Agent {agent} called expensive model {count}x - potential runaway costs",
            "Add rate limiting; switch to gpt-4o-mini for non-critical tasks",
        ),
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+).*(?P<cost>\d+).*(?:\$|dollars?|usd)",
            ViolationKind::CostSpike,
            Severity::High,
            "Agent {agent} spending (${cost}) - review for cost spike",
            "Set cost limits; monitor usage; consider cheaper models",
        ),
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+).*(?:spend|spending|billing|bill|budget exceed|overrun|runaway cost)",
            ViolationKind::CostSpike,
            Severity::High,
            "Agent {agent} cost-related activity - possible spike",
            "Review spending; set alerts; add cost caps",
        ),
        // ----- Security -----
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+).*(?:unauthorized|forbidden|denied|restricted|access denied|permission denied)",
            ViolationKind::Security,
            Severity::Critical,
            "Agent {agent} attempted unauthorized or denied access - security policy violation",
            "Review agent permissions; enforce least-privilege access",
        ),
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+).*(?:database|db|sql|postgres|mysql|redis).*write",
            ViolationKind::Security,
            Severity::High,
            "Agent {agent} performed database write - elevated privilege usage",
            "Restrict write permissions; require approval workflow for DB modifications",
        ),
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+).*(?:api[_-]?key|secret|token|password|credential|leak|leaked|exposed|breach)",
            ViolationKind::Security,
            Severity::Critical,
            "Agent {agent} credentials/secret exposure risk - data leak possible",
            "Use managed secret storage; rotate exposed credentials immediately",
        ),
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+).*(?:admin|root|sudo|elevated|privilege escalation)",
            ViolationKind::Security,
            Severity::High,
            "Agent {agent} elevated privilege or admin access - review scope",
            "Enforce least-privilege; audit admin actions; restrict sensitive paths",
        ),
        // ----- Rate limit -----
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+).*(?P<count>\d{3,})\s*(?:calls?|requests?|invocations?).*?(?P<time>\d+)\s*min",
            ViolationKind::RateLimit,
            Severity::High,
            "Agent {agent} made {count} requests in {time} - excessive API usage",
            "Implement exponential backoff; add circuit breaker; check for infinite loops",
        ),
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+).*(?:rate limit|throttle|429|503|quota exceeded|too many requests)",
            ViolationKind::RateLimit,
            Severity::Medium,
            "Agent {agent} hit rate limits or quota - API throttling",
            "Increase API quota or reduce request frequency; add retry logic",
        ),
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+).*(?:excessive|overload|too many).*(?:request|call|api)",
            ViolationKind::RateLimit,
            Severity::High,
            "Agent {agent} excessive requests/calls - rate limit risk",
            "Add backoff; cap concurrency; monitor quota",
        ),
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+).*(?P<count>\d{3,}).*(?:request|call|invocation)",
            ViolationKind::RateLimit,
            Severity::Medium,
            "Agent {agent} high request/call volume ({count}) - monitor for limits",
            "Set rate limits; add retries; consider batching",
        ),
        // ----- Anomaly -----
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+).*(?:same tool|repeated|loop|duplicate).*?(?P<count>\d{2,})",
            ViolationKind::Anomaly,
            Severity::High,
            "Agent {agent} called same tool {count}x - possible infinite loop",
            "Review agent logic; add loop detection; implement max iteration limits",
        ),
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+).*(?P<count>\d{2,}).*consecutive.*(?:error|fail)",
            ViolationKind::Anomaly,
            Severity::High,
            "Agent {agent} had {count} consecutive errors - stability issue",
            "Check logs for root cause; add error handling; implement circuit breaker",
        ),
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+).*(?:error|failed|exception).*(?P<count>\d{2,})",
            ViolationKind::Anomaly,
            Severity::Medium,
            "Agent {agent} encountered {count} errors - stability issue",
            "Check logs for root cause; add error handling; monitor agent health",
        ),
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+).*(?P<count>\d{2,}).*(?:error|fail|timeout|exception)",
            ViolationKind::Anomaly,
            Severity::Medium,
            "Agent {agent} had {count} errors/timeouts - stability issue",
            "Check logs; add error handling; consider circuit breaker",
        ),
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+).*(?:infinite loop|stuck|hang|crash|crashed|timeout|repeated failure)",
            ViolationKind::Anomaly,
            Severity::High,
            "Agent {agent} stability/reliability issue - possible loop or crash",
            "Review logic; add timeouts and max retries; monitor health",
        ),
        // Retry vocabulary and the count may appear in either order.
        AuditRule::new(
            r"(?i)(?P<agent>Agent-\w+)(?:.*(?:retry|retries).*?(?P<count>\d{2,})|.*?(?P<count>\d{2,}).*(?:retry|retries))",
            ViolationKind::Anomaly,
            Severity::Medium,
            "Agent {agent} high retry count ({count}) - underlying failure or overload",
            "Investigate root cause; add backoff; reduce load",
        ),
    ]
}
