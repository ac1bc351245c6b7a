//! Sentinel Core
//!
//! Rule-based governance auditor for AI agent activity logs. Classifies
//! free-text log lines into violations across four categories — cost spikes,
//! security policy breaches, rate-limit abuse, and behavioral anomalies —
//! and aggregates them into a structured report with a 0–100 risk score.
//!
//! ## Architecture
//!
//! 1. **Rule table** (`engine::rules`): the ordered, closed set of textual
//!    signatures. First match wins per line; table order encodes precedence.
//! 2. **Audit engine** (`engine`): line splitting, agent discovery,
//!    first-match classification, risk scoring, and summary generation.
//! 3. **Report model** (`report`): the violation taxonomy and the
//!    [`AuditReport`] wire types.
//! 4. **Classifier trait** (`classifier`): the `classify` contract shared
//!    with alternate backends such as the remote-model classifier.
//!
//! ## Example
//!
//! ```rust
//! use sentinel_core::AuditEngine;
//!
//! let engine = AuditEngine::new();
//! let report = engine.classify("Agent-A: Called gpt-4 500 times in 10 min, cost $750.00");
//!
//! assert_eq!(report.risk_score, 50);
//! assert_eq!(report.agents_audited, vec!["Agent-A".to_string()]);
//! ```

pub mod classifier;
pub mod engine;
pub mod report;

pub use classifier::Classifier;
pub use engine::{rules::AuditRule, AuditEngine};
pub use report::{AuditReport, Severity, Violation, ViolationKind, UNKNOWN_AGENT};

/// Crate version (from Cargo.toml)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
