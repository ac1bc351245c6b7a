//! Output rendering for CLI results
//!
//! Human-readable text with severity coloring, or machine-readable JSON.

use clap::ValueEnum;
use colored::Colorize;

use sentinel_core::{AuditReport, Severity, Violation};
use sentinel_simulation::SimulationRun;

use crate::error::Result;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text
    Text,
    /// Machine-readable JSON
    Json,
}

/// Render an audit report in the requested format
pub fn render_report(report: &AuditReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(render_report_text(report)),
    }
}

fn render_report_text(report: &AuditReport) -> String {
    let mut out = String::new();

    let score = format!("{}/100", report.risk_score);
    let score = if report.risk_score >= 75 {
        score.red().bold()
    } else if report.risk_score >= 40 {
        score.yellow()
    } else {
        score.green()
    };

    out.push_str(&format!("Risk Score: {}\n", score));
    out.push_str(&format!("Summary: {}\n", report.summary));

    if report.agents_audited.is_empty() {
        out.push_str("Agents Audited: none\n");
    } else {
        out.push_str(&format!(
            "Agents Audited: {}\n",
            report.agents_audited.join(", ")
        ));
    }

    if report.violations.is_empty() {
        return out;
    }

    out.push_str(&format!("\nViolations ({}):\n", report.violations.len()));
    for (index, violation) in report.violations.iter().enumerate() {
        out.push_str(&render_violation(index + 1, violation));
    }

    out
}

fn render_violation(index: usize, violation: &Violation) -> String {
    let severity = match violation.severity {
        Severity::Critical => violation.severity.as_str().red().bold(),
        Severity::High => violation.severity.as_str().red(),
        Severity::Medium => violation.severity.as_str().yellow(),
        Severity::Low => violation.severity.as_str().normal(),
    };

    format!(
        "  {}. [{}] {} {}\n     {}\n     fix: {}\n",
        index,
        severity,
        violation.kind.as_str(),
        violation.agent_id,
        violation.description,
        violation.recommendation
    )
}

/// Render a simulation run in the requested format
pub fn render_simulation(run: &SimulationRun, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let transcripts: Vec<serde_json::Value> = run
                .transcripts
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "agent_id": t.agent_id,
                        "transcript": t.transcript,
                    })
                })
                .collect();
            Ok(serde_json::to_string_pretty(&transcripts)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for transcript in &run.transcripts {
                out.push_str(&format!("--- {} ---\n", transcript.agent_id.as_str().bold()));
                out.push_str(&transcript.transcript);
                out.push('\n');
            }
            Ok(out)
        }
    }
}
