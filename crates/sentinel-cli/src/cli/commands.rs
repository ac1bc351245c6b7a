//! Command implementations for the sentinel CLI

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use sentinel_core::{AuditEngine, AuditReport, Classifier};
use sentinel_model::ModelClassifier;
use sentinel_simulation::{sample_activity_logs, Orchestrator, SAMPLE_DESCRIPTION};

use super::output::{render_report, render_simulation, OutputFormat};
use super::ExitCode;
use crate::error::{CliError, Result};

/// Sentinel - governance auditor for AI agent activity logs
#[derive(Debug, Parser)]
#[command(name = "sentinel", version, about)]
pub struct SentinelCli {
    #[command(subcommand)]
    pub command: SentinelCommands,
}

#[derive(Debug, Subcommand)]
pub enum SentinelCommands {
    /// Audit activity logs from a file or stdin
    Audit {
        /// Path to the activity log file ("-" or omitted reads stdin)
        #[arg(long)]
        logs: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Use the model-backed classifier when a credential is configured
        #[arg(long)]
        ai: bool,
    },

    /// Print the bundled sample activity logs
    Sample {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Run the demo agent fleet and audit its combined transcript
    Simulate {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Print transcripts only, skip the audit
        #[arg(long)]
        no_audit: bool,
    },
}

/// Read activity logs from a file or stdin
fn read_logs(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| CliError::FileError(format!("{}: {}", path.display(), e))),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Classify logs with the requested backend
async fn classify(logs: &str, ai: bool) -> AuditReport {
    if ai {
        let classifier = ModelClassifier::from_env();
        if !classifier.is_remote_enabled() {
            tracing::warn!("no model credential configured, using rule engine");
        }
        classifier.classify(logs).await
    } else {
        AuditEngine::new().classify(logs)
    }
}

pub async fn execute_audit(
    logs: Option<PathBuf>,
    format: OutputFormat,
    ai: bool,
) -> Result<ExitCode> {
    let input = read_logs(logs.as_deref())?;
    let report = classify(&input, ai).await;

    println!("{}", render_report(&report, format)?);

    Ok(ExitCode::from_report(&report))
}

pub fn execute_sample(format: OutputFormat) -> Result<ExitCode> {
    match format {
        OutputFormat::Text => {
            println!("{}", sample_activity_logs());
        }
        OutputFormat::Json => {
            let body = serde_json::json!({
                "description": SAMPLE_DESCRIPTION,
                "logs": sample_activity_logs(),
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }
    Ok(ExitCode::Success)
}

pub fn execute_simulate(format: OutputFormat, no_audit: bool) -> Result<ExitCode> {
    let run = Orchestrator::with_default_agents().run();
    println!("{}", render_simulation(&run, format)?);

    if no_audit {
        return Ok(ExitCode::Success);
    }

    let report = AuditEngine::new().classify(&run.combined());
    println!("{}", render_report(&report, format)?);

    Ok(ExitCode::from_report(&report))
}
