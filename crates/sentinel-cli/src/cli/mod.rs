//! CLI module for the sentinel auditor
//!
//! Commands for auditing activity logs, printing the bundled sample
//! transcript, and running the demo agent fleet.

pub mod commands;
pub mod output;

pub use commands::{SentinelCli, SentinelCommands};
pub use output::OutputFormat;

use sentinel_core::AuditReport;

use crate::error::CliError;

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful execution, no violations detected
    Success = 0,
    /// Audit completed and found violations
    ViolationsFound = 1,
    /// Invalid input or arguments
    InvalidInput = 3,
    /// File not found or inaccessible
    FileError = 4,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Determine exit code from an audit report
    pub fn from_report(report: &AuditReport) -> Self {
        if report.has_violations() {
            ExitCode::ViolationsFound
        } else {
            ExitCode::Success
        }
    }

    /// Determine exit code from a CLI error
    pub fn from_error(error: &CliError) -> Self {
        match error {
            CliError::FileError(_) => ExitCode::FileError,
            CliError::InvalidInput(_) => ExitCode::InvalidInput,
            _ => ExitCode::InternalError,
        }
    }
}

/// Run the CLI with the given arguments and return the exit code
pub async fn run(cli: SentinelCli) -> Result<ExitCode, CliError> {
    match cli.command {
        SentinelCommands::Audit { logs, format, ai } => {
            commands::execute_audit(logs, format, ai).await
        }
        SentinelCommands::Sample { format } => commands::execute_sample(format),
        SentinelCommands::Simulate { format, no_audit } => {
            commands::execute_simulate(format, no_audit)
        }
    }
}
