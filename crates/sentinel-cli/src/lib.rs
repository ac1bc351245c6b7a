//! Sentinel CLI
//!
//! Command-line interface for the sentinel agent auditor.
//!
//! # Usage
//!
//! ```bash
//! # Audit a log file (or pipe logs via stdin)
//! sentinel audit --logs activity.log --format json
//!
//! # Print the bundled sample transcript
//! sentinel sample
//!
//! # Run the demo agent fleet and audit the combined output
//! sentinel simulate
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success - no violations detected
//! - 1: Audit completed and found violations
//! - 3: Invalid input or arguments
//! - 4: File not found or inaccessible
//! - 10: Internal error

pub mod cli;
pub mod error;

pub use cli::{ExitCode, OutputFormat, SentinelCli, SentinelCommands};
pub use error::{CliError, Result};

/// Run the CLI application and map errors to exit codes
pub async fn run_cli(cli: SentinelCli) -> ExitCode {
    match cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from_error(&e)
        }
    }
}
