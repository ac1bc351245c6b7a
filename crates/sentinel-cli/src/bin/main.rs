//! Sentinel auditor CLI entry point

use clap::Parser;

use sentinel_cli::{run_cli, SentinelCli};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let cli = SentinelCli::parse();

    let exit_code = run_cli(cli).await;
    std::process::exit(exit_code.into());
}
