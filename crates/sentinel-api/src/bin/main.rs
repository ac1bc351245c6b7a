//! Sentinel auditor API server
//!
//! Serves the audit, sample-data, health, metrics, and tool-protocol
//! endpoints. Bind address and port come from flags or the environment
//! (`SENTINEL_BIND_ADDR`, `SENTINEL_PORT`); the model-backed classifier is
//! enabled when `OPENAI_API_KEY` is set.

use clap::Parser;

use sentinel_api::{create_router, AppState};

#[derive(Debug, Parser)]
#[command(name = "sentinel-api", version, about = "AI agent governance auditor API")]
struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "SENTINEL_BIND_ADDR", default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on
    #[arg(long, env = "SENTINEL_PORT", default_value_t = 10000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = ServeArgs::parse();

    let state = AppState::from_env()?;
    if state.model.is_remote_enabled() {
        tracing::info!("model-backed classification enabled");
    } else {
        tracing::info!("model-backed classification disabled, rule engine only");
    }

    let router = create_router(state);
    let addr = format!("{}:{}", args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "sentinel auditor listening");

    axum::serve(listener, router).await?;
    Ok(())
}
