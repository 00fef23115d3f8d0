//! Tool server entry point: serves the three summarization tools over SSE
//! until Ctrl-C.

use anyhow::{Context, Result};
use clap::Parser;
use rmcp::transport::sse_server::SseServer;
use tracing::{info, warn};

use condense::config::{self, ProviderConfig};
use condense::service::SummarizerService;

#[derive(Debug, Parser)]
#[command(name = "condense-server", about = "MCP tool server for file summarization")]
struct Args {
    /// Address to listen on; the SSE endpoint is served at /sse
    #[arg(long, default_value = config::DEFAULT_BIND_ADDR)]
    bind: std::net::SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let provider = ProviderConfig::from_env();
    if provider.api_key.is_none() {
        // Startup proceeds; the first summarize_content call will fail with
        // a provider error instead.
        warn!("OPENAI_API_KEY is not set; summarize_content will fail until it is provided");
    }

    info!(bind = %args.bind, model = %provider.model, "starting tool server");
    let ct = SseServer::serve(args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?
        .with_service(move || SummarizerService::new(provider.clone()));

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    info!("shutting down");
    ct.cancel();

    Ok(())
}
