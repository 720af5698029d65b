//! Pelabuhan Nusantara gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌───────────────────────────────────────────────┐
//!                         │                   GATEWAY                     │
//!                         │                                               │
//!   Client Request        │  ┌─────────┐    ┌──────────┐    ┌──────────┐  │
//!   ──────────────────────┼─▶│  http   │───▶│ handlers │───▶│ upstream │──┼──▶ Upstream
//!                         │  │ server  │    │ (params) │    │  client  │  │     REST API
//!                         │  └─────────┘    └──────────┘    └────┬─────┘  │
//!                         │                                      │        │
//!                         │                                      ▼        │
//!   Client Response       │  ┌─────────┐    ┌──────────┐    ┌──────────┐  │
//!   ◀─────────────────────┼──│envelope │◀───│ validate │◀───│normalize │◀─┼─── body
//!                         │  └─────────┘    └──────────┘    └──────────┘  │
//!                         │                                               │
//!                         │  config · observability · lifecycle           │
//!                         └───────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

use pelabuhan_gateway::config::load_config;
use pelabuhan_gateway::lifecycle;
use pelabuhan_gateway::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "pelabuhan-gateway", version)]
#[command(about = "HTTP gateway for the Pelabuhan Nusantara catalogue API", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "GATEWAY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    init_logging(&config.observability);

    tracing::info!("pelabuhan-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        upstream_timeout_secs = config.upstream.timeout_secs,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    lifecycle::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
