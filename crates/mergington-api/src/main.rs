//! Mergington API server entry point.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use mergington_api::{ConfigArgs, Server, ServerConfig};

/// Mergington High School activities API
#[derive(Parser, Debug)]
#[command(name = "mergington-api")]
#[command(about = "Serve the Mergington activity sign-up API", long_about = None)]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,mergington_core=debug,mergington_api=debug,tower_http=debug".into()
            }),
        )
        .init();

    let args = Args::parse();
    let config = ServerConfig::resolve(&args.config)?;
    tracing::debug!(?config, "configuration resolved");

    let server = Server::from_config(config)?;
    if let Err(e) = server.run().await {
        tracing::error!("server failed: {e}");
        return Err(e.into());
    }
    Ok(())
}
