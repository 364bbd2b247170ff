//! Tic-tac-toe Web API server

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Serve perfect tic-tac-toe moves over HTTP
#[derive(Parser, Debug)]
#[command(name = "tictactoe-api", version)]
struct Config {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let address = format!("{}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("cannot bind {}", address))?;
    info!(%address, "tic-tac-toe API listening");

    axum::serve(listener, tictactoe_api::router())
        .await
        .context("server error")?;
    Ok(())
}
