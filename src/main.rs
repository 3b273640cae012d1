//! Tacheo server binary: opens the SQLite store and serves the JSON API.

use anyhow::Context;
use clap::Parser;
use tacheo::{
    config::ServerConfig,
    http::{AppState, start_server},
    storage,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    let secret = config.session_secret()?;
    if config.dev && config.secret_key.is_none() {
        tracing::warn!("running with the development session secret");
    }

    let pool = storage::connect(&config.database, config.pool_size)
        .with_context(|| format!("opening database {}", config.database))?;
    storage::apply_schema(&pool).context("preparing database schema")?;

    let state = AppState::sqlite(&pool, secret, config.hash_iterations);
    let server = start_server(state, config.bind).await?;
    info!(addr = %server.addr(), database = %config.database, "tacheo ready");

    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;
    server.shutdown().await;
    Ok(())
}
