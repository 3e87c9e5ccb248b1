//! Bonus engine HTTP server.
//!
//! Reads the policy from `BONUS_CONFIG_DIR` (default `./config`) and listens
//! on `BONUS_BIND_ADDR` (default `0.0.0.0:3000`). Log output is controlled
//! with `RUST_LOG`.

use std::env;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bonus_engine::api::{AppState, create_router};
use bonus_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        env::var("BONUS_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        env::var("BONUS_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading bonus policy from {config_dir}"))?;
    info!(
        config_dir = %config_dir,
        mileage_rate = %config.policy().mileage_rate,
        pool_percentage = %config.policy().default_pool_percentage,
        "Bonus policy loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    info!(addr = %bind_addr, "Bonus engine listening");

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
