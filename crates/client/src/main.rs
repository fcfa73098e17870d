//! Terminal client entry point.
mod app;
mod config;
mod logging;
mod presentation;

use anyhow::Result;

use crate::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = logging::init(&config)?;

    let result = match config.headless_frames {
        Some(frames) => app::run_headless(&config, frames).await,
        None => app::run_terminal(&config).await,
    };

    if let Err(error) = &result {
        tracing::error!("client stopped: {error:#}");
    }
    result
}
