mod routes;
mod state;
mod templates;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wkplanner_core::config::PlannerConfig;

use crate::state::AppState;

/// Assets shipped with the package, used when no static_dir is configured
const BUNDLED_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

const DEFAULT_LOG_FILTER: &str = "wkplanner=info,wkplanner_core=info,tower_http=info";

#[derive(Parser)]
#[command(name = "wkplanner")]
#[command(about = "Plan workouts on a monthly calendar in your browser", version)]
struct Cli {
    /// Config file (defaults to ~/.config/wkplanner/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// SQLite database file
    #[arg(long)]
    database: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

impl Cli {
    fn into_config(self) -> Result<PlannerConfig> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::load_from(path),
            None => PlannerConfig::load(),
        }
        .context("Failed to load configuration")?;

        if let Some(database) = self.database {
            config.database = database;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Cli::parse().into_config()?;

    let database = config.database_path();
    let state = AppState::new(database.clone())
        .with_context(|| format!("Failed to open database {}", database.display()))?;

    let static_dir = config
        .static_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(BUNDLED_STATIC_DIR));

    tracing::info!(database = %state.database().display(), static_dir = %static_dir.display(), "database ready");
    let app = routes::router(state, &static_dir);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("wkplanner listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Could not listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
