mod catalog;
mod config;
mod errors;
mod export;
mod generation;
mod models;
mod planner;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::export::LocalExporter;
use crate::planner::store::PlanStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vibekit API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Catalog::load(config.catalog_dir.as_deref()).context("Failed to load catalog")?;

    match &config.clipboard_command {
        Some(argv) => info!("Clipboard command: {}", argv.join(" ")),
        None => warn!("CLIPBOARD_COMMAND not set; copy requests will not be delivered"),
    }
    info!("Exports written to {}", config.export_dir.display());
    let exporter = Arc::new(LocalExporter::new(
        config.export_dir.clone(),
        config.clipboard_command.clone(),
        config.clipboard_timeout,
    ));

    let state = AppState {
        catalog: Arc::new(catalog),
        plans: PlanStore::default(),
        exporter,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
