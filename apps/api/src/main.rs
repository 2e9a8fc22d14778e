mod catalog;
mod config;
mod errors;
mod models;
mod recommend;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::StaticJobCatalog;
use crate::config::Config;
use crate::recommend::scorer::TfidfScorer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (every variable has a default, so this only
    // fails on unparseable values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ml_api v{}", env!("CARGO_PKG_VERSION"));

    // Seed the in-memory job catalog (read-only for the process lifetime)
    let catalog = Arc::new(StaticJobCatalog::with_sample_jobs());
    info!("Job catalog loaded ({} postings)", catalog.len());

    // Initialize similarity scorer (TfidfScorer with built-in Jaccard fallback)
    let scorer = Arc::new(TfidfScorer);
    info!("Similarity scorer initialized");

    // Build app state
    let state = AppState { catalog, scorer };

    // Build router. CORS is permissive: any origin may call this service.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
