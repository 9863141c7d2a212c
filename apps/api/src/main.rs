mod config;
mod errors;
mod models;
mod routes;
mod state;
mod taxonomy;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::taxonomy::classifier::KeywordClassifier;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SwarmHire taxonomy API v{}", env!("CARGO_PKG_VERSION"));

    // Static tables are compiled in; problems are authoring bugs, so log and keep serving.
    let issues = taxonomy::log_validation();
    if issues > 0 {
        warn!("Taxonomy has {issues} consistency issue(s); serving anyway");
    }

    let classifier = Arc::new(KeywordClassifier);
    info!(
        "Classifier initialized (backend: keyword, max results: {:?})",
        config.max_results
    );

    let state = AppState {
        config: config.clone(),
        classifier,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the frontend host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
