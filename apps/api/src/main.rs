mod assistant;
mod config;
mod errors;
mod portfolio;
mod providers;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::portfolio::store::PortfolioStore;
use crate::providers::CompletionGateway;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Portfolio Assistant API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Load the read-only portfolio data store
    let store = Arc::new(PortfolioStore::load(&config.data_dir)?);
    info!(
        "Portfolio data loaded: {} projects, {} experience entries",
        store.projects().len(),
        store.resume().experience.len()
    );

    // Build the provider gateway in fixed priority order
    let gateway = Arc::new(CompletionGateway::from_config(&config));
    if gateway.is_empty() {
        info!("No completion provider configured; keyword fallback answers all questions");
    } else {
        info!(
            "Completion providers (priority order): {:?}",
            gateway.provider_names()
        );
    }

    // Build app state
    let state = AppState {
        store,
        gateway,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
