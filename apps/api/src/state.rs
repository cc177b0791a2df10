use std::sync::Arc;

use crate::config::Config;
use crate::portfolio::store::PortfolioStore;
use crate::providers::CompletionGateway;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only portfolio data, loaded once at startup and never mutated.
    pub store: Arc<PortfolioStore>,
    /// Ordered completion providers; empty when no credential is configured.
    pub gateway: Arc<CompletionGateway>,
    pub config: Config,
}
