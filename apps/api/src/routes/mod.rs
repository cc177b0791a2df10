pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/chat", post(handlers::handle_chat))
        .route("/api/v1/project-qa", post(handlers::handle_project_qa))
        .with_state(state)
}
