pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Export API
        .route(
            "/api/v1/export/document",
            post(handlers::handle_export_document),
        )
        .route("/api/v1/export/docx", post(handlers::handle_export_docx))
        .with_state(state)
}
