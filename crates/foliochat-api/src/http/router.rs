//! Axum router configuration with middleware.
//!
//! Route table (paths and bodies are a compatibility contract with the
//! existing frontend -- do not rename):
//! - `POST /api/chat`
//! - `POST /api/contact`
//! - `GET  /api/chat-history`
//! - `GET  /api/contact-messages`
//! - `GET  /health`
//!
//! Middleware: permissive CORS, request tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(handlers::chat::chat))
        .route("/api/contact", post(handlers::contact::submit_contact))
        .route("/api/chat-history", get(handlers::chat::chat_history))
        .route(
            "/api/contact-messages",
            get(handlers::contact::contact_messages),
        )
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
