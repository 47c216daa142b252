// src/routes/mod.rs
pub mod chat;
pub mod health;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use health::health_handler;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// The form is located relative to the crate, not the working directory.
pub const PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

pub fn create_router() -> Router<SharedState> {
    let api_routes = Router::new()
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(PUBLIC_DIR))
        .layer(TraceLayer::new_for_http())
}
