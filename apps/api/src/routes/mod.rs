pub mod health;
pub mod trends;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/generate", post(generation::handle_generate))
        .route("/api/generate-tags", post(generation::handle_generate_tags))
        .route("/api/generate-titles", post(generation::handle_generate_titles))
        // Assistant chat
        .route("/api/chat", post(chat::handle_chat))
        // Trends (static)
        .route("/api/get-trends", get(trends::handle_get_trends))
        .with_state(state)
}
