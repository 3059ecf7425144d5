use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::chat;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /api/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let response = chat(state.llm.as_ref(), &req.prompt).await?;
    Ok(Json(ChatResponse { response }))
}
