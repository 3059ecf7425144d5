//! Axum route handlers for the Generation API.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::error;

use crate::errors::AppError;
use crate::generation::generator::{generate, generate_tags, generate_titles};
use crate::generation::parser::ParsedResult;
use crate::generation::request::{GenerationKind, GenerationRequest, Platform};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    #[serde(default)]
    pub prompt: String,
    pub platform: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Body of the older single-category endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleCategoryBody {
    #[serde(default)]
    pub input_text: String,
    pub platform: Option<String>,
}

impl SingleCategoryBody {
    fn into_request(self) -> Result<GenerationRequest, AppError> {
        if self.input_text.trim().is_empty() {
            return Err(AppError::Validation("Input text is required.".to_string()));
        }
        let platform = Platform::from_legacy(self.platform.as_deref());
        GenerationRequest::new(&self.input_text, platform, "inputText")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate
///
/// Builds the prompt for the requested `type` (default `full`), calls the model,
/// and returns whatever sections could be parsed.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateBody>,
) -> Result<Json<ParsedResult>, AppError> {
    let platform = Platform::from_request(body.platform.as_deref())?;
    let kind = GenerationKind::from_request(body.kind.as_deref())?;
    let request = GenerationRequest::new(&body.prompt, platform, "prompt")?;

    let result = generate(state.llm.as_ref(), &request, kind).await?;
    Ok(Json(result))
}

/// POST /api/generate-tags
///
/// Returns a bare JSON array. On upstream failure: 500 with `[]` so the
/// extension can render an empty state.
pub async fn handle_generate_tags(
    State(state): State<AppState>,
    Json(body): Json<SingleCategoryBody>,
) -> Result<Response, AppError> {
    let request = body.into_request()?;
    Ok(match generate_tags(state.llm.as_ref(), &request).await {
        Ok(tags) => Json(tags).into_response(),
        Err(e) => empty_list_failure(e),
    })
}

/// POST /api/generate-titles
///
/// Same contract as `/api/generate-tags`.
pub async fn handle_generate_titles(
    State(state): State<AppState>,
    Json(body): Json<SingleCategoryBody>,
) -> Result<Response, AppError> {
    let request = body.into_request()?;
    Ok(match generate_titles(state.llm.as_ref(), &request).await {
        Ok(titles) => Json(titles).into_response(),
        Err(e) => empty_list_failure(e),
    })
}

fn empty_list_failure(err: AppError) -> Response {
    error!("{err}");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(Vec::<String>::new())).into_response()
}
