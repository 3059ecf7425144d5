//! Generation — orchestrates prompt building, the upstream call, and parsing.
//!
//! Flow: GenerationRequest → builder → TextGenerator → parser → ParsedResult.
//! Nothing here keeps state between calls.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::builder::{build_prompt, build_tags_prompt, build_titles_prompt};
use crate::generation::parser::{parse_comma_list, parse_list, parse_response, ParsedResult};
use crate::generation::request::{GenerationKind, GenerationRequest};
use crate::llm_client::prompts::STRUCTURED_OUTPUT_SYSTEM;
use crate::llm_client::TextGenerator;

/// Runs one generation of the requested kind.
///
/// Upstream failures become `AppError::Llm`; an unparseable reply is not an error
/// and yields empty fields.
pub async fn generate(
    llm: &dyn TextGenerator,
    request: &GenerationRequest,
    kind: GenerationKind,
) -> Result<ParsedResult, AppError> {
    info!(
        "Generating {:?} content for {:?} ({} chars)",
        kind,
        request.platform,
        request.text.chars().count()
    );

    let result = match kind {
        GenerationKind::Full => {
            let prompt = build_prompt(&request.text, request.platform);
            let reply = call(llm, &prompt, "Generation").await?;
            parse_response(&reply)
        }
        GenerationKind::Tags => ParsedResult {
            tags: generate_tags(llm, request).await?,
            ..Default::default()
        },
        GenerationKind::Titles => ParsedResult {
            titles: generate_titles(llm, request).await?,
            ..Default::default()
        },
        GenerationKind::Split => {
            let (tags, titles) = tokio::try_join!(
                generate_tags(llm, request),
                generate_titles(llm, request)
            )?;
            ParsedResult {
                tags,
                titles,
                ..Default::default()
            }
        }
    };

    if result.is_empty() {
        warn!("Model reply contained no recognizable sections");
    }

    Ok(result)
}

/// Focused call for a comma-separated tag list.
pub async fn generate_tags(
    llm: &dyn TextGenerator,
    request: &GenerationRequest,
) -> Result<Vec<String>, AppError> {
    let prompt = build_tags_prompt(&request.text, request.platform);
    let reply = call(llm, &prompt, "Tag generation").await?;
    Ok(parse_comma_list(&reply))
}

/// Focused call for titles, one per line.
pub async fn generate_titles(
    llm: &dyn TextGenerator,
    request: &GenerationRequest,
) -> Result<Vec<String>, AppError> {
    let prompt = build_titles_prompt(&request.text, request.platform);
    let reply = call(llm, &prompt, "Title generation").await?;
    Ok(parse_list(&reply))
}

async fn call(llm: &dyn TextGenerator, prompt: &str, what: &str) -> Result<String, AppError> {
    llm.generate(prompt, STRUCTURED_OUTPUT_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("{what} failed: {e}")))
}
