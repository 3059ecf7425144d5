// Free-form assistant chat: the prompt goes to the model as-is, the reply comes
// back as-is.

pub mod handlers;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::ASSISTANT_SYSTEM;
use crate::llm_client::TextGenerator;

pub async fn chat(llm: &dyn TextGenerator, prompt: &str) -> Result<String, AppError> {
    if prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    info!("Chat request ({} chars)", prompt.chars().count());
    llm.generate(prompt, ASSISTANT_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Chat failed: {e}")))
}
