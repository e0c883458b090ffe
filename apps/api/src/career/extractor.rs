//! Interest extraction: the first model call of the pipeline.

use tracing::debug;

use crate::career::prompts::EXTRACT_SYSTEM;
use crate::career::StageError;
use crate::llm_client::LlmClient;

/// Asks the model for the user's main interests as comma-separated phrases.
///
/// The raw user text is sent as-is; an empty input still makes the call.
pub async fn extract_interests(user_input: &str, llm: &LlmClient) -> Result<String, StageError> {
    let extracted = llm.complete(EXTRACT_SYSTEM, user_input).await?;
    debug!(%extracted, "Interests extracted");
    Ok(extracted)
}
