// Career pipeline: extract → normalize → classify → explain → recommend jobs.
// All model calls go through llm_client; all job-board calls go through job_search.

use thiserror::Error;

use crate::llm_client::LlmError;

pub mod classifier;
pub mod explainer;
pub mod extractor;
pub mod handlers;
pub mod normalizer;
pub mod pipeline;
pub mod prompts;
pub mod recommender;

/// Why a pipeline stage produced no usable value.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("model call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("unrecognized career category: {0:?}")]
    UnrecognizedCategory(String),
}

/// Sentinel shown when strict category checking rejects the model's answer.
pub const SENTINEL_UNRECOGNIZED_CATEGORY: &str = "Error: Unrecognized career category.";

impl StageError {
    /// The user-visible sentinel string for this failure.
    pub fn sentinel(&self) -> &'static str {
        match self {
            StageError::Llm(e) => e.sentinel(),
            StageError::UnrecognizedCategory(_) => SENTINEL_UNRECOGNIZED_CATEGORY,
        }
    }
}
