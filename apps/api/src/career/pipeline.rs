//! Career pipeline: runs every stage for one request, strictly in sequence.
//!
//! Flow: extract_interests → normalize_interests → classify_interests →
//!       explain_category → JobRecommender::recommend → CareerAdvice.
//!
//! A failed model stage stops the pipeline: the failed field carries its
//! sentinel and every later field gets a fixed placeholder, so a failure is
//! never fed into the next prompt. The request itself still succeeds.

use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::career::classifier::classify_interests;
use crate::career::explainer::explain_category;
use crate::career::extractor::extract_interests;
use crate::career::normalizer::normalize_interests;
use crate::career::recommender::{JobRecommender, NO_JOBS_FALLBACK};
use crate::career::StageError;
use crate::llm_client::LlmClient;

/// Explanation used when an earlier stage failed.
pub const EXPLANATION_SKIPPED: &str = "Explanation unavailable because an earlier step failed.";

/// Pipeline output, serialized as the `/career-bot` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerAdvice {
    pub interests: Vec<String>,
    pub career_category: String,
    pub explanation: String,
    pub job_recommendations: Vec<String>,
}

impl CareerAdvice {
    fn failed_at_extraction(error: &StageError) -> Self {
        CareerAdvice {
            interests: Vec::new(),
            career_category: error.sentinel().to_string(),
            explanation: EXPLANATION_SKIPPED.to_string(),
            job_recommendations: vec![NO_JOBS_FALLBACK.to_string()],
        }
    }

    fn failed_at_classification(interests: Vec<String>, error: &StageError) -> Self {
        CareerAdvice {
            interests,
            career_category: error.sentinel().to_string(),
            explanation: EXPLANATION_SKIPPED.to_string(),
            job_recommendations: vec![NO_JOBS_FALLBACK.to_string()],
        }
    }

    fn failed_at_explanation(interests: Vec<String>, category: String, error: &StageError) -> Self {
        CareerAdvice {
            interests,
            career_category: category,
            explanation: error.sentinel().to_string(),
            job_recommendations: vec![NO_JOBS_FALLBACK.to_string()],
        }
    }
}

/// Everything a pipeline run needs besides the user's text.
pub struct CareerPipeline<'a> {
    pub llm: &'a LlmClient,
    pub recommender: &'a dyn JobRecommender,
    pub strict_category: bool,
}

impl CareerPipeline<'_> {
    pub async fn run(&self, user_input: &str) -> CareerAdvice {
        let request_id = Uuid::new_v4();
        let span = info_span!("career_pipeline", %request_id, backend = self.recommender.backend());
        self.run_stages(user_input).instrument(span).await
    }

    async fn run_stages(&self, user_input: &str) -> CareerAdvice {
        if user_input.trim().is_empty() {
            info!("Empty user input; extraction still runs");
        }

        // Step 1: extract
        let extracted = match extract_interests(user_input, self.llm).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Interest extraction failed: {e}");
                return CareerAdvice::failed_at_extraction(&e);
            }
        };

        // Step 2: normalize
        let interests = normalize_interests(&extracted);
        info!(?interests, "Interests normalized");

        // Step 3: classify
        let category = match classify_interests(&interests, self.llm, self.strict_category).await {
            Ok(category) => category,
            Err(e) => {
                warn!("Classification failed: {e}");
                return CareerAdvice::failed_at_classification(interests, &e);
            }
        };

        // Step 4: explain
        let explanation = match explain_category(&category, &interests, self.llm).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Explanation failed: {e}");
                return CareerAdvice::failed_at_explanation(interests, category, &e);
            }
        };

        // Step 5: jobs
        let job_recommendations = self.recommender.recommend(&interests).await;

        CareerAdvice {
            interests,
            career_category: category,
            explanation,
            job_recommendations,
        }
    }
}
