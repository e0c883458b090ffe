//! Category Classifier: asks the model to place the interests in one of
//! three fixed career categories.
//!
//! Lenient mode forwards whatever the model said. Strict mode maps the answer
//! onto `CareerCategory` and rejects anything else.

use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

use crate::career::prompts::{join_interests, CLASSIFY_PROMPT_TEMPLATE, CLASSIFY_SYSTEM};
use crate::career::StageError;
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CareerCategory {
    #[serde(rename = "STEM")]
    Stem,
    Arts,
    Sports,
}

impl CareerCategory {
    pub const ALL: [CareerCategory; 3] = [
        CareerCategory::Stem,
        CareerCategory::Arts,
        CareerCategory::Sports,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CareerCategory::Stem => "STEM",
            CareerCategory::Arts => "Arts",
            CareerCategory::Sports => "Sports",
        }
    }

    /// Finds the single category named in free text, matching whole words
    /// case-insensitively. `None` when no category or more than one is named.
    pub fn detect(text: &str) -> Option<CareerCategory> {
        let mut found: Option<CareerCategory> = None;

        for word in text.split(|c: char| !c.is_alphanumeric()) {
            let Some(category) = Self::ALL
                .into_iter()
                .find(|c| c.label().eq_ignore_ascii_case(word))
            else {
                continue;
            };
            match found {
                None => found = Some(category),
                Some(existing) if existing == category => {}
                Some(_) => return None,
            }
        }

        found
    }
}

impl fmt::Display for CareerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn build_classify_prompt(interests: &[String]) -> String {
    CLASSIFY_PROMPT_TEMPLATE.replace("{interests}", &join_interests(interests))
}

/// Resolves the model's answer according to the category policy.
pub fn resolve_category(answer: &str, strict: bool) -> Result<String, StageError> {
    if !strict {
        return Ok(answer.trim().to_string());
    }

    CareerCategory::detect(answer)
        .map(|c| c.label().to_string())
        .ok_or_else(|| {
            warn!(%answer, "Classifier answer is not one of STEM, Arts, Sports");
            StageError::UnrecognizedCategory(answer.to_string())
        })
}

pub async fn classify_interests(
    interests: &[String],
    llm: &LlmClient,
    strict: bool,
) -> Result<String, StageError> {
    let prompt = build_classify_prompt(interests);
    let answer = llm.complete(CLASSIFY_SYSTEM, &prompt).await?;
    let category = resolve_category(&answer, strict)?;
    info!(%category, "Interests classified");
    Ok(category)
}
