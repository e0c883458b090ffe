//! Explanation Generator: a short rationale for the chosen category.

use crate::career::prompts::{join_interests, EXPLAIN_PROMPT_TEMPLATE, EXPLAIN_SYSTEM};
use crate::career::StageError;
use crate::llm_client::LlmClient;

pub fn build_explain_prompt(category: &str, interests: &[String]) -> String {
    EXPLAIN_PROMPT_TEMPLATE
        .replace("{category}", category.trim())
        .replace("{interests}", &join_interests(interests))
}

pub async fn explain_category(
    category: &str,
    interests: &[String],
    llm: &LlmClient,
) -> Result<String, StageError> {
    let prompt = build_explain_prompt(category, interests);
    Ok(llm.complete(EXPLAIN_SYSTEM, &prompt).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_prompt_includes_category_and_interests() {
        let interests = vec!["painting".to_string(), "music".to_string()];
        assert_eq!(
            build_explain_prompt(" Arts\n", &interests),
            "Explain why Arts is a good fit for someone interested in painting, music."
        );
    }
}
