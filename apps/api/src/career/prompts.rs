// All model prompts for the career pipeline.
// Templates use `{placeholder}` markers replaced before sending.

/// System prompt for interest extraction.
pub const EXTRACT_SYSTEM: &str = "You are an assistant that extracts main interests from user conversations. \
    Answer in 1-2 short phrases separated by commas.";

/// System prompt for category classification.
pub const CLASSIFY_SYSTEM: &str = "You are a helpful assistant that maps interests to career paths from: \
    STEM, Arts, Sports. Answer with only the category.";

/// Classification prompt. Replace `{interests}`.
pub const CLASSIFY_PROMPT_TEMPLATE: &str = "The following are the user interests: {interests}. \
    Which category do they best fit into among STEM, Arts, Sports?";

/// System prompt for the rationale.
pub const EXPLAIN_SYSTEM: &str =
    "You are a career guide. Give a concise 1-2 sentence explanation for the recommended career path.";

/// Explanation prompt. Replace `{category}` and `{interests}`.
pub const EXPLAIN_PROMPT_TEMPLATE: &str =
    "Explain why {category} is a good fit for someone interested in {interests}.";

/// System prompt for model-generated job titles. Replace `{location}`.
pub const JOB_TITLES_SYSTEM_TEMPLATE: &str = "You are a career guide that suggests 5-10 job titles \
    suitable for the user interests in {location}.\n\
    Output ONLY the job titles, separated strictly by commas, with NO extra text.";

/// Job-title prompt. Replace `{location}` and `{interests}`.
pub const JOB_TITLES_PROMPT_TEMPLATE: &str =
    "Suggest 5-10 job titles in {location} for someone interested in: {interests}.";

/// Interests are always rendered into prompts comma-joined, in mention order.
pub fn join_interests(interests: &[String]) -> String {
    interests.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_interests_preserves_order() {
        let interests = vec!["coding".to_string(), "football".to_string()];
        assert_eq!(join_interests(&interests), "coding, football");
    }

    #[test]
    fn test_join_interests_empty_is_empty_string() {
        assert_eq!(join_interests(&[]), "");
    }

    #[test]
    fn test_templates_carry_their_placeholders() {
        assert!(CLASSIFY_PROMPT_TEMPLATE.contains("{interests}"));
        assert!(EXPLAIN_PROMPT_TEMPLATE.contains("{category}"));
        assert!(EXPLAIN_PROMPT_TEMPLATE.contains("{interests}"));
        assert!(JOB_TITLES_SYSTEM_TEMPLATE.contains("{location}"));
        assert!(JOB_TITLES_PROMPT_TEMPLATE.contains("{location}"));
    }
}
