//! Interest Normalizer: maps free-text interest phrases onto canonical tokens.
//!
//! Two stages, applied per comma-separated fragment:
//! 1. exact lookup in `EXACT_SYNONYMS` (deterministic, preferred)
//! 2. substring fallback via `SUBSTRING_RULES`, only when stage 1 misses
//!
//! Fragments that match neither stage pass through cleaned but unmapped.

/// Label some models prepend to the extracted list.
const INTERESTS_LABEL: &str = "interests:";

/// Exact phrase → canonical interest token.
const EXACT_SYNONYMS: &[(&str, &str)] = &[
    ("dashboard", "dashboards"),
    ("dashboards", "dashboards"),
    ("coding", "coding"),
    ("programming", "coding"),
    ("fitness", "fitness"),
    ("exercise", "fitness"),
    ("painting", "painting"),
    ("music", "music"),
    ("singing", "music"),
    ("composing music", "music"),
    ("football", "football"),
    ("basketball", "basketball"),
    ("web designing", "web_design"),
    ("web design", "web_design"),
];

/// Substring needles → canonical token. First matching rule wins.
const SUBSTRING_RULES: &[(&[&str], &str)] = &[
    (&["dashboard"], "dashboards"),
    (&["coding", "programming"], "coding"),
    (&["fitness", "exercise"], "fitness"),
];

/// Lower-cases, removes the `interests:` label and trims.
pub fn clean_fragment(fragment: &str) -> String {
    fragment
        .to_lowercase()
        .replace(INTERESTS_LABEL, "")
        .trim()
        .to_string()
}

/// Stage 1: exact synonym lookup on an already-cleaned token.
pub fn lookup_exact(token: &str) -> Option<&'static str> {
    EXACT_SYNONYMS
        .iter()
        .find(|(phrase, _)| *phrase == token)
        .map(|(_, canonical)| *canonical)
}

/// Stage 2: substring heuristic on an already-cleaned token.
/// Can over-match (e.g. "exercise science" → "fitness"), so it only runs after stage 1 misses.
pub fn match_substring(token: &str) -> Option<&'static str> {
    if token.is_empty() {
        return None;
    }
    SUBSTRING_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| token.contains(n)))
        .map(|(_, canonical)| *canonical)
}

/// Normalizes a single fragment through both stages.
pub fn normalize_interest(fragment: &str) -> String {
    let token = clean_fragment(fragment);
    lookup_exact(&token)
        .or_else(|| match_substring(&token))
        .map(str::to_string)
        .unwrap_or(token)
}

/// Splits extraction output on commas and normalizes every fragment.
///
/// One token per fragment, in mention order. Empty fragments become empty
/// tokens and duplicates are kept.
pub fn normalize_interests(extracted: &str) -> Vec<String> {
    extracted.split(',').map(normalize_interest).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_fragment_strips_label_and_case() {
        assert_eq!(clean_fragment("  Interests: Coding "), "coding");
        assert_eq!(clean_fragment("INTERESTS:football"), "football");
    }

    #[test]
    fn test_exact_synonyms_map_to_canonical() {
        assert_eq!(normalize_interest("Programming"), "coding");
        assert_eq!(normalize_interest("composing music"), "music");
        assert_eq!(normalize_interest("Web Designing"), "web_design");
        assert_eq!(normalize_interest("exercise"), "fitness");
    }

    #[test]
    fn test_canonical_tokens_are_fixed_points() {
        for token in [
            "coding",
            "dashboards",
            "fitness",
            "painting",
            "music",
            "football",
            "basketball",
        ] {
            assert_eq!(normalize_interest(token), token);
            assert_eq!(normalize_interest(&normalize_interest(token)), token);
        }
    }

    #[test]
    fn test_substring_fallback_only_after_exact_miss() {
        assert_eq!(lookup_exact("python programming"), None);
        assert_eq!(match_substring("python programming"), Some("coding"));
        assert_eq!(normalize_interest("Python programming"), "coding");
        assert_eq!(normalize_interest("building dashboards"), "dashboards");
        assert_eq!(normalize_interest("daily exercise routine"), "fitness");
    }

    #[test]
    fn test_substring_first_rule_wins() {
        assert_eq!(match_substring("coding fitness apps"), Some("coding"));
    }

    #[test]
    fn test_unknown_interest_passes_through_cleaned() {
        assert_eq!(normalize_interest(" Astronomy "), "astronomy");
        assert_eq!(match_substring(""), None);
    }

    #[test]
    fn test_cardinality_matches_fragment_count() {
        let extracted = "Interests: coding, , football,coding";
        let interests = normalize_interests(extracted);
        assert_eq!(interests.len(), extracted.split(',').count());
        assert_eq!(interests, vec!["coding", "", "football", "coding"]);
    }

    #[test]
    fn test_empty_extraction_yields_single_empty_token() {
        assert_eq!(normalize_interests(""), vec![String::new()]);
    }
}
