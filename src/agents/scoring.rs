//! Capability scoring for subtask routing
//!
//! Scoring is binary by design: a worker either matches a category's
//! keyword set (score 10) or it does not (score 0). There is no partial
//! credit; ties are broken by registration order in the orchestrator.

use super::types::SubtaskCategory;

/// Score awarded when a worker's role or capabilities match a category
pub const MATCH_SCORE: u8 = 10;

/// Static mapping from subtask category to role keywords
const CATEGORY_KEYWORDS: &[(SubtaskCategory, &[&str])] = &[
    (
        SubtaskCategory::Architecture,
        &["architect", "planner", "strategist"],
    ),
    (SubtaskCategory::Design, &["designer", "ui", "ux"]),
    (
        SubtaskCategory::Content,
        &["content", "writer", "copywriter"],
    ),
    (
        SubtaskCategory::Development,
        &["developer", "coder", "programmer"],
    ),
    (SubtaskCategory::Seo, &["seo", "marketing", "optimization"]),
];

/// Keywords that qualify a worker for the given category
pub fn keywords_for(category: SubtaskCategory) -> &'static [&'static str] {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}

/// Score a worker for a subtask category
///
/// Returns [`MATCH_SCORE`] if the role string or any capability string
/// case-insensitively contains one of the category's keywords, else 0.
/// Pure and idempotent.
pub fn score(role: &str, capabilities: &[String], category: SubtaskCategory) -> u8 {
    let role = role.to_lowercase();
    for keyword in keywords_for(category) {
        if role.contains(keyword)
            || capabilities
                .iter()
                .any(|c| c.to_lowercase().contains(keyword))
        {
            return MATCH_SCORE;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn role_match_is_case_insensitive() {
        assert_eq!(
            score("UI/UX Designer", &[], SubtaskCategory::Design),
            MATCH_SCORE
        );
        assert_eq!(
            score("SOLUTIONS ARCHITECT", &[], SubtaskCategory::Architecture),
            MATCH_SCORE
        );
    }

    #[test]
    fn capability_match_counts_when_role_does_not() {
        assert_eq!(
            score("Generalist", &caps(&["seo", "analytics"]), SubtaskCategory::Seo),
            MATCH_SCORE
        );
    }

    #[test]
    fn no_match_scores_zero() {
        assert_eq!(
            score("Accountant", &caps(&["invoicing"]), SubtaskCategory::Development),
            0
        );
    }

    #[test]
    fn scoring_is_idempotent() {
        let capabilities = caps(&["content", "copywriting"]);
        let first = score("Writer", &capabilities, SubtaskCategory::Content);
        let second = score("Writer", &capabilities, SubtaskCategory::Content);
        assert_eq!(first, second);
    }

    #[test]
    fn containment_matches_substrings() {
        // "optimization" appears inside a longer capability string
        assert_eq!(
            score(
                "Analyst",
                &caps(&["conversion-optimization"]),
                SubtaskCategory::Seo
            ),
            MATCH_SCORE
        );
    }
}
