//! Title search matching module
//!
//! Pure matching logic, decoupled from query-string parsing and response
//! building. All comparisons are Unicode-lowercase case-insensitive.

/// Outcome of matching a query against the stored titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A title equal to the query (ignoring case). Carries the stored
    /// spelling so callers can redirect to the exact entry.
    Exact(String),
    /// Titles containing the query as a substring (ignoring case), in the
    /// order they were given. Empty when nothing matches.
    Partial(Vec<String>),
}

/// Match `query` against `titles`.
///
/// An exact match wins outright: the first case-insensitive equal title is
/// returned and no substring collection happens. Callers are expected to
/// trim the query and handle the empty case before calling.
pub fn match_titles(query: &str, titles: &[String]) -> SearchOutcome {
    let needle = query.to_lowercase();

    if let Some(title) = titles.iter().find(|t| t.to_lowercase() == needle) {
        return SearchOutcome::Exact(title.clone());
    }

    let matches = titles
        .iter()
        .filter(|t| t.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    SearchOutcome::Partial(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_titles() -> Vec<String> {
        vec![
            "Category Theory".to_string(),
            "Cats".to_string(),
            "Python".to_string(),
        ]
    }

    #[test]
    fn test_exact_match_ignores_case() {
        let outcome = match_titles("cats", &sample_titles());
        assert_eq!(outcome, SearchOutcome::Exact("Cats".to_string()));
    }

    #[test]
    fn test_exact_match_returns_stored_spelling() {
        let outcome = match_titles("PYTHON", &sample_titles());
        assert_eq!(outcome, SearchOutcome::Exact("Python".to_string()));
    }

    #[test]
    fn test_exact_match_beats_substring_matches() {
        // "cats" is a substring of nothing else here, but even when other
        // titles contain the query, equality short-circuits.
        let titles = vec!["Cat".to_string(), "Catalog".to_string()];
        let outcome = match_titles("cat", &titles);
        assert_eq!(outcome, SearchOutcome::Exact("Cat".to_string()));
    }

    #[test]
    fn test_substring_matches_preserve_order() {
        let outcome = match_titles("cat", &sample_titles());
        assert_eq!(
            outcome,
            SearchOutcome::Partial(vec![
                "Category Theory".to_string(),
                "Cats".to_string(),
            ])
        );
    }

    #[test]
    fn test_no_match_is_empty_partial() {
        let outcome = match_titles("zebra", &sample_titles());
        assert_eq!(outcome, SearchOutcome::Partial(Vec::new()));
    }

    #[test]
    fn test_first_exact_match_wins() {
        // Two spellings that fold to the same key: list order decides.
        let titles = vec!["Rust".to_string(), "RUST".to_string()];
        let outcome = match_titles("rust", &titles);
        assert_eq!(outcome, SearchOutcome::Exact("Rust".to_string()));
    }
}
