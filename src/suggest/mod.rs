//! Pluggable suggestion sources.
//!
//! The host popup queries whichever source is active for candidates matching
//! the token being typed. Sources are read-only; ranking and remote lookups
//! are out of scope.

/// Read-only source of completion candidates.
pub trait SuggestionSource {
    /// Candidates matching `prefix`, in list order. An empty prefix matches
    /// every item.
    fn candidates(&self, prefix: &str) -> Vec<String>;
}

/// List-backed source with case-insensitive prefix filtering.
#[derive(Debug, Clone, Default)]
pub struct SuggestionList {
    items: Vec<String>,
}

impl SuggestionList {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl SuggestionSource for SuggestionList {
    fn candidates(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect()
    }
}

impl FromIterator<String> for SuggestionList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> SuggestionList {
        SuggestionList::new(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_prefix_filtering() {
        let source = list(&["tag", "taxi", "rust"]);
        assert_eq!(source.candidates("ta"), vec!["tag", "taxi"]);
        assert_eq!(source.candidates("ru"), vec!["rust"]);
        assert!(source.candidates("zz").is_empty());
    }

    #[test]
    fn test_empty_prefix_matches_all() {
        let source = list(&["alice", "bob"]);
        assert_eq!(source.candidates(""), vec!["alice", "bob"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let source = list(&["Alice", "bob"]);
        assert_eq!(source.candidates("al"), vec!["Alice"]);
        assert_eq!(source.candidates("BO"), vec!["bob"]);
    }
}
