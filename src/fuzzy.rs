//! Fuzzy matching for filtering selector lists.
//!
//! Wraps the underlying fuzzy matching implementation so the rest of the
//! codebase does not depend on it directly.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// A matcher for fuzzy searching text.
pub struct Matcher {
    inner: SkimMatcherV2,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher {
    pub fn new() -> Self {
        Self {
            inner: SkimMatcherV2::default(),
        }
    }

    /// Check if the pattern fuzzy-matches the text (case-insensitive,
    /// non-consecutive characters allowed).
    pub fn matches(&self, text: &str, pattern: &str) -> bool {
        self.score(text, pattern).is_some()
    }

    /// Match score for ranking results; higher is better. `None` when the
    /// pattern does not match at all.
    pub fn score(&self, text: &str, pattern: &str) -> Option<i64> {
        let pattern_lower = pattern.to_lowercase();
        self.inner.fuzzy_match(text, &pattern_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuzzy_match_basics() {
        let matcher = Matcher::new();

        assert!(matcher.matches("Digi-Key", "dgk"));
        assert!(matcher.matches("Mouser", "msr"));
        assert!(matcher.matches("LCSC", "lcsc"));
        assert!(matcher.matches("LCSC", "LC"));
        assert!(!matcher.matches("Farnell", "xyz"));
    }

    #[test]
    fn score_ranks_exact_over_partial() {
        let matcher = Matcher::new();

        let exact = matcher.score("LCSC", "lcsc").unwrap();
        let partial = matcher.score("LCSC Electronics", "lcsc").unwrap();
        assert!(exact >= partial);
        assert!(matcher.score("Newark", "zzz").is_none());
    }
}
