//! The task-name suggestion registry.
//!
//! An append-only, insertion-ordered list of distinct task names used
//! for autocomplete. Deduplication is a case-sensitive exact match on
//! the trimmed form, while filtering is case-insensitive substring
//! matching; the asymmetry is inherited behavior and kept as-is.

use serde::{Deserialize, Serialize};

/// Deduplicated, insertion-ordered task-name list.
///
/// Persists as a plain JSON array of strings. There is no deletion
/// path: names accumulate for the lifetime of the store.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionRegistry {
    names: Vec<String>,
}

impl SuggestionRegistry {
    /// Registers a name, appending it if novel.
    ///
    /// The name is trimmed first; an empty result is silently ignored.
    /// Returns whether the registry changed.
    pub fn register(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        if self.names.iter().any(|n| n == trimmed) {
            return false;
        }
        tracing::debug!(name = trimmed, "task name registered");
        self.names.push(trimmed.to_string());
        true
    }

    /// Names whose lowercase form contains the lowercase `pattern` as a
    /// substring (anywhere, not only as a prefix).
    ///
    /// Lazy and recomputed per call; an empty pattern matches all names.
    pub fn filter<'a>(&'a self, pattern: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        let pattern = pattern.to_lowercase();
        self.names
            .iter()
            .filter(move |n| n.to_lowercase().contains(&pattern))
            .map(String::as_str)
    }

    /// All names in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_deduplicates_exact_matches() {
        let mut registry = SuggestionRegistry::default();
        assert!(registry.register("Email"));
        assert!(!registry.register("Email"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_trims_to_canonical_form() {
        let mut registry = SuggestionRegistry::default();
        assert!(registry.register(" x "));
        assert!(!registry.register("x"));
        assert_eq!(registry.iter().collect::<Vec<_>>(), vec!["x"]);
    }

    #[test]
    fn register_ignores_empty_names() {
        let mut registry = SuggestionRegistry::default();
        assert!(!registry.register(""));
        assert!(!registry.register("   "));
        assert!(registry.is_empty());
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let mut registry = SuggestionRegistry::default();
        registry.register("Email");
        registry.register("email");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn register_preserves_first_insertion_order() {
        let mut registry = SuggestionRegistry::default();
        registry.register("B");
        registry.register("A");
        registry.register("B");
        assert_eq!(registry.iter().collect::<Vec<_>>(), vec!["B", "A"]);
    }

    #[test]
    fn filter_matches_substring_case_insensitively() {
        let mut registry = SuggestionRegistry::default();
        registry.register("Write report");
        registry.register("Email triage");
        registry.register("Reporting sync");

        let matches: Vec<_> = registry.filter("REPORT").collect();
        assert_eq!(matches, vec!["Write report", "Reporting sync"]);
    }

    #[test]
    fn filter_with_empty_pattern_yields_everything() {
        let mut registry = SuggestionRegistry::default();
        registry.register("A");
        registry.register("B");
        assert_eq!(registry.filter("").count(), 2);
    }

    #[test]
    fn filter_is_restartable() {
        let mut registry = SuggestionRegistry::default();
        registry.register("Email");
        assert_eq!(registry.filter("mail").count(), 1);
        assert_eq!(registry.filter("mail").count(), 1);
    }

    #[test]
    fn registry_serializes_as_string_array() {
        let mut registry = SuggestionRegistry::default();
        registry.register("Email");
        let json = serde_json::to_string(&registry).unwrap();
        assert_eq!(json, "[\"Email\"]");
        let parsed: SuggestionRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, registry);
    }
}
