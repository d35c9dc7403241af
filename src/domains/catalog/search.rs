//! Search and category filtering over the tool list.
//!
//! Matching is a plain inclusion filter: case-insensitive substring against
//! name and description, ANDed with an optional category. Results keep the
//! order of the input slice; there is no ranking.

use serde::Deserialize;

use super::tool::Tool;

/// Filter `tools` by `query` and, if given, `category`.
pub fn search<'a>(tools: &'a [Tool], query: &str, category: Option<&str>) -> Vec<&'a Tool> {
    let needle = query.trim().to_lowercase();

    tools
        .iter()
        .filter(|tool| category.is_none_or(|c| tool.category == c))
        .filter(|tool| needle.is_empty() || tool.matches(&needle))
        .collect()
}

/// Search parameters as they appear in a `/search?q=..&category=..` URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,

    #[serde(default)]
    pub category: Option<String>,
}

impl SearchQuery {
    /// Parse a raw query string. Malformed input yields an empty query.
    pub fn from_query_string(raw: &str) -> Self {
        let mut query: Self = serde_urlencoded::from_str(raw.trim_start_matches('?')).unwrap_or_default();
        if query.category.as_deref().is_some_and(|c| c.is_empty() || c == "all") {
            query.category = None;
        }
        query
    }

    /// Run this query against `tools`.
    pub fn apply<'a>(&self, tools: &'a [Tool]) -> Vec<&'a Tool> {
        search(tools, &self.q, self.category.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::{CategoryIndex, ToolRegistry};

    fn registry() -> ToolRegistry {
        ToolRegistry::builtin(&CategoryIndex::builtin())
    }

    #[test]
    fn test_empty_query_is_identity() {
        let registry = registry();
        let all = registry.all();
        let result = search(all, "", None);
        assert_eq!(result.len(), all.len());
        assert!(result.iter().zip(all.iter()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_bmi_query() {
        let registry = registry();
        let result = search(registry.all(), "bmi", None);
        assert!(result.iter().any(|t| t.name == "BMI Calculator"));
        for tool in &result {
            let hay = format!("{} {}", tool.name, tool.description).to_lowercase();
            assert!(hay.contains("bmi"), "{} should not match", tool.id);
        }
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let registry = registry();
        let upper = search(registry.all(), "PDF", None);
        let lower = search(registry.all(), "pdf", None);
        assert_eq!(upper, lower);
        assert!(!upper.is_empty());
    }

    #[test]
    fn test_category_only_returns_category_in_order() {
        let registry = registry();
        let result = search(registry.all(), "", Some("color"));
        let expected = registry.in_category("color");
        assert_eq!(result, expected);
    }

    #[test]
    fn test_query_and_category_are_combined() {
        let registry = registry();
        let result = search(registry.all(), "converter", Some("conversion"));
        assert!(!result.is_empty());
        assert!(result.iter().all(|t| t.category == "conversion"));
        assert!(search(registry.all(), "bmi", Some("pdf")).is_empty());
    }

    #[test]
    fn test_whitespace_query_counts_as_empty() {
        let registry = registry();
        assert_eq!(search(registry.all(), "   ", None).len(), registry.len());
    }

    #[test]
    fn test_query_string_parsing() {
        let query = SearchQuery::from_query_string("?q=loan+payment&category=calculation");
        assert_eq!(query.q, "loan payment");
        assert_eq!(query.category.as_deref(), Some("calculation"));

        let all = SearchQuery::from_query_string("q=bmi&category=all");
        assert_eq!(all.category, None);

        assert_eq!(SearchQuery::from_query_string(""), SearchQuery::default());
    }
}
