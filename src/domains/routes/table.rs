//! Route table - declarative path pattern to view bindings.
//!
//! Patterns are literal segments plus single-segment `:name` parameters.
//! There are no wildcards. Resolution walks the bindings in declaration
//! order and returns the first match.

use std::fmt;
use tracing::debug;

use super::error::RouteError;
use crate::domains::catalog::ToolRegistry;

// ============================================================================
// View identifiers
// ============================================================================

/// Identity of a lazily loaded view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    About,
    Contact,
    Privacy,
    Terms,
    Categories,
    Favorites,
    Search,
    /// Dedicated page of one tool (`/tools/<id>`).
    Tool(String),
    /// Generic tool page keyed by the `:id` parameter.
    ToolDetail,
    /// Category listing keyed by the `:id` parameter.
    Category,
    NotFound,
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tool(id) => write!(f, "tool:{}", id),
            other => write!(f, "{:?}", other),
        }
    }
}

// ============================================================================
// Patterns
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed path pattern such as `/category/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern. It must start with `/`; parameter names must be
    /// non-empty and unique within the pattern.
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        if !pattern.starts_with('/') {
            return Err(RouteError::invalid_pattern(pattern, "must start with '/'"));
        }

        let mut segments = Vec::new();
        for part in split_segments(pattern) {
            let segment = match part.strip_prefix(':') {
                Some("") => return Err(RouteError::invalid_pattern(pattern, "empty parameter name")),
                Some(name) => {
                    if segments.iter().any(|s| matches!(s, Segment::Param(n) if n == name)) {
                        return Err(RouteError::invalid_pattern(pattern, format!("duplicate parameter '{}'", name)));
                    }
                    Segment::Param(name.to_string())
                }
                None if part.contains('*') => {
                    return Err(RouteError::invalid_pattern(pattern, "wildcards are not supported"));
                }
                None => Segment::Literal(part.to_string()),
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match normalized path segments, capturing parameters.
    fn capture(&self, parts: &[&str]) -> Option<RouteParams> {
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::default();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => params.0.push((name.clone(), part.to_string())),
            }
        }
        Some(params)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

// ============================================================================
// Matches
// ============================================================================

/// Parameters captured from a path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(String, String)>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub view: ViewId,
    /// Pattern that matched.
    pub pattern: String,
    /// Path as navigated to, without query or fragment.
    pub path: String,
    pub params: RouteParams,
    /// Raw query string without the leading `?`.
    pub query: String,
}

// ============================================================================
// Table
// ============================================================================

/// Ordered list of route bindings.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    bindings: Vec<(RoutePattern, ViewId)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding. Earlier bindings take precedence.
    pub fn bind(mut self, pattern: &str, view: ViewId) -> Result<Self, RouteError> {
        self.bindings.push((RoutePattern::parse(pattern)?, view));
        Ok(self)
    }

    /// The site's routes: static pages, one page per tool, then the
    /// parameterized tool and category pages.
    pub fn builtin(tools: &ToolRegistry) -> Result<Self, RouteError> {
        let mut table = Self::new()
            .bind("/", ViewId::Home)?
            .bind("/about", ViewId::About)?
            .bind("/contact", ViewId::Contact)?
            .bind("/privacy", ViewId::Privacy)?
            .bind("/terms", ViewId::Terms)?
            .bind("/categories", ViewId::Categories)?
            .bind("/favorites", ViewId::Favorites)?
            .bind("/search", ViewId::Search)?;

        for tool in tools.all() {
            table = table.bind(&tool.path(), ViewId::Tool(tool.id.clone()))?;
        }

        table
            .bind("/tool/:id", ViewId::ToolDetail)?
            .bind("/category/:id", ViewId::Category)
    }

    /// Resolve `path` to the first matching binding.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let (path, query) = split_path(path);
        let parts: Vec<&str> = split_segments(path).collect();

        let found = self.bindings.iter().find_map(|(pattern, view)| {
            pattern.capture(&parts).map(|params| RouteMatch {
                view: view.clone(),
                pattern: pattern.as_str().to_string(),
                path: normalize(path),
                params,
                query: query.to_string(),
            })
        });

        if found.is_none() {
            debug!("No route matches '{}'", path);
        }
        found
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Patterns in declaration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(p, _)| p.as_str())
    }
}

/// Split off fragment and query string.
fn split_path(raw: &str) -> (&str, &str) {
    let without_fragment = raw.split('#').next().unwrap_or_default();
    match without_fragment.split_once('?') {
        Some((path, query)) => (path, query),
        None => (without_fragment, ""),
    }
}

fn normalize(path: &str) -> String {
    let joined: Vec<&str> = split_segments(path).collect();
    format!("/{}", joined.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::CategoryIndex;

    fn builtin() -> RouteTable {
        RouteTable::builtin(&ToolRegistry::builtin(&CategoryIndex::builtin())).unwrap()
    }

    #[test]
    fn test_literal_tool_route() {
        let m = builtin().resolve("/tools/bmi-calculator").unwrap();
        assert_eq!(m.view, ViewId::Tool("bmi-calculator".to_string()));
        assert_eq!(m.pattern, "/tools/bmi-calculator");
    }

    #[test]
    fn test_parameterized_routes() {
        let table = builtin();
        let m = table.resolve("/tool/json-formatter").unwrap();
        assert_eq!(m.view, ViewId::ToolDetail);
        assert_eq!(m.params.get("id"), Some("json-formatter"));

        let m = table.resolve("/category/pdf").unwrap();
        assert_eq!(m.view, ViewId::Category);
        assert_eq!(m.params.get("id"), Some("pdf"));
    }

    #[test]
    fn test_unknown_path_has_no_match() {
        let table = builtin();
        assert!(table.resolve("/this-does-not-exist").is_none());
        assert!(table.resolve("/tool").is_none());
        assert!(table.resolve("/tool/a/b").is_none());
        assert!(table.resolve("/tools/not-a-tool").is_none());
    }

    #[test]
    fn test_query_fragment_and_trailing_slash() {
        let table = builtin();
        let m = table.resolve("/search/?q=bmi&category=calculation#top").unwrap();
        assert_eq!(m.view, ViewId::Search);
        assert_eq!(m.path, "/search");
        assert_eq!(m.query, "q=bmi&category=calculation");

        assert_eq!(table.resolve("").unwrap().view, ViewId::Home);
        assert_eq!(table.resolve("/").unwrap().path, "/");
    }

    #[test]
    fn test_declaration_order_wins() {
        let table = RouteTable::new()
            .bind("/tool/:id", ViewId::ToolDetail)
            .unwrap()
            .bind("/tool/special", ViewId::About)
            .unwrap();
        assert_eq!(table.resolve("/tool/special").unwrap().view, ViewId::ToolDetail);

        let table = RouteTable::new()
            .bind("/tool/special", ViewId::About)
            .unwrap()
            .bind("/tool/:id", ViewId::ToolDetail)
            .unwrap();
        assert_eq!(table.resolve("/tool/special").unwrap().view, ViewId::About);
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(RoutePattern::parse("tools").is_err());
        assert!(RoutePattern::parse("/tool/:").is_err());
        assert!(RoutePattern::parse("/a/:id/:id").is_err());
        assert!(RoutePattern::parse("/files/*").is_err());
    }

    #[test]
    fn test_builtin_has_route_per_tool() {
        let registry = ToolRegistry::builtin(&CategoryIndex::builtin());
        let table = RouteTable::builtin(&registry).unwrap();
        assert_eq!(table.len(), 8 + registry.len() + 2);
        for tool in registry.all() {
            assert!(table.resolve(&tool.path()).is_some(), "{}", tool.id);
        }
    }
}
