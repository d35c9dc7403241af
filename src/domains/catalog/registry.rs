//! Tool Registry - the merged, read-only tool record store.
//!
//! This module provides:
//! - An explicit merge step over the topical tool sources
//! - Duplicate id detection (first registration wins, later ones are flagged)
//! - Category resolution for every registered tool
//! - Ordered listing and lookup by id

use std::collections::HashMap;
use tracing::{info, warn};

use super::categories::CategoryIndex;
use super::definitions::{ToolSource, builtin_sources};
use super::tool::Tool;

// ============================================================================
// Registration Report
// ============================================================================

/// A tool id registered by more than one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateTool {
    pub id: String,
    /// Source whose record is kept.
    pub kept_from: &'static str,
    /// Source whose record was ignored.
    pub shadowed_from: &'static str,
}

/// A tool whose category id was unknown and got the default category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recategorized {
    pub id: String,
    pub requested: String,
    pub assigned: String,
}

/// Outcome of merging the tool sources.
#[derive(Debug, Clone, Default)]
pub struct RegistrationReport {
    pub duplicates: Vec<DuplicateTool>,
    /// Sources that supplied a record whose id cannot appear in a path.
    pub rejected: Vec<&'static str>,
    pub recategorized: Vec<Recategorized>,
}

impl RegistrationReport {
    /// True when the merge needed no intervention.
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.rejected.is_empty() && self.recategorized.is_empty()
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Read-only store of every registered tool.
///
/// `all()` is the canonical list: it holds each id exactly once, in
/// registration order. `by_id` uses the same records.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<Tool>,
    index: HashMap<String, usize>,
    report: RegistrationReport,
}

impl ToolRegistry {
    /// Build the registry from the builtin topical sources.
    pub fn builtin(categories: &CategoryIndex) -> Self {
        Self::from_sources(builtin_sources(), categories)
    }

    /// Merge `sources` in order into a registry.
    pub fn from_sources(sources: Vec<ToolSource>, categories: &CategoryIndex) -> Self {
        let mut tools: Vec<Tool> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut origin: Vec<&'static str> = Vec::new();
        let mut report = RegistrationReport::default();

        for source in sources {
            for mut tool in source.tools {
                if !is_route_safe(&tool.id) {
                    warn!("Rejecting tool with id '{}' from source '{}'", tool.id, source.name);
                    report.rejected.push(source.name);
                    continue;
                }

                if let Some(&existing) = index.get(&tool.id) {
                    warn!(
                        "Duplicate tool id '{}': keeping '{}' registration, ignoring '{}'",
                        tool.id, origin[existing], source.name
                    );
                    report.duplicates.push(DuplicateTool {
                        id: tool.id,
                        kept_from: origin[existing],
                        shadowed_from: source.name,
                    });
                    continue;
                }

                if !categories.contains(&tool.category) {
                    let assigned = categories.default_category().id.clone();
                    warn!(
                        "Tool '{}' references unknown category '{}', assigning '{}'",
                        tool.id, tool.category, assigned
                    );
                    report.recategorized.push(Recategorized {
                        id: tool.id.clone(),
                        requested: std::mem::replace(&mut tool.category, assigned.clone()),
                        assigned,
                    });
                }

                index.insert(tool.id.clone(), tools.len());
                origin.push(source.name);
                tools.push(tool);
            }
        }

        info!("Registered {} tools", tools.len());

        Self {
            tools,
            index,
            report,
        }
    }

    /// All tools in registration order.
    pub fn all(&self) -> &[Tool] {
        &self.tools
    }

    /// Look up a tool by id.
    pub fn by_id(&self, id: &str) -> Option<&Tool> {
        self.index.get(id).map(|&i| &self.tools[i])
    }

    /// Tools belonging to `category`, in registration order.
    pub fn in_category(&self, category: &str) -> Vec<&Tool> {
        self.tools.iter().filter(|t| t.category == category).collect()
    }

    /// The `n` tools with the highest view counts, most viewed first.
    ///
    /// Ties keep registration order.
    pub fn most_viewed(&self, n: usize) -> Vec<&Tool> {
        let mut ranked: Vec<&Tool> = self.tools.iter().collect();
        ranked.sort_by(|a, b| b.views.cmp(&a.views));
        ranked.truncate(n);
        ranked
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// What the merge step had to do.
    pub fn report(&self) -> &RegistrationReport {
        &self.report
    }
}

/// Ids become the last segment of `/tools/<id>`, so they must be a plain
/// literal segment.
fn is_route_safe(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
