//! Tool and icon value types.
//!
//! A [`Tool`] is the unit of the catalog: one calculator, converter or text
//! utility. Tools are serializable because the favorites store persists full
//! snapshots of them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque icon descriptor (an SVG path or glyph name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon(String);

impl Icon {
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self(descriptor.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalog entry describing one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Stable identifier, used as route key and favorite key.
    pub id: String,

    /// Display name.
    pub name: String,

    /// One-line description shown in listings.
    pub description: String,

    /// Id of the owning category.
    pub category: String,

    /// Icon descriptor handed to the icon renderer.
    pub icon: Icon,

    /// Static popularity seed.
    pub views: u64,

    /// Opaque style descriptor for the card background.
    pub gradient: String,

    /// Short feature bullets.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Tool {
    /// Build a tool from static metadata.
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        category: &str,
        icon: &str,
        views: u64,
        gradient: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            icon: Icon::new(icon),
            views,
            gradient: gradient.to_string(),
            features: Vec::new(),
        }
    }

    /// Attach feature bullets.
    pub fn with_features(mut self, features: &[&str]) -> Self {
        self.features = features.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Path of this tool's dedicated page.
    pub fn path(&self) -> String {
        format!("/tools/{}", self.id)
    }

    /// Case-insensitive substring match against name and description.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}
