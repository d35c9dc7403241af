//! Category index.
//!
//! Categories come from a fixed list built once at startup. Lookup is total:
//! an unknown id resolves to the first category in the list, so a tool whose
//! author mistyped its category still renders somewhere.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::tool::Icon;

/// A named grouping of tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: Icon,
    pub gradient: String,
}

impl Category {
    fn new(id: &str, name: &str, description: &str, icon: &str, gradient: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: Icon::new(icon),
            gradient: gradient.to_string(),
        }
    }

    /// Path of this category's listing page.
    pub fn path(&self) -> String {
        format!("/category/{}", self.id)
    }
}

/// Read-only index over the fixed category list.
#[derive(Debug, Clone)]
pub struct CategoryIndex {
    categories: Vec<Category>,
}

impl CategoryIndex {
    /// Build an index from an explicit list.
    ///
    /// The first entry is the default category. An empty list is replaced by
    /// the builtin list so that `by_id` always has something to return.
    pub fn new(categories: Vec<Category>) -> Self {
        if categories.is_empty() {
            warn!("Empty category list supplied, using builtin categories");
            return Self::builtin();
        }
        Self { categories }
    }

    /// The site's builtin categories, in display order.
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                Category::new("calculation", "Calculators", "Financial, health and math calculators", "M4 2h16v20H4z", "from-blue-500 to-indigo-600"),
                Category::new("conversion", "Unit Converters", "Length, weight, temperature and more", "M7 16l-4-4 4-4M17 8l4 4-4 4", "from-emerald-500 to-teal-600"),
                Category::new("image", "Image Tools", "Resize, compress and convert images", "M4 16l4-4 4 4 4-6 4 6", "from-pink-500 to-rose-600"),
                Category::new("pdf", "PDF Tools", "Merge, split and convert PDF files", "M6 2h9l5 5v15H6z", "from-red-500 to-orange-600"),
                Category::new("text", "Text Tools", "Transform, count and encode text", "M4 6h16M4 12h16M4 18h10", "from-slate-500 to-gray-700"),
                Category::new("downloader", "Downloaders", "Save media from supported sites", "M12 4v12m0 0l-4-4m4 4l4-4", "from-cyan-500 to-sky-600"),
                Category::new("color", "Color Tools", "Pick, convert and build palettes", "M12 3a9 9 0 100 18", "from-fuchsia-500 to-purple-600"),
                Category::new("developer", "Developer Tools", "Format, encode and inspect data", "M8 9l-3 3 3 3m8-6l3 3-3 3", "from-zinc-600 to-neutral-800"),
                Category::new("seo", "SEO Tools", "Meta tags, keywords and site checks", "M11 4a7 7 0 100 14", "from-lime-500 to-green-600"),
                Category::new("writing", "Writing Tools", "Generate and rework prose", "M15 3l6 6-12 12H3v-6z", "from-amber-500 to-yellow-600"),
                Category::new("grammar", "Grammar Tools", "Check spelling, grammar and style", "M5 13l4 4L19 7", "from-violet-500 to-indigo-700"),
            ],
        }
    }

    /// Resolve a category id, falling back to the default category.
    pub fn by_id(&self, id: &str) -> &Category {
        match self.categories.iter().find(|c| c.id == id) {
            Some(category) => category,
            None => {
                debug!("Unknown category '{}', using default", id);
                self.default_category()
            }
        }
    }

    /// The category returned for unknown ids.
    pub fn default_category(&self) -> &Category {
        &self.categories[0]
    }

    /// Whether `id` names a real category.
    pub fn contains(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    pub fn all(&self) -> &[Category] {
        &self.categories
    }
}

impl Default for CategoryIndex {
    fn default() -> Self {
        Self::builtin()
    }
}
