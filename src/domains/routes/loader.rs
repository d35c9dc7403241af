//! View loading.
//!
//! Each view is a separately loaded bundle. [`BundleLoader`] is the builtin
//! loader: it builds views from the catalog, optionally after a simulated
//! network delay.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::error::ViewError;
use super::table::ViewId;
use super::views::{
    CategoriesView, CategoryView, FavoritesView, HomeView, NotFoundView, SearchView,
    StaticPageView, ToolView, View,
};
use crate::domains::catalog::ToolRegistry;

/// Loads view implementations on demand.
#[async_trait]
pub trait ViewLoader: Send + Sync {
    async fn load(&self, id: &ViewId) -> Result<Arc<dyn View>, ViewError>;
}

/// Builtin loader for the site's views.
pub struct BundleLoader {
    tools: Arc<ToolRegistry>,
    latency: Duration,
}

impl BundleLoader {
    pub fn new(tools: Arc<ToolRegistry>) -> Self {
        Self {
            tools,
            latency: Duration::ZERO,
        }
    }

    /// Delay every load by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl ViewLoader for BundleLoader {
    async fn load(&self, id: &ViewId) -> Result<Arc<dyn View>, ViewError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        debug!("Loading view bundle {}", id);

        let view: Arc<dyn View> = match id {
            ViewId::Home => Arc::new(HomeView),
            ViewId::About => Arc::new(StaticPageView::new(id.clone(), "About", ABOUT)),
            ViewId::Contact => Arc::new(StaticPageView::new(id.clone(), "Contact", CONTACT)),
            ViewId::Privacy => Arc::new(StaticPageView::new(id.clone(), "Privacy Policy", PRIVACY)),
            ViewId::Terms => Arc::new(StaticPageView::new(id.clone(), "Terms of Service", TERMS)),
            ViewId::Categories => Arc::new(CategoriesView),
            ViewId::Favorites => Arc::new(FavoritesView),
            ViewId::Search => Arc::new(SearchView),
            ViewId::Tool(tool_id) => {
                if self.tools.by_id(tool_id).is_none() {
                    return Err(ViewError::missing(id.clone()));
                }
                Arc::new(ToolView::fixed(tool_id.clone()))
            }
            ViewId::ToolDetail => Arc::new(ToolView::by_param()),
            ViewId::Category => Arc::new(CategoryView),
            ViewId::NotFound => Arc::new(NotFoundView),
        };

        Ok(view)
    }
}

const ABOUT: &[&str] = &[
    "Free calculators, converters and text utilities in one place.",
    "Every tool runs in your browser; nothing you type is uploaded.",
];

const CONTACT: &[&str] = &["Suggestions and bug reports are welcome through the feedback form."];

const PRIVACY: &[&str] = &[
    "Favorites are stored on this device only.",
    "Clearing site data removes them.",
];

const TERMS: &[&str] = &["Results are provided as-is, without warranty of accuracy."];
