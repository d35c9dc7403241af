//! Shell - the composition root.
//!
//! The shell builds every component once and hands them to each other
//! explicitly: the read-only catalog, the favorites store, the dispatcher
//! and the presentation collaborators. It frames the current screen with a
//! header and footer.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use super::collaborators::{
    ChartRenderer, IconRenderer, Notifier, Severity, SparklineChart, TextIcons, TracingNotifier,
};
use super::config::Config;
use super::error::{Error, Result};
use super::storage::{StorageBackend, open_storage};
use crate::domains::catalog::{CategoryIndex, Tool, ToolRegistry, search};
use crate::domains::favorites::{FavoritesState, FavoritesStore};
use crate::domains::routes::{
    BundleLoader, Dispatcher, Navigation, NotFoundView, Page, PreloadHandle, Preloader, RenderContext,
    RouteMatch, RouteTable, Screen, View, ViewId,
};

/// Background work started by [`Shell::start`].
pub struct Startup {
    pub favorites: JoinHandle<FavoritesState>,
    pub preload: PreloadHandle,
}

impl Startup {
    /// Wait for favorites to load. Preloading keeps running.
    pub async fn favorites_ready(self) -> (FavoritesState, PreloadHandle) {
        let state = match self.favorites.await {
            Ok(state) => state,
            Err(e) => {
                warn!("Favorites initialization task failed: {}", e);
                FavoritesState::MemoryOnly
            }
        };
        (state, self.preload)
    }
}

/// The site shell.
#[derive(Clone)]
pub struct Shell {
    config: Arc<Config>,
    tools: Arc<ToolRegistry>,
    categories: Arc<CategoryIndex>,
    favorites: Arc<FavoritesStore>,
    dispatcher: Dispatcher,
    notifier: Arc<dyn Notifier>,
    icons: Arc<dyn IconRenderer>,
    chart: Arc<dyn ChartRenderer>,
}

impl Shell {
    /// Create a shell with the storage backend named in `config`.
    pub fn new(config: Config) -> Result<Self> {
        let storage = open_storage(&config.storage);
        Self::with_storage(config, storage)
    }

    /// Create a shell over an explicit storage backend.
    pub fn with_storage(config: Config, storage: Arc<dyn StorageBackend>) -> Result<Self> {
        if config.site.name.trim().is_empty() {
            return Err(Error::config("site name must not be empty"));
        }

        let categories = Arc::new(CategoryIndex::builtin());
        let tools = Arc::new(ToolRegistry::builtin(&categories));
        let table = RouteTable::builtin(&tools)?;
        let loader = BundleLoader::new(tools.clone())
            .with_latency(Duration::from_millis(config.views.latency_ms));

        info!(
            "Catalog ready: {} tools, {} categories, {} routes",
            tools.len(),
            categories.all().len(),
            table.len()
        );

        Ok(Self {
            config: Arc::new(config),
            dispatcher: Dispatcher::new(table, Arc::new(loader)),
            favorites: Arc::new(FavoritesStore::new(storage)),
            tools,
            categories,
            notifier: Arc::new(TracingNotifier),
            icons: Arc::new(TextIcons),
            chart: Arc::new(SparklineChart),
        })
    }

    /// Replace the notification collaborator.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Start loading favorites and preloading views in the background.
    ///
    /// Rendering does not wait for either; favorites read as empty until
    /// they are loaded.
    pub fn start(&self) -> Startup {
        let favorites = self.favorites.clone();
        let favorites = tokio::spawn(async move { favorites.initialize().await });

        let hints = Preloader::default_hints(&self.tools, self.config.preload.popular);
        let preload = Preloader::new(self.dispatcher.clone(), hints).spawn(&self.config.preload);

        Startup { favorites, preload }
    }

    /// Navigate to `path`.
    #[instrument(skip(self))]
    pub fn navigate(&self, path: &str) -> Navigation {
        self.dispatcher.navigate(path)
    }

    /// Search the catalog.
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<&Tool> {
        search(self.tools.all(), query, category)
    }

    /// Toggle the favorite status of a tool.
    ///
    /// Tools no longer in the catalog can still be removed from favorites.
    /// Returns whether the tool is a favorite afterwards, or `None` if the id
    /// is unknown to both.
    #[instrument(skip(self))]
    pub async fn toggle_favorite(&self, id: &str) -> Option<bool> {
        if let Some(tool) = self.tools.by_id(id) {
            let now_favorite = self.favorites.toggle_favorite(tool.clone()).await;
            let message = if now_favorite {
                format!("Added {} to favorites", tool.name)
            } else {
                format!("Removed {} from favorites", tool.name)
            };
            self.notifier.notify(&message, Severity::Success);
            return Some(now_favorite);
        }

        if self.favorites.is_favorite(id) {
            self.favorites.remove_favorite(id).await;
            self.notifier
                .notify(&format!("Removed {} from favorites", id), Severity::Info);
            return Some(false);
        }

        self.notifier
            .notify(&format!("Unknown tool '{}'", id), Severity::Warning);
        None
    }

    /// Favorites as pretty-printed JSON snapshots.
    pub fn export_favorites(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.favorites.favorites())?)
    }

    /// Content of the main area.
    pub fn render_content(&self) -> Page {
        let favorites = self.favorites.favorites();
        let ctx = RenderContext {
            tools: &self.tools,
            categories: &self.categories,
            favorites: &favorites,
            icons: self.icons.as_ref(),
            chart: self.chart.as_ref(),
        };

        match self.dispatcher.current() {
            Screen::Idle => Page::new(""),
            Screen::Placeholder { .. } => Page::new("Loading…"),
            Screen::Ready { route, view, .. } => view.render(&ctx, &route),
            Screen::NotFound { path, .. } => {
                let route = RouteMatch {
                    view: ViewId::NotFound,
                    pattern: String::new(),
                    path,
                    params: Default::default(),
                    query: String::new(),
                };
                // Bundled with the shell, never loaded lazily.
                NotFoundView.render(&ctx, &route)
            }
        }
    }

    /// Header, content and footer as text.
    pub fn render(&self) -> String {
        let page = self.render_content();
        let mut out = Vec::with_capacity(page.body.len() + 6);

        out.push(format!(
            "{} | / · /categories · /favorites ({}) · /search?q=",
            self.config.site.name,
            self.favorites.favorites().len()
        ));
        out.push("─".repeat(60));
        out.push(page.title);
        out.extend(page.body);
        out.push("─".repeat(60));
        out.push(format!(
            "{} v{} · {} tools",
            self.config.site.name,
            self.config.site.version,
            self.tools.len()
        ));

        out.join("\n")
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn tools(&self) -> &Arc<ToolRegistry> {
        &self.tools
    }

    pub fn categories(&self) -> &Arc<CategoryIndex> {
        &self.categories
    }

    pub fn favorites(&self) -> &Arc<FavoritesStore> {
        &self.favorites
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
