//! Lazy view dispatcher.
//!
//! The dispatcher owns what the main content area shows. Navigating to a
//! route whose view is not loaded yet shows a placeholder and loads the view
//! in the background. Every navigation gets a generation number; a load only
//! replaces the screen if the screen still belongs to its generation, so the
//! last navigation always wins and stale loads are dropped.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{OnceCell, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::error::ViewError;
use super::loader::ViewLoader;
use super::table::{RouteMatch, RouteTable, ViewId};
use super::views::View;

// ============================================================================
// Screen state
// ============================================================================

/// What the content area currently shows.
#[derive(Clone)]
pub enum Screen {
    /// Nothing navigated yet.
    Idle,

    /// The route matched; its view is still loading.
    Placeholder { generation: u64, route: RouteMatch },

    /// The route's view is loaded.
    Ready {
        generation: u64,
        route: RouteMatch,
        view: Arc<dyn View>,
    },

    /// No route matched, or the view failed to load.
    NotFound { generation: u64, path: String },
}

impl Screen {
    pub fn generation(&self) -> u64 {
        match self {
            Self::Idle => 0,
            Self::Placeholder { generation, .. }
            | Self::Ready { generation, .. }
            | Self::NotFound { generation, .. } => *generation,
        }
    }

    /// True once the navigation has produced final content.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Ready { .. } | Self::NotFound { .. })
    }

    /// Path this screen belongs to.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Placeholder { route, .. } | Self::Ready { route, .. } => Some(&route.path),
            Self::NotFound { path, .. } => Some(path),
        }
    }
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("Idle"),
            Self::Placeholder { generation, route } => f
                .debug_struct("Placeholder")
                .field("generation", generation)
                .field("path", &route.path)
                .finish(),
            Self::Ready {
                generation,
                route,
                view,
            } => f
                .debug_struct("Ready")
                .field("generation", generation)
                .field("path", &route.path)
                .field("view", &view.id())
                .finish(),
            Self::NotFound { generation, path } => f
                .debug_struct("NotFound")
                .field("generation", generation)
                .field("path", path)
                .finish(),
        }
    }
}

// ============================================================================
// View cache
// ============================================================================

/// Loaded views, one cell per view id so concurrent loads share one result.
#[derive(Default)]
struct ViewCache {
    cells: Mutex<HashMap<ViewId, Arc<OnceCell<Arc<dyn View>>>>>,
}

impl ViewCache {
    fn cell(&self, id: &ViewId) -> Arc<OnceCell<Arc<dyn View>>> {
        let mut cells = self.cells.lock().unwrap_or_else(|e| e.into_inner());
        cells.entry(id.clone()).or_default().clone()
    }

    fn get(&self, id: &ViewId) -> Option<Arc<dyn View>> {
        let cells = self.cells.lock().unwrap_or_else(|e| e.into_inner());
        cells.get(id).and_then(|cell| cell.get().cloned())
    }

    async fn load(&self, loader: &dyn ViewLoader, id: &ViewId) -> Result<Arc<dyn View>, ViewError> {
        let cell = self.cell(id);
        cell.get_or_try_init(|| loader.load(id)).await.cloned()
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

struct Inner {
    table: RouteTable,
    loader: Arc<dyn ViewLoader>,
    cache: ViewCache,
    generation: AtomicU64,
    screen: watch::Sender<Screen>,
}

impl Inner {
    /// Show the screen of a new navigation unless a newer one got there first.
    fn enter(&self, screen: Screen) {
        let generation = screen.generation();
        self.screen.send_if_modified(|current| {
            if current.generation() < generation {
                *current = screen;
                true
            } else {
                false
            }
        });
    }

    /// Finish a navigation. Returns false if it was superseded.
    fn complete(&self, screen: Screen) -> bool {
        let generation = screen.generation();
        self.screen.send_if_modified(|current| {
            if current.generation() == generation {
                *current = screen;
                true
            } else {
                false
            }
        })
    }
}

/// Resolves paths and drives the content area.
#[derive(Clone)]
pub struct Dispatcher {
    inner: Arc<Inner>,
}

/// Handle to one navigation.
#[derive(Debug)]
pub struct Navigation {
    pub generation: u64,
    task: Option<JoinHandle<()>>,
}

impl Navigation {
    /// True while the view load started by this navigation is running.
    pub fn is_pending(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Wait for this navigation's load, if any, to finish.
    ///
    /// Finishing does not mean its result was shown; a newer navigation may
    /// have superseded it.
    pub async fn settled(self) {
        if let Some(task) = self.task {
            if let Err(e) = task.await {
                warn!("View load task ended abnormally: {}", e);
            }
        }
    }
}

impl Dispatcher {
    pub fn new(table: RouteTable, loader: Arc<dyn ViewLoader>) -> Self {
        info!("Dispatcher ready with {} routes", table.len());

        Self {
            inner: Arc::new(Inner {
                table,
                loader,
                cache: ViewCache::default(),
                generation: AtomicU64::new(0),
                screen: watch::Sender::new(Screen::Idle),
            }),
        }
    }

    /// Navigate to `path`.
    ///
    /// Never fails: an unmatched path shows the not-found screen. Must be
    /// called from within a tokio runtime.
    pub fn navigate(&self, path: &str) -> Navigation {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(route) = self.inner.table.resolve(path) else {
            self.inner.enter(Screen::NotFound {
                generation,
                path: path.to_string(),
            });
            return Navigation { generation, task: None };
        };

        if let Some(view) = self.inner.cache.get(&route.view) {
            self.inner.enter(Screen::Ready {
                generation,
                route,
                view,
            });
            return Navigation { generation, task: None };
        }

        debug!("Loading {} for {}", route.view, route.path);
        self.inner.enter(Screen::Placeholder {
            generation,
            route: route.clone(),
        });

        let inner = self.inner.clone();
        let task = tokio::spawn(async move {
            let screen = match inner.cache.load(inner.loader.as_ref(), &route.view).await {
                Ok(view) => Screen::Ready {
                    generation,
                    route,
                    view,
                },
                Err(e) => {
                    warn!("Failed to load view for {}: {}", route.path, e);
                    Screen::NotFound {
                        generation,
                        path: route.path,
                    }
                }
            };

            let path = screen.path().unwrap_or_default().to_string();
            if !inner.complete(screen) {
                debug!("Discarding stale load for {}", path);
            }
        });

        Navigation {
            generation,
            task: Some(task),
        }
    }

    /// Load `view` into the cache without changing the screen.
    pub async fn prefetch(&self, view: &ViewId) -> Result<(), ViewError> {
        self.inner
            .cache
            .load(self.inner.loader.as_ref(), view)
            .await
            .map(|_| ())
    }

    /// Whether `view` is already loaded.
    pub fn is_loaded(&self, view: &ViewId) -> bool {
        self.inner.cache.get(view).is_some()
    }

    /// Current screen.
    pub fn current(&self) -> Screen {
        self.inner.screen.borrow().clone()
    }

    /// Watch the screen for changes.
    pub fn subscribe(&self) -> watch::Receiver<Screen> {
        self.inner.screen.subscribe()
    }

    pub fn table(&self) -> &RouteTable {
        &self.inner.table
    }
}
