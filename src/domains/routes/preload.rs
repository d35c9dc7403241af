//! Background preloading of likely-next views.
//!
//! Preloading is a pure optimization: it waits for the first navigation to
//! settle, then warms the view cache one hint at a time. It never touches
//! the screen, and every failure (including a panicking loader) is dropped
//! at the task boundary.

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::dispatcher::Dispatcher;
use super::table::ViewId;
use crate::core::config::PreloadConfig;
use crate::domains::catalog::ToolRegistry;

/// Warms the dispatcher's view cache in the background.
pub struct Preloader {
    dispatcher: Dispatcher,
    hints: Vec<ViewId>,
}

/// Handle to a running preload.
#[derive(Debug)]
pub struct PreloadHandle {
    task: Option<JoinHandle<usize>>,
}

impl PreloadHandle {
    /// A handle for a preload that never started.
    pub fn skipped() -> Self {
        Self { task: None }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop preloading. Views already warmed stay cached.
    pub fn cancel(&self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }

    /// Wait for the preload to end; returns how many views it warmed.
    pub async fn finished(self) -> usize {
        match self.task {
            Some(task) => task.await.unwrap_or(0),
            None => 0,
        }
    }
}

impl Preloader {
    pub fn new(dispatcher: Dispatcher, hints: Vec<ViewId>) -> Self {
        Self { dispatcher, hints }
    }

    /// Default hints: the shared listing and detail pages, then the pages
    /// of the `popular` most viewed tools.
    pub fn default_hints(tools: &ToolRegistry, popular: usize) -> Vec<ViewId> {
        let mut hints = vec![
            ViewId::Category,
            ViewId::ToolDetail,
            ViewId::Favorites,
            ViewId::Search,
        ];
        hints.extend(
            tools
                .most_viewed(popular)
                .into_iter()
                .map(|t| ViewId::Tool(t.id.clone())),
        );
        hints
    }

    /// Start preloading unless `config` says not to.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(self, config: &PreloadConfig) -> PreloadHandle {
        if !config.enabled {
            debug!("Preloading disabled");
            return PreloadHandle::skipped();
        }
        if config.save_data {
            info!("Save-data mode, skipping preload");
            return PreloadHandle::skipped();
        }

        PreloadHandle {
            task: Some(tokio::spawn(self.run())),
        }
    }

    async fn run(self) -> usize {
        let mut screens = self.dispatcher.subscribe();
        let ready = screens.wait_for(|s| s.is_settled()).await.is_ok();
        if !ready {
            return 0;
        }

        let mut warmed = 0;
        for hint in &self.hints {
            if self.dispatcher.is_loaded(hint) {
                continue;
            }

            match AssertUnwindSafe(self.dispatcher.prefetch(hint)).catch_unwind().await {
                Ok(Ok(())) => warmed += 1,
                Ok(Err(e)) => debug!("Preload of {} failed: {}", hint, e),
                Err(_) => debug!("Preload of {} panicked", hint),
            }
            tokio::task::yield_now().await;
        }

        debug!("Preloaded {} views", warmed);
        warmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::CategoryIndex;
    use crate::domains::routes::error::ViewError;
    use crate::domains::routes::loader::{BundleLoader, ViewLoader};
    use crate::domains::routes::table::RouteTable;
    use crate::domains::routes::views::View;
    use async_trait::async_trait;
    use std::sync::Arc;

    fn registry() -> Arc<ToolRegistry> {
        Arc::new(ToolRegistry::builtin(&CategoryIndex::builtin()))
    }

    fn dispatcher(tools: &Arc<ToolRegistry>, loader: Arc<dyn ViewLoader>) -> Dispatcher {
        Dispatcher::new(RouteTable::builtin(tools).unwrap(), loader)
    }

    fn enabled() -> PreloadConfig {
        PreloadConfig {
            enabled: true,
            save_data: false,
            popular: 3,
        }
    }

    #[test]
    fn test_default_hints_include_popular_tools() {
        let tools = registry();
        let hints = Preloader::default_hints(&tools, 2);
        assert_eq!(hints.len(), 6);
        let top = &tools.most_viewed(1)[0].id;
        assert!(hints.contains(&ViewId::Tool(top.clone())));
    }

    #[tokio::test]
    async fn test_waits_for_first_navigation_then_warms() {
        let tools = registry();
        let dispatcher = dispatcher(&tools, Arc::new(BundleLoader::new(tools.clone())));
        let hints = Preloader::default_hints(&tools, 3);
        let handle = Preloader::new(dispatcher.clone(), hints.clone()).spawn(&enabled());

        tokio::task::yield_now().await;
        assert!(!dispatcher.is_loaded(&ViewId::Search));

        dispatcher.navigate("/").settled().await;
        assert_eq!(handle.finished().await, hints.len());
        assert!(hints.iter().all(|h| dispatcher.is_loaded(h)));
    }

    #[tokio::test]
    async fn test_save_data_skips() {
        let tools = registry();
        let dispatcher = dispatcher(&tools, Arc::new(BundleLoader::new(tools.clone())));
        let config = PreloadConfig {
            save_data: true,
            ..enabled()
        };
        let handle = Preloader::new(dispatcher.clone(), vec![ViewId::Search]).spawn(&config);
        assert!(!handle.is_running());

        dispatcher.navigate("/").settled().await;
        assert_eq!(handle.finished().await, 0);
        assert!(!dispatcher.is_loaded(&ViewId::Search));
    }

    struct FlakyLoader;

    #[async_trait]
    impl ViewLoader for FlakyLoader {
        async fn load(&self, id: &ViewId) -> Result<Arc<dyn View>, ViewError> {
            match id {
                ViewId::Search => panic!("bundle exploded"),
                ViewId::Favorites => Err(ViewError::load_failed(id.clone(), "offline")),
                _ => Ok(Arc::new(crate::domains::routes::views::NotFoundView)),
            }
        }
    }

    #[tokio::test]
    async fn test_failures_are_swallowed() {
        let tools = registry();
        let dispatcher = dispatcher(&tools, Arc::new(FlakyLoader));
        dispatcher.navigate("/about").settled().await;

        let hints = vec![ViewId::Search, ViewId::Favorites, ViewId::Terms];
        let warmed = Preloader::new(dispatcher.clone(), hints).spawn(&enabled()).finished().await;

        assert_eq!(warmed, 1);
        assert!(dispatcher.is_loaded(&ViewId::Terms));
        assert!(!dispatcher.is_loaded(&ViewId::Favorites));
    }

    #[tokio::test]
    async fn test_cancel() {
        let tools = registry();
        let dispatcher = dispatcher(&tools, Arc::new(BundleLoader::new(tools.clone())));
        let handle = Preloader::new(dispatcher, vec![ViewId::Search]).spawn(&enabled());
        handle.cancel();
        assert_eq!(handle.finished().await, 0);
    }
}
