//! Favorites store implementation.
//!
//! The store owns the ordered list of favorite tool snapshots. Reads go to a
//! published snapshot and never wait on storage; mutations are serialized
//! through one async mutex that stays held while the full list is rewritten,
//! so back-to-back mutations persist in call order.

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{Mutex, watch};
use tracing::{debug, info, instrument, warn};

use super::error::FavoritesError;
use crate::core::storage::StorageBackend;
use crate::domains::catalog::Tool;

/// Name of the storage slot holding the favorites list.
pub const FAVORITES_SLOT: &str = "favorites";

/// Lifecycle of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoritesState {
    /// `initialize` has not completed yet.
    Uninitialized,

    /// Initialized with no favorites.
    Empty,

    /// Initialized with at least one favorite.
    Loaded,

    /// Storage is unusable; changes live in memory for this session.
    MemoryOnly,
}

struct Inner {
    state: FavoritesState,
    items: Vec<Tool>,
    /// Ids removed before `initialize`, applied to the persisted list.
    removed_early: HashSet<String>,
}

impl Inner {
    fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|t| t.id == id)
    }

    fn persists(&self) -> bool {
        matches!(self.state, FavoritesState::Empty | FavoritesState::Loaded)
    }

    fn settle(&mut self) {
        if self.persists() {
            self.state = if self.items.is_empty() {
                FavoritesState::Empty
            } else {
                FavoritesState::Loaded
            };
        }
    }
}

/// Persisted set of favorite tools.
pub struct FavoritesStore {
    storage: Arc<dyn StorageBackend>,
    inner: Mutex<Inner>,
    snapshot: watch::Sender<Arc<Vec<Tool>>>,
    state: watch::Sender<FavoritesState>,
}

impl FavoritesStore {
    /// Create an uninitialized store over `storage`.
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self {
            storage,
            inner: Mutex::new(Inner {
                state: FavoritesState::Uninitialized,
                items: Vec::new(),
                removed_early: HashSet::new(),
            }),
            snapshot: watch::Sender::new(Arc::new(Vec::new())),
            state: watch::Sender::new(FavoritesState::Uninitialized),
        }
    }

    /// Load the persisted list.
    ///
    /// Never fails: a missing slot yields an empty list, a corrupted slot is
    /// discarded, and an unusable backend switches the store to memory-only
    /// mode. Favorites added before this call are kept after the persisted
    /// ones, and favorites removed before it stay removed. Calling it again
    /// is a no-op.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> FavoritesState {
        let mut inner = self.inner.lock().await;
        if inner.state != FavoritesState::Uninitialized {
            return inner.state;
        }

        let persisted = match self.storage.read(FAVORITES_SLOT).await {
            Ok(None) => Vec::new(),
            Ok(Some(raw)) => match parse_snapshot(&raw) {
                Ok(tools) => tools,
                Err(e) => {
                    warn!("Discarding persisted favorites: {}", e);
                    if let Err(e) = self.storage.remove(FAVORITES_SLOT).await {
                        warn!("Failed to clear corrupted favorites slot: {}", e);
                    }
                    Vec::new()
                }
            },
            Err(e) => {
                warn!("Favorites storage unavailable, keeping favorites in memory: {}", e);
                inner.state = FavoritesState::MemoryOnly;
                self.publish(&inner);
                return inner.state;
            }
        };

        let removed_early = std::mem::take(&mut inner.removed_early);
        let mut persisted = persisted;
        persisted.retain(|t| !removed_early.contains(&t.id));

        let session = std::mem::replace(&mut inner.items, persisted);
        let had_session = !session.is_empty() || !removed_early.is_empty();
        for tool in session {
            if !inner.items.iter().any(|t| t.id == tool.id) {
                inner.items.push(tool);
            }
        }

        inner.state = FavoritesState::Empty;
        inner.settle();
        if had_session {
            self.persist(&mut inner).await;
        }

        info!("Loaded {} favorites", inner.items.len());
        self.publish(&inner);
        inner.state
    }

    /// Add `tool` unless a favorite with the same id exists.
    ///
    /// Returns true if the tool was added.
    #[instrument(skip(self, tool), fields(id = %tool.id))]
    pub async fn add_favorite(&self, tool: Tool) -> bool {
        let mut inner = self.inner.lock().await;
        self.add_locked(&mut inner, tool).await
    }

    /// Remove the favorite with `id`. The list is rewritten even if `id` was
    /// not present.
    ///
    /// Returns true if a favorite was removed.
    #[instrument(skip(self))]
    pub async fn remove_favorite(&self, id: &str) -> bool {
        let mut inner = self.inner.lock().await;
        self.remove_locked(&mut inner, id).await
    }

    /// Add `tool` if absent, remove it otherwise. Returns true if the tool is
    /// a favorite afterwards.
    #[instrument(skip(self, tool), fields(id = %tool.id))]
    pub async fn toggle_favorite(&self, tool: Tool) -> bool {
        let id = tool.id.clone();
        let mut inner = self.inner.lock().await;
        if inner.contains(&id) {
            self.remove_locked(&mut inner, &id).await;
        } else {
            self.add_locked(&mut inner, tool).await;
        }
        inner.contains(&id)
    }

    /// Whether a tool with `id` is a favorite.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.snapshot.borrow().iter().any(|t| t.id == id)
    }

    /// Current favorites, in the order they were added.
    pub fn favorites(&self) -> Vec<Tool> {
        self.snapshot.borrow().as_ref().clone()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> FavoritesState {
        *self.state.borrow()
    }

    /// Watch the favorites list for changes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<Tool>>> {
        self.snapshot.subscribe()
    }

    async fn add_locked(&self, inner: &mut Inner, tool: Tool) -> bool {
        if inner.contains(&tool.id) {
            debug!("Already a favorite");
            return false;
        }

        if inner.state == FavoritesState::Uninitialized {
            inner.removed_early.remove(&tool.id);
        }
        inner.items.push(tool);
        inner.settle();
        self.publish(inner);
        self.persist(inner).await;
        true
    }

    async fn remove_locked(&self, inner: &mut Inner, id: &str) -> bool {
        if inner.state == FavoritesState::Uninitialized {
            inner.removed_early.insert(id.to_string());
        }

        let before = inner.items.len();
        inner.items.retain(|t| t.id != id);
        let removed = inner.items.len() != before;

        inner.settle();
        self.publish(inner);
        self.persist(inner).await;
        removed
    }

    fn publish(&self, inner: &Inner) {
        self.snapshot.send_replace(Arc::new(inner.items.clone()));
        self.state.send_replace(inner.state);
    }

    /// Rewrite the whole slot from `inner.items`.
    async fn persist(&self, inner: &mut Inner) {
        if !inner.persists() {
            debug!("Favorites not persisted ({:?})", inner.state);
            return;
        }

        if let Err(e) = self.write_slot(&inner.items).await {
            warn!("Failed to persist favorites, continuing in memory: {}", e);
            inner.state = FavoritesState::MemoryOnly;
            self.state.send_replace(inner.state);
        }
    }

    async fn write_slot(&self, items: &[Tool]) -> Result<(), FavoritesError> {
        let json = serde_json::to_string(items)?;
        self.storage.write(FAVORITES_SLOT, &json).await?;
        Ok(())
    }
}

/// Validate a persisted value: it must be a JSON array of tool snapshots.
///
/// Repeated ids keep their first occurrence.
fn parse_snapshot(raw: &str) -> Result<Vec<Tool>, FavoritesError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| FavoritesError::corrupted(e.to_string()))?;

    let serde_json::Value::Array(entries) = value else {
        return Err(FavoritesError::corrupted("expected a list of tools"));
    };

    let mut tools: Vec<Tool> = Vec::with_capacity(entries.len());
    for entry in entries {
        let tool: Tool = serde_json::from_value(entry)
            .map_err(|e| FavoritesError::corrupted(format!("invalid entry: {}", e)))?;
        if tool.id.is_empty() {
            return Err(FavoritesError::corrupted("entry with empty id"));
        }
        if !tools.iter().any(|t| t.id == tool.id) {
            tools.push(tool);
        }
    }

    Ok(tools)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::{MemoryStorage, StorageError, StorageResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::sync::Notify;

    fn tool(id: &str) -> Tool {
        Tool::new(id, id, "", "text", "i", 0, "g")
    }

    fn ids(tools: &[Tool]) -> Vec<&str> {
        tools.iter().map(|t| t.id.as_str()).collect()
    }

    /// Memory storage that counts writes and can be switched off.
    #[derive(Default)]
    struct TestStorage {
        inner: MemoryStorage,
        writes: AtomicUsize,
        fail_reads: AtomicBool,
        fail_writes: AtomicBool,
    }

    #[async_trait]
    impl StorageBackend for TestStorage {
        async fn read(&self, slot: &str) -> StorageResult<Option<String>> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(StorageError::unavailable("disabled"));
            }
            self.inner.read(slot).await
        }

        async fn write(&self, slot: &str, value: &str) -> StorageResult<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StorageError::quota(slot));
            }
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.write(slot, value).await
        }

        async fn remove(&self, slot: &str) -> StorageResult<()> {
            self.inner.remove(slot).await
        }
    }

    /// Memory storage whose next write can be held until released.
    #[derive(Default)]
    struct GatedStorage {
        inner: MemoryStorage,
        hold_next_write: AtomicBool,
        write_started: Notify,
        release: Notify,
    }

    #[async_trait]
    impl StorageBackend for GatedStorage {
        async fn read(&self, slot: &str) -> StorageResult<Option<String>> {
            self.inner.read(slot).await
        }

        async fn write(&self, slot: &str, value: &str) -> StorageResult<()> {
            if self.hold_next_write.swap(false, Ordering::SeqCst) {
                self.write_started.notify_one();
                self.release.notified().await;
            }
            self.inner.write(slot, value).await
        }

        async fn remove(&self, slot: &str) -> StorageResult<()> {
            self.inner.remove(slot).await
        }
    }

    async fn ready_store() -> (Arc<TestStorage>, FavoritesStore) {
        let storage = Arc::new(TestStorage::default());
        let store = FavoritesStore::new(storage.clone());
        store.initialize().await;
        (storage, store)
    }

    #[tokio::test]
    async fn test_absent_slot_initializes_empty() {
        let (_, store) = ready_store().await;
        assert_eq!(store.state(), FavoritesState::Empty);
        assert!(store.favorites().is_empty());
    }

    #[tokio::test]
    async fn test_add_then_remove_restores_previous_set() {
        let (_, store) = ready_store().await;
        store.add_favorite(tool("a")).await;
        let before = store.favorites();

        store.add_favorite(tool("b")).await;
        store.remove_favorite("b").await;

        assert_eq!(store.favorites(), before);
    }

    #[tokio::test]
    async fn test_add_twice_keeps_one() {
        let (_, store) = ready_store().await;
        assert!(store.add_favorite(tool("a")).await);
        assert!(!store.add_favorite(tool("a")).await);
        assert_eq!(ids(&store.favorites()), vec!["a"]);
        assert!(store.is_favorite("a"));
    }

    #[tokio::test]
    async fn test_each_mutation_rewrites_once() {
        let (storage, store) = ready_store().await;
        store.add_favorite(tool("a")).await;
        store.add_favorite(tool("b")).await;
        store.remove_favorite("missing").await;
        assert_eq!(storage.writes.load(Ordering::SeqCst), 3);

        let raw = storage.inner.read(FAVORITES_SLOT).await.unwrap().unwrap();
        let persisted: Vec<Tool> = serde_json::from_str(&raw).unwrap();
        assert_eq!(ids(&persisted), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_duplicate_add_does_not_write() {
        let (storage, store) = ready_store().await;
        store.add_favorite(tool("a")).await;
        store.add_favorite(tool("a")).await;
        assert_eq!(storage.writes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_persisted_list_is_loaded() {
        let storage = Arc::new(MemoryStorage::with_slot(
            FAVORITES_SLOT,
            serde_json::to_string(&vec![tool("x"), tool("y"), tool("x")]).unwrap(),
        ));
        let store = FavoritesStore::new(storage);
        assert_eq!(store.initialize().await, FavoritesState::Loaded);
        assert_eq!(ids(&store.favorites()), vec!["x", "y"]);
    }

    #[tokio::test]
    async fn test_non_json_slot_is_discarded() {
        let storage = Arc::new(MemoryStorage::with_slot(FAVORITES_SLOT, "{not json"));
        let store = FavoritesStore::new(storage.clone());
        assert_eq!(store.initialize().await, FavoritesState::Empty);
        assert!(store.favorites().is_empty());
        assert_eq!(storage.read(FAVORITES_SLOT).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_non_list_slot_is_discarded() {
        for raw in [r#"{"id":"a"}"#, "null", "42", r#"[{"id":"a"}]"#, r#"[1,2]"#] {
            let store = FavoritesStore::new(Arc::new(MemoryStorage::with_slot(FAVORITES_SLOT, raw)));
            assert_eq!(store.initialize().await, FavoritesState::Empty, "input: {}", raw);
            assert!(store.favorites().is_empty());
        }
    }

    #[tokio::test]
    async fn test_reads_before_initialize_are_empty() {
        let storage = Arc::new(MemoryStorage::with_slot(
            FAVORITES_SLOT,
            serde_json::to_string(&vec![tool("x")]).unwrap(),
        ));
        let store = FavoritesStore::new(storage);
        assert_eq!(store.state(), FavoritesState::Uninitialized);
        assert!(store.favorites().is_empty());
        assert!(!store.is_favorite("x"));
    }

    #[tokio::test]
    async fn test_session_additions_merge_after_persisted() {
        let storage = Arc::new(TestStorage::default());
        storage
            .inner
            .write(FAVORITES_SLOT, &serde_json::to_string(&vec![tool("x")]).unwrap())
            .await
            .unwrap();
        let store = FavoritesStore::new(storage.clone());

        store.add_favorite(tool("y")).await;
        store.add_favorite(tool("x")).await;
        assert_eq!(storage.writes.load(Ordering::SeqCst), 0);

        store.initialize().await;
        assert_eq!(ids(&store.favorites()), vec!["x", "y"]);
        assert_eq!(storage.writes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_removal_before_initialize_survives_load() {
        let storage = Arc::new(TestStorage::default());
        storage
            .inner
            .write(FAVORITES_SLOT, &serde_json::to_string(&vec![tool("x"), tool("y")]).unwrap())
            .await
            .unwrap();
        let store = FavoritesStore::new(storage.clone());

        store.remove_favorite("x").await;
        store.initialize().await;

        assert!(!store.is_favorite("x"));
        assert_eq!(ids(&store.favorites()), vec!["y"]);
        assert_eq!(storage.writes.load(Ordering::SeqCst), 1);

        let raw = storage.inner.read(FAVORITES_SLOT).await.unwrap().unwrap();
        let persisted: Vec<Tool> = serde_json::from_str(&raw).unwrap();
        assert_eq!(ids(&persisted), vec!["y"]);
    }

    #[tokio::test]
    async fn test_re_adding_before_initialize_cancels_removal() {
        let storage = Arc::new(MemoryStorage::with_slot(
            FAVORITES_SLOT,
            serde_json::to_string(&vec![tool("x")]).unwrap(),
        ));
        let store = FavoritesStore::new(storage);

        store.remove_favorite("x").await;
        store.add_favorite(tool("x")).await;
        store.initialize().await;

        assert_eq!(ids(&store.favorites()), vec!["x"]);
    }

    #[tokio::test]
    async fn test_toggles_queued_behind_a_write_see_each_other() {
        let storage = Arc::new(GatedStorage::default());
        let store = Arc::new(FavoritesStore::new(storage.clone()));
        store.initialize().await;

        storage.hold_next_write.store(true, Ordering::SeqCst);
        let blocker = tokio::spawn({
            let store = store.clone();
            async move { store.add_favorite(tool("y")).await }
        });
        storage.write_started.notified().await;

        let first = tokio::spawn({
            let store = store.clone();
            async move { store.toggle_favorite(tool("x")).await }
        });
        let second = tokio::spawn({
            let store = store.clone();
            async move { store.toggle_favorite(tool("x")).await }
        });
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        storage.release.notify_one();
        assert!(blocker.await.unwrap());
        let first = first.await.unwrap();
        let second = second.await.unwrap();

        assert_ne!(first, second);
        assert!(!store.is_favorite("x"));
        assert_eq!(ids(&store.favorites()), vec!["y"]);
    }

    #[tokio::test]
    async fn test_unavailable_backend_degrades_to_memory() {
        let storage = Arc::new(TestStorage::default());
        storage.fail_reads.store(true, Ordering::SeqCst);
        storage.fail_writes.store(true, Ordering::SeqCst);
        let store = FavoritesStore::new(storage.clone());

        assert_eq!(store.initialize().await, FavoritesState::MemoryOnly);
        assert!(store.favorites().is_empty());

        store.add_favorite(tool("a")).await;
        assert!(store.is_favorite("a"));
        store.remove_favorite("a").await;
        assert!(store.favorites().is_empty());
        assert_eq!(store.state(), FavoritesState::MemoryOnly);
    }

    #[tokio::test]
    async fn test_write_failure_switches_to_memory_only() {
        let (storage, store) = ready_store().await;
        storage.fail_writes.store(true, Ordering::SeqCst);

        store.add_favorite(tool("a")).await;
        assert_eq!(store.state(), FavoritesState::MemoryOnly);
        assert!(store.is_favorite("a"));

        storage.fail_writes.store(false, Ordering::SeqCst);
        store.add_favorite(tool("b")).await;
        assert_eq!(storage.writes.load(Ordering::SeqCst), 0);
        assert_eq!(ids(&store.favorites()), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_toggle() {
        let (_, store) = ready_store().await;
        assert!(store.toggle_favorite(tool("a")).await);
        assert!(!store.toggle_favorite(tool("a")).await);
        assert!(store.favorites().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_mutations_persist_latest_list() {
        let (storage, store) = ready_store().await;
        let store = Arc::new(store);

        let a = tokio::spawn({
            let store = store.clone();
            async move { store.add_favorite(tool("a")).await }
        });
        let b = tokio::spawn({
            let store = store.clone();
            async move { store.add_favorite(tool("b")).await }
        });
        a.await.unwrap();
        b.await.unwrap();

        let raw = storage.inner.read(FAVORITES_SLOT).await.unwrap().unwrap();
        let persisted: Vec<Tool> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted.len(), 2);
        assert_eq!(persisted, store.favorites());
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let (_, store) = ready_store().await;
        let mut rx = store.subscribe();
        store.add_favorite(tool("a")).await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(ids(&rx.borrow_and_update()), vec!["a"]);
    }
}
