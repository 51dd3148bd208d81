//! Durable favorites set
//!
//! Membership survives process restarts through a single storage key
//! holding a JSON list of asset identifiers. The persisted value is always
//! a complete snapshot of the in-memory set, never a diff, so one corrupted
//! write cannot compound across writes.

use crate::{constants::FAVORITES_STORAGE_KEY, error::PersistenceError};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::sync::watch;

/// Durable storage for the favorites snapshot
///
/// One logical key, read once at startup and overwritten wholesale on every
/// mutation.
#[async_trait]
pub trait FavoritesBackend: Send + Sync {
    /// Reads the persisted snapshot; `None` when nothing was ever stored
    async fn load(&self) -> Result<Option<String>, PersistenceError>;

    /// Overwrites the persisted snapshot
    async fn store(&self, payload: &str) -> Result<(), PersistenceError>;
}

/// File-based backend: one file named by the storage key inside a data
/// directory
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend rooted at `data_dir`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(FAVORITES_STORAGE_KEY),
        }
    }
}

#[async_trait]
impl FavoritesBackend for FileBackend {
    async fn load(&self) -> Result<Option<String>, PersistenceError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Io(e)),
        }
    }

    async fn store(&self, payload: &str) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, payload).await?;
        Ok(())
    }
}

/// In-memory backend for contexts with no durable storage
#[derive(Default)]
pub struct MemoryBackend {
    payload: Mutex<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the backend with a pre-existing snapshot
    pub fn seeded(payload: &str) -> Self {
        Self {
            payload: Mutex::new(Some(payload.to_string())),
        }
    }
}

#[async_trait]
impl FavoritesBackend for MemoryBackend {
    async fn load(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.payload.lock().unwrap().clone())
    }

    async fn store(&self, payload: &str) -> Result<(), PersistenceError> {
        *self.payload.lock().unwrap() = Some(payload.to_string());
        Ok(())
    }
}

/// Persisted set of favorited asset identifiers
///
/// Insertion order is preserved for stable rendering; the set holds no
/// duplicates. The set lives in a watch channel, so membership reads are
/// synchronous and every mutation notifies subscribers. The in-memory set
/// is the source of truth for the session: persistence failures never roll
/// back a mutation and never reach the caller.
pub struct FavoritesStore {
    backend: Box<dyn FavoritesBackend>,
    ids: watch::Sender<Vec<String>>,
}

impl FavoritesStore {
    /// Creates an empty store over the given backend
    pub fn new(backend: Box<dyn FavoritesBackend>) -> Self {
        let (ids, _) = watch::channel(Vec::new());
        Self { backend, ids }
    }

    /// Loads the persisted set
    ///
    /// Absent, unreadable, or malformed storage falls back to an empty set;
    /// favorites corruption must never block startup. A valid list with
    /// mixed entry types keeps only the strings.
    pub async fn initialize(&self) {
        let raw = match self.backend.load().await {
            Ok(Some(raw)) => raw,
            Ok(None) | Err(_) => return,
        };

        self.ids.send_replace(parse_snapshot(&raw));
    }

    /// Adds `id` to the set, or removes it if already present
    ///
    /// The full resulting set is written through to the backend
    /// synchronously. A failed write is swallowed: the in-memory set stays
    /// authoritative for the session.
    pub async fn toggle_favorite(&self, id: &str) {
        let mut snapshot = Vec::new();
        self.ids.send_modify(|ids| {
            if let Some(pos) = ids.iter().position(|fav| fav == id) {
                ids.remove(pos);
            } else {
                ids.push(id.to_string());
            }
            snapshot = ids.clone();
        });

        if let Ok(payload) = serde_json::to_string(&snapshot) {
            let _ = self.backend.store(&payload).await;
        }
    }

    /// Pure membership query; never blocks
    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.borrow().iter().any(|fav| fav == id)
    }

    /// Current favorites in insertion order
    pub fn favorites(&self) -> Vec<String> {
        self.ids.borrow().clone()
    }

    /// Subscribes to favorites changes
    pub fn subscribe(&self) -> watch::Receiver<Vec<String>> {
        self.ids.subscribe()
    }
}

/// Validates a persisted snapshot into an identifier list
///
/// Anything other than a JSON list yields the empty set; non-string entries
/// and duplicates within a list are silently dropped.
fn parse_snapshot(raw: &str) -> Vec<String> {
    let Ok(Value::Array(entries)) = serde_json::from_str::<Value>(raw) else {
        return Vec::new();
    };

    let mut ids = Vec::new();
    for entry in entries {
        if let Value::String(id) = entry {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingBackend;

    #[async_trait]
    impl FavoritesBackend for FailingBackend {
        async fn load(&self) -> Result<Option<String>, PersistenceError> {
            Err(PersistenceError::Io(std::io::Error::other("unavailable")))
        }

        async fn store(&self, _payload: &str) -> Result<(), PersistenceError> {
            Err(PersistenceError::Io(std::io::Error::other("unavailable")))
        }
    }

    fn store_with(backend: MemoryBackend) -> FavoritesStore {
        FavoritesStore::new(Box::new(backend))
    }

    #[tokio::test]
    async fn loads_persisted_identifiers() {
        let store = store_with(MemoryBackend::seeded(r#"["bitcoin","ethereum"]"#));
        store.initialize().await;

        assert!(store.is_favorite("bitcoin"));
        assert!(store.is_favorite("ethereum"));
        assert!(!store.is_favorite("dogecoin"));
    }

    #[tokio::test]
    async fn corrupted_snapshot_falls_back_to_empty() {
        let store = store_with(MemoryBackend::seeded("not json"));
        store.initialize().await;
        assert!(store.favorites().is_empty());

        let store = store_with(MemoryBackend::seeded(r#"{"bitcoin": true}"#));
        store.initialize().await;
        assert!(store.favorites().is_empty());
    }

    #[tokio::test]
    async fn mixed_type_entries_are_filtered_not_rejected() {
        let store = store_with(MemoryBackend::seeded(r#"["a", 3, "b"]"#));
        store.initialize().await;

        assert_eq!(store.favorites(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn duplicate_entries_are_dropped_on_load() {
        let store = store_with(MemoryBackend::seeded(r#"["a", "a", "b"]"#));
        store.initialize().await;

        assert_eq!(store.favorites(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn unreadable_storage_never_blocks_startup() {
        let store = FavoritesStore::new(Box::new(FailingBackend));
        store.initialize().await;
        assert!(store.favorites().is_empty());
    }

    #[tokio::test]
    async fn toggle_adds_then_removes() {
        let store = store_with(MemoryBackend::new());

        store.toggle_favorite("bitcoin").await;
        assert!(store.is_favorite("bitcoin"));

        store.toggle_favorite("bitcoin").await;
        assert!(!store.is_favorite("bitcoin"));
    }

    #[tokio::test]
    async fn subscriber_is_notified_on_every_toggle() {
        let store = store_with(MemoryBackend::new());
        let mut changes = store.subscribe();
        changes.mark_unchanged();

        store.toggle_favorite("bitcoin").await;
        changes.changed().await.unwrap();
        assert_eq!(*changes.borrow_and_update(), vec!["bitcoin".to_string()]);

        store.toggle_favorite("bitcoin").await;
        changes.changed().await.unwrap();
        assert!(changes.borrow_and_update().is_empty());
    }

    #[tokio::test]
    async fn double_toggle_restores_persisted_snapshot() {
        let backend = MemoryBackend::seeded(r#"["bitcoin"]"#);
        let store = store_with(backend);
        store.initialize().await;
        let before = store.backend.load().await.unwrap();

        store.toggle_favorite("ethereum").await;
        store.toggle_favorite("ethereum").await;

        let after = store.backend.load().await.unwrap();
        assert_eq!(before, after);
        assert_eq!(store.favorites(), vec!["bitcoin"]);
    }

    #[tokio::test]
    async fn persistence_is_a_complete_snapshot() {
        let store = store_with(MemoryBackend::new());
        store.toggle_favorite("bitcoin").await;
        store.toggle_favorite("ethereum").await;

        let persisted = store.backend.load().await.unwrap().unwrap();
        assert_eq!(persisted, r#"["bitcoin","ethereum"]"#);
    }

    #[tokio::test]
    async fn failed_write_keeps_in_memory_set_authoritative() {
        let store = FavoritesStore::new(Box::new(FailingBackend));

        store.toggle_favorite("bitcoin").await;
        assert!(store.is_favorite("bitcoin"));
    }

    #[tokio::test]
    async fn file_backend_round_trips_through_disk() {
        let dir = std::env::temp_dir().join(format!(
            "crypto-market-client-test-{}-{:?}",
            std::process::id(),
            std::thread::current().id()
        ));

        let store = FavoritesStore::new(Box::new(FileBackend::new(&dir)));
        store.initialize().await;
        assert!(store.favorites().is_empty());

        store.toggle_favorite("bitcoin").await;

        let reloaded = FavoritesStore::new(Box::new(FileBackend::new(&dir)));
        reloaded.initialize().await;
        assert!(reloaded.is_favorite("bitcoin"));

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
