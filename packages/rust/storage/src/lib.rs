//! Persistence adapter for the MoDocs document collection.
//!
//! The whole collection is the unit of read/write: one ordered JSON array,
//! loaded and rewritten in full on every mutation. [`DocumentStore`] is the
//! injectable seam — [`JsonFileStore`] backs the real apps, [`MemoryStore`]
//! backs tests and ephemeral runs.
//!
//! **Access rules:**
//! - Writers go through [`DocumentStore::upsert`] / [`DocumentStore::remove`]
//!   (per-id merge) rather than blind `save_all`, so concurrent writers lose
//!   at most a same-document race.
//! - Every successful write emits a [`StoreEvent`] on the broadcast channel
//!   so other views can refresh.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tokio::sync::broadcast;

use modocs_shared::{DocId, Document, ModocsError, Result};

/// Capacity of the change-notification channel. Laggy receivers simply miss
/// intermediate events and reload on the next one.
const EVENT_CAPACITY: usize = 16;

/// Change notification emitted after a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The collection changed; reload to observe the new state.
    Changed,
}

/// The persistence contract: whole-collection reads and writes plus a
/// change-notification stream.
pub trait DocumentStore: Send + Sync {
    /// Load the full collection. An absent store is an empty collection.
    fn load_all(&self) -> Result<Vec<Document>>;

    /// Replace the full collection.
    fn save_all(&self, docs: &[Document]) -> Result<()>;

    /// Subscribe to change notifications.
    fn subscribe(&self) -> broadcast::Receiver<StoreEvent>;

    /// Look up a document by id.
    fn get(&self, id: &DocId) -> Result<Option<Document>> {
        Ok(self.load_all()?.into_iter().find(|d| &d.id == id))
    }

    /// Insert or replace by id. The collection never holds two entries with
    /// the same id.
    fn upsert(&self, doc: &Document) -> Result<()> {
        let mut docs = self.load_all()?;
        match docs.iter_mut().find(|d| d.id == doc.id) {
            Some(existing) => *existing = doc.clone(),
            None => docs.push(doc.clone()),
        }
        self.save_all(&docs)
    }

    /// Remove by id. Returns whether a document was deleted.
    fn remove(&self, id: &DocId) -> Result<bool> {
        let mut docs = self.load_all()?;
        let before = docs.len();
        docs.retain(|d| &d.id != id);
        if docs.len() == before {
            return Ok(false);
        }
        self.save_all(&docs)?;
        Ok(true)
    }
}

// ---------------------------------------------------------------------------
// JsonFileStore
// ---------------------------------------------------------------------------

/// File-backed store: one pretty-printed JSON array at a fixed path.
pub struct JsonFileStore {
    path: PathBuf,
    events: broadcast::Sender<StoreEvent>,
}

impl JsonFileStore {
    /// Create a store over `path`. No I/O happens until the first read or
    /// write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            path: path.into(),
            events,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move an unparsable store file out of the way so the app can continue
    /// with an empty collection. Returns the backup path.
    fn quarantine_corrupt_file(&self) -> Result<PathBuf> {
        let backup = self.path.with_file_name(format!(
            "{}.corrupt-{}",
            self.path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "documents.json".into()),
            chrono::Utc::now().timestamp_millis(),
        ));
        std::fs::rename(&self.path, &backup).map_err(|e| ModocsError::io(&self.path, e))?;
        Ok(backup)
    }
}

impl DocumentStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<Document>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| ModocsError::io(&self.path, e))?;

        match serde_json::from_str(&content) {
            Ok(docs) => Ok(docs),
            Err(parse_err) => {
                let backup = self.quarantine_corrupt_file()?;
                tracing::warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    error = %parse_err,
                    "store file is unparsable; backed it up and starting empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_all(&self, docs: &[Document]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ModocsError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(docs)
            .map_err(|e| ModocsError::Storage(format!("serialize collection: {e}")))?;

        // Write to a temp file first, then rename into place.
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "documents.json".into());
        let temp = self.path.with_file_name(format!(".{file_name}.tmp"));

        std::fs::write(&temp, json).map_err(|e| ModocsError::io(&temp, e))?;
        std::fs::rename(&temp, &self.path).map_err(|e| ModocsError::io(&self.path, e))?;

        tracing::debug!(
            path = %self.path.display(),
            count = docs.len(),
            "collection saved"
        );
        let _ = self.events.send(StoreEvent::Changed);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory store for tests and ephemeral sessions.
pub struct MemoryStore {
    docs: Mutex<Vec<Document>>,
    events: broadcast::Sender<StoreEvent>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            docs: Mutex::new(Vec::new()),
            events,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<Document>> {
        Ok(self
            .docs
            .lock()
            .map_err(|_| ModocsError::Storage("memory store poisoned".into()))?
            .clone())
    }

    fn save_all(&self, docs: &[Document]) -> Result<()> {
        *self
            .docs
            .lock()
            .map_err(|_| ModocsError::Storage("memory store poisoned".into()))? = docs.to_vec();
        let _ = self.events.send(StoreEvent::Changed);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use modocs_shared::{DocumentBody, DocumentKind, DocumentStatus};

    /// Unique temp file path per test.
    fn test_store() -> JsonFileStore {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "modocs_test_{}_{nanos}/documents.json",
            std::process::id()
        ));
        JsonFileStore::new(path)
    }

    fn invoice(title: &str) -> Document {
        let mut doc = Document::new(DocumentKind::Invoice, "Current User", Utc::now());
        doc.title = title.into();
        doc.status = DocumentStatus::Completed;
        if let DocumentBody::Invoice(fields) = &mut doc.body {
            fields.invoice_number = "INV-2025-001".into();
            fields.client_info.name = "Acme Co".into();
            fields.total_amount = 1080.0;
        }
        doc
    }

    #[test]
    fn missing_file_is_empty_collection() {
        let store = test_store();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn save_then_reload_roundtrips() {
        let store = test_store();
        let doc = invoice("Q4 Invoice");

        store.upsert(&doc).unwrap();
        let loaded = store.load_all().unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], doc);
        assert_eq!(loaded[0].title, "Q4 Invoice");
        let DocumentBody::Invoice(fields) = &loaded[0].body else {
            panic!("wrong variant after reload");
        };
        assert_eq!(fields.total_amount, 1080.0);
    }

    #[test]
    fn upsert_never_duplicates_an_id() {
        let store = test_store();
        let mut doc = invoice("Q4 Invoice");
        store.upsert(&doc).unwrap();

        doc.title = "Q4 Invoice (revised)".into();
        store.upsert(&doc).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Q4 Invoice (revised)");
    }

    #[test]
    fn upsert_preserves_other_documents() {
        let store = test_store();
        let a = invoice("First");
        let mut b = invoice("Second");
        b.id = DocId("doc-999".into());

        store.upsert(&a).unwrap();
        store.upsert(&b).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn remove_by_id() {
        let store = test_store();
        let doc = invoice("Q4 Invoice");
        store.upsert(&doc).unwrap();

        assert!(store.remove(&doc.id).unwrap());
        assert!(store.load_all().unwrap().is_empty());
        // Second removal is a no-op.
        assert!(!store.remove(&doc.id).unwrap());
    }

    #[test]
    fn corrupt_file_is_quarantined() {
        let store = test_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{not json[").unwrap();

        let loaded = store.load_all().unwrap();
        assert!(loaded.is_empty());
        assert!(!store.path().exists());

        // The original bytes survive under a .corrupt-* name.
        let dir = store.path().parent().unwrap();
        let backup_exists = std::fs::read_dir(dir).unwrap().any(|entry| {
            entry
                .unwrap()
                .file_name()
                .to_string_lossy()
                .contains(".corrupt-")
        });
        assert!(backup_exists);
    }

    #[test]
    fn no_temp_files_left_behind() {
        let store = test_store();
        store.upsert(&invoice("Q4 Invoice")).unwrap();

        let dir = store.path().parent().unwrap();
        for entry in std::fs::read_dir(dir).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().to_string();
            assert!(!name.ends_with(".tmp"), "temp file left behind: {name}");
        }
    }

    #[test]
    fn saves_notify_subscribers() {
        let store = test_store();
        let mut events = store.subscribe();

        store.upsert(&invoice("Q4 Invoice")).unwrap();
        assert_eq!(events.try_recv().unwrap(), StoreEvent::Changed);
    }

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        let doc = invoice("Q4 Invoice");
        store.upsert(&doc).unwrap();

        assert_eq!(store.get(&doc.id).unwrap().unwrap().title, "Q4 Invoice");
        assert!(store.remove(&doc.id).unwrap());
        assert!(store.load_all().unwrap().is_empty());
    }
}
