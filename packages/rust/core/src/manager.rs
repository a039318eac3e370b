//! Document manager: the list/search/filter surface over a store, plus the
//! save paths that enforce status monotonicity.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use tracing::{debug, info, instrument, warn};

use modocs_shared::{DocId, Document, DocumentKind, DocumentStatus, Result};
use modocs_storage::{DocumentStore, StoreEvent};

/// Service over an injected [`DocumentStore`].
pub struct DocumentManager {
    store: Arc<dyn DocumentStore>,
}

impl DocumentManager {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.store.subscribe()
    }

    /// All completed documents, in stored order. Records predating the
    /// status field deserialize as completed and are included.
    pub fn list_completed(&self) -> Result<Vec<Document>> {
        Ok(self
            .store
            .load_all()?
            .into_iter()
            .filter(|d| d.status.is_completed())
            .collect())
    }

    /// Everything in the store, in-progress drafts included.
    pub fn list_all(&self) -> Result<Vec<Document>> {
        self.store.load_all()
    }

    /// Completed documents matching a case-insensitive title/author query
    /// and an optional type filter.
    pub fn search(&self, query: &str, kind: Option<DocumentKind>) -> Result<Vec<Document>> {
        let needle = query.trim().to_lowercase();
        Ok(self
            .list_completed()?
            .into_iter()
            .filter(|doc| kind.is_none_or(|k| doc.kind() == k))
            .filter(|doc| {
                needle.is_empty()
                    || doc.display_title().to_lowercase().contains(&needle)
                    || doc.author.to_lowercase().contains(&needle)
            })
            .collect())
    }

    /// Edit deep-link lookup. A missing id is not an error; the caller
    /// no-ops.
    pub fn get(&self, id: &DocId) -> Result<Option<Document>> {
        let found = self.store.get(id)?;
        if found.is_none() {
            warn!(%id, "edit link references a missing document");
        }
        Ok(found)
    }

    /// Persist a finished document. Stamps `completed` and upserts by id.
    #[instrument(skip_all, fields(id = %doc.id, kind = %doc.kind()))]
    pub fn save_completed(&self, mut doc: Document, now: DateTime<Utc>) -> Result<Document> {
        doc.status = DocumentStatus::Completed;
        doc.updated_at = now;
        self.store.upsert(&doc)?;
        info!(id = %doc.id, kind = %doc.kind(), "document saved as completed");
        Ok(doc)
    }

    /// Persist an in-progress snapshot. Refuses to demote a document the
    /// store already holds as completed; returns whether a write happened.
    pub fn autosave_in_progress(&self, doc: &Document) -> Result<bool> {
        if let Some(stored) = self.store.get(&doc.id)? {
            if stored.status.is_completed() {
                warn!(id = %doc.id, "skipping auto-save: document is already completed");
                return Ok(false);
            }
        }

        self.store.upsert(doc)?;
        debug!(id = %doc.id, "in-progress snapshot saved");
        Ok(true)
    }

    /// Explicit delete from the manager view.
    pub fn delete(&self, id: &DocId) -> Result<bool> {
        let removed = self.store.remove(id)?;
        if removed {
            info!(%id, "document deleted");
        } else {
            warn!(%id, "delete requested for a missing document");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modocs_schema::sample_body;
    use modocs_shared::{DocumentBody, Tone};
    use modocs_storage::MemoryStore;

    fn manager() -> DocumentManager {
        DocumentManager::new(Arc::new(MemoryStore::new()))
    }

    fn completed_invoice(title: &str, author: &str) -> Document {
        let mut doc = Document::new(DocumentKind::Invoice, author, Utc::now());
        doc.title = title.into();
        doc.tone = Tone::Professional;
        doc.body = sample_body(DocumentKind::Invoice);
        doc.status = DocumentStatus::Completed;
        doc
    }

    #[test]
    fn save_and_reload_exactly_one_entry() {
        let manager = manager();
        let mut doc = completed_invoice("Q4 Invoice", "Jane");
        if let DocumentBody::Invoice(fields) = &mut doc.body {
            fields.invoice_number = "INV-2025-001".into();
            fields.client_info.name = "Acme Co".into();
            fields.total_amount = 1080.0;
        }

        manager.save_completed(doc.clone(), Utc::now()).unwrap();
        // Re-save after an edit: still exactly one entry with that id.
        doc.title = "Q4 Invoice (final)".into();
        manager.save_completed(doc.clone(), Utc::now()).unwrap();

        let stored = manager.list_completed().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, doc.id);
        assert_eq!(stored[0].title, "Q4 Invoice (final)");
        let DocumentBody::Invoice(fields) = &stored[0].body else {
            panic!("wrong variant");
        };
        assert_eq!(fields.total_amount, 1080.0);
    }

    #[test]
    fn completed_documents_are_never_demoted() {
        let manager = manager();
        let doc = completed_invoice("Q4 Invoice", "Jane");
        manager.save_completed(doc.clone(), Utc::now()).unwrap();

        let mut draft = doc.clone();
        draft.status = DocumentStatus::InProgress;
        let wrote = manager.autosave_in_progress(&draft).unwrap();

        assert!(!wrote);
        let stored = manager.get(&doc.id).unwrap().unwrap();
        assert_eq!(stored.status, DocumentStatus::Completed);
    }

    #[test]
    fn autosave_writes_new_drafts() {
        let manager = manager();
        let mut draft = completed_invoice("Draft", "Jane");
        draft.status = DocumentStatus::InProgress;

        assert!(manager.autosave_in_progress(&draft).unwrap());
        // Drafts are hidden from the completed listing.
        assert!(manager.list_completed().unwrap().is_empty());
        assert_eq!(manager.list_all().unwrap().len(), 1);
    }

    #[test]
    fn search_matches_title_and_author() {
        let manager = manager();
        manager
            .save_completed(completed_invoice("Q4 Invoice", "Jane Smith"), Utc::now())
            .unwrap();
        let mut memo = Document::new(DocumentKind::Memo, "David Park", Utc::now());
        memo.title = "Budget memo".into();
        memo.body = sample_body(DocumentKind::Memo);
        manager.save_completed(memo, Utc::now()).unwrap();

        assert_eq!(manager.search("q4", None).unwrap().len(), 1);
        assert_eq!(manager.search("david", None).unwrap().len(), 1);
        assert_eq!(manager.search("", None).unwrap().len(), 2);
        assert_eq!(
            manager
                .search("", Some(DocumentKind::Memo))
                .unwrap()
                .len(),
            1
        );
        assert!(manager.search("nothing", None).unwrap().is_empty());
    }

    #[test]
    fn missing_id_is_none_not_an_error() {
        let manager = manager();
        let missing = DocId("doc-0".into());
        assert!(manager.get(&missing).unwrap().is_none());
        assert!(!manager.delete(&missing).unwrap());
    }

    #[test]
    fn delete_removes_exactly_that_document() {
        let manager = manager();
        let a = completed_invoice("First", "Jane");
        let mut b = completed_invoice("Second", "Jane");
        b.id = DocId("doc-42".into());
        manager.save_completed(a.clone(), Utc::now()).unwrap();
        manager.save_completed(b, Utc::now()).unwrap();

        assert!(manager.delete(&a.id).unwrap());
        let remaining = manager.list_completed().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Second");
    }
}
