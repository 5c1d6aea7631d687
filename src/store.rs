use std::sync::Arc;

use crate::models::document::{Document, DocumentCollection, GroupSummary};
use crate::view;

/// Holds the most recently fetched collection for one search session.
///
/// `replace` is the only write. The collection sits behind an `Arc`, so a
/// reader that took a [`snapshot`](Self::snapshot) keeps seeing exactly
/// that collection even after a later `replace`.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    current: Arc<DocumentCollection>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched collection. Nothing of the previous one
    /// survives.
    pub fn replace(&mut self, collection: DocumentCollection) {
        tracing::info!(
            groups = collection.group_count(),
            documents = collection.document_count(),
            "Replacing document store contents"
        );
        self.current = Arc::new(collection);
    }

    pub fn snapshot(&self) -> Arc<DocumentCollection> {
        Arc::clone(&self.current)
    }

    pub fn collection(&self) -> &DocumentCollection {
        &self.current
    }

    /// Status labels in last-fetch order, each with its document count.
    pub fn groups(&self) -> Vec<GroupSummary> {
        view::group_summaries(&self.current)
    }

    pub fn all(&self) -> Vec<Document> {
        view::all_documents(&self.current)
    }

    /// Documents under `label`; empty when the label is unknown.
    pub fn by_status(&self, label: &str) -> Vec<Document> {
        view::documents_for_status(&self.current, label)
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection_a() -> DocumentCollection {
        DocumentCollection::new()
            .with_group("approved", vec![Document::new(1, "Doc A")])
            .with_group("pending", vec![])
    }

    fn collection_b() -> DocumentCollection {
        DocumentCollection::new().with_group(
            "rejected",
            vec![Document::new(7, "Doc X"), Document::new(8, "Doc Y")],
        )
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = DocumentStore::new();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
        assert!(store.groups().is_empty());
    }

    #[test]
    fn test_groups_report_counts_in_order() {
        let mut store = DocumentStore::new();
        store.replace(collection_a());
        assert_eq!(
            store.groups(),
            vec![
                GroupSummary { label: "approved".into(), count: 1 },
                GroupSummary { label: "pending".into(), count: 0 },
            ]
        );
    }

    #[test]
    fn test_replace_discards_previous_groups() {
        let mut store = DocumentStore::new();
        store.replace(collection_a());
        store.replace(collection_b());
        assert!(store.by_status("approved").is_empty());
        assert_eq!(store.by_status("rejected").len(), 2);
        assert_eq!(store.all().len(), 2);
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_replace() {
        let mut store = DocumentStore::new();
        store.replace(collection_a());
        let before = store.snapshot();
        store.replace(collection_b());

        assert_eq!(*before, collection_a());
        assert_eq!(*store.snapshot(), collection_b());
    }

    #[test]
    fn test_unknown_status_is_empty() {
        let mut store = DocumentStore::new();
        store.replace(collection_a());
        assert!(store.by_status("delayed").is_empty());
    }
}
