//! Pure derivations from a [`DocumentCollection`] to what the UI shows.
//!
//! Nothing here does I/O or touches the store; every function takes the
//! data it needs and returns a fresh list.

use crate::models::document::{Document, DocumentCollection, GroupSummary};

/// Every document, group by group, in insertion order.
pub fn all_documents(collection: &DocumentCollection) -> Vec<Document> {
    collection
        .groups()
        .flat_map(|(_, docs)| docs.iter().cloned())
        .collect()
}

/// The documents stored under `label`, unchanged. Unknown labels give an
/// empty list.
pub fn documents_for_status(collection: &DocumentCollection, label: &str) -> Vec<Document> {
    collection.group(label).map(<[Document]>::to_vec).unwrap_or_default()
}

/// Documents whose id equals `id`. With unique ids this is zero or one
/// element; no match is a normal outcome, not an error.
pub fn filter_by_id(documents: &[Document], id: i64) -> Vec<Document> {
    documents
        .iter()
        .find(|doc| doc.id == id)
        .cloned()
        .into_iter()
        .collect()
}

pub fn group_summaries(collection: &DocumentCollection) -> Vec<GroupSummary> {
    collection
        .groups()
        .map(|(label, docs)| GroupSummary {
            label: label.to_string(),
            count: docs.len(),
        })
        .collect()
}

/// Label for a status filter button, e.g. `"approved (3)"`.
pub fn button_label(summary: &GroupSummary) -> String {
    format!("{} ({})", summary.label, summary.count)
}

/// Pretty-print a JSON payload with two-space indentation for display.
pub fn render_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// One row of the document list, e.g. `"12 - Document 12"`.
pub fn list_row(document: &Document) -> String {
    format!("{} - {}", document.id, document.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> DocumentCollection {
        DocumentCollection::new()
            .with_group(
                "approved",
                vec![Document::new(1, "Doc A"), Document::new(2, "Doc B")],
            )
            .with_group("pending", vec![])
            .with_group("rejected", vec![Document::new(3, "Doc C")])
    }

    #[test]
    fn test_all_documents_flattens_in_group_order() {
        let ids: Vec<i64> = all_documents(&sample()).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_all_documents_of_empty_collection() {
        assert!(all_documents(&DocumentCollection::new()).is_empty());
    }

    #[test]
    fn test_documents_for_status() {
        let collection = sample();
        assert_eq!(
            documents_for_status(&collection, "approved"),
            vec![Document::new(1, "Doc A"), Document::new(2, "Doc B")]
        );
        assert!(documents_for_status(&collection, "pending").is_empty());
        assert!(documents_for_status(&collection, "Approved").is_empty());
    }

    #[test]
    fn test_filter_by_id_match_and_miss() {
        let docs = all_documents(&sample());
        assert_eq!(filter_by_id(&docs, 1), vec![Document::new(1, "Doc A")]);
        assert!(filter_by_id(&docs, 99).is_empty());
        assert!(filter_by_id(&[], 1).is_empty());
    }

    #[test]
    fn test_button_labels() {
        let labels: Vec<String> = group_summaries(&sample()).iter().map(button_label).collect();
        assert_eq!(labels, vec!["approved (2)", "pending (0)", "rejected (1)"]);
    }

    #[test]
    fn test_render_json_uses_two_space_indent() {
        let rendered = render_json(&json!({"id": 42}));
        assert_eq!(rendered, "{\n  \"id\": 42\n}");
    }

    #[test]
    fn test_render_json_keeps_server_key_order() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"id": 42, "extra": "field", "Claim_Person": "Sita"}"#)
                .unwrap();
        assert_eq!(
            render_json(&value),
            "{\n  \"id\": 42,\n  \"extra\": \"field\",\n  \"Claim_Person\": \"Sita\"\n}"
        );
    }

    #[test]
    fn test_list_row() {
        assert_eq!(list_row(&Document::new(12, "Document 12")), "12 - Document 12");
    }
}
