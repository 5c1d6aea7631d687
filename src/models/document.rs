use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A claim document as listed by the search endpoint.
///
/// The server row carries more columns (status, community id); only the
/// fields needed for listing are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    /// Empty when the row has no name.
    #[serde(default, deserialize_with = "name_or_empty")]
    pub name: String,
}

impl Document {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

fn name_or_empty<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One community's documents grouped by status label.
///
/// Group order is the order the server sent them in, and documents keep
/// their server order inside each group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentCollection {
    groups: IndexMap<String, Vec<Document>>,
}

impl DocumentCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a status group. A repeated label replaces the earlier group
    /// but keeps its position.
    pub fn with_group(mut self, label: impl Into<String>, documents: Vec<Document>) -> Self {
        self.groups.insert(label.into(), documents);
        self
    }

    /// Iterate `(label, documents)` in insertion order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[Document])> {
        self.groups
            .iter()
            .map(|(label, docs)| (label.as_str(), docs.as_slice()))
    }

    pub fn group(&self, label: &str) -> Option<&[Document]> {
        self.groups.get(label).map(Vec::as_slice)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Number of status groups (including empty ones).
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of documents across all groups.
    pub fn document_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<(String, Vec<Document>)> for DocumentCollection {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Document>)>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}

/// A status label paired with its document count, used for filter buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub label: String,
    pub count: usize,
}
