use crate::error::{AppError, InputError, QueryError};
use crate::models::document::{Document, DocumentCollection, GroupSummary};
use crate::search::client::QueryService;
use crate::store::DocumentStore;
use crate::view;

/// Which slice of the store the list currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Nothing searched yet.
    Empty,
    /// All documents of the last search.
    Loaded,
    /// A status group, or the single document matching an id.
    Filtered(Filter),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Status(String),
    Id(i64),
}

/// Result of filtering by document id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdFilterOutcome {
    Found(Document),
    /// Nothing matched; the session was left as it was.
    NotFound { id: i64 },
}

impl IdFilterOutcome {
    /// Informational notice for the no-match case.
    pub fn notice(&self) -> Option<String> {
        match self {
            IdFilterOutcome::Found(_) => None,
            IdFilterOutcome::NotFound { id } => Some(format!("No document found with ID {id}")),
        }
    }
}

/// The search screen's state: the document store plus the current list
/// selection.
///
/// Driven by one logical task. Searches that overlap are not cancelled;
/// whichever result is applied last wins.
#[derive(Debug, Clone)]
pub struct SearchSession {
    store: DocumentStore,
    view: ListView,
    community: Option<String>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            store: DocumentStore::new(),
            view: ListView::Empty,
            community: None,
        }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    /// Community code of the last applied search.
    pub fn community(&self) -> Option<&str> {
        self.community.as_deref()
    }

    /// Apply the outcome of a search.
    ///
    /// Success replaces the store wholesale and shows all documents. An
    /// error is handed back untouched and leaves the session as it was.
    pub fn apply_search(
        &mut self,
        code: &str,
        result: Result<DocumentCollection, QueryError>,
    ) -> Result<(), QueryError> {
        let collection = result?;
        self.store.replace(collection);
        self.community = Some(code.to_string());
        self.view = ListView::Loaded;
        Ok(())
    }

    /// Show every document again. Ignored before the first search.
    pub fn show_all(&mut self) {
        if self.view != ListView::Empty {
            self.view = ListView::Loaded;
        }
    }

    /// Show one status group. Ignored before the first search.
    pub fn select_status(&mut self, label: &str) {
        if self.view != ListView::Empty {
            self.view = ListView::Filtered(Filter::Status(label.to_string()));
        }
    }

    /// Narrow the list to the document with `id`, searching across all
    /// groups. On no match the current list stays on screen.
    pub fn filter_by_id(&mut self, id: i64) -> IdFilterOutcome {
        let all = self.store.all();
        match view::filter_by_id(&all, id).into_iter().next() {
            Some(doc) => {
                self.view = ListView::Filtered(Filter::Id(id));
                IdFilterOutcome::Found(doc)
            }
            None => {
                tracing::debug!(id, "No document matches id filter");
                IdFilterOutcome::NotFound { id }
            }
        }
    }

    /// The documents the list should display right now.
    pub fn visible(&self) -> Vec<Document> {
        let collection = self.store.collection();
        match &self.view {
            ListView::Empty => Vec::new(),
            ListView::Loaded => view::all_documents(collection),
            ListView::Filtered(Filter::Status(label)) => {
                view::documents_for_status(collection, label)
            }
            ListView::Filtered(Filter::Id(id)) => {
                view::filter_by_id(&view::all_documents(collection), *id)
            }
        }
    }

    /// Heading above the list.
    pub fn title(&self) -> String {
        match &self.view {
            ListView::Empty => "Documents".to_string(),
            ListView::Loaded => "All Documents".to_string(),
            ListView::Filtered(Filter::Status(label)) => format!("{label} Documents"),
            ListView::Filtered(Filter::Id(_)) => "Search Result".to_string(),
        }
    }

    pub fn groups(&self) -> Vec<GroupSummary> {
        self.store.groups()
    }
}

/// Trim a typed community code, rejecting blank input before any request.
pub fn validate_community_code(raw: &str) -> Result<String, InputError> {
    let code = raw.trim();
    if code.is_empty() {
        return Err(InputError::EmptyCommunityCode);
    }
    Ok(code.to_string())
}

/// Parse a typed document id.
pub fn parse_document_id(raw: &str) -> Result<i64, InputError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| InputError::InvalidDocumentId)
}

/// Validate `raw_code`, run the search and apply its result to `session`.
pub async fn run_search(
    service: &dyn QueryService,
    session: &mut SearchSession,
    raw_code: &str,
) -> Result<(), AppError> {
    let code = validate_community_code(raw_code)?;
    let result = service.search_by_community(&code).await;
    session.apply_search(&code, result)?;
    Ok(())
}
