use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::error::QueryError;
use crate::models::document::DocumentCollection;
use crate::models::map::MapPoint;
use crate::models::search::{ClaimSummary, OccupationSchemes};

/// Read side of the claim document service.
///
/// Every call is a single independent GET: no retries, no timeout, no
/// caching. Futures are not `Send` so the same trait serves the browser
/// build, where `reqwest` futures are tied to the JS event loop.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait QueryService {
    /// `GET /api/search?community_id={code}`.
    ///
    /// `code` must already be trimmed and non-empty
    /// (see [`crate::state::validate_community_code`]).
    async fn search_by_community(&self, code: &str) -> Result<DocumentCollection, QueryError>;

    /// `GET /api/document/{id}`. The payload is returned as-is for display.
    async fn fetch_document(&self, id: i64) -> Result<serde_json::Value, QueryError>;

    /// `GET /api/summary`.
    async fn fetch_summary(&self) -> Result<ClaimSummary, QueryError>;

    /// `GET /api/occupations?community_id={code}`.
    async fn fetch_occupations(&self, code: &str) -> Result<OccupationSchemes, QueryError>;

    /// `GET /map-data`: claims that carry coordinates.
    async fn fetch_map_points(&self) -> Result<Vec<MapPoint>, QueryError>;
}

/// `reqwest` implementation of [`QueryService`].
#[derive(Debug, Clone)]
pub struct HttpQueryService {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpQueryService {
    /// `base_url` is the service root; endpoint paths are joined onto it.
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Create with an explicit client (useful for testing / DI).
    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, QueryError> {
        self.base_url
            .join(path)
            .map_err(|e| QueryError::Network(format!("Invalid endpoint '{path}': {e}")))
    }

    fn endpoint_with_community(&self, path: &str, code: &str) -> Result<Url, QueryError> {
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut().append_pair("community_id", code);
        Ok(url)
    }

    /// Fetch `url` and parse the body as JSON, turning an `{ "error": ... }`
    /// body into [`QueryError::ServerReported`] whatever the status code.
    async fn get_json(&self, url: Url) -> Result<serde_json::Value, QueryError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| QueryError::Network(format!("Invalid JSON from {url} ({status}): {e}")))?;

        if let Some(message) = reported_error(&body) {
            tracing::warn!(%url, %status, "Server reported error: {message}");
            return Err(QueryError::ServerReported(message.to_string()));
        }

        tracing::debug!(%url, %status, "Response received");
        Ok(body)
    }

    async fn get_typed<T: DeserializeOwned>(&self, url: Url) -> Result<T, QueryError> {
        let body = self.get_json(url).await?;
        serde_json::from_value(body)
            .map_err(|e| QueryError::Network(format!("Unexpected response shape: {e}")))
    }
}

#[async_trait(?Send)]
impl QueryService for HttpQueryService {
    async fn search_by_community(&self, code: &str) -> Result<DocumentCollection, QueryError> {
        let url = self.endpoint_with_community("api/search", code)?;
        let collection: DocumentCollection = self.get_typed(url).await?;
        tracing::debug!(
            community = code,
            groups = collection.group_count(),
            "Search completed"
        );
        Ok(collection)
    }

    async fn fetch_document(&self, id: i64) -> Result<serde_json::Value, QueryError> {
        let url = self.endpoint(&format!("api/document/{id}"))?;
        self.get_json(url).await
    }

    async fn fetch_summary(&self) -> Result<ClaimSummary, QueryError> {
        let url = self.endpoint("api/summary")?;
        self.get_typed(url).await
    }

    async fn fetch_occupations(&self, code: &str) -> Result<OccupationSchemes, QueryError> {
        let url = self.endpoint_with_community("api/occupations", code)?;
        self.get_typed(url).await
    }

    async fn fetch_map_points(&self) -> Result<Vec<MapPoint>, QueryError> {
        let url = self.endpoint("map-data")?;
        let points: Vec<MapPoint> = self.get_typed(url).await?;
        tracing::debug!(points = points.len(), "Map data received");
        Ok(points)
    }
}

/// The message of an `{ "error": "..." }` body, if that is what `body` is.
fn reported_error(body: &serde_json::Value) -> Option<&str> {
    body.as_object()?.get("error")?.as_str()
}
