use async_trait::async_trait;
use url::Url;

use crate::config::ClientConfig;
use crate::error::UploadError;
use crate::models::upload::{UploadFailureBody, UploadReceipt};

/// Sends a claim document to the processing endpoint.
///
/// Abstracted as a trait so presentation code can be exercised without a
/// live server.
#[async_trait(?Send)]
pub trait UploadService {
    /// `POST /upload` with a single multipart field named `file`.
    async fn upload(&self, file_name: &str, content: Vec<u8>) -> Result<UploadReceipt, UploadError>;
}

/// `reqwest` implementation of [`UploadService`].
#[derive(Debug, Clone)]
pub struct HttpUploadClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpUploadClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone())
    }
}

#[async_trait(?Send)]
impl UploadService for HttpUploadClient {
    async fn upload(
        &self,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<UploadReceipt, UploadError> {
        let url = self
            .base_url
            .join("upload")
            .map_err(|e| UploadError::Network(format!("Invalid upload endpoint: {e}")))?;

        let mime = mime_guess::from_path(file_name).first_or_octet_stream();
        let part = reqwest::multipart::Part::bytes(content)
            .file_name(file_name.to_string())
            .mime_str(mime.as_ref())?;
        let form = reqwest::multipart::Form::new().part("file", part);

        tracing::info!(%url, file_name, %mime, "Uploading file");
        let response = self.client.post(url).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.json::<UploadFailureBody>().await.unwrap_or_default();
            let message = body.message.unwrap_or_else(|| "Server error".to_string());
            tracing::warn!(%status, "Upload rejected: {message}");
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let receipt: UploadReceipt = response
            .json()
            .await
            .map_err(|e| UploadError::Network(format!("Invalid upload response: {e}")))?;
        tracing::info!("Upload accepted: {}", receipt.message);
        Ok(receipt)
    }
}
