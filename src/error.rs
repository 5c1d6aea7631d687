use thiserror::Error;

/// Failures of the read endpoints (search, document detail, summary).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The request could not be sent, or the response could not be parsed.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a well-formed `{ "error": ... }` payload.
    #[error("{0}")]
    ServerReported(String),
}

impl QueryError {
    /// Text shown to the user in a status line or alert.
    pub fn user_message(&self) -> String {
        match self {
            QueryError::Network(_) => "Request failed (network).".to_string(),
            QueryError::ServerReported(msg) => msg.clone(),
        }
    }
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        QueryError::Network(err.to_string())
    }
}

/// Failures of `POST /upload`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Network error: {0}")]
    Network(String),

    /// Any non-2xx answer, whatever the body looked like.
    #[error("Upload rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl UploadError {
    pub fn user_message(&self) -> String {
        match self {
            UploadError::Network(_) => "Upload failed (network).".to_string(),
            UploadError::Rejected { message, .. } => message.clone(),
        }
    }
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        UploadError::Network(err.to_string())
    }
}

/// Invalid user input caught before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a community code.")]
    EmptyCommunityCode,

    #[error("Please enter a valid ID.")]
    InvalidDocumentId,

    #[error("Select a file first")]
    NoFileSelected,
}

/// Application-wide error types.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Upload(#[from] UploadError),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
