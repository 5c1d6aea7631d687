use serde::{Deserialize, Serialize};

/// Body of a successful `POST /upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// Human-readable status, e.g. "Processed and saved as 12345678.json".
    pub message: String,
    /// The extracted claim record; shape is server-defined.
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Body of a failed `POST /upload`. Every field is optional because a
/// failing server may answer with anything.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct UploadFailureBody {
    #[serde(default)]
    pub message: Option<String>,
}
