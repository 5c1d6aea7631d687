#![allow(dead_code)]

use std::collections::HashMap;

use axum::extract::{Multipart, Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

use claimdesk::config::ClientConfig;
use claimdesk::search::client::HttpQueryService;
use claimdesk::upload::client::HttpUploadClient;

/// An in-process stand-in for the claim document service.
///
/// Serves fixed fixtures on an ephemeral port. The server task is aborted
/// when this struct is dropped.
pub struct TestEnv {
    pub base_url: Url,
    handle: JoinHandle<()>,
}

impl TestEnv {
    pub async fn start() -> Self {
        let router = Router::new()
            .route("/api/search", get(search_handler))
            .route("/api/document/{id}", get(document_handler))
            .route("/api/summary", get(summary_handler))
            .route("/api/occupations", get(occupations_handler))
            .route("/map-data", get(map_data_handler))
            // Same service with its database down, reached via base URL `broken/`.
            .route("/broken/map-data", get(map_data_failure_handler))
            .route("/upload", post(upload_handler));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Test server failed");
        });

        Self {
            base_url: Url::parse(&format!("http://{addr}/")).expect("valid test URL"),
            handle,
        }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url.as_str()).expect("valid test config")
    }

    pub fn query_service(&self) -> HttpQueryService {
        HttpQueryService::from_config(&self.config())
    }

    pub fn upload_client(&self) -> HttpUploadClient {
        HttpUploadClient::from_config(&self.config())
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A base URL nobody listens on.
pub async fn unreachable_base_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    Url::parse(&format!("http://{addr}/")).expect("valid URL")
}

fn json_text(body: &'static str) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn search_handler(Query(params): Query<HashMap<String, String>>) -> Response {
    let code = params.get("community_id").map(String::as_str).unwrap_or("");
    match code {
        "" => error_body(StatusCode::BAD_REQUEST, "No community ID provided"),
        "abc123" => Json(json!({
            "Approved": [{ "id": 1, "name": "Doc A" }],
            "Pending": []
        }))
        .into_response(),
        // Rows as the database returns them, with extra columns. Served as
        // raw text so the key order on the wire is exactly this.
        "forest 7" => json_text(
            r#"{
                "rejected": [
                    {"id": 30, "name": "Document 30", "document_status": "rejected", "Community_ID": 7}
                ],
                "approved": [
                    {"id": 10, "name": "Document 10", "document_status": "approved", "Community_ID": 7},
                    {"id": 11, "name": "Document 11", "document_status": "approved", "Community_ID": 7}
                ],
                "Claim": [
                    {"id": 20, "name": null, "document_status": null, "Community_ID": 7}
                ]
            }"#,
        ),
        "garbled" => (StatusCode::OK, "<html>oops</html>").into_response(),
        "wrong-shape" => Json(json!({ "approved": [{ "name": "no id" }] })).into_response(),
        // The original service answers database failures with a 200.
        "db-down" => Json(json!({ "error": "Can't connect to MySQL server" })).into_response(),
        _ => error_body(StatusCode::NOT_FOUND, "community not found"),
    }
}

async fn document_handler(Path(id): Path<i64>) -> Response {
    match id {
        42 => Json(json!({ "id": 42, "extra": "field" })).into_response(),
        10 => Json(json!({
            "DOC_ID_NUMBER": 10,
            "Claim_Person": "Sita Devi",
            "Occupation": "Farmer",
            "document_status": "approved",
            "latitude": 21.25,
            "longitude": 81.63
        }))
        .into_response(),
        500 => error_body(StatusCode::INTERNAL_SERVER_ERROR, "Lost connection to MySQL"),
        _ => error_body(StatusCode::NOT_FOUND, "Document not found"),
    }
}

async fn summary_handler() -> Response {
    Json(json!({
        "total_claims": 9,
        "total_approved": 4,
        "total_rejected": 2,
        "total_in_process": 2,
        "total_delayed": 1
    }))
    .into_response()
}

async fn occupations_handler(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("community_id").map(String::as_str) {
        None | Some("") => error_body(StatusCode::BAD_REQUEST, "community_id is required"),
        Some("abc123") => Json(json!({
            "Farmer": [{ "name": "PM-KISAN" }, { "name": "Van Dhan Yojana" }],
            "Weaver": []
        }))
        .into_response(),
        Some(_) => Json(json!({})).into_response(),
    }
}

/// Geolocated claims. Coordinates come out of MySQL `DECIMAL` columns, which
/// the original service serializes as strings.
async fn map_data_handler() -> Response {
    json_text(
        r#"[
            {
                "Claim_Person": "Sita Devi",
                "village_name": "Kondagaon",
                "tehsil_name": "Kondagaon",
                "district_name": "Kondagaon",
                "latitude": "19.5900",
                "longitude": "81.6640",
                "Community_ID": 7,
                "document_status": "approved"
            },
            {
                "Claim_Person": "Ramesh Kumar",
                "village_name": null,
                "tehsil_name": "Bastar",
                "district_name": "Bastar",
                "latitude": 19.07,
                "longitude": 82.03,
                "Community_ID": "12",
                "document_status": null
            }
        ]"#,
    )
}

async fn map_data_failure_handler() -> Response {
    error_body(StatusCode::INTERNAL_SERVER_ERROR, "Lost connection to MySQL")
}

async fn upload_handler(mut multipart: Multipart) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("").to_string();
        let content_type = field.content_type().unwrap_or("").to_string();
        if file_name.is_empty() {
            return upload_failure("No selected file");
        }
        let Ok(bytes) = field.bytes().await else {
            return upload_failure("Failed to read upload");
        };

        return match file_name.as_str() {
            "crash.pdf" => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
            "teapot.pdf" => {
                (StatusCode::IM_A_TEAPOT, Json(json!({ "success": false }))).into_response()
            }
            "garbled.pdf" => (StatusCode::OK, "not json").into_response(),
            _ if bytes.is_empty() => upload_failure("No extractable text found in PDF."),
            _ => Json(json!({
                "success": true,
                "message": "Processed and saved as 12345678.json (DB insert: ok)",
                "data": {
                    "DOC_ID_NUMBER": 12345678,
                    "file_name": file_name,
                    "content_type": content_type,
                    "size": bytes.len()
                }
            }))
            .into_response(),
        };
    }
    upload_failure("No file part")
}

fn upload_failure(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "message": message })),
    )
        .into_response()
}
