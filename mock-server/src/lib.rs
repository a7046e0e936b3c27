//! Fixture server reproducing every response shape the API client handles.
//!
//! Routes are stateless: each one pins a specific combination of status,
//! content-type header and body (JSON success, JSON error payload, non-JSON
//! content types, quoted charset spellings, 204 without a content type,
//! malformed JSON, multipart upload echo).

use axum::{
    extract::Multipart,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

/// The error payload shape the real API sends on failures.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub errors: Vec<ErrorItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorItem {
    pub message: String,
    pub code: String,
}

impl ErrorBody {
    pub fn single(message: &str, code: &str) -> Self {
        Self {
            errors: vec![ErrorItem {
                message: message.to_string(),
                code: code.to_string(),
            }],
        }
    }
}

pub fn app() -> Router {
    Router::new()
        .route(
            "/api/entity",
            get(get_entity).post(echo_entity).put(echo_entity).delete(delete_entity),
        )
        .route("/api/entity-quoted", get(get_entity_quoted))
        .route("/api/plain", get(get_plain))
        .route("/api/broken", get(get_broken))
        .route("/api/error", get(get_error))
        .route("/api/denied", get(get_denied))
        .route("/api/upload", post(upload))
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_entity() -> Json<serde_json::Value> {
    Json(json!({"foo": "bar"}))
}

/// JSON body announced with an oddly-spelled but spec-equivalent
/// content-type value.
async fn get_entity_quoted() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/JSON; charset=\"utf-8\"")],
        r#"{"foo":"bar"}"#,
    )
}

async fn get_plain() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "my type")], "not json at all")
}

/// Claims JSON but the body does not parse.
async fn get_broken() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], "{not json")
}

async fn get_error() -> impl IntoResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody::single("its an error", "DS16")),
    )
}

async fn get_denied() -> impl IntoResponse {
    (StatusCode::BAD_REQUEST, "no dice")
}

/// Echo the JSON request body back, or reject non-JSON payloads with the
/// conventional error body.
async fn echo_entity(body: String) -> Response {
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(value) => Json(value).into_response(),
        Err(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::single("request body is not valid JSON", "B400")),
        )
            .into_response(),
    }
}

async fn delete_entity() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Accept a multipart upload with a part named `file` and answer with the
/// job URL the real importer returns.
async fn upload(mut multipart: Multipart) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            // Drain the part so the request body is fully read.
            if field.bytes().await.is_ok() {
                return Json(json!({"text": "/api/v2/job/test"})).into_response();
            }
            break;
        }
    }
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody::single("expected a multipart field named 'file'", "UP01")),
    )
        .into_response()
}
