//! Error types for the API client.
//!
//! # Design
//! The rejection value deliberately keeps two shapes rather than a uniform
//! error object: a non-OK response classified as JSON rejects with the parsed
//! error body itself (`ErrorBody`), while a non-OK response with any other
//! content type rejects with the untouched response (`Response`). Callers
//! branch on the variant, matching the contract the original API promises.

use std::fmt;

use crate::http::Response;

/// A network-level failure reported by the transport (DNS, refused
/// connection, aborted transfer). Carries the transport's own message;
/// the client propagates it without transformation.
#[derive(Debug)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TransportError {}

/// Errors returned by `ApiClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The transport failed before a response was available.
    Transport(TransportError),

    /// The response was classified as JSON but its body did not parse.
    Decode(String),

    /// Non-OK response with a JSON content type: the parsed body is the
    /// error value. Servers conventionally send
    /// `{"errors": [{"message": ..., "code": ...}]}`.
    ErrorBody(serde_json::Value),

    /// Non-OK response with a non-JSON content type: the raw response is the
    /// error value, body unread.
    Response(Response),
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Transport(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "transport failure: {err}"),
            ApiError::Decode(msg) => write!(f, "response body is not valid JSON: {msg}"),
            ApiError::ErrorBody(body) => write!(f, "server returned an error body: {body}"),
            ApiError::Response(response) => write!(f, "HTTP {}", response.status),
        }
    }
}

impl std::error::Error for ApiError {}
