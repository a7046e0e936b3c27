//! HTTP transport boundary types.
//!
//! # Design
//! Requests and responses are plain data with owned fields. The client builds
//! a `Request` and hands it to an injected [`Transport`], which performs the
//! single network round-trip. Keeping the boundary as data makes the client
//! deterministic and lets tests substitute an in-memory transport.

use crate::error::{ApiError, TransportError};

/// HTTP method for a request.
///
/// Fixed by the calling operation (`get`, `post`, ...); request options carry
/// no method field, so callers cannot override it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Credentials mode forwarded to the transport, mirroring the fetch
/// `credentials` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    SameOrigin,
    Include,
    Omit,
}

/// A request body as plain data.
///
/// `Form` bodies are handed to the transport unencoded: the transport
/// generates the multipart boundary and the `multipart/form-data`
/// content-type header itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Text(String),
    Bytes(Vec<u8>),
    Form(Form),
}

/// A multipart form described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub fields: Vec<FormField>,
}

/// One field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub file_name: Option<String>,
    pub value: Vec<u8>,
}

/// A file payload for [`ApiClient::post_file`](crate::ApiClient::post_file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// The merged, final request handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub credentials: Credentials,
    pub body: Option<Body>,
}

/// An HTTP response as reported by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Response {
    /// True iff the status code is in the 200..=299 success range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First header value matching `name`, compared ASCII-case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Decode the body as JSON. Consumes the response: the body is a one-shot
    /// read and must not be consumed twice.
    pub fn json(self) -> Result<serde_json::Value, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// A fetch-compatible transport: one network round-trip per call.
///
/// Implementations report every response as data, including 4xx/5xx — status
/// interpretation belongs to the client, not the transport. `Err` is reserved
/// for network-level failures (DNS, refused connection, aborted transfer).
pub trait Transport {
    fn send(&self, request: Request) -> Result<Response, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: Request) -> Result<Response, TransportError> {
        (**self).send(request)
    }
}
