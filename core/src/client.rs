//! Stateless REST convenience client over an injected transport.
//!
//! # Design
//! `ApiClient` holds only the transport and carries no mutable state between
//! calls. Every operation is the same one-shot pipeline: merge default
//! options with caller overrides (method fixed by the operation), hand the
//! request to the transport, then classify the response by its content-type
//! header. JSON-classified responses resolve or reject with the decoded body;
//! everything else passes the raw response through untouched.

use crate::error::ApiError;
use crate::http::{Body, Credentials, FilePart, Form, FormField, Method, Request, Response, Transport};
use crate::options::{merge_options, RequestOptions};

/// A successful result: either the decoded JSON body or the untouched
/// response, depending on classification.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Json(serde_json::Value),
    Raw(Response),
}

/// Stateless client issuing one HTTP request per call.
#[derive(Debug, Clone)]
pub struct ApiClient<T: Transport> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// GET `url` with the default options merged with `options`.
    pub fn get(&self, url: &str, options: RequestOptions) -> Result<Reply, ApiError> {
        self.dispatch(Method::Get, url, options)
    }

    /// POST `url` with the default options merged with `options`.
    pub fn post(&self, url: &str, options: RequestOptions) -> Result<Reply, ApiError> {
        self.dispatch(Method::Post, url, options)
    }

    /// PUT `url` with the default options merged with `options`.
    pub fn put(&self, url: &str, options: RequestOptions) -> Result<Reply, ApiError> {
        self.dispatch(Method::Put, url, options)
    }

    /// DELETE `url` with the default options merged with `options`.
    pub fn delete(&self, url: &str, options: RequestOptions) -> Result<Reply, ApiError> {
        self.dispatch(Method::Delete, url, options)
    }

    /// POST a file as a multipart form with a single field named `file`.
    ///
    /// The default JSON headers are not applied: the transport must set the
    /// `multipart/form-data` content type and boundary itself. Credentials
    /// are fixed to same-origin.
    pub fn post_file(&self, url: &str, file: FilePart) -> Result<Reply, ApiError> {
        let form = Form {
            fields: vec![FormField {
                name: "file".to_string(),
                file_name: Some(file.file_name),
                value: file.content,
            }],
        };
        let request = Request {
            method: Method::Post,
            url: url.to_string(),
            headers: Vec::new(),
            credentials: Credentials::SameOrigin,
            body: Some(Body::Form(form)),
        };
        handle_response(self.transport.send(request)?)
    }

    fn dispatch(&self, method: Method, url: &str, options: RequestOptions) -> Result<Reply, ApiError> {
        let request = merge_options(method, url, options);
        handle_response(self.transport.send(request)?)
    }
}

/// Classify and settle a response.
///
/// JSON-classified responses are decoded once: OK resolves with the body,
/// non-OK rejects with the body (servers send their error payload there).
/// Anything else resolves or rejects with the raw response, body unread.
fn handle_response(response: Response) -> Result<Reply, ApiError> {
    if is_json_response(&response) {
        let ok = response.ok();
        let body = response.json()?;
        if ok {
            Ok(Reply::Json(body))
        } else {
            Err(ApiError::ErrorBody(body))
        }
    } else if response.ok() {
        Ok(Reply::Raw(response))
    } else {
        Err(ApiError::Response(response))
    }
}

/// True iff the content-type header marks the body as JSON.
///
/// Deliberately an exact match against two literals after normalization, not
/// a MIME-parameter parser: other charsets or parameter orders do not count.
fn is_json_response(response: &Response) -> bool {
    match response.header("content-type") {
        None => false,
        Some(value) => {
            let normalized = normalize_content_type(value);
            normalized == "application/json" || normalized == "application/json;charset=utf-8"
        }
    }
}

/// Ignore case, whitespace and double quotes around the charset, per
/// RFC 7231 section 3.1.1.5.
fn normalize_content_type(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '"')
        .collect::<String>()
        .to_lowercase()
}
