//! Synchronous convenience client for a JSON REST API.
//!
//! # Overview
//! Five operations (`get`, `post`, `put`, `delete`, `post_file`) that merge
//! default request options with caller overrides, issue one HTTP request
//! through an injected [`Transport`], and settle the result based on the
//! response's content-type header: JSON-classified bodies are decoded once
//! and become the resolved or rejected value, anything else passes the raw
//! response through untouched.
//!
//! # Design
//! - `ApiClient` is stateless — it holds only the transport. Calls are fully
//!   independent: no retries, no caching, no shared mutable state.
//! - Requests and responses cross the transport boundary as plain data with
//!   owned fields, so tests can substitute an in-memory transport.
//! - Default options are produced fresh per call; the per-operation method is
//!   not representable in [`RequestOptions`], so callers cannot override it.
//! - The error type keeps the contract's asymmetry: non-OK JSON rejects with
//!   the parsed error body, non-OK non-JSON rejects with the raw response.

pub mod client;
pub mod error;
pub mod http;
pub mod options;

pub use client::{ApiClient, Reply};
pub use error::{ApiError, TransportError};
pub use http::{Body, Credentials, FilePart, Form, FormField, Method, Request, Response, Transport};
pub use options::RequestOptions;
