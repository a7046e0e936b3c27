//! Request option defaults and merging.
//!
//! # Design
//! Defaults are produced fresh per call so no shared mutable structure exists
//! for callers to corrupt. `RequestOptions` intentionally has no method
//! field: each client operation fixes the method itself, and the type system
//! makes it impossible to override through the options object.

use crate::http::{Body, Credentials, Method, Request};

/// Caller-supplied overrides for one request. All fields are optional;
/// `Default` means "no overrides".
///
/// Header names are matched ASCII-case-insensitively during the merge, so a
/// caller's `content-type` replaces the default `Content-Type`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub credentials: Option<Credentials>,
    pub body: Option<Body>,
}

/// Headers sent with every request unless overridden.
fn default_headers() -> Vec<(String, String)> {
    vec![
        ("Accept".to_string(), "application/json".to_string()),
        ("Content-Type".to_string(), "application/json".to_string()),
        ("X-Requested-With".to_string(), "XMLHttpRequest".to_string()),
    ]
}

/// Merge the defaults with caller overrides into the final request.
/// Overrides win key-by-key on headers; `method` always comes from the
/// calling operation.
pub(crate) fn merge_options(method: Method, url: &str, overrides: RequestOptions) -> Request {
    let mut headers = default_headers();
    for (name, value) in overrides.headers {
        set_header(&mut headers, name, value);
    }
    Request {
        method,
        url: url.to_string(),
        headers,
        credentials: overrides.credentials.unwrap_or(Credentials::SameOrigin),
        body: overrides.body,
    }
}

/// Replace the value of an existing header (name compared
/// ASCII-case-insensitively) or append a new one.
fn set_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    match headers.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(&name)) {
        Some(slot) => slot.1 = value,
        None => headers.push((name, value)),
    }
}
