//! Request identification.
//!
//! # Responsibilities
//! - Name the request ID header
//! - Read the ID back out of a request
//! - Build the per-request tracing span
//!
//! # Design Decisions
//! - IDs are UUID v4, generated by tower-http's `SetRequestIdLayer` as early as possible
//! - A client-supplied `x-request-id` is kept as-is and echoed on the response

use axum::http::Request;
use tracing::Span;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Access to the request ID header.
pub trait RequestIdExt {
    /// The request ID, or `"unknown"` when the header is missing or not UTF-8.
    fn request_id(&self) -> &str;
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> &str {
        self.headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
    }
}

/// Span wrapping a whole request.
pub fn request_span<B>(request: &Request<B>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request.request_id(),
    )
}
