//! HTTP request and response types as plain data.
//!
//! # Design
//! These types describe HTTP traffic without performing any I/O. The client
//! builds `HttpRequest` values and parses `HttpResponse` values; the
//! `transport` module (or any harness a caller prefers) executes the actual
//! round-trip in between. This separation keeps request building and response
//! parsing deterministic and testable without a network.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved across
//! task boundaries freely.

/// HTTP method for a request. The API surface is POST-only except for the
/// version listing, which is a GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `NlpCloudClient::build_*` methods. `path` is the absolute URL of
/// the operation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by `transport::execute` (or constructed directly in tests), then
/// passed to `NlpCloudClient::parse_response`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Canonical reason phrase for the status code; empty when the code has
    /// none.
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
