//! HTTP exchange types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and interprets `HttpResponse` values
//! without ever touching the network — a [`crate::transport::Transport`]
//! implementation executes the actual round-trip. Response bodies are raw
//! bytes, not strings: one class of endpoint serves binary artifacts (a
//! CAPTCHA image) that are neither JSON nor valid UTF-8.

/// HTTP verb for a request. Only the two verbs the helpers issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `AjaxClient::build_*` methods and handed to a `Transport` for
/// execution. `headers` stays empty for both verbs: body encoding is
/// deliberately left to the caller and the transport's defaults.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A fully buffered HTTP response described as plain data.
///
/// Constructed by a `Transport` after executing an `HttpRequest`, then
/// passed to `AjaxClient::parse_*` methods for interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}
