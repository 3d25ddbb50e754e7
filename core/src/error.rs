//! Error types for the request helpers.
//!
//! # Design
//! Every way an exchange can end without invoking the completion callback
//! gets its own variant, so callers can tell a request that was never sent
//! (`EmptyEndpoint`) from one the server refused (`HttpError`) from one the
//! network lost (`TransportError`). `HttpError` keeps the raw status and
//! body for debugging.

use std::fmt;

/// Errors returned by `AjaxClient` methods.
#[derive(Debug)]
pub enum ClientError {
    /// The endpoint string was empty; nothing was sent.
    EmptyEndpoint,

    /// The exchange completed with a status other than 200.
    HttpError { status: u16, body: Vec<u8> },

    /// A POST response body could not be decoded as JSON.
    DeserializationError(String),

    /// The transport failed before a response was available.
    TransportError(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::EmptyEndpoint => write!(f, "endpoint must not be empty"),
            ClientError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {}", String::from_utf8_lossy(body))
            }
            ClientError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ClientError::TransportError(msg) => {
                write!(f, "transport failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ClientError {}
