//! Response value model for GET exchanges.
//!
//! # Design
//! GET bodies are normally JSON, but the CAPTCHA endpoint serves an image.
//! Rather than guessing from headers, the parse step attempts a JSON decode
//! and falls back to the unmodified bytes; this enum makes the two outcomes
//! explicit instead of overloading one value with both meanings.

use serde_json::Value;

/// The resolved body of a completed GET exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData {
    /// The body decoded as JSON.
    Json(Value),
    /// The body was not valid JSON; the bytes exactly as received.
    Raw(Vec<u8>),
}

impl ResponseData {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseData::Json(value) => Some(value),
            ResponseData::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&[u8]> {
        match self {
            ResponseData::Json(_) => None,
            ResponseData::Raw(bytes) => Some(bytes),
        }
    }
}
