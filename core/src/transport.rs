//! The HTTP execution seam.
//!
//! # Design
//! The core crate never performs I/O itself. Callers hand in a [`Transport`]
//! that executes one plain-data [`HttpRequest`] and returns the
//! corresponding [`HttpResponse`]; any HTTP library works (ureq, reqwest,
//! hyper, or a scripted stub in tests). Status interpretation stays with
//! `AjaxClient`, so implementations must return non-2xx responses as data
//! rather than as errors, and report only transport-level failures (DNS,
//! refused connection, broken stream) as [`ClientError::TransportError`].

use async_trait::async_trait;

use crate::error::ClientError;
use crate::http::{HttpRequest, HttpResponse};

/// Asynchronous executor for a single HTTP round-trip.
#[async_trait]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}
