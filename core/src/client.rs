//! Stateless request builder, response interpreter, and exchange driver.
//!
//! # Design
//! `AjaxClient` holds only a `base_url` and carries no mutable state between
//! calls. Each verb is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`,
//! keeping the I/O boundary explicit and the core deterministic. The async
//! [`fetch`](AjaxClient::fetch) and [`submit`](AjaxClient::submit) methods
//! drive a caller-supplied [`Transport`] through a single build, execute,
//! and parse round and hand the resolved value to a completion callback.
//!
//! The callback contract is the load-bearing invariant: it runs exactly
//! once, and only for an exchange that completed with status 200. Every
//! other outcome leaves the callback uninvoked and is reported through the
//! returned `Result` instead.

use serde_json::Value;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::ResponseData;

/// Stateless client for callback-style GET and POST exchanges.
///
/// Endpoints are paths appended to `base_url`. The client owns no transport
/// and no connection state; each call borrows a [`Transport`] for the single
/// round-trip it performs.
#[derive(Debug, Clone)]
pub struct AjaxClient {
    base_url: String,
}

impl AjaxClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_get(&self, endpoint: &str) -> Result<HttpRequest, ClientError> {
        if endpoint.is_empty() {
            return Err(ClientError::EmptyEndpoint);
        }
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{endpoint}", self.base_url),
            headers: Vec::new(),
            body: None,
        })
    }

    /// Build a POST request carrying `payload` byte-for-byte.
    ///
    /// No `Content-Type` header is set; the payload is already encoded by
    /// the caller and the transport's default applies.
    pub fn build_post(&self, endpoint: &str, payload: &str) -> Result<HttpRequest, ClientError> {
        if endpoint.is_empty() {
            return Err(ClientError::EmptyEndpoint);
        }
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{endpoint}", self.base_url),
            headers: Vec::new(),
            body: Some(payload.to_string()),
        })
    }

    /// Interpret a GET response.
    ///
    /// A body that fails to decode as JSON is not an error: the bytes are
    /// returned unmodified as [`ResponseData::Raw`] (the CAPTCHA image is
    /// the canonical case).
    pub fn parse_get(&self, response: HttpResponse) -> Result<ResponseData, ClientError> {
        check_status(&response)?;
        match serde_json::from_slice(&response.body) {
            Ok(value) => Ok(ResponseData::Json(value)),
            Err(_) => Ok(ResponseData::Raw(response.body)),
        }
    }

    /// Interpret a POST response.
    ///
    /// Unlike GET there is no raw fallback: a body that is not valid JSON
    /// is a [`ClientError::DeserializationError`].
    pub fn parse_post(&self, response: HttpResponse) -> Result<Value, ClientError> {
        check_status(&response)?;
        serde_json::from_slice(&response.body)
            .map_err(|e| ClientError::DeserializationError(e.to_string()))
    }

    /// GET `endpoint` and hand the resolved body to `on_done`.
    ///
    /// `on_done` runs exactly once, and only when the exchange completes
    /// with status 200. A build error, transport failure, or non-200 status
    /// leaves the callback uninvoked; the reason comes back as the error.
    pub async fn fetch<T, F>(
        &self,
        transport: &T,
        endpoint: &str,
        on_done: F,
    ) -> Result<(), ClientError>
    where
        T: Transport,
        F: FnOnce(ResponseData),
    {
        let request = self.build_get(endpoint)?;
        log::debug!("GET {}", request.path);
        let data = match transport.execute(request).await.and_then(|r| self.parse_get(r)) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("GET {endpoint}: {e}");
                return Err(e);
            }
        };
        on_done(data);
        Ok(())
    }

    /// POST `payload` to `endpoint` and hand the decoded JSON to `on_done`.
    ///
    /// Same callback contract as [`fetch`](AjaxClient::fetch); the payload
    /// reaches the transport unmodified.
    pub async fn submit<T, F>(
        &self,
        transport: &T,
        endpoint: &str,
        payload: &str,
        on_done: F,
    ) -> Result<(), ClientError>
    where
        T: Transport,
        F: FnOnce(Value),
    {
        let request = self.build_post(endpoint, payload)?;
        log::debug!("POST {}", request.path);
        let value = match transport.execute(request).await.and_then(|r| self.parse_post(r)) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("POST {endpoint}: {e}");
                return Err(e);
            }
        };
        on_done(value);
        Ok(())
    }
}

/// Only status 200 counts as a completed exchange.
fn check_status(response: &HttpResponse) -> Result<(), ClientError> {
    if response.status == 200 {
        return Ok(());
    }
    Err(ClientError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
