//! Asynchronous GET/POST helpers with completion callbacks.
//!
//! # Overview
//! Wraps single HTTP request/response exchanges and delivers the parsed
//! body to a caller-supplied callback: [`AjaxClient::fetch`] issues a GET
//! and resolves the body as JSON or, when the body is not valid JSON (a
//! CAPTCHA image), as raw bytes; [`AjaxClient::submit`] issues a POST with
//! an opaque payload and resolves the body as JSON. The callback runs
//! exactly once per exchange, and only for a 200 completion — every other
//! outcome leaves it uninvoked and is reported as a typed error instead.
//!
//! # Design
//! - `AjaxClient` is stateless — it holds only `base_url`.
//! - Each verb is split into `build_*` (produces a request) and `parse_*`
//!   (consumes a response), so the I/O boundary is explicit and the core
//!   stays deterministic.
//! - The network round-trip itself belongs to a caller-supplied
//!   [`Transport`]; the crate ships none of its own.
//! - No retries, timeouts, or cancellation: one call, one exchange, at
//!   most one callback invocation.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::AjaxClient;
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::Transport;
pub use types::ResponseData;
