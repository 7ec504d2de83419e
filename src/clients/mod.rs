//! HTTP transport layer for M2X API communication.
//!
//! This module provides the transport seam that every resource handle
//! delegates to, plus the production `reqwest` implementation.
//!
//! # Overview
//!
//! - [`Transport`]: The contract a transport implements (one request, one response)
//! - [`M2XClient`]: The async HTTP client implementing [`Transport`]
//! - [`HttpRequest`]: The per-call request descriptor
//! - [`HttpResponse`]: The raw response wrapper
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`TransportError`]: The single failure kind of a round trip
//!
//! # Example
//!
//! ```rust,ignore
//! use m2x::clients::{HttpMethod, HttpRequest, M2XClient};
//! use m2x::{ApiKey, M2XConfig};
//!
//! let config = M2XConfig::builder()
//!     .api_key(ApiKey::new("your-api-key")?)
//!     .build()?;
//! let client = M2XClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/devices")
//!     .query("limit=10")
//!     .build();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Each call performs exactly one round trip, and deciding
//! whether to retry is left to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::TransportError;
pub use http_client::{M2XClient, API_KEY_HEADER, CLIENT_VERSION};
pub use http_request::{
    query_string, HttpMethod, HttpRequest, HttpRequestBuilder, InvalidHttpMethodError,
};
pub use http_response::HttpResponse;
pub use transport::Transport;
