//! # M2X API Rust Client
//!
//! A Rust client for the AT&T M2X IoT platform, providing type-safe
//! configuration, a pluggable HTTP transport, and resource handles for the
//! M2X REST API.
//!
//! ## Overview
//!
//! This library provides:
//! - Type-safe configuration via [`M2XConfig`] and [`M2XConfigBuilder`]
//! - Validated newtypes for the API key and endpoint
//! - An async HTTP client, [`M2XClient`], that attaches the API key and
//!   default headers to every request
//! - A [`Transport`] trait so resource handles can run over any transport
//! - Generic [`Resource`] and [`MetadataResource`] handles
//! - Concrete [`Device`], [`Distribution`], [`Collection`], [`Key`] and
//!   [`Stream`] resources
//!
//! ## Quick Start
//!
//! ```rust
//! use m2x::{ApiKey, ApiVersion, M2XConfig};
//!
//! // Create configuration using the builder pattern
//! let config = M2XConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use m2x::{ApiKey, Device, M2XClient, M2XConfig};
//!
//! let config = M2XConfig::builder()
//!     .api_key(ApiKey::new("your-api-key")?)
//!     .build()?;
//! let client = Arc::new(M2XClient::new(&config)?);
//!
//! // GET /v2/devices/a1b2c3
//! let device = Device::new(Arc::clone(&client), "a1b2c3");
//! let response = device.details().await?;
//!
//! // PUT /v2/devices/a1b2c3/metadata/owner
//! device.update_metadata_field("owner", r#"{"value":"ops"}"#).await?;
//!
//! // POST /v2/devices/a1b2c3/streams/temperature/values
//! device
//!     .stream("temperature")
//!     .post_values(r#"{"values":[{"timestamp":"2024-01-01T00:00:00Z","value":21}]}"#)
//!     .await?;
//! ```
//!
//! ## Error Handling
//!
//! Configuration problems surface as [`ConfigError`] when the config is
//! built. Once a client exists, every resource call returns
//! `Result<HttpResponse, TransportError>`: an HTTP 4xx or 5xx is still an
//! `Ok` response, and callers inspect [`HttpResponse::status`] themselves.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden retries**: One call is one round trip

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, ApiVersion, Endpoint, M2XConfig, M2XConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse, M2XClient, Transport,
    TransportError,
};

// Re-export resource types
pub use rest::resources::{Collection, Device, Distribution, Key, Stream};
pub use rest::{EntityPath, MetadataResource, Resource, ResourcePath};
