//! Configuration types for the M2X client library.
//!
//! This module provides the configuration used to construct an
//! [`M2XClient`](crate::clients::M2XClient).
//!
//! # Overview
//!
//! - [`M2XConfig`]: The configuration struct holding all client settings
//! - [`M2XConfigBuilder`]: A builder for constructing [`M2XConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`Endpoint`]: A validated API endpoint URL
//! - [`ApiVersion`]: The M2X API version to use
//!
//! # Example
//!
//! ```rust
//! use m2x::{ApiKey, ApiVersion, M2XConfig};
//!
//! let config = M2XConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiKey, Endpoint};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the M2X client.
///
/// # Thread Safety
///
/// `M2XConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use m2x::{ApiKey, Endpoint, M2XConfig};
///
/// let config = M2XConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .endpoint(Endpoint::new("http://localhost:9000").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.endpoint().as_ref(), "http://localhost:9000");
/// ```
#[derive(Clone, Debug)]
pub struct M2XConfig {
    api_key: ApiKey,
    endpoint: Endpoint,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl M2XConfig {
    /// Creates a new builder for constructing an `M2XConfig`.
    #[must_use]
    pub fn builder() -> M2XConfigBuilder {
        M2XConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify M2XConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<M2XConfig>();
};

/// Builder for constructing [`M2XConfig`] instances.
///
/// `api_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `endpoint`: `https://api-m2x.att.com`
/// - `api_version`: `v2`
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no client-side timeout)
#[derive(Debug, Default)]
pub struct M2XConfigBuilder {
    api_key: Option<ApiKey>,
    endpoint: Option<Endpoint>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl M2XConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a timeout applied to each request by the HTTP client.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`M2XConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set,
    /// or [`ConfigError::InvalidApiVersion`] if a custom API version is not a
    /// single path segment.
    pub fn build(self) -> Result<M2XConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let api_version = self.api_version.unwrap_or_default();
        api_version.validate()?;

        Ok(M2XConfig {
            api_key,
            endpoint: self.endpoint.unwrap_or_default(),
            api_version,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
