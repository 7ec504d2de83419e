//! HTTP client for M2X API communication.
//!
//! This module provides [`M2XClient`], the `reqwest`-backed [`Transport`].

use std::collections::HashMap;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::M2XConfig;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the header carrying the API key.
pub const API_KEY_HEADER: &str = "X-M2X-KEY";

/// HTTP client for making requests to the M2X API.
///
/// The client handles:
/// - Base URL construction from the configured endpoint and API version
/// - Default headers including User-Agent and the `X-M2X-KEY` API key
/// - A `Content-Type: application/json` header when a body is present
///
/// It never retries and never interprets status codes: one call is one
/// round trip, and every completed exchange is returned as an [`HttpResponse`].
///
/// # Thread Safety
///
/// `M2XClient` is `Send + Sync`. Wrap it in an `Arc` and hand clones of the
/// `Arc` to as many resource handles as needed.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use m2x::{ApiKey, Device, M2XClient, M2XConfig};
///
/// let config = M2XConfig::builder()
///     .api_key(ApiKey::new("your-api-key")?)
///     .build()?;
/// let client = Arc::new(M2XClient::new(&config)?);
///
/// let device = Device::new(Arc::clone(&client), "a1b2c3");
/// let response = device.details().await?;
/// ```
#[derive(Debug)]
pub struct M2XClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api-m2x.att.com/v2`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify M2XClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<M2XClient>();
};

impl M2XClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the underlying HTTP client cannot be
    /// initialized (e.g., TLS backend failure).
    pub fn new(config: &M2XConfig) -> Result<Self, TransportError> {
        let base_url = format!("{}/{}", config.endpoint(), config.api_version());

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}M2X Rust Client v{CLIENT_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            API_KEY_HEADER.to_string(),
            config.api_key().as_ref().to_string(),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url,
            default_headers,
        })
    }

    /// Returns the base URL every request path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves a request path and query string into the full URL.
    ///
    /// Both are appended verbatim; an empty query adds nothing.
    #[must_use]
    pub fn url_for(&self, path: &str, query: Option<&str>) -> String {
        match query.filter(|q| !q.is_empty()) {
            Some(query) => format!("{}{path}?{query}", self.base_url),
            None => format!("{}{path}", self.base_url),
        }
    }

    /// Sends a request to the M2X API.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the URL is malformed, the connection
    /// fails, the request times out, or the body cannot be read.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.url_for(&request.path, request.query.as_deref());

        let method = match request.method {
            crate::clients::HttpMethod::Get => reqwest::Method::GET,
            crate::clients::HttpMethod::Post => reqwest::Method::POST,
            crate::clients::HttpMethod::Put => reqwest::Method::PUT,
            crate::clients::HttpMethod::Delete => reqwest::Method::DELETE,
        };
        let mut req_builder = self.client.request(method, &url);

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body);
        }

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            "Sending M2X request"
        );

        let res = req_builder.send().await.map_err(|e| {
            tracing::debug!(
                method = %request.method,
                path = %request.path,
                error = %e,
                "M2X request failed"
            );
            TransportError::from(e)
        })?;

        let status = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let raw = res.text().await?;

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status,
            "Received M2X response"
        );

        Ok(HttpResponse::new(status, headers, raw))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Transport for M2XClient {
    async fn make_request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, ApiVersion, Endpoint};

    fn create_test_config() -> M2XConfig {
        M2XConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_default_endpoint_and_version() {
        let client = M2XClient::new(&create_test_config()).unwrap();
        assert_eq!(client.base_url(), "https://api-m2x.att.com/v2");
    }

    #[test]
    fn test_client_construction_with_custom_endpoint() {
        let config = M2XConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .endpoint(Endpoint::new("http://localhost:9000/").unwrap())
            .api_version(ApiVersion::Custom("v3".to_string()))
            .build()
            .unwrap();
        let client = M2XClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000/v3");
    }

    #[test]
    fn test_api_key_header_injection() {
        let client = M2XClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get(API_KEY_HEADER),
            Some(&"test-api-key".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = M2XClient::new(&create_test_config()).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("M2X Rust Client v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = M2XConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .user_agent_prefix("Gateway/1.0")
            .build()
            .unwrap();
        let client = M2XClient::new(&config).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Gateway/1.0 | M2X Rust Client"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = M2XClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_url_for_appends_path_and_query_verbatim() {
        let client = M2XClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.url_for("/devices/abc", None),
            "https://api-m2x.att.com/v2/devices/abc"
        );
        assert_eq!(
            client.url_for("/devices", Some("q=front door&limit=5")),
            "https://api-m2x.att.com/v2/devices?q=front door&limit=5"
        );
        assert_eq!(
            client.url_for("/devices", Some("")),
            "https://api-m2x.att.com/v2/devices"
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<M2XClient>();
    }
}
