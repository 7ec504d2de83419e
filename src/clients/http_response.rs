//! HTTP response type for the M2X client library.
//!
//! [`HttpResponse`] is an opaque pass-through of what the transport received.
//! The resource layer never inspects it; the accessors here exist for the
//! caller's convenience.

use std::collections::HashMap;

/// A raw HTTP response from the M2X API.
///
/// Header names are stored lower-cased; a header may carry several values.
/// The body is kept as text and parsed only when [`HttpResponse::json`] is
/// called.
///
/// # Example
///
/// ```rust
/// use m2x::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(200, HashMap::new(), r#"{"id":"abc"}"#);
/// assert!(response.is_success());
/// assert_eq!(response.json().unwrap()["id"], "abc");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub raw: String,
}

impl HttpResponse {
    /// Creates a new response. Header names are lower-cased.
    #[must_use]
    pub fn new(
        status: u16,
        headers: HashMap<String, Vec<String>>,
        raw: impl Into<String>,
    ) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::new();
        for (name, values) in headers {
            normalized
                .entry(name.to_lowercase())
                .or_default()
                .extend(values);
        }

        Self {
            status,
            headers: normalized,
            raw: raw.into(),
        }
    }

    /// Parses the body as JSON.
    ///
    /// An empty body parses as an empty JSON object.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        if self.raw.trim().is_empty() {
            return Ok(serde_json::json!({}));
        }
        serde_json::from_str(&self.raw)
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns `true` if the status code is in the 4xx range.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status <= 499
    }

    /// Returns `true` if the status code is in the 5xx range.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status <= 599
    }

    /// Returns `true` for any 4xx or 5xx status code.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.is_client_error() || self.is_server_error()
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
