//! HTTP request types for the M2X client library.
//!
//! This module provides the [`HttpRequest`] descriptor handed to a
//! [`Transport`](crate::clients::Transport), and its builder.

use std::fmt;
use std::str::FromStr;

/// HTTP methods used by the M2X API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unsupported HTTP method name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid Http method {method}.")]
pub struct InvalidHttpMethodError {
    /// The method name that was provided.
    pub method: String,
}

impl FromStr for HttpMethod {
    type Err = InvalidHttpMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            _ => Err(InvalidHttpMethodError {
                method: s.to_string(),
            }),
        }
    }
}

/// A single request to be sent by a transport.
///
/// The descriptor is built per call and never stored. `path` is the full
/// resource path relative to the API base (e.g. `/devices/abc/metadata`),
/// `query` is a pre-built query string without the leading `?`, and `body`
/// is JSON text. All three are passed to the transport exactly as given.
///
/// # Example
///
/// ```rust
/// use m2x::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Put, "/devices/abc")
///     .body(r#"{"name":"x"}"#)
///     .build();
///
/// assert_eq!(request.method, HttpMethod::Put);
/// assert_eq!(request.path, "/devices/abc");
/// assert!(request.query.is_none());
/// assert_eq!(request.body.as_deref(), Some(r#"{"name":"x"}"#));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The path (relative to the API base) for this request.
    pub path: String,
    /// The query string, without the leading `?`.
    pub query: Option<String>,
    /// The JSON request body, if any.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }
}

/// Builder for [`HttpRequest`].
///
/// Unlike a validating builder, `build()` is infallible: any combination of
/// method, query and body is forwarded as-is.
#[derive(Clone, Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    path: String,
    query: Option<String>,
    body: Option<String>,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and path.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    /// Sets the query string.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets or clears the query string.
    #[must_use]
    pub fn maybe_query(mut self, query: Option<impl Into<String>>) -> Self {
        self.query = query.map(Into::into);
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets or clears the JSON body.
    #[must_use]
    pub fn maybe_body(mut self, body: Option<impl Into<String>>) -> Self {
        self.body = body.map(Into::into);
        self
    }

    /// Builds the request.
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            path: self.path,
            query: self.query,
            body: self.body,
        }
    }
}

/// Builds a query string from key/value pairs, percent-encoding both.
///
/// The result has no leading `?` and can be passed to any query argument.
///
/// # Example
///
/// ```rust
/// use m2x::clients::query_string;
///
/// let query = query_string(&[("limit", "10"), ("q", "front door")]);
/// assert_eq!(query, "limit=10&q=front%20door");
/// ```
#[must_use]
pub fn query_string<K, V>(params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key.as_ref()),
                urlencoding::encode(value.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
