//! Transport error type for the M2X client library.
//!
//! Every API call can fail in exactly one way: the transport could not
//! complete the round trip (connection refused, DNS failure, timeout, broken
//! body stream, malformed URL). That failure is represented by
//! [`TransportError`] and is handed to the caller unchanged.
//!
//! HTTP error statuses are *not* failures at this layer. A `404` or `500`
//! is a completed round trip and comes back as an
//! [`HttpResponse`](crate::clients::HttpResponse).
//!
//! # Example
//!
//! ```rust,ignore
//! match device.details().await {
//!     Ok(response) if response.is_success() => println!("{}", response.raw),
//!     Ok(response) => println!("API returned {}", response.status),
//!     Err(e) => println!("Transport failure: {e}"),
//! }
//! ```

use std::error::Error as StdError;

use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Error returned when the transport fails to complete a request.
///
/// The underlying cause is kept as the error source and can be downcast by
/// callers that need to distinguish, for example, an I/O error from a
/// `reqwest` error.
///
/// # Example
///
/// ```rust
/// use m2x::TransportError;
/// use std::io;
///
/// let error = TransportError::new(io::Error::new(io::ErrorKind::TimedOut, "timed out"));
/// assert!(error.to_string().contains("timed out"));
/// assert_eq!(
///     error.downcast_ref::<io::Error>().map(io::Error::kind),
///     Some(io::ErrorKind::TimedOut)
/// );
/// ```
#[derive(Debug, Error)]
#[error("Transport error: {source}")]
pub struct TransportError {
    #[source]
    source: BoxError,
}

impl TransportError {
    /// Wraps any error as a transport failure.
    pub fn new<E>(source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            source: source.into(),
        }
    }

    /// Returns the underlying cause if it is of type `E`.
    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.downcast_ref::<E>()
    }

    /// Returns `true` if the failure was a timeout reported by the HTTP client.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.downcast_ref::<reqwest::Error>()
            .is_some_and(reqwest::Error::is_timeout)
            || self
                .downcast_ref::<std::io::Error>()
                .is_some_and(|e| e.kind() == std::io::ErrorKind::TimedOut)
    }

    /// Consumes the error and returns the underlying cause.
    #[must_use]
    pub fn into_inner(self) -> BoxError {
        self.source
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self::new(error)
    }
}

impl From<std::io::Error> for TransportError {
    fn from(error: std::io::Error) -> Self {
        Self::new(error)
    }
}
