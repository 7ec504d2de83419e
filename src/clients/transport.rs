//! The transport contract consumed by every resource handle.

use std::future::Future;

use crate::clients::{HttpRequest, HttpResponse, TransportError};

/// Performs the network round trip for a single [`HttpRequest`].
///
/// Implementations must be thread-safe: one transport is shared through an
/// `Arc` by every resource handle built on it. [`M2XClient`](crate::M2XClient)
/// is the production implementation; tests substitute their own.
///
/// A transport resolves the request path against its base URL, sends the
/// request once, and returns whatever came back. Any HTTP status is an
/// `Ok` response; `Err` is reserved for failures to complete the exchange.
///
/// # Example
///
/// ```rust
/// use m2x::clients::{HttpRequest, HttpResponse, Transport, TransportError};
/// use std::collections::HashMap;
///
/// struct Echo;
///
/// impl Transport for Echo {
///     async fn make_request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
///         Ok(HttpResponse::new(200, HashMap::new(), request.path))
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends the request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the request could not be completed.
    fn make_request(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}
