//! The base resource handle.
//!
//! [`Resource`] pairs a shared [`Transport`] with a [`ResourcePath`] and
//! provides the verb helpers every M2X resource is built from:
//!
//! - `make_get` / `make_post` / `make_put` / `make_delete`, all routed
//!   through the single [`Resource::make_request`] seam
//! - the generic entity operations `details`, `update` and `delete`
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use m2x::rest::{EntityPath, Resource};
//!
//! let device = Resource::new(Arc::clone(&client), EntityPath::entity("/devices", "abc"));
//!
//! // PUT /devices/abc with the given body
//! let response = device.update(r#"{"name":"x"}"#).await?;
//!
//! // Resource-specific call through an escape hatch: GET /devices/abc/location
//! let response = device.make_get(Some("/location"), None).await?;
//! ```

use std::fmt;
use std::sync::Arc;

use crate::clients::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
use crate::rest::ResourcePath;

/// A handle to one addressable M2X resource.
///
/// The handle is immutable and holds no per-call state, so it can be shared
/// and called concurrently as long as the transport allows it. Every
/// operation is exactly one transport round trip; the response is returned
/// untouched and a transport failure is propagated unchanged.
pub struct Resource<P, T> {
    transport: Arc<T>,
    path: P,
}

impl<P, T> Resource<P, T> {
    /// Creates a handle from a shared transport and a path provider.
    #[must_use]
    pub const fn new(transport: Arc<T>, path: P) -> Self {
        Self { transport, path }
    }

    /// Returns the shared transport.
    #[must_use]
    pub const fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// Returns the path provider.
    #[must_use]
    pub const fn path(&self) -> &P {
        &self.path
    }
}

impl<P: ResourcePath, T: Transport> Resource<P, T> {
    /// Resolves a sub-path against this resource.
    #[must_use]
    pub fn build_path(&self, sub_path: Option<&str>) -> String {
        self.path.build_path(sub_path)
    }

    /// Sends a GET request. No body is sent.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn make_get(
        &self,
        sub_path: Option<&str>,
        query: Option<&str>,
    ) -> Result<HttpResponse, TransportError> {
        self.make_request(HttpMethod::Get, sub_path, query, None).await
    }

    /// Sends a POST request with a JSON body. No query string is sent.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn make_post(
        &self,
        sub_path: Option<&str>,
        body: &str,
    ) -> Result<HttpResponse, TransportError> {
        self.make_request(HttpMethod::Post, sub_path, None, Some(body)).await
    }

    /// Sends a PUT request with a JSON body. No query string is sent.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn make_put(
        &self,
        sub_path: Option<&str>,
        body: &str,
    ) -> Result<HttpResponse, TransportError> {
        self.make_request(HttpMethod::Put, sub_path, None, Some(body)).await
    }

    /// Sends a DELETE request. No body is sent.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn make_delete(
        &self,
        sub_path: Option<&str>,
        query: Option<&str>,
    ) -> Result<HttpResponse, TransportError> {
        self.make_request(HttpMethod::Delete, sub_path, query, None).await
    }

    /// Sends a request through the transport.
    ///
    /// This is the one place every helper above routes through. The path is
    /// `build_path(sub_path)`; `query` and `body` are forwarded unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn make_request(
        &self,
        method: HttpMethod,
        sub_path: Option<&str>,
        query: Option<&str>,
        body: Option<&str>,
    ) -> Result<HttpResponse, TransportError> {
        let request = HttpRequest::builder(method, self.build_path(sub_path))
            .maybe_query(query)
            .maybe_body(body)
            .build();

        self.transport.make_request(request).await
    }

    /// Fetches the entity representation.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn details(&self) -> Result<HttpResponse, TransportError> {
        self.make_get(None, None).await
    }

    /// Updates the entity with the given JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn update(&self, body: &str) -> Result<HttpResponse, TransportError> {
        self.make_put(None, body).await
    }

    /// Deletes the entity.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn delete(&self) -> Result<HttpResponse, TransportError> {
        self.make_delete(None, None).await
    }
}

impl<P: Clone, T> Clone for Resource<P, T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            path: self.path.clone(),
        }
    }
}

impl<P: fmt::Debug, T> fmt::Debug for Resource<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::mock::RecordingTransport;
    use crate::rest::EntityPath;
    use std::collections::HashMap;
    use std::io;

    fn device(transport: &Arc<RecordingTransport>) -> Resource<EntityPath, RecordingTransport> {
        Resource::new(Arc::clone(transport), EntityPath::new("/devices/abc"))
    }

    /// Path provider that joins with a separator, to show the handle defers
    /// entirely to its provider.
    struct Bracketed;

    impl ResourcePath for Bracketed {
        fn build_path(&self, sub_path: Option<&str>) -> String {
            format!("[{}]", sub_path.unwrap_or("-"))
        }
    }

    #[tokio::test]
    async fn test_make_request_forwards_everything_unmodified() {
        let transport = Arc::new(RecordingTransport::ok());
        let resource = device(&transport);

        resource
            .make_request(
                HttpMethod::Post,
                Some("/streams/t/values"),
                Some("a=1&b=%20"),
                Some(r#"{"values":[]}"#),
            )
            .await
            .unwrap();

        assert_eq!(
            transport.last(),
            HttpRequest {
                method: HttpMethod::Post,
                path: "/devices/abc/streams/t/values".to_string(),
                query: Some("a=1&b=%20".to_string()),
                body: Some(r#"{"values":[]}"#.to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_make_request_uses_the_path_provider() {
        let transport = Arc::new(RecordingTransport::ok());
        let resource = Resource::new(Arc::clone(&transport), Bracketed);

        resource.make_get(Some("x"), None).await.unwrap();
        resource.make_get(None, None).await.unwrap();

        let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["[x]", "[-]"]);
    }

    #[tokio::test]
    async fn test_verb_helpers_set_method_query_and_body() {
        let transport = Arc::new(RecordingTransport::ok());
        let resource = device(&transport);

        resource.make_get(Some("/log"), Some("limit=2")).await.unwrap();
        resource.make_post(Some("/updates"), "{}").await.unwrap();
        resource.make_put(Some("/location"), r#"{"name":"x"}"#).await.unwrap();
        resource.make_delete(Some("/streams/t"), Some("force=true")).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 4);

        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].query.as_deref(), Some("limit=2"));
        assert!(requests[0].body.is_none());

        assert_eq!(requests[1].method, HttpMethod::Post);
        assert!(requests[1].query.is_none());
        assert_eq!(requests[1].body.as_deref(), Some("{}"));

        assert_eq!(requests[2].method, HttpMethod::Put);
        assert_eq!(requests[2].path, "/devices/abc/location");
        assert!(requests[2].query.is_none());

        assert_eq!(requests[3].method, HttpMethod::Delete);
        assert_eq!(requests[3].query.as_deref(), Some("force=true"));
        assert!(requests[3].body.is_none());
    }

    #[tokio::test]
    async fn test_details_is_get_without_sub_path_or_query() {
        let transport = Arc::new(RecordingTransport::ok());
        let resource = device(&transport);

        resource.details().await.unwrap();
        resource.make_get(None, None).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0], requests[1]);
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].path, "/devices/abc");
    }

    #[tokio::test]
    async fn test_update_is_put_without_sub_path() {
        let transport = Arc::new(RecordingTransport::ok());
        let resource = device(&transport);

        resource.update(r#"{"name":"x"}"#).await.unwrap();

        assert_eq!(
            transport.last(),
            HttpRequest::builder(HttpMethod::Put, "/devices/abc")
                .body(r#"{"name":"x"}"#)
                .build()
        );
    }

    #[tokio::test]
    async fn test_delete_is_delete_without_sub_path_or_query() {
        let transport = Arc::new(RecordingTransport::ok());
        let resource = device(&transport);

        resource.delete().await.unwrap();
        resource.make_delete(None, None).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0], requests[1]);
        assert_eq!(
            requests[0],
            HttpRequest::builder(HttpMethod::Delete, "/devices/abc").build()
        );
    }

    #[tokio::test]
    async fn test_response_is_returned_untouched() {
        let mut headers = HashMap::new();
        headers.insert("x-custom".to_string(), vec!["1".to_string()]);
        let canned = HttpResponse::new(404, headers, r#"{"message":"Not found"}"#);
        let transport = Arc::new(RecordingTransport::responding(canned.clone()));

        let response = device(&transport).details().await.unwrap();

        assert_eq!(response, canned);
    }

    #[tokio::test]
    async fn test_repeated_details_calls_are_identical() {
        let transport = Arc::new(RecordingTransport::ok());
        let resource = device(&transport);

        let first = resource.details().await.unwrap();
        let second = resource.details().await.unwrap();
        let third = resource.details().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second, third);
        let requests = transport.requests();
        assert!(requests.iter().all(|r| *r == requests[0]));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates_from_every_operation() {
        let transport = Arc::new(RecordingTransport::failing(io::ErrorKind::ConnectionRefused));
        let resource = device(&transport);

        let results = vec![
            resource.make_get(None, None).await,
            resource.make_post(None, "{}").await,
            resource.make_put(None, "{}").await,
            resource.make_delete(None, None).await,
            resource.make_request(HttpMethod::Get, None, None, None).await,
            resource.details().await,
            resource.update("{}").await,
            resource.delete().await,
        ];

        assert_eq!(transport.requests().len(), results.len());
        for result in results {
            let error = result.unwrap_err();
            assert_eq!(
                error.downcast_ref::<io::Error>().map(io::Error::kind),
                Some(io::ErrorKind::ConnectionRefused)
            );
            assert!(error.to_string().contains("mock transport failure"));
        }
    }

    #[tokio::test]
    async fn test_handle_is_shareable_across_tasks() {
        let transport = Arc::new(RecordingTransport::ok());
        let resource = Arc::new(device(&transport));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let resource = Arc::clone(&resource);
                tokio::spawn(async move { resource.details().await })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().unwrap().is_success());
        }
        assert_eq!(transport.requests().len(), 4);
    }

    #[test]
    fn test_debug_shows_path_only() {
        let transport = Arc::new(RecordingTransport::ok());
        let debug = format!("{:?}", device(&transport));
        assert!(debug.contains("/devices/abc"));
    }
}
