//! Distribution resource.
//!
//! A distribution is a template for a fleet of identical devices. Devices
//! added to it inherit its data streams.

use std::ops::Deref;
use std::sync::Arc;

use crate::clients::{HttpResponse, Transport, TransportError};
use crate::rest::resources::{root, Stream};
use crate::rest::{EntityPath, MetadataResource};

/// An M2X distribution, addressed at `/distributions/{id}`.
#[derive(Debug)]
pub struct Distribution<T> {
    id: String,
    resource: MetadataResource<EntityPath, T>,
}

impl<T> Distribution<T> {
    /// Path of the distribution collection.
    pub const PATH: &'static str = "/distributions";

    /// Creates a handle on the distribution with the given id.
    #[must_use]
    pub fn new(transport: Arc<T>, id: impl Into<String>) -> Self {
        let id = id.into();
        let path = EntityPath::entity(Self::PATH, &id);
        Self {
            id,
            resource: MetadataResource::new(transport, path),
        }
    }

    /// Returns the distribution id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns a handle on one of this distribution's data streams.
    #[must_use]
    pub fn stream(&self, name: impl Into<String>) -> Stream<T> {
        Stream::new(Arc::clone(self.transport()), self.path(), name)
    }
}

impl<T: Transport> Distribution<T> {
    /// Creates a new distribution from the given JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn create(transport: &Arc<T>, body: &str) -> Result<HttpResponse, TransportError> {
        root(transport, Self::PATH).make_post(None, body).await
    }

    /// Lists or searches distributions.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn list(
        transport: &Arc<T>,
        query: Option<&str>,
    ) -> Result<HttpResponse, TransportError> {
        root(transport, Self::PATH).make_get(None, query).await
    }

    /// Lists the devices belonging to this distribution.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn devices(&self, query: Option<&str>) -> Result<HttpResponse, TransportError> {
        self.make_get(Some("/devices"), query).await
    }

    /// Adds a new device to this distribution, described by the JSON body
    /// (at least a `serial`).
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn add_device(&self, body: &str) -> Result<HttpResponse, TransportError> {
        self.make_post(Some("/devices"), body).await
    }

    /// Lists the data streams of this distribution.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn streams(&self) -> Result<HttpResponse, TransportError> {
        self.make_get(Some("/streams"), None).await
    }
}

impl<T> Deref for Distribution<T> {
    type Target = MetadataResource<EntityPath, T>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpMethod, HttpRequest};
    use crate::rest::mock::RecordingTransport;

    #[tokio::test]
    async fn test_distribution_operations() {
        let transport = Arc::new(RecordingTransport::ok());
        let distribution = Distribution::new(Arc::clone(&transport), "d1");

        distribution.devices(Some("limit=50")).await.unwrap();
        distribution.add_device(r#"{"serial":"ABC-1"}"#).await.unwrap();
        distribution.streams().await.unwrap();
        distribution.update_metadata(r#"{"batch":"7"}"#).await.unwrap();

        let requests = transport.requests();
        assert_eq!(
            requests[0],
            HttpRequest::builder(HttpMethod::Get, "/distributions/d1/devices")
                .query("limit=50")
                .build()
        );
        assert_eq!(
            requests[1],
            HttpRequest::builder(HttpMethod::Post, "/distributions/d1/devices")
                .body(r#"{"serial":"ABC-1"}"#)
                .build()
        );
        assert_eq!(requests[2].path, "/distributions/d1/streams");
        assert_eq!(
            requests[3],
            HttpRequest::builder(HttpMethod::Put, "/distributions/d1/metadata")
                .body(r#"{"batch":"7"}"#)
                .build()
        );
    }

    #[tokio::test]
    async fn test_distribution_stream_path() {
        let transport = Arc::new(RecordingTransport::ok());
        let distribution = Distribution::new(Arc::clone(&transport), "d1");

        distribution.stream("pressure").values(None).await.unwrap();

        assert_eq!(
            transport.last().path,
            "/distributions/d1/streams/pressure/values"
        );
    }

    #[tokio::test]
    async fn test_create_posts_to_collection_root() {
        let transport = Arc::new(RecordingTransport::ok());

        Distribution::create(&transport, r#"{"name":"Fleet"}"#)
            .await
            .unwrap();

        let request = transport.last();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/distributions");
    }
}
