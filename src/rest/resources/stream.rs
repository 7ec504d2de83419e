//! Data stream resource.
//!
//! A stream is a time series of values owned by a device or a distribution,
//! addressed at `{parent}/streams/{name}`. `update` on the stream handle
//! creates the stream if it does not exist yet.

use std::ops::Deref;
use std::sync::Arc;

use crate::clients::{HttpMethod, HttpResponse, Transport, TransportError};
use crate::rest::{EntityPath, Resource};

/// A data stream of a device or distribution.
#[derive(Debug)]
pub struct Stream<T> {
    name: String,
    resource: Resource<EntityPath, T>,
}

impl<T> Stream<T> {
    /// Creates a handle on the stream `name` under `parent`.
    #[must_use]
    pub fn new(transport: Arc<T>, parent: &EntityPath, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = parent.child("/streams", &name);
        Self {
            name,
            resource: Resource::new(transport, path),
        }
    }

    /// Returns the stream name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Transport> Stream<T> {
    /// Lists stream values, filtered by the given query (`start`, `end`,
    /// `limit`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn values(&self, query: Option<&str>) -> Result<HttpResponse, TransportError> {
        self.resource.make_get(Some("/values"), query).await
    }

    /// Samples stream values at a given interval.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn sampling(&self, query: Option<&str>) -> Result<HttpResponse, TransportError> {
        self.resource.make_get(Some("/sampling"), query).await
    }

    /// Returns aggregate statistics of the stream values.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn stats(&self, query: Option<&str>) -> Result<HttpResponse, TransportError> {
        self.resource.make_get(Some("/stats"), query).await
    }

    /// Sets the current value of the stream.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn update_value(&self, body: &str) -> Result<HttpResponse, TransportError> {
        self.resource.make_put(Some("/value"), body).await
    }

    /// Posts timestamped values to the stream.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn post_values(&self, body: &str) -> Result<HttpResponse, TransportError> {
        self.resource.make_post(Some("/values"), body).await
    }

    /// Deletes the values in the time range described by the JSON body
    /// (`from` and `end`). The range travels in the DELETE body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn delete_values(&self, body: &str) -> Result<HttpResponse, TransportError> {
        self.resource
            .make_request(HttpMethod::Delete, Some("/values"), None, Some(body))
            .await
    }
}

impl<T> Deref for Stream<T> {
    type Target = Resource<EntityPath, T>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpRequest;
    use crate::rest::mock::RecordingTransport;

    fn temperature(transport: &Arc<RecordingTransport>) -> Stream<RecordingTransport> {
        Stream::new(
            Arc::clone(transport),
            &EntityPath::entity("/devices", "abc"),
            "temperature",
        )
    }

    #[test]
    fn test_stream_name_is_encoded_in_path() {
        let transport = Arc::new(RecordingTransport::ok());
        let stream = Stream::new(transport, &EntityPath::new("/devices/abc"), "room 1");
        assert_eq!(stream.name(), "room 1");
        assert_eq!(stream.path().prefix(), "/devices/abc/streams/room%201");
    }

    #[tokio::test]
    async fn test_read_operations_forward_query() {
        let transport = Arc::new(RecordingTransport::ok());
        let stream = temperature(&transport);

        stream.values(Some("limit=10")).await.unwrap();
        stream.sampling(Some("type=avg&interval=60")).await.unwrap();
        stream.stats(None).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].path, "/devices/abc/streams/temperature/values");
        assert_eq!(requests[0].query.as_deref(), Some("limit=10"));
        assert_eq!(requests[1].path, "/devices/abc/streams/temperature/sampling");
        assert_eq!(requests[2].path, "/devices/abc/streams/temperature/stats");
        assert!(requests[2].query.is_none());
        assert!(requests.iter().all(|r| r.method == HttpMethod::Get));
    }

    #[tokio::test]
    async fn test_write_operations() {
        let transport = Arc::new(RecordingTransport::ok());
        let stream = temperature(&transport);

        stream.update_value(r#"{"value":21.5}"#).await.unwrap();
        assert_eq!(
            transport.last(),
            HttpRequest::builder(HttpMethod::Put, "/devices/abc/streams/temperature/value")
                .body(r#"{"value":21.5}"#)
                .build()
        );

        stream.post_values(r#"{"values":[]}"#).await.unwrap();
        assert_eq!(transport.last().method, HttpMethod::Post);
        assert_eq!(
            transport.last().path,
            "/devices/abc/streams/temperature/values"
        );
    }

    #[tokio::test]
    async fn test_delete_values_sends_body_with_delete() {
        let transport = Arc::new(RecordingTransport::ok());
        let range = r#"{"from":"2024-01-01T00:00:00Z","end":"2024-01-02T00:00:00Z"}"#;

        temperature(&transport).delete_values(range).await.unwrap();

        assert_eq!(
            transport.last(),
            HttpRequest::builder(HttpMethod::Delete, "/devices/abc/streams/temperature/values")
                .body(range)
                .build()
        );
    }

    #[tokio::test]
    async fn test_update_creates_stream_with_put() {
        let transport = Arc::new(RecordingTransport::ok());

        temperature(&transport)
            .update(r#"{"unit":{"label":"celsius","symbol":"C"}}"#)
            .await
            .unwrap();

        let request = transport.last();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.path, "/devices/abc/streams/temperature");
    }
}
