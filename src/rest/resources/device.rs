//! Device resource.
//!
//! Devices are the central M2X entity: they own data streams, a location,
//! a request log and a metadata document.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use m2x::rest::resources::Device;
//!
//! let device = Device::new(Arc::clone(&client), "a1b2c3");
//!
//! // PUT /devices/a1b2c3/location
//! device
//!     .update_location(r#"{"latitude":-37.97,"longitude":-57.54,"elevation":5}"#)
//!     .await?;
//!
//! // POST /devices/a1b2c3/updates
//! device
//!     .post_updates(r#"{"values":{"temperature":[{"timestamp":"2024-01-01T00:00:00Z","value":21}]}}"#)
//!     .await?;
//! ```

use std::ops::Deref;
use std::sync::Arc;

use crate::clients::{HttpResponse, Transport, TransportError};
use crate::rest::resources::{root, Stream};
use crate::rest::{EntityPath, MetadataResource};

/// An M2X device, addressed at `/devices/{id}`.
#[derive(Debug)]
pub struct Device<T> {
    id: String,
    resource: MetadataResource<EntityPath, T>,
}

impl<T> Device<T> {
    /// Path of the device collection.
    pub const PATH: &'static str = "/devices";

    /// Creates a handle on the device with the given id.
    #[must_use]
    pub fn new(transport: Arc<T>, id: impl Into<String>) -> Self {
        let id = id.into();
        let path = EntityPath::entity(Self::PATH, &id);
        Self {
            id,
            resource: MetadataResource::new(transport, path),
        }
    }

    /// Returns the device id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns a handle on one of this device's data streams.
    #[must_use]
    pub fn stream(&self, name: impl Into<String>) -> Stream<T> {
        Stream::new(Arc::clone(self.transport()), self.path(), name)
    }
}

impl<T: Transport> Device<T> {
    /// Creates a new device from the given JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn create(transport: &Arc<T>, body: &str) -> Result<HttpResponse, TransportError> {
        root(transport, Self::PATH).make_post(None, body).await
    }

    /// Lists or searches the devices visible to the API key.
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

    /// Reads the current location of the device.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn location(&self) -> Result<HttpResponse, TransportError> {
        self.make_get(Some("/location"), None).await
    }

    /// Updates the current location of the device.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn update_location(&self, body: &str) -> Result<HttpResponse, TransportError> {
        self.make_put(Some("/location"), body).await
    }

    /// Lists the data streams of the device.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn streams(&self) -> Result<HttpResponse, TransportError> {
        self.make_get(Some("/streams"), None).await
    }

    /// Lists values from all data streams of the device.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn values(&self, query: Option<&str>) -> Result<HttpResponse, TransportError> {
        self.make_get(Some("/values"), query).await
    }

    /// Posts one value per stream at a single timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn post_update(&self, body: &str) -> Result<HttpResponse, TransportError> {
        self.make_post(Some("/update"), body).await
    }

    /// Posts timestamped values to several streams at once.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn post_updates(&self, body: &str) -> Result<HttpResponse, TransportError> {
        self.make_post(Some("/updates"), body).await
    }

    /// Reads the recent API request log of the device.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn log(&self) -> Result<HttpResponse, TransportError> {
        self.make_get(Some("/log"), None).await
    }
}

impl<T> Deref for Device<T> {
    type Target = MetadataResource<EntityPath, T>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
