//! Collection resource.
//!
//! Collections group devices (and other collections) for organization.

use std::ops::Deref;
use std::sync::Arc;

use crate::clients::{HttpMethod, HttpResponse, Transport, TransportError};
use crate::rest::resources::root;
use crate::rest::{EntityPath, MetadataResource};

/// An M2X collection, addressed at `/collections/{id}`.
#[derive(Debug)]
pub struct Collection<T> {
    id: String,
    resource: MetadataResource<EntityPath, T>,
}

impl<T> Collection<T> {
    /// Path of the collection collection.
    pub const PATH: &'static str = "/collections";

    /// Creates a handle on the collection with the given id.
    #[must_use]
    pub fn new(transport: Arc<T>, id: impl Into<String>) -> Self {
        let id = id.into();
        let path = EntityPath::entity(Self::PATH, &id);
        Self {
            id,
            resource: MetadataResource::new(transport, path),
        }
    }

    /// Returns the collection id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl<T: Transport> Collection<T> {
    /// Creates a new collection from the given JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn create(transport: &Arc<T>, body: &str) -> Result<HttpResponse, TransportError> {
        root(transport, Self::PATH).make_post(None, body).await
    }

    /// Lists collections.
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

    /// Lists the devices in this collection.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn devices(&self, query: Option<&str>) -> Result<HttpResponse, TransportError> {
        self.make_get(Some("/devices"), query).await
    }

    /// Adds an existing device to this collection. No body is sent.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn add_device(&self, device_id: &str) -> Result<HttpResponse, TransportError> {
        let sub_path = device_path(device_id);
        self.make_request(HttpMethod::Put, Some(&sub_path), None, None).await
    }

    /// Removes a device from this collection. The device itself is kept.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn remove_device(&self, device_id: &str) -> Result<HttpResponse, TransportError> {
        let sub_path = device_path(device_id);
        self.make_delete(Some(&sub_path), None).await
    }
}

fn device_path(device_id: &str) -> String {
    format!("/devices/{}", urlencoding::encode(device_id))
}

impl<T> Deref for Collection<T> {
    type Target = MetadataResource<EntityPath, T>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
