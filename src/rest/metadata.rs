//! Metadata sub-resource support.
//!
//! Devices, distributions and collections carry a free-form metadata
//! document, addressable as a whole at `{resource}/metadata` or one field at
//! a time at `{resource}/metadata/{field}`. [`MetadataResource`] adds those
//! four operations on top of a [`Resource`] by composition; everything else
//! is reached through `Deref`.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::clients::{HttpResponse, Transport, TransportError};
use crate::rest::{Resource, ResourcePath};

/// Sub-path of the metadata document.
pub const METADATA_PATH: &str = "/metadata";

/// A resource handle that also exposes the metadata sub-resource.
///
/// The field name given to [`metadata_field`](Self::metadata_field) and
/// [`update_metadata_field`](Self::update_metadata_field) is appended to the
/// path verbatim. Callers must percent-encode names containing `/`, `?`,
/// `#` or spaces themselves.
///
/// # Example
///
/// ```rust,ignore
/// let device = MetadataResource::new(client, EntityPath::entity("/devices", "abc"));
///
/// // GET /devices/abc/metadata/temp
/// let response = device.metadata_field("temp").await?;
///
/// // Base operations are available through Deref: GET /devices/abc
/// let response = device.details().await?;
/// ```
pub struct MetadataResource<P, T> {
    resource: Resource<P, T>,
}

impl<P, T> MetadataResource<P, T> {
    /// Creates a handle from a shared transport and a path provider.
    #[must_use]
    pub const fn new(transport: Arc<T>, path: P) -> Self {
        Self {
            resource: Resource::new(transport, path),
        }
    }

    /// Returns the wrapped base resource.
    #[must_use]
    pub const fn resource(&self) -> &Resource<P, T> {
        &self.resource
    }

    /// Consumes the handle and returns the wrapped base resource.
    #[must_use]
    pub fn into_inner(self) -> Resource<P, T> {
        self.resource
    }
}

impl<P: ResourcePath, T: Transport> MetadataResource<P, T> {
    /// Reads the whole metadata document.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn metadata(&self) -> Result<HttpResponse, TransportError> {
        self.resource.make_get(Some(METADATA_PATH), None).await
    }

    /// Replaces the metadata document with the given JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn update_metadata(&self, body: &str) -> Result<HttpResponse, TransportError> {
        self.resource.make_put(Some(METADATA_PATH), body).await
    }

    /// Reads a single metadata field.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn metadata_field(&self, field: &str) -> Result<HttpResponse, TransportError> {
        let sub_path = field_path(field);
        self.resource.make_get(Some(&sub_path), None).await
    }

    /// Sets a single metadata field from the given JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn update_metadata_field(
        &self,
        field: &str,
        body: &str,
    ) -> Result<HttpResponse, TransportError> {
        let sub_path = field_path(field);
        self.resource.make_put(Some(&sub_path), body).await
    }
}

fn field_path(field: &str) -> String {
    format!("{METADATA_PATH}/{field}")
}

impl<P, T> From<Resource<P, T>> for MetadataResource<P, T> {
    fn from(resource: Resource<P, T>) -> Self {
        Self { resource }
    }
}

/// Provides the base resource operations directly on the metadata handle.
impl<P, T> Deref for MetadataResource<P, T> {
    type Target = Resource<P, T>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

impl<P: Clone, T> Clone for MetadataResource<P, T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
        }
    }
}

impl<P: fmt::Debug, T> fmt::Debug for MetadataResource<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetadataResource")
            .field("resource", &self.resource)
            .finish()
    }
}
