//! API key resource.
//!
//! Keys have no metadata; besides the base operations they can only be
//! regenerated.

use std::ops::Deref;
use std::sync::Arc;

use crate::clients::{HttpMethod, HttpResponse, Transport, TransportError};
use crate::rest::resources::root;
use crate::rest::{EntityPath, Resource};

/// An M2X API key, addressed at `/keys/{key}`.
#[derive(Debug)]
pub struct Key<T> {
    key: String,
    resource: Resource<EntityPath, T>,
}

impl<T> Key<T> {
    /// Path of the key collection.
    pub const PATH: &'static str = "/keys";

    /// Creates a handle on the given key.
    #[must_use]
    pub fn new(transport: Arc<T>, key: impl Into<String>) -> Self {
        let key = key.into();
        let path = EntityPath::entity(Self::PATH, &key);
        Self {
            key,
            resource: Resource::new(transport, path),
        }
    }

    /// Returns the key string.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<T: Transport> Key<T> {
    /// Creates a new key from the given JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn create(transport: &Arc<T>, body: &str) -> Result<HttpResponse, TransportError> {
        root(transport, Self::PATH).make_post(None, body).await
    }

    /// Lists the keys of the account.
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

    /// Regenerates the key. The old key stops working; the response carries
    /// the new one. No body is sent.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the transport fails.
    pub async fn regenerate(&self) -> Result<HttpResponse, TransportError> {
        self.make_request(HttpMethod::Post, Some("/regenerate"), None, None).await
    }
}

impl<T> Deref for Key<T> {
    type Target = Resource<EntityPath, T>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
