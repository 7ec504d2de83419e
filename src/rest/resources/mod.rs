//! Concrete M2X resource types.
//!
//! Each type here supplies a path prefix and a few resource-specific calls;
//! the request plumbing comes from [`Resource`] and [`MetadataResource`].
//!
//! | Type | Path | Metadata |
//! |------|------|----------|
//! | [`Device`] | `/devices/{id}` | yes |
//! | [`Distribution`] | `/distributions/{id}` | yes |
//! | [`Collection`] | `/collections/{id}` | yes |
//! | [`Key`] | `/keys/{key}` | no |
//! | [`Stream`] | `{parent}/streams/{name}` | no |
//!
//! Identifiers are percent-encoded when the handle is built. Metadata field
//! names are not.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use m2x::rest::resources::Device;
//!
//! // POST /devices
//! let response = Device::create(&client, r#"{"name":"Boiler","visibility":"private"}"#).await?;
//!
//! let device = Device::new(Arc::clone(&client), "a1b2c3");
//! let response = device.metadata_field("serial").await?;
//!
//! let temperature = device.stream("temperature");
//! let response = temperature.values(Some("limit=10")).await?;
//! ```

mod collection;
mod device;
mod distribution;
mod key;
mod stream;

pub use collection::Collection;
pub use device::Device;
pub use distribution::Distribution;
pub use key::Key;
pub use stream::Stream;

use std::sync::Arc;

use crate::rest::{EntityPath, Resource};

/// A handle on a top-level collection root such as `/devices`, used for
/// create and list calls that are not tied to one entity.
fn root<T>(transport: &Arc<T>, collection: &str) -> Resource<EntityPath, T> {
    Resource::new(Arc::clone(transport), EntityPath::new(collection))
}
