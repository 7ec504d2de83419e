//! Path building for M2X resources.
//!
//! A resource handle never formats URLs itself. It asks its [`ResourcePath`]
//! to combine the resource prefix with an optional sub-path, then hands the
//! result to the transport.
//!
//! # Example
//!
//! ```rust
//! use m2x::rest::{EntityPath, ResourcePath};
//!
//! let device = EntityPath::entity("/devices", "abc");
//! assert_eq!(device.build_path(None), "/devices/abc");
//! assert_eq!(device.build_path(Some("/metadata")), "/devices/abc/metadata");
//!
//! let stream = device.child("/streams", "temperature");
//! assert_eq!(stream.build_path(Some("/values")), "/devices/abc/streams/temperature/values");
//! ```

/// Builds request paths for a resource.
///
/// Implementations must be deterministic and pure: the same sub-path always
/// yields the same path, and nothing is escaped or validated on the way.
pub trait ResourcePath: Send + Sync {
    /// Combines the resource prefix with an optional sub-path.
    fn build_path(&self, sub_path: Option<&str>) -> String;
}

/// A path provider backed by a fixed prefix.
///
/// `build_path` is plain concatenation of the prefix and the sub-path.
/// Identifiers passed to [`EntityPath::entity`] and [`EntityPath::child`]
/// are percent-encoded once, at construction; sub-paths are never touched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityPath {
    prefix: String,
}

impl EntityPath {
    /// Creates a path from a literal prefix, used as-is.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Creates the path of a single entity in a top-level collection,
    /// e.g. `/devices/{id}`.
    #[must_use]
    pub fn entity(collection: &str, id: &str) -> Self {
        Self::new(format!("{collection}/{}", urlencoding::encode(id)))
    }

    /// Creates the path of an entity nested under this one,
    /// e.g. `/devices/{id}/streams/{name}`.
    #[must_use]
    pub fn child(&self, collection: &str, id: &str) -> Self {
        Self::new(format!("{}{collection}/{}", self.prefix, urlencoding::encode(id)))
    }

    /// Returns the prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl ResourcePath for EntityPath {
    fn build_path(&self, sub_path: Option<&str>) -> String {
        concat(&[Some(self.prefix.as_str()), sub_path])
    }
}

/// Concatenates the present parts, skipping `None`.
#[must_use]
pub fn concat(parts: &[Option<&str>]) -> String {
    parts.iter().flatten().copied().collect()
}
