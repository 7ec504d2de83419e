//! REST resource infrastructure for the M2X API.
//!
//! This module provides the building blocks every M2X resource is made of:
//!
//! - **[`ResourcePath`] trait**: How a resource turns a sub-path into a request path
//! - **[`EntityPath`]**: The prefix-based path provider used by all built-in resources
//! - **[`Resource`]**: The verb helpers plus `details`, `update` and `delete`
//! - **[`MetadataResource`]**: `Resource` plus the `/metadata` sub-resource
//!
//! Concrete resources (devices, distributions, keys, collections and streams)
//! live in the [`resources`] submodule.
//!
//! # Overview
//!
//! A resource handle holds an `Arc` of a [`Transport`](crate::clients::Transport)
//! and a path provider, and nothing else. Each call builds one
//! [`HttpRequest`](crate::clients::HttpRequest), sends it, and returns the
//! [`HttpResponse`](crate::clients::HttpResponse) exactly as received. HTTP
//! error statuses are not turned into errors; only a failed round trip is.
//!
//! # Example: A Custom Resource
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use m2x::rest::{EntityPath, MetadataResource};
//!
//! // Anything addressable by a fixed prefix can be wrapped directly
//! let job = MetadataResource::new(Arc::clone(&client), EntityPath::new("/jobs/42"));
//! let response = job.metadata().await?;
//!
//! if response.is_success() {
//!     println!("{}", response.json()?);
//! }
//! ```

mod metadata;
#[cfg(test)]
mod mock;
mod path;
mod resource;
pub mod resources;

pub use metadata::{MetadataResource, METADATA_PATH};
pub use path::{concat, EntityPath, ResourcePath};
pub use resource::Resource;
