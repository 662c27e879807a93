//! Orbit Objects
//!
//! The object-graph service: resolves identifiers against a store and lets
//! registered interceptors observe and override the result.
//!
//! # Overview
//!
//! - **Interceptor registry**: ordered pool of interceptors; for each lookup
//!   the highest-priority interceptor whose predicate matches is invoked
//! - **Root provisioning**: the `RootProvisioningInterceptor` materializes a
//!   well-known root folder the first time it resolves as missing
//! - **Roots**: top-level objects listed by priority
//!
//! # Architecture
//!
//! ```text
//! caller → ObjectService::get → ObjectStore::get → InterceptorRegistry::resolve → Resolution
//! ```
//!
//! Everything is constructed explicitly and passed in; there is no global
//! service instance.
//!
//! # Example Usage
//!
//! ```no_run
//! use orbit_objects::{MyItems, ObjectService};
//! use orbit_store::SqliteStore;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(SqliteStore::new("orbit.db")?);
//! let mut service = ObjectService::new(store);
//!
//! let my_items = MyItems::default();
//! my_items.install(&mut service);
//!
//! // First lookup creates and persists the folder; later ones just read it
//! let root = service.get(my_items.identifier())?;
//! assert!(!root.is_missing());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod interceptor;
mod my_items;
mod registry;
mod service;

pub use config::{ConfigError, MyItemsConfig, ObjectsConfig};
pub use error::ObjectsError;
pub use interceptor::{Interceptor, InterceptorError};
pub use my_items::{MyItems, RootProvisioningInterceptor, MY_ITEMS_DEFAULT_NAME, MY_ITEMS_KEY};
pub use registry::InterceptorRegistry;
pub use service::ObjectService;
