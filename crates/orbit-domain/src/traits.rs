//! Trait definitions for external interactions
//!
//! These traits define the boundary between the object graph and its
//! persistence layer. Implementations live in `orbit-store`.

use crate::{DomainObject, ObjectIdentifier, Resolution};

/// Outcome of an idempotent create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The object was written
    Created,

    /// An object already existed at the identifier; nothing was written
    AlreadyExists,
}

/// Trait for storing and retrieving domain objects
///
/// Implementations take `&self` and guard their own state so one store can be
/// shared between the object service and the interceptors it runs.
pub trait ObjectStore: Send + Sync {
    /// Error type for store operations
    type Error;

    /// Look up an object
    fn get(&self, identifier: &ObjectIdentifier) -> Result<Resolution, Self::Error>;

    /// Create or replace an object
    fn save(&self, object: &DomainObject) -> Result<(), Self::Error>;

    /// Create an object only if nothing exists at its identifier
    ///
    /// Must be atomic: of two racing creates for the same identifier exactly
    /// one observes [`CreateOutcome::Created`].
    fn create(&self, object: &DomainObject) -> Result<CreateOutcome, Self::Error>;

    /// Query objects matching criteria
    fn query(&self, query: &ObjectQuery) -> Result<Vec<DomainObject>, Self::Error>;

    /// Classify a lookup result as absent
    fn is_missing(&self, resolution: &Resolution) -> bool {
        resolution.is_missing()
    }
}

/// Query criteria for listing objects
///
/// Results are ordered by namespace, then key.
#[derive(Debug, Clone, Default)]
pub struct ObjectQuery {
    /// Filter by exact namespace
    pub namespace: Option<String>,

    /// Filter by type tag
    pub object_type: Option<String>,

    /// Maximum results to return
    pub limit: Option<usize>,
}
