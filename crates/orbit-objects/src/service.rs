//! The object-graph service

use crate::{Interceptor, InterceptorRegistry, ObjectsError};
use orbit_domain::traits::ObjectStore;
use orbit_domain::{DomainObject, ObjectIdentifier, Priority, Resolution};
use std::fmt::Display;
use std::sync::Arc;
use tracing::warn;

/// A registered top-level object
#[derive(Debug, Clone)]
struct RootEntry {
    identifier: ObjectIdentifier,
    priority: Priority,
}

/// Resolves identifiers against a store through the interceptor registry
///
/// This is the context object handed to every component that needs the
/// object graph. It owns the interceptor pool and the root list; the store
/// is shared so interceptors can persist through it.
pub struct ObjectService<S> {
    store: Arc<S>,
    interceptors: InterceptorRegistry,
    roots: Vec<RootEntry>,
}

impl<S> ObjectService<S>
where
    S: ObjectStore,
    S::Error: Display,
{
    /// Create a service over a store, with no interceptors or roots
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            interceptors: InterceptorRegistry::new(),
            roots: Vec::new(),
        }
    }

    /// The backing store
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// The interceptor pool
    pub fn interceptors(&self) -> &InterceptorRegistry {
        &self.interceptors
    }

    /// Register an interceptor
    pub fn register_interceptor(&mut self, interceptor: Box<dyn Interceptor>) {
        self.interceptors.register(interceptor);
    }

    /// Resolve an identifier
    ///
    /// The store's answer is passed through the interceptor registry, so the
    /// result may be an object the store did not hold a moment ago.
    pub fn get(&self, identifier: &ObjectIdentifier) -> Result<Resolution, ObjectsError> {
        let stored = self
            .store
            .get(identifier)
            .map_err(|e| ObjectsError::Store(e.to_string()))?;
        self.interceptors.resolve(identifier, stored)
    }

    /// Create or replace an object
    pub fn save(&self, object: &DomainObject) -> Result<(), ObjectsError> {
        self.store
            .save(object)
            .map_err(|e| ObjectsError::Store(e.to_string()))
    }

    /// Classify a resolution as absent
    pub fn is_missing(&self, resolution: &Resolution) -> bool {
        self.store.is_missing(resolution)
    }

    /// List an identifier as a top-level root
    ///
    /// Adding an identifier that is already a root is ignored.
    pub fn add_root(&mut self, identifier: ObjectIdentifier, priority: Priority) {
        if self.roots.iter().any(|root| root.identifier == identifier) {
            return;
        }
        self.roots.push(RootEntry { identifier, priority });
    }

    /// Root identifiers, highest priority first, registration order on ties
    pub fn root_identifiers(&self) -> Vec<ObjectIdentifier> {
        let mut roots = self.roots.clone();
        // Stable sort keeps registration order among equal priorities
        roots.sort_by(|a, b| b.priority.cmp(&a.priority));
        roots.into_iter().map(|root| root.identifier).collect()
    }

    /// Resolve every root
    ///
    /// Roots that still resolve as missing after interception are skipped.
    pub fn roots(&self) -> Result<Vec<DomainObject>, ObjectsError> {
        let mut objects = Vec::with_capacity(self.roots.len());
        for identifier in self.root_identifiers() {
            match self.get(&identifier)? {
                Resolution::Found(object) => objects.push(object),
                Resolution::Missing => {
                    warn!(identifier = %identifier, "Root object is missing, skipping");
                }
            }
        }
        Ok(objects)
    }
}
