//! Interceptor registry: selects and applies at most one interceptor per
//! resolution.

use crate::{Interceptor, ObjectsError};
use orbit_domain::{ObjectIdentifier, Resolution};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Ordered pool of interceptors
///
/// Selection picks the highest priority among interceptors whose predicate
/// matches. On equal priority the earliest registered interceptor wins.
/// The pool is only mutated through `&mut self`, i.e. during setup.
#[derive(Default)]
pub struct InterceptorRegistry {
    interceptors: Vec<Box<dyn Interceptor>>,
}

impl InterceptorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an interceptor
    ///
    /// No deduplication: registering the same rule twice yields two entries.
    pub fn register(&mut self, interceptor: Box<dyn Interceptor>) {
        debug!(
            interceptor = interceptor.name(),
            priority = %interceptor.priority(),
            "Registered interceptor"
        );
        self.interceptors.push(interceptor);
    }

    /// Number of registered interceptors
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Whether no interceptors are registered
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Find the interceptor that would handle the identifier
    ///
    /// An interceptor whose predicate fails or panics is logged and treated
    /// as not matching; the remaining interceptors are still considered.
    pub fn select(&self, identifier: &ObjectIdentifier) -> Option<&dyn Interceptor> {
        let mut selected: Option<&dyn Interceptor> = None;

        for interceptor in &self.interceptors {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| interceptor.applies_to(identifier)));
            let matches = match outcome {
                Ok(Ok(matches)) => matches,
                Ok(Err(e)) => {
                    warn!(
                        interceptor = interceptor.name(),
                        identifier = %identifier,
                        error = %e,
                        "Interceptor predicate failed, skipping"
                    );
                    false
                }
                Err(_) => {
                    warn!(
                        interceptor = interceptor.name(),
                        identifier = %identifier,
                        "Interceptor predicate panicked, skipping"
                    );
                    false
                }
            };

            if !matches {
                continue;
            }

            // Strictly greater: earlier registrations keep ties
            let wins = selected.map_or(true, |current| interceptor.priority() > current.priority());
            if wins {
                selected = Some(interceptor.as_ref());
            }
        }

        selected
    }

    /// Apply the selected interceptor to a store result
    ///
    /// Returns the input unchanged when nothing matches. A failing `invoke`
    /// fails the whole resolution.
    pub fn resolve(
        &self,
        identifier: &ObjectIdentifier,
        resolution: Resolution,
    ) -> Result<Resolution, ObjectsError> {
        let Some(interceptor) = self.select(identifier) else {
            return Ok(resolution);
        };

        debug!(
            interceptor = interceptor.name(),
            identifier = %identifier,
            missing = resolution.is_missing(),
            "Invoking interceptor"
        );

        interceptor
            .invoke(identifier, resolution)
            .map_err(|source| ObjectsError::Interceptor {
                name: interceptor.name().to_string(),
                source,
            })
    }
}
