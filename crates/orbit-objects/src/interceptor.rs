//! The interceptor contract

use orbit_domain::{ObjectIdentifier, Priority, Resolution};
use thiserror::Error;

/// Errors raised by interceptors
#[derive(Error, Debug)]
pub enum InterceptorError {
    /// The `applies_to` predicate could not be evaluated
    #[error("Predicate failed: {0}")]
    Predicate(String),

    /// A storage operation performed by the interceptor failed
    #[error("Store error: {0}")]
    Store(String),

    /// The interceptor refused to produce a result
    #[error("Rejected: {0}")]
    Rejected(String),
}

/// A registered rule that can observe and override the result of resolving
/// an identifier
///
/// The registry calls `applies_to` on every resolution, so it must be cheap
/// and free of side effects. Faults should be reported as `Err`; a panic is
/// caught and treated the same way, except under `panic = "abort"`.
/// `invoke` is only called on the single interceptor selected for a
/// resolution and may persist objects.
pub trait Interceptor: Send + Sync {
    /// Stable name used in logs and errors
    fn name(&self) -> &str {
        "interceptor"
    }

    /// Whether this interceptor claims the identifier
    fn applies_to(&self, identifier: &ObjectIdentifier) -> Result<bool, InterceptorError>;

    /// Transform or replace the store's result for the identifier
    fn invoke(
        &self,
        identifier: &ObjectIdentifier,
        resolution: Resolution,
    ) -> Result<Resolution, InterceptorError>;

    /// Priority against other interceptors claiming the same identifier
    fn priority(&self) -> Priority;
}
