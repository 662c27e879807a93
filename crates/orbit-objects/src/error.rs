//! Error types for object-graph operations

use crate::InterceptorError;
use thiserror::Error;

/// Errors that can occur while resolving or persisting objects
#[derive(Error, Debug)]
pub enum ObjectsError {
    /// The selected interceptor failed; the resolution did not complete
    #[error("Interceptor '{name}' failed: {source}")]
    Interceptor {
        /// Name of the failing interceptor
        name: String,
        /// Underlying failure
        #[source]
        source: InterceptorError,
    },

    /// Storage layer error
    #[error("Store error: {0}")]
    Store(String),
}
