//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Object configuration error
    #[error(transparent)]
    ObjectsConfig(#[from] orbit_objects::ConfigError),

    /// Object-graph error
    #[error("Object graph error: {0}")]
    Objects(#[from] orbit_objects::ObjectsError),

    /// Storage error
    #[error("Storage error: {0}")]
    Store(#[from] orbit_store::StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Object does not exist
    #[error("Object not found: {0}")]
    NotFound(String),
}
