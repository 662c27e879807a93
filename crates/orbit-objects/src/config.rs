//! Configuration for the object graph
//!
//! Loaded from TOML:
//!
//! ```toml
//! [my_items]
//! enabled = true
//! namespace = ""
//! key = "mine"
//! name = "My Items"
//! priority = 1000
//! ```

use crate::{MY_ITEMS_DEFAULT_NAME, MY_ITEMS_KEY};
use orbit_domain::Priority;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("Failed to serialize config TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A field holds an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Object-graph configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectsConfig {
    /// The My Items root folder
    #[serde(default)]
    pub my_items: MyItemsConfig,
}

/// Settings of the My Items root folder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyItemsConfig {
    /// Install the folder's interceptor and root entry
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Identifier namespace
    #[serde(default)]
    pub namespace: String,

    /// Identifier key
    #[serde(default = "default_key")]
    pub key: String,

    /// Display name used when the folder is created
    #[serde(default = "default_name")]
    pub name: String,

    /// Position among the roots
    #[serde(default = "default_priority")]
    pub priority: i64,
}

fn default_enabled() -> bool {
    true
}

fn default_key() -> String {
    MY_ITEMS_KEY.to_string()
}

fn default_name() -> String {
    MY_ITEMS_DEFAULT_NAME.to_string()
}

fn default_priority() -> i64 {
    Priority::HIGH.value()
}

impl Default for MyItemsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            namespace: String::new(),
            key: default_key(),
            name: default_name(),
            priority: default_priority(),
        }
    }
}

impl ObjectsConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.my_items.key.is_empty() {
            return Err(ConfigError::Invalid("my_items.key must not be empty".to_string()));
        }
        if self.my_items.name.trim().is_empty() {
            return Err(ConfigError::Invalid("my_items.name must not be empty".to_string()));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: ObjectsConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}
