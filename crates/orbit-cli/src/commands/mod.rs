//! Command implementations.

pub mod config;
pub mod list;
pub mod resolve;
pub mod roots;
pub mod save;

pub use self::config::execute_config;
pub use self::list::execute_list;
pub use self::resolve::execute_resolve;
pub use self::roots::execute_roots;
pub use self::save::execute_save;

use crate::config::Config;
use crate::error::Result;
use orbit_objects::{MyItems, ObjectService};
use orbit_store::SqliteStore;
use std::fs;
use std::sync::Arc;
use tracing::debug;

/// Service type every object command runs against.
pub type Service = ObjectService<SqliteStore>;

/// Open the configured database and assemble the object service.
pub fn open_service(config: &Config) -> Result<Service> {
    if let Some(parent) = config.database.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    debug!(database = %config.database.display(), "Opening object database");
    let store = SqliteStore::new(&config.database)?;
    Ok(build_service(store, config))
}

/// Wrap a store in a service configured from `config`.
pub fn build_service(store: SqliteStore, config: &Config) -> Service {
    let mut service = ObjectService::new(Arc::new(store));
    if config.objects.my_items.enabled {
        MyItems::from_config(&config.objects.my_items).install(&mut service);
    }
    service
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_service_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            database: dir.path().join("nested").join("orbit.db"),
            ..Config::default()
        };

        let service = open_service(&config).unwrap();
        assert!(dir.path().join("nested").exists());
        assert_eq!(service.interceptors().len(), 1);
        assert_eq!(service.root_identifiers().len(), 1);
    }

    #[test]
    fn test_disabled_my_items_installs_nothing() {
        let mut config = Config::default();
        config.objects.my_items.enabled = false;

        let service = build_service(SqliteStore::in_memory().unwrap(), &config);
        assert!(service.interceptors().is_empty());
        assert!(service.root_identifiers().is_empty());
    }
}
