//! Resolve command implementation.

use super::Service;
use crate::cli::ResolveArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use orbit_domain::{DomainObject, ObjectIdentifier, Resolution};

/// Execute the resolve command.
pub fn execute_resolve(args: ResolveArgs, service: &Service, formatter: &Formatter) -> Result<()> {
    let object = resolve(&args.identifier, service)?;
    println!("{}", formatter.format_object(&object)?);
    Ok(())
}

/// Resolve a key string to an object, failing if nothing is there.
pub fn resolve(key_string: &str, service: &Service) -> Result<DomainObject> {
    let identifier: ObjectIdentifier = key_string.parse().map_err(CliError::InvalidInput)?;

    match service.get(&identifier)? {
        Resolution::Found(object) => Ok(object),
        Resolution::Missing => Err(CliError::NotFound(identifier.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::build_service;
    use crate::config::Config;
    use orbit_store::SqliteStore;

    fn service() -> Service {
        build_service(SqliteStore::in_memory().unwrap(), &Config::default())
    }

    #[test]
    fn test_resolve_provisions_my_items() {
        let service = service();
        let object = resolve("mine", &service).unwrap();
        assert_eq!(object.name, "My Items");
        assert!(object.is_folder());
        assert!(object.location.is_root());
    }

    #[test]
    fn test_resolve_unknown_is_not_found() {
        let service = service();
        let err = resolve("mct:nothing-here", &service).unwrap_err();
        assert!(matches!(err, CliError::NotFound(key) if key == "mct:nothing-here"));
    }

    #[test]
    fn test_resolve_rejects_empty_key() {
        let service = service();
        let err = resolve("mct:", &service).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }
}
