//! List command implementation.

use super::Service;
use crate::cli::ListArgs;
use crate::error::Result;
use crate::output::Formatter;
use orbit_domain::traits::{ObjectQuery, ObjectStore};
use orbit_domain::DomainObject;

/// Execute the list command.
pub fn execute_list(args: ListArgs, service: &Service, formatter: &Formatter) -> Result<()> {
    let objects = list(args, service)?;
    println!("{}", formatter.format_objects(&objects)?);
    Ok(())
}

/// Query stored objects. Interceptors are not consulted.
pub fn list(args: ListArgs, service: &Service) -> Result<Vec<DomainObject>> {
    let query = ObjectQuery {
        namespace: args.namespace,
        object_type: args.object_type,
        limit: args.limit,
    };
    Ok(service.store().query(&query)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::build_service;
    use crate::config::Config;
    use orbit_domain::{DomainObject, Location, ObjectIdentifier};
    use orbit_store::SqliteStore;

    fn seeded() -> Service {
        let service = build_service(SqliteStore::in_memory().unwrap(), &Config::default());
        for (ns, key, ty) in [("mct", "a", "folder"), ("mct", "b", "clock"), ("other", "c", "folder")] {
            let object = DomainObject::new(ObjectIdentifier::new(ns, key), key, ty, Location::Root);
            service.save(&object).unwrap();
        }
        service
    }

    fn args(namespace: Option<&str>, object_type: Option<&str>, limit: Option<usize>) -> ListArgs {
        ListArgs {
            namespace: namespace.map(String::from),
            object_type: object_type.map(String::from),
            limit,
        }
    }

    #[test]
    fn test_list_all() {
        let objects = list(args(None, None, None), &seeded()).unwrap();
        assert_eq!(objects.len(), 3);
    }

    #[test]
    fn test_list_filters() {
        let service = seeded();
        assert_eq!(list(args(Some("mct"), None, None), &service).unwrap().len(), 2);
        assert_eq!(list(args(None, Some("folder"), None), &service).unwrap().len(), 2);
        assert_eq!(list(args(Some("mct"), Some("clock"), None), &service).unwrap().len(), 1);
        assert_eq!(list(args(None, None, Some(1)), &service).unwrap().len(), 1);
    }

    #[test]
    fn test_list_does_not_provision() {
        let service = build_service(SqliteStore::in_memory().unwrap(), &Config::default());
        assert!(list(args(None, None, None), &service).unwrap().is_empty());
    }
}
