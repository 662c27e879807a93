//! Orbit Storage Layer
//!
//! Implements the `ObjectStore` trait for the object graph.
//!
//! # Architecture
//!
//! - `SqliteStore`: one row per object, composition and opaque properties
//!   kept as JSON columns
//! - `MemoryStore`: map-backed store for tests and ephemeral sessions
//!
//! Both implement `create` as an atomic create-if-absent, which is what makes
//! lazy provisioning safe when several callers resolve the same missing
//! object at once.
//!
//! # Examples
//!
//! ```no_run
//! use orbit_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for object operations
//! ```

#![warn(missing_docs)]

mod memory;

pub use memory::MemoryStore;

use orbit_domain::traits::{CreateOutcome, ObjectQuery, ObjectStore};
use orbit_domain::{DomainObject, Location, ObjectIdentifier, Resolution};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// JSON column could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A thread panicked while holding the store lock
    #[error("Store lock poisoned")]
    LockPoisoned,
}

const SELECT_COLUMNS: &str =
    "SELECT namespace, key, name, type, location, composition, properties FROM objects";

/// Raw column values of one `objects` row
struct ObjectRow {
    namespace: String,
    key: String,
    name: String,
    object_type: String,
    location: String,
    composition: String,
    properties: String,
}

impl ObjectRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            namespace: row.get(0)?,
            key: row.get(1)?,
            name: row.get(2)?,
            object_type: row.get(3)?,
            location: row.get(4)?,
            composition: row.get(5)?,
            properties: row.get(6)?,
        })
    }

    fn into_object(self) -> Result<DomainObject, StoreError> {
        let composition: Vec<ObjectIdentifier> = serde_json::from_str(&self.composition)?;
        let properties = match serde_json::from_str(&self.properties)? {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(StoreError::InvalidData(format!(
                    "Properties of {}:{} are not an object: {}",
                    self.namespace, self.key, other
                )))
            }
        };

        Ok(DomainObject {
            identifier: ObjectIdentifier::new(self.namespace, self.key),
            name: self.name,
            object_type: self.object_type,
            composition,
            location: Location::from(self.location.as_str()),
            properties,
        })
    }
}

/// SQLite-based implementation of ObjectStore
///
/// The connection sits behind a mutex so a single store can be shared through
/// an `Arc` by the object service and its interceptors.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use orbit_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("orbit.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create a store backed by a private in-memory database
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::new(":memory:")
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Encode the JSON columns of an object
    fn encode_columns(object: &DomainObject) -> Result<(String, String), StoreError> {
        let composition = serde_json::to_string(&object.composition)?;
        let properties = serde_json::to_string(&object.properties)?;
        Ok((composition, properties))
    }
}

impl ObjectStore for SqliteStore {
    type Error = StoreError;

    fn get(&self, identifier: &ObjectIdentifier) -> Result<Resolution, Self::Error> {
        let conn = self.connection()?;
        let row = conn
            .query_row(
                &format!("{} WHERE namespace = ?1 AND key = ?2", SELECT_COLUMNS),
                params![&identifier.namespace, &identifier.key],
                ObjectRow::read,
            )
            .optional()?;

        match row {
            Some(row) => Ok(Resolution::Found(row.into_object()?)),
            None => Ok(Resolution::Missing),
        }
    }

    fn save(&self, object: &DomainObject) -> Result<(), Self::Error> {
        let (composition, properties) = Self::encode_columns(object)?;
        let conn = self.connection()?;

        conn.execute(
            "INSERT INTO objects (namespace, key, name, type, location, composition, properties)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(namespace, key) DO UPDATE SET
             name = excluded.name, type = excluded.type, location = excluded.location,
             composition = excluded.composition, properties = excluded.properties",
            params![
                &object.identifier.namespace,
                &object.identifier.key,
                &object.name,
                &object.object_type,
                object.location.to_string(),
                composition,
                properties,
            ],
        )?;

        Ok(())
    }

    fn create(&self, object: &DomainObject) -> Result<CreateOutcome, Self::Error> {
        let (composition, properties) = Self::encode_columns(object)?;
        let conn = self.connection()?;

        let inserted = conn.execute(
            "INSERT INTO objects (namespace, key, name, type, location, composition, properties)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(namespace, key) DO NOTHING",
            params![
                &object.identifier.namespace,
                &object.identifier.key,
                &object.name,
                &object.object_type,
                object.location.to_string(),
                composition,
                properties,
            ],
        )?;

        if inserted == 1 {
            Ok(CreateOutcome::Created)
        } else {
            Ok(CreateOutcome::AlreadyExists)
        }
    }

    fn query(&self, query: &ObjectQuery) -> Result<Vec<DomainObject>, Self::Error> {
        let mut sql = format!("{} WHERE 1=1", SELECT_COLUMNS);
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(namespace) = &query.namespace {
            sql.push_str(" AND namespace = ?");
            params.push(Box::new(namespace.clone()));
        }

        if let Some(object_type) = &query.object_type {
            sql.push_str(" AND type = ?");
            params.push(Box::new(object_type.clone()));
        }

        sql.push_str(" ORDER BY namespace, key");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            // SQLite reads a negative limit as "no limit"; saturate instead of wrapping
            params.push(Box::new(i64::try_from(limit).unwrap_or(i64::MAX)));
        }

        let conn = self.connection()?;
        let mut stmt = conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let rows = stmt
            .query_map(&param_refs[..], ObjectRow::read)?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(ObjectRow::into_object).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_with_scalar_properties_is_rejected() {
        let row = ObjectRow {
            namespace: "ns".to_string(),
            key: "k".to_string(),
            name: "K".to_string(),
            object_type: "folder".to_string(),
            location: "ROOT".to_string(),
            composition: "[]".to_string(),
            properties: "42".to_string(),
        };

        assert!(matches!(row.into_object(), Err(StoreError::InvalidData(_))));
    }

    #[test]
    fn test_row_decodes_location() {
        let row = ObjectRow {
            namespace: "".to_string(),
            key: "child".to_string(),
            name: "Child".to_string(),
            object_type: "folder".to_string(),
            location: "mct:myItems".to_string(),
            composition: r#"[{"namespace":"","key":"leaf"}]"#.to_string(),
            properties: "{}".to_string(),
        };

        let object = row.into_object().unwrap();
        assert_eq!(object.location, Location::Parent(ObjectIdentifier::new("mct", "myItems")));
        assert_eq!(object.composition, vec![ObjectIdentifier::new("", "leaf")]);
    }
}
