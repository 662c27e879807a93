//! In-memory object store

use crate::StoreError;
use orbit_domain::traits::{CreateOutcome, ObjectQuery, ObjectStore};
use orbit_domain::{DomainObject, ObjectIdentifier, Resolution};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

/// Map-backed implementation of ObjectStore
///
/// Counts successful writes, which makes it handy for asserting how often
/// provisioning actually persisted something.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: RwLock<BTreeMap<ObjectIdentifier, DomainObject>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with objects (not counted as writes)
    pub fn with_objects<I>(objects: I) -> Self
    where
        I: IntoIterator<Item = DomainObject>,
    {
        let map = objects
            .into_iter()
            .map(|object| (object.identifier.clone(), object))
            .collect();

        Self {
            objects: RwLock::new(map),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of writes performed through `save` and `create`
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of stored objects
    ///
    /// A poisoned lock still holds a consistent map: every write is a single
    /// insert, so the count is read through the poison.
    pub fn len(&self) -> usize {
        match self.objects.read() {
            Ok(objects) => objects.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Whether the store holds no objects
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ObjectStore for MemoryStore {
    type Error = StoreError;

    fn get(&self, identifier: &ObjectIdentifier) -> Result<Resolution, Self::Error> {
        let objects = self.objects.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(objects.get(identifier).cloned().into())
    }

    fn save(&self, object: &DomainObject) -> Result<(), Self::Error> {
        let mut objects = self.objects.write().map_err(|_| StoreError::LockPoisoned)?;
        objects.insert(object.identifier.clone(), object.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn create(&self, object: &DomainObject) -> Result<CreateOutcome, Self::Error> {
        let mut objects = self.objects.write().map_err(|_| StoreError::LockPoisoned)?;
        match objects.entry(object.identifier.clone()) {
            Entry::Occupied(_) => Ok(CreateOutcome::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(object.clone());
                self.writes.fetch_add(1, Ordering::SeqCst);
                Ok(CreateOutcome::Created)
            }
        }
    }

    fn query(&self, query: &ObjectQuery) -> Result<Vec<DomainObject>, Self::Error> {
        let objects = self.objects.read().map_err(|_| StoreError::LockPoisoned)?;
        let matches = objects
            .values()
            .filter(|object| {
                query
                    .namespace
                    .as_ref()
                    .map_or(true, |ns| &object.identifier.namespace == ns)
            })
            .filter(|object| {
                query
                    .object_type
                    .as_ref()
                    .map_or(true, |t| &object.object_type == t)
            })
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(matches)
    }
}
