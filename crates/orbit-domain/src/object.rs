//! Domain object module - the persisted records of the object graph

use crate::ObjectIdentifier;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Type tag of folder objects
pub const FOLDER_TYPE: &str = "folder";

/// Wire form of [`Location::Root`]
const ROOT_SENTINEL: &str = "ROOT";

/// Parent reference of a domain object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// Top of the hierarchy, no parent
    Root,

    /// Contained by the identified object
    Parent(ObjectIdentifier),
}

impl Location {
    /// Whether this is the `ROOT` sentinel
    pub fn is_root(&self) -> bool {
        matches!(self, Location::Root)
    }

    /// Parent identifier, if any
    pub fn parent(&self) -> Option<&ObjectIdentifier> {
        match self {
            Location::Root => None,
            Location::Parent(id) => Some(id),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Root => f.write_str(ROOT_SENTINEL),
            // An unqualified key spelled like the sentinel must not read back as `Root`
            Location::Parent(id) if !id.has_namespace() && id.key == ROOT_SENTINEL => write!(f, ":{}", id.key),
            Location::Parent(id) => write!(f, "{}", id),
        }
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        if value == ROOT_SENTINEL {
            Location::Root
        } else {
            Location::Parent(ObjectIdentifier::parse(value))
        }
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Location::from(raw.as_str()))
    }
}

/// A domain object - a persisted record addressable by its identifier
///
/// Only the fields the object graph itself reasons about are typed. Anything
/// type-specific rides along untouched in `properties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainObject {
    /// Address of this object
    pub identifier: ObjectIdentifier,

    /// Display name
    pub name: String,

    /// Type tag, drawn from the open set of registered types
    #[serde(rename = "type")]
    pub object_type: String,

    /// Children, in display order
    #[serde(default)]
    pub composition: Vec<ObjectIdentifier>,

    /// Parent reference
    pub location: Location,

    /// Opaque type-specific fields
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl DomainObject {
    /// Create a new object with no children and no extra properties
    pub fn new(
        identifier: ObjectIdentifier,
        name: impl Into<String>,
        object_type: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            identifier,
            name: name.into(),
            object_type: object_type.into(),
            composition: Vec::new(),
            location,
            properties: Map::new(),
        }
    }

    /// Create an empty folder
    ///
    /// # Examples
    ///
    /// ```
    /// use orbit_domain::{DomainObject, Location, ObjectIdentifier};
    ///
    /// let folder = DomainObject::folder(ObjectIdentifier::new("", "mine"), "My Items", Location::Root);
    /// assert!(folder.is_folder());
    /// assert!(folder.composition.is_empty());
    /// ```
    pub fn folder(identifier: ObjectIdentifier, name: impl Into<String>, location: Location) -> Self {
        Self::new(identifier, name, FOLDER_TYPE, location)
    }

    /// Whether this object is a folder
    pub fn is_folder(&self) -> bool {
        self.object_type == FOLDER_TYPE
    }

    /// Append a child, ignoring identifiers already present
    pub fn add_child(&mut self, child: ObjectIdentifier) -> bool {
        if self.composition.contains(&child) {
            return false;
        }
        self.composition.push(child);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_location_wire_form() {
        let json = serde_json::to_value(Location::Root).unwrap();
        assert_eq!(json, Value::String("ROOT".to_string()));

        let parsed: Location = serde_json::from_value(json).unwrap();
        assert!(parsed.is_root());
    }

    #[test]
    fn test_parent_location_wire_form() {
        let location = Location::Parent(ObjectIdentifier::new("mct", "myItems"));
        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json, Value::String("mct:myItems".to_string()));

        let parsed: Location = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.parent(), Some(&ObjectIdentifier::new("mct", "myItems")));
    }

    #[test]
    fn test_unqualified_parents_survive_the_wire_form() {
        for key in ["a:b", "ROOT", "back\\slash"] {
            let location = Location::Parent(ObjectIdentifier::new("", key));
            let json = serde_json::to_value(&location).unwrap();
            let parsed: Location = serde_json::from_value(json).unwrap();
            assert_eq!(parsed, location);
        }
    }

    #[test]
    fn test_object_json_shape() {
        let folder = DomainObject::folder(ObjectIdentifier::new("mct", "myItems"), "My Items", Location::Root);
        let json = serde_json::to_value(&folder).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "identifier": {"namespace": "mct", "key": "myItems"},
                "name": "My Items",
                "type": "folder",
                "composition": [],
                "location": "ROOT"
            })
        );
    }

    #[test]
    fn test_opaque_properties_preserved() {
        let raw = serde_json::json!({
            "identifier": {"namespace": "", "key": "plot-1"},
            "name": "Temperature",
            "type": "telemetry.plot.overlay",
            "location": "mine",
            "configuration": {"series": []},
            "modified": 1700000000
        });

        let object: DomainObject = serde_json::from_value(raw.clone()).unwrap();
        assert!(object.composition.is_empty());
        assert_eq!(object.properties.len(), 2);
        assert!(object.properties.contains_key("configuration"));
        assert_eq!(object.location, Location::Parent(ObjectIdentifier::new("", "mine")));

        let mut back = serde_json::to_value(&object).unwrap();
        back.as_object_mut().unwrap().remove("composition");
        assert_eq!(back, raw);
    }

    #[test]
    fn test_add_child_dedupes() {
        let mut folder = DomainObject::folder(ObjectIdentifier::new("", "mine"), "My Items", Location::Root);
        let child = ObjectIdentifier::new("", "child");

        assert!(folder.add_child(child.clone()));
        assert!(!folder.add_child(child));
        assert_eq!(folder.composition.len(), 1);
    }
}
