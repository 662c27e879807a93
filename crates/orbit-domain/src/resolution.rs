//! Resolution module - the outcome of looking up an identifier

use crate::DomainObject;

/// Result of resolving an identifier against the object graph
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// An object exists at the identifier
    Found(DomainObject),

    /// Nothing is stored at the identifier
    Missing,
}

impl Resolution {
    /// Whether the lookup found nothing
    pub fn is_missing(&self) -> bool {
        matches!(self, Resolution::Missing)
    }

    /// Borrow the found object
    pub fn as_found(&self) -> Option<&DomainObject> {
        match self {
            Resolution::Found(object) => Some(object),
            Resolution::Missing => None,
        }
    }

    /// Take the found object
    pub fn into_found(self) -> Option<DomainObject> {
        match self {
            Resolution::Found(object) => Some(object),
            Resolution::Missing => None,
        }
    }
}

impl From<Option<DomainObject>> for Resolution {
    fn from(value: Option<DomainObject>) -> Self {
        value.map_or(Resolution::Missing, Resolution::Found)
    }
}
