//! Host capabilities consumed by inspector policies
//!
//! Every method here is a pure query. The host owns the data; policies only
//! read it.

use orbit_domain::DomainObject;
use std::sync::Arc;

/// Tag and annotation queries
pub trait AnnotationApi: Send + Sync {
    /// Tags that can currently be applied
    fn available_tags(&self) -> Vec<String>;

    /// Whether objects of this type accept annotations
    fn is_annotatable_type(&self, object_type: &str) -> bool;
}

/// Telemetry queries
pub trait TelemetryApi: Send + Sync {
    /// Telemetry metadata of an object, if it produces telemetry
    fn metadata(&self, object: &DomainObject) -> Option<TelemetryMetadata>;

    /// Whether the object produces at least one numeric telemetry value
    fn has_numeric_telemetry(&self, object: &DomainObject) -> bool;
}

/// Editing-mode query
pub trait EditorApi: Send + Sync {
    /// Whether the host is in edit mode
    fn is_editing(&self) -> bool;
}

/// Description of one telemetry value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueMetadata {
    /// Value key
    pub key: String,

    /// Display hints, e.g. `"image"`, `"domain"`, `"range"`
    pub hints: Vec<String>,
}

/// Telemetry metadata of an object
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TelemetryMetadata {
    /// Values the object produces
    pub values: Vec<ValueMetadata>,
}

impl TelemetryMetadata {
    /// Values carrying every one of the given hints
    pub fn values_for_hints(&self, hints: &[&str]) -> Vec<&ValueMetadata> {
        self.values
            .iter()
            .filter(|value| hints.iter().all(|hint| value.hints.iter().any(|h| h == hint)))
            .collect()
    }
}

/// Capability bundle injected into view providers at construction
#[derive(Clone)]
pub struct InspectorServices {
    /// Tag and annotation queries
    pub annotations: Arc<dyn AnnotationApi>,

    /// Telemetry queries
    pub telemetry: Arc<dyn TelemetryApi>,

    /// Editing-mode query
    pub editor: Arc<dyn EditorApi>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(key: &str, hints: &[&str]) -> ValueMetadata {
        ValueMetadata {
            key: key.to_string(),
            hints: hints.iter().map(|h| h.to_string()).collect(),
        }
    }

    #[test]
    fn test_values_for_hints() {
        let metadata = TelemetryMetadata {
            values: vec![
                value("utc", &["domain"]),
                value("frame", &["image"]),
                value("thumb", &["image", "thumbnail"]),
            ],
        };

        let images: Vec<&str> = metadata
            .values_for_hints(&["image"])
            .into_iter()
            .map(|v| v.key.as_str())
            .collect();
        assert_eq!(images, vec!["frame", "thumb"]);

        assert_eq!(metadata.values_for_hints(&["image", "thumbnail"]).len(), 1);
        assert!(metadata.values_for_hints(&["range"]).is_empty());
    }
}
