//! Orbit Inspector
//!
//! Decides which inspector panels apply to a UI selection and how competing
//! panels are ordered. Rendering is not handled here; a host asks this crate
//! which views to show and mounts them itself.
//!
//! # Overview
//!
//! - **Selection**: what the user has selected, as paths of contexts
//! - **Capabilities**: host queries (tags, annotatable types, telemetry
//!   metadata, editing mode) injected through `InspectorServices`
//! - **View providers**: `can_view` + `priority` per panel
//! - **Registry**: applicable providers in priority order
//!
//! # Example Usage
//!
//! ```no_run
//! use orbit_inspector::{AnnotationsViewProvider, InspectorServices, InspectorViewRegistry, Selection};
//! # fn services() -> InspectorServices { unimplemented!() }
//!
//! let mut registry = InspectorViewRegistry::new();
//! registry.register(Box::new(AnnotationsViewProvider::new(services())));
//!
//! let selection = Selection::default();
//! for view in registry.views_for(&selection) {
//!     println!("{}", view.name());
//! }
//! ```

#![warn(missing_docs)]

mod annotations;
mod capabilities;
mod selection;
mod view;

pub use annotations::{AnnotationsViewProvider, ANNOTATIONS_VIEW_KEY, CONDITION_SET_TYPE};
pub use capabilities::{
    AnnotationApi, EditorApi, InspectorServices, TelemetryApi, TelemetryMetadata, ValueMetadata,
};
pub use selection::{Selection, SelectionContext, SelectionKind};
pub use view::{InspectorViewProvider, InspectorViewRegistry, ViewPriority};
