//! Orbit Domain Layer
//!
//! Value types and trait interfaces for the dashboard's object graph. Every
//! other crate in the workspace depends on this one; it carries no
//! infrastructure code of its own.
//!
//! ## Key Concepts
//!
//! - **ObjectIdentifier**: `(namespace, key)` address of a domain object
//! - **DomainObject**: a persisted record (name, type, composition, location)
//! - **Location**: parent reference, or the `ROOT` sentinel
//! - **Resolution**: the outcome of a lookup, `Found` or `Missing`
//! - **Priority**: ordering scale shared by interceptors, roots and views
//!
//! ## Architecture
//!
//! - Pure data and trait definitions only
//! - Persistence implementations live in `orbit-store`
//! - Resolution and interception live in `orbit-objects`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod identifier;
pub mod object;
pub mod priority;
pub mod resolution;
pub mod traits;

// Re-exports for convenience
pub use identifier::ObjectIdentifier;
pub use object::{DomainObject, Location, FOLDER_TYPE};
pub use priority::Priority;
pub use resolution::Resolution;
