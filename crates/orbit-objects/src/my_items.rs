//! "My Items": the user's root folder, provisioned on first use

use crate::{Interceptor, InterceptorError, MyItemsConfig, ObjectService};
use orbit_domain::traits::{CreateOutcome, ObjectStore};
use orbit_domain::{DomainObject, Location, ObjectIdentifier, Priority, Resolution};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{info, warn};

/// Default key of the My Items folder
pub const MY_ITEMS_KEY: &str = "mine";

/// Default display name of the My Items folder
pub const MY_ITEMS_DEFAULT_NAME: &str = "My Items";

/// Guarantees that one well-known identifier always resolves to an object
///
/// When the store reports the identifier missing, a canonical empty folder
/// at `ROOT` is created and returned. An existing object is always returned
/// as stored, even if it no longer looks like the template.
///
/// The interceptor runs at `Priority::HIGHEST`, so only another `HIGHEST`
/// interceptor for the same identifier can take the lookup from it, and only
/// if that one was registered first.
pub struct RootProvisioningInterceptor<S> {
    store: Arc<S>,
    identifier: ObjectIdentifier,
    name: String,
}

impl<S> RootProvisioningInterceptor<S>
where
    S: ObjectStore,
    S::Error: Display,
{
    /// Create an interceptor owning `identifier`
    pub fn new(store: Arc<S>, identifier: ObjectIdentifier, name: impl Into<String>) -> Self {
        Self {
            store,
            identifier,
            name: name.into(),
        }
    }

    /// The identifier this interceptor owns
    pub fn identifier(&self) -> &ObjectIdentifier {
        &self.identifier
    }

    /// The object written when the root is missing
    pub fn template(&self) -> DomainObject {
        DomainObject::folder(self.identifier.clone(), self.name.clone(), Location::Root)
    }

    fn provision(&self) -> Result<Resolution, InterceptorError> {
        let root = self.template();
        let outcome = self
            .store
            .create(&root)
            .map_err(|e| InterceptorError::Store(e.to_string()))?;

        match outcome {
            CreateOutcome::Created => {
                info!(identifier = %self.identifier, name = %self.name, "Provisioned root folder");
                Ok(Resolution::Found(root))
            }
            CreateOutcome::AlreadyExists => {
                // Lost a race with another resolver; the stored copy is authoritative
                warn!(identifier = %self.identifier, "Root folder created concurrently, re-reading");
                match self.store.get(&self.identifier) {
                    Ok(Resolution::Found(existing)) => Ok(Resolution::Found(existing)),
                    Ok(Resolution::Missing) => Err(InterceptorError::Store(format!(
                        "{} reported as existing but cannot be read back",
                        self.identifier
                    ))),
                    Err(e) => Err(InterceptorError::Store(e.to_string())),
                }
            }
        }
    }
}

impl<S> Interceptor for RootProvisioningInterceptor<S>
where
    S: ObjectStore,
    S::Error: Display,
{
    fn name(&self) -> &str {
        "root-provisioning"
    }

    fn applies_to(&self, identifier: &ObjectIdentifier) -> Result<bool, InterceptorError> {
        Ok(*identifier == self.identifier)
    }

    fn invoke(
        &self,
        identifier: &ObjectIdentifier,
        resolution: Resolution,
    ) -> Result<Resolution, InterceptorError> {
        if *identifier != self.identifier {
            return Err(InterceptorError::Rejected(format!(
                "{} is not owned by this interceptor",
                identifier
            )));
        }
        if self.store.is_missing(&resolution) {
            return self.provision();
        }
        Ok(resolution)
    }

    fn priority(&self) -> Priority {
        Priority::HIGHEST
    }
}

/// Installable bundle for the My Items root
///
/// # Examples
///
/// ```
/// use orbit_objects::{MyItems, MY_ITEMS_DEFAULT_NAME};
///
/// let my_items = MyItems::default();
/// assert_eq!(my_items.name(), MY_ITEMS_DEFAULT_NAME);
/// assert_eq!(my_items.identifier().key, "mine");
/// ```
#[derive(Debug, Clone)]
pub struct MyItems {
    identifier: ObjectIdentifier,
    name: String,
    priority: Priority,
}

impl MyItems {
    /// Create a bundle for an explicit identifier
    pub fn new(identifier: ObjectIdentifier, name: impl Into<String>, priority: Priority) -> Self {
        Self {
            identifier,
            name: name.into(),
            priority,
        }
    }

    /// Build from configuration
    pub fn from_config(config: &MyItemsConfig) -> Self {
        Self::new(
            ObjectIdentifier::new(config.namespace.clone(), config.key.clone()),
            config.name.clone(),
            Priority::new(config.priority),
        )
    }

    /// Identifier of the root folder
    pub fn identifier(&self) -> &ObjectIdentifier {
        &self.identifier
    }

    /// Display name of the root folder
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register the provisioning interceptor and list the folder as a root
    pub fn install<S>(&self, service: &mut ObjectService<S>)
    where
        S: ObjectStore + 'static,
        S::Error: Display,
    {
        let interceptor = RootProvisioningInterceptor::new(
            Arc::clone(service.store()),
            self.identifier.clone(),
            self.name.clone(),
        );
        service.register_interceptor(Box::new(interceptor));
        service.add_root(self.identifier.clone(), self.priority);
    }
}

impl Default for MyItems {
    fn default() -> Self {
        Self::new(
            ObjectIdentifier::new("", MY_ITEMS_KEY),
            MY_ITEMS_DEFAULT_NAME,
            Priority::HIGH,
        )
    }
}
