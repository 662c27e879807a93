//! Inspector view providers and their registry

use crate::Selection;
use orbit_domain::Priority;
use tracing::debug;

/// Ordinal priority of an inspector view for a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewPriority {
    /// Shown ahead of every other applicable view
    Highest,

    /// Neutral
    Default,

    /// Shown after default views
    Low,
}

impl ViewPriority {
    /// Position on the shared priority scale
    pub fn as_priority(&self) -> Priority {
        match self {
            ViewPriority::Highest => Priority::HIGHEST,
            ViewPriority::Default => Priority::DEFAULT,
            ViewPriority::Low => Priority::LOW,
        }
    }
}

/// A panel that can be offered in the inspector
pub trait InspectorViewProvider: Send + Sync {
    /// Stable key
    fn key(&self) -> &str;

    /// Display name
    fn name(&self) -> &str;

    /// Whether the panel applies to the selection
    fn can_view(&self, selection: &Selection) -> bool;

    /// Priority of the panel for the selection
    ///
    /// Only meaningful when `can_view` is true.
    fn priority(&self, selection: &Selection) -> ViewPriority;
}

/// Registered inspector view providers
#[derive(Default)]
pub struct InspectorViewRegistry {
    providers: Vec<Box<dyn InspectorViewProvider>>,
}

impl InspectorViewRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider
    pub fn register(&mut self, provider: Box<dyn InspectorViewProvider>) {
        self.providers.push(provider);
    }

    /// Look up a provider by key
    pub fn get(&self, key: &str) -> Option<&dyn InspectorViewProvider> {
        self.providers
            .iter()
            .find(|provider| provider.key() == key)
            .map(|provider| provider.as_ref())
    }

    /// Providers applicable to the selection, highest priority first
    ///
    /// Providers of equal priority keep registration order.
    pub fn views_for(&self, selection: &Selection) -> Vec<&dyn InspectorViewProvider> {
        let mut applicable: Vec<(Priority, &dyn InspectorViewProvider)> = self
            .providers
            .iter()
            .filter(|provider| provider.can_view(selection))
            .map(|provider| (provider.priority(selection).as_priority(), provider.as_ref()))
            .collect();

        applicable.sort_by(|a, b| b.0.cmp(&a.0));

        debug!(
            views = ?applicable.iter().map(|(_, p)| p.key()).collect::<Vec<_>>(),
            "Resolved inspector views"
        );

        applicable.into_iter().map(|(_, provider)| provider).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Static {
        key: &'static str,
        applies: bool,
        priority: ViewPriority,
    }

    impl InspectorViewProvider for Static {
        fn key(&self) -> &str {
            self.key
        }

        fn name(&self) -> &str {
            self.key
        }

        fn can_view(&self, _selection: &Selection) -> bool {
            self.applies
        }

        fn priority(&self, _selection: &Selection) -> ViewPriority {
            self.priority
        }
    }

    fn provider(key: &'static str, applies: bool, priority: ViewPriority) -> Box<dyn InspectorViewProvider> {
        Box::new(Static { key, applies, priority })
    }

    #[test]
    fn test_priority_scale() {
        assert!(ViewPriority::Highest.as_priority() > ViewPriority::Default.as_priority());
        assert!(ViewPriority::Default.as_priority() > ViewPriority::Low.as_priority());
    }

    #[test]
    fn test_views_ordered_and_filtered() {
        let mut registry = InspectorViewRegistry::new();
        registry.register(provider("low", true, ViewPriority::Low));
        registry.register(provider("hidden", false, ViewPriority::Highest));
        registry.register(provider("first", true, ViewPriority::Default));
        registry.register(provider("top", true, ViewPriority::Highest));
        registry.register(provider("second", true, ViewPriority::Default));

        let keys: Vec<&str> = registry
            .views_for(&Selection::default())
            .into_iter()
            .map(|view| view.key())
            .collect();
        assert_eq!(keys, vec!["top", "first", "second", "low"]);
    }

    #[test]
    fn test_get_by_key() {
        let mut registry = InspectorViewRegistry::new();
        registry.register(provider("a", true, ViewPriority::Default));
        assert!(registry.get("a").is_some());
        assert!(registry.get("b").is_none());
    }
}
