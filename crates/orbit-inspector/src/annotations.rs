//! Applicability and priority of the Annotations inspector panel

use crate::{InspectorServices, InspectorViewProvider, Selection, SelectionKind, ViewPriority};
use tracing::trace;

/// Key of the Annotations view
pub const ANNOTATIONS_VIEW_KEY: &str = "annotationsView";

/// Type tag of condition sets, which rank the panel low
pub const CONDITION_SET_TYPE: &str = "conditionSet";

const ANNOTATIONS_VIEW_NAME: &str = "Annotations";

/// Telemetry hint marking image values
const IMAGE_HINT: &str = "image";

/// Selection classes the priority table is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectionClass {
    NotebookEntry,
    ImageClick,
    ConditionSet,
    Other,
}

const PRIORITY_TABLE: [(SelectionClass, ViewPriority); 4] = [
    (SelectionClass::NotebookEntry, ViewPriority::Highest),
    (SelectionClass::ImageClick, ViewPriority::Highest),
    (SelectionClass::ConditionSet, ViewPriority::Low),
    (SelectionClass::Other, ViewPriority::Default),
];

/// Offers the Annotations panel for annotatable selections
pub struct AnnotationsViewProvider {
    services: InspectorServices,
}

impl AnnotationsViewProvider {
    /// Create the provider over host capabilities
    pub fn new(services: InspectorServices) -> Self {
        Self { services }
    }

    fn classify(selection: &Selection) -> SelectionClass {
        let Some(context) = selection.primary() else {
            return SelectionClass::Other;
        };

        if context.is_kind(&SelectionKind::NotebookEntry) {
            SelectionClass::NotebookEntry
        } else if context.is_kind(&SelectionKind::ImageClick) {
            SelectionClass::ImageClick
        } else if context
            .item
            .as_ref()
            .is_some_and(|item| item.object_type == CONDITION_SET_TYPE)
        {
            SelectionClass::ConditionSet
        } else {
            SelectionClass::Other
        }
    }
}

impl InspectorViewProvider for AnnotationsViewProvider {
    fn key(&self) -> &str {
        ANNOTATIONS_VIEW_KEY
    }

    fn name(&self) -> &str {
        ANNOTATIONS_VIEW_NAME
    }

    fn can_view(&self, selection: &Selection) -> bool {
        let Some(context) = selection.primary() else {
            return false;
        };

        if self.services.annotations.available_tags().is_empty()
            || context.layout_item
            || self.services.editor.is_editing()
        {
            return false;
        }

        let Some(item) = context.item.as_ref() else {
            return false;
        };

        let annotatable = self.services.annotations.is_annotatable_type(&item.object_type);
        let has_imagery = self
            .services
            .telemetry
            .metadata(item)
            .is_some_and(|metadata| !metadata.values_for_hints(&[IMAGE_HINT]).is_empty());
        let notebook_entry = context.is_kind(&SelectionKind::NotebookEntry);
        let numeric = self.services.telemetry.has_numeric_telemetry(item);

        trace!(
            item = %item.identifier,
            annotatable,
            has_imagery,
            numeric,
            notebook_entry,
            "Annotations applicability"
        );

        annotatable || has_imagery || numeric || notebook_entry
    }

    fn priority(&self, selection: &Selection) -> ViewPriority {
        let class = Self::classify(selection);
        PRIORITY_TABLE
            .iter()
            .find(|(candidate, _)| *candidate == class)
            .map_or(ViewPriority::Default, |(_, priority)| *priority)
    }
}
