//! Selection model

use orbit_domain::DomainObject;

/// Classification of a selection by its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionKind {
    /// An entry in a notebook
    NotebookEntry,

    /// A click on an image in an imagery view
    ImageClick,

    /// Any other host-defined selection type
    Other(String),
}

impl SelectionKind {
    /// Classify a host selection-type string
    pub fn parse(value: &str) -> Self {
        match value {
            "notebook-entry-selection" => SelectionKind::NotebookEntry,
            "clicked-on-image-selection" => SelectionKind::ImageClick,
            other => SelectionKind::Other(other.to_string()),
        }
    }

    /// Host selection-type string
    pub fn as_str(&self) -> &str {
        match self {
            SelectionKind::NotebookEntry => "notebook-entry-selection",
            SelectionKind::ImageClick => "clicked-on-image-selection",
            SelectionKind::Other(value) => value,
        }
    }
}

/// One selected element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionContext {
    /// The selected domain object, if the element represents one
    pub item: Option<DomainObject>,

    /// Whether the element is a layout item (a frame inside a layout)
    pub layout_item: bool,

    /// Selection origin
    pub kind: Option<SelectionKind>,
}

impl SelectionContext {
    /// Context selecting a domain object
    pub fn for_item(item: DomainObject) -> Self {
        Self {
            item: Some(item),
            ..Default::default()
        }
    }

    /// Set the selection origin
    pub fn with_kind(mut self, kind: SelectionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Whether the selection originates from the given kind
    pub fn is_kind(&self, kind: &SelectionKind) -> bool {
        self.kind.as_ref() == Some(kind)
    }
}

/// The current selection: a list of paths, each from the selected element
/// outwards through its containers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Selection paths
    pub paths: Vec<Vec<SelectionContext>>,
}

impl Selection {
    /// Selection of a single element
    pub fn single(context: SelectionContext) -> Self {
        Self {
            paths: vec![vec![context]],
        }
    }

    /// The innermost element of the first path
    pub fn primary(&self) -> Option<&SelectionContext> {
        self.paths.first().and_then(|path| path.first())
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.primary().is_none()
    }
}
