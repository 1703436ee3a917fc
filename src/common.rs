//! Common types for the board view: document and render errors.

use core::fmt;

/// Errors returned by a [`Document`](crate::document::Document) backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// No window or document is available in the hosting environment.
    NoDocument,
    /// A tag or class name is empty or contains whitespace.
    InvalidName(String),
    /// Appending would make an element its own ancestor.
    HierarchyRequest,
    /// The browser raised an exception, carrying its message.
    Js(String),
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::NoDocument => write!(f, "No document is available"),
            DomError::InvalidName(name) => write!(f, "Invalid tag or class name: {:?}", name),
            DomError::HierarchyRequest => {
                write!(f, "Element cannot be appended to one of its descendants")
            }
            DomError::Js(msg) => write!(f, "JavaScript error: {}", msg),
        }
    }
}

impl std::error::Error for DomError {}

/// Errors returned by [`BoardRenderer::render`](crate::renderer::BoardRenderer::render).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The container element to render into does not exist.
    MissingMountPoint { id: String },
    /// Building the element tree failed partway.
    Dom(DomError),
}

impl From<DomError> for RenderError {
    fn from(err: DomError) -> Self {
        RenderError::Dom(err)
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingMountPoint { id } => {
                write!(f, "Mount point not found: no element with id {:?}", id)
            }
            RenderError::Dom(e) => write!(f, "Document error: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Dom(e) => Some(e),
            RenderError::MissingMountPoint { .. } => None,
        }
    }
}
