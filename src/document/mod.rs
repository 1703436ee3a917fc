//! Document abstraction the renderer writes into.
//!
//! This module defines the [`Document`] trait and provides two backends:
//! - [`HeadlessDocument`]: in-memory element tree, always available
//! - `WebDocument`: the browser DOM through `web-sys` (feature `web`)

use crate::common::DomError;
use serde::Serialize;

pub mod headless;
pub use headless::{
    DispatchOutcome, ElementSnapshot, HeadlessDocument, HeadlessElement, HeadlessListener,
};

#[cfg(feature = "web")]
pub mod web;
#[cfg(feature = "web")]
pub use web::{WebDocument, WebListener};

/// User input the renderer listens for on each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Primary activation (left click).
    Click,
    /// Secondary activation (right click / context menu).
    ContextMenu,
}

impl EventKind {
    /// DOM event type name.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::ContextMenu => "contextmenu",
        }
    }
}

/// The part of an input event a cell handler needs.
pub trait DomEvent {
    /// Suppress the element's default action (navigation, context menu).
    fn prevent_default(&self);
}

/// Callback attached to an element for one [`EventKind`].
pub type Handler = Box<dyn Fn(&dyn DomEvent)>;

/// Element tree the board is rendered into.
///
/// `Element` is a cheap handle to a node. `Listener` is whatever the backend
/// needs kept alive for an attached handler to keep firing; dropping it may
/// detach the handler.
pub trait Document {
    type Element: Clone;
    type Listener;

    /// Find an element anywhere in the document by its id.
    fn get_element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Create a detached element.
    fn create_element(&self, tag: &str) -> Result<Self::Element, DomError>;

    /// Remove every child of `element`.
    fn clear_children(&self, element: &Self::Element) -> Result<(), DomError>;

    fn add_class(&self, element: &Self::Element, class: &str) -> Result<(), DomError>;

    fn set_attribute(
        &self,
        element: &Self::Element,
        name: &str,
        value: &str,
    ) -> Result<(), DomError>;

    /// Replace the element's content with a single text node.
    fn set_text(&self, element: &Self::Element, text: &str);

    /// Append `child` as the last child of `parent`, moving it if attached elsewhere.
    fn append_child(&self, parent: &Self::Element, child: &Self::Element)
        -> Result<(), DomError>;

    fn add_listener(
        &self,
        element: &Self::Element,
        kind: EventKind,
        handler: Handler,
    ) -> Result<Self::Listener, DomError>;
}
