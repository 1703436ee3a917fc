//! In-memory [`Document`] backend.
//!
//! Elements are reference-counted nodes holding tag, id, classes, attributes,
//! text, children and listeners. Nothing is laid out or painted; events are
//! delivered only through [`HeadlessElement::dispatch`] and do not bubble.

use core::cell::{Cell, RefCell};
use core::fmt;
use serde::Serialize;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::{Document, DomEvent, EventKind, Handler};
use crate::common::DomError;

type SharedHandler = Rc<dyn Fn(&dyn DomEvent)>;

struct ListenerEntry {
    id: u64,
    kind: EventKind,
    handler: SharedHandler,
}

struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    parent: Weak<RefCell<Node>>,
    children: Vec<HeadlessElement>,
    listeners: Vec<ListenerEntry>,
    next_listener: u64,
}

/// Handle to a node of a [`HeadlessDocument`]. Equality is identity.
#[derive(Clone)]
pub struct HeadlessElement(Rc<RefCell<Node>>);

/// Registration of a handler on a [`HeadlessElement`].
///
/// Dropping it removes the handler from the element.
#[must_use = "dropping the listener removes the handler"]
#[derive(Debug)]
pub struct HeadlessListener {
    node: Weak<RefCell<Node>>,
    id: u64,
}

impl Drop for HeadlessListener {
    fn drop(&mut self) {
        if let Some(node) = self.node.upgrade() {
            let removed = {
                let mut node = node.borrow_mut();
                let position = node.listeners.iter().position(|entry| entry.id == self.id);
                position.map(|index| node.listeners.remove(index))
            };
            // Released after the borrow ends; the handler owns its captures.
            drop(removed);
        }
    }
}

/// Result of delivering one event to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Number of handlers that ran.
    pub listeners: usize,
    /// Whether any handler called `prevent_default`.
    pub default_prevented: bool,
}

/// Serializable copy of an element subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementSnapshot {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listeners: Vec<EventKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSnapshot>,
}

struct HeadlessEvent {
    default_prevented: Cell<bool>,
}

impl DomEvent for HeadlessEvent {
    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}

fn validate_name(name: &str) -> Result<(), DomError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(DomError::InvalidName(name.to_owned()));
    }
    Ok(())
}

impl HeadlessElement {
    /// Create a detached element.
    pub fn new(tag: &str) -> Result<Self, DomError> {
        validate_name(tag)?;
        Ok(Self::blank(tag))
    }

    fn blank(tag: &str) -> Self {
        HeadlessElement(Rc::new(RefCell::new(Node {
            tag: tag.to_owned(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            parent: Weak::new(),
            children: Vec::new(),
            listeners: Vec::new(),
            next_listener: 0,
        })))
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    pub fn set_id(&self, id: &str) {
        let mut node = self.0.borrow_mut();
        node.id = Some(id.to_owned());
        node.attributes.insert("id".into(), id.to_owned());
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn children(&self) -> Vec<HeadlessElement> {
        self.0.borrow().children.clone()
    }

    pub fn child(&self, index: usize) -> Option<HeadlessElement> {
        self.0.borrow().children.get(index).cloned()
    }

    pub fn parent(&self) -> Option<HeadlessElement> {
        self.0.borrow().parent.upgrade().map(HeadlessElement)
    }

    /// Number of handlers registered for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.0
            .borrow()
            .listeners
            .iter()
            .filter(|entry| entry.kind == kind)
            .count()
    }

    /// Append `child`, detaching it from its current parent first.
    pub fn append(&self, child: &HeadlessElement) -> Result<(), DomError> {
        if child.is_inclusive_ancestor_of(self) {
            return Err(DomError::HierarchyRequest);
        }
        child.detach();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
        Ok(())
    }

    /// Remove this element from its parent, if any.
    pub fn detach(&self) {
        if let Some(parent) = self.parent() {
            parent.0.borrow_mut().children.retain(|c| c != self);
        }
        self.0.borrow_mut().parent = Weak::new();
    }

    fn is_inclusive_ancestor_of(&self, other: &HeadlessElement) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node == *self {
                return true;
            }
            current = node.parent();
        }
        false
    }

    fn clear(&self) {
        let children = core::mem::take(&mut self.0.borrow_mut().children);
        for child in &children {
            child.0.borrow_mut().parent = Weak::new();
        }
    }

    /// Depth-first search of this subtree, including `self`.
    pub fn find_by_id(&self, id: &str) -> Option<HeadlessElement> {
        if self.0.borrow().id.as_deref() == Some(id) {
            return Some(self.clone());
        }
        self.children()
            .iter()
            .find_map(|child| child.find_by_id(id))
    }

    /// Run the handlers registered for `kind`, in registration order.
    ///
    /// Handlers are collected before any runs, so a handler may rebuild the
    /// tree this element belongs to.
    pub fn dispatch(&self, kind: EventKind) -> DispatchOutcome {
        let handlers: Vec<SharedHandler> = self
            .0
            .borrow()
            .listeners
            .iter()
            .filter(|entry| entry.kind == kind)
            .map(|entry| Rc::clone(&entry.handler))
            .collect();
        let event = HeadlessEvent {
            default_prevented: Cell::new(false),
        };
        let dom_event: &dyn DomEvent = &event;
        for handler in &handlers {
            handler(dom_event);
        }
        DispatchOutcome {
            listeners: handlers.len(),
            default_prevented: event.default_prevented.get(),
        }
    }

    pub fn click(&self) -> DispatchOutcome {
        self.dispatch(EventKind::Click)
    }

    pub fn context_menu(&self) -> DispatchOutcome {
        self.dispatch(EventKind::ContextMenu)
    }

    pub fn snapshot(&self) -> ElementSnapshot {
        let node = self.0.borrow();
        ElementSnapshot {
            tag: node.tag.clone(),
            id: node.id.clone(),
            classes: node.classes.clone(),
            attributes: node.attributes.clone(),
            text: node.text.clone(),
            listeners: node.listeners.iter().map(|entry| entry.kind).collect(),
            children: node.children.iter().map(HeadlessElement::snapshot).collect(),
        }
    }

    /// Indented one-line-per-element rendering of this subtree.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        let children = {
            let node = self.0.borrow();
            let mut line = format!("{}{}", "  ".repeat(depth), node.tag);
            if let Some(id) = &node.id {
                line.push_str(&format!("#{}", id));
            }
            for class in &node.classes {
                line.push_str(&format!(".{}", class));
            }
            for (name, value) in node.attributes.iter().filter(|(name, _)| *name != "id") {
                line.push_str(&format!("[{}={}]", name, value));
            }
            if !node.text.is_empty() {
                line.push_str(&format!(" {:?}", node.text));
            }
            if !node.listeners.is_empty() {
                let kinds: Vec<&str> =
                    node.listeners.iter().map(|entry| entry.kind.name()).collect();
                line.push_str(&format!(" on:{}", kinds.join(",")));
            }
            out.push_str(&line);
            out.push('\n');
            node.children.clone()
        };
        for child in &children {
            child.write_outline(out, depth + 1);
        }
    }
}

impl PartialEq for HeadlessElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for HeadlessElement {}

impl fmt::Debug for HeadlessElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("HeadlessElement")
            .field("tag", &node.tag)
            .field("id", &node.id)
            .field("classes", &node.classes)
            .field("text", &node.text)
            .field("children", &node.children.len())
            .field("listeners", &node.listeners.len())
            .finish()
    }
}

/// In-memory document rooted at a `body` element.
///
/// Clones share the same tree, so a test can keep a handle while the
/// renderer owns another.
#[derive(Clone, Debug)]
pub struct HeadlessDocument {
    body: HeadlessElement,
}

impl HeadlessDocument {
    /// Empty document: a `body` with no children.
    pub fn new() -> Self {
        HeadlessDocument {
            body: HeadlessElement::blank("body"),
        }
    }

    /// Document whose body holds a single `div` with the given id.
    pub fn with_mount(id: &str) -> Self {
        let doc = Self::new();
        let mount = HeadlessElement::blank("div");
        mount.set_id(id);
        mount.0.borrow_mut().parent = Rc::downgrade(&doc.body.0);
        doc.body.0.borrow_mut().children.push(mount);
        doc
    }

    pub fn body(&self) -> HeadlessElement {
        self.body.clone()
    }
}

impl Default for HeadlessDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for HeadlessDocument {
    type Element = HeadlessElement;
    type Listener = HeadlessListener;

    fn get_element_by_id(&self, id: &str) -> Option<HeadlessElement> {
        self.body.find_by_id(id)
    }

    fn create_element(&self, tag: &str) -> Result<HeadlessElement, DomError> {
        HeadlessElement::new(tag)
    }

    fn clear_children(&self, element: &HeadlessElement) -> Result<(), DomError> {
        element.clear();
        Ok(())
    }

    fn add_class(&self, element: &HeadlessElement, class: &str) -> Result<(), DomError> {
        validate_name(class)?;
        let mut node = element.0.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_owned());
        }
        Ok(())
    }

    fn set_attribute(
        &self,
        element: &HeadlessElement,
        name: &str,
        value: &str,
    ) -> Result<(), DomError> {
        validate_name(name)?;
        if name == "id" {
            element.set_id(value);
        } else {
            element
                .0
                .borrow_mut()
                .attributes
                .insert(name.to_owned(), value.to_owned());
        }
        Ok(())
    }

    fn set_text(&self, element: &HeadlessElement, text: &str) {
        element.clear();
        element.0.borrow_mut().text = text.to_owned();
    }

    fn append_child(
        &self,
        parent: &HeadlessElement,
        child: &HeadlessElement,
    ) -> Result<(), DomError> {
        parent.append(child)
    }

    fn add_listener(
        &self,
        element: &HeadlessElement,
        kind: EventKind,
        handler: Handler,
    ) -> Result<HeadlessListener, DomError> {
        let mut node = element.0.borrow_mut();
        let id = node.next_listener;
        node.next_listener += 1;
        node.listeners.push(ListenerEntry {
            id,
            kind,
            handler: SharedHandler::from(handler),
        });
        Ok(HeadlessListener {
            node: Rc::downgrade(&element.0),
            id,
        })
    }
}
