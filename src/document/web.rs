//! Browser DOM backend built on `web-sys`.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event};

use super::{Document, DomEvent, EventKind, Handler};
use crate::common::DomError;

impl DomError {
    /// Convert a thrown JS value, preferring the `Error.message` text.
    pub fn from_js(value: JsValue) -> Self {
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return DomError::Js(String::from(err.message()));
        }
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

impl DomEvent for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self)
    }
}

/// A registered event listener.
///
/// Dropping it removes the listener from its element and frees the closure,
/// so handlers from a superseded render can never fire.
pub struct WebListener {
    target: Element,
    kind: EventKind,
    closure: Closure<dyn Fn(Event)>,
}

impl Drop for WebListener {
    fn drop(&mut self) {
        if let Err(err) = self.target.remove_event_listener_with_callback(
            self.kind.name(),
            self.closure.as_ref().unchecked_ref(),
        ) {
            warn!(
                "failed to remove {} listener: {}",
                self.kind.name(),
                DomError::from_js(err)
            );
        }
    }
}

/// [`Document`] over the page's `web_sys::Document`.
#[derive(Clone, Debug)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// Document of the current window.
    pub fn from_window() -> Result<Self, DomError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(DomError::NoDocument)?;
        Ok(Self::new(document))
    }
}

impl Document for WebDocument {
    type Element = Element;
    type Listener = WebListener;

    fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn create_element(&self, tag: &str) -> Result<Element, DomError> {
        self.document.create_element(tag).map_err(DomError::from_js)
    }

    fn clear_children(&self, element: &Element) -> Result<(), DomError> {
        element.set_inner_html("");
        Ok(())
    }

    fn add_class(&self, element: &Element, class: &str) -> Result<(), DomError> {
        element.class_list().add_1(class).map_err(DomError::from_js)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> Result<(), DomError> {
        element.set_attribute(name, value).map_err(DomError::from_js)
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), DomError> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(DomError::from_js)
    }

    fn add_listener(
        &self,
        element: &Element,
        kind: EventKind,
        handler: Handler,
    ) -> Result<WebListener, DomError> {
        let closure = Closure::<dyn Fn(Event)>::new(move |event: Event| {
            let dom_event: &dyn DomEvent = &event;
            handler(dom_event)
        });
        element
            .add_event_listener_with_callback(kind.name(), closure.as_ref().unchecked_ref())
            .map_err(DomError::from_js)?;
        Ok(WebListener {
            target: element.clone(),
            kind,
            closure,
        })
    }
}
