//! JavaScript surface: a controller object supplied by the page and the
//! `BoardView` class that renders into the browser DOM.

use std::rc::Rc;
use wasm_bindgen::prelude::*;

use crate::config::RenderConfig;
use crate::controller::Controller;
use crate::document::WebDocument;
use crate::logging::init_logging;
use crate::renderer::BoardRenderer;

#[wasm_bindgen]
extern "C" {
    /// Any JS object with `open(x, y)` and `toggleFlag(x, y)` methods.
    /// Exceptions thrown by either method propagate to the page.
    #[wasm_bindgen(typescript_type = "{ open(x: number, y: number): void; toggleFlag(x: number, y: number): void }")]
    pub type JsController;

    #[wasm_bindgen(method, js_name = open)]
    fn js_open(this: &JsController, x: usize, y: usize);

    #[wasm_bindgen(method, js_name = toggleFlag)]
    fn js_toggle_flag(this: &JsController, x: usize, y: usize);
}

impl Controller for JsController {
    fn open(&self, x: usize, y: usize) {
        self.js_open(x, y);
    }

    fn toggle_flag(&self, x: usize, y: usize) {
        self.js_toggle_flag(x, y);
    }
}

/// Board view bound to a mount point of the current page.
#[wasm_bindgen]
pub struct BoardView {
    renderer: BoardRenderer<WebDocument>,
}

#[wasm_bindgen]
impl BoardView {
    /// `new BoardView(controller, mountId?)`; the mount id defaults to `"minesweeper"`.
    #[wasm_bindgen(constructor)]
    pub fn new(controller: JsController, mount_id: Option<String>) -> Result<BoardView, JsValue> {
        let document = WebDocument::from_window()?;
        let config = match mount_id {
            Some(id) => RenderConfig::with_mount_id(id),
            None => RenderConfig::default(),
        };
        Ok(BoardView {
            renderer: BoardRenderer::with_config(document, Rc::new(controller), config),
        })
    }

    /// Replace the rendered board with `board_text`.
    pub fn render(&self, board_text: &str) -> Result<(), JsValue> {
        self.renderer
            .render(board_text)
            .map_err(|e| js_sys::Error::new(&e.to_string()).into())
    }

    #[wasm_bindgen(getter, js_name = mountId)]
    pub fn mount_id(&self) -> String {
        self.renderer.config().mount_id.clone()
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    init_logging();
}
