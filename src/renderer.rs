//! Board renderer: board text in, element tree with cell handlers out.

use core::cell::RefCell;
use log::{debug, error, trace};
use std::rc::Rc;

use crate::board::Board;
use crate::common::RenderError;
use crate::config::RenderConfig;
use crate::controller::Controller;
use crate::document::{Document, DomEvent, EventKind};

/// Renders boards into the mount point of a [`Document`].
///
/// Every render clears the mount point and rebuilds it from scratch. The
/// listeners attached by the previous render are released at that point.
pub struct BoardRenderer<D: Document> {
    document: D,
    controller: Rc<dyn Controller>,
    config: RenderConfig,
    listeners: RefCell<Vec<D::Listener>>,
}

impl<D: Document> BoardRenderer<D> {
    /// Renderer with the default [`RenderConfig`].
    pub fn new(document: D, controller: Rc<dyn Controller>) -> Self {
        Self::with_config(document, controller, RenderConfig::default())
    }

    pub fn with_config(document: D, controller: Rc<dyn Controller>, config: RenderConfig) -> Self {
        Self {
            document,
            controller,
            config,
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Parse `board_text` and render it, replacing whatever was rendered before.
    pub fn render(&self, board_text: &str) -> Result<(), RenderError> {
        self.render_board(&Board::parse(board_text))
    }

    /// Render an already parsed board.
    ///
    /// Fails with [`RenderError::MissingMountPoint`] before touching the
    /// document when the mount point is absent. A document error partway
    /// leaves the rows built so far in place; the next render starts over.
    pub fn render_board(&self, board: &Board) -> Result<(), RenderError> {
        let mount = self
            .document
            .get_element_by_id(&self.config.mount_id)
            .ok_or_else(|| {
                error!("mount point #{} not found", self.config.mount_id);
                RenderError::MissingMountPoint {
                    id: self.config.mount_id.clone(),
                }
            })?;

        self.document.clear_children(&mount)?;
        drop(self.listeners.take());

        for (y, row) in board.rows().iter().enumerate() {
            let row_element = self.document.create_element(&self.config.row_tag)?;
            self.document.add_class(&row_element, &self.config.row_class)?;
            for (x, label) in row.iter().enumerate() {
                let cell = self.build_cell(x, y, label)?;
                self.document.append_child(&row_element, &cell)?;
            }
            self.document.append_child(&mount, &row_element)?;
        }

        debug!(
            "rendered {} rows, {} cells into #{}",
            board.row_count(),
            board.cell_count(),
            self.config.mount_id
        );
        Ok(())
    }

    fn build_cell(&self, x: usize, y: usize, label: &str) -> Result<D::Element, RenderError> {
        let cell = self.document.create_element(&self.config.cell_tag)?;
        self.document.set_text(&cell, label);
        self.document.add_class(&cell, &self.config.cell_class)?;
        self.document
            .set_attribute(&cell, "href", &self.config.cell_href)?;

        let controller = Rc::clone(&self.controller);
        let open = self.document.add_listener(
            &cell,
            EventKind::Click,
            Box::new(move |event: &dyn DomEvent| {
                event.prevent_default();
                trace!("open ({}, {})", x, y);
                controller.open(x, y);
            }),
        )?;
        self.listeners.borrow_mut().push(open);

        let controller = Rc::clone(&self.controller);
        let flag = self.document.add_listener(
            &cell,
            EventKind::ContextMenu,
            Box::new(move |event: &dyn DomEvent| {
                event.prevent_default();
                trace!("toggle flag ({}, {})", x, y);
                controller.toggle_flag(x, y);
            }),
        )?;
        self.listeners.borrow_mut().push(flag);

        Ok(cell)
    }
}
