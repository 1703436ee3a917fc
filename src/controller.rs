//! Controller capability invoked by rendered cells.

use core::cell::RefCell;
use serde::Serialize;

/// Game-side operations a rendered cell can trigger.
///
/// The renderer only calls these; it never inspects results or board state.
/// Methods take `&self` because handlers share the controller; implementations
/// that mutate state use interior mutability.
pub trait Controller {
    /// Reveal the cell at column `x`, row `y`.
    fn open(&self, x: usize, y: usize);

    /// Toggle the flag marker on the cell at column `x`, row `y`.
    fn toggle_flag(&self, x: usize, y: usize);
}

/// One controller invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ControllerCall {
    Open { x: usize, y: usize },
    ToggleFlag { x: usize, y: usize },
}

/// [`Controller`] that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingController {
    calls: RefCell<Vec<ControllerCall>>,
}

impl RecordingController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far.
    pub fn calls(&self) -> Vec<ControllerCall> {
        self.calls.borrow().clone()
    }

    /// Drain the recorded calls.
    pub fn take(&self) -> Vec<ControllerCall> {
        self.calls.take()
    }
}

impl Controller for RecordingController {
    fn open(&self, x: usize, y: usize) {
        self.calls.borrow_mut().push(ControllerCall::Open { x, y });
    }

    fn toggle_flag(&self, x: usize, y: usize) {
        self.calls.borrow_mut().push(ControllerCall::ToggleFlag { x, y });
    }
}
