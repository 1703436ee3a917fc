//! Commonly used types and utilities for ease of import.

pub use crate::document::{Document, EventKind, HeadlessDocument, HeadlessElement};
pub use crate::{Board, BoardRenderer, Controller, RecordingController, RenderConfig, RenderError};

#[cfg(feature = "web")]
pub use crate::document::WebDocument;
