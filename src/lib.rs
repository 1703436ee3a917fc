//! Minesweeper board view: renders whitespace-delimited board text into a
//! container element and routes cell clicks to an injected controller.

mod board;
mod common;
mod config;
mod controller;
pub mod document;
mod logging;
pub mod prelude;
mod renderer;
#[cfg(feature = "web")]
mod bindings;

pub use board::*;
pub use common::*;
pub use config::*;
pub use controller::*;
pub use logging::{init_logging, init_logging_with_level, parse_level, LOG_ENV};
pub use renderer::*;
#[cfg(feature = "web")]
pub use bindings::{BoardView, JsController};
