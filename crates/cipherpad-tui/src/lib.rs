//! Terminal UI for the remote encryption service.
//!
//! A thin shell over the [`cipherpad_app::Workflow`] state machine that
//! provides terminal-specific I/O: key handling, rendering, clipboard, and
//! the async event loop that executes network actions.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod clipboard;
pub mod input;
pub mod runtime;
pub mod ui;

pub use input::{InputState, KeyInput};
pub use runtime::{Runtime, RuntimeError};
