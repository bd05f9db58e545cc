//! Workflow side-effects.
//!
//! Instructions produced by the [`crate::Workflow`] state machine for the
//! runtime to execute. The state machine never performs I/O itself.

use cipherpad_client::{DecryptRequest, EncryptRequest};

/// Actions produced by the workflow state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowAction {
    /// Redraw the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Issue an encrypt/hash request to the remote service.
    SendEncrypt {
        /// Generation at send time; the completion must echo it back.
        generation: u64,
        /// Validated operation parameters.
        request: EncryptRequest,
    },

    /// Issue a decrypt request to the remote service.
    SendDecrypt {
        /// Generation at send time; the completion must echo it back.
        generation: u64,
        /// Validated operation parameters.
        request: DecryptRequest,
    },

    /// Write a field value to the system clipboard, unchanged.
    CopyToClipboard(String),
}
