//! Workflow input events.
//!
//! Events originate from two sources: user interactions forwarded by the
//! frontend (edits, triggers, algorithm selection) and request completions
//! delivered by the runtime once a network round-trip finishes.

use cipherpad_client::{ClientError, EncryptOutcome};

use crate::{AlgorithmKind, Field};

/// Events processed by the [`crate::Workflow`] state machine.
#[derive(Debug, Clone)]
pub enum WorkflowEvent {
    /// Switch the active algorithm, discarding all current state.
    SelectAlgorithm(AlgorithmKind),

    /// User edited a field. Mutates state only; never triggers I/O and never
    /// resets a slot status.
    Edit {
        /// Field being edited.
        field: Field,
        /// New full value of the field.
        value: String,
    },

    /// Encrypt (or hash) trigger.
    EncryptRequested,

    /// Decrypt trigger.
    DecryptRequested,

    /// Reset every field and both slot statuses.
    ClearRequested,

    /// Copy a displayed field value to the clipboard.
    CopyRequested(Field),

    /// An encrypt request finished.
    EncryptCompleted {
        /// Generation the request was tagged with at send time.
        generation: u64,
        /// Typed result from the client.
        outcome: Result<EncryptOutcome, RequestFailure>,
    },

    /// A decrypt request finished.
    DecryptCompleted {
        /// Generation the request was tagged with at send time.
        generation: u64,
        /// Recovered plaintext or typed failure.
        outcome: Result<String, RequestFailure>,
    },

    /// Periodic tick, drives notice expiry.
    Tick,
}

/// Failure of a completed request, projected from [`ClientError`] into an
/// owned, cloneable form suitable for events.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestFailure {
    /// Service unreachable, bad HTTP status, or undecodable response.
    #[error("{0}")]
    Transport(String),

    /// Service-reported encrypt/hash failure.
    #[error("{0}")]
    Service(String),

    /// Service-reported decrypt failure (wrong key/IV/corrupt ciphertext).
    #[error("{0}")]
    Decrypt(String),
}

impl From<ClientError> for RequestFailure {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Service(message) => RequestFailure::Service(message),
            ClientError::Decrypt(message) => RequestFailure::Decrypt(message),
            other => RequestFailure::Transport(other.to_string()),
        }
    }
}
