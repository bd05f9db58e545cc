//! Application layer for Cipherpad
//!
//! Pure state machine for the per-algorithm encryption/decryption workflow,
//! completely decoupled from terminal, clipboard, and network I/O. The
//! frontend feeds [`WorkflowEvent`]s in and executes the returned
//! [`WorkflowAction`]s, which keeps every validation and lifecycle rule
//! testable without a live service.
//!
//! # Components
//!
//! - [`Workflow`]: the state machine (validation, request tagging, results)
//! - [`WorkflowState`]: field values and per-slot request status
//! - [`WorkflowEvent`] / [`WorkflowAction`]: inputs and produced effects
//! - [`NoticeQueue`]: non-blocking transient user notifications

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod algorithm;
mod error;
mod event;
mod notice;
mod state;
mod workflow;

pub use action::WorkflowAction;
pub use algorithm::AlgorithmKind;
pub use cipherpad_client::{DecryptRequest, EncryptOutcome, EncryptRequest};
pub use error::ValidationError;
pub use event::{RequestFailure, WorkflowEvent};
pub use notice::{Notice, NoticeLevel, NoticeQueue};
pub use state::{Field, RequestStatus, WorkflowState};
pub use workflow::Workflow;
