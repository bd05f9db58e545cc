//! Workflow state machine.
//!
//! [`Workflow`] manages the interactive state of the active algorithm
//! completely decoupled from I/O. It consumes [`WorkflowEvent`] inputs and
//! produces [`WorkflowAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Validates encrypt/decrypt preconditions before any request is issued.
//! - Tags outgoing requests with a generation counter so completions that
//!   arrive after an algorithm switch or clear are discarded, never applied.
//! - Applies completions in arrival order; the last-completed result wins.
//! - Queues transient notices for validation and request failures.

use cipherpad_client::{DecryptRequest, EncryptOutcome, EncryptRequest};

use crate::{
    AlgorithmKind, Field, NoticeLevel, NoticeQueue, RequestFailure, RequestStatus,
    ValidationError, WorkflowAction, WorkflowEvent, WorkflowState,
    notice::Notice,
};

/// Workflow state machine for the active algorithm.
///
/// Pure state machine: no I/O dependencies, fully testable in isolation.
#[derive(Debug, Clone, Default)]
pub struct Workflow {
    /// Active algorithm.
    kind: AlgorithmKind,
    /// Field values and slot statuses.
    state: WorkflowState,
    /// Bumped on algorithm switch and clear; stale completions are dropped.
    generation: u64,
    /// Pending transient notices.
    notices: NoticeQueue,
}

impl Workflow {
    /// Create a workflow for `kind` with empty state.
    pub fn new(kind: AlgorithmKind) -> Self {
        Self { kind, ..Self::default() }
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: WorkflowEvent) -> Vec<WorkflowAction> {
        match event {
            WorkflowEvent::SelectAlgorithm(kind) => self.select_algorithm(kind),
            WorkflowEvent::Edit { field, value } => self.edit(field, value),
            WorkflowEvent::EncryptRequested => self.encrypt(),
            WorkflowEvent::DecryptRequested => self.decrypt(),
            WorkflowEvent::ClearRequested => self.clear(),
            WorkflowEvent::CopyRequested(field) => self.copy(field),
            WorkflowEvent::EncryptCompleted { generation, outcome } => {
                self.encrypt_completed(generation, outcome)
            },
            WorkflowEvent::DecryptCompleted { generation, outcome } => {
                self.decrypt_completed(generation, outcome)
            },
            WorkflowEvent::Tick => {
                if self.notices.tick() {
                    vec![WorkflowAction::Render]
                } else {
                    vec![]
                }
            },
        }
    }

    /// Replace the state with an empty instance for `kind`.
    ///
    /// Always succeeds, no network call. Outstanding requests keep running
    /// but their completions no longer match the generation and are dropped.
    fn select_algorithm(&mut self, kind: AlgorithmKind) -> Vec<WorkflowAction> {
        self.kind = kind;
        self.state = WorkflowState::default();
        self.generation = self.generation.wrapping_add(1);
        self.notices.clear();
        vec![WorkflowAction::Render]
    }

    fn edit(&mut self, field: Field, value: String) -> Vec<WorkflowAction> {
        if !field.is_editable() {
            tracing::debug!(?field, "ignoring edit of read-only field");
            return vec![];
        }
        // Edits never reset a slot status; the next trigger does.
        self.state.set_field(field, value);
        vec![WorkflowAction::Render]
    }

    fn encrypt(&mut self) -> Vec<WorkflowAction> {
        // Empty input is a silent no-op for encryption. Hashing is exempt:
        // the empty string has a well-defined digest.
        if self.state.input_text.is_empty() && self.kind != AlgorithmKind::Sha256 {
            return vec![];
        }

        let request = match self.kind {
            AlgorithmKind::Aes => {
                if self.state.secret_key.is_empty() {
                    return self.reject(ValidationError::MissingSecretKey);
                }
                EncryptRequest::Aes {
                    text: self.state.input_text.clone(),
                    secret_key: self.state.secret_key.clone(),
                }
            },
            AlgorithmKind::Rsa => EncryptRequest::Rsa { text: self.state.input_text.clone() },
            AlgorithmKind::Sha256 => EncryptRequest::Sha256 { text: self.state.input_text.clone() },
        };

        self.state.encrypt_status = RequestStatus::Pending;
        vec![
            WorkflowAction::SendEncrypt { generation: self.generation, request },
            WorkflowAction::Render,
        ]
    }

    fn decrypt(&mut self) -> Vec<WorkflowAction> {
        if !self.kind.supports_decrypt() {
            return self.reject(ValidationError::DecryptUnavailable);
        }
        if self.state.cipher_text.is_empty() {
            return self.reject(ValidationError::EmptyCiphertext);
        }

        let request = match self.kind {
            AlgorithmKind::Aes => {
                if self.state.decrypt_secret_key.is_empty() || self.state.decrypt_iv.is_empty() {
                    return self.reject(ValidationError::MissingAesDecryptInputs);
                }
                DecryptRequest::Aes {
                    ciphertext: self.state.cipher_text.clone(),
                    secret_key: self.state.decrypt_secret_key.clone(),
                    iv: self.state.decrypt_iv.clone(),
                }
            },
            AlgorithmKind::Rsa => {
                if self.state.decrypt_private_key.is_empty() {
                    return self.reject(ValidationError::MissingPrivateKey);
                }
                DecryptRequest::Rsa {
                    ciphertext: self.state.cipher_text.clone(),
                    private_key: self.state.decrypt_private_key.clone(),
                }
            },
            AlgorithmKind::Sha256 => return self.reject(ValidationError::DecryptUnavailable),
        };

        self.state.decrypt_status = RequestStatus::Pending;
        vec![
            WorkflowAction::SendDecrypt { generation: self.generation, request },
            WorkflowAction::Render,
        ]
    }

    /// Reset all fields and both slot statuses. No network call.
    fn clear(&mut self) -> Vec<WorkflowAction> {
        self.state = WorkflowState::default();
        self.generation = self.generation.wrapping_add(1);
        self.notices.clear();
        vec![WorkflowAction::Render]
    }

    fn copy(&mut self, field: Field) -> Vec<WorkflowAction> {
        let value = self.state.field(field);
        if value.is_empty() {
            self.notices.push(NoticeLevel::Info, "Nothing to copy");
            return vec![WorkflowAction::Render];
        }
        let value = value.to_string();
        self.notices.push(NoticeLevel::Info, "Copied to clipboard");
        vec![WorkflowAction::CopyToClipboard(value), WorkflowAction::Render]
    }

    fn encrypt_completed(
        &mut self,
        generation: u64,
        outcome: Result<EncryptOutcome, RequestFailure>,
    ) -> Vec<WorkflowAction> {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "discarding stale encrypt completion");
            return vec![];
        }

        match outcome {
            Ok(EncryptOutcome::Aes(enc)) => {
                self.state.output_text = enc.ciphertext;
                self.state.iv = enc.iv;
                self.state.encrypt_status = RequestStatus::Succeeded;
            },
            Ok(EncryptOutcome::Rsa(enc)) => {
                self.state.output_text = enc.ciphertext;
                self.state.public_key = enc.public_key;
                self.state.private_key = enc.private_key;
                self.state.encrypt_status = RequestStatus::Succeeded;
            },
            Ok(EncryptOutcome::Sha256 { digest }) => {
                self.state.output_text = digest;
                self.state.encrypt_status = RequestStatus::Succeeded;
            },
            Err(failure) => {
                // Prior output fields stay untouched on failure.
                let message = failure.to_string();
                self.notices.push(NoticeLevel::Error, message.clone());
                self.state.encrypt_status = RequestStatus::Failed(message);
            },
        }
        vec![WorkflowAction::Render]
    }

    fn decrypt_completed(
        &mut self,
        generation: u64,
        outcome: Result<String, RequestFailure>,
    ) -> Vec<WorkflowAction> {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "discarding stale decrypt completion");
            return vec![];
        }

        match outcome {
            Ok(plaintext) => {
                self.state.decrypt_output = plaintext;
                self.state.decrypt_status = RequestStatus::Succeeded;
            },
            Err(failure) => {
                let message = failure.to_string();
                self.notices.push(NoticeLevel::Error, message.clone());
                self.state.decrypt_status = RequestStatus::Failed(message);
            },
        }
        vec![WorkflowAction::Render]
    }

    fn reject(&mut self, error: ValidationError) -> Vec<WorkflowAction> {
        self.notices.push(NoticeLevel::Error, error.to_string());
        vec![WorkflowAction::Render]
    }

    /// Active algorithm.
    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    /// Current field values and slot statuses.
    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Generation outstanding requests must echo to be applied.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Currently visible notice. `None` if the queue is empty.
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    /// IV panel is shown for AES once an encrypt supplied an IV.
    pub fn show_iv_panel(&self) -> bool {
        self.kind == AlgorithmKind::Aes && !self.state.iv.is_empty()
    }

    /// Key panels are shown for RSA once an encrypt supplied a key pair.
    pub fn show_key_panels(&self) -> bool {
        self.kind == AlgorithmKind::Rsa
            && (!self.state.public_key.is_empty() || !self.state.private_key.is_empty())
    }

    /// Whether the decrypt section exists for the active algorithm.
    pub fn decrypt_available(&self) -> bool {
        self.kind.supports_decrypt()
    }

    /// Encrypt trigger should be disabled while its request is in flight.
    pub fn encrypt_pending(&self) -> bool {
        self.state.encrypt_status.is_pending()
    }

    /// Decrypt trigger should be disabled while its request is in flight.
    pub fn decrypt_pending(&self) -> bool {
        self.state.decrypt_status.is_pending()
    }
}
