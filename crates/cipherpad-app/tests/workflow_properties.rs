//! Property-based tests for the Workflow state machine.
//!
//! Tests verify that invariants hold under arbitrary event sequences.

use cipherpad_app::{
    AlgorithmKind, EncryptOutcome, EncryptRequest, Field, RequestFailure, Workflow,
    WorkflowAction, WorkflowEvent, WorkflowState,
};
use cipherpad_client::AesEncrypted;
use proptest::prelude::*;

fn algorithm_strategy() -> impl Strategy<Value = AlgorithmKind> {
    prop_oneof![
        Just(AlgorithmKind::Aes),
        Just(AlgorithmKind::Rsa),
        Just(AlgorithmKind::Sha256),
    ]
}

fn editable_field_strategy() -> impl Strategy<Value = Field> {
    prop_oneof![
        Just(Field::Input),
        Just(Field::SecretKey),
        Just(Field::CipherInput),
        Just(Field::DecryptSecretKey),
        Just(Field::DecryptIv),
        Just(Field::DecryptPrivateKey),
    ]
}

/// Generate random workflow events, including stale completions.
fn event_strategy() -> impl Strategy<Value = WorkflowEvent> {
    prop_oneof![
        1 => Just(WorkflowEvent::Tick),
        2 => algorithm_strategy().prop_map(WorkflowEvent::SelectAlgorithm),
        4 => (editable_field_strategy(), ".{0,12}")
            .prop_map(|(field, value)| WorkflowEvent::Edit { field, value }),
        2 => Just(WorkflowEvent::EncryptRequested),
        2 => Just(WorkflowEvent::DecryptRequested),
        1 => Just(WorkflowEvent::ClearRequested),
        1 => editable_field_strategy().prop_map(WorkflowEvent::CopyRequested),
        2 => (0u64..5, any::<bool>()).prop_map(|(generation, ok)| {
            let outcome = if ok {
                Ok(EncryptOutcome::Aes(AesEncrypted {
                    ciphertext: "cipher".into(),
                    iv: "iv".into(),
                }))
            } else {
                Err(RequestFailure::Transport("connection refused".into()))
            };
            WorkflowEvent::EncryptCompleted { generation, outcome }
        }),
        2 => (0u64..5, any::<bool>()).prop_map(|(generation, ok)| {
            let outcome = if ok {
                Ok("plain".to_string())
            } else {
                Err(RequestFailure::Decrypt("Decryption failed".into()))
            };
            WorkflowEvent::DecryptCompleted { generation, outcome }
        }),
    ]
}

proptest! {
    /// Every emitted request carries the current generation and a non-empty
    /// input, and a pending status was set alongside the send.
    #[test]
    fn prop_sends_are_tagged_and_validated(
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let mut workflow = Workflow::default();

        for event in events {
            let actions = workflow.handle(event);
            for action in &actions {
                match action {
                    WorkflowAction::SendEncrypt { generation, request } => {
                        prop_assert_eq!(*generation, workflow.generation());
                        match request {
                            EncryptRequest::Aes { text, secret_key } => {
                                prop_assert!(!secret_key.is_empty());
                                prop_assert!(!text.is_empty());
                            },
                            EncryptRequest::Rsa { text } => prop_assert!(!text.is_empty()),
                            // Hashing empty input is allowed.
                            EncryptRequest::Sha256 { .. } => {},
                        }
                        prop_assert!(workflow.encrypt_pending());
                    },
                    WorkflowAction::SendDecrypt { generation, .. } => {
                        prop_assert_eq!(*generation, workflow.generation());
                        prop_assert!(workflow.decrypt_available());
                        prop_assert!(workflow.decrypt_pending());
                    },
                    _ => {},
                }
            }
        }
    }

    /// Clear always restores default state regardless of history.
    #[test]
    fn prop_clear_restores_default_state(
        events in prop::collection::vec(event_strategy(), 0..40),
    ) {
        let mut workflow = Workflow::default();
        for event in events {
            let _ = workflow.handle(event);
        }

        let _ = workflow.handle(WorkflowEvent::ClearRequested);

        prop_assert_eq!(workflow.state(), &WorkflowState::default());
    }

    /// Completions tagged with a generation other than the current one leave
    /// the state untouched.
    #[test]
    fn prop_stale_completions_are_inert(
        events in prop::collection::vec(event_strategy(), 0..40),
        offset in 1u64..100,
    ) {
        let mut workflow = Workflow::default();
        for event in events {
            let _ = workflow.handle(event);
        }

        let before = workflow.state().clone();
        let stale = workflow.generation().wrapping_add(offset);

        let actions = workflow.handle(WorkflowEvent::EncryptCompleted {
            generation: stale,
            outcome: Ok(EncryptOutcome::Sha256 { digest: "deadbeef".into() }),
        });
        prop_assert!(actions.is_empty());

        let actions = workflow.handle(WorkflowEvent::DecryptCompleted {
            generation: stale,
            outcome: Ok("late".into()),
        });
        prop_assert!(actions.is_empty());

        prop_assert_eq!(workflow.state(), &before);
    }

    /// SHA-256 never produces a decrypt request.
    #[test]
    fn prop_sha256_never_decrypts(
        events in prop::collection::vec(event_strategy(), 0..40),
    ) {
        let mut workflow = Workflow::new(AlgorithmKind::Sha256);

        for event in events {
            let skip = matches!(event, WorkflowEvent::SelectAlgorithm(k) if k != AlgorithmKind::Sha256);
            if skip {
                continue;
            }
            let actions = workflow.handle(event);
            let sends_decrypt =
                actions.iter().any(|a| matches!(a, WorkflowAction::SendDecrypt { .. }));
            prop_assert!(!sends_decrypt);
        }
    }

    /// Read-only fields keep their values through arbitrary edits.
    #[test]
    fn prop_outputs_only_change_via_completions(
        values in prop::collection::vec(".{0,12}", 0..20),
    ) {
        let mut workflow = Workflow::default();

        for value in values {
            for field in [Field::Output, Field::Iv, Field::PublicKey, Field::PrivateKey, Field::DecryptOutput] {
                let _ = workflow.handle(WorkflowEvent::Edit { field, value: value.clone() });
            }
        }

        prop_assert_eq!(workflow.state(), &WorkflowState::default());
    }
}
