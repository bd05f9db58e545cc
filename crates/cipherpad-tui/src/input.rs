//! Input state and key handling for the TUI.
//!
//! This module owns focus and cursor state and translates key events into
//! [`WorkflowEvent`]s for the state machine. Field edits are character-level:
//! each keystroke rewrites the focused field through an `Edit` event so the
//! state machine stays the single source of truth for field values.

use cipherpad_app::{AlgorithmKind, Field, Workflow, WorkflowAction, WorkflowEvent};

/// Key input events from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Character input.
    Char(char),
    /// Character input with Ctrl held.
    Ctrl(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Tab key.
    Tab,
    /// Shift-Tab key.
    BackTab,
    /// Escape key.
    Esc,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
}

/// Fields currently on screen, in focus order.
///
/// Read-only fields (outputs, IV, key pair) are focusable so their values
/// can be copied; edits to them are ignored by the state machine.
fn visible_fields(workflow: &Workflow) -> Vec<Field> {
    let mut fields = vec![Field::Input];

    match workflow.kind() {
        AlgorithmKind::Aes => {
            fields.push(Field::SecretKey);
            fields.push(Field::Output);
            if workflow.show_iv_panel() {
                fields.push(Field::Iv);
            }
            fields.extend([
                Field::CipherInput,
                Field::DecryptSecretKey,
                Field::DecryptIv,
                Field::DecryptOutput,
            ]);
        },
        AlgorithmKind::Rsa => {
            fields.push(Field::Output);
            if workflow.show_key_panels() {
                fields.push(Field::PublicKey);
                fields.push(Field::PrivateKey);
            }
            fields.extend([Field::CipherInput, Field::DecryptPrivateKey, Field::DecryptOutput]);
        },
        AlgorithmKind::Sha256 => {
            fields.push(Field::Output);
        },
    }

    fields
}

/// Whether `field` belongs to the decrypt half of the screen.
fn is_decrypt_field(field: Field) -> bool {
    matches!(
        field,
        Field::CipherInput
            | Field::DecryptSecretKey
            | Field::DecryptIv
            | Field::DecryptPrivateKey
            | Field::DecryptOutput
    )
}

/// Focus and cursor state for the TUI.
///
/// The cursor is a byte offset into the focused field, always on a char
/// boundary.
#[derive(Debug, Default)]
pub struct InputState {
    focus: usize,
    cursor: usize,
}

impl InputState {
    /// Create a new input state focused on the first field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently focused field.
    pub fn focus(&self, workflow: &Workflow) -> Field {
        let fields = visible_fields(workflow);
        fields[self.focus % fields.len()]
    }

    /// Cursor byte offset within the focused field.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle a key input event against the workflow.
    pub fn handle_key(&mut self, key: KeyInput, workflow: &mut Workflow) -> Vec<WorkflowAction> {
        let field = self.focus(workflow);
        let value = workflow.state().field(field);
        self.cursor = self.cursor.min(value.len());

        match key {
            KeyInput::Char(c) => {
                if !field.is_editable() {
                    return vec![];
                }
                let mut value = value.to_string();
                value.insert(self.cursor, c);
                self.cursor = self.cursor.saturating_add(c.len_utf8());
                workflow.handle(WorkflowEvent::Edit { field, value })
            },
            KeyInput::Backspace => {
                if !field.is_editable() || self.cursor == 0 {
                    return vec![];
                }
                let mut value = value.to_string();
                self.cursor = prev_boundary(&value, self.cursor);
                value.remove(self.cursor);
                workflow.handle(WorkflowEvent::Edit { field, value })
            },
            KeyInput::Delete => {
                if !field.is_editable() || self.cursor >= value.len() {
                    return vec![];
                }
                let mut value = value.to_string();
                value.remove(self.cursor);
                workflow.handle(WorkflowEvent::Edit { field, value })
            },
            KeyInput::Left => {
                if self.cursor > 0 {
                    self.cursor = prev_boundary(value, self.cursor);
                }
                vec![WorkflowAction::Render]
            },
            KeyInput::Right => {
                if self.cursor < value.len() {
                    self.cursor = next_boundary(value, self.cursor);
                }
                vec![WorkflowAction::Render]
            },
            KeyInput::Home => {
                self.cursor = 0;
                vec![WorkflowAction::Render]
            },
            KeyInput::End => {
                self.cursor = value.len();
                vec![WorkflowAction::Render]
            },
            KeyInput::Tab => {
                self.move_focus(workflow, 1);
                vec![WorkflowAction::Render]
            },
            KeyInput::BackTab => {
                self.move_focus(workflow, -1);
                vec![WorkflowAction::Render]
            },
            KeyInput::Enter => {
                // Triggers are disabled while the slot's request is in
                // flight; the controller's last-completed-wins rule is only
                // the backstop.
                if is_decrypt_field(field) {
                    if workflow.decrypt_pending() {
                        return vec![];
                    }
                    workflow.handle(WorkflowEvent::DecryptRequested)
                } else {
                    if workflow.encrypt_pending() {
                        return vec![];
                    }
                    workflow.handle(WorkflowEvent::EncryptRequested)
                }
            },
            KeyInput::Ctrl('a') => {
                self.focus = 0;
                self.cursor = 0;
                workflow.handle(WorkflowEvent::SelectAlgorithm(workflow.kind().next()))
            },
            KeyInput::Ctrl('l') => {
                self.cursor = 0;
                workflow.handle(WorkflowEvent::ClearRequested)
            },
            KeyInput::Ctrl('y') => workflow.handle(WorkflowEvent::CopyRequested(field)),
            KeyInput::Esc | KeyInput::Ctrl('c') => vec![WorkflowAction::Quit],
            KeyInput::Ctrl(_) => vec![],
        }
    }

    fn move_focus(&mut self, workflow: &Workflow, direction: isize) {
        let len = visible_fields(workflow).len();
        let current = self.focus % len;
        self.focus = (current as isize + direction).rem_euclid(len as isize) as usize;
        self.cursor = usize::MAX; // clamped to field end on next use
    }
}

fn prev_boundary(value: &str, cursor: usize) -> usize {
    let mut idx = cursor.saturating_sub(1);
    while idx > 0 && !value.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn next_boundary(value: &str, cursor: usize) -> usize {
    let mut idx = cursor.saturating_add(1).min(value.len());
    while idx < value.len() && !value.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use cipherpad_app::RequestStatus;

    use super::*;

    fn type_str(input: &mut InputState, workflow: &mut Workflow, text: &str) {
        for c in text.chars() {
            let _ = input.handle_key(KeyInput::Char(c), workflow);
        }
    }

    #[test]
    fn typing_updates_focused_field() {
        let mut workflow = Workflow::new(AlgorithmKind::Aes);
        let mut input = InputState::new();

        type_str(&mut input, &mut workflow, "hello");

        assert_eq!(workflow.state().input_text, "hello");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn tab_cycles_focus_through_visible_fields() {
        let mut workflow = Workflow::new(AlgorithmKind::Aes);
        let mut input = InputState::new();

        assert_eq!(input.focus(&workflow), Field::Input);
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        assert_eq!(input.focus(&workflow), Field::SecretKey);
        let _ = input.handle_key(KeyInput::BackTab, &mut workflow);
        let _ = input.handle_key(KeyInput::BackTab, &mut workflow);
        assert_eq!(input.focus(&workflow), Field::DecryptOutput);
    }

    #[test]
    fn sha256_focus_covers_input_and_output_only() {
        let mut workflow = Workflow::new(AlgorithmKind::Sha256);
        let mut input = InputState::new();

        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        assert_eq!(input.focus(&workflow), Field::Output);
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        assert_eq!(input.focus(&workflow), Field::Input);
    }

    #[test]
    fn typing_into_read_only_field_is_ignored() {
        let mut workflow = Workflow::new(AlgorithmKind::Sha256);
        let mut input = InputState::new();
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);

        let actions = input.handle_key(KeyInput::Char('x'), &mut workflow);

        assert!(actions.is_empty());
        assert_eq!(workflow.state().output_text, "");
    }

    #[test]
    fn backspace_removes_multibyte_chars_cleanly() {
        let mut workflow = Workflow::new(AlgorithmKind::Aes);
        let mut input = InputState::new();

        type_str(&mut input, &mut workflow, "héllo");
        let _ = input.handle_key(KeyInput::Left, &mut workflow);
        let _ = input.handle_key(KeyInput::Left, &mut workflow);
        let _ = input.handle_key(KeyInput::Left, &mut workflow);
        let _ = input.handle_key(KeyInput::Left, &mut workflow);
        let _ = input.handle_key(KeyInput::Backspace, &mut workflow);

        assert_eq!(workflow.state().input_text, "hllo");
    }

    #[test]
    fn enter_on_encrypt_field_triggers_encrypt() {
        let mut workflow = Workflow::new(AlgorithmKind::Aes);
        let mut input = InputState::new();
        type_str(&mut input, &mut workflow, "hello");
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        type_str(&mut input, &mut workflow, "mysecret");

        let actions = input.handle_key(KeyInput::Enter, &mut workflow);

        assert!(actions.iter().any(|a| matches!(a, WorkflowAction::SendEncrypt { .. })));
    }

    #[test]
    fn enter_on_decrypt_field_triggers_decrypt() {
        let mut workflow = Workflow::new(AlgorithmKind::Aes);
        let mut input = InputState::new();
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        assert_eq!(input.focus(&workflow), Field::CipherInput);
        type_str(&mut input, &mut workflow, "AbCd==");
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        type_str(&mut input, &mut workflow, "mysecret");
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        type_str(&mut input, &mut workflow, "0011");

        let actions = input.handle_key(KeyInput::Enter, &mut workflow);

        assert!(actions.iter().any(|a| matches!(a, WorkflowAction::SendDecrypt { .. })));
        assert_eq!(workflow.state().decrypt_status, RequestStatus::Pending);
    }

    #[test]
    fn ctrl_a_cycles_algorithm_and_resets_focus() {
        let mut workflow = Workflow::new(AlgorithmKind::Aes);
        let mut input = InputState::new();
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);

        let _ = input.handle_key(KeyInput::Ctrl('a'), &mut workflow);

        assert_eq!(workflow.kind(), AlgorithmKind::Rsa);
        assert_eq!(input.focus(&workflow), Field::Input);
    }

    #[test]
    fn cursor_clamps_after_clear() {
        let mut workflow = Workflow::new(AlgorithmKind::Aes);
        let mut input = InputState::new();
        type_str(&mut input, &mut workflow, "hello");

        let _ = input.handle_key(KeyInput::Ctrl('l'), &mut workflow);
        type_str(&mut input, &mut workflow, "x");

        assert_eq!(workflow.state().input_text, "x");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn esc_quits() {
        let mut workflow = Workflow::new(AlgorithmKind::Aes);
        let mut input = InputState::new();

        let actions = input.handle_key(KeyInput::Esc, &mut workflow);

        assert!(matches!(actions.as_slice(), [WorkflowAction::Quit]));
    }

    #[test]
    fn ctrl_y_copies_focused_field() {
        let mut workflow = Workflow::new(AlgorithmKind::Aes);
        let mut input = InputState::new();
        type_str(&mut input, &mut workflow, "hello");

        let actions = input.handle_key(KeyInput::Ctrl('y'), &mut workflow);

        assert!(matches!(actions.as_slice(), [
            WorkflowAction::CopyToClipboard(v),
            WorkflowAction::Render,
        ] if v == "hello"));
    }

    #[test]
    fn ctrl_y_on_empty_field_is_notice_only() {
        let mut workflow = Workflow::new(AlgorithmKind::Aes);
        let mut input = InputState::new();

        let actions = input.handle_key(KeyInput::Ctrl('y'), &mut workflow);

        assert!(matches!(actions.as_slice(), [WorkflowAction::Render]));
        assert!(workflow.current_notice().is_some());
    }

    #[test]
    fn iv_and_key_panels_are_reachable_for_copy() {
        let mut workflow = Workflow::new(AlgorithmKind::Aes);
        let mut input = InputState::new();
        type_str(&mut input, &mut workflow, "hello");
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        type_str(&mut input, &mut workflow, "mysecret");
        let _ = input.handle_key(KeyInput::Enter, &mut workflow);
        let _ = workflow.handle(WorkflowEvent::EncryptCompleted {
            generation: workflow.generation(),
            outcome: Ok(cipherpad_app::EncryptOutcome::Aes(cipherpad_client::AesEncrypted {
                ciphertext: "AbCd==".into(),
                iv: "0011".into(),
            })),
        });

        // IV panel is visible now; focus order is SecretKey, Output, Iv.
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        assert_eq!(input.focus(&workflow), Field::Iv);

        let actions = input.handle_key(KeyInput::Ctrl('y'), &mut workflow);

        assert!(matches!(actions.as_slice(), [
            WorkflowAction::CopyToClipboard(v),
            WorkflowAction::Render,
        ] if v == "0011"));
    }

    #[test]
    fn enter_while_encrypt_pending_is_ignored() {
        let mut workflow = Workflow::new(AlgorithmKind::Aes);
        let mut input = InputState::new();
        type_str(&mut input, &mut workflow, "hello");
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        type_str(&mut input, &mut workflow, "mysecret");

        let first = input.handle_key(KeyInput::Enter, &mut workflow);
        assert!(first.iter().any(|a| matches!(a, WorkflowAction::SendEncrypt { .. })));
        assert!(workflow.encrypt_pending());

        let second = input.handle_key(KeyInput::Enter, &mut workflow);

        assert!(second.is_empty());
    }

    #[test]
    fn enter_while_decrypt_pending_is_ignored() {
        let mut workflow = Workflow::new(AlgorithmKind::Aes);
        let mut input = InputState::new();
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        type_str(&mut input, &mut workflow, "AbCd==");
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        type_str(&mut input, &mut workflow, "mysecret");
        let _ = input.handle_key(KeyInput::Tab, &mut workflow);
        type_str(&mut input, &mut workflow, "0011");

        let first = input.handle_key(KeyInput::Enter, &mut workflow);
        assert!(first.iter().any(|a| matches!(a, WorkflowAction::SendDecrypt { .. })));

        let second = input.handle_key(KeyInput::Enter, &mut workflow);

        assert!(second.is_empty());
        assert!(workflow.decrypt_pending());
    }
}
