//! Encrypt column.
//!
//! Input and key fields, the encrypted (or hashed) output, and the
//! algorithm-dependent panels: IV for AES, key pair for RSA.

use cipherpad_app::{AlgorithmKind, Field, Workflow};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
};

use crate::InputState;

use super::render_fields;

const FIELD_HEIGHT: u16 = 3;
const KEY_PANEL_HEIGHT: u16 = 4;

/// Render the encrypt column.
pub fn render(frame: &mut Frame, workflow: &Workflow, input: &InputState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(workflow.kind().encrypt_verb());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut fields: Vec<(Field, Constraint)> = vec![(Field::Input, Constraint::Min(FIELD_HEIGHT))];

    if workflow.kind() == AlgorithmKind::Aes {
        fields.push((Field::SecretKey, Constraint::Length(FIELD_HEIGHT)));
    }

    fields.push((Field::Output, Constraint::Min(FIELD_HEIGHT)));

    if workflow.show_iv_panel() {
        fields.push((Field::Iv, Constraint::Length(FIELD_HEIGHT)));
    }
    if workflow.show_key_panels() {
        fields.push((Field::PublicKey, Constraint::Length(KEY_PANEL_HEIGHT)));
        fields.push((Field::PrivateKey, Constraint::Length(KEY_PANEL_HEIGHT)));
    }

    render_fields(frame, workflow, input, &fields, inner);
}
