//! Decrypt column.
//!
//! Ciphertext input, the key material the algorithm needs, and the decrypted
//! output. Not rendered for SHA-256.

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

/// Render the decrypt column.
pub fn render(frame: &mut Frame, workflow: &Workflow, input: &InputState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("Decrypt");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut fields: Vec<(Field, Constraint)> =
        vec![(Field::CipherInput, Constraint::Min(FIELD_HEIGHT))];

    match workflow.kind() {
        AlgorithmKind::Aes => {
            fields.push((Field::DecryptSecretKey, Constraint::Length(FIELD_HEIGHT)));
            fields.push((Field::DecryptIv, Constraint::Length(FIELD_HEIGHT)));
        },
        AlgorithmKind::Rsa => {
            fields.push((Field::DecryptPrivateKey, Constraint::Length(FIELD_HEIGHT)));
        },
        AlgorithmKind::Sha256 => {},
    }

    fields.push((Field::DecryptOutput, Constraint::Min(FIELD_HEIGHT)));

    render_fields(frame, workflow, input, &fields, inner);
}
