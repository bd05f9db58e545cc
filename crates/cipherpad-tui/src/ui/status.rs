//! Status bar.
//!
//! Displays the active algorithm, pending request indicators, and the
//! currently visible notice.

use cipherpad_app::{NoticeLevel, Workflow};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the status bar.
pub fn render(frame: &mut Frame, workflow: &Workflow, area: Rect) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            workflow.kind().label(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ];

    if workflow.encrypt_pending() {
        let verb = if workflow.kind().supports_decrypt() { "Encrypting..." } else { "Hashing..." };
        spans.push(Span::styled(format!(" | {verb}"), Style::default().fg(Color::Yellow)));
    }
    if workflow.decrypt_pending() {
        spans.push(Span::styled(" | Decrypting...", Style::default().fg(Color::Yellow)));
    }

    if let Some(notice) = workflow.current_notice() {
        let color = match notice.level {
            NoticeLevel::Info => Color::Green,
            NoticeLevel::Error => Color::Red,
        };
        spans.push(Span::styled(format!(" | {}", notice.text), Style::default().fg(color)));
    } else {
        spans.push(Span::styled(
            " | Tab: focus  Enter: run  Ctrl+Y: copy  Ctrl+L: clear  Esc: quit",
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
