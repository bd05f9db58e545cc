//! Algorithm tabs.

use cipherpad_app::{AlgorithmKind, Workflow};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
};

/// Render the algorithm tab bar.
pub fn render(frame: &mut Frame, workflow: &Workflow, area: Rect) {
    let selected =
        AlgorithmKind::ALL.iter().position(|k| *k == workflow.kind()).unwrap_or_default();

    let tabs = Tabs::new(AlgorithmKind::ALL.iter().map(|kind| kind.label()))
        .select(selected)
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Cipherpad (Ctrl+A: algorithm)"));

    frame.render_widget(tabs, area);
}
