//! UI rendering.
//!
//! Rendering functions that convert Workflow state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod decrypt;
mod encrypt;
mod status;
mod tabs;

use cipherpad_app::{Field, Workflow};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::InputState;

/// Render the entire UI.
pub fn render(frame: &mut Frame, workflow: &Workflow, input: &InputState) {
    const TABS_HEIGHT: u16 = 3;
    const BODY_MIN_HEIGHT: u16 = 10;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TABS_HEIGHT),
            Constraint::Min(BODY_MIN_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [tabs_area, body_area, status_area] = chunks.as_ref() else {
        return;
    };

    tabs::render(frame, workflow, *tabs_area);
    render_body(frame, workflow, input, *body_area);
    status::render(frame, workflow, *status_area);
}

/// Render the main body (encrypt column, plus decrypt column when available).
fn render_body(frame: &mut Frame, workflow: &Workflow, input: &InputState, area: Rect) {
    if !workflow.decrypt_available() {
        encrypt::render(frame, workflow, input, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let [encrypt_area, decrypt_area] = chunks.as_ref() else {
        return;
    };

    encrypt::render(frame, workflow, input, *encrypt_area);
    decrypt::render(frame, workflow, input, *decrypt_area);
}

/// Render a stack of labeled field boxes into `area`.
fn render_fields(
    frame: &mut Frame,
    workflow: &Workflow,
    input: &InputState,
    fields: &[(Field, Constraint)],
    area: Rect,
) {
    let constraints: Vec<Constraint> = fields.iter().map(|(_, c)| *c).collect();
    let areas =
        Layout::default().direction(Direction::Vertical).constraints(constraints).split(area);

    for ((field, _), rect) in fields.iter().zip(areas.iter()) {
        render_field(frame, workflow, input, *field, *rect);
    }
}

/// Render a single bordered field with its label and value.
fn render_field(frame: &mut Frame, workflow: &Workflow, input: &InputState, field: Field, area: Rect) {
    const BORDER_WIDTH: u16 = 1;

    let focused = input.focus(workflow) == field;
    let value = workflow.state().field(field);

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else if field.is_editable() {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block =
        Block::default().borders(Borders::ALL).border_style(border_style).title(field.label());
    let paragraph = Paragraph::new(value).style(Style::default().fg(Color::White)).block(block);

    frame.render_widget(paragraph, area);

    // Text cursor only makes sense in fields that accept typing.
    if focused && field.is_editable() {
        let chars_before_cursor = value[..input.cursor().min(value.len())].chars().count() as u16;
        let available_width = area.width.saturating_sub(2 * BORDER_WIDTH);
        let cursor_offset = chars_before_cursor.min(available_width.saturating_sub(1));

        let cursor_x = area.x.saturating_add(BORDER_WIDTH).saturating_add(cursor_offset);
        let cursor_y = area.y.saturating_add(BORDER_WIDTH);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}
