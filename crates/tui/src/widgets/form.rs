//! Creation form widget.
//!
//! Draws the title and description inputs of a [`TaskForm`] and the submit
//! control below them.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use tasklet_protocol::DraftField;

use crate::form::TaskForm;
use crate::state::Focus;
use crate::layout::{DESCRIPTION_MIN_HEIGHT, TITLE_INPUT_HEIGHT};

/// Marker drawn after the text of the focused field.
const CURSOR: &str = "▏";

/// Label of the submit control.
const SUBMIT_LABEL: &str = "[ Add Task ]";

/// Renders the creation form.
///
/// The part of the form matching `focus` is highlighted. Nothing is when the
/// focus is on the task list.
///
/// # Layout
///
/// ```text
/// ╭ New Task ──────────────────╮
/// │╭ Title ───────────────────╮│
/// ││Buy milk▏                 ││
/// │╰──────────────────────────╯│
/// │╭ Description ─────────────╮│
/// ││                          ││
/// │╰──────────────────────────╯│
/// │        [ Add Task ]        │
/// ╰────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tasklet_tui::Focus;
/// use tasklet_tui::form::TaskForm;
/// use tasklet_tui::widgets::render_form;
///
/// let form = TaskForm::new();
/// let area = Rect::new(0, 0, 30, 12);
/// let mut buf = Buffer::empty(area);
///
/// render_form(&form, Focus::Title, area, &mut buf);
/// ```
pub fn render_form(form: &TaskForm, focus: Focus, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(Span::styled(
            " New Task ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focus.is_form() {
            Color::Cyan
        } else {
            Color::DarkGray
        }));

    let inner = block.inner(area);
    block.render(area, buf);

    let [title_area, description_area, submit_area] = Layout::vertical([
        Constraint::Length(TITLE_INPUT_HEIGHT),
        Constraint::Min(DESCRIPTION_MIN_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(inner);

    for (field, field_area) in [
        (DraftField::Title, title_area),
        (DraftField::Description, description_area),
    ] {
        render_input(form, field, focus.field() == Some(field), field_area, buf);
    }

    render_submit_line(form, focus == Focus::Submit, submit_area, buf);
}

fn render_input(form: &TaskForm, field: DraftField, is_focused: bool, area: Rect, buf: &mut Buffer) {
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    block.render(area, buf);

    let value = form.draft().field(field);
    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|line| Line::from(tail(line, usize::from(inner.width).saturating_sub(1))))
        .collect();
    if is_focused && let Some(last) = lines.last_mut() {
        last.push_span(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
    }

    // Keep the last lines, where typing happens, on screen.
    let hidden = lines.len().saturating_sub(usize::from(inner.height));
    Paragraph::new(lines.split_off(hidden)).render(inner, buf);
}

fn render_submit_line(form: &TaskForm, is_focused: bool, area: Rect, buf: &mut Buffer) {
    let line = if form.submitting() {
        Line::from(Span::styled(
            "Adding...",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        let mut style = if form.can_submit() {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if is_focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Line::from(Span::styled(SUBMIT_LABEL, style))
    };

    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(area, buf);
}

/// Returns the last `max_width` characters of `s`.
fn tail(s: &str, max_width: usize) -> String {
    let len = s.chars().count();
    s.chars().skip(len.saturating_sub(max_width)).collect()
}
