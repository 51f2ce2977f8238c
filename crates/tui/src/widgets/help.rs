//! Help overlay widget.
//!
//! This module provides the help overlay that lists the keybindings of each
//! area when the user presses `?` on the task list or `F1` anywhere.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// Width of the key column, indentation included.
const KEY_COLUMN: usize = 17;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 36;

/// Sections of the overlay as `(heading, [(key, action)])`.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Form",
        &[
            ("Tab", "Next area"),
            ("Shift+Tab", "Previous area"),
            ("Enter", "Add task"),
            ("Shift+Enter", "New line"),
        ],
    ),
    (
        "Task list",
        &[
            ("↑ ↓", "Select task"),
            ("Enter Space d", "Mark done"),
            ("r", "Reload tasks"),
        ],
    ),
    (
        "Anywhere",
        &[
            ("Esc", "Dismiss message"),
            ("F1", "Toggle help"),
            ("Ctrl+C", "Quit"),
        ],
    ),
];

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is rendered on top of the existing content, clearing the area
/// behind it first.
///
/// # Layout
///
/// ```text
/// ╭ Help ────────────────────────────╮
/// │                                  │
/// │  Form                            │
/// │  Tab            Next area        │
/// │  ...                             │
/// │                                  │
/// │  Press any key to close          │
/// ╰──────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tasklet_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let lines = build_help_lines();
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup_area = centered_rect(HELP_WIDTH, height, area);

    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(lines)
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = Vec::new();
    for (heading, bindings) in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {heading}"), header_style)));
        for (key, action) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<KEY_COLUMN$}", format!("  {key}")), key_style),
                Span::styled(*action, text_style),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
