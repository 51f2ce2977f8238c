//! Status bar rendering widget.
//!
//! The footer lists the keys that do something in the focused area.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::state::Focus;

/// Returns the `(key, action)` hints for `focus`.
#[must_use]
pub fn hints(focus: Focus) -> &'static [(&'static str, &'static str)] {
    match focus {
        Focus::Title => &[
            ("Tab", "Next field"),
            ("Enter", "Add task"),
            ("F1", "Help"),
            ("Ctrl+C", "Quit"),
        ],
        Focus::Description => &[
            ("Tab", "Next field"),
            ("Enter", "Add task"),
            ("Shift+Enter", "New line"),
            ("F1", "Help"),
            ("Ctrl+C", "Quit"),
        ],
        Focus::Submit => &[
            ("Enter", "Add task"),
            ("Tab", "Task list"),
            ("F1", "Help"),
            ("Ctrl+C", "Quit"),
        ],
        Focus::List => &[
            ("↑↓", "Select"),
            ("Enter", "Done"),
            ("r", "Reload"),
            ("Tab", "Form"),
            ("?", "Help"),
            ("Ctrl+C", "Quit"),
        ],
    }
}

/// Renders the status bar with keybinding hints for the focused area.
///
/// # Layout
///
/// ```text
///  ↑↓ Select  Enter Done  r Reload  Tab Form  ? Help  Ctrl+C Quit
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tasklet_tui::Focus;
/// use tasklet_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(Focus::List, area, &mut buf);
/// ```
pub fn render_status_bar(focus: Focus, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints(focus).iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {action}"), text_style));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}
