//! Task card rendering widget.
//!
//! A card shows a checkbox, the task title and the first line of its
//! description inside a bordered box. The border color reflects selection and
//! whether a completion request is in flight.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tasklet_protocol::Task;

/// How a card is drawn, besides the task itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardStatus {
    /// The card is the list selection.
    pub selected: bool,
    /// A completion request for the task is in flight.
    pub completing: bool,
}

/// Returns the checkbox shown in front of the title.
///
/// # Examples
///
/// ```
/// use tasklet_protocol::Task;
/// use tasklet_tui::widgets::task_card::{CardStatus, checkbox};
///
/// let task = Task::new(1, "Buy milk", "");
/// assert_eq!(checkbox(&task, CardStatus::default()), "[ ]");
/// assert_eq!(checkbox(&task.completed(), CardStatus::default()), "[x]");
/// ```
#[must_use]
pub fn checkbox(task: &Task, status: CardStatus) -> &'static str {
    if task.completed {
        "[x]"
    } else if status.completing {
        "[~]"
    } else {
        "[ ]"
    }
}

/// Renders a task card to the buffer.
///
/// # Layout
///
/// ```text
/// ┌──────────────────────────────┐
/// │[ ] Buy milk                  │
/// │2 litres, semi-skimmed        │
/// └─────────────2025-01-15 10:30─┘
/// ```
///
/// The creation time is only drawn when the server sent one.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tasklet_protocol::Task;
/// use tasklet_tui::widgets::{CardStatus, render_task_card};
///
/// let task = Task::new(1, "Buy milk", "2 litres");
/// let area = Rect::new(0, 0, 30, 4);
/// let mut buf = Buffer::empty(area);
///
/// render_task_card(&task, CardStatus::default(), area, &mut buf);
/// ```
pub fn render_task_card(task: &Task, status: CardStatus, area: Rect, buf: &mut Buffer) {
    if area.width < 8 || area.height < 3 {
        return;
    }

    let border_color = if status.selected {
        Color::Cyan
    } else if status.completing {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let mut title_style = if status.selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    if task.completed {
        title_style = title_style
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT);
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let mark = checkbox(task, status);
    let title = truncate_string(&task.title, inner_width.saturating_sub(mark.len() + 1));
    let description = task.description.lines().next().unwrap_or_default();

    let content = vec![
        Line::from(vec![
            Span::styled(mark, Style::default().fg(border_color)),
            Span::raw(" "),
            Span::styled(title, title_style),
        ]),
        Line::from(Span::styled(
            truncate_string(description, inner_width),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if let Some(created_at) = task.created_at {
        block = block.title_bottom(
            Line::from(Span::styled(
                created_at.format("%Y-%m-%d %H:%M").to_string(),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        );
    }

    Paragraph::new(content).block(block).render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
pub(crate) fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
