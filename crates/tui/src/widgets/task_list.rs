//! Recent task list widget.
//!
//! Renders the visible projection of a [`TaskListState`] as a column of task
//! cards, or a placeholder when there is nothing to show.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::task_card::{CardStatus, render_task_card};
use crate::layout::TASK_CARD_HEIGHT;
use crate::task_list::TaskListState;

/// Placeholder shown while the first load is in flight.
pub const LOADING_TEXT: &str = "Loading tasks...";

/// Placeholder shown when no incomplete task is left.
pub const EMPTY_TEXT: &str = "No tasks yet!";

/// Renders the recent task list.
///
/// # Arguments
///
/// * `list` - The task list state; only its visible projection is drawn
/// * `selected` - Index of the selected task within the visible tasks
/// * `is_focused` - Whether the list has the keyboard focus
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tasklet_protocol::dummy::dummy_tasks;
/// use tasklet_tui::task_list::TaskListState;
/// use tasklet_tui::widgets::render_task_list;
///
/// let list = TaskListState::with_tasks(dummy_tasks());
/// let area = Rect::new(0, 0, 40, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_task_list(&list, Some(0), true, area, &mut buf);
/// ```
pub fn render_task_list(
    list: &TaskListState,
    selected: Option<usize>,
    is_focused: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let visible = list.visible();

    let (border_style, title_style) = if is_focused {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::White),
        )
    };

    let mut title = vec![Span::styled(
        format!(" Recent Tasks ({}) ", visible.len()),
        title_style,
    )];
    if list.fetching() && !visible.is_empty() {
        title.push(Span::styled(
            "refreshing ",
            Style::default().fg(Color::Yellow),
        ));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let inner_area = block.inner(area);
    block.render(area, buf);

    if visible.is_empty() {
        let text = if list.fetching() {
            LOADING_TEXT
        } else {
            EMPTY_TEXT
        };
        render_placeholder(text, inner_area, buf);
        return;
    }

    let fitting = (inner_area.height / TASK_CARD_HEIGHT).max(1) as usize;
    let scroll_offset = calculate_scroll_offset(selected, visible.len(), fitting);

    let card_count = visible.len().min(fitting);
    let mut constraints: Vec<Constraint> = (0..card_count)
        .map(|_| Constraint::Length(TASK_CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let card_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    for (i, card_area) in card_areas.iter().take(card_count).enumerate() {
        let idx = scroll_offset + i;
        let Some(task) = visible.get(idx) else {
            break;
        };
        let status = CardStatus {
            selected: is_focused && selected == Some(idx),
            completing: list.is_completing(&task.id),
        };
        render_task_card(task, status, *card_area, buf);
    }
}

fn render_placeholder(text: &str, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
    .render(area, buf);
}

/// Calculates the scroll offset that keeps the selected task visible.
fn calculate_scroll_offset(selected: Option<usize>, total: usize, fitting: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };

    if total <= fitting {
        return 0;
    }

    let max_offset = total.saturating_sub(fitting);

    if selected < fitting / 2 {
        0
    } else {
        (selected.saturating_sub(fitting / 2)).min(max_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task_list::visible_tasks;
    use crate::test_utils::buffer_to_string;
    use tasklet_protocol::dummy::dummy_tasks;
    use tasklet_protocol::{Task, TaskId};

    #[test]
    fn loading_placeholder_when_empty_and_loading() {
        let mut list = TaskListState::new();
        list.begin_load();
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);

        render_task_list(&list, None, false, area, &mut buf);

        insta::assert_snapshot!(buffer_to_string(&buf), @r"
        ╭ Recent Tasks (0) ──────────╮
        │Loading tasks...            │
        │                            │
        │                            │
        │                            │
        ╰────────────────────────────╯
        ");
    }

    #[test]
    fn empty_placeholder_when_everything_is_completed() {
        let list = TaskListState::with_tasks(vec![Task::new(1, "done", "").completed()]);
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);

        render_task_list(&list, None, false, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains(EMPTY_TEXT));
        assert!(!content.contains("done"));
    }

    #[test]
    fn only_visible_tasks_are_drawn() {
        let tasks = dummy_tasks();
        let list = TaskListState::with_tasks(tasks.clone());
        let area = Rect::new(0, 0, 50, 24);
        let mut buf = Buffer::empty(area);

        render_task_list(&list, None, false, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Recent Tasks (5)"));
        let shown = visible_tasks(&tasks);
        for task in &tasks {
            assert_eq!(
                content.contains(&task.title),
                shown.contains(&task),
                "task {} drawn state",
                task.id
            );
        }
        // Incomplete, but past the first five.
        assert!(!content.contains("Clean the garage"));
    }

    #[test]
    fn refreshing_marker_with_tasks_on_screen() {
        let mut list = TaskListState::with_tasks(vec![Task::new(1, "a", "")]);
        list.begin_load();
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);

        render_task_list(&list, None, false, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("refreshing"));
        assert!(!content.contains(LOADING_TEXT));
    }

    #[test]
    fn completing_task_shows_pending_checkbox() {
        let mut list = TaskListState::with_tasks(vec![Task::new(1, "a", "")]);
        assert!(list.begin_complete(&TaskId::from(1)));
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);

        render_task_list(&list, Some(0), true, area, &mut buf);

        assert!(buffer_to_string(&buf).contains("[~] a"));
    }

    #[test]
    fn scroll_offset_no_selection() {
        assert_eq!(calculate_scroll_offset(None, 5, 2), 0);
    }

    #[test]
    fn scroll_offset_all_fit() {
        assert_eq!(calculate_scroll_offset(Some(4), 5, 5), 0);
    }

    #[test]
    fn scroll_offset_keeps_selection_on_screen() {
        assert_eq!(calculate_scroll_offset(Some(0), 5, 2), 0);
        assert_eq!(calculate_scroll_offset(Some(3), 5, 2), 2);
        assert_eq!(calculate_scroll_offset(Some(4), 5, 2), 3);
    }
}
