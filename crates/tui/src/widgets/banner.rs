//! One-line banners above and below the body: the error banner and the
//! success notice.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Renders the error banner.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tasklet_tui::widgets::render_error_banner;
///
/// let area = Rect::new(0, 0, 60, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_error_banner("Failed to load tasks", area, &mut buf);
/// ```
pub fn render_error_banner(message: &str, area: Rect, buf: &mut Buffer) {
    let style = Style::default().fg(Color::White).bg(Color::Red);
    let line = Line::from(vec![
        Span::styled(format!(" ✗ {message}"), style.add_modifier(Modifier::BOLD)),
        Span::styled("  (Esc to dismiss)", style),
    ]);

    Paragraph::new(line).style(style).render(area, buf);
}

/// Renders the success notice.
pub fn render_notice(text: &str, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(Span::styled(
        format!(" ✓ {text}"),
        Style::default().fg(Color::Green),
    )))
    .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn error_banner_text() {
        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);

        render_error_banner("Failed to create task", area, &mut buf);

        insta::assert_snapshot!(buffer_to_string(&buf).trim(), @"✗ Failed to create task  (Esc to dismiss)");
    }

    #[test]
    fn error_banner_fills_row_with_red() {
        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);

        render_error_banner("x", area, &mut buf);

        let last = buf.cell((49, 0)).expect("cell should exist");
        assert_eq!(last.bg, Color::Red);
    }

    #[test]
    fn notice_text() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);

        render_notice("Task added successfully!", area, &mut buf);

        insta::assert_snapshot!(buffer_to_string(&buf).trim(), @"✓ Task added successfully!");
    }
}
