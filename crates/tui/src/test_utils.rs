//! Test helpers shared by the rendering tests.

use ratatui::buffer::Buffer;

/// Converts a ratatui [`Buffer`] to one line of text per row.
///
/// Trailing spaces are trimmed from each row so snapshots stay readable.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}
