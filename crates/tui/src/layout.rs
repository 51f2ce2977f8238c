//! Centralized layout measurements for the TUI.
//!
//! These constants are shared by the app's frame layout and the widgets, so
//! the size checks and the rendering agree.

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of each task card in rows.
///
/// Two border rows, the title line and the description line.
pub const TASK_CARD_HEIGHT: u16 = 4;

/// Height of the title input box, borders included.
pub const TITLE_INPUT_HEIGHT: u16 = 3;

/// Smallest height of the description input box, borders included.
pub const DESCRIPTION_MIN_HEIGHT: u16 = 3;

/// Share of the body width given to the creation form.
pub const FORM_WIDTH_PERCENT: u16 = 40;

/// Minimum terminal height for useful rendering, without the header.
///
/// The form needs its outer borders (2 rows), the title box, the description
/// box and the submit line; the status bar takes one more row.
pub const MIN_HEIGHT: u16 =
    2 + TITLE_INPUT_HEIGHT + DESCRIPTION_MIN_HEIGHT + 1 + STATUS_BAR_HEIGHT;

/// Minimum terminal height for rendering with header.
///
/// Between `MIN_HEIGHT` and this height the header is hidden to give its
/// rows to the form and the list.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// Leaves room for the status bar hints and a readable task title next to
/// the form.
pub const MIN_WIDTH: u16 = 60;
