//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. The same key means different things depending
//! on whether the form or the task list has the focus.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tasklet_protocol::Message;

use crate::state::Focus;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to an application message for the given focus.
///
/// Only key presses are mapped; releases, mouse and resize events yield
/// `None`.
#[must_use]
pub fn event_to_message(event: &Event, focus: Focus) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => key_to_message(*key, focus),
        _ => None,
    }
}

/// Converts a key event to an application message.
///
/// # Key Bindings
///
/// Everywhere:
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Tab` / `Shift+Tab` | Next / previous focus area |
/// | `F1` | Toggle help |
/// | `Esc` | Dismiss banner or notice, or return to the form |
///
/// In the form:
///
/// | Key | Action |
/// |-----|--------|
/// | `Enter` | Submit |
/// | `Shift+Enter`, `Alt+Enter`, `Ctrl+J` | Line break (description only) |
/// | `Backspace` | Delete last character |
/// | any character | Type |
///
/// On the form's submit control:
///
/// | Key | Action |
/// |-----|--------|
/// | `Enter`, `Space` | Submit |
///
/// In the task list:
///
/// | Key | Action |
/// |-----|--------|
/// | `Up` / `Down` | Select previous / next task |
/// | `Enter`, `Space`, `d` | Mark selected task done |
/// | `r` | Reload tasks |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent, focus: Focus) -> Option<Message> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && matches!(key.code, KeyCode::Char('c' | 'C')) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Tab => return Some(Message::FocusNext),
        KeyCode::BackTab => return Some(Message::FocusPrev),
        KeyCode::F(1) => return Some(Message::ToggleHelp),
        KeyCode::Esc => return Some(Message::Escape),
        _ => {}
    }

    match focus {
        Focus::Title | Focus::Description => form_key_to_message(key),
        Focus::Submit => submit_key_to_message(key),
        Focus::List => list_key_to_message(key),
    }
}

fn form_key_to_message(key: KeyEvent) -> Option<Message> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let line_break = key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT);

    match key.code {
        KeyCode::Enter if line_break => Some(Message::Newline),
        KeyCode::Enter if key.modifiers.is_empty() => Some(Message::Submit),
        KeyCode::Char('j') if ctrl => Some(Message::Newline),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Message::Input { ch })
        }
        _ => None,
    }
}

fn submit_key_to_message(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') if key.modifiers.is_empty() => Some(Message::Submit),
        _ => None,
    }
}

fn list_key_to_message(key: KeyEvent) -> Option<Message> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::Enter | KeyCode::Char(' ' | 'd') => Some(Message::CompleteSelected),
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        for focus in [Focus::Title, Focus::Description, Focus::Submit, Focus::List] {
            assert_eq!(
                key_to_message(
                    make_key_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL),
                    focus
                ),
                Some(Message::Quit)
            );
        }
    }

    #[test]
    fn tab_cycles_focus() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Tab), Focus::Title),
            Some(Message::FocusNext)
        );
        assert_eq!(
            key_to_message(
                make_key_with_modifiers(KeyCode::BackTab, KeyModifiers::SHIFT),
                Focus::List
            ),
            Some(Message::FocusPrev)
        );
    }

    #[test]
    fn f1_toggles_help_even_while_typing() {
        for focus in [Focus::Title, Focus::Description, Focus::List] {
            assert_eq!(
                key_to_message(make_key(KeyCode::F(1)), focus),
                Some(Message::ToggleHelp)
            );
        }
    }

    #[test]
    fn plain_enter_submits_from_form() {
        for focus in [Focus::Title, Focus::Description] {
            assert_eq!(
                key_to_message(make_key(KeyCode::Enter), focus),
                Some(Message::Submit)
            );
        }
    }

    #[test]
    fn submit_control_is_pressed_with_enter_or_space() {
        for code in [KeyCode::Enter, KeyCode::Char(' ')] {
            assert_eq!(
                key_to_message(make_key(code), Focus::Submit),
                Some(Message::Submit)
            );
        }
        assert_eq!(key_to_message(make_key(KeyCode::Char('a')), Focus::Submit), None);
        assert_eq!(
            key_to_message(
                make_key_with_modifiers(KeyCode::Enter, KeyModifiers::SHIFT),
                Focus::Submit
            ),
            None
        );
    }

    #[test]
    fn modified_enter_is_a_line_break() {
        for modifiers in [KeyModifiers::SHIFT, KeyModifiers::ALT] {
            assert_eq!(
                key_to_message(
                    make_key_with_modifiers(KeyCode::Enter, modifiers),
                    Focus::Description
                ),
                Some(Message::Newline)
            );
        }
        assert_eq!(
            key_to_message(
                make_key_with_modifiers(KeyCode::Char('j'), KeyModifiers::CONTROL),
                Focus::Description
            ),
            Some(Message::Newline)
        );
    }

    #[test]
    fn ctrl_enter_does_nothing() {
        assert_eq!(
            key_to_message(
                make_key_with_modifiers(KeyCode::Enter, KeyModifiers::CONTROL),
                Focus::Title
            ),
            None
        );
    }

    #[test]
    fn typing_in_form() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('r')), Focus::Title),
            Some(Message::Input { ch: 'r' })
        );
        assert_eq!(
            key_to_message(
                make_key_with_modifiers(KeyCode::Char('R'), KeyModifiers::SHIFT),
                Focus::Title
            ),
            Some(Message::Input { ch: 'R' })
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?')), Focus::Description),
            Some(Message::Input { ch: '?' })
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Backspace), Focus::Title),
            Some(Message::Backspace)
        );
    }

    #[test]
    fn list_actions() {
        let cases = [
            (KeyCode::Up, Message::NavigateUp),
            (KeyCode::Down, Message::NavigateDown),
            (KeyCode::Enter, Message::CompleteSelected),
            (KeyCode::Char(' '), Message::CompleteSelected),
            (KeyCode::Char('d'), Message::CompleteSelected),
            (KeyCode::Char('r'), Message::Refresh),
            (KeyCode::Char('?'), Message::ToggleHelp),
            (KeyCode::Esc, Message::Escape),
        ];
        for (code, expected) in cases {
            assert_eq!(key_to_message(make_key(code), Focus::List), Some(expected));
        }
    }

    #[test]
    fn unmapped_list_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('x')), Focus::List), None);
        assert_eq!(key_to_message(make_key(KeyCode::Backspace), Focus::List), None);
    }

    #[test]
    fn releases_and_resizes_are_ignored() {
        let mut release = make_key(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        assert_eq!(event_to_message(&Event::Key(release), Focus::Title), None);
        assert_eq!(event_to_message(&Event::Resize(80, 24), Focus::Title), None);
    }

    #[test]
    fn event_to_message_handles_key_presses() {
        let event = Event::Key(make_key(KeyCode::Char('d')));
        assert_eq!(
            event_to_message(&event, Focus::List),
            Some(Message::CompleteSelected)
        );
    }
}
