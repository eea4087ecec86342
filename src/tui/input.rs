//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages.
//!
//! Plain printable keys feed the code editor, so every command is bound to a
//! control chord or function key to stay typeable.

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::{KeyCode, KeyModifiers};

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.key {
            KeyCode::Char('r') => Some(AppMsg::SubmitRequested),
            KeyCode::Char('l') => Some(AppMsg::CycleLanguage),
            KeyCode::Char('u') => Some(AppMsg::ClearCode),
            KeyCode::Char('q' | 'c') => Some(AppMsg::Quit),
            _ => None,
        };
    }

    match key.key {
        KeyCode::Char(ch) => Some(AppMsg::CharTyped(ch)),
        KeyCode::Enter => Some(AppMsg::NewlineTyped),
        KeyCode::Backspace => Some(AppMsg::BackspaceTyped),
        KeyCode::Tab => Some(AppMsg::CharTyped('\t')),
        KeyCode::Up => Some(AppMsg::ScrollUp),
        KeyCode::Down => Some(AppMsg::ScrollDown),
        KeyCode::PageUp => Some(AppMsg::ScrollPageUp),
        KeyCode::PageDown => Some(AppMsg::ScrollPageDown),
        KeyCode::F(1) => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[rstest]
    #[case::submit(KeyCode::Char('r'), AppMsg::SubmitRequested)]
    #[case::cycle_language(KeyCode::Char('l'), AppMsg::CycleLanguage)]
    #[case::clear(KeyCode::Char('u'), AppMsg::ClearCode)]
    #[case::quit(KeyCode::Char('q'), AppMsg::Quit)]
    #[case::interrupt(KeyCode::Char('c'), AppMsg::Quit)]
    fn control_chords_map_to_commands(#[case] code: KeyCode, #[case] expected: AppMsg) {
        let message = map_key_to_message(&key(code, KeyModifiers::CONTROL));
        assert!(matches!(message, Some(ref msg) if std::mem::discriminant(msg) == std::mem::discriminant(&expected)));
    }

    #[test]
    fn plain_characters_feed_the_editor() {
        let message = map_key_to_message(&key(KeyCode::Char('r'), KeyModifiers::NONE));
        assert!(matches!(message, Some(AppMsg::CharTyped('r'))));
    }

    #[test]
    fn shifted_characters_feed_the_editor() {
        let message = map_key_to_message(&key(KeyCode::Char('R'), KeyModifiers::SHIFT));
        assert!(matches!(message, Some(AppMsg::CharTyped('R'))));
    }

    #[test]
    fn enter_and_backspace_edit_the_buffer() {
        assert!(matches!(
            map_key_to_message(&key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(AppMsg::NewlineTyped)
        ));
        assert!(matches!(
            map_key_to_message(&key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(AppMsg::BackspaceTyped)
        ));
    }

    #[test]
    fn arrows_scroll_the_report_pane() {
        assert!(matches!(
            map_key_to_message(&key(KeyCode::Up, KeyModifiers::NONE)),
            Some(AppMsg::ScrollUp)
        ));
        assert!(matches!(
            map_key_to_message(&key(KeyCode::PageDown, KeyModifiers::NONE)),
            Some(AppMsg::ScrollPageDown)
        ));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert!(map_key_to_message(&key(KeyCode::Esc, KeyModifiers::NONE)).is_none());
        assert!(
            map_key_to_message(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)).is_none()
        );
    }
}
