//! Mapping from terminal events to quiz actions.
//!
//! Keys only matter on the results screen (`r` restarts, `q` quits); Ctrl+C
//! quits at any time. Everything else is driven by left mouse clicks, which
//! are handed to the view for hit testing.

use crate::types::{Phase, QuizAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to a quiz action for the current phase.
pub fn handle_key_event(key: KeyEvent, phase: Phase) -> Option<QuizAction> {
    if phase != Phase::Finished {
        return None;
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(QuizAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent, phase: Phase) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    phase == Phase::Finished && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

/// Terminal cell of a left-button press, if this event is one.
pub fn click_position(event: MouseEvent) -> Option<(u16, u16)> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((event.column, event.row)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_restart_only_when_finished() {
        for key in [KeyCode::Char('r'), KeyCode::Char('R')] {
            assert_eq!(
                handle_key_event(KeyEvent::from(key), Phase::Finished),
                Some(QuizAction::Restart)
            );
            assert_eq!(handle_key_event(KeyEvent::from(key), Phase::Answering), None);
            assert_eq!(handle_key_event(KeyEvent::from(key), Phase::Feedback), None);
        }
    }

    #[test]
    fn test_other_keys_do_nothing() {
        for key in [KeyCode::Enter, KeyCode::Char(' '), KeyCode::Left, KeyCode::Char('1')] {
            assert_eq!(handle_key_event(KeyEvent::from(key), Phase::Finished), None);
            assert_eq!(handle_key_event(KeyEvent::from(key), Phase::Answering), None);
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q')), Phase::Finished));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q')), Phase::Finished));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q')), Phase::Answering));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q')), Phase::Feedback));
        assert!(should_quit(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Phase::Answering
        ));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x')), Phase::Finished));
    }

    #[test]
    fn test_click_position() {
        assert_eq!(
            click_position(mouse(MouseEventKind::Down(MouseButton::Left), 10, 4)),
            Some((10, 4))
        );
        assert_eq!(
            click_position(mouse(MouseEventKind::Down(MouseButton::Right), 10, 4)),
            None
        );
        assert_eq!(
            click_position(mouse(MouseEventKind::Up(MouseButton::Left), 10, 4)),
            None
        );
        assert_eq!(click_position(mouse(MouseEventKind::Moved, 1, 1)), None);
    }
}
