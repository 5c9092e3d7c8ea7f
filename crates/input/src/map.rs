//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to a game command.
///
/// Arrows, `hjkl` and `wasd` (either case) are recognised. Key releases are
/// ignored so terminals that report them do not double every move.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(Command::SoftDrop),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(Command::RotateClockwise),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('c' | 'C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(handle_key_event(press(KeyCode::Left)), Some(Command::MoveLeft));
        assert_eq!(handle_key_event(press(KeyCode::Right)), Some(Command::MoveRight));
        assert_eq!(handle_key_event(press(KeyCode::Down)), Some(Command::SoftDrop));
        assert_eq!(
            handle_key_event(press(KeyCode::Up)),
            Some(Command::RotateClockwise)
        );
    }

    #[test]
    fn test_letter_keys() {
        for (c, expected) in [
            ('h', Command::MoveLeft),
            ('A', Command::MoveLeft),
            ('L', Command::MoveRight),
            ('d', Command::MoveRight),
            ('j', Command::SoftDrop),
            ('S', Command::SoftDrop),
            ('k', Command::RotateClockwise),
            ('W', Command::RotateClockwise),
        ] {
            assert_eq!(handle_key_event(press(KeyCode::Char(c))), Some(expected), "{c}");
        }
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(press(KeyCode::Char(' '))), None);
        assert_eq!(handle_key_event(press(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(press(KeyCode::Enter)), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release), None);

        let repeat = KeyEvent { kind: KeyEventKind::Repeat, ..release };
        assert_eq!(handle_key_event(repeat), Some(Command::MoveLeft));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(press(KeyCode::Char('q'))));
        assert!(should_quit(press(KeyCode::Char('Q'))));
        assert!(should_quit(press(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));

        assert!(!should_quit(press(KeyCode::Char('c'))));
        assert!(!should_quit(press(KeyCode::Left)));
    }
}
