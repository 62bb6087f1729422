//! Key mapping from terminal events to game intents.

use blockfall_types::GameIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a keyboard event to a game intent.
pub fn decode_key(key: KeyEvent) -> Option<GameIntent> {
    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameIntent::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameIntent::MoveRight),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameIntent::SoftDrop),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameIntent::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(GameIntent::HardDrop),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(GameIntent::Hold),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameIntent::Pause),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameIntent::Restart),

        _ => None,
    }
}

/// Whether the key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn movement_keys() {
        assert_eq!(
            decode_key(KeyEvent::from(KeyCode::Left)),
            Some(GameIntent::MoveLeft)
        );
        assert_eq!(
            decode_key(KeyEvent::from(KeyCode::Right)),
            Some(GameIntent::MoveRight)
        );
        assert_eq!(
            decode_key(KeyEvent::from(KeyCode::Down)),
            Some(GameIntent::SoftDrop)
        );

        assert_eq!(
            decode_key(KeyEvent::from(KeyCode::Char('H'))),
            Some(GameIntent::MoveLeft)
        );
        assert_eq!(
            decode_key(KeyEvent::from(KeyCode::Char('d'))),
            Some(GameIntent::MoveRight)
        );
        assert_eq!(
            decode_key(KeyEvent::from(KeyCode::Char('j'))),
            Some(GameIntent::SoftDrop)
        );
    }

    #[test]
    fn rotation_keys() {
        assert_eq!(
            decode_key(KeyEvent::from(KeyCode::Up)),
            Some(GameIntent::Rotate)
        );
        assert_eq!(
            decode_key(KeyEvent::from(KeyCode::Char('w'))),
            Some(GameIntent::Rotate)
        );
        assert_eq!(
            decode_key(KeyEvent::from(KeyCode::Char('K'))),
            Some(GameIntent::Rotate)
        );
    }

    #[test]
    fn action_keys() {
        assert_eq!(
            decode_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameIntent::HardDrop)
        );
        assert_eq!(
            decode_key(KeyEvent::from(KeyCode::Char('c'))),
            Some(GameIntent::Hold)
        );
        assert_eq!(
            decode_key(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameIntent::Pause)
        );
        assert_eq!(
            decode_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameIntent::Restart)
        );
        assert_eq!(decode_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
