//! Key mapping from terminal events to game buttons.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::buttons::Button;

/// Map keyboard input to a game button.
pub fn map_key(key: KeyEvent) -> Option<Button> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Button::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Button::Down)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Button::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Button::Right)
        }

        // Actions
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Char(' ') | KeyCode::Enter => Some(Button::X),
        KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Backspace => {
            Some(Button::Z)
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
