//! Key mapping from terminal events to player actions.

use crate::types::PlayerAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to player actions.
pub fn handle_key_event(key: KeyEvent) -> Option<PlayerAction> {
    match key.code {
        // Tray slots
        KeyCode::Char(c @ '1'..='3') => Some(PlayerAction::PickSlot(c as u8 - b'1')),

        // Drag cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(PlayerAction::MoveCursor { dx: -1, dy: 0 })
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(PlayerAction::MoveCursor { dx: 1, dy: 0 })
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(PlayerAction::MoveCursor { dx: 0, dy: -1 })
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(PlayerAction::MoveCursor { dx: 0, dy: 1 })
        }

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(PlayerAction::Drop),
        KeyCode::Esc | KeyCode::Backspace => Some(PlayerAction::Cancel),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(PlayerAction::ResetTray),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(PlayerAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
