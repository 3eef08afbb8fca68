//! Key mapping from terminal events to bowler commands.

use crate::types::{BowlerCommand, PIN_COUNT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to bowler commands.
pub fn handle_key_event(key: KeyEvent) -> Option<BowlerCommand> {
    match key.code {
        // Pins
        KeyCode::Char(c @ '0'..='9') => c.to_digit(10).map(|d| BowlerCommand::Roll(d as u8)),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(BowlerCommand::Roll(PIN_COUNT)),
        KeyCode::Char('-') => Some(BowlerCommand::Roll(0)),
        KeyCode::Char('/') => Some(BowlerCommand::Spare),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(BowlerCommand::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
