//! Errors surfaced by [`Game::roll`](crate::Game::roll).
//!
//! Both conditions are recoverable: the game is left untouched and the caller
//! may retry (invalid pins) or stop rolling (game over).

use thiserror::Error;

use crate::types::PIN_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("roll of {pins} pins is outside 0..={max}", max = PIN_COUNT)]
    InvalidPins { pins: i32 },
    #[error("game is already complete with a score of {score}")]
    GameOver { score: u32 },
}

impl RollError {
    /// Short machine-friendly code (used by JSON output)
    pub fn code(&self) -> &'static str {
        match self {
            RollError::InvalidPins { .. } => "invalid_pins",
            RollError::GameOver { .. } => "game_over",
        }
    }
}
