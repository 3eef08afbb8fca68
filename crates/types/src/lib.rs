//! Core types module - shared constants and small enums
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (scoring core, terminal rendering, input mapping).
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PIN_COUNT` | 10 | Pins set up on a full rack |
//! | `FRAME_COUNT` | 10 | Frames in a game |
//! | `LAST_FRAME` | 10 | 1-based index of the final frame |
//! | `OPEN_FRAME_ROLLS` | 2 | Rolls a frame absorbs without a strike or spare |
//! | `BONUS_FRAME_ROLLS` | 3 | Rolls a strike or spare frame absorbs (own + bonus) |
//! | `MAX_GAME_ROLLS` | 21 | Most roll calls a game can accept |
//! | `PERFECT_SCORE` | 300 | Twelve strikes in a row |
//!
//! # Examples
//!
//! ```
//! use tenpin_types::{BowlerCommand, FRAME_COUNT, PIN_COUNT};
//!
//! let cmd = BowlerCommand::from_str("restart").unwrap();
//! assert_eq!(cmd, BowlerCommand::Restart);
//!
//! assert_eq!(FRAME_COUNT, 10);
//! assert_eq!(PIN_COUNT, 10);
//! ```

/// Pins standing on a full rack
pub const PIN_COUNT: u8 = 10;

/// Frames in a game
pub const FRAME_COUNT: usize = 10;

/// 1-based index of the final frame
pub const LAST_FRAME: u8 = 10;

/// Rolls a frame absorbs when it is neither a strike nor a spare
pub const OPEN_FRAME_ROLLS: usize = 2;

/// Rolls a strike or spare frame absorbs (its own rolls plus bonus rolls)
pub const BONUS_FRAME_ROLLS: usize = 3;

/// Most roll calls a single game can accept (9 open frames + a 3-roll 10th)
pub const MAX_GAME_ROLLS: usize = 21;

/// Score of a perfect game
pub const PERFECT_SCORE: u32 = 300;

/// How a frame stands, in scoresheet terms
///
/// - **Pending**: not enough rolls yet to tell (0 rolls, or 1 non-strike roll)
/// - **Strike**: first roll knocked down all pins
/// - **Spare**: first two rolls together knocked down all pins
/// - **Open**: two rolls with pins left standing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameMark {
    Pending,
    Strike,
    Spare,
    Open,
}

/// Commands a bowler (human or scripted) can issue to a running game
///
/// These commands are used by both keyboard input and scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BowlerCommand {
    /// Knock down the given number of pins
    Roll(u8),
    /// Knock down every pin still standing in the rack
    Spare,
    /// Throw the game away and start a fresh one
    Restart,
}

impl BowlerCommand {
    /// Parse a command from a word or scoresheet symbol
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_types::BowlerCommand;
    ///
    /// assert_eq!(BowlerCommand::from_str("x"), Some(BowlerCommand::Roll(10)));
    /// assert_eq!(BowlerCommand::from_str("-"), Some(BowlerCommand::Roll(0)));
    /// assert_eq!(BowlerCommand::from_str("7"), Some(BowlerCommand::Roll(7)));
    /// assert_eq!(BowlerCommand::from_str("/"), Some(BowlerCommand::Spare));
    /// assert_eq!(BowlerCommand::from_str("11"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" | "strike" => Some(BowlerCommand::Roll(PIN_COUNT)),
            "-" | "gutter" => Some(BowlerCommand::Roll(0)),
            "/" | "spare" => Some(BowlerCommand::Spare),
            "r" | "restart" => Some(BowlerCommand::Restart),
            other => other
                .parse::<u8>()
                .ok()
                .filter(|&pins| pins <= PIN_COUNT)
                .map(BowlerCommand::Roll),
        }
    }

    /// Convert to a lowercase word for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            BowlerCommand::Roll(_) => "roll",
            BowlerCommand::Spare => "spare",
            BowlerCommand::Restart => "restart",
        }
    }
}
