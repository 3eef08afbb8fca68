//! Core scoring module - pure, deterministic, and testable
//!
//! This module contains the ten-pin scoring rules and game state.
//! It has **zero dependencies** on terminal, input, or I/O, making it:
//!
//! - **Deterministic**: The same roll sequence always produces the same game
//! - **Testable**: Unit tests for every scoring rule
//! - **Portable**: Usable from a terminal runner, a script, or a property test
//!
//! # Module Structure
//!
//! - [`frame`]: one scoring slot and its derived state (strike, spare, roll limits)
//! - [`game`]: ten frames, the current-frame cursor, and roll broadcasting
//! - [`snapshot`]: plain-data copies of a game for presentation layers
//! - [`error`]: rejected-roll conditions
//!
//! # Scoring Rules
//!
//! - **Strike**: 10 plus the pins of the next two rolls
//! - **Spare**: 10 plus the pins of the next roll
//! - **Open frame**: the pins knocked down in its two rolls
//! - **Tenth frame**: a strike or spare earns fill balls inside the frame, up to three rolls
//!
//! Bonus pins are not looked up at read time. Each roll is handed to every
//! frame up to the current one and frames that still have room keep it, so
//! [`Game::score`] is just the sum of frame scores.
//!
//! # Example
//!
//! ```
//! use tenpin_core::{Game, RollError};
//!
//! let mut game = Game::new();
//! game.roll(10).unwrap();
//! game.roll(3).unwrap();
//! let report = game.roll(4).unwrap();
//!
//! assert_eq!(report.score, 24);
//! assert_eq!(game.current_frame().index(), 2);
//! assert_eq!(game.roll(11), Err(RollError::InvalidPins { pins: 11 }));
//! ```

pub mod error;
pub mod frame;
pub mod game;
pub mod snapshot;

pub use tenpin_types as types;

// Re-export commonly used types for convenience
pub use error::RollError;
pub use frame::Frame;
pub use game::{Game, RollReport};
pub use snapshot::{FrameSnapshot, GameSnapshot};
