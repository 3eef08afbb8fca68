//! Input module (engine-facing).
//!
//! Turns what a bowler types into pin counts. Scripted input goes through
//! [`parse`] (scoresheet tokens); interactive play maps `crossterm` key events
//! into [`crate::types::BowlerCommand`] via [`map`].

pub mod map;
pub mod parse;

pub use tenpin_core as core;
pub use tenpin_types as types;

pub use map::{handle_key_event, should_quit};
pub use parse::{parse_line, parse_roll, tokens, ParseRollError};
