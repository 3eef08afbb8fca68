//! Scoresheet-style text parsing for scripted rolls.
//!
//! Accepted tokens: `X` (strike), `/` (spare: whatever is left standing),
//! `-` (gutter ball), or any integer. Integers are passed through untouched so
//! out-of-range pins reach [`Game::roll`](tenpin_core::Game::roll) and are
//! rejected there.

use thiserror::Error;

use crate::core::Game;
use crate::types::{BowlerCommand, PIN_COUNT};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRollError {
    #[error("unrecognised roll `{token}`")]
    UnknownToken { token: String },
    #[error("`/` needs a first ball in the frame")]
    SpareOnFreshFrame,
}

/// Parse a single token.
///
/// `pins_standing` resolves `/`; `fresh_rack` marks that no ball has been
/// thrown at the standing rack yet, where a spare is meaningless.
pub fn parse_roll(token: &str, pins_standing: u8, fresh_rack: bool) -> Result<i32, ParseRollError> {
    if let Ok(pins) = token.parse::<i32>() {
        return Ok(pins);
    }
    match BowlerCommand::from_str(token) {
        Some(BowlerCommand::Roll(pins)) => Ok(i32::from(pins)),
        Some(BowlerCommand::Spare) if fresh_rack => Err(ParseRollError::SpareOnFreshFrame),
        Some(BowlerCommand::Spare) => Ok(i32::from(pins_standing.min(PIN_COUNT))),
        _ => Err(ParseRollError::UnknownToken {
            token: token.to_string(),
        }),
    }
}

/// Split a line on whitespace and commas, without resolving `/`.
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

/// Parse a whole line of rolls as they would land on `game`.
///
/// `/` is resolved against a scratch copy of the game that has every earlier
/// token on the line applied, so `"7 / X"` works mid-game.
pub fn parse_line(line: &str, game: &Game) -> Result<Vec<i32>, ParseRollError> {
    let mut scratch = game.clone();
    let mut rolls = Vec::new();
    for token in tokens(line) {
        let pins = parse_roll(token, scratch.pins_standing(), scratch.rack_is_fresh())?;
        // Rejections are the caller's to report when the real game sees them.
        let _ = scratch.roll(pins);
        rolls.push(pins);
    }
    Ok(rolls)
}
