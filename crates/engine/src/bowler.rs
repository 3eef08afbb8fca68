//! AutoBowler - generates legal rolls for a running game
//!
//! Used by the `--random` runner mode, benchmarks, and tests that need whole
//! games without writing out every roll.

use tracing::{debug, warn};

use crate::core::{Game, RollReport};
use crate::rng::SimpleRng;

#[derive(Debug, Clone)]
pub struct AutoBowler {
    rng: SimpleRng,
    /// Chance (0..=100) of clearing whatever is standing.
    strike_chance: u8,
}

impl AutoBowler {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            strike_chance: 0,
        }
    }

    /// Bias the bowler towards clearing the rack (percent, capped at 100).
    pub fn with_strike_chance(mut self, percent: u8) -> Self {
        self.strike_chance = percent.min(100);
        self
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Pick pins for the next roll: never more than are standing.
    pub fn next_roll(&mut self, game: &Game) -> u8 {
        let standing = game.pins_standing();
        if self.strike_chance > 0 && self.rng.next_range(100) < u32::from(self.strike_chance) {
            return standing;
        }
        self.rng.next_range(u32::from(standing) + 1) as u8
    }

    /// Roll until the game is complete, returning every accepted roll.
    pub fn play(&mut self, game: &mut Game) -> Vec<RollReport> {
        let mut reports = Vec::new();
        while !game.is_complete() {
            let pins = self.next_roll(game);
            match game.roll(i32::from(pins)) {
                Ok(report) => reports.push(report),
                // Generated pins are always in range and the loop stops on completion.
                Err(err) => {
                    warn!(seed = self.seed(), error = %err, "auto-bowled roll rejected");
                    break;
                }
            }
        }
        debug!(
            seed = self.seed(),
            rolls = reports.len(),
            score = game.score(),
            "auto-bowled game"
        );
        reports
    }
}
