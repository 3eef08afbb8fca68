//! Replay a fixed list of rolls against a game.

use crate::core::{Game, RollError, RollReport};

/// Feed every roll to `game`, recording each outcome (rejections included).
pub fn replay(game: &mut Game, rolls: &[i32]) -> Vec<Result<RollReport, RollError>> {
    rolls.iter().map(|&pins| game.roll(pins)).collect()
}

/// Score of a fresh game after the given rolls. Rejected rolls are skipped.
pub fn final_score(rolls: &[i32]) -> u32 {
    let mut game = Game::new();
    replay(&mut game, rolls);
    game.score()
}
