//! Game tests - scoring scenarios across frames

use tenpin::core::{Game, RollError};
use tenpin::types::{FrameMark, PERFECT_SCORE};

fn roll_each(game: &mut Game, rolls: &[i32]) {
    for &pins in rolls {
        game.roll(pins).unwrap();
    }
}

fn roll_strike(game: &mut Game) {
    roll_each(game, &[10]);
}

fn roll_spare(game: &mut Game) {
    roll_each(game, &[3, 7]);
}

/// Two rolls of `pins` for each of `frames` frames.
fn no_bonus_rolls(frames: usize, pins: i32) -> Vec<i32> {
    vec![pins; frames * 2]
}

/// The current frame asks to advance, and the next roll moves it by one.
fn assert_advances_on(game: &mut Game, next_roll: i32) {
    assert!(game.current_frame().should_advance());
    let before = game.current_frame().index();
    game.roll(next_roll).unwrap();
    assert_eq!(game.current_frame().index(), before + 1);
}

#[test]
fn test_before_the_game_has_started() {
    let game = Game::new();
    assert_eq!(game.score(), 0);
    assert_eq!(game.frames().len(), 10);
    assert_eq!(game.current_frame().index(), 1);
    assert!(!game.is_complete());
}

#[test]
fn test_first_frame_without_bonus() {
    let mut game = Game::new();
    game.roll(3).unwrap();
    assert_eq!(game.score(), 3);
    game.roll(6).unwrap();
    assert_eq!(game.score(), 9);
}

#[test]
fn test_first_frame_strike() {
    let mut game = Game::new();
    roll_strike(&mut game);
    assert_eq!(game.score(), 10);
    assert_advances_on(&mut game, 3);
}

#[test]
fn test_first_frame_spare() {
    let mut game = Game::new();
    roll_spare(&mut game);
    assert_eq!(game.score(), 10);
    assert_advances_on(&mut game, 3);
}

#[test]
fn test_open_frame_advances_then_holds() {
    let mut game = Game::new();
    roll_each(&mut game, &[3, 6]);
    assert_advances_on(&mut game, 1);
    assert_eq!(game.score(), 10);

    game.roll(7).unwrap();
    assert_eq!(game.current_frame().index(), 2);
    assert_eq!(game.score(), 17);
}

#[test]
fn test_strike_adds_next_two_rolls() {
    let mut game = Game::new();
    roll_each(&mut game, &[3, 6]);
    roll_strike(&mut game);

    let before = game.score();
    game.roll(1).unwrap();
    assert_eq!(game.score(), before + 2);
    game.roll(7).unwrap();
    assert_eq!(game.score(), before + 2 + 14);
}

#[test]
fn test_multiple_strikes() {
    let mut game = Game::new();
    roll_each(&mut game, &[3, 6]);
    roll_strike(&mut game);

    // Added to the previous strike frame and the current frame.
    let before = game.score();
    roll_strike(&mut game);
    assert_eq!(game.score(), before + 20);

    // Added to both strike frames and the current frame.
    let before = game.score();
    game.roll(1).unwrap();
    assert_eq!(game.score(), before + 3);

    // Added to the last strike frame and the current frame.
    let before = game.score();
    game.roll(7).unwrap();
    assert_eq!(game.score(), before + 14);
}

#[test]
fn test_strike_then_spare() {
    let mut game = Game::new();
    roll_each(&mut game, &[3, 6]);
    roll_strike(&mut game);

    let before = game.score();
    roll_spare(&mut game);
    assert_eq!(game.score(), before + 20);
}

#[test]
fn test_spare_adds_only_the_next_roll() {
    let mut game = Game::new();
    roll_each(&mut game, &[3, 6]);
    roll_spare(&mut game);

    let before = game.score();
    game.roll(1).unwrap();
    assert_eq!(game.score(), before + 2);
    game.roll(7).unwrap();
    assert_eq!(game.score(), before + 2 + 7);
}

#[test]
fn test_spare_bonus_lands_exactly_once() {
    let mut game = Game::new();
    roll_each(&mut game, &[3, 7, 3]);
    assert_eq!(game.frames()[0].score(), 13);
    game.roll(5).unwrap();
    assert_eq!(game.frames()[0].score(), 13);
    assert_eq!(game.frames()[1].score(), 8);
}

#[test]
fn test_strike_bonus_then_independent_frame() {
    let mut game = Game::new();
    roll_strike(&mut game);
    game.roll(3).unwrap();
    assert_eq!(game.frames()[0].score(), 13);
    game.roll(4).unwrap();
    assert_eq!(game.frames()[0].score(), 17);
    assert_eq!(game.frames()[1].score(), 7);
    assert_eq!(game.score(), 24);
}

#[test]
fn test_no_strikes_or_spares() {
    let mut game = Game::new();
    for _ in 0..10 {
        roll_each(&mut game, &[3, 4]);
    }
    assert_eq!(game.score(), 70);
    assert!(game.is_complete());
}

fn last_frame_game() -> Game {
    let mut game = Game::new();
    roll_each(&mut game, &no_bonus_rolls(9, 3));
    game
}

fn assert_last_frame_scores(last_frame_rolls: &[i32]) {
    let mut game = last_frame_game();
    for &pins in last_frame_rolls {
        let before = game.score();
        game.roll(pins).unwrap();
        assert_eq!(game.score(), before + pins as u32);
    }
    let total: i32 = last_frame_rolls.iter().sum();
    assert_eq!(game.score(), 54 + total as u32);
}

fn assert_completes_game(last_frame_rolls: &[i32]) {
    let mut game = last_frame_game();
    let (last, rest) = last_frame_rolls.split_last().unwrap();
    roll_each(&mut game, rest);
    assert!(!game.is_complete());
    game.roll(*last).unwrap();
    assert!(game.is_complete());
}

fn assert_no_extra_roll(last_frame_rolls: &[i32]) {
    let mut game = last_frame_game();
    roll_each(&mut game, last_frame_rolls);
    let score = game.score();
    assert_eq!(game.roll(5), Err(RollError::GameOver { score }));
    assert_eq!(game.score(), score);
}

#[test]
fn test_last_frame_without_bonus() {
    assert_last_frame_scores(&[1, 7]);
    assert_completes_game(&[1, 7]);
    assert_no_extra_roll(&[1, 7]);
}

#[test]
fn test_last_frame_strike() {
    assert_last_frame_scores(&[10, 1, 7]);
    assert_completes_game(&[10, 1, 7]);
    assert_no_extra_roll(&[10, 1, 7]);

    let mut game = last_frame_game();
    roll_each(&mut game, &[10, 1, 7]);
    assert_eq!(game.score(), 72);
}

#[test]
fn test_last_frame_spare() {
    assert_last_frame_scores(&[5, 5, 7]);
    assert_completes_game(&[5, 5, 7]);
    assert_no_extra_roll(&[5, 5, 7]);
}

#[test]
fn test_last_frame_double_strike() {
    assert_last_frame_scores(&[10, 10, 2]);
    assert_completes_game(&[10, 10, 2]);
    assert_no_extra_roll(&[10, 10, 2]);
}

#[test]
fn test_perfect_game() {
    let mut game = Game::new();
    for _ in 0..11 {
        game.roll(10).unwrap();
        assert!(!game.is_complete());
    }
    game.roll(10).unwrap();
    assert!(game.is_complete());
    assert_eq!(game.score(), PERFECT_SCORE);

    // Extra strikes are turned away.
    let mut rolls = no_bonus_rolls(10, 10);
    rolls.push(10);
    let mut game = Game::new();
    let accepted = rolls.iter().filter(|&&p| game.roll(p).is_ok()).count();
    assert_eq!(accepted, 12);
    assert_eq!(game.score(), PERFECT_SCORE);
}

#[test]
fn test_gutter_game() {
    let mut game = Game::new();
    roll_each(&mut game, &[0; 20]);
    assert!(game.is_complete());
    assert_eq!(game.score(), 0);
    assert!(game.frames().iter().all(|f| f.mark() == FrameMark::Open));
}

#[test]
fn test_all_spares_with_five_pins() {
    let mut game = Game::new();
    roll_each(&mut game, &[5; 21]);
    assert!(game.is_complete());
    assert_eq!(game.score(), 150);
}

#[test]
fn test_invalid_rolls_change_nothing() {
    let mut game = Game::new();
    roll_each(&mut game, &[10, 4]);
    let score = game.score();
    let frame = game.current_frame().index();

    for pins in [11, -1, 100, i32::MIN] {
        assert_eq!(game.roll(pins), Err(RollError::InvalidPins { pins }));
        assert_eq!(game.score(), score);
        assert_eq!(game.current_frame().index(), frame);
    }
}

#[test]
fn test_roll_after_completion_rejected() {
    let mut game = Game::new();
    roll_each(&mut game, &no_bonus_rolls(10, 4));
    assert!(game.is_complete());
    assert_eq!(game.roll(3), Err(RollError::GameOver { score: 80 }));
    assert_eq!(game.score(), 80);
}

#[test]
fn test_score_is_fold_of_frames_after_every_roll() {
    let rolls = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];
    let mut game = Game::new();
    for pins in rolls {
        game.roll(pins).unwrap();
        let folded: u32 = game.frames().iter().map(|f| f.score()).sum();
        assert_eq!(game.score(), folded);
    }
    assert!(game.is_complete());
    assert_eq!(game.score(), 167);
}
