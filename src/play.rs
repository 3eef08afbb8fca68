//! Runner glue between input, the scoring core, and output.
//!
//! The core only returns structured results; this module turns them into
//! what the bowler sees, either text (scorecard and messages) or JSON lines.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::core::{Game, RollError, RollReport};
use crate::engine::AutoBowler;
use crate::input::{parse_line, ParseRollError};
use crate::term::{
    create_error, create_observation, encode_lines_into, error_message, roll_message,
    screen_lines, to_json_line, LineStyle, StyledLine,
};
use crate::types::BowlerCommand;

/// What happened to a single bowler command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rolled(RollReport),
    Rejected(RollError),
    Restarted,
    /// `/` typed before any ball was thrown in the frame.
    SpareOnFreshFrame,
}

/// Apply one keyboard/script command to the game.
pub fn apply_command(game: &mut Game, cmd: BowlerCommand) -> Outcome {
    match cmd {
        BowlerCommand::Roll(pins) => roll_outcome(game.roll(i32::from(pins))),
        BowlerCommand::Spare => {
            if game.is_complete() {
                return roll_outcome(game.roll(0));
            }
            if game.rack_is_fresh() {
                debug!(cmd = cmd.as_str(), "spare with no ball at the rack");
                return Outcome::SpareOnFreshFrame;
            }
            let pins = game.pins_standing();
            roll_outcome(game.roll(i32::from(pins)))
        }
        BowlerCommand::Restart => {
            game.restart();
            info!(cmd = cmd.as_str(), "game restarted");
            Outcome::Restarted
        }
    }
}

fn roll_outcome(result: Result<RollReport, RollError>) -> Outcome {
    match result {
        Ok(report) => Outcome::Rolled(report),
        Err(err) => Outcome::Rejected(err),
    }
}

/// Message line shown under the scorecard for an outcome.
pub fn outcome_line(outcome: &Outcome) -> StyledLine {
    match outcome {
        Outcome::Rolled(report) => StyledLine::new(roll_message(report), LineStyle::Plain),
        Outcome::Rejected(err) => StyledLine::new(error_message(err), LineStyle::Warning),
        Outcome::Restarted => StyledLine::new("New game", LineStyle::Notice),
        Outcome::SpareOnFreshFrame => StyledLine::new(
            ParseRollError::SpareOnFreshFrame.to_string(),
            LineStyle::Warning,
        ),
    }
}

/// Writes roll outcomes for non-interactive runs.
pub struct Reporter<W: Write> {
    out: W,
    json: bool,
    quiet: bool,
    color: bool,
    seq: u64,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, json: bool, quiet: bool, color: bool) -> Self {
        Self {
            out,
            json,
            quiet,
            color,
            seq: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn accepted(&mut self, game: &Game, report: &RollReport) -> Result<()> {
        self.seq += 1;
        if self.json {
            let msg = create_observation(self.seq, &game.snapshot(), Some(report));
            return self.json_line(&msg);
        }
        if self.quiet {
            return Ok(());
        }
        self.lines(&[StyledLine::new(roll_message(report), LineStyle::Plain)])
    }

    pub fn rejected(&mut self, err: &RollError) -> Result<()> {
        self.seq += 1;
        if self.json {
            return self.json_line(&create_error(self.seq, err));
        }
        if self.quiet {
            return Ok(());
        }
        self.lines(&[StyledLine::new(error_message(err), LineStyle::Warning)])
    }

    /// A line that could not be parsed into rolls.
    pub fn unparsed(&mut self, line: &str, err: &ParseRollError) -> Result<()> {
        if self.json || self.quiet {
            debug!(line, error = %err, "skipped unparsable input");
            return Ok(());
        }
        self.lines(&[StyledLine::new(
            format!("Skipped `{}`: {}", line, err),
            LineStyle::Warning,
        )])
    }

    /// Final output once input is exhausted.
    pub fn finish(&mut self, game: &Game) -> Result<()> {
        if self.json {
            self.seq += 1;
            let msg = create_observation(self.seq, &game.snapshot(), None);
            return self.json_line(&msg);
        }
        if self.quiet {
            writeln!(self.out, "{}", game.score())?;
            return Ok(());
        }
        self.lines(&screen_lines(&game.snapshot(), None))
    }

    fn json_line<T: serde::Serialize>(&mut self, msg: &T) -> Result<()> {
        writeln!(self.out, "{}", to_json_line(msg)?)?;
        Ok(())
    }

    fn lines(&mut self, lines: &[StyledLine]) -> Result<()> {
        let mut buf = Vec::new();
        encode_lines_into(lines, self.color, "\n", &mut buf)?;
        self.out.write_all(&buf)?;
        Ok(())
    }
}

/// Apply a batch of rolls, reporting each outcome.
pub fn roll_all<W: Write>(game: &mut Game, rolls: &[i32], reporter: &mut Reporter<W>) -> Result<()> {
    for &pins in rolls {
        match game.roll(pins) {
            Ok(report) => reporter.accepted(game, &report)?,
            Err(err) => reporter.rejected(&err)?,
        }
    }
    Ok(())
}

/// Play one line of scripted input (`restart`/`r` starts a fresh game).
pub fn play_line<W: Write>(game: &mut Game, line: &str, reporter: &mut Reporter<W>) -> Result<()> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(());
    }
    if let Some(cmd @ BowlerCommand::Restart) = BowlerCommand::from_str(line) {
        game.restart();
        info!(cmd = cmd.as_str(), "game restarted");
        return Ok(());
    }
    match parse_line(line, game) {
        Ok(rolls) => roll_all(game, &rolls, reporter),
        Err(err) => reporter.unparsed(line, &err),
    }
}

/// Play every line from `input`, then print the final state.
pub fn play_lines<R: BufRead, W: Write>(
    game: &mut Game,
    input: R,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    for line in input.lines() {
        play_line(game, &line?, reporter)?;
    }
    reporter.finish(game)
}

/// Auto-bowl a whole game.
pub fn play_random<W: Write>(
    game: &mut Game,
    seed: u32,
    strike_chance: u8,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    let mut bowler = AutoBowler::new(seed).with_strike_chance(strike_chance);
    while !game.is_complete() {
        let pins = bowler.next_roll(game);
        match game.roll(i32::from(pins)) {
            Ok(report) => reporter.accepted(game, &report)?,
            Err(err) => {
                reporter.rejected(&err)?;
                break;
            }
        }
    }
    info!(seed, score = game.score(), "random game finished");
    reporter.finish(game)
}
