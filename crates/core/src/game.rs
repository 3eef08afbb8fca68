//! Game module - ten frames and the roll broadcast between them
//!
//! Bonus pins are settled eagerly: every accepted roll is offered to each frame
//! from the first up to the current one. Frames that are already saturated
//! ignore it, so only the current frame and any strike/spare frames still
//! owed bonus rolls pick it up. The game score is then a plain sum of frame
//! scores with no look-ahead.

use tracing::{debug, warn};

use crate::snapshot::{FrameSnapshot, GameSnapshot};
use crate::types::{FRAME_COUNT, PIN_COUNT};
use crate::{Frame, RollError};

/// Outcome of an accepted roll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollReport {
    pub pins: u8,
    /// 1-based index of the current frame after the roll.
    pub frame: u8,
    pub score: u32,
    pub complete: bool,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    frames: [Frame; FRAME_COUNT],
    /// 0-based cursor into `frames`. Never decreases, never passes the last frame.
    current: usize,
    /// Accepted rolls (rejected calls are not counted).
    roll_count: u32,
}

impl Game {
    /// Create a game with ten empty frames, positioned on frame 1
    pub fn new() -> Self {
        Self {
            frames: std::array::from_fn(|i| Frame::new(i as u8 + 1)),
            current: 0,
            roll_count: 0,
        }
    }

    /// Throw the current game away and start over on frame 1
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Apply one roll.
    ///
    /// Pins outside 0..=10 are rejected before anything else, then rolls after
    /// the game is complete. A rejected roll leaves the game untouched.
    pub fn roll(&mut self, pins: i32) -> Result<RollReport, RollError> {
        let pins = match u8::try_from(pins) {
            Ok(p) if p <= PIN_COUNT => p,
            _ => {
                warn!(pins, "rejected roll outside pin range");
                return Err(RollError::InvalidPins { pins });
            }
        };

        if self.is_complete() {
            let score = self.score();
            warn!(pins, score, "rejected roll after game completed");
            return Err(RollError::GameOver { score });
        }

        // Decided on the state the previous roll left behind.
        if self.current_frame().should_advance() {
            self.current = (self.current + 1).min(FRAME_COUNT - 1);
        }

        for frame in &mut self.frames[..=self.current] {
            frame.roll(pins);
        }
        self.roll_count += 1;

        let report = RollReport {
            pins,
            frame: self.current_frame().index(),
            score: self.score(),
            complete: self.is_complete(),
        };
        debug!(
            pins,
            frame = report.frame,
            score = report.score,
            complete = report.complete,
            "roll applied"
        );
        Ok(report)
    }

    /// Sum of all frame scores
    pub fn score(&self) -> u32 {
        self.frames.iter().map(Frame::score).sum()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.current]
    }

    /// 0-based position of the current frame
    pub fn current_frame_index(&self) -> usize {
        self.current
    }

    /// Frame the next roll will count as an own roll for.
    ///
    /// This is the current frame unless it has asked the game to advance.
    pub fn next_frame(&self) -> &Frame {
        let frame = self.current_frame();
        if frame.should_advance() {
            &self.frames[self.current + 1]
        } else {
            frame
        }
    }

    /// Pins on the deck for the next roll
    pub fn pins_standing(&self) -> u8 {
        self.next_frame().pins_standing()
    }

    /// Whether the next roll is the first ball at a full rack.
    ///
    /// Always false once the game is complete.
    pub fn rack_is_fresh(&self) -> bool {
        !self.is_complete() && self.next_frame().rack_is_fresh()
    }

    pub fn is_complete(&self) -> bool {
        let frame = self.current_frame();
        frame.is_last_frame() && frame.has_max_rolls()
    }

    pub fn roll_count(&self) -> u32 {
        self.roll_count
    }

    /// Cumulative score through each frame.
    ///
    /// A frame gets a total only once it has absorbed every roll it can, and
    /// totals stop at the first frame still waiting on rolls.
    pub fn running_totals(&self) -> [Option<u32>; FRAME_COUNT] {
        let mut totals = [None; FRAME_COUNT];
        let mut total = 0u32;
        for (slot, frame) in totals.iter_mut().zip(self.frames.iter()) {
            if !frame.has_max_rolls() {
                break;
            }
            total += frame.score();
            *slot = Some(total);
        }
        totals
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let totals = self.running_totals();
        for ((slot, frame), total) in out.frames.iter_mut().zip(self.frames.iter()).zip(totals) {
            *slot = FrameSnapshot::from(frame);
            slot.running_total = total;
        }
        out.current_frame = self.current_frame().index();
        out.score = self.score();
        out.complete = self.is_complete();
        out.roll_count = self.roll_count;
        out.pins_standing = if out.complete { 0 } else { self.pins_standing() };
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
