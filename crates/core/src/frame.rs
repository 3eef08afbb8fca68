//! Frame module - one scoring slot of a game
//!
//! A frame records every roll that counts toward its score: its own rolls plus
//! any bonus rolls it absorbs after a strike or spare. Everything else (marks,
//! roll limits, whether the game should move on) is derived from that list.

use arrayvec::ArrayVec;

use crate::types::{FrameMark, BONUS_FRAME_ROLLS, LAST_FRAME, OPEN_FRAME_ROLLS, PIN_COUNT};

/// A single frame of a game (index 1..=10)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    index: u8,
    /// Pins per roll, in order. Bonus rolls are appended after the frame's own.
    rolls: ArrayVec<u8, BONUS_FRAME_ROLLS>,
}

impl Frame {
    /// Create an empty frame at the given 1-based position
    pub fn new(index: u8) -> Self {
        Self {
            index,
            rolls: ArrayVec::new(),
        }
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Record a roll if the frame can still absorb one.
    ///
    /// Returns `false` (and records nothing) once the frame is saturated.
    pub fn roll(&mut self, pins: u8) -> bool {
        if !self.can_roll() {
            return false;
        }
        self.rolls.push(pins);
        true
    }

    /// Sum of every roll recorded so far (0 for an empty frame)
    pub fn score(&self) -> u32 {
        self.rolls.iter().map(|&pins| u32::from(pins)).sum()
    }

    pub fn is_strike(&self) -> bool {
        self.rolls.first() == Some(&PIN_COUNT)
    }

    /// First two rolls together cleared the rack.
    ///
    /// Only the first two rolls are looked at, so the frame stays a spare after
    /// its bonus roll lands.
    pub fn is_spare(&self) -> bool {
        match self.rolls.as_slice() {
            [first, second, ..] => first.checked_add(*second) == Some(PIN_COUNT),
            _ => false,
        }
    }

    pub fn is_last_frame(&self) -> bool {
        self.index == LAST_FRAME
    }

    /// Rolls this frame absorbs before it is saturated
    pub fn max_rolls(&self) -> usize {
        if self.has_bonus() {
            BONUS_FRAME_ROLLS
        } else {
            OPEN_FRAME_ROLLS
        }
    }

    pub fn has_max_rolls(&self) -> bool {
        self.rolls.len() == self.max_rolls()
    }

    /// Whether the game should move past this frame on the next roll.
    ///
    /// The last frame never asks the game to advance.
    pub fn should_advance(&self) -> bool {
        !self.is_last_frame() && (self.has_bonus() || self.has_max_rolls())
    }

    pub fn mark(&self) -> FrameMark {
        if self.is_strike() {
            FrameMark::Strike
        } else if self.is_spare() {
            FrameMark::Spare
        } else if self.rolls.len() >= OPEN_FRAME_ROLLS {
            FrameMark::Open
        } else {
            FrameMark::Pending
        }
    }

    /// Pins left on the deck for this frame's next roll.
    ///
    /// The rack is reset whenever it is cleared, which only matters for the
    /// last frame where strikes and spares are followed by fill balls.
    pub fn pins_standing(&self) -> u8 {
        let mut standing = PIN_COUNT;
        for &pins in &self.rolls {
            standing = standing.saturating_sub(pins);
            if standing == 0 {
                standing = PIN_COUNT;
            }
        }
        standing
    }

    /// No ball has been thrown at the rack currently standing.
    ///
    /// True for an empty frame, and in the last frame after a ball that
    /// cleared the rack.
    pub fn rack_is_fresh(&self) -> bool {
        let mut standing = PIN_COUNT;
        let mut fresh = true;
        for &pins in &self.rolls {
            standing = standing.saturating_sub(pins);
            fresh = standing == 0;
            if fresh {
                standing = PIN_COUNT;
            }
        }
        fresh
    }

    fn has_bonus(&self) -> bool {
        self.is_strike() || self.is_spare()
    }

    fn can_roll(&self) -> bool {
        self.rolls.len() < self.max_rolls()
    }
}
