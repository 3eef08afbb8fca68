use crate::types::{FrameMark, BONUS_FRAME_ROLLS, FRAME_COUNT};
use crate::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameSnapshot {
    pub index: u8,
    rolls: [u8; BONUS_FRAME_ROLLS],
    roll_count: u8,
    pub score: u32,
    pub mark: FrameMark,
    /// Cumulative game score through this frame, once the frame is settled.
    pub running_total: Option<u32>,
}

impl FrameSnapshot {
    pub fn rolls(&self) -> &[u8] {
        &self.rolls[..self.roll_count as usize]
    }
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        Self {
            index: 0,
            rolls: [0; BONUS_FRAME_ROLLS],
            roll_count: 0,
            score: 0,
            mark: FrameMark::Pending,
            running_total: None,
        }
    }
}

impl From<&Frame> for FrameSnapshot {
    fn from(value: &Frame) -> Self {
        let mut rolls = [0u8; BONUS_FRAME_ROLLS];
        let own = value.rolls();
        rolls[..own.len()].copy_from_slice(own);
        Self {
            index: value.index(),
            rolls,
            roll_count: own.len() as u8,
            score: value.score(),
            mark: value.mark(),
            running_total: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub frames: [FrameSnapshot; FRAME_COUNT],
    /// 1-based index of the current frame.
    pub current_frame: u8,
    pub score: u32,
    pub complete: bool,
    pub roll_count: u32,
    pub pins_standing: u8,
}
