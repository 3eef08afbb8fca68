//! Scorecard: lays a `GameSnapshot` out as a classic bowling sheet.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! ```text
//! +-----+-----+-----+-----+-----+-----+-----+-----+-----+-------+
//! |  1  |  2  |  3  |  4  |  5  |  6  |  7  |  8  |  9  |  10   |
//! |  X  | 7 / | 3 4 |     |     |     |     |     |     |       |
//! |  20 |  33 |  40 |     |     |     |     |     |     |       |
//! +-----+-----+-----+-----+-----+-----+-----+-----+-----+-------+
//! ```

use arrayvec::ArrayVec;

use crate::core::{FrameSnapshot, GameSnapshot};
use crate::types::{BONUS_FRAME_ROLLS, LAST_FRAME, OPEN_FRAME_ROLLS, PIN_COUNT};

/// Interior width of frames 1..=9.
const CELL_W: usize = 5;
/// Interior width of the last frame (room for three marks).
const LAST_CELL_W: usize = 7;

/// Scoresheet symbols for a frame's own rolls (bonus rolls are not shown).
///
/// `X` for a ball on a full rack that clears it, `/` for a ball that clears a
/// partly knocked down rack, `-` for a miss, the digit otherwise.
pub fn roll_marks(frame: &FrameSnapshot) -> ArrayVec<char, BONUS_FRAME_ROLLS> {
    let rolls = frame.rolls();
    let own = if frame.index == LAST_FRAME {
        rolls.len()
    } else if rolls.first() == Some(&PIN_COUNT) {
        1
    } else {
        rolls.len().min(OPEN_FRAME_ROLLS)
    };

    let mut marks = ArrayVec::new();
    let mut standing = PIN_COUNT;
    let mut first_ball = true;
    for &pins in &rolls[..own] {
        standing = standing.saturating_sub(pins);
        let mark = if standing == 0 {
            let mark = if first_ball { 'X' } else { '/' };
            standing = PIN_COUNT;
            first_ball = true;
            mark
        } else if pins == 0 {
            first_ball = false;
            '-'
        } else {
            first_ball = false;
            char::from_digit(u32::from(pins), 10).unwrap_or('?')
        };
        marks.push(mark);
    }
    marks
}

fn cell_width(frame: &FrameSnapshot) -> usize {
    if frame.index == LAST_FRAME {
        LAST_CELL_W
    } else {
        CELL_W
    }
}

fn border(snap: &GameSnapshot) -> String {
    let mut line = String::from("+");
    for frame in &snap.frames {
        line.push_str(&"-".repeat(cell_width(frame)));
        line.push('+');
    }
    line
}

fn row(snap: &GameSnapshot, cell: impl Fn(&FrameSnapshot, usize) -> String) -> String {
    let mut line = String::from("|");
    for frame in &snap.frames {
        line.push_str(&cell(frame, cell_width(frame)));
        line.push('|');
    }
    line
}

/// Render the scorecard as lines of plain text (no trailing newlines).
pub fn scorecard_lines(snap: &GameSnapshot) -> Vec<String> {
    let header = row(snap, |frame, w| format!("{:^w$}", frame.index, w = w));
    let marks = row(snap, |frame, w| {
        let text: Vec<String> = roll_marks(frame).iter().map(char::to_string).collect();
        format!("{:^w$}", text.join(" "), w = w)
    });
    let totals = row(snap, |frame, w| match frame.running_total {
        Some(total) => format!("{:>w$} ", total, w = w - 1),
        None => " ".repeat(w),
    });

    vec![border(snap), header, marks, totals, border(snap)]
}

/// One-line status under the card.
pub fn status_line(snap: &GameSnapshot) -> String {
    if snap.complete {
        format!("Final score {}", snap.score)
    } else {
        format!(
            "Frame {}  Score {}  Pins standing {}",
            snap.current_frame, snap.score, snap.pins_standing
        )
    }
}
