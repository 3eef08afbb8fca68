//! User-facing text for roll outcomes.

use crate::core::{RollError, RollReport};
use crate::types::PIN_COUNT;

pub fn roll_message(report: &RollReport) -> String {
    format!("On frame {} - score {}", report.frame, report.score)
}

pub fn error_message(err: &RollError) -> String {
    match err {
        RollError::InvalidPins { .. } => {
            format!("You must supply a roll between 0 and {}", PIN_COUNT)
        }
        RollError::GameOver { score } => format!("Game is over! Score is {}", score),
    }
}
