//! Styled screen lines: scorecard plus status and the latest message.
//!
//! Pure (no I/O); the renderer decides how each style is drawn.

use crate::card::{scorecard_lines, status_line};
use crate::core::GameSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    Dim,
    Bold,
    /// Good news (roll accepted, game finished).
    Notice,
    /// A rejected roll or bad input.
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub text: String,
    pub style: LineStyle,
}

impl StyledLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Build the full screen for a snapshot.
pub fn screen_lines(snap: &GameSnapshot, message: Option<StyledLine>) -> Vec<StyledLine> {
    let card = scorecard_lines(snap);
    let last = card.len().saturating_sub(1);
    let mut lines: Vec<StyledLine> = card
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let style = match i {
                0 => LineStyle::Dim,
                1 => LineStyle::Bold,
                i if i == last => LineStyle::Dim,
                _ => LineStyle::Plain,
            };
            StyledLine::new(text, style)
        })
        .collect();

    let status_style = if snap.complete {
        LineStyle::Notice
    } else {
        LineStyle::Plain
    };
    lines.push(StyledLine::new(status_line(snap), status_style));
    if let Some(message) = message {
        lines.push(message);
    }
    lines
}
