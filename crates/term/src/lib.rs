//! Terminal presentation module.
//!
//! Everything a bowler sees lives here: the scoresheet layout, user-facing
//! messages for roll outcomes, JSON observations for machine consumers, and a
//! small crossterm renderer.
//!
//! Goals:
//! - Keep `core` free of any output
//! - Keep layout pure so it can be unit-tested without a terminal

pub mod card;
pub mod messages;
pub mod observation;
pub mod renderer;
pub mod view;

pub use tenpin_core as core;
pub use tenpin_types as types;

pub use card::{roll_marks, scorecard_lines, status_line};
pub use messages::{error_message, roll_message};
pub use observation::{
    create_error, create_observation, to_json_line, ErrorMessage, ObservationMessage,
};
pub use renderer::{encode_lines_into, encode_screen_into, TerminalRenderer};
pub use view::{screen_lines, LineStyle, StyledLine};
