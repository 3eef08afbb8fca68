//! Observation module - JSON lines describing a game after every roll
//!
//! Every message has: type, seq (sequence number), ts (timestamp in ms).
//! One message is written per input roll: an `observation` when the roll was
//! accepted, an `error` when it was rejected.

use serde::{Deserialize, Serialize};

use crate::core::{FrameSnapshot, GameSnapshot, RollError, RollReport};
use crate::types::FrameMark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

impl Default for ObservationType {
    fn default() -> Self {
        Self::Observation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "error")]
    Error,
}

impl Default for ErrorType {
    fn default() -> Self {
        Self::Error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkLower {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "strike")]
    Strike,
    #[serde(rename = "spare")]
    Spare,
    #[serde(rename = "open")]
    Open,
}

impl From<FrameMark> for MarkLower {
    fn from(value: FrameMark) -> Self {
        match value {
            FrameMark::Pending => Self::Pending,
            FrameMark::Strike => Self::Strike,
            FrameMark::Spare => Self::Spare,
            FrameMark::Open => Self::Open,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameObservation {
    pub index: u8,
    pub rolls: Vec<u8>,
    pub score: u32,
    pub mark: MarkLower,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub running_total: Option<u32>,
}

impl From<&FrameSnapshot> for FrameObservation {
    fn from(value: &FrameSnapshot) -> Self {
        Self {
            index: value.index,
            rolls: value.rolls().to_vec(),
            score: value.score,
            mark: value.mark.into(),
            running_total: value.running_total,
        }
    }
}

/// The roll that produced an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastRoll {
    pub pins: u8,
    pub frame: u8,
}

impl From<&RollReport> for LastRoll {
    fn from(value: &RollReport) -> Self {
        Self {
            pins: value.pins,
            frame: value.frame,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: ObservationType,
    pub seq: u64,
    pub ts: u64,
    pub frames: Vec<FrameObservation>,
    pub current_frame: u8,
    pub score: u32,
    pub complete: bool,
    pub roll_count: u32,
    pub pins_standing: u8,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_roll: Option<LastRoll>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: ErrorType,
    pub seq: u64,
    pub ts: u64,
    pub code: String,
    pub message: String,
}

/// Create an observation from a snapshot
pub fn create_observation(
    seq: u64,
    snap: &GameSnapshot,
    last: Option<&RollReport>,
) -> ObservationMessage {
    ObservationMessage {
        msg_type: ObservationType::Observation,
        seq,
        ts: current_timestamp_ms(),
        frames: snap.frames.iter().map(FrameObservation::from).collect(),
        current_frame: snap.current_frame,
        score: snap.score,
        complete: snap.complete,
        roll_count: snap.roll_count,
        pins_standing: snap.pins_standing,
        last_roll: last.map(LastRoll::from),
    }
}

/// Create an error message for a rejected roll
pub fn create_error(seq: u64, err: &RollError) -> ErrorMessage {
    ErrorMessage {
        msg_type: ErrorType::Error,
        seq,
        ts: current_timestamp_ms(),
        code: err.code().to_string(),
        message: err.to_string(),
    }
}

/// Serialize a message as one line of JSON (no trailing newline)
pub fn to_json_line<T: Serialize>(msg: &T) -> serde_json::Result<String> {
    serde_json::to_string(msg)
}

/// Get current timestamp in milliseconds
fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
