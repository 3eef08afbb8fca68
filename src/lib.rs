//! Ten-pin bowling scorer (workspace facade crate).
//!
//! This package exposes `tenpin::{core,engine,input,term,types}` as one API
//! while the implementation lives in dedicated crates under `crates/`, plus
//! the runner pieces (`cli`, `play`, `telemetry`) used by the binary.

pub use tenpin_core as core;
pub use tenpin_engine as engine;
pub use tenpin_input as input;
pub use tenpin_term as term;
pub use tenpin_types as types;

pub mod cli;
pub mod play;
pub mod telemetry;
