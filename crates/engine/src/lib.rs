//! Game driving module.
//!
//! Helpers that feed rolls into a [`Game`](tenpin_core::Game) without a
//! human at the keyboard: seeded auto-bowling and scripted replays.

pub mod bowler;
pub mod replay;
pub mod rng;

pub use tenpin_core as core;
pub use tenpin_types as types;

pub use bowler::AutoBowler;
pub use replay::{final_score, replay};
pub use rng::SimpleRng;
