//! Core engine types: players, match configuration, RNG.
//!
//! These are the building blocks the board and the match orchestration
//! share. Variant rules (capture eligibility, orientation, starting side)
//! are configured via `MatchConfig` rather than hardcoded.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{BoardLayout, HomeHalf, MatchConfig, Orientation, StartingSide};
pub use player::{Player, PlayerId};
pub use rng::GameRng;
