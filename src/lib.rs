//! A two-player Kalaha-style board game engine.
//!
//! Each player owns one row of pits. A move empties a pit and sows its
//! stones across the mover's own row only, possibly capturing the mirrored
//! opponent pit, and chains into further laps from wherever the last stone
//! seats. Board snapshots are persistent values: resolving a turn produces
//! successor `Side`s and retires the old ones, so moves proposed against a
//! board that has since changed are detected and dropped.
//!
//! ## Architecture
//!
//! - [`board`]: pits, rows, and all rules (take legality, sowing, steal,
//!   lose conditions)
//! - [`game`]: sides with identity and version, turn resolution, and the
//!   `Match` session
//! - [`core`]: players, configuration, seeded RNG
//! - [`ai`]: move sources, including the greedy picker
//! - [`notify`]: human-readable move narration sinks
//!
//! ## Example
//!
//! ```
//! use kalaha_engine::core::MatchConfig;
//! use kalaha_engine::game::{Match, MoveResponse};
//! use kalaha_engine::notify::NullNotifier;
//!
//! let mut game = Match::new(MatchConfig::default(), &mut NullNotifier)?;
//! let handle = game.active_handle();
//! let response = game.request_move(handle, 0, &mut NullNotifier);
//! assert!(matches!(response, MoveResponse::Applied { .. }));
//! # Ok::<(), kalaha_engine::board::RowValidationError>(())
//! ```

pub mod ai;
pub mod board;
pub mod core;
pub mod game;
pub mod notify;

pub use crate::ai::{GreedyMoveSource, MoveSource};
pub use crate::board::{Row, RowValidationError, StealVerdict, TakeVerdict, TakeViolation};
pub use crate::core::{MatchConfig, Player, PlayerId};
pub use crate::game::{Match, MatchResult, MoveResponse, Side, SideHandle, SideId, TurnOutcome};
pub use crate::notify::{ConsoleNotifier, MemoryNotifier, Notifier, NullNotifier};
