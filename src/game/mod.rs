//! Match flow: sides, turn resolution, and the session surface.
//!
//! ## Key Types
//!
//! - `Side`: an identified, versioned board snapshot for one seat
//! - `TurnCoordinator`: resolves one move into successor Sides
//! - `Match`: live seats, handle screening, history, and the result

pub mod session;
pub mod side;
pub mod turn;

pub use session::{Match, MatchResult, MoveRecord, MoveResponse};
pub use side::{Side, SideHandle, SideId};
pub use turn::{ChainStep, ResolvedTurn, TurnCoordinator, TurnOutcome};
