//! The board: pits, rows, and the rules engine.
//!
//! ## Key Types
//!
//! - `Pit`: a single immutable stone-count cell
//! - `Row`: one side's full ordered set of pits; all rules live here
//! - `TakeVerdict` / `StealVerdict` / `LoseCondition`: tagged rule outcomes

pub mod pit;
pub mod row;
pub mod verdict;

pub use pit::Pit;
pub use row::{pit_name, Row, RowValidationError, StealOutcome, TakeOutcome};
pub use verdict::{LoseCondition, StealVerdict, StealViolation, TakeVerdict, TakeViolation};
