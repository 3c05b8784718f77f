//! Tagged rule outcomes for take, steal, and lose evaluation.
//!
//! Every rule check answers with a plain data verdict that carries the
//! first violated rule, so callers can match on the reason instead of
//! re-deriving it from the board.

use serde::{Deserialize, Serialize};

/// Why a take was refused. Ordered: the first violated rule wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TakeViolation {
    /// The index does not address a pit on the row.
    IndexOutOfBound,
    /// The pit holds no stones.
    NoStoneExists,
    /// The pit holds a single stone; taking requires at least two.
    NotEnoughStones,
}

impl std::fmt::Display for TakeViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            TakeViolation::IndexOutOfBound => "Index out of bound",
            TakeViolation::NoStoneExists => "There are no stones",
            TakeViolation::NotEnoughStones => "At least two stones are required",
        };
        write!(f, "{}", message)
    }
}

/// Whether a pit may be taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TakeVerdict {
    /// The take is legal.
    Allowed,
    /// The take is refused for the given reason.
    NotAllowed(TakeViolation),
}

impl TakeVerdict {
    /// Whether the take is legal.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, TakeVerdict::Allowed)
    }

    /// The violation, when refused.
    #[must_use]
    pub const fn violation(self) -> Option<TakeViolation> {
        match self {
            TakeVerdict::Allowed => None,
            TakeVerdict::NotAllowed(violation) => Some(violation),
        }
    }
}

/// Why a steal did not happen. Ordered: the first violated rule wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StealViolation {
    /// The landing pit lies outside the capture-eligible half.
    SecondRow,
    /// The landing pit holds fewer than two stones.
    NotEnoughStones,
    /// The mirrored opponent pit is missing or empty.
    OtherSideHasNoStones,
}

impl std::fmt::Display for StealViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            StealViolation::SecondRow => "It is in the second row",
            StealViolation::NotEnoughStones => "At least two stones are required",
            StealViolation::OtherSideHasNoStones => "Other side has no stones",
        };
        write!(f, "{}", message)
    }
}

/// Whether landing on a pit captures the mirrored opponent pit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StealVerdict {
    /// The capture fires.
    Possible,
    /// No capture, for the given reason.
    NotPossible(StealViolation),
}

impl StealVerdict {
    /// Whether the capture fires.
    #[must_use]
    pub const fn is_possible(self) -> bool {
        matches!(self, StealVerdict::Possible)
    }

    /// The violation, when no capture fires.
    #[must_use]
    pub const fn violation(self) -> Option<StealViolation> {
        match self {
            StealVerdict::Possible => None,
            StealVerdict::NotPossible(violation) => Some(violation),
        }
    }
}

/// Which lose sub-condition a row is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoseCondition {
    /// Every pit in the home half is empty.
    HomeHalfEmpty,
    /// No pit anywhere holds more than one stone.
    NoMovableStones,
}
