//! A player's side of the board: one Row snapshot plus identity and version.
//!
//! Sides are immutable values. Resolving a turn produces successor Sides
//! with the same id and a bumped version; the predecessors are retired and
//! moves addressed to them are stale.

use serde::{Deserialize, Serialize};

use crate::board::Row;

/// Stable side identifier, assigned once and never reused within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideId(pub u32);

impl SideId {
    /// Create a new side ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Side({})", self.0)
    }
}

/// Address of one specific Side value: identity plus version.
///
/// A move carries the handle of the Side it was proposed against. Both
/// fields must match the live Side or the move is dropped as stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideHandle {
    /// The side's stable identity.
    pub id: SideId,
    /// The version the proposer observed.
    pub version: u32,
}

/// One side of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    id: SideId,
    version: u32,
    row: Row,
}

impl Side {
    /// Create a fresh side at version 0.
    #[must_use]
    pub fn new(id: SideId, row: Row) -> Self {
        Self { id, version: 0, row }
    }

    /// The side's stable identity.
    #[must_use]
    pub const fn id(&self) -> SideId {
        self.id
    }

    /// The side's version, bumped on every resolved turn.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// The handle addressing exactly this Side value.
    #[must_use]
    pub const fn handle(&self) -> SideHandle {
        SideHandle {
            id: self.id,
            version: self.version,
        }
    }

    /// The current row snapshot.
    #[must_use]
    pub const fn row(&self) -> &Row {
        &self.row
    }

    /// Stone count at a pit, or `None` when out of range.
    #[must_use]
    pub fn stone_count_for(&self, index: usize) -> Option<u32> {
        self.row.pit(index).map(|pit| pit.stones())
    }

    /// Produce the successor Side: same identity, next version, new row.
    ///
    /// The receiver is thereby retired; moves addressed to its handle must
    /// be dropped.
    #[must_use]
    pub fn replace(&self, row: Row) -> Self {
        Self {
            id: self.id,
            version: self.version + 1,
            row,
        }
    }
}
