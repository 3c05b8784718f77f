//! A single pit: an immutable stone-count cell.

use serde::{Deserialize, Serialize};

/// One pit on a row. A plain value: mutating operations return a new pit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pit(u32);

impl Pit {
    /// Create a pit holding `stones`.
    #[must_use]
    pub const fn new(stones: u32) -> Self {
        Self(stones)
    }

    /// The stone count.
    #[must_use]
    pub const fn stones(self) -> u32 {
        self.0
    }

    /// Whether the pit holds no stones.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether the pit holds at least one stone.
    #[must_use]
    pub const fn is_not_empty(self) -> bool {
        self.0 > 0
    }

    /// A pit with `count` more stones.
    #[must_use]
    pub const fn plus(self, count: u32) -> Self {
        Self(self.0 + count)
    }

    /// A pit with no stones.
    #[must_use]
    pub const fn emptied(self) -> Self {
        Self(0)
    }
}

impl std::fmt::Display for Pit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
