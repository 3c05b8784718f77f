//! Move proposers.
//!
//! A `MoveSource` supplies pit proposals for one seat. The built-in greedy
//! source is a single-ply heuristic: it always proposes the pit with the
//! most stones on its own row.

use crate::game::Side;

/// Supplies move proposals for the side it plays.
///
/// Sources may be driven asynchronously by a host (human input, timers);
/// the engine only requires that a proposal addresses the live Side.
pub trait MoveSource {
    /// Propose a pit index for `own`, or `None` to abstain.
    fn propose(&mut self, own: &Side, other: &Side) -> Option<usize>;
}

/// Greedy picker: the pit with the maximum stone count, ties broken by the
/// lowest index.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyMoveSource;

impl GreedyMoveSource {
    /// Create a greedy move source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MoveSource for GreedyMoveSource {
    fn propose(&mut self, own: &Side, _other: &Side) -> Option<usize> {
        let mut best = (0usize, 0u32);
        for (index, pit) in own.row().iter().enumerate() {
            // Strictly greater keeps the lowest index on ties.
            if pit.stones() > best.1 {
                best = (index, pit.stones());
            }
        }
        Some(best.0)
    }
}
