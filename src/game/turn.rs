//! Turn resolution: validate → sow → steal → chain → terminal check.
//!
//! The coordinator threads Row values explicitly through each step and runs
//! the chained-retake loop to completion before returning; there are no
//! suspend points and no listener registries. Successor Sides for both seats
//! are produced together, once, after the chain stabilizes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{pit_name, Pit, StealOutcome, StealVerdict, TakeOutcome, TakeViolation};
use crate::core::{MatchConfig, Player};
use crate::game::Side;
use crate::notify::Notifier;

/// How a resolved turn left the match for the moving player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The turn passes to the opponent.
    Continue,
    /// The opponent's row is in a lose condition: the mover wins.
    Win,
    /// The mover's own row is in a lose condition: the mover loses.
    Lose,
}

/// One sow/steal lap of a resolved turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStep {
    /// The pit sown this lap.
    pub pit: usize,
    /// Where the last stone seated.
    pub last_seated: usize,
    /// Stones captured from the mirrored opponent pit, if the lap stole.
    pub captured: Option<u32>,
}

/// A fully resolved turn: both successor Sides plus the outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTurn {
    /// The mover's successor Side.
    pub own: Side,
    /// The opponent's successor Side.
    pub other: Side,
    /// Terminal or continue outcome.
    pub outcome: TurnOutcome,
    /// The sow/steal laps of the chain, in order. Turns rarely chain more
    /// than a few laps.
    pub chain: SmallVec<[ChainStep; 4]>,
}

fn stones_text(count: u32) -> String {
    if count == 1 {
        "1 stone".to_string()
    } else {
        format!("{} stones", count)
    }
}

/// Resolves one player's move against a pair of Sides.
pub struct TurnCoordinator<'a> {
    config: &'a MatchConfig,
}

impl<'a> TurnCoordinator<'a> {
    /// Create a coordinator for the given match configuration.
    #[must_use]
    pub fn new(config: &'a MatchConfig) -> Self {
        Self { config }
    }

    /// Resolve a move: validate the first take, then chain sow/steal laps
    /// until the landing pit is no longer takeable or a row is lost.
    ///
    /// A validation failure is recoverable: the error is reported through
    /// the notifier and no successor Sides are produced, so the turn is not
    /// consumed. Once the first take validates, resolution always completes.
    pub fn resolve(
        &self,
        own: &Side,
        other: &Side,
        pit: usize,
        player: &Player,
        notifier: &mut dyn Notifier,
    ) -> Result<ResolvedTurn, TakeViolation> {
        let home = self.config.home_half;
        let len = own.row().len();

        notifier.notify(&format!("{} tries to take {}", player, pit_name(pit, len)));
        if let Some(violation) = own.row().is_allowed_to_take(pit).violation() {
            notifier.notify(&format!(
                "{} take {} failed: {}",
                player,
                pit_name(pit, len),
                violation
            ));
            return Err(violation);
        }

        let mut own_row = own.row().clone();
        let mut other_row = other.row().clone();
        let mut index = pit;
        let mut first = true;
        let mut chain: SmallVec<[ChainStep; 4]> = SmallVec::new();

        loop {
            if !first {
                notifier.notify(&format!(
                    "{} tries to retake {}",
                    player,
                    pit_name(index, len)
                ));
                if !own_row.is_allowed_to_take(index).is_allowed() {
                    notifier.notify(&format!("{} can not retake", player));
                    break;
                }
            }

            notifier.notify(&format!(
                "{} {} {} with {}",
                player,
                if first { "take" } else { "retake" },
                pit_name(index, len),
                stones_text(own_row.pit(index).map_or(0, Pit::stones))
            ));
            let TakeOutcome { updated, last_seated } = own_row.take(index);
            own_row = updated;

            notifier.notify(&format!(
                "{} tries to steal on position {}",
                player,
                pit_name(last_seated, len)
            ));
            let captured = match own_row.is_possible_to_steal(last_seated, &other_row, home) {
                StealVerdict::Possible => {
                    notifier.notify(&format!(
                        "{} steals on position {} with {}",
                        player,
                        pit_name(last_seated, len),
                        stones_text(own_row.pit(last_seated).map_or(0, Pit::stones))
                    ));
                    own_row
                        .mirror_index(last_seated)
                        .and_then(|m| other_row.pit(m))
                        .map(Pit::stones)
                }
                StealVerdict::NotPossible(violation) => {
                    notifier.notify(&format!(
                        "{} can not steal because: {}",
                        player, violation
                    ));
                    None
                }
            };
            let StealOutcome { updated, other_updated } =
                own_row.steal(last_seated, &other_row, home);
            own_row = updated;
            other_row = other_updated;
            notifier.notify(&format!(
                "{} new stone count on position {}: {}",
                player,
                pit_name(last_seated, len),
                stones_text(own_row.pit(last_seated).map_or(0, Pit::stones))
            ));

            chain.push(ChainStep {
                pit: index,
                last_seated,
                captured,
            });

            // The chain stops the moment either row is lost; otherwise the
            // landing pit is re-evaluated as the next move-in-chain.
            if own_row.is_in_lose_condition(home) || other_row.is_in_lose_condition(home) {
                break;
            }
            index = last_seated;
            first = false;
        }

        let outcome = if other_row.is_in_lose_condition(home) {
            TurnOutcome::Win
        } else if own_row.is_in_lose_condition(home) {
            TurnOutcome::Lose
        } else {
            TurnOutcome::Continue
        };

        Ok(ResolvedTurn {
            own: own.replace(own_row),
            other: other.replace(other_row),
            outcome,
            chain,
        })
    }
}
