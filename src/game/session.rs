//! Match session: seat bookkeeping, handle staleness, move history.
//!
//! `Match` owns the live Sides and is the only place they are swapped for
//! their successors. Every request is screened against the caller's
//! `SideHandle` first, so moves issued against a board that has since
//! changed are dropped instead of applied to the wrong position.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::ai::MoveSource;
use crate::board::{Row, RowValidationError, TakeViolation};
use crate::core::{GameRng, MatchConfig, Player, PlayerId, StartingSide};
use crate::game::{ResolvedTurn, Side, SideHandle, SideId, TurnCoordinator, TurnOutcome};
use crate::notify::Notifier;

/// How the match answered a move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResponse {
    /// The handle was stale, foreign, or the match is over; nothing changed.
    Ignored,
    /// The take was illegal; the turn was not consumed.
    Rejected(TakeViolation),
    /// The turn resolved; handles for both successor Sides.
    Applied {
        /// Successor handle for the mover's Side.
        own: SideHandle,
        /// Successor handle for the opponent's Side.
        other: SideHandle,
        /// How the turn left the match.
        outcome: TurnOutcome,
    },
}

/// One applied move, as recorded in the match history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The Side that moved.
    pub side: SideId,
    /// The Side's version at the time of the move.
    pub version: u32,
    /// The pit the chain started from.
    pub pit: usize,
    /// The outcome of the resolved turn.
    pub outcome: TurnOutcome,
}

/// The final result of a decided match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: PlayerId,
    pub loser: PlayerId,
}

/// A two-player match over a fixed configuration.
#[derive(Clone, Debug)]
pub struct Match {
    config: MatchConfig,
    players: [Player; 2],
    sides: [Side; 2],
    active: usize,
    rng: GameRng,
    next_side_id: u32,
    initial_row: Row,
    history: Vector<MoveRecord>,
    result: Option<MatchResult>,
}

impl Match {
    /// Start a match with the default player names.
    pub fn new(config: MatchConfig, notifier: &mut dyn Notifier) -> Result<Self, RowValidationError> {
        let players = [
            Player::new(PlayerId::new(0), "Player 1"),
            Player::new(PlayerId::new(1), "Player 2"),
        ];
        Self::with_players(config, players, notifier)
    }

    /// Start a match with explicit players.
    pub fn with_players(
        config: MatchConfig,
        players: [Player; 2],
        notifier: &mut dyn Notifier,
    ) -> Result<Self, RowValidationError> {
        let initial_row = Row::from_counts(&config.layout.counts())?;
        let mut rng = GameRng::new(config.seed);
        let active = Self::pick_start(config.starting_side, &mut rng);
        let sides = [
            Side::new(SideId::new(0), initial_row.clone()),
            Side::new(SideId::new(1), initial_row.clone()),
        ];
        let game = Self {
            config,
            players,
            sides,
            active,
            rng,
            next_side_id: 2,
            initial_row,
            history: Vector::new(),
            result: None,
        };
        notifier.notify(&format!("{} turn.", game.players[game.active]));
        Ok(game)
    }

    fn pick_start(rule: StartingSide, rng: &mut GameRng) -> usize {
        match rule {
            StartingSide::SideA => 0,
            StartingSide::SideB => 1,
            StartingSide::Random => rng.gen_range_usize(0..2),
        }
    }

    /// Resolve a move for the Side the handle names.
    ///
    /// The handle must match the live active Side exactly, id and version;
    /// anything else (a stale version, the inactive seat, a Side from a
    /// previous reset, a decided match) is answered with
    /// [`MoveResponse::Ignored`].
    pub fn request_move(
        &mut self,
        handle: SideHandle,
        pit: usize,
        notifier: &mut dyn Notifier,
    ) -> MoveResponse {
        if self.result.is_some() || self.sides[self.active].handle() != handle {
            return MoveResponse::Ignored;
        }

        let player = &self.players[self.active];
        let coordinator = TurnCoordinator::new(&self.config);
        let resolved =
            match coordinator.resolve(&self.sides[self.active], &self.sides[1 - self.active], pit, player, notifier) {
                Ok(resolved) => resolved,
                Err(violation) => return MoveResponse::Rejected(violation),
            };

        self.apply(handle, pit, resolved, notifier)
    }

    fn apply(
        &mut self,
        handle: SideHandle,
        pit: usize,
        resolved: ResolvedTurn,
        notifier: &mut dyn Notifier,
    ) -> MoveResponse {
        let ResolvedTurn { own, other, outcome, .. } = resolved;
        let response = MoveResponse::Applied {
            own: own.handle(),
            other: other.handle(),
            outcome,
        };
        self.history.push_back(MoveRecord {
            side: handle.id,
            version: handle.version,
            pit,
            outcome,
        });
        self.sides[self.active] = own;
        self.sides[1 - self.active] = other;

        match outcome {
            TurnOutcome::Continue => {
                notifier.notify(&format!("{} ends the turn.", self.players[self.active]));
                self.active = 1 - self.active;
                notifier.notify(&format!("{} turn.", self.players[self.active]));
            }
            TurnOutcome::Win => {
                notifier.notify(&format!("{} wins", self.players[self.active]));
                self.result = Some(MatchResult {
                    winner: self.players[self.active].id(),
                    loser: self.players[1 - self.active].id(),
                });
            }
            TurnOutcome::Lose => {
                notifier.notify(&format!("{} lose", self.players[self.active]));
                self.result = Some(MatchResult {
                    winner: self.players[1 - self.active].id(),
                    loser: self.players[self.active].id(),
                });
            }
        }
        response
    }

    /// Restart from the configured layout with freshly identified Sides.
    ///
    /// The new SideIds have never been seen before, so handles from the
    /// previous game cannot match. Returns the new handles, first seat
    /// first.
    pub fn reset(&mut self, notifier: &mut dyn Notifier) -> (SideHandle, SideHandle) {
        let first = SideId::new(self.next_side_id);
        let second = SideId::new(self.next_side_id + 1);
        self.next_side_id += 2;
        self.sides = [
            Side::new(first, self.initial_row.clone()),
            Side::new(second, self.initial_row.clone()),
        ];
        self.active = Self::pick_start(self.config.starting_side, &mut self.rng);
        self.history = Vector::new();
        self.result = None;
        notifier.notify("Match reset.");
        notifier.notify(&format!("{} turn.", self.players[self.active]));
        (self.sides[0].handle(), self.sides[1].handle())
    }

    /// Ask a move source for a pit and play it for the active Side.
    ///
    /// Returns `None` when the source has no proposal or the match is over.
    pub fn step(
        &mut self,
        source: &mut dyn MoveSource,
        notifier: &mut dyn Notifier,
    ) -> Option<MoveResponse> {
        if self.result.is_some() {
            return None;
        }
        let own = &self.sides[self.active];
        let other = &self.sides[1 - self.active];
        let handle = own.handle();
        let pit = source.propose(own, other)?;
        Some(self.request_move(handle, pit, notifier))
    }

    /// Drive the match with one move source per seat until it is decided,
    /// a source stalls, or `max_turns` moves have been applied.
    pub fn play_out(
        &mut self,
        first: &mut dyn MoveSource,
        second: &mut dyn MoveSource,
        notifier: &mut dyn Notifier,
        max_turns: usize,
    ) -> Option<MatchResult> {
        for _ in 0..max_turns {
            if self.result.is_some() {
                break;
            }
            let response = if self.active == 0 {
                self.step(first, notifier)
            } else {
                self.step(second, notifier)
            };
            match response {
                Some(MoveResponse::Applied { .. }) => {}
                // A rejected or unanswerable proposal will repeat forever.
                Some(MoveResponse::Rejected(_)) | Some(MoveResponse::Ignored) | None => break,
            }
        }
        self.result
    }

    /// The live Sides, first seat first.
    #[must_use]
    pub fn sides(&self) -> &[Side; 2] {
        &self.sides
    }

    /// The Side whose turn it is.
    #[must_use]
    pub fn active_side(&self) -> &Side {
        &self.sides[self.active]
    }

    /// Handle for the Side whose turn it is.
    #[must_use]
    pub fn active_handle(&self) -> SideHandle {
        self.sides[self.active].handle()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// The player seated at the given live Side, if any.
    #[must_use]
    pub fn player_for(&self, id: SideId) -> Option<&Player> {
        self.sides
            .iter()
            .position(|side| side.id() == id)
            .map(|seat| &self.players[seat])
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The result, once the match is decided.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        self.result
    }

    /// The configuration the match was started with.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Render both rows for display, labelled per player, using the
    /// configured orientation.
    #[must_use]
    pub fn render_board(&self) -> String {
        format!(
            "{}:\n{}\n{}:\n{}",
            self.players[0],
            self.sides[0].row().pretty(self.config.orientation),
            self.players[1],
            self.sides[1].row().pretty(self.config.orientation),
        )
    }
}
