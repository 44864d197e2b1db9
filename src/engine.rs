//! The game engine: one match's state machine.
//!
//! [`GameEngine`] owns the board, the player to move, and the match
//! status, and routes every mutation through
//! [`apply_move`](GameEngine::apply_move) and
//! [`reset`](GameEngine::reset). It performs no I/O; adapters render
//! from the read-only queries.

use crate::cell::{Cell, InvalidIndex};
use crate::invariants::check_invariants;
use crate::rules;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Status of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Match is ongoing.
    InProgress,
    /// Match ended with a winner.
    Won(Player),
    /// Match ended with a full board and no winner.
    Drawn,
}

impl MatchStatus {
    /// Returns the winner, if the match was won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            MatchStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::InProgress => write!(f, "in progress"),
            MatchStatus::Won(player) => write!(f, "won by {player}"),
            MatchStatus::Drawn => write!(f, "drawn"),
        }
    }
}

/// Why a move was turned away.
///
/// Rejections are ordinary results, not errors: the adapter reports
/// them to the user, and the match state is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The target cell already holds a mark.
    AlreadyOccupied,
    /// The match has already been won or drawn.
    MatchOver,
}

/// What an accepted move did to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mover completed a line and won.
    Win(Player),
    /// The board filled with no line; the match is drawn.
    Draw,
    /// The match continues; the carried player is now to move.
    Continue(Player),
}

/// Result of [`GameEngine::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The move was applied to the board.
    Accepted(MoveOutcome),
    /// The move was refused and nothing changed.
    Rejected(RejectReason),
}

impl MoveResult {
    /// Returns true if the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted(_))
    }
}

/// State machine for one tic-tac-toe match.
///
/// Created with an empty board, X to move, and
/// [`MatchStatus::InProgress`]; [`reset`](GameEngine::reset) returns it
/// to exactly that state. One instance models one match, driven by one
/// interaction stream at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: MatchStatus,
}

impl GameEngine {
    /// Creates a new engine ready for the first move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: MatchStatus::InProgress,
        }
    }

    /// Applies the current player's mark to `cell`.
    ///
    /// Rule violations come back as [`MoveResult::Rejected`] with the
    /// board, player, and status untouched. On an accepted move the
    /// engine places the mark, checks the eight winning lines, then
    /// checks for a full board, and only if the match continues flips
    /// the player to move.
    #[instrument(skip(self), fields(cell = %cell, player = %self.current_player))]
    pub fn apply_move(&mut self, cell: Cell) -> MoveResult {
        if self.status != MatchStatus::InProgress {
            debug!("move refused, match already over");
            return MoveResult::Rejected(RejectReason::MatchOver);
        }
        if !self.board.is_empty(cell) {
            debug!("move refused, cell already occupied");
            return MoveResult::Rejected(RejectReason::AlreadyOccupied);
        }

        self.board.set(cell, Square::Occupied(self.current_player));

        // Win before draw: a full board holding a completed line is a win.
        if let Some(winner) = rules::check_winner(&self.board) {
            self.status = MatchStatus::Won(winner);
            check_invariants(self);
            return MoveResult::Accepted(MoveOutcome::Win(winner));
        }

        if rules::is_full(&self.board) {
            self.status = MatchStatus::Drawn;
            check_invariants(self);
            return MoveResult::Accepted(MoveOutcome::Draw);
        }

        self.current_player = self.current_player.opponent();
        check_invariants(self);
        MoveResult::Accepted(MoveOutcome::Continue(self.current_player))
    }

    /// Index-based entry point for adapters that address cells `0..=8`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIndex`] if `index` is outside `0..=8`. That is
    /// a caller bug, distinct from the rule rejections carried inside
    /// the `Ok` value.
    #[instrument(skip(self))]
    pub fn apply_move_index(&mut self, index: usize) -> Result<MoveResult, InvalidIndex> {
        let cell = Cell::from_index(index)?;
        Ok(self.apply_move(cell))
    }

    /// Returns the engine to its initial state, whatever the current one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = MatchStatus::InProgress;
        debug!("match reset");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// Frozen once the match is no longer in progress: after a win it
    /// still names the mover who won.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the match status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Returns true if the match has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != MatchStatus::InProgress
    }

    /// Cells still open for play.
    pub fn valid_moves(&self) -> Vec<Cell> {
        Cell::valid_moves(&self.board)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
