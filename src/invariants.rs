//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every
//! accepted move. They are asserted in debug builds and can be tested
//! independently.

use crate::engine::{GameEngine, MatchStatus};
use crate::rules;
use crate::types::{Player, Square};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: mark counts stay balanced.
///
/// Players alternate from X, so the number of X marks and O marks on
/// the board can never differ by more than one.
pub struct BoardBalanced;

impl Invariant<GameEngine> for BoardBalanced {
    fn holds(engine: &GameEngine) -> bool {
        let x_count = engine
            .board()
            .squares()
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Player::X)))
            .count();
        let o_count = engine
            .board()
            .squares()
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Player::O)))
            .count();

        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X and O counts differ by at most one"
    }
}

/// Invariant: the recorded status agrees with the board contents.
pub struct StatusConsistent;

impl Invariant<GameEngine> for StatusConsistent {
    fn holds(engine: &GameEngine) -> bool {
        let valid = match engine.status() {
            MatchStatus::Won(player) => rules::check_winner(engine.board()) == Some(player),
            MatchStatus::Drawn => rules::is_draw(engine.board()),
            MatchStatus::InProgress => {
                rules::check_winner(engine.board()).is_none() && !rules::is_full(engine.board())
            }
        };
        if !valid {
            warn!(status = %engine.status(), "status disagrees with board");
        }
        valid
    }

    fn description() -> &'static str {
        "match status matches what the board shows"
    }
}

/// Asserts all engine invariants (debug builds only).
pub(crate) fn check_invariants(engine: &GameEngine) {
    debug_assert!(
        BoardBalanced::holds(engine),
        "{}",
        BoardBalanced::description()
    );
    debug_assert!(
        StatusConsistent::holds(engine),
        "{}",
        StatusConsistent::description()
    );
}
