//! Tic-tac-toe game engine.
//!
//! This crate implements the state machine of a single tic-tac-toe match:
//! a 3x3 [`Board`], two players alternating from [`Player::X`], win and
//! draw detection, and reset. It performs no I/O — a presentation layer
//! (terminal, web page, test harness) drives the engine through
//! [`GameEngine::apply_move`] and renders whatever the read-only queries
//! report.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Cell, GameEngine, MoveOutcome, MoveResult, Player};
//!
//! let mut game = GameEngine::new();
//! let result = game.apply_move(Cell::Center);
//! assert_eq!(result, MoveResult::Accepted(MoveOutcome::Continue(Player::O)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod engine;
mod invariants;
mod rules;
mod types;

pub use cell::{Cell, InvalidIndex};
pub use engine::{GameEngine, MatchStatus, MoveOutcome, MoveResult, RejectReason};
pub use invariants::{BoardBalanced, Invariant, StatusConsistent};
pub use rules::{check_winner, is_draw, is_full};
pub use types::{Board, Player, Square};
