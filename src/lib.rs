//! Tic-tac-toe against a minimax opponent.
//!
//! The crate holds the game core: the board, win/draw detection, the turn
//! controller and the depth-limited search that picks the computer's moves.
//! A front end drives it through [`GameState`] values, which every operation
//! takes and returns explicitly.

pub mod ai;
pub mod error;
pub mod game;
pub mod i18n;
pub mod storage;

pub use error::{GameError, MoveError, Result};
pub use game::field::Board;
pub use game::logic::GameState;
pub use game::rules::{is_draw, winner};
pub use game::types::{Cell, Difficulty, Outcome, Player, Statistics, WinningLine};
