use tracing::{debug, error, info, warn};

use super::field::{Board, BOARD_SIZE};
use super::rules;
use super::types::{Difficulty, Outcome, Player};
use crate::ai;
use crate::error::{GameError, MoveError, Result};

/// The human always plays this side.
pub const HUMAN: Player = Player::X;
/// The AI always plays this side.
pub const COMPUTER: Player = Player::O;

/// Central game state holding everything needed for one round.
///
/// Operations never mutate `self`; each returns the next state, so a rejected
/// move leaves the caller holding the unchanged original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: Player,
    outcome: Outcome,
    difficulty: Difficulty,
}

impl GameState {
    /// Fresh game with X to move.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            current: HUMAN,
            outcome: Outcome::InProgress,
            difficulty,
        }
    }

    /// Resume from an arbitrary position. The side to move follows from the
    /// mark counts; X moves whenever both sides have the same number of marks.
    pub fn from_position(board: Board, difficulty: Difficulty) -> Result<Self> {
        let (xs, os) = (board.count(Player::X), board.count(Player::O));
        let mut current = match xs.checked_sub(os) {
            Some(0) => HUMAN,
            Some(1) => COMPUTER,
            _ => return Err(GameError::InvalidPosition { xs, os }),
        };
        let outcome = match rules::winner(&board) {
            Some((player, line)) => {
                current = player;
                Outcome::Won { player, line }
            }
            None if rules::is_draw(&board) => Outcome::Drawn,
            None => Outcome::InProgress,
        };
        Ok(Self {
            board,
            current,
            outcome,
            difficulty,
        })
    }

    /// Start a game from a difficulty name (`easy`, `medium` or `hard`).
    pub fn new_game(difficulty: &str) -> Result<Self> {
        let difficulty: Difficulty = difficulty.parse()?;
        debug!(%difficulty, "new game");
        Ok(Self::new(difficulty))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move, or the side that made the final move once the game is over.
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns `true` if the human may play at (row, col) right now.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.check_move(row, col, HUMAN).is_ok()
    }

    /// Play the human's mark at (row, col).
    pub fn apply_human_move(&self, row: usize, col: usize) -> Result<Self> {
        let mut next = *self;
        next.make_move(row, col, HUMAN).inspect_err(|err| {
            warn!(row, col, %err, "move rejected");
        })?;
        Ok(next)
    }

    /// Let the AI pick and play a move.
    ///
    /// Returns the state unchanged unless the game is running and it is O's turn.
    pub fn request_ai_move(&self) -> Self {
        if self.outcome.is_over() || self.current != COMPUTER {
            return *self;
        }

        let chosen = match ai::best_move(&self.board, COMPUTER, self.difficulty.depth()) {
            Ok(chosen) => chosen,
            Err(err) => {
                // A running game on O's turn always has an empty cell.
                error!(%err, board = %self.board, "AI asked to move with no empty cell");
                panic!("{err}");
            }
        };

        let mut next = *self;
        if let Err(err) = next.make_move(chosen.row, chosen.col, COMPUTER) {
            error!(%err, row = chosen.row, col = chosen.col, "AI produced an illegal move");
            panic!("{err}");
        }
        next
    }

    /// Suggest a move for the human at the strongest search depth.
    pub fn hint(&self) -> Option<(usize, usize)> {
        if self.outcome.is_over() || self.current != HUMAN {
            return None;
        }
        ai::best_move(&self.board, HUMAN, Difficulty::Hard.depth())
            .ok()
            .map(|m| (m.row, m.col))
    }

    /// Start a fresh round, keeping the difficulty.
    pub fn restart(&self) -> Self {
        let mut next = *self;
        next.board.clear();
        next.current = HUMAN;
        next.outcome = Outcome::InProgress;
        debug!("game restarted");
        next
    }

    fn check_move(
        &self,
        row: usize,
        col: usize,
        player: Player,
    ) -> std::result::Result<(), MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameFinished);
        }
        if player != self.current {
            return Err(MoveError::NotHumanTurn);
        }
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if !self.board.is_empty(row, col) {
            return Err(MoveError::CellOccupied { row, col });
        }
        Ok(())
    }

    /// Place, then re-derive the outcome: win first, then draw, else flip turns.
    fn make_move(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> std::result::Result<(), MoveError> {
        self.check_move(row, col, player)?;
        self.board.place(row, col, player)?;
        debug!(row, col, %player, "move applied");

        if let Some((winner, line)) = rules::winner(&self.board) {
            info!(%winner, ?line, "game won");
            self.outcome = Outcome::Won {
                player: winner,
                line,
            };
        } else if rules::is_draw(&self.board) {
            info!("game drawn");
            self.outcome = Outcome::Drawn;
        } else {
            self.current = player.opponent();
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}
