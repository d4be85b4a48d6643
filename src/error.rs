use thiserror::Error;

/// Why a move was refused. A refused move never touches the board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("cell ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: usize, col: usize },

    #[error("the game is already over")]
    GameFinished,

    #[error("it is not the human player's turn")]
    NotHumanTurn,
}

/// Errors surfaced by the game core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("unknown difficulty `{0}` (expected easy, medium or hard)")]
    InvalidDifficulty(String),

    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),

    #[error("position has {xs} X marks and {os} O marks; turns must alternate from X")]
    InvalidPosition { xs: usize, os: usize },

    #[error("AI asked to move on a board with no empty cell")]
    InvariantBreach,
}

pub type Result<T> = std::result::Result<T, GameError>;
