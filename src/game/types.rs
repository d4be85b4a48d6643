use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// One of the two sides. The human always plays X and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// The content of a single square on the 3×3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Three (row, col) coordinates forming a completed row, column or diagonal.
pub type WinningLine = [(usize, usize); 3];

/// Terminal-state authority for a game, recomputed after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won { player: Player, line: WinningLine },
    Drawn,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// AI strength. Each level is a fixed search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    /// Plies the search explores past the candidate move before scoring 0.
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::InvalidDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Cumulative win/loss/draw statistics across multiple rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub human_wins: u32,
    pub ai_wins: u32,
    pub draws: u32,
}

impl Statistics {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Won {
                player: Player::X, ..
            } => self.human_wins += 1,
            Outcome::Won {
                player: Player::O, ..
            } => self.ai_wins += 1,
            Outcome::Drawn => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_depth_table() {
        assert_eq!(Difficulty::Easy.depth(), 1);
        assert_eq!(Difficulty::Medium.depth(), 3);
        assert_eq!(Difficulty::Hard.depth(), 5);
    }

    #[test]
    fn difficulty_parses_known_names() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Medium ".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
    }

    #[test]
    fn difficulty_rejects_unknown_names() {
        assert_eq!(
            "nightmare".parse::<Difficulty>(),
            Err(GameError::InvalidDifficulty("nightmare".to_string()))
        );
        assert!("".parse::<Difficulty>().is_err());
    }

    #[test]
    fn difficulty_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let back: Difficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(back, Difficulty::Easy);
    }

    #[test]
    fn statistics_record_each_outcome() {
        let line = [(0, 0), (0, 1), (0, 2)];
        let mut stats = Statistics::default();
        stats.record(&Outcome::Won {
            player: Player::X,
            line,
        });
        stats.record(&Outcome::Won {
            player: Player::O,
            line,
        });
        stats.record(&Outcome::Won {
            player: Player::O,
            line,
        });
        stats.record(&Outcome::Drawn);
        stats.record(&Outcome::InProgress);

        assert_eq!(
            stats,
            Statistics {
                human_wins: 1,
                ai_wins: 2,
                draws: 1
            }
        );

        stats.reset();
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn cell_and_player_conversions() {
        assert_eq!(Cell::from(Player::X).player(), Some(Player::X));
        assert_eq!(Cell::from(Player::O).player(), Some(Player::O));
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Player::X.opponent(), Player::O);
    }
}
