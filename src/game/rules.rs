//! Win and draw detection.

use super::field::Board;
use super::types::{Player, WinningLine};

/// Every line checked for a win: rows, then columns, then the two diagonals.
const LINES: [WinningLine; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The first completed line in check order, with its owner.
pub fn winner(board: &Board) -> Option<(Player, WinningLine)> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line.map(|(row, col)| board.get(row, col));
        match a.player() {
            Some(player) if a == b && a == c => Some((player, line)),
            _ => None,
        }
    })
}

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    winner(board).is_none() && board.is_full()
}
