use tracing::{debug, instrument};

use crate::error::{GameError, Result};
use crate::game::field::Board;
use crate::game::rules;
use crate::game::types::Player;

/// Score of a position won by the maximizer.
pub const WIN: i32 = 1;
/// Score of a position lost by the maximizer.
pub const LOSS: i32 = -1;

/// A chosen cell together with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub row: usize,
    pub col: usize,
    pub score: i32,
}

/// Pick the best cell for `player`, looking `depth` plies past each candidate.
///
/// Candidates are scanned in row-major order and only a strictly greater
/// score replaces the current choice, so ties go to the first cell found.
/// The caller's board is never touched; the search runs on its own copy.
#[instrument(level = "debug", skip(board), fields(empty = board.empty_cells().count()))]
pub fn best_move(board: &Board, player: Player, depth: u32) -> Result<ScoredMove> {
    let mut scratch = *board;
    let candidates: Vec<(usize, usize)> = board.empty_cells().collect();

    let mut best: Option<ScoredMove> = None;
    let mut alpha = i32::MIN;

    for (row, col) in candidates {
        scratch.place(row, col, player)?;
        let score = minimax(&mut scratch, player, depth, alpha, i32::MAX, false);
        scratch.remove(row, col);

        if best.map_or(true, |b| score > b.score) {
            best = Some(ScoredMove { row, col, score });
            alpha = score;
        }
        if score >= WIN {
            break; // nothing can beat a forced win
        }
    }

    let chosen = best.ok_or(GameError::InvariantBreach)?;
    debug!(row = chosen.row, col = chosen.col, score = chosen.score, "search finished");
    Ok(chosen)
}

/// Minimax with alpha-beta pruning over a board mutated in place.
/// `maximizing` = true means it's `me`'s turn, false = opponent's turn.
fn minimax(
    board: &mut Board,
    me: Player,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    // The side that just moved completed a line.
    if rules::winner(board).is_some() {
        return if maximizing { LOSS } else { WIN };
    }
    if board.is_full() || depth == 0 {
        return 0;
    }

    let mover = if maximizing { me } else { me.opponent() };
    let cells: Vec<(usize, usize)> = board.empty_cells().collect();

    if maximizing {
        let mut best = i32::MIN;
        for (row, col) in cells {
            place_unchecked(board, row, col, mover);
            let score = minimax(board, me, depth - 1, alpha, beta, false);
            board.remove(row, col);

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break; // beta cutoff
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for (row, col) in cells {
            place_unchecked(board, row, col, mover);
            let score = minimax(board, me, depth - 1, alpha, beta, true);
            board.remove(row, col);

            best = best.min(score);
            beta = beta.min(score);
            if alpha >= beta {
                break; // alpha cutoff
            }
        }
        best
    }
}

/// Cells come from `empty_cells`, so placement cannot fail.
fn place_unchecked(board: &mut Board, row: usize, col: usize, player: Player) {
    let placed = board.place(row, col, player);
    debug_assert!(placed.is_ok());
}
