//! End-to-end scenarios driven through the public API.

use tic_tac_toe::ai::{self, ScoredMove};
use tic_tac_toe::Cell::{self, Empty as E, O, X};
use tic_tac_toe::{is_draw, winner, Board, Difficulty, GameError, GameState, MoveError, Outcome, Player};

fn board(rows: [[Cell; 3]; 3]) -> Board {
    Board::from_rows(rows)
}

/// Play the human moves in order, letting the AI answer each one.
fn play(difficulty: Difficulty, moves: &[(usize, usize)]) -> GameState {
    let mut state = GameState::new(difficulty);
    for &(row, col) in moves {
        state = state
            .apply_human_move(row, col)
            .unwrap_or_else(|err| panic!("({row}, {col}) rejected: {err}\n{}", state.board()));
        state = state.request_ai_move();
    }
    state
}

#[test]
fn opening_search_on_empty_board_is_neutral() {
    let empty = Board::new();
    let ScoredMove { row, col, score } = ai::best_move(&empty, Player::O, 5).unwrap();
    assert_eq!(score, 0);

    // No X reply to the chosen cell wins on the spot.
    let mut after = empty;
    after.place(row, col, Player::O).unwrap();
    for (r, c) in after.empty_cells() {
        let mut reply = after;
        reply.place(r, c, Player::X).unwrap();
        assert!(winner(&reply).is_none());
    }
}

#[test]
fn ai_completes_row_at_easy() {
    let state = GameState::from_position(
        board([[X, X, E], [O, O, E], [E, E, E]]),
        Difficulty::Easy,
    )
    .unwrap()
    .apply_human_move(2, 2)
    .unwrap();
    // X at (2,2) leaves O to move; O wins on row 1.
    let next = state.request_ai_move();
    assert_eq!(
        next.outcome(),
        Outcome::Won {
            player: Player::O,
            line: [(1, 0), (1, 1), (1, 2)],
        }
    );
}

#[test]
fn ai_blocks_and_forks_with_deeper_search() {
    let position = board([[X, X, E], [O, O, E], [E, E, E]]);
    for difficulty in [Difficulty::Medium, Difficulty::Hard] {
        let m = ai::best_move(&position, Player::O, difficulty.depth()).unwrap();
        assert_eq!((m.row, m.col), (0, 2), "{difficulty}");
    }
    let m = ai::best_move(&position, Player::O, Difficulty::Easy.depth()).unwrap();
    assert_eq!((m.row, m.col), (1, 2));
}

#[test]
fn full_board_without_line_is_a_draw() {
    let b = board([[X, O, X], [X, O, O], [O, X, X]]);
    assert!(is_draw(&b));
    assert_eq!(winner(&b), None);

    let state = GameState::from_position(b, Difficulty::Hard).unwrap();
    assert_eq!(state.outcome(), Outcome::Drawn);
}

#[test]
fn main_diagonal_win_is_reported() {
    let b = board([[X, E, E], [E, X, E], [E, E, X]]);
    assert_eq!(winner(&b), Some((Player::X, [(0, 0), (1, 1), (2, 2)])));
    assert!(!is_draw(&b));
}

#[test]
fn restart_after_win_resets_everything() {
    // This line beats the medium search.
    let state = play(Difficulty::Medium, &[(0, 0), (1, 0), (1, 1), (2, 0)]);
    assert!(matches!(
        state.outcome(),
        Outcome::Won {
            player: Player::X,
            ..
        }
    ));

    let fresh = state.restart();
    assert_eq!(fresh.board(), &Board::new());
    assert_eq!(fresh.current_player(), Player::X);
    assert_eq!(fresh.outcome(), Outcome::InProgress);
}

#[test]
fn easy_can_be_beaten() {
    let state = play(Difficulty::Easy, &[(0, 0), (0, 2), (1, 1), (2, 0)]);
    assert!(matches!(
        state.outcome(),
        Outcome::Won {
            player: Player::X,
            ..
        }
    ));
}

#[test]
fn rejected_move_leaves_state_intact() {
    let state = play(Difficulty::Hard, &[(1, 1)]);
    let snapshot = state;
    let taken = state.board().empty_cells().count();

    let occupied = state.apply_human_move(1, 1);
    assert_eq!(
        occupied,
        Err(GameError::InvalidMove(MoveError::CellOccupied { row: 1, col: 1 }))
    );
    assert_eq!(state, snapshot);
    assert_eq!(state.board().empty_cells().count(), taken);

    // Retrying elsewhere is fine.
    let (row, col) = state.board().empty_cells().next().unwrap();
    assert!(state.apply_human_move(row, col).is_ok());
}

#[test]
fn unknown_difficulty_is_rejected_before_a_game_exists() {
    assert!(matches!(
        GameState::new_game("extreme"),
        Err(GameError::InvalidDifficulty(name)) if name == "extreme"
    ));
    assert_eq!(GameState::new_game("hard").unwrap().difficulty(), Difficulty::Hard);
}
