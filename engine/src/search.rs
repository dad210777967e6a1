use crate::board::{Board, Mark};
use crate::tactics::winning_move;

const WIN_SCORE: i32 = 10;

/// Game-theoretically optimal move for `me` against a perfectly playing
/// `opp`, both alternating from the current board onward.
///
/// Returns None only when the board is already terminal; callers are
/// expected to check for legal moves first and otherwise fall back to any
/// legal move. A winning move short-circuits the search; the full search
/// would find the same move, just more slowly.
pub fn best_move(board: &Board, me: Mark, opp: Mark) -> Option<usize> {
    if let Some(index) = winning_move(board, me) {
        return Some(index);
    }
    let (_, index) = minimax(board, me, opp, me, 0, i32::MIN, i32::MAX);
    index
}

fn terminal_score(board: &Board, me: Mark, depth: i32) -> Option<i32> {
    match board.winner() {
        // Depth bias: prefer faster wins and slower losses.
        Some(winner) if winner == me => Some(WIN_SCORE - depth),
        Some(_) => Some(depth - WIN_SCORE),
        None if board.is_draw() => Some(0),
        None => None,
    }
}

/// Alpha-beta minimax over the full remaining game tree (at most 9 plies).
/// Moves are explored in ascending cell index and only a strictly better
/// score replaces the incumbent, so the earliest-explored move wins ties.
fn minimax(
    board: &Board,
    me: Mark,
    opp: Mark,
    turn: Mark,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
) -> (i32, Option<usize>) {
    if let Some(score) = terminal_score(board, me, depth) {
        return (score, None);
    }

    let maximizing = turn == me;
    let next_turn = if maximizing { opp } else { me };
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_index = None;

    for index in board.legal_moves() {
        let Ok(next) = board.apply_move(index, turn) else {
            continue;
        };
        let (score, _) = minimax(&next, me, opp, next_turn, depth + 1, alpha, beta);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_index = Some(index);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_index = Some(index);
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            break;
        }
    }

    (best_score, best_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_the_immediate_win() {
        let board = Board::from_pattern("XX.OO....");
        assert_eq!(best_move(&board, Mark::X, Mark::O), Some(2));
    }

    #[test]
    fn test_blocks_the_opponent_win() {
        // No win for X anywhere; 2 is the only move denying O's top row.
        let board = Board::from_pattern("OO.X.....");
        assert_eq!(best_move(&board, Mark::X, Mark::O), Some(2));
    }

    #[test]
    fn test_completes_the_last_empty_cell() {
        let board = Board::from_pattern("XX.OOXXOO");
        assert_eq!(best_move(&board, Mark::X, Mark::O), Some(2));
    }

    #[test]
    fn test_empty_board_tie_break_is_lowest_index() {
        // All opening moves draw under perfect play; equal scores keep the
        // earliest-explored move, so the answer is cell 0 every time.
        for _ in 0..3 {
            assert_eq!(best_move(&Board::empty(), Mark::X, Mark::O), Some(0));
        }
    }

    #[test]
    fn test_terminal_root_returns_no_move() {
        assert_eq!(best_move(&Board::from_pattern("XOXXOOOXX"), Mark::X, Mark::O), None);
        assert_eq!(best_move(&Board::from_pattern("XXXOO...."), Mark::O, Mark::X), None);
    }

    #[test]
    fn test_answers_the_double_corner_trap() {
        // X holds opposite corners, O the center. Any corner reply by O
        // hands X a fork; only an edge survives.
        let board = Board::from_pattern("X...O...X");
        let index = best_move(&board, Mark::O, Mark::X).unwrap();
        assert!([1, 3, 5, 7].contains(&index), "corner reply {index} loses");
    }

    #[test]
    fn test_works_with_the_check_mark() {
        let board = Board::from_pattern("✓✓.OO....");
        assert_eq!(best_move(&board, Mark::Check, Mark::O), Some(2));
    }

    #[test]
    fn test_hard_self_play_always_draws() {
        let mut board = Board::empty();
        let (mut turn, mut other) = (Mark::X, Mark::O);

        while board.winner().is_none() && !board.is_draw() {
            let index = best_move(&board, turn, other).unwrap();
            board = board.apply_move(index, turn).unwrap();
            std::mem::swap(&mut turn, &mut other);
        }

        assert_eq!(board.winner(), None);
        assert!(board.is_draw());
    }

    #[test]
    fn test_never_loses_after_any_first_reply() {
        // X opens anywhere, O answers optimally from there on both sides;
        // the opener alone never beats perfect play.
        for opening in 0..9 {
            let mut board = Board::empty().apply_move(opening, Mark::X).unwrap();
            let (mut turn, mut other) = (Mark::O, Mark::X);
            while board.winner().is_none() && !board.is_draw() {
                let index = best_move(&board, turn, other).unwrap();
                board = board.apply_move(index, turn).unwrap();
                std::mem::swap(&mut turn, &mut other);
            }
            assert_ne!(board.winner(), Some(Mark::X), "opening {opening} beat the engine");
        }
    }
}
