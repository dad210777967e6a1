use crate::board::{Board, Mark};

/// Lowest-index legal move that makes `mark` an immediate winner.
pub fn winning_move(board: &Board, mark: Mark) -> Option<usize> {
    board.legal_moves().into_iter().find(|&index| {
        board
            .apply_move(index, mark)
            .is_ok_and(|next| next.winner() == Some(mark))
    })
}

/// One-ply win-or-block scan: a winning move for `me` if one exists,
/// otherwise the cell where `opp` would win next turn (the block, still an
/// index where *me* should move). The win scan runs strictly before the
/// block scan; that ordering is the tie-break when both exist. None is a
/// legitimate negative result, not an error.
pub fn try_win_or_block(board: &Board, me: Mark, opp: Mark) -> Option<usize> {
    winning_move(board, me).or_else(|| winning_move(board, opp))
}
