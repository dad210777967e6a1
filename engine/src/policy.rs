use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark};
use crate::rng::MoveRng;
use crate::search::best_move;
use crate::tactics::{try_win_or_block, winning_move};

/// How often the engine deviates from optimal play. Supplied per call; the
/// engine holds no difficulty state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

/// The non-corner, non-center cells preferred by the easy tier.
pub const EDGE_CELLS: [usize; 4] = [1, 3, 5, 7];

const MEDIUM_OPTIMAL_CHANCE: f64 = 0.75;
const EASY_TAKE_WIN_CHANCE: f64 = 0.2;
const EASY_OPTIMAL_CHANCE: f64 = 0.2;

/// Selects one legal move for `me` under the given tier. The tiers are not
/// different algorithms, just different sampling policies over the same
/// solver, the tactical scan, and uniform noise.
///
/// Returns None only when the board has no legal moves. Whatever the tier
/// computed, an illegal result is replaced by the lowest-index legal move
/// before it reaches the caller.
pub fn choose_move<R: MoveRng>(
    board: &Board,
    me: Mark,
    opp: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    let legal = board.legal_moves();
    if legal.is_empty() {
        return None;
    }

    let candidate = match difficulty {
        Difficulty::Hard => best_move(board, me, opp),
        Difficulty::Medium => medium_move(board, me, opp, &legal, rng),
        Difficulty::Easy => easy_move(board, me, opp, &legal, rng),
    };

    match candidate {
        Some(index) if board.is_legal_move(index) => Some(index),
        _ => legal.first().copied(),
    }
}

/// Forced wins and blocks are always taken; otherwise mostly optimal with a
/// quarter of the moves drawn uniformly from the legal set.
fn medium_move<R: MoveRng>(
    board: &Board,
    me: Mark,
    opp: Mark,
    legal: &[usize],
    rng: &mut R,
) -> Option<usize> {
    if let Some(index) = try_win_or_block(board, me, opp) {
        return Some(index);
    }
    if rng.chance(MEDIUM_OPTIMAL_CHANCE) {
        best_move(board, me, opp)
    } else {
        pick_uniform(legal, rng)
    }
}

/// Occasionally takes a win or plays optimally; the rest of the time plays a
/// deliberately weak move that favors edge cells over corners and center.
fn easy_move<R: MoveRng>(
    board: &Board,
    me: Mark,
    opp: Mark,
    legal: &[usize],
    rng: &mut R,
) -> Option<usize> {
    if rng.chance(EASY_TAKE_WIN_CHANCE) {
        if let Some(index) = winning_move(board, me) {
            return Some(index);
        }
    }
    if rng.chance(EASY_OPTIMAL_CHANCE) {
        return best_move(board, me, opp);
    }

    let edges: Vec<usize> = legal
        .iter()
        .copied()
        .filter(|index| EDGE_CELLS.contains(index))
        .collect();
    if edges.is_empty() {
        pick_uniform(legal, rng)
    } else {
        pick_uniform(&edges, rng)
    }
}

fn pick_uniform<R: MoveRng>(moves: &[usize], rng: &mut R) -> Option<usize> {
    if moves.is_empty() {
        None
    } else {
        Some(moves[rng.pick_index(moves.len())])
    }
}
