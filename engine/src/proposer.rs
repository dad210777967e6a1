use crate::board::{Board, Mark};
use crate::policy::{Difficulty, choose_move};
use crate::rng::SessionRng;

/// A source of move suggestions. Both the local solver and any remote
/// suggestion service conform to this contract; every proposal is still
/// subject to [`sanitize_proposal`] before it is trusted.
pub trait MoveProposer {
    fn propose(&mut self, board: &Board, me: Mark, opp: Mark, difficulty: Difficulty)
    -> Option<usize>;
}

/// The in-process proposer: difficulty policy over the minimax solver.
pub struct LocalSearch {
    rng: SessionRng,
}

impl LocalSearch {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }
}

impl MoveProposer for LocalSearch {
    fn propose(
        &mut self,
        board: &Board,
        me: Mark,
        opp: Mark,
        difficulty: Difficulty,
    ) -> Option<usize> {
        choose_move(board, me, opp, difficulty, &mut self.rng)
    }
}

/// Extracts the first standalone digit 0-8 from free text, the way a move
/// is parsed out of a text-generation response. Digits embedded in larger
/// words or numbers ("cell42", "90") do not count.
pub fn parse_suggested_move(text: &str) -> Option<usize> {
    let chars: Vec<char> = text.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_digit() || c == '9' {
            continue;
        }
        let boundary_before = i == 0 || !is_word_char(chars[i - 1]);
        let boundary_after = i + 1 == chars.len() || !is_word_char(chars[i + 1]);
        if boundary_before && boundary_after {
            return Some(c as usize - '0' as usize);
        }
    }
    None
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Legality gate for externally-sourced moves: keeps a legal proposal and
/// substitutes the lowest-index legal move for anything else. None only when
/// the board has no legal moves at all.
pub fn sanitize_proposal(board: &Board, proposal: Option<usize>) -> Option<usize> {
    match proposal {
        Some(index) if board.is_legal_move(index) => Some(index),
        _ => board.legal_moves().first().copied(),
    }
}
