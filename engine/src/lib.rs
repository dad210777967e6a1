mod board;
mod error;
mod policy;
mod proposer;
mod rng;
mod search;
mod tactics;

pub use board::{Board, CELL_COUNT, Cell, Mark, WIN_LINES};
pub use error::EngineError;
pub use policy::{Difficulty, EDGE_CELLS, choose_move};
pub use proposer::{LocalSearch, MoveProposer, parse_suggested_move, sanitize_proposal};
pub use rng::{MoveRng, SessionRng};
pub use search::best_move;
pub use tactics::{try_win_or_block, winning_move};
