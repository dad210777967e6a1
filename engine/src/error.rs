use thiserror::Error;

/// Caller-input errors surfaced by the board model. Policy-level fallback
/// conditions (terminal root, bad external move) are recovered locally and
/// never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("board must have exactly 9 cells, got {cell_count}")]
    InvalidBoard { cell_count: usize },
    #[error("illegal move at cell {index}: out of range or occupied")]
    IllegalMove { index: usize },
}
