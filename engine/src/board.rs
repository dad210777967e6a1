use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A player symbol. Three symbols exist, but at most two distinct marks
/// participate in any single game; marks carry no behavior beyond equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
    #[serde(rename = "✓")]
    Check,
}

impl Mark {
    pub fn as_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Check => '✓',
        }
    }
}

/// Empty or occupied by exactly one mark. Cells never transition back to
/// empty; successor boards are new values.
pub type Cell = Option<Mark>;

pub const CELL_COUNT: usize = 9;

/// The 8 index triples that win the game: rows, columns, diagonals.
/// Checked in this order; at most one mark can own a completed line in a
/// legal game, so the order is not observable to callers.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3×3 grid, row-major (index = row×3 + column). Value type: applying a
/// move produces a new board, so search branches never alias.
///
/// Serde goes through the cell-count check, so a payload with the wrong
/// number of cells is rejected at deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Validating constructor for caller-supplied cell vectors.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, EngineError> {
        Self::try_from(cells)
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn is_legal_move(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }

    /// The sole mutation path: returns a new board with `mark` placed at
    /// `index`, leaving `self` untouched.
    pub fn apply_move(&self, index: usize, mark: Mark) -> Result<Board, EngineError> {
        if !self.is_legal_move(index) {
            return Err(EngineError::IllegalMove { index });
        }
        let mut next = self.clone();
        next.cells[index] = Some(mark);
        Ok(next)
    }

    /// The mark owning a completed win line, if any.
    pub fn winner(&self) -> Option<Mark> {
        for [a, b, c] in WIN_LINES {
            if let Some(mark) = self.cells[a] {
                if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }

    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && self.cells.iter().all(|cell| cell.is_some())
    }

    /// Empty cell indices in ascending order. Ascending order is the
    /// tie-break for the search and the tactical scans; recomputed fresh on
    /// every call.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    /// Three rows of three characters, `.` for empty. Diagnostic and prompt
    /// use only.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(CELL_COUNT + 2);
        for (index, cell) in self.cells.iter().enumerate() {
            if index > 0 && index % 3 == 0 {
                out.push('\n');
            }
            out.push(cell.map_or('.', |mark| mark.as_char()));
        }
        out
    }

    /// Builds a board from a 9-character pattern like "XX.OO....".
    #[cfg(test)]
    pub fn from_pattern(pattern: &str) -> Self {
        let cells: Vec<Cell> = pattern
            .chars()
            .map(|c| match c {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                '✓' => Some(Mark::Check),
                _ => None,
            })
            .collect();
        Self::from_cells(cells).unwrap()
    }
}

impl TryFrom<Vec<Cell>> for Board {
    type Error = EngineError;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        let cell_count = cells.len();
        let cells: [Cell; CELL_COUNT] = cells
            .try_into()
            .map_err(|_| EngineError::InvalidBoard { cell_count })?;
        Ok(Self { cells })
    }
}

impl From<Board> for Vec<Cell> {
    fn from(board: Board) -> Self {
        board.cells.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells_rejects_wrong_cell_count() {
        assert_eq!(
            Board::from_cells(vec![None; 8]),
            Err(EngineError::InvalidBoard { cell_count: 8 })
        );
        assert_eq!(
            Board::from_cells(vec![None; 10]),
            Err(EngineError::InvalidBoard { cell_count: 10 })
        );
    }

    #[test]
    fn test_apply_move_is_pure() {
        let board = Board::from_pattern("X........");
        let first = board.apply_move(4, Mark::O).unwrap();
        let second = board.apply_move(4, Mark::O).unwrap();

        assert_eq!(first, second);
        assert_eq!(board, Board::from_pattern("X........"));
        assert_eq!(first.cells()[4], Some(Mark::O));
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let board = Board::from_pattern("X........");
        assert_eq!(
            board.apply_move(0, Mark::O),
            Err(EngineError::IllegalMove { index: 0 })
        );
    }

    #[test]
    fn test_apply_move_rejects_out_of_range_index() {
        let board = Board::empty();
        assert_eq!(
            board.apply_move(9, Mark::X),
            Err(EngineError::IllegalMove { index: 9 })
        );
    }

    #[test]
    fn test_winner_detects_rows_columns_and_diagonals() {
        assert_eq!(Board::from_pattern("XXX......").winner(), Some(Mark::X));
        assert_eq!(Board::from_pattern("...OOO...").winner(), Some(Mark::O));
        assert_eq!(Board::from_pattern("X..X..X..").winner(), Some(Mark::X));
        assert_eq!(Board::from_pattern("O...O...O").winner(), Some(Mark::O));
        assert_eq!(Board::from_pattern("..X.X.X..").winner(), Some(Mark::X));
        assert_eq!(Board::from_pattern("✓✓✓......").winner(), Some(Mark::Check));
    }

    #[test]
    fn test_winner_none_on_open_board() {
        assert_eq!(Board::empty().winner(), None);
        assert_eq!(Board::from_pattern("XX.OO....").winner(), None);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let board = Board::from_pattern("XOXXOOOXX");
        assert_eq!(board.winner(), board.winner());
        assert_eq!(board.is_draw(), board.is_draw());
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        let board = Board::from_pattern("XOXXOOOXX");
        assert_eq!(board.winner(), None);
        assert!(board.is_draw());
    }

    #[test]
    fn test_board_with_winner_is_not_a_draw() {
        let board = Board::from_pattern("XXXOOXOXO");
        assert_eq!(board.winner(), Some(Mark::X));
        assert!(!board.is_draw());
    }

    #[test]
    fn test_legal_moves_are_ascending() {
        assert_eq!(Board::empty().legal_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(Board::from_pattern("X.O.X.O..").legal_moves(), vec![1, 3, 5, 7, 8]);
        assert!(Board::from_pattern("XOXXOOOXX").legal_moves().is_empty());
    }

    #[test]
    fn test_render_shows_three_rows() {
        let board = Board::from_pattern("XX.OO....");
        assert_eq!(board.render(), "XX.\nOO.\n...");
        assert_eq!(Board::empty().render(), "...\n...\n...");
    }

    #[test]
    fn test_board_deserializes_from_json_cells() {
        let board: Board =
            serde_json::from_str(r#"["X", "X", null, "O", "O", null, null, null, null]"#).unwrap();
        assert_eq!(board, Board::from_pattern("XX.OO...."));
    }

    #[test]
    fn test_board_deserialization_rejects_short_array() {
        let result: Result<Board, _> = serde_json::from_str(r#"["X", null, null]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_mark_round_trips_through_json() {
        let board: Board =
            serde_json::from_str(r#"["✓", null, null, null, null, null, null, null, null]"#)
                .unwrap();
        assert_eq!(board.cells()[0], Some(Mark::Check));
        assert_eq!(serde_json::to_string(&board.cells()[0]).unwrap(), "\"✓\"");
    }
}
