//! Named board cells with index conversion.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the 3x3 board.
///
/// The nine positions in row-major order: `TopLeft` is index 0 through
/// `BottomRight` at index 8.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

/// Error for a cell index outside `0..=8`.
///
/// This is a caller bug, not a rule rejection: the board only has nine
/// cells, so a well-behaved adapter can never produce one through
/// normal interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("cell index {} is out of range (expected 0-8)", _0)]
pub struct InvalidIndex(
    /// The offending index.
    pub usize,
);

impl std::error::Error for InvalidIndex {}

impl Cell {
    /// All 9 cells in index order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Creates a cell from a board index.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIndex`] if `index` is not in `0..=8`.
    pub fn from_index(index: usize) -> Result<Self, InvalidIndex> {
        match index {
            0 => Ok(Cell::TopLeft),
            1 => Ok(Cell::TopCenter),
            2 => Ok(Cell::TopRight),
            3 => Ok(Cell::MiddleLeft),
            4 => Ok(Cell::Center),
            5 => Ok(Cell::MiddleRight),
            6 => Ok(Cell::BottomLeft),
            7 => Ok(Cell::BottomCenter),
            8 => Ok(Cell::BottomRight),
            _ => Err(InvalidIndex(index)),
        }
    }

    /// Converts the cell to its board index (0-8, row-major).
    pub fn index(self) -> usize {
        match self {
            Cell::TopLeft => 0,
            Cell::TopCenter => 1,
            Cell::TopRight => 2,
            Cell::MiddleLeft => 3,
            Cell::Center => 4,
            Cell::MiddleRight => 5,
            Cell::BottomLeft => 6,
            Cell::BottomCenter => 7,
            Cell::BottomRight => 8,
        }
    }

    /// Label for this cell (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Filters cells by board state, returning only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Cell> {
        Self::ALL
            .iter()
            .copied()
            .filter(|cell| board.is_empty(*cell))
            .collect()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip() {
        for cell in Cell::iter() {
            assert_eq!(Cell::from_index(cell.index()), Ok(cell));
        }
    }

    #[test]
    fn test_all_matches_index_order() {
        for (index, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), index);
        }
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(Cell::from_index(9), Err(InvalidIndex(9)));
        assert_eq!(
            Cell::from_index(42).unwrap_err().to_string(),
            "cell index 42 is out of range (expected 0-8)"
        );
    }

    #[test]
    fn test_valid_moves_filters_occupied() {
        use crate::types::{Player, Square};

        let mut board = Board::new();
        assert_eq!(Cell::valid_moves(&board).len(), 9);

        board.set(Cell::Center, Square::Occupied(Player::X));
        let moves = Cell::valid_moves(&board);
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Cell::Center));
    }
}
