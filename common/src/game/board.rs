use serde::{Deserialize, Serialize};
use super::types::Mark;

pub const CELL_COUNT: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    #[cfg(test)]
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.cells.get(index) == Some(&Mark::Empty)
    }

    pub fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    pub fn available_moves(&self) -> Vec<usize> {
        let mut moves = Vec::new();
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(index);
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_has_nine_empty_cells() {
        let board = Board::new();

        assert_eq!(board.available_moves().len(), CELL_COUNT);
        assert!(!board.is_full());
    }

    #[test]
    fn test_available_moves_are_ascending() {
        let mut board = Board::new();
        board.place(4, Mark::X);
        board.place(0, Mark::O);
        board.place(7, Mark::X);

        assert_eq!(board.available_moves(), vec![1, 2, 3, 5, 6, 8]);
    }

    #[test]
    fn test_place_and_clear_restore_cell() {
        let mut board = Board::new();
        board.place(3, Mark::O);
        assert_eq!(board.cell(3), Some(Mark::O));

        board.clear(3);
        assert_eq!(board.cell(3), Some(Mark::Empty));
        assert!(board.is_empty_cell(3));
    }

    #[test]
    fn test_cell_out_of_bounds_is_none() {
        let board = Board::new();

        assert_eq!(board.cell(CELL_COUNT), None);
        assert!(!board.is_empty_cell(CELL_COUNT));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = Board::from_cells([
            Mark::X, Mark::O, Mark::X,
            Mark::O, Mark::X, Mark::O,
            Mark::O, Mark::X, Mark::O,
        ]);

        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }
}
