use super::board::Board;
use super::types::{Mark, Terminal, WinningLine};

// Rows top to bottom, then columns left to right, then both diagonals.
// Scan order is fixed so the reported line is deterministic.
pub const WIN_TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for triple in WIN_TRIPLES {
        let mark = cells[triple[0]];
        if mark != Mark::Empty && cells[triple[1]] == mark && cells[triple[2]] == mark {
            return Some(WinningLine::new(mark, triple));
        }
    }
    None
}

pub fn evaluate_terminal(board: &Board) -> Option<Terminal> {
    if let Some(line) = check_win_with_line(board) {
        return Some(Terminal::Won(line));
    }
    if board.is_full() {
        return Some(Terminal::Draw);
    }
    None
}
