use super::board::{Board, CELL_COUNT};
use super::types::{GameStatus, Mark, MoveError, Terminal, WinningLine};
use super::win_detector::evaluate_terminal;

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    winning_line: Option<WinningLine>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn place_mark(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        if mark != self.current_mark {
            return Err(MoveError::NotYourTurn);
        }
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfBounds(index));
        }
        if !self.board.is_empty_cell(index) {
            return Err(MoveError::CellOccupied(index));
        }

        self.board.place(index, mark);

        match evaluate_terminal(&self.board) {
            Some(Terminal::Won(line)) => {
                self.status = match line.mark {
                    Mark::X => GameStatus::XWon,
                    Mark::O => GameStatus::OWon,
                    Mark::Empty => unreachable!("winning line always carries a player mark"),
                };
                self.winning_line = Some(line);
            }
            Some(Terminal::Draw) => {
                self.status = GameStatus::Draw;
            }
            None => {
                self.switch_turn();
            }
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!("turn always holds a player mark"),
        };
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
    }
}
