mod board;
mod bot;
mod game_state;
mod score;
mod session_rng;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot::{BotInput, Difficulty, calculate_minimax_move, calculate_move};
pub use game_state::GameState;
pub use score::ScoreTally;
pub use session_rng::SessionRng;
pub use types::{GameStatus, Mark, MoveError, Terminal, WinningLine};
pub use win_detector::{WIN_TRIPLES, check_win, check_win_with_line, evaluate_terminal};
