use serde::{Deserialize, Serialize};

use super::board::Board;
use super::game_state::GameState;
use super::session_rng::SessionRng;
use super::types::{Mark, Terminal};
use super::win_detector::{check_win, evaluate_terminal};

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;
const DRAW_SCORE: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }

    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            bot_mark: state.current_mark(),
        }
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Medium => calculate_greedy_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = input.board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let pick = rng.random_range(0..available_moves.len());
    Some(available_moves[pick])
}

// Takes the first immediately winning cell in ascending order, otherwise
// falls back to a random move. Does not block the opponent: that gap is
// what separates this tier from the minimax one.
fn calculate_greedy_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let mut board = input.board;

    for index in board.available_moves() {
        board.place(index, input.bot_mark);
        let won = check_win(&board) == Some(input.bot_mark);
        board.clear(index);

        if won {
            return Some(index);
        }
    }

    calculate_random_move(input, rng)
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let bot_mark = input.bot_mark;
    let opponent_mark = bot_mark.opponent()?;
    let mut board = input.board;

    let mut best: Option<(usize, i32)> = None;
    for index in board.available_moves() {
        board.place(index, bot_mark);
        let score = minimax(&mut board, opponent_mark, bot_mark);
        board.clear(index);

        // Strict comparison keeps the first best index found, so equal
        // scores resolve to the lowest cell index.
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    best.map(|(index, _)| index)
}

fn minimax(board: &mut Board, to_move: Mark, bot_mark: Mark) -> i32 {
    match evaluate_terminal(board) {
        Some(Terminal::Won(line)) => {
            return if line.mark == bot_mark {
                WIN_SCORE
            } else {
                LOSS_SCORE
            };
        }
        Some(Terminal::Draw) => return DRAW_SCORE,
        None => {}
    }

    let next_mark = to_move.opponent().expect("minimax only moves player marks");
    let maximizing = to_move == bot_mark;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in board.available_moves() {
        board.place(index, to_move);
        let score = minimax(board, next_mark, bot_mark);
        board.clear(index);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
