use serde::{Deserialize, Serialize};
use super::types::GameStatus;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.x_wins += 1,
            GameStatus::OWon => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn rounds_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}
