use serde::{Deserialize, Serialize};
use crate::game::Mark;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Bot,
    Pvp,
    Network,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerMark {
    X,
    O,
}

impl PlayerMark {
    pub fn to_mark(self) -> Mark {
        match self {
            PlayerMark::X => Mark::X,
            PlayerMark::O => Mark::O,
        }
    }

    pub fn opponent_mark(self) -> Mark {
        match self {
            PlayerMark::X => Mark::O,
            PlayerMark::O => Mark::X,
        }
    }
}
