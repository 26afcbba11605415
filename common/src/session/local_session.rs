use std::time::Duration;

use crate::game::{
    BotInput, Difficulty, GameState, Mark, MoveError, ScoreTally, SessionRng, calculate_move,
};
use crate::log;
use super::mode::PlayerMark;

enum Opponent {
    LocalHuman,
    Bot { difficulty: Difficulty, mark: Mark },
}

pub struct LocalSession {
    game: GameState,
    scores: ScoreTally,
    opponent: Opponent,
    rng: SessionRng,
    bot_delay: Duration,
}

impl LocalSession {
    pub fn vs_bot(difficulty: Difficulty, human_mark: PlayerMark, bot_delay: Duration) -> Self {
        Self::vs_bot_seeded(difficulty, human_mark, bot_delay, SessionRng::from_random())
    }

    pub fn vs_bot_seeded(
        difficulty: Difficulty,
        human_mark: PlayerMark,
        bot_delay: Duration,
        rng: SessionRng,
    ) -> Self {
        Self {
            game: GameState::new(),
            scores: ScoreTally::new(),
            opponent: Opponent::Bot {
                difficulty,
                mark: human_mark.opponent_mark(),
            },
            rng,
            bot_delay,
        }
    }

    pub fn local_pvp() -> Self {
        Self {
            game: GameState::new(),
            scores: ScoreTally::new(),
            opponent: Opponent::LocalHuman,
            rng: SessionRng::from_random(),
            bot_delay: Duration::ZERO,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn scores(&self) -> &ScoreTally {
        &self.scores
    }

    pub fn is_bot_turn(&self) -> bool {
        if self.game.is_over() {
            return false;
        }
        match &self.opponent {
            Opponent::LocalHuman => false,
            Opponent::Bot { mark, .. } => *mark == self.game.current_mark(),
        }
    }

    pub fn play_human_move(&mut self, index: usize) -> Result<(), MoveError> {
        if self.is_bot_turn() {
            return Err(MoveError::NotYourTurn);
        }
        self.game.place_mark(index, self.game.current_mark())?;
        self.record_finished_round();
        Ok(())
    }

    // The delay is pure pacing: the caller keeps input disabled while the
    // reply is pending, so nothing else can touch the game meanwhile.
    pub async fn play_bot_reply(&mut self) -> Option<usize> {
        if !self.is_bot_turn() {
            return None;
        }
        let Opponent::Bot { difficulty, mark } = &self.opponent else {
            return None;
        };
        let (difficulty, mark) = (*difficulty, *mark);

        if !self.bot_delay.is_zero() {
            tokio::time::sleep(self.bot_delay).await;
        }

        let input = BotInput::new(*self.game.board(), mark);
        let index = calculate_move(difficulty, &input, &mut self.rng)?;

        match self.game.place_mark(index, mark) {
            Ok(()) => {
                self.record_finished_round();
                Some(index)
            }
            Err(e) => {
                log!("Bot failed to place {} at {}: {}", mark, index, e);
                None
            }
        }
    }

    pub fn new_round(&mut self) {
        self.game.reset();
    }

    pub fn reset_all(&mut self) {
        self.game.reset();
        self.scores.reset();
    }

    fn record_finished_round(&mut self) {
        if self.game.is_over() {
            self.scores.record(self.game.status());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;

    fn bot_session(difficulty: Difficulty, human_mark: PlayerMark) -> LocalSession {
        LocalSession::vs_bot_seeded(difficulty, human_mark, Duration::ZERO, SessionRng::new(7))
    }

    #[tokio::test]
    async fn test_bot_replies_after_human_move() {
        let mut session = bot_session(Difficulty::Hard, PlayerMark::X);

        session.play_human_move(4).unwrap();
        assert!(session.is_bot_turn());

        let reply = session.play_bot_reply().await;
        assert!(reply.is_some());
        assert_eq!(session.game().current_mark(), Mark::X);
        assert_eq!(session.game().board().available_moves().len(), 7);
    }

    #[tokio::test]
    async fn test_bot_opens_the_round_when_human_is_o() {
        let mut session = bot_session(Difficulty::Easy, PlayerMark::O);

        assert!(session.is_bot_turn());
        assert_eq!(session.play_human_move(0), Err(MoveError::NotYourTurn));

        let opening = session.play_bot_reply().await.unwrap();
        assert_eq!(session.game().board().cell(opening), Some(Mark::X));
        assert!(!session.is_bot_turn());
    }

    #[tokio::test]
    async fn test_bot_reply_is_refused_on_human_turn() {
        let mut session = bot_session(Difficulty::Easy, PlayerMark::X);

        assert_eq!(session.play_bot_reply().await, None);
    }

    #[test]
    fn test_new_round_keeps_the_tally() {
        let mut session = LocalSession::local_pvp();

        for _ in 0..3 {
            for &index in &[0, 3, 1, 4, 2] {
                session.play_human_move(index).unwrap();
            }
            assert_eq!(session.game().status(), GameStatus::XWon);
            session.new_round();
        }

        assert_eq!(session.scores().x_wins, 3);
        assert_eq!(session.game().status(), GameStatus::InProgress);
        assert_eq!(session.game().board().available_moves().len(), 9);
    }

    #[test]
    fn test_reset_all_clears_the_tally() {
        let mut session = LocalSession::local_pvp();
        for &index in &[0, 3, 1, 4, 2] {
            session.play_human_move(index).unwrap();
        }

        session.reset_all();

        assert_eq!(session.scores().rounds_played(), 0);
        assert_eq!(session.game().status(), GameStatus::InProgress);
    }

    #[tokio::test]
    async fn test_hard_bot_round_from_center_ends_in_a_draw() {
        let mut session = bot_session(Difficulty::Hard, PlayerMark::X);

        session.play_human_move(4).unwrap();
        while !session.game().is_over() {
            session.play_bot_reply().await.unwrap();
            if session.game().is_over() {
                break;
            }
            // Mirror the bot's optimal play from the human side.
            let input = BotInput::new(*session.game().board(), session.game().current_mark());
            let index = crate::game::calculate_minimax_move(&input).unwrap();
            session.play_human_move(index).unwrap();
        }

        assert_eq!(session.game().status(), GameStatus::Draw);
        assert_eq!(session.scores().draws, 1);
    }
}
