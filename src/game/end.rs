use log::info;

use crate::result::{GameResult, Score};

use super::{Game, GameState};

impl Game {
    /// Returns whether no pile can be stacked onto a neighbor.
    ///
    /// Cards left in the deck do not matter: play stops as soon as the
    /// board offers no merge.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.board.has_any_move()
    }

    /// Ends the game if no merge remains. Safe to call repeatedly.
    pub(super) fn evaluate_end(&mut self) {
        if self.result.is_some() || !self.is_terminal() {
            return;
        }

        let piles_left = self.board.len();
        let min_pile_size = self.board.min_pile_size();
        let result = GameResult {
            score: Score::from_board(piles_left, min_pile_size),
            piles_left,
            min_pile_size,
            deck_remaining: self.deck.remaining(),
            elapsed: self.clock.elapsed(),
        };
        info!(
            "game over for seed {:?}: {piles_left} piles, score {}",
            self.seed, result.score
        );

        self.result = Some(result);
        self.state = GameState::GameOver;
    }
}
