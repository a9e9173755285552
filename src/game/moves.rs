use alloc::vec::Vec;

use log::{debug, trace};

use crate::error::BoardError;
use crate::result::{MoveOutcome, RejectReason, SelectOutcome};
use crate::rules::is_match;

use super::{Game, GameState};

impl Game {
    /// Handles a tap on pile `index`.
    ///
    /// With nothing selected the pile becomes the selection. With a pile
    /// already selected this attempts to stack the selection onto `index`,
    /// and the selection is cleared whatever the outcome. Tapping the
    /// selected pile again is a move onto itself and is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidIndex`] if `index` names no pile. With
    /// nothing selected the state is unchanged; an existing selection is
    /// still cleared.
    pub fn select(&mut self, index: usize) -> Result<SelectOutcome, BoardError> {
        match self.state {
            GameState::GameOver => {
                trace!("ignoring select({index}) after game over");
                Ok(SelectOutcome::Ignored)
            }
            GameState::Idle => {
                self.board.top_of(index)?;
                self.state = GameState::Selected { index };
                Ok(SelectOutcome::Selected(index))
            }
            GameState::Selected { index: source } => {
                self.attempt_move(source, index).map(SelectOutcome::Moved)
            }
        }
    }

    /// Drops the current selection, if any.
    pub fn clear_selection(&mut self) {
        if let GameState::Selected { .. } = self.state {
            self.state = GameState::Idle;
        }
    }

    /// Returns the piles the current selection can be stacked onto.
    #[must_use]
    pub fn valid_targets(&self) -> Vec<usize> {
        self.selected()
            .map(|index| self.board.matching_targets(index))
            .unwrap_or_default()
    }

    /// Tries to stack pile `source` onto pile `target`.
    ///
    /// An accepted move merges the piles, deals one card into a new pile if
    /// the deck has any left, then checks whether play can continue. Either
    /// way the selection is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidIndex`] if either index names no pile.
    /// The board is unchanged and the selection is cleared.
    pub fn attempt_move(
        &mut self,
        source: usize,
        target: usize,
    ) -> Result<MoveOutcome, BoardError> {
        if self.state == GameState::GameOver {
            trace!("ignoring move {source} -> {target} after game over");
            return Ok(MoveOutcome::Rejected(RejectReason::GameOver));
        }

        self.state = GameState::Idle;
        let source_top = self.board.top_of(source)?;
        let target_top = self.board.top_of(target)?;

        if !self.board.is_adjacent(source, target) {
            trace!("rejected move {source} -> {target}: not adjacent");
            return Ok(MoveOutcome::Rejected(RejectReason::NotAdjacent));
        }
        if !is_match(source_top, target_top) {
            trace!("rejected move {source} -> {target}: {source_top} does not match {target_top}");
            return Ok(MoveOutcome::Rejected(RejectReason::NoMatch));
        }

        let cards_before = self.board.card_count() + self.deck.remaining();
        self.board.merge_into(source, target)?;
        let dealt = self.deck.draw();
        if let Some(card) = dealt {
            self.board.append_pile(card);
        }
        debug!(
            "stacked {source} onto {target}, dealt {dealt:?}, {} piles, {} in deck",
            self.board.len(),
            self.deck.remaining()
        );
        debug_assert_eq!(
            self.board.card_count() + self.deck.remaining(),
            cards_before,
            "cards were lost or duplicated"
        );

        self.evaluate_end();
        Ok(MoveOutcome::Accepted { target, dealt })
    }
}
