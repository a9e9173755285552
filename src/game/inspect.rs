use alloc::vec::Vec;

use crate::card::Card;
use crate::error::BoardError;
use crate::pile::Pile;

use super::{Game, InspectTarget};

impl Game {
    /// Lists the cards of a pile or of the deck, top card first.
    ///
    /// Inspecting never changes the game, and works after the game is over.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidIndex`] if the pile does not exist.
    pub fn inspect(&self, target: InspectTarget) -> Result<Vec<Card>, BoardError> {
        match target {
            InspectTarget::Deck => Ok(self.deck.peek_remaining()),
            InspectTarget::Pile(index) => {
                self.board
                    .pile(index)
                    .map(Pile::top_first)
                    .ok_or(BoardError::InvalidIndex {
                        index,
                        len: self.board.len(),
                    })
            }
        }
    }
}
