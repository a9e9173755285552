//! Card piles on the board.

use alloc::vec::Vec;

use crate::card::Card;

/// A stack of cards, bottom to top.
///
/// A pile always holds at least one card; piles leave the board whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Creates a pile holding a single card.
    #[must_use]
    pub fn new(card: Card) -> Self {
        Self {
            cards: alloc::vec![card],
        }
    }

    /// Creates a pile from cards listed bottom to top.
    ///
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Option<Self> {
        if cards.is_empty() {
            None
        } else {
            Some(Self { cards })
        }
    }

    /// Returns the exposed card.
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "piles are never empty by construction"
    )]
    pub fn top(&self) -> Card {
        *self
            .cards
            .last()
            .expect("pile holds at least one card by construction")
    }

    /// Returns the cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards top first, as shown in the inspection panel.
    #[must_use]
    pub fn top_first(&self) -> Vec<Card> {
        self.cards.iter().rev().copied().collect()
    }

    /// Returns the number of cards.
    #[must_use]
    #[expect(clippy::len_without_is_empty, reason = "piles are never empty")]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Stacks `other` on top, keeping its order.
    pub(crate) fn absorb(&mut self, other: Self) {
        self.cards.extend(other.cards);
    }
}
