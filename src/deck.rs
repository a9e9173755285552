//! The draw pile.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::rng::SeededGenerator;

/// Cards not yet dealt, in draw order.
///
/// The last element of the backing vector is the next card to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds and shuffles the deck for a seed.
    ///
    /// The same seed always yields the same order.
    ///
    /// ```
    /// use jouster::Deck;
    ///
    /// assert_eq!(Deck::new("abc123"), Deck::new("abc123"));
    /// ```
    #[must_use]
    pub fn new(seed: &str) -> Self {
        Self::shuffled(&mut SeededGenerator::from_seed(seed))
    }

    /// Builds a deck shuffled with the given generator.
    #[must_use]
    pub fn shuffled(generator: &mut SeededGenerator) -> Self {
        let mut cards = Self::standard_order();

        for i in (1..cards.len()).rev() {
            let j = generator.next_index(i + 1);
            cards.swap(i, j);
        }

        Self { cards }
    }

    /// The unshuffled 52 cards, suit by suit, Ace through King.
    #[must_use]
    pub fn standard_order() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    /// Builds a deck that deals `cards` front to back.
    #[must_use]
    pub fn from_draw_order(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// Draws the next card, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the undrawn cards, next to draw first.
    #[must_use]
    pub fn peek_remaining(&self) -> Vec<Card> {
        self.cards.iter().rev().copied().collect()
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
