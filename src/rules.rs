//! Matching rule between exposed cards.

use crate::card::Card;

/// Returns whether one pile may be stacked on another with these tops.
///
/// Cards match when they share a suit or a rank (or both). The relation is
/// symmetric.
///
/// ```
/// use jouster::{Card, Rank, Suit, is_match};
///
/// let seven_hearts = Card::new(Suit::Hearts, Rank::Seven);
/// let seven_clubs = Card::new(Suit::Clubs, Rank::Seven);
/// let two_spades = Card::new(Suit::Spades, Rank::Two);
///
/// assert!(is_match(seven_hearts, seven_clubs));
/// assert!(!is_match(seven_hearts, two_spades));
/// ```
#[must_use]
pub fn is_match(a: Card, b: Card) -> bool {
    a.matches(b)
}
