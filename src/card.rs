//! Card types and deck utilities.

use core::fmt;
use core::str::FromStr;

use crate::error::CardParseError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck enumeration order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Single-letter label (`H`, `D`, `C`, `S`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }

    const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'H' => Some(Self::Hearts),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            'S' => Some(Self::Spades),
            _ => None,
        }
    }
}

/// Card rank, ordered Ace low through King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Short label as printed on the card face.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Numeric value (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.label().eq_ignore_ascii_case(label))
    }
}

/// A playing card.
///
/// Two cards are the same card exactly when suit and rank agree; a full deck
/// holds each of the [`DECK_SIZE`] identities once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the two cards share a suit or a rank.
    #[must_use]
    pub fn matches(self, other: Self) -> bool {
        self.suit == other.suit || self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses labels such as `AH`, `10d` or `QS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !(2..=3).contains(&s.len()) || !s.is_ascii() {
            return Err(CardParseError::WrongLength);
        }

        let (rank, suit) = s.split_at(s.len() - 1);
        let suit = suit
            .chars()
            .next()
            .and_then(Suit::from_letter)
            .ok_or(CardParseError::InvalidSuit)?;
        let rank = Rank::from_label(rank).ok_or(CardParseError::InvalidRank)?;

        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
