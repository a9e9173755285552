//! Error types for game operations.

use thiserror::Error;

/// Errors raised by board operations.
///
/// These signal a caller bug (a stale or out-of-range pile reference). Normal
/// play never produces them: rejected moves are reported as
/// [`MoveOutcome::Rejected`](crate::MoveOutcome::Rejected) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Pile index is out of range.
    #[error("pile index {index} is out of range for {len} piles")]
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// Number of piles on the board.
        len: usize,
    },
    /// A pile cannot be merged onto itself.
    #[error("cannot merge pile {index} onto itself")]
    SameIndex {
        /// The pile index.
        index: usize,
    },
    /// Target pile is not adjacent to the source pile.
    #[error("pile {target} is not adjacent to pile {pile}")]
    NotAdjacent {
        /// The pile being moved.
        pile: usize,
        /// The pile it was to be stacked on.
        target: usize,
    },
}

/// Errors that can occur when setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The seed string is empty.
    #[error("seed is empty")]
    EmptySeed,
    /// The initial pile count is outside `1..=52`.
    #[error("invalid initial pile count {0}")]
    InvalidPileCount(u8),
    /// The grid width is outside `2..=52`.
    #[error("invalid column count {0}")]
    InvalidColumns(usize),
    /// An arranged board uses a different grid width than the options.
    #[error("board has {board} columns but the options ask for {options}")]
    ColumnMismatch {
        /// Grid width from the options.
        options: u8,
        /// Grid width of the board.
        board: usize,
    },
}

/// Errors that can occur when parsing a card label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// Label is not two or three ASCII characters.
    #[error("card label must be two or three characters")]
    WrongLength,
    /// Unknown suit letter.
    #[error("unknown suit letter")]
    InvalidSuit,
    /// Unknown rank label.
    #[error("unknown rank")]
    InvalidRank,
}
