//! Move and end-of-game result types.

use core::fmt;
use core::time::Duration;

use crate::card::{Card, DECK_SIZE};

/// Why a move was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Target is not the left or upper neighbor of the source.
    NotAdjacent,
    /// Top cards share neither suit nor rank.
    NoMatch,
    /// The game has already ended.
    GameOver,
}

/// Outcome of a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The source pile was stacked onto the target.
    Accepted {
        /// Index of the merged pile.
        target: usize,
        /// Card dealt into a new pile at the end of the board, if the deck
        /// had one.
        dealt: Option<Card>,
    },
    /// The move was not allowed. Nothing changed except the selection.
    Rejected(RejectReason),
}

impl MoveOutcome {
    /// Returns whether the move went through.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Outcome of a select intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The pile became the selection.
    Selected(usize),
    /// A pile was already selected, so this was a move attempt.
    Moved(MoveOutcome),
    /// The game is over; nothing happened.
    Ignored,
}

/// Final score, as a percentage.
///
/// Displays with one decimal; [`Score::value`] is the exact figure.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    /// Computes the score for a finished board.
    ///
    /// Fewer piles is better; the smallest pile's size breaks ties.
    ///
    /// ```
    /// use jouster::Score;
    ///
    /// let score = Score::from_board(10, 2);
    /// assert!((score.value() - 80.843_195).abs() < 1e-6);
    /// assert_eq!(score.to_string(), "80.8");
    /// ```
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "pile counts are at most 52"
    )]
    pub fn from_board(piles_left: usize, min_pile_size: usize) -> Self {
        if !(1..=DECK_SIZE).contains(&piles_left) {
            return Self(0.0);
        }

        let total = DECK_SIZE as f64;
        let raw = total - piles_left as f64 + min_pile_size as f64 / total;
        Self(100.0 * raw / total)
    }

    /// Returns the exact score.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Summary of a finished game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameResult {
    /// Final score.
    pub score: Score,
    /// Piles on the board when play stopped.
    pub piles_left: usize,
    /// Size of the smallest remaining pile.
    pub min_pile_size: usize,
    /// Cards never dealt.
    pub deck_remaining: usize,
    /// Time from deal to the last move. `None` without a clock (`no_std`).
    pub elapsed: Option<Duration>,
}
