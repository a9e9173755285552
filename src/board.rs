//! The pile grid.
//!
//! Piles live in a dense vector and the vector index is the pile's identity.
//! Removing a pile shifts every later pile down by one, so an index is only
//! meaningful until the next merge.

use alloc::vec::Vec;

use log::trace;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{BoardError, SetupError};
use crate::pile::Pile;
use crate::rules::is_match;

/// Narrowest grid. With one column a pile would sit above itself.
pub const MIN_COLUMNS: usize = 2;

/// Ordered piles laid out row by row in a grid `columns` wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    piles: Vec<Pile>,
    columns: usize,
}

impl Board {
    /// Deals up to `pile_count` singleton piles from the deck.
    ///
    /// Stops early if the deck runs out.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidColumns`] if `columns` is below
    /// [`MIN_COLUMNS`]. Nothing is drawn in that case.
    pub fn deal(
        deck: &mut Deck,
        pile_count: usize,
        columns: usize,
    ) -> Result<Self, SetupError> {
        check_columns(columns)?;
        let mut piles = Vec::with_capacity(pile_count);
        while piles.len() < pile_count {
            let Some(card) = deck.draw() else {
                break;
            };
            piles.push(Pile::new(card));
        }

        Ok(Self { piles, columns })
    }

    /// Builds a board from arranged piles.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidColumns`] if `columns` is below
    /// [`MIN_COLUMNS`].
    pub fn from_piles(piles: Vec<Pile>, columns: usize) -> Result<Self, SetupError> {
        check_columns(columns)?;
        Ok(Self { piles, columns })
    }

    /// Returns the grid width used for adjacency.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the piles in index order.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// Returns the pile at `index`.
    #[must_use]
    pub fn pile(&self, index: usize) -> Option<&Pile> {
        self.piles.get(index)
    }

    /// Returns the number of piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    /// Returns whether the board has no piles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    /// Returns the number of cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    /// Returns the size of the smallest pile, or 0 for an empty board.
    #[must_use]
    pub fn min_pile_size(&self) -> usize {
        self.piles.iter().map(Pile::len).min().unwrap_or(0)
    }

    /// Returns the indices a pile at `index` may be stacked onto.
    ///
    /// These are the pile to its left and the pile directly above it,
    /// whichever exist.
    ///
    /// ```
    /// use jouster::{Board, Deck};
    ///
    /// let mut deck = Deck::new("abc123");
    /// let board = Board::deal(&mut deck, 12, 3).unwrap();
    ///
    /// assert_eq!(board.adjacent_indices(0).count(), 0);
    /// assert_eq!(board.adjacent_indices(1).collect::<Vec<_>>(), [0]);
    /// assert_eq!(board.adjacent_indices(5).collect::<Vec<_>>(), [4, 2]);
    /// ```
    pub fn adjacent_indices(&self, index: usize) -> impl Iterator<Item = usize> + use<> {
        let len = self.piles.len();
        [index.checked_sub(1), index.checked_sub(self.columns)]
            .into_iter()
            .flatten()
            .filter(move |&neighbor| neighbor < len)
    }

    /// Returns whether `target` is adjacent to `source`.
    #[must_use]
    pub fn is_adjacent(&self, source: usize, target: usize) -> bool {
        self.adjacent_indices(source)
            .any(|neighbor| neighbor == target)
    }

    /// Returns the exposed card of pile `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidIndex`] if there is no such pile.
    pub fn top_of(&self, index: usize) -> Result<Card, BoardError> {
        self.piles
            .get(index)
            .map(Pile::top)
            .ok_or(BoardError::InvalidIndex {
                index,
                len: self.piles.len(),
            })
    }

    /// Returns the adjacent piles whose tops match the top of `index`.
    ///
    /// Empty when `index` is out of range.
    #[must_use]
    pub fn matching_targets(&self, index: usize) -> Vec<usize> {
        let Ok(top) = self.top_of(index) else {
            return Vec::new();
        };

        self.adjacent_indices(index)
            .filter(|&neighbor| {
                self.top_of(neighbor)
                    .is_ok_and(|other| is_match(top, other))
            })
            .collect()
    }

    /// Returns whether any pile can be stacked onto a neighbor.
    #[must_use]
    pub fn has_any_move(&self) -> bool {
        self.piles.iter().enumerate().any(|(index, pile)| {
            self.adjacent_indices(index)
                .any(|neighbor| is_match(pile.top(), self.piles[neighbor].top()))
        })
    }

    /// Stacks the whole `source` pile onto `target` and closes the gap.
    ///
    /// The former top of `source` becomes the top of `target`. Every pile
    /// after `source` moves down one index, so `target` keeps its index
    /// (it always precedes `source`).
    ///
    /// # Errors
    ///
    /// Returns an error if either index is invalid, the indices are equal,
    /// or `target` is not adjacent to `source`. The board is unchanged on
    /// error.
    pub fn merge_into(&mut self, source: usize, target: usize) -> Result<(), BoardError> {
        let len = self.piles.len();
        for index in [source, target] {
            if index >= len {
                return Err(BoardError::InvalidIndex { index, len });
            }
        }
        if source == target {
            return Err(BoardError::SameIndex { index: source });
        }
        if !self.is_adjacent(source, target) {
            return Err(BoardError::NotAdjacent {
                pile: source,
                target,
            });
        }

        let moved = self.piles.remove(source);
        self.piles[target].absorb(moved);
        trace!("merged pile {source} onto {target}, {} piles left", self.piles.len());

        debug_assert_eq!(self.piles.len(), len - 1);
        Ok(())
    }

    /// Adds a singleton pile after the last pile and returns its index.
    pub fn append_pile(&mut self, card: Card) -> usize {
        self.piles.push(Pile::new(card));
        self.piles.len() - 1
    }
}

const fn check_columns(columns: usize) -> Result<(), SetupError> {
    if columns < MIN_COLUMNS {
        return Err(SetupError::InvalidColumns(columns));
    }
    Ok(())
}
