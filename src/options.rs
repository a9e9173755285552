//! Game configuration options.

use crate::board::MIN_COLUMNS;
use crate::card::DECK_SIZE;
use crate::error::SetupError;

/// Layout options for a game.
///
/// The defaults describe the standard table: twelve piles dealt into a grid
/// three columns wide. Use the builder methods to change them:
///
/// ```
/// use jouster::GameOptions;
///
/// let options = GameOptions::default().with_piles(12).with_columns(3);
/// assert_eq!(options, GameOptions::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of singleton piles dealt at the start.
    pub piles: u8,
    /// Grid width. A pile is adjacent to the pile before it and to the pile
    /// this many places before it.
    pub columns: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            piles: 12,
            columns: 3,
        }
    }
}

impl GameOptions {
    /// Sets the number of piles dealt at the start.
    ///
    /// # Example
    ///
    /// ```
    /// use jouster::GameOptions;
    ///
    /// let options = GameOptions::default().with_piles(9);
    /// assert_eq!(options.piles, 9);
    /// ```
    #[must_use]
    pub const fn with_piles(mut self, piles: u8) -> Self {
        self.piles = piles;
        self
    }

    /// Sets the grid width.
    ///
    /// # Example
    ///
    /// ```
    /// use jouster::GameOptions;
    ///
    /// let options = GameOptions::default().with_columns(4);
    /// assert_eq!(options.columns, 4);
    /// ```
    #[must_use]
    pub const fn with_columns(mut self, columns: u8) -> Self {
        self.columns = columns;
        self
    }

    /// Checks that the options describe a playable layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile count is outside `1..=52` or the grid is
    /// narrower than two or wider than 52 columns.
    pub const fn validate(&self) -> Result<(), SetupError> {
        if self.piles == 0 || self.piles as usize > DECK_SIZE {
            return Err(SetupError::InvalidPileCount(self.piles));
        }
        let columns = self.columns as usize;
        if columns < MIN_COLUMNS || columns > DECK_SIZE {
            return Err(SetupError::InvalidColumns(columns));
        }
        Ok(())
    }
}
