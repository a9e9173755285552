//! Game state types.

/// Session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Waiting for the player to pick a pile.
    #[default]
    Idle,
    /// A pile is picked; the next select attempts a move onto another pile.
    Selected {
        /// Board index of the picked pile.
        index: usize,
    },
    /// No merge is possible. Further select and move intents are ignored.
    GameOver,
}

impl GameState {
    /// Returns the selected pile index, if any.
    #[must_use]
    pub const fn selected(self) -> Option<usize> {
        match self {
            Self::Selected { index } => Some(index),
            Self::Idle | Self::GameOver => None,
        }
    }
}

/// What an inspect intent looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectTarget {
    /// A pile on the board.
    Pile(usize),
    /// The undealt cards.
    Deck,
}
