//! Game engine and session management.

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use log::debug;

use crate::board::Board;
use crate::deck::Deck;
use crate::error::SetupError;
use crate::options::GameOptions;
use crate::pile::Pile;
use crate::result::GameResult;
use crate::seed::{is_valid_seed, mint_seed_from_entropy};

mod end;
mod inspect;
mod moves;
pub mod state;

pub use state::{GameState, InspectTarget};

/// Elapsed-time anchor.
///
/// Uses the system clock when `std` provides one. Callers without a clock
/// drive an external anchor through [`Game::new_at`] and [`Game::tick`].
#[derive(Debug, Clone, Copy)]
enum Clock {
    #[cfg(feature = "std")]
    Monotonic(std::time::Instant),
    External {
        started: Duration,
        now: Duration,
    },
    #[cfg(not(feature = "std"))]
    Unset,
}

impl Clock {
    #[cfg(feature = "std")]
    fn start() -> Self {
        Self::Monotonic(std::time::Instant::now())
    }

    #[cfg(not(feature = "std"))]
    const fn start() -> Self {
        Self::Unset
    }

    const fn external(now: Duration) -> Self {
        Self::External { started: now, now }
    }

    /// A fresh anchor of the same kind, for a new deal.
    fn restarted(self) -> Self {
        match self {
            Self::External { now, .. } => Self::external(now),
            #[cfg(feature = "std")]
            Self::Monotonic(_) => Self::start(),
            #[cfg(not(feature = "std"))]
            Self::Unset => Self::Unset,
        }
    }

    fn elapsed(self) -> Option<Duration> {
        match self {
            #[cfg(feature = "std")]
            Self::Monotonic(started_at) => Some(started_at.elapsed()),
            Self::External { started, now } => Some(now.saturating_sub(started)),
            #[cfg(not(feature = "std"))]
            Self::Unset => None,
        }
    }
}

/// A single game session: the board, the deck, and the player's selection.
///
/// All mutation goes through [`select`](Self::select) and
/// [`attempt_move`](Self::attempt_move). Once no merge remains the session is
/// frozen and [`result`](Self::result) holds the score.
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    seed: String,
    board: Board,
    deck: Deck,
    state: GameState,
    result: Option<GameResult>,
    clock: Clock,
}

/// Read-only snapshot for renderers.
#[derive(Debug, Clone)]
pub struct GameView<'a> {
    /// Piles in board order.
    pub piles: &'a [Pile],
    /// Undealt cards.
    pub deck_remaining: usize,
    /// Selected pile, if any.
    pub selected: Option<usize>,
    /// Piles the selection can be stacked onto.
    pub valid_targets: Vec<usize>,
    /// Final result once the game is over.
    pub result: Option<GameResult>,
    /// Time since the deal, frozen once the game is over.
    pub elapsed: Option<Duration>,
}

impl Game {
    /// Creates a game dealt from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed is empty or the options are invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use jouster::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), "abc123").unwrap();
    /// assert_eq!(game.board().len(), 12);
    /// assert_eq!(game.deck_remaining(), 40);
    /// ```
    pub fn new(options: GameOptions, seed: &str) -> Result<Self, SetupError> {
        Self::deal(options, seed, Clock::start())
    }

    /// Creates a game dealt from `seed`, timed from caller-supplied
    /// timestamps instead of the system clock.
    ///
    /// `now` is the time of the deal on any monotonic scale the caller
    /// likes. Report later times with [`tick`](Self::tick).
    ///
    /// # Errors
    ///
    /// Returns an error if the seed is empty or the options are invalid.
    pub fn new_at(options: GameOptions, seed: &str, now: Duration) -> Result<Self, SetupError> {
        Self::deal(options, seed, Clock::external(now))
    }

    /// Creates a game from a freshly minted seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn with_fresh_seed(options: GameOptions, entropy: u64) -> Result<Self, SetupError> {
        Self::new(options, &mint_seed_from_entropy(entropy))
    }

    /// Creates a game over an arranged board and deck.
    ///
    /// The seed is recorded as given; it did not produce this layout, but
    /// [`restart`](Self::restart) deals from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed is empty, the options are invalid, or
    /// the board's grid width differs from `options.columns`.
    pub fn from_layout(
        options: GameOptions,
        seed: &str,
        board: Board,
        deck: Deck,
    ) -> Result<Self, SetupError> {
        options.validate()?;
        if !is_valid_seed(seed) {
            return Err(SetupError::EmptySeed);
        }
        if board.columns() != usize::from(options.columns) {
            return Err(SetupError::ColumnMismatch {
                options: options.columns,
                board: board.columns(),
            });
        }

        Ok(Self::assemble(
            options,
            String::from(seed),
            board,
            deck,
            Clock::start(),
        ))
    }

    fn deal(options: GameOptions, seed: &str, clock: Clock) -> Result<Self, SetupError> {
        options.validate()?;
        if !is_valid_seed(seed) {
            return Err(SetupError::EmptySeed);
        }

        let mut deck = Deck::new(seed);
        let board = Board::deal(
            &mut deck,
            usize::from(options.piles),
            usize::from(options.columns),
        )?;
        debug!(
            "dealt {} piles from seed {seed:?}, {} cards in the deck",
            board.len(),
            deck.remaining()
        );

        Ok(Self::assemble(options, String::from(seed), board, deck, clock))
    }

    fn assemble(
        options: GameOptions,
        seed: String,
        board: Board,
        deck: Deck,
        clock: Clock,
    ) -> Self {
        let mut game = Self {
            options,
            seed,
            board,
            deck,
            state: GameState::Idle,
            result: None,
            clock,
        };
        game.evaluate_end();
        game
    }

    /// Deals the same seed again.
    #[expect(
        clippy::missing_panics_doc,
        reason = "options and seed were validated when the game was built"
    )]
    pub fn restart(&mut self) {
        let seed = core::mem::take(&mut self.seed);
        debug!("restarting with seed {seed:?}");
        *self = Self::deal(self.options, &seed, self.clock.restarted())
            .expect("validated options and seed always deal");
    }

    /// Discards this game and deals from a new seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed is empty. The current game is kept.
    pub fn restart_with_seed(&mut self, seed: &str) -> Result<(), SetupError> {
        *self = Self::deal(self.options, seed, self.clock.restarted())?;
        Ok(())
    }

    /// Discards this game and deals from a freshly minted seed.
    pub fn restart_fresh(&mut self, entropy: u64) {
        self.seed = mint_seed_from_entropy(entropy);
        self.restart();
    }

    /// Reports the current time to a game built with [`new_at`](Self::new_at).
    ///
    /// Call it before each intent so a game-ending move records the right
    /// time. Games on the system clock ignore it. Times before the deal
    /// count as zero.
    pub fn tick(&mut self, now: Duration) {
        if let Clock::External { now: latest, .. } = &mut self.clock {
            *latest = now;
        }
    }

    /// Returns the options this game was dealt with.
    #[must_use]
    pub const fn options(&self) -> GameOptions {
        self.options
    }

    /// Returns the seed this game was dealt from.
    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the selected pile index, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Returns whether no merge remains.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Returns the final result once the game is over.
    #[must_use]
    pub const fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns the time since the deal, frozen when the game ends.
    ///
    /// `None` when built without `std` unless the game was created with
    /// [`new_at`](Self::new_at).
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.result.map_or_else(|| self.clock.elapsed(), |result| result.elapsed)
    }

    /// Returns a snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView {
            piles: self.board.piles(),
            deck_remaining: self.deck.remaining(),
            selected: self.selected(),
            valid_targets: self.valid_targets(),
            result: self.result,
            elapsed: self.elapsed(),
        }
    }
}
