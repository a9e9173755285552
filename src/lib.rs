//! A seeded pile-merging patience game engine with optional `no_std` support.
//!
//! Twelve cards are dealt into singleton piles on a grid three columns wide.
//! A pile may be stacked onto the pile to its left or the pile directly above
//! it when their top cards share a suit or a rank. Each merge deals a fresh
//! pile from the deck, and play ends when no merge remains. The deal is a
//! pure function of a seed string, so any game can be replayed.
//!
//! The crate provides a [`Game`] type that owns the session and reacts to
//! the three player intents: select, attempt-move and inspect.
//!
//! # Example
//!
//! ```
//! use jouster::{Game, GameOptions, SelectOutcome};
//!
//! let mut game = Game::new(GameOptions::default(), "abc123").unwrap();
//!
//! // 2H on pile 2 matches 2C on pile 1 by rank.
//! assert_eq!(game.select(2), Ok(SelectOutcome::Selected(2)));
//! let outcome = game.select(1).unwrap();
//! assert!(matches!(outcome, SelectOutcome::Moved(m) if m.is_accepted()));
//! assert_eq!(game.board().pile(1).unwrap().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod pile;
pub mod result;
pub mod rng;
pub mod rules;
pub mod seed;

// Re-export main types
pub use board::Board;
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{BoardError, CardParseError, SetupError};
pub use game::{Game, GameState, GameView, InspectTarget};
pub use options::GameOptions;
pub use pile::Pile;
pub use result::{GameResult, MoveOutcome, RejectReason, Score, SelectOutcome};
pub use rng::SeededGenerator;
pub use rules::is_match;
