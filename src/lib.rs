//! A two-player War card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that builds and shuffles a standard
//! 52-card deck, deals it evenly to two players, and resolves 26 rounds by
//! comparing one card from each player. Ties score nothing; there is no
//! face-down "war" escalation.
//!
//! # Example
//!
//! ```
//! use warrs::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let result = game.play().unwrap();
//!
//! assert_eq!(game.state(), GameState::Finished);
//! assert_eq!(result.rounds.len(), 26);
//! println!("{}", result.outcome);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, GameError, PlayError, ResultError};
pub use game::{Game, GameState, ROUNDS};
pub use options::GameOptions;
pub use player::Player;
pub use result::{GameOutcome, GameResult, RoundOutcome, RoundResult};
