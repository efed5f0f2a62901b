//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// The deck holds more cards than can be dealt.
    #[error("the deck holds more than {} cards", crate::card::DECK_SIZE)]
    ExtraCards,
    /// The deck holds the same card twice.
    #[error("the deck holds {0} twice")]
    DuplicateCard(Card),
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing a round.
    #[error("invalid game state for playing a round")]
    InvalidState,
    /// No cards left in the player's hand.
    #[error("no cards left in the player's hand")]
    EmptyHand,
}

/// Errors that can occur when reading the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResultError {
    /// The game has not finished yet.
    #[error("the game has not finished yet")]
    InvalidState,
}

/// Any error raised while playing a full game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Dealing failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A round could not be played.
    #[error("round failed: {0}")]
    Play(#[from] PlayError),
    /// The final result was not available.
    #[error("result unavailable: {0}")]
    Result(#[from] ResultError),
}
