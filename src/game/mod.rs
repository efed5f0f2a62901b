//! Game engine and state management.

use alloc::vec::Vec;

use log::{debug, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::error::{DealError, GameError, ResultError};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{GameOutcome, GameResult, RoundResult};

mod round;
pub mod state;

pub use state::GameState;

/// Number of rounds in a game. Each round consumes one card per player.
pub const ROUNDS: u8 = (DECK_SIZE / 2) as u8;

/// A two-player game of War.
///
/// The game owns the deck and both players. It moves through
/// [`GameState::Dealing`], [`GameState::Playing`] and
/// [`GameState::Finished`] exactly once.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Cards not yet dealt.
    deck: Deck,
    /// The first and second player.
    players: [Player; 2],
    /// Current game state.
    state: GameState,
    /// Rounds played so far.
    round: u8,
    /// Rounds that ended in a tie.
    ties: u8,
    /// Results of the rounds played so far.
    history: Vec<RoundResult>,
}

impl Game {
    /// Creates a new game whose deck is shuffled from the given seed.
    ///
    /// The same seed always produces the same deck order.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions};
    ///
    /// let a = Game::new(GameOptions::default(), 42);
    /// let b = Game::new(GameOptions::default(), 42);
    /// assert!(a.deck().cards().eq(b.deck().cards()));
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(options, &mut rng)
    }

    /// Creates a new game whose deck is shuffled with `rng`.
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(options: GameOptions, rng: &mut R) -> Self {
        Self::with_deck(options, Deck::shuffled(rng))
    }

    /// Creates a new game that deals from `deck` in its current order.
    ///
    /// The deck is checked when [`Game::deal`] is called.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck) -> Self {
        let [one, two] = options.player_names.clone();

        Self {
            options,
            deck,
            players: [Player::new(one), Player::new(two)],
            state: GameState::Dealing,
            round: 0,
            ties: 0,
            history: Vec::with_capacity(ROUNDS as usize),
        }
    }

    /// Deals the deck alternately to both players, first player first, until
    /// each holds half of it.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealing state or the deck
    /// is not exactly one of each card. On error no card is dealt.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        self.deck
            .check_complete()
            .inspect_err(|err| warn!("refusing to deal: {err}"))?;

        for pass in 0..ROUNDS {
            for player in &mut self.players {
                player.receive(self.deck.deal()?);
            }
            debug!("dealt pass {}, {} cards left", pass + 1, self.deck.len());
        }

        self.state = GameState::Playing;
        Ok(())
    }

    /// Deals if needed, plays every remaining round, and returns the result.
    ///
    /// # Errors
    ///
    /// Returns an error if dealing or any round fails.
    pub fn play(&mut self) -> Result<GameResult, GameError> {
        if self.state == GameState::Dealing {
            self.deal()?;
        }

        while self.state == GameState::Playing {
            self.play_round()?;
        }

        Ok(self.result()?)
    }

    /// Returns the final result.
    ///
    /// A tie on points is reported as [`GameOutcome::Tie`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not finished.
    pub fn result(&self) -> Result<GameResult, ResultError> {
        if self.state != GameState::Finished {
            return Err(ResultError::InvalidState);
        }

        let [one, two] = &self.players;
        let outcome = match one.points().cmp(&two.points()) {
            core::cmp::Ordering::Greater => GameOutcome::Winner {
                player: 0,
                name: one.name().into(),
                points: one.points(),
            },
            core::cmp::Ordering::Less => GameOutcome::Winner {
                player: 1,
                name: two.name().into(),
                points: two.points(),
            },
            core::cmp::Ordering::Equal => GameOutcome::Tie {
                points: one.points(),
            },
        };

        Ok(GameResult {
            points: [one.points(), two.points()],
            ties: self.ties,
            rounds: self.history.clone(),
            outcome,
        })
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of rounds played so far.
    #[must_use]
    pub const fn round(&self) -> u8 {
        self.round
    }

    /// Returns the number of tied rounds so far.
    #[must_use]
    pub const fn ties(&self) -> u8 {
        self.ties
    }

    /// Returns both players, first player first.
    #[must_use]
    pub const fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player at `index` (0 or 1).
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the undealt deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the results of the rounds played so far.
    #[must_use]
    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }
}
