//! The 52-card deck.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// An ordered deck of cards. Cards are dealt from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an unshuffled deck with one card per suit and rank.
    ///
    /// Cards are ordered suit-major (Hearts, Diamonds, Clubs, Spades) and
    /// rank-minor (Two through Ace).
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a standard deck and shuffles it with the given random source.
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use warrs::{DECK_SIZE, Deck};
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::shuffled(&mut rng);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck holding `cards` in the given order. The first card is
    /// dealt first.
    ///
    /// No check is made that the cards form a complete deck; see
    /// [`Deck::check_complete`].
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Shuffles the deck in place (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let cards = self.cards.make_contiguous();
        for i in (1..cards.len()).rev() {
            let j = rng.random_range(0..=i);
            cards.swap(i, j);
        }
    }

    /// Removes and returns the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        self.cards.pop_front().ok_or(DealError::EmptyDeck)
    }

    /// Checks that the deck holds every card exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if cards are missing,
    /// [`DealError::ExtraCards`] if there are too many, and
    /// [`DealError::DuplicateCard`] for the first repeated card.
    pub fn check_complete(&self) -> Result<(), DealError> {
        if self.cards.len() < DECK_SIZE {
            return Err(DealError::EmptyDeck);
        }
        if self.cards.len() > DECK_SIZE {
            return Err(DealError::ExtraCards);
        }

        let mut seen = [false; DECK_SIZE];
        for &card in &self.cards {
            let slot = card.suit as usize * Rank::ALL.len() + card.rank as usize;
            if core::mem::replace(&mut seen[slot], true) {
                return Err(DealError::DuplicateCard(card));
            }
        }

        Ok(())
    }

    /// Returns the cards still in the deck, front first.
    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
