//! Player state: name, hand, and points.

use alloc::collections::VecDeque;
use alloc::string::String;

use crate::card::Card;
use crate::error::PlayError;

/// A player at the table.
///
/// Received cards go to the front of the hand; cards are played from the
/// back, so the card held longest is always played next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name.
    name: String,
    /// Cards in the hand, most recently received first.
    hand: VecDeque<Card>,
    /// Rounds won.
    points: u8,
}

impl Player {
    /// Creates a player with an empty hand and no points.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: VecDeque::new(),
            points: 0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in the hand, most recently received first.
    pub fn hand(&self) -> impl ExactSizeIterator<Item = &Card> + '_ {
        self.hand.iter()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Returns the number of points earned.
    #[must_use]
    pub const fn points(&self) -> u8 {
        self.points
    }

    /// Adds a card to the front of the hand.
    pub fn receive(&mut self, card: Card) {
        self.hand.push_front(card);
    }

    /// Removes and returns the card at the back of the hand.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::EmptyHand`] if the hand is empty.
    pub fn play_top(&mut self) -> Result<Card, PlayError> {
        self.hand.pop_back().ok_or(PlayError::EmptyHand)
    }

    pub(crate) const fn award_point(&mut self) {
        self.points += 1;
    }
}
