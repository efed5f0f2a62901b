use core::cmp::Ordering;

use log::{debug, info};

use crate::error::PlayError;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState, ROUNDS};

impl Game {
    /// Plays one round.
    ///
    /// Each player plays the card they have held longest, first player
    /// first. The stronger card scores a point for its owner; equal cards
    /// score nothing. After the last round the game is finished.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the playing state or a player
    /// has no card to play.
    pub fn play_round(&mut self) -> Result<RoundResult, PlayError> {
        if self.state != GameState::Playing {
            return Err(PlayError::InvalidState);
        }

        let [one, two] = &mut self.players;
        let cards = [one.play_top()?, two.play_top()?];
        self.round += 1;
        debug!(
            "round {}: {} plays {}, {} plays {}",
            self.round,
            one.name(),
            cards[0],
            two.name(),
            cards[1]
        );

        let outcome = match cards[0].value().cmp(&cards[1].value()) {
            Ordering::Greater => {
                one.award_point();
                RoundOutcome::Win {
                    player: 0,
                    name: one.name().into(),
                }
            }
            Ordering::Less => {
                two.award_point();
                RoundOutcome::Win {
                    player: 1,
                    name: two.name().into(),
                }
            }
            Ordering::Equal => {
                self.ties += 1;
                RoundOutcome::Tie
            }
        };
        info!("round {}: {outcome}", self.round);

        if self.round == ROUNDS {
            self.state = GameState::Finished;
            info!(
                "game finished: {} {} - {} {} ({} ties)",
                one.name(),
                one.points(),
                two.points(),
                two.name(),
                self.ties
            );
        }

        let result = RoundResult {
            round: self.round,
            cards,
            outcome,
        };
        self.history.push(result.clone());

        Ok(result)
    }
}
