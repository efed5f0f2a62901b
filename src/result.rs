//! Round and game result types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Outcome of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// One player played the stronger card and scores a point.
    Win {
        /// Index of the winning player (0 or 1).
        player: usize,
        /// Name of the winning player.
        name: String,
    },
    /// Both cards had the same strength. Nobody scores.
    Tie,
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win { name, .. } => write!(f, "{name} wins this round!"),
            Self::Tie => f.write_str("It's a tie!"),
        }
    }
}

/// Result of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The round number, starting at 1.
    pub round: u8,
    /// The cards played by the first and second player.
    pub cards: [Card; 2],
    /// The outcome of the round.
    pub outcome: RoundOutcome,
}

/// Renders the two report lines for the round.
impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Round {}:", self.round)?;
        write!(f, "{}", self.outcome)
    }
}

/// Overall outcome once every round has been played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// One player finished with strictly more points.
    Winner {
        /// Index of the winning player (0 or 1).
        player: usize,
        /// Name of the winning player.
        name: String,
        /// Points earned by the winner.
        points: u8,
    },
    /// Both players finished with the same number of points.
    Tie {
        /// Points earned by each player.
        points: u8,
    },
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner { name, points, .. } => {
                write!(f, "Game over! {name} wins with {points} points!")
            }
            Self::Tie { points } => {
                write!(f, "Game over! It's a tie with {points} points each!")
            }
        }
    }
}

/// Result of an entire game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Points earned by the first and second player.
    pub points: [u8; 2],
    /// Number of tied rounds.
    pub ties: u8,
    /// Every round, in the order played.
    pub rounds: Vec<RoundResult>,
    /// The overall outcome.
    pub outcome: GameOutcome,
}
