//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the deck to be dealt to both players.
    Dealing,
    /// Rounds are being played.
    Playing,
    /// Every round has been played and the result can be read.
    Finished,
}
