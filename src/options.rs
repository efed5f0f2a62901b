//! Game configuration options.

use alloc::string::String;

/// Configuration options for a game of War.
///
/// Deck composition and round count are fixed; only the players' names can
/// be changed.
///
/// ```
/// use warrs::GameOptions;
///
/// let options = GameOptions::default().with_player_names("Alice", "Bob");
/// assert_eq!(options.player_names[0], "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Names of the first and second player.
    pub player_names: [String; 2],
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_names: [String::from("Player 1"), String::from("Player 2")],
        }
    }
}

impl GameOptions {
    /// Sets the names of both players, first player first.
    #[must_use]
    pub fn with_player_names(mut self, one: impl Into<String>, two: impl Into<String>) -> Self {
        self.player_names = [one.into(), two.into()];
        self
    }
}
