//! Table configuration options.

extern crate alloc;

use alloc::string::String;

use crate::card::WeightTable;

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::{GameOptions, Rank, WeightTable};
///
/// let weights = WeightTable::default().with_weight(Rank::Ace, 10).unwrap();
/// let options = GameOptions::default()
///     .with_player_name("Alice")
///     .with_computer_name("Bot")
///     .with_weights(weights);
/// assert_eq!(options.player_name, "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Name of the human-controlled participant.
    pub player_name: String,
    /// Name prefix for automated participants, followed by their number.
    pub computer_name: String,
    /// Points assigned to each rank when the deck is built.
    pub weights: WeightTable,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_name: String::from("Player"),
            computer_name: String::from("Computer"),
            weights: WeightTable::default(),
        }
    }
}

impl GameOptions {
    /// Sets the name of the human-controlled participant.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_name("Bob");
    /// assert_eq!(options.player_name, "Bob");
    /// ```
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Sets the name prefix for automated participants.
    #[must_use]
    pub fn with_computer_name(mut self, name: impl Into<String>) -> Self {
        self.computer_name = name.into();
        self
    }

    /// Sets the per-rank weight table.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{GameOptions, WeightTable};
    ///
    /// let weights = WeightTable::new([6, 7, 8, 9, 10, 10, 10, 10, 11]).unwrap();
    /// let options = GameOptions::default().with_weights(weights);
    /// assert_eq!(options.weights.bounds().min, 6);
    /// ```
    #[must_use]
    pub fn with_weights(mut self, weights: WeightTable) -> Self {
        self.weights = weights;
        self
    }
}
