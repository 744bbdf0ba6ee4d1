//! Round state types.

use crate::card::Card;
use crate::policy::TurnStatement;

/// Seat of the automated dealer.
pub const DEALER_SEAT: usize = 0;

/// Seat of the human-controlled participant.
pub const PLAYER_SEAT: usize = 1;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No round has been dealt yet.
    #[default]
    NotStarted,
    /// Cards are being drawn.
    InProgress,
    /// Winners have been resolved.
    Finished,
}

/// What a single automated step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The policy asked for a card and one was drawn.
    Drew {
        /// Seat of the participant that drew.
        index: usize,
        /// The card drawn.
        card: Card,
    },
    /// The participant did not draw; `statement` is why.
    Settled {
        /// Seat of the evaluated participant.
        index: usize,
        /// Result of the evaluation.
        statement: TurnStatement,
    },
}

impl Tick {
    /// Returns whether the scheduler driving the automated turn can stop.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Settled { .. })
    }
}
