//! Error types for engine operations.

use thiserror::Error;

use crate::card::Rank;

/// Errors that can occur while building cards or weight tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// A card must score at least one point.
    #[error("weight for rank {rank:?} must be positive")]
    ZeroWeight {
        /// The rank that was given a zero weight.
        rank: Rank,
    },
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur during participant actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is in progress.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Participant lookup by an out-of-range index.
    #[error("participant index {0} is out of range")]
    InvalidParticipantIndex(usize),
    /// The participant already passed, won or exceeded this round.
    #[error("participant has already finished this round")]
    ParticipantFinished,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// A prearranged deck repeats a card or weights it differently from the
    /// table's weight table.
    #[error("deck does not match the table's cards")]
    ForeignDeck,
    /// The table has no automated participant to advance.
    #[error("no automated participant at the table")]
    NoAutomatedParticipant,
}

impl From<DrawError> for ActionError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::EmptyDeck => Self::EmptyDeck,
        }
    }
}

/// Errors that can occur while resolving winners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No round is in progress.
    #[error("invalid game state for resolving winners")]
    InvalidState,
    /// At least one participant can still act.
    #[error("round is not finished")]
    RoundNotFinished,
    /// No participant holds the dealer role.
    #[error("no dealer at the table")]
    NoDealer,
}
