//! Read-only table views for polling callers.

extern crate alloc;

use alloc::vec::Vec;

use crate::game::{DEALER_SEAT, GameState, PLAYER_SEAT};
use crate::participant::Participant;

/// A copy of the table taken under the engine lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    /// Round state at the time of the snapshot.
    pub state: GameState,
    /// Cards left in the deck.
    pub deck_remaining: usize,
    /// Participants in seat order.
    pub participants: Vec<Participant>,
}

impl TableSnapshot {
    /// The dealer, if a round has been dealt.
    #[must_use]
    pub fn dealer(&self) -> Option<&Participant> {
        self.participants.get(DEALER_SEAT)
    }

    /// The human-controlled participant, if a round has been dealt.
    #[must_use]
    pub fn player(&self) -> Option<&Participant> {
        self.participants.get(PLAYER_SEAT)
    }

    /// Participants marked as winners, in seat order.
    pub fn winners(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|participant| participant.has_won())
    }
}
