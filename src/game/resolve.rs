extern crate alloc;

use alloc::vec::Vec;

use crate::error::ResolveError;
use crate::participant::Participant;

use super::{Game, GameState, Table};

impl Table {
    fn resolve(&mut self) -> Result<(), ResolveError> {
        if self.state != GameState::InProgress {
            return Err(ResolveError::InvalidState);
        }
        if !self.is_finished() {
            return Err(ResolveError::RoundNotFinished);
        }

        let dealer_index = self
            .participants
            .iter()
            .position(Participant::is_dealer)
            .ok_or(ResolveError::NoDealer)?;
        let dealer = &self.participants[dealer_index];
        let dealer_score = dealer.score();
        let dealer_exceeded = dealer.is_bust();

        let mut dealer_beat_someone = false;
        for participant in &mut self.participants {
            if participant.is_dealer() || participant.has_won() || participant.is_bust() {
                continue;
            }

            if dealer_exceeded || participant.score() > dealer_score {
                participant.set_win(true);
            } else if dealer_score > participant.score() {
                dealer_beat_someone = true;
            }
            // Equal scores: nobody is marked.
        }

        if dealer_beat_someone {
            self.participants[dealer_index].set_win(true);
        }

        self.state = GameState::Finished;
        Ok(())
    }
}

impl Game {
    /// Returns whether every participant has passed, won or exceeded.
    pub fn is_round_finished(&self) -> bool {
        self.table.lock().is_finished()
    }

    /// Compares every non-dealer participant still in play against the
    /// dealer and marks the winners, then finishes the round.
    ///
    /// A participant beats the dealer with a higher score or when the dealer
    /// exceeded. The dealer wins against a lower score. Equal scores mark
    /// nobody.
    ///
    /// Returns the winners in seat order.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, some participant can
    /// still act, or no participant holds the dealer role.
    pub fn resolve_winners(&self) -> Result<Vec<Participant>, ResolveError> {
        let mut table = self.table.lock();
        table.resolve()?;

        let winners = table.winners();
        tracing::info!(
            winners = winners.len(),
            remaining = table.deck.len(),
            "round resolved"
        );

        Ok(winners)
    }

    /// Returns every participant marked as a winner, in seat order.
    pub fn winners(&self) -> Vec<Participant> {
        self.table.lock().winners()
    }

    /// Returns the number of winners.
    pub fn winners_count(&self) -> usize {
        self.table
            .lock()
            .participants
            .iter()
            .filter(|participant| participant.has_won())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit, WeightTable};
    use crate::deck::Deck;

    fn table_without_dealer() -> Table {
        let mut player = Participant::human("Player");
        player.set_pass(true);
        let mut computer = Participant::automated("Computer 1", false);
        computer.set_pass(true);

        Table {
            deck: Deck::from_cards(Vec::new()),
            participants: alloc::vec![computer, player],
            state: GameState::InProgress,
            computer_seq: 1,
            running: true,
        }
    }

    #[test]
    fn unflagged_bust_never_wins() {
        let weights = WeightTable::default();
        let mut dealer = Participant::automated("Computer 1", true);
        dealer.receive_card(weights.card(Suit::Hearts, Rank::Ten));
        dealer.receive_card(weights.card(Suit::Clubs, Rank::Eight));
        dealer.set_pass(true);

        let mut player = Participant::human("Player");
        for rank in [Rank::Ten, Rank::Ace, Rank::Nine] {
            player.receive_card(weights.card(Suit::Spades, rank));
        }
        player.set_pass(true);

        let mut table = Table {
            deck: Deck::from_cards(Vec::new()),
            participants: alloc::vec![dealer, player],
            state: GameState::InProgress,
            computer_seq: 1,
            running: true,
        };
        table.resolve().unwrap();

        assert!(table.winners().is_empty());
        assert_eq!(table.state, GameState::Finished);
    }

    #[test]
    fn resolve_requires_a_dealer() {
        let mut table = table_without_dealer();
        assert_eq!(table.resolve().unwrap_err(), ResolveError::NoDealer);
        assert_eq!(table.state, GameState::InProgress);
    }
}
